//! # Reorder Core
//!
//! Drag-to-reorder engine for vertical lists of cards.
//!
//! The crate owns the gesture state machine, the overlap-based swap
//! algorithm and the persisted display order. Rendering stays outside: a
//! renderer reports item boxes through [`Layout`], applies the
//! [`VisualState`] the engine produces, and redraws from
//! [`DragEngine::working_order`].

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::ReorderConfig;
pub use domain::{Item, ItemId, Order};
pub use engine::{
    layout::{Layout, LayoutSnapshot, StackLayout},
    pointer::{PointerButtons, PointerEvent},
    session::{DragSession, NeighborShift},
    visual::{ItemVisual, Placeholder, VisualState},
    DragEngine, DragOutcome, DragState,
};
pub use error::{ReorderError, Result};
pub use storage::Storage;
pub use store::{OrderStore, Persistence};
