//! Drag session engine.
//!
//! [`DragEngine`] runs a two-state machine over pointer input:
//!
//! - `Idle --drag_start--> Dragging` on a primary-button press over an item of
//!   a list with at least two measurable items.
//! - `Dragging --drag_move--> Dragging` translates the lifted item and swaps
//!   it past neighbors whose midline it crosses.
//! - `Dragging --drag_end--> Idle` clears all visual state and commits the
//!   working order to the [`OrderStore`].
//! - `Dragging --cancel--> Idle` clears all visual state and discards the
//!   working order.
//!
//! Move and end handling only exists while a [`DragSession`] is alive; in
//! `Idle` they are no-ops. A press while already dragging is ignored.

pub mod layout;
pub mod overlap;
pub mod pointer;
pub mod session;
pub mod visual;

use crate::{
    config::ReorderConfig,
    domain::Order,
    storage::Storage,
    store::{OrderStore, Persistence},
};
use layout::{Layout, LayoutSnapshot};
use pointer::PointerEvent;
use session::{DragSession, NeighborShift};
use tracing::debug;
use visual::VisualState;

/// Gesture state
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub origin_index: usize,
    pub final_index: usize,
    pub changed: bool,
    pub persistence: Persistence,
}

pub struct DragEngine<S: Storage> {
    store: OrderStore<S>,
    state: DragState,
    config: ReorderConfig,
}

impl<S: Storage> DragEngine<S> {
    pub fn new(store: OrderStore<S>, config: ReorderConfig) -> Self {
        Self {
            store,
            state: DragState::Idle,
            config,
        }
    }

    /// Loads the order store from `storage` and wraps it in an engine
    pub async fn load(storage: S, default_order: Order, config: ReorderConfig) -> Self {
        let store = OrderStore::load(storage, default_order).await;
        Self::new(store, config)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Render index of the item being dragged, if any
    pub fn drag_index(&self) -> Option<usize> {
        self.session().map(DragSession::origin_index)
    }

    /// Provisional index of the dragged item in the working order
    pub fn current_index(&self) -> Option<usize> {
        self.session().map(DragSession::current_index)
    }

    /// The committed order
    pub fn order(&self) -> &Order {
        self.store.order()
    }

    /// The order to render: the working copy while dragging, else the
    /// committed order.
    pub fn working_order(&self) -> &Order {
        match &self.state {
            DragState::Dragging(session) => session.working_order(),
            DragState::Idle => self.store.order(),
        }
    }

    pub fn store(&self) -> &OrderStore<S> {
        &self.store
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Styling the renderer should apply right now
    pub fn visual_state(&self) -> VisualState {
        match &self.state {
            DragState::Dragging(session) => session.visual_state(self.config.lifted_z_index),
            DragState::Idle => VisualState::at_rest(self.store.order().len()),
        }
    }

    /// Pointer-down on the item rendered at `index`.
    ///
    /// Returns `true` when a session started. Non-primary presses, presses
    /// while already dragging, out-of-range indices and layouts with fewer
    /// than two measurable items leave the engine untouched.
    pub fn drag_start<L>(&mut self, event: &PointerEvent, index: usize, layout: &L) -> bool
    where
        L: Layout + ?Sized,
    {
        if self.is_dragging() {
            debug!(index, "pointer-down ignored, drag already active");
            return false;
        }
        if !event.is_primary_only() {
            debug!(buttons = ?event.buttons, "pointer-down ignored, not primary button");
            return false;
        }
        if index >= self.store.order().len() {
            return false;
        }
        let Some(snapshot) = LayoutSnapshot::capture(layout) else {
            debug!(index, "pointer-down ignored, layout not measurable");
            return false;
        };
        let Some(session) =
            DragSession::begin(self.store.order(), index, event.position, snapshot)
        else {
            return false;
        };

        debug!(index, item = %session.grabbed(), "drag started");
        self.state = DragState::Dragging(session);
        true
    }

    /// Pointer-move during a drag. Returns the neighbors that changed
    /// displacement; empty when idle.
    pub fn drag_move(&mut self, event: &PointerEvent) -> Vec<NeighborShift> {
        match &mut self.state {
            DragState::Dragging(session) => session.pointer_moved(event.position),
            DragState::Idle => Vec::new(),
        }
    }

    /// Pointer-up: ends the session and commits the working order.
    ///
    /// Returns `None` when no drag was active.
    pub async fn drag_end(&mut self) -> Option<DragOutcome> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        let origin_index = session.origin_index();
        let final_index = session.current_index();
        let new_order = session.into_working_order();
        let changed = new_order != *self.store.order();

        let persistence = self.store.commit(new_order).await;
        debug!(origin_index, final_index, changed, "drag ended");

        Some(DragOutcome {
            origin_index,
            final_index,
            changed,
            persistence,
        })
    }

    /// Aborts the drag without committing. Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                debug!(index = session.origin_index(), "drag cancelled");
                true
            }
            DragState::Idle => false,
        }
    }
}
