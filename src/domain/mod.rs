pub mod item;
pub mod order;

pub use item::{Item, ItemId};
pub use order::Order;
