//! The canonical order and its durability.
//!
//! [`OrderStore`] is the only owner of the committed [`Order`]. Loading never
//! fails: an absent or malformed record falls back to the supplied catalog.
//! Committing always replaces the in-memory order, and persistence is best
//! effort.

use crate::{domain::Order, storage::Storage};
use tracing::{info, warn};

/// Whether a commit reached durable storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Persisted,
    InMemoryOnly,
}

impl Persistence {
    pub fn is_persisted(self) -> bool {
        self == Self::Persisted
    }
}

pub struct OrderStore<S: Storage> {
    storage: S,
    order: Order,
}

impl<S: Storage> OrderStore<S> {
    /// Loads the persisted order, or keeps `default_order` when there is none
    /// or it cannot be read.
    pub async fn load(storage: S, default_order: Order) -> Self {
        let order = match storage.load_order().await {
            Ok(Some(order)) => {
                info!(items = order.len(), "restored persisted order");
                order
            }
            Ok(None) => default_order,
            Err(err) => {
                warn!(error = %err, "persisted order unreadable, using default");
                default_order
            }
        };

        Self { storage, order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the canonical order and writes it through to storage
    pub async fn commit(&mut self, new_order: Order) -> Persistence {
        self.order = new_order;

        match self.storage.save_order(&self.order).await {
            Ok(()) => {
                info!(items = self.order.len(), "committed order");
                Persistence::Persisted
            }
            Err(err) => {
                warn!(error = %err, "failed to persist order; keeping it in memory");
                Persistence::InMemoryOnly
            }
        }
    }

    /// Drops the persisted record and restores `default_order`
    pub async fn reset(&mut self, default_order: Order) -> Persistence {
        self.order = default_order;

        match self.storage.clear_order().await {
            Ok(()) => Persistence::Persisted,
            Err(err) => {
                warn!(error = %err, "failed to clear persisted order");
                Persistence::InMemoryOnly
            }
        }
    }
}
