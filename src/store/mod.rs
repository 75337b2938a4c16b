//! In-memory project store with snapshot notification.
//!
//! # Modules
//!
//! - [`project_store`]: The store itself (add, move, subscribe)
//! - [`observers`]: Subscription registry delivering snapshots in order

pub mod observers;
pub mod project_store;

pub use observers::{Observer, ObserverRegistry, SubscriptionId};
pub use project_store::ProjectStore;
