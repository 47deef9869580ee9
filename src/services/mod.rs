// Service layer exports
pub mod notifier;
pub mod store;

pub use notifier::{HttpNotifier, MatchAlert, NotificationDispatcher, NotifyError};
pub use store::{HttpItemStore, ItemStore, StoreError};
