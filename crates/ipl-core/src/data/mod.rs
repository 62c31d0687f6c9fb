// Match and delivery tables: record types, loading, and the once-only store.

pub mod loader;
pub mod name;
pub mod records;
pub mod store;

pub use name::{Interner, Name};
pub use records::{DeliveryRecord, MatchRecord, Tables, NO_RESULT, UNKNOWN};
pub use store::DataStore;
