// Library root for the IPL dataset layer: configuration, record types, the
// CSV loader/normalizer and the memoized data store.

pub mod config;
pub mod data;
pub mod error;

pub use data::{DataStore, DeliveryRecord, MatchRecord, Name, Tables};
pub use error::LoadError;
