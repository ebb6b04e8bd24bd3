pub mod aggregate;

pub use aggregate::{ProductionEntry, ProductionEntryId};
