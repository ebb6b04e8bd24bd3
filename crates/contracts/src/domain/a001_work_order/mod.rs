pub mod aggregate;
pub mod suggestions;

pub use aggregate::{WorkOrder, WorkOrderDto, WorkOrderId, REQUIRED_FIELDS_MESSAGE};
pub use suggestions::{suggestions_for, Suggestion};
