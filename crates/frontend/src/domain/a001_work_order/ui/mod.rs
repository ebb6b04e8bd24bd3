pub mod details;
pub mod form;
pub mod kanban;

pub use details::WorkOrderDetails;
pub use form::WorkOrderForm;
pub use kanban::KanbanBoard;
