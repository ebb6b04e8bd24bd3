pub mod service_type;
pub mod urgency;
pub mod work_order_status;

pub use service_type::ServiceType;
pub use urgency::Urgency;
pub use work_order_status::WorkOrderStatus;
