pub mod global_context;
pub mod modal_service;
pub mod shell;

pub use global_context::{AppGlobalContext, AppTab};
pub use modal_service::{ModalContent, ModalHost, ModalService};
pub use shell::Shell;
