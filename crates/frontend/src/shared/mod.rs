pub mod components;
pub mod config;
pub mod data;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod notifications;
