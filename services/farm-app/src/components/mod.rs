pub mod auth;
pub mod batch_list;
pub mod dashboard;
pub mod modals;
pub mod status_message;
