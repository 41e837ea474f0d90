pub mod log_view;
pub mod messages;
pub mod report;
