pub mod direction;
pub mod log_entry;
pub mod month;
pub mod record;
pub mod shift;
