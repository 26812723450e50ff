pub mod config;
pub mod day;
pub mod layout;
