pub mod catalog;
pub mod repositories;
pub mod time;
