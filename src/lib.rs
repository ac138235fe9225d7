pub mod books;
pub mod catalog;
pub mod core;
pub mod lending;
pub mod notification;
pub mod utils;
