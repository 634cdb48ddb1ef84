//! HTTP routes

pub mod books;
pub mod health;
pub mod root;
