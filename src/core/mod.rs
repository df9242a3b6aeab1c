pub mod catalog;
pub mod cli;
pub mod context;
pub mod models;
pub mod template;
pub mod types;
