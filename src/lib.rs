pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod startup;
