pub mod distribution_handlers;

pub use distribution_handlers::*;
