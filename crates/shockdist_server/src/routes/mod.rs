pub mod distribution;

pub use distribution::distribution_routes;
