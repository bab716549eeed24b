//! Display driver implementations

pub mod pt6961;

pub use pt6961::Pt6961;
