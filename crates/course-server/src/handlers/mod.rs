//! HTTP handlers

pub mod courses;
pub mod health;

pub use health::health;
