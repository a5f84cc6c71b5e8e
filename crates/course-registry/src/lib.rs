//! Course Registry - a collection of course records behind five operations
//!
//! The registry owns the course collection and exposes list/get/create/
//! update/delete. Two backends implement it: an in-process map (transient)
//! and embedded SQLite (durable). HTTP concerns live in `course-server`.

pub mod course;
pub mod db;
pub mod error;
pub mod memory;
pub mod registry;

pub use course::{Course, CourseUpdate, NewCourse};
pub use db::SqliteRegistry;
pub use error::{RegistryError, Result};
pub use memory::MemoryRegistry;
pub use registry::CourseRegistry;
