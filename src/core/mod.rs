//! Core traits and the validated problem shape.

pub mod shape;
pub mod traits;

pub use shape::Shape;
pub use traits::Axpy;
