//! # Application Layer
//!
//! Use cases and the trait seams they depend on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
