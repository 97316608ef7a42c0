//! Random byte source abstraction
//!
//! Every entropy tier in [`crate::os`] implements [`RandomSource`], which is
//! also the seam used to inject deterministic or failing sources when
//! exercising the substitution engine.

mod source;

pub use source::RandomSource;
