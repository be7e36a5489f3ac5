//! Entity assemblers, one module per output shape.
//!
//! Each assembler is a single pass over one parsed document. Missing
//! optional structure gives `None` or an empty `Vec`; deciding that a whole
//! resource is missing is left to the caller.

pub mod cards;
pub mod chapters;
pub mod detail;
pub mod home;
