//! Emitters for the generated Unicode data artifacts.
//!
//! The generator produces a pair of sibling C++ sources: a header declaring the enums and record
//! layouts, and an implementation holding the statically initialized tables plus the lookup
//! entry points. Both are rendered through a small [`SourceGenerator`] template facility and are
//! byte-for-byte deterministic for a given set of inputs.

mod generator;
mod header;
mod implementation;

pub use generator::SourceGenerator;
pub use header::generate_header;
pub use implementation::generate_implementation;
