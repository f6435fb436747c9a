//! Configuration for kwgit.
//!
//! Settings come from an optional `.kwgit.yaml` at the repository root,
//! with the protected branch list overridable through
//! `KWGIT_PROTECTED_BRANCHES`. Unknown YAML keys are ignored.

mod model;
mod operations;
pub mod types;


pub use model::Config;
