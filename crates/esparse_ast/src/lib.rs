//! esparse_ast: syntax tree definitions for ECMAScript.
//!
//! Defines the `SyntaxKind` enum, token and feature flags, the closed set of
//! tree node types, and a visitor over them.

pub mod generated;
pub mod node;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
