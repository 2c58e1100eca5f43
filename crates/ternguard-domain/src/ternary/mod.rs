//! Line-break policy for conditional (ternary) expressions.
//!
//! - [`boundary`] resolves the paren-inclusive extent of an operand
//! - [`evaluate`] decides one operand boundary under a [`TernaryStyle`]
//! - [`walk`] visits every conditional of a file and sorts the diagnostics
//!
//! [`TernaryStyle`]: crate::policy::TernaryStyle

pub mod boundary;
pub mod evaluate;
pub mod walk;

#[cfg(test)]
mod corpus;

pub use boundary::{first_line, last_line, outer_extent};
pub use evaluate::{decide, evaluate, Boundary, DiagnosticKind, TernaryDiagnostic};
pub use walk::{analyze, analyze_nodes, sort_diagnostics};
