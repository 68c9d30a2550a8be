//! Small demonstrations of binding scope and method overriding.
//!
//! - **[`scope`]**: a closure rebinding its enclosing function's local, next to
//!   a routine writing an explicitly owned process-wide binding.
//! - **[`specialize`]**: a base trait with default methods and four variants
//!   that inherit, replace, extend, or supply a missing capability.
//!
//! Both demos write to a caller-supplied sink so the CLI can point them at
//! stdout and tests at a buffer.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod scope;
pub mod specialize;
#[cfg(test)]
mod test_support;
pub mod variant;
