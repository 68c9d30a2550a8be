//! Stable exit codes for lessons CLI commands.

/// Demo ran to completion.
pub const OK: i32 = 0;
/// Demo failed for any reason other than a missing capability.
pub const FAILURE: i32 = 1;
/// `lessons delegate` was pointed at a variant that lacks `action`.
pub const MISSING_CAPABILITY: i32 = 2;
