//! Enclosing-scope rebinding vs. process-wide assignment.
//!
//! A nested routine can only write to a binding it was explicitly handed.
//! [`outer`] hands its closure a mutable borrow of its own local, and
//! [`go_global`] writes into a [`Globals`] owned by whoever drives the demo.

use std::io::Write;

use tracing::debug;

use crate::error::{LessonError, Result};

const OLD: &str = "old";
const NONLOCAL: &str = "somewhat nonlocal";
const NEW: &str = "new";

/// Bindings visible to the whole demo once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Globals {
    pub y: Option<String>,
}

impl Globals {
    /// Read `y`, failing if [`go_global`] has not run yet.
    pub fn y(&self) -> Result<&str> {
        self.y.as_deref().ok_or(LessonError::Unset { name: "y" })
    }
}

/// Rebind a local from inside a nested closure and return the local.
///
/// Always returns `"somewhat nonlocal"`.
pub fn outer() -> String {
    let mut x = OLD.to_string();
    let mut changer = || {
        x = NONLOCAL.to_string();
        0
    };
    let status = changer();
    debug!(status, "changer returned");
    x
}

/// Assign `y` in `globals`. Returns a sentinel `0`.
pub fn go_global(globals: &mut Globals) -> i32 {
    globals.y = Some(NEW.to_string());
    0
}

/// Global assignment first, then the enclosing-scope rebind.
pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut globals = Globals::default();

    writeln!(out, "to test the global names")?;
    writeln!(out, "{}", go_global(&mut globals))?;
    writeln!(out, "{}", globals.y()?)?;

    writeln!(out, "\nTo test the non local names")?;
    writeln!(out, "{}", outer())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture;

    #[test]
    fn outer_returns_rebound_value() {
        assert_eq!(outer(), "somewhat nonlocal");
    }

    #[test]
    fn y_is_unset_until_go_global_runs() {
        let mut globals = Globals::default();
        assert_eq!(globals.y, None);
        assert!(matches!(
            globals.y(),
            Err(LessonError::Unset { name: "y" })
        ));

        assert_eq!(go_global(&mut globals), 0);
        assert_eq!(globals.y().expect("y"), "new");
    }

    #[test]
    fn go_global_is_stable_across_calls() {
        let mut globals = Globals::default();
        go_global(&mut globals);
        go_global(&mut globals);
        assert_eq!(globals.y.as_deref(), Some("new"));
    }

    #[test]
    fn run_prints_global_then_nonlocal() {
        let output = capture(run).expect("run");
        assert_eq!(
            output,
            "to test the global names\n0\nnew\n\nTo test the non local names\nsomewhat nonlocal\n"
        );
    }
}
