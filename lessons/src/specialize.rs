//! Method resolution across a base trait and four variants.
//!
//! [`Super`] supplies a default `method` and a `delegate` that forwards to
//! `action`. `action` is optional: the default reports
//! [`LessonError::MissingCapability`], and only [`Provider`] overrides it.

use std::io::Write;

use tracing::{debug, info};

use crate::error::{LessonError, Result};
use crate::variant::Variant;

pub trait Super {
    /// Type name printed by the demo driver.
    fn name(&self) -> &'static str;

    fn method(&self, out: &mut dyn Write) -> Result<()> {
        super_method(out)
    }

    /// Optional capability required by [`Super::delegate`].
    ///
    /// Variants that do not override this fail without writing anything.
    fn action(&self, _out: &mut dyn Write) -> Result<()> {
        Err(LessonError::MissingCapability {
            variant: self.name(),
            capability: "action",
        })
    }

    fn delegate(&self, out: &mut dyn Write) -> Result<()> {
        self.action(out)
    }
}

/// The base `method`, callable explicitly by overrides that extend it.
pub fn super_method(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "In Super.method")?;
    Ok(())
}

/// Inherits everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inheritor;

impl Super for Inheritor {
    fn name(&self) -> &'static str {
        Variant::Inheritor.type_name()
    }
}

/// Replaces `method` outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct Replacer;

impl Super for Replacer {
    fn name(&self) -> &'static str {
        Variant::Replacer.type_name()
    }

    fn method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "in Replacer.method")?;
        Ok(())
    }
}

/// Wraps the base `method`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extender;

impl Super for Extender {
    fn name(&self) -> &'static str {
        Variant::Extender.type_name()
    }

    fn method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "starting Extender.method")?;
        super_method(out)?;
        writeln!(out, "ending Extender.method")?;
        Ok(())
    }
}

/// Fills in `action`, so `delegate` succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Provider;

impl Super for Provider {
    fn name(&self) -> &'static str {
        Variant::Provider.type_name()
    }

    fn action(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "in Provider.action")?;
        Ok(())
    }
}

/// Build a fresh instance of `variant`.
pub fn instantiate(variant: Variant) -> Box<dyn Super> {
    match variant {
        Variant::Inheritor => Box::new(Inheritor),
        Variant::Replacer => Box::new(Replacer),
        Variant::Extender => Box::new(Extender),
        Variant::Provider => Box::new(Provider),
    }
}

/// Invoke `delegate` on a fresh instance of `variant`.
pub fn delegate_for(variant: Variant, out: &mut dyn Write) -> Result<()> {
    let instance = instantiate(variant);
    debug!(variant = instance.name(), "delegating");
    instance.delegate(out)
}

/// `method` on each method-bearing variant, then `delegate` on a provider.
pub fn run(out: &mut dyn Write) -> Result<()> {
    for variant in Variant::METHOD_BEARING {
        let instance = instantiate(variant);
        info!(variant = instance.name(), "calling method");
        writeln!(out, "\n{}...", instance.name())?;
        instance.method(out)?;
    }

    writeln!(out, "\nProvider...")?;
    Provider.delegate(out)
}
