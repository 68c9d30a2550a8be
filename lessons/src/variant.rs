//! Names of the `Super` variants, as accepted on the command line.

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Inheritor,
    Replacer,
    Extender,
    Provider,
}

impl Variant {
    /// Variants that carry their own `method` story, in demo order.
    pub const METHOD_BEARING: [Variant; 3] =
        [Variant::Inheritor, Variant::Replacer, Variant::Extender];

    pub fn type_name(self) -> &'static str {
        match self {
            Variant::Inheritor => "Inheritor",
            Variant::Replacer => "Replacer",
            Variant::Extender => "Extender",
            Variant::Provider => "Provider",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
