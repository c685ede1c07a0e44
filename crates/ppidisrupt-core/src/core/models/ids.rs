use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Opaque protein identifier, typically a UniProt accession.
    ProteinId
}

string_id! {
    /// Reference variant identifier in dbSNP style (e.g. `rs121913529`).
    MutationId
}

impl MutationId {
    pub const PREFIX: &'static str = "rs";

    /// Accepts a raw input line if, once trimmed, it carries the dbSNP prefix.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        trimmed
            .starts_with(Self::PREFIX)
            .then(|| Self(trimmed.to_string()))
    }
}
