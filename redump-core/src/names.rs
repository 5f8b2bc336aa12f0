//! Shared name lookup for the classification enums.
//!
//! Every closed vocabulary in this crate (systems, media, regions, languages,
//! site codes, ...) exposes the same shape: a long human-readable name, an
//! optional short code, and case-insensitive parsing back from either. The
//! per-value tables are plain `match` expressions in each module; this trait
//! only supplies the reverse lookup on top of them.

/// Error returned when a string matches no value of a classification enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{input}'")]
pub struct ParseError {
    /// Which vocabulary was being parsed (e.g. "system", "region").
    pub kind: &'static str,
    /// The rejected input, verbatim.
    pub input: String,
}

impl ParseError {
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// A closed enumeration with authored display metadata.
pub trait HumanReadable: Copy + PartialEq + Sized + 'static {
    /// Vocabulary name used in parse errors.
    const KIND: &'static str;

    /// Every value, in declaration order.
    fn all() -> &'static [Self];

    /// Full display name, or `None` when no metadata was authored.
    fn long_name(&self) -> Option<&'static str>;

    /// Short code, or `None` when the vocabulary (or value) has none.
    fn short_name(&self) -> Option<&'static str> {
        None
    }

    /// Resolve a value from its long name or short code.
    ///
    /// Matching ignores ASCII/Unicode case and all whitespace, so
    /// `"Disc Based Console"`, `"DiscBasedConsole"` and `"disc based console"`
    /// resolve identically. Long names are tried before short codes.
    fn from_name(name: &str) -> Option<Self> {
        let wanted = squash(name);
        if wanted.is_empty() {
            return None;
        }

        let all = Self::all();
        all.iter()
            .copied()
            .find(|value| value.long_name().is_some_and(|long| squash(long) == wanted))
            .or_else(|| {
                all.iter().copied().find(|value| {
                    value
                        .short_name()
                        .is_some_and(|short| squash(short) == wanted)
                })
            })
    }
}

/// Lowercase and drop all whitespace.
pub(crate) fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Implement `FromStr` and `Display` for a [`HumanReadable`] enum.
///
/// `Display` writes the long name, falling back to the variant identifier for
/// values without authored metadata.
macro_rules! human_readable_str {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = $crate::names::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::names::HumanReadable>::from_name(s).ok_or_else(|| {
                    $crate::names::ParseError::new(<$ty as $crate::names::HumanReadable>::KIND, s)
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match $crate::names::HumanReadable::long_name(self) {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{:?}", self),
                }
            }
        }
    };
}

pub(crate) use human_readable_str;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_strips_whitespace_and_case() {
        assert_eq!(squash("Disc Based Console"), "discbasedconsole");
        assert_eq!(squash("  USA, Europe "), "usa,europe");
        assert_eq!(squash("\t"), "");
    }

    #[test]
    fn parse_error_message_names_the_vocabulary() {
        let err = ParseError::new("region", "Atlantis");
        assert_eq!(err.to_string(), "unknown region: 'Atlantis'");
    }
}
