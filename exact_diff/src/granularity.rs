use core::fmt::{self, Display};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unit of comparison for [`compute_exact_diff`](crate::compute_exact_diff).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Word,
    Character,
}

impl Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// Error returned when parsing a [`Granularity`] from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown granularity '{0}', expected 'word' or 'character'")]
pub struct ParseGranularityError(String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Self::Word),
            "character" => Ok(Self::Character),
            other => Err(ParseGranularityError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_and_display_are_inverses() {
        for granularity in [Granularity::Word, Granularity::Character] {
            assert_eq!(granularity.to_string().parse(), Ok(granularity));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("line".parse::<Granularity>().is_err());
        assert!("".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_default_is_word() {
        assert_eq!(Granularity::default(), Granularity::Word);
    }
}
