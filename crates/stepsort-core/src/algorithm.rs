#![forbid(unsafe_code)]

//! The closed set of algorithms the engine can run.

use std::fmt;
use std::str::FromStr;

/// Identifies one of the four supported sorting algorithms.
///
/// The set is closed on purpose: dispatch is an exhaustive `match`, never a
/// string key, so adding an algorithm is a compile-checked change everywhere
/// it matters (drivers, highlight mapping, hosts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Adjacent-exchange bubble sort, full passes, no early exit.
    Bubble,
    /// Minimum-scan selection sort.
    Selection,
    /// Key-hold insertion sort with shift steps.
    Insertion,
    /// Lomuto-partition quick sort, last element as pivot.
    Quick,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    /// Stable lowercase name, used for logging and selection.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an algorithm name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
}

impl ParseAlgorithmError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected one of: bubble, selection, insertion, quick)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for algorithm in Algorithm::ALL {
            if s.eq_ignore_ascii_case(algorithm.name()) {
                return Ok(algorithm);
            }
        }
        Err(ParseAlgorithmError { input: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_each_variant_once() {
        assert_eq!(Algorithm::ALL.len(), 4);
        for (idx, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[idx + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_matches_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("BUBBLE".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("Quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "merge".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.input(), "merge");
        assert!(err.to_string().contains("merge"));
    }
}
