//! ISA version model.
//!
//! RISC-V specifications are identified in two incompatible ways: ratified
//! releases carry a `MAJOR.MINOR` pair (`2.2`), while in-progress drafts are
//! identified by their publication date (`20190608`). This module provides:
//! 1. **Representation:** [`Version`], a closed two-variant model with a
//!    distinguished null sentinel.
//! 2. **Suffix parsing:** The `2p2`-style version suffixes that trail
//!    extension names inside an ISA string.
//! 3. **Argument parsing:** Standalone `-misa-version=`-style overrides.
//! 4. **Ordering:** Same-kind comparison; cross-kind comparison is an
//!    explicit error, never a coercion.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ArchError;

/// A RISC-V specification or extension version.
///
/// A release version with both fields zero is the null sentinel meaning "no
/// version info"; it must be treated as absent wherever comparison matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// A ratified release, ordered lexicographically on (major, minor).
    Release {
        /// Major release number.
        major: u32,
        /// Minor release number.
        minor: u32,
    },
    /// An unratified draft, identified and ordered by its `YYYYMMDD` date.
    Draft {
        /// Publication date encoded as `YYYYMMDD`.
        date: u32,
    },
}

impl Version {
    /// The "no version info" sentinel.
    pub const NULL: Self = Self::Release { major: 0, minor: 0 };

    /// Builds a release version.
    #[inline]
    pub const fn release(major: u32, minor: u32) -> Self {
        Self::Release { major, minor }
    }

    /// Builds a draft version from a `YYYYMMDD` date.
    #[inline]
    pub const fn draft(date: u32) -> Self {
        Self::Draft { date }
    }

    /// Returns true for the null sentinel (release 0.0).
    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Release { major: 0, minor: 0 })
    }

    /// Returns true for draft-dated versions.
    #[inline]
    pub const fn is_draft(self) -> bool {
        matches!(self, Self::Draft { .. })
    }

    /// Orders two versions of the same kind.
    ///
    /// Releases order lexicographically on (major, minor); drafts order by
    /// date.
    ///
    /// # Errors
    ///
    /// Returns [`ArchError::IncomparableVersions`] when one side is a release
    /// and the other a draft. The two scales are unrelated, so no implicit
    /// coercion is performed.
    pub fn compare(self, other: Self) -> Result<Ordering, ArchError> {
        match (self, other) {
            (
                Self::Release { major, minor },
                Self::Release {
                    major: other_major,
                    minor: other_minor,
                },
            ) => Ok((major, minor).cmp(&(other_major, other_minor))),
            (Self::Draft { date }, Self::Draft { date: other_date }) => Ok(date.cmp(&other_date)),
            (lhs, rhs) => Err(ArchError::IncomparableVersions { lhs, rhs }),
        }
    }
}

impl PartialOrd for Version {
    /// Same-kind ordering; `None` across kinds.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other).ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { major, minor } => write!(f, "{major}.{minor}"),
            Self::Draft { date } => write!(f, "{date}"),
        }
    }
}

/// Parses a leading version suffix off `text`, returning the version and the
/// unconsumed remainder.
///
/// The suffix grammar is a run of digits (major) optionally followed by `p`
/// and a second run (minor). A major with no `p` part defaults the minor to
/// 0; no digits at all yields [`Version::NULL`]. Nothing beyond the
/// numeric/`p` pattern is consumed; in particular a `p` with no digit after
/// it is left in place.
///
/// ```
/// use rvarch_core::version::{parse_version_suffix, Version};
///
/// assert_eq!(parse_version_suffix("2p2"), (Version::release(2, 2), ""));
/// assert_eq!(parse_version_suffix("200"), (Version::release(200, 0), ""));
/// assert_eq!(parse_version_suffix("m"), (Version::NULL, "m"));
/// ```
pub fn parse_version_suffix(text: &str) -> (Version, &str) {
    match split_suffix(text) {
        (None, _, rest) => (Version::NULL, rest),
        (Some(major), minor, rest) => (
            Version::Release {
                major,
                minor: minor.unwrap_or(0),
            },
            rest,
        ),
    }
}

/// Parses a standalone version argument, as supplied to a
/// `-misa-version=`-style flag.
///
/// Accepts `MAJOR.MINOR` for releases (`2.2`) and an 8-digit date for drafts
/// (`20190604`).
///
/// # Errors
///
/// Returns [`ArchError::InvalidVersionFormat`] for any other shape.
pub fn parse_isa_version_string(text: &str) -> Result<Version, ArchError> {
    let invalid = || ArchError::InvalidVersionFormat {
        text: text.to_owned(),
    };
    if let Some((major, minor)) = text.split_once('.') {
        let major = parse_decimal(major).ok_or_else(invalid)?;
        let minor = parse_decimal(minor).ok_or_else(invalid)?;
        Ok(Version::Release { major, minor })
    } else if text.len() == 8 {
        let date = parse_decimal(text).ok_or_else(invalid)?;
        Ok(Version::Draft { date })
    } else {
        Err(invalid())
    }
}

/// Splits a version suffix into its raw (major, minor) digit runs plus the
/// unconsumed remainder.
///
/// The parser needs the raw split rather than a finished [`Version`] because
/// draft-dated specifications reinterpret a bare digit run (no `p`) as a
/// date.
pub(crate) fn split_suffix(text: &str) -> (Option<u32>, Option<u32>, &str) {
    let (major, rest) = take_number(text);
    let Some(major) = major else {
        return (None, None, text);
    };
    // A minor part exists only when `p` is directly followed by a digit.
    if let Some(tail) = rest.strip_prefix('p') {
        let (minor, after_minor) = take_number(tail);
        if let Some(minor) = minor {
            return (Some(major), Some(minor), after_minor);
        }
    }
    (Some(major), None, rest)
}

/// Consumes a leading run of ASCII digits, saturating on overflow.
fn take_number(text: &str) -> (Option<u32>, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return (None, text);
    }
    let value = text[..end].bytes().fold(0_u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    });
    (Some(value), &text[end..])
}

/// Parses a complete all-digit decimal field; `None` on anything else.
fn parse_decimal(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
