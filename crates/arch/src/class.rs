//! Extension class taxonomy.
//!
//! Every RISC-V extension name falls into one of five classes determined by
//! its prefix: single-letter base extensions, standard `z`-extensions,
//! standard supervisor `s`-extensions, non-standard supervisor
//! `sx`-extensions, and non-standard `x`-extensions. The class decides which
//! validity policy applies: standard names are checked against fixed tables,
//! non-standard names are by definition unknowable and always accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Standard `z`-extension names ratified by the 20190608 ISA manual.
pub const STD_Z_EXTS: [&str; 4] = ["zicsr", "zifencei", "zam", "ztso"];

/// Standard supervisor `s`-extension names.
///
/// None have been ratified; the table is reserved for future growth, so
/// every plain `s`-prefixed name is currently rejected.
pub const STD_S_EXTS: [&str; 0] = [];

/// Canonical order of the standard single-letter extensions that may follow
/// the base ISA letter.
const STD_BASE_EXTS: &str = "mafdqlcbjtpvn";

/// Returns the standard single-letter extensions in canonical order.
///
/// Base letters in an ISA string must advance through this sequence; the
/// canonicalizer emits them back in the same order.
#[inline]
pub const fn supported_std_ext() -> &'static str {
    STD_BASE_EXTS
}

/// Returns the position of a name in the standard `z`-extension table, or
/// `None` for names outside it.
///
/// Attribute emitters use the index as a stable identifier for known
/// standard extensions.
pub fn std_z_ext_index(name: &str) -> Option<usize> {
    STD_Z_EXTS.iter().position(|ext| *ext == name)
}

/// Classification of an extension name by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtClass {
    /// Single-letter base-architecture extension (`i`, `m`, `a`, ...).
    Base,
    /// Standard extension, prefix `z`, checked against [`STD_Z_EXTS`].
    Standard,
    /// Standard supervisor extension, prefix `s`, checked against
    /// [`STD_S_EXTS`].
    Supervisor,
    /// Non-standard supervisor extension, prefix `sx`, never checked.
    SupervisorNonStandard,
    /// Non-standard extension, prefix `x`, never checked.
    NonStandard,
    /// No class matched; never valid.
    Unknown,
}

impl ExtClass {
    /// Classifies a lowercase extension name by its prefix.
    ///
    /// Longer prefixes win, so `sx`-names classify as
    /// [`ExtClass::SupervisorNonStandard`] rather than
    /// [`ExtClass::Supervisor`]. A name is classified only; whether it is a
    /// *known* extension is [`ExtClass::is_valid`]'s concern.
    pub fn classify(name: &str) -> Self {
        if name.starts_with("sx") {
            Self::SupervisorNonStandard
        } else if name.starts_with('s') {
            Self::Supervisor
        } else if name.starts_with('z') {
            Self::Standard
        } else if name.starts_with('x') {
            Self::NonStandard
        } else if name.len() == 1 && name.bytes().all(|b| b.is_ascii_lowercase()) {
            Self::Base
        } else {
            Self::Unknown
        }
    }

    /// Lowercase prefix string for this class, empty for base letters.
    pub const fn prefix_lower(self) -> &'static str {
        match self {
            Self::Standard => "z",
            Self::Supervisor => "s",
            Self::SupervisorNonStandard => "sx",
            Self::NonStandard => "x",
            Self::Base | Self::Unknown => "",
        }
    }

    /// Uppercase prefix string, used in diagnostics ("unknown SX extension").
    pub const fn prefix_upper(self) -> &'static str {
        match self {
            Self::Standard => "Z",
            Self::Supervisor => "S",
            Self::SupervisorNonStandard => "SX",
            Self::NonStandard => "X",
            Self::Base | Self::Unknown => "",
        }
    }

    /// Checks whether `name` is a known extension of this class.
    ///
    /// Non-standard classes accept everything; standard classes consult
    /// their fixed tables; base letters must be `i`, `e`, or a member of
    /// [`supported_std_ext`]; [`ExtClass::Unknown`] accepts nothing.
    pub fn is_valid(self, name: &str) -> bool {
        match self {
            Self::NonStandard | Self::SupervisorNonStandard => true,
            Self::Standard => STD_Z_EXTS.contains(&name),
            Self::Supervisor => STD_S_EXTS.contains(&name),
            Self::Base => match name.as_bytes() {
                &[letter] => {
                    matches!(letter, b'i' | b'e') || STD_BASE_EXTS.as_bytes().contains(&letter)
                }
                _ => false,
            },
            Self::Unknown => false,
        }
    }
}

impl fmt::Display for ExtClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Unknown => f.write_str("unclassified"),
            prefixed => f.write_str(prefixed.prefix_upper()),
        }
    }
}
