//! ISA string parser.
//!
//! Turns a raw textual descriptor such as `rv64imafdc_zicsr2p0_xfoo1p0` into
//! a validated [`SubsetList`], enforcing the grammar and ordering rules of
//! the active [`IsaSpec`]:
//! 1. **Prelude:** `rv` followed by the XLEN (32, 64, or 128).
//! 2. **Base letters:** `i`, `e`, or the `g` shorthand, then further
//!    single-letter extensions in canonical order, each with an optional
//!    version suffix.
//! 3. **Prefixed extensions:** single-underscore-separated `z`/`s`/`sx`/`x`
//!    segments, class-ordered per the active spec's parse-order table.
//!
//! Parsing is all-or-nothing: the first error aborts the parse, reaches the
//! caller's error sink exactly once as a formatted diagnostic, and no
//! partial list escapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::arch::arch_str;
use crate::class::{self, ExtClass};
use crate::error::ArchError;
use crate::spec::IsaSpec;
use crate::subset::SubsetList;
use crate::version::{self, Version};

/// Result of a successful parse: the word width plus the subset list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedArch {
    /// Target word width in bits (32, 64, or 128).
    pub xlen: u32,
    /// Every enabled extension, in canonical order.
    pub subsets: SubsetList,
}

impl ParsedArch {
    /// Renders the canonical string form; see [`arch_str`].
    pub fn arch_str(&self) -> String {
        arch_str(self.xlen, &self.subsets)
    }
}

impl fmt::Display for ParsedArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.arch_str())
    }
}

/// Parses an ISA string under the given specification, routing the
/// diagnostic of a failed parse to the `tracing` error stream.
///
/// Prefer [`parse_subset_with`] when the caller owns diagnostics (assembler
/// and linker drivers report through their own channels).
///
/// # Errors
///
/// Any [`ArchError`] parse kind; see the module docs for the grammar.
pub fn parse_subset(isa: &str, spec: &IsaSpec) -> Result<ParsedArch, ArchError> {
    parse_subset_with(isa, spec, |diagnostic| tracing::error!("{diagnostic}"))
}

/// Parses an ISA string under the given specification.
///
/// The raw input is case-insensitive; it is normalized to lowercase before
/// parsing. On failure `handler` receives the formatted diagnostic exactly
/// once, in the form `-march=<input>: <message>`, and the error is also
/// returned.
///
/// # Errors
///
/// Any [`ArchError`] parse kind; see the module docs for the grammar.
pub fn parse_subset_with<F>(
    isa: &str,
    spec: &IsaSpec,
    mut handler: F,
) -> Result<ParsedArch, ArchError>
where
    F: FnMut(&str),
{
    let lowered = isa.to_ascii_lowercase();
    debug!(input = %lowered, spec = %spec.version(), "parsing ISA string");
    match SubsetParser::new(&lowered, spec).run() {
        Ok(arch) => Ok(arch),
        Err(err) => {
            handler(&format!("-march={isa}: {err}"));
            Err(err)
        }
    }
}

/// True for values in the `YYYYMMDD` shape a draft date must have.
fn is_date(value: u32) -> bool {
    (10_000_000..=99_999_999).contains(&value)
}

/// Cursor over one lowercase ISA string.
struct SubsetParser<'a> {
    isa: &'a str,
    spec: &'a IsaSpec,
    xlen: u32,
    subsets: SubsetList,
}

impl<'a> SubsetParser<'a> {
    fn new(isa: &'a str, spec: &'a IsaSpec) -> Self {
        Self {
            isa,
            spec,
            xlen: 0,
            subsets: SubsetList::new(),
        }
    }

    fn run(mut self) -> Result<ParsedArch, ArchError> {
        let rest = self.parse_prelude()?;
        let rest = self.parse_base(rest)?;
        self.parse_prefixed(rest)?;
        Ok(ParsedArch {
            xlen: self.xlen,
            subsets: self.subsets,
        })
    }

    fn malformed(reason: impl Into<String>) -> ArchError {
        ArchError::MalformedIsaString {
            reason: reason.into(),
        }
    }

    /// Consumes `rv` and the width digits, recording the XLEN.
    fn parse_prelude(&mut self) -> Result<&'a str, ArchError> {
        let Some(rest) = self.isa.strip_prefix("rv") else {
            return Err(Self::malformed("ISA string must begin with `rv`"));
        };
        let width_end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        let (width, rest) = rest.split_at(width_end);
        self.xlen = match width {
            "32" => 32,
            "64" => 64,
            "128" => 128,
            "" => {
                return Err(Self::malformed(
                    "ISA string must begin with rv32, rv64 or rv128",
                ));
            }
            _ => {
                return Err(ArchError::UnsupportedXlen {
                    width: width.to_owned(),
                });
            }
        };
        Ok(rest)
    }

    /// Consumes the base ISA letter and any following standard letters.
    ///
    /// Returns the remainder, which is either empty or starts at the `_`
    /// introducing the first prefixed extension.
    fn parse_base(&mut self, rest: &'a str) -> Result<&'a str, ArchError> {
        let Some(first) = rest.chars().next() else {
            return Err(Self::malformed("ISA string contains no base ISA"));
        };
        // Position already consumed within the canonical letter sequence;
        // `g` covers everything up to and including `d`.
        let mut order;
        let mut rest = match first {
            'i' => {
                let (ver, tail) = self.version_suffix(&rest[1..]);
                self.subsets.add("i", ver);
                order = 0;
                tail
            }
            'e' => {
                let (ver, tail) = self.version_suffix(&rest[1..]);
                self.subsets.add("e", ver);
                if self.xlen > 32 {
                    let xlen = self.xlen;
                    return Err(Self::malformed(format!("rv{xlen}e is not a valid base ISA")));
                }
                order = 0;
                tail
            }
            'g' => {
                // `g` is shorthand for imafd and never itself becomes a
                // subset; an explicit version applies to `i` alone.
                let (ver, tail) = self.version_suffix(&rest[1..]);
                self.subsets.add("i", ver);
                for letter in ["m", "a", "f", "d"] {
                    self.subsets.add(letter, Version::NULL);
                }
                order = 4;
                tail
            }
            _ => {
                return Err(Self::malformed("first ISA subset must be `e`, `i` or `g`"));
            }
        };

        let std_exts = class::supported_std_ext();
        while let Some(letter) = rest.chars().next() {
            if letter == '_' {
                break;
            }
            if matches!(letter, 'z' | 's' | 'x') {
                return Err(Self::malformed(format!(
                    "expected `_` separator before `{letter}` extension"
                )));
            }
            if !letter.is_ascii_lowercase() {
                return Err(Self::malformed(format!(
                    "unexpected `{letter}` in ISA string"
                )));
            }
            let name = &rest[..1];
            if self.subsets.lookup(name).is_some() {
                return Err(ArchError::DuplicateExtension {
                    name: name.to_owned(),
                });
            }
            let Some(position) = std_exts.find(letter) else {
                return Err(ArchError::UnknownExtension {
                    class: ExtClass::Base,
                    name: name.to_owned(),
                });
            };
            if position < order {
                return Err(ArchError::MisorderedExtension {
                    class: ExtClass::Base,
                    name: name.to_owned(),
                });
            }
            order = position + 1;
            let (ver, tail) = self.version_suffix(&rest[1..]);
            trace!(subset = name, version = %ver, "base extension");
            self.subsets.add(name, ver);
            rest = tail;
        }
        Ok(rest)
    }

    /// Consumes the underscore-separated prefixed-extension segments.
    fn parse_prefixed(&mut self, mut rest: &'a str) -> Result<(), ArchError> {
        let mut order = 0;
        while !rest.is_empty() {
            debug_assert!(rest.starts_with('_'));
            rest = &rest[1..];
            let segment_end = rest.find('_').unwrap_or(rest.len());
            let (segment, tail) = rest.split_at(segment_end);
            rest = tail;
            if segment.is_empty() {
                return Err(ArchError::EmptyExtensionSegment);
            }

            let ext_class = ExtClass::classify(segment);
            if matches!(ext_class, ExtClass::Base | ExtClass::Unknown) {
                return Err(Self::malformed(format!("unexpected ISA subset `{segment}`")));
            }
            let Some(class_position) = self.spec.class_index(ext_class) else {
                // The active spec revision has no such class; its names
                // cannot be known to that dialect.
                return Err(ArchError::UnknownExtension {
                    class: ext_class,
                    name: segment.to_owned(),
                });
            };
            if class_position < order {
                return Err(ArchError::MisorderedExtension {
                    class: ext_class,
                    name: segment.to_owned(),
                });
            }
            order = class_position;

            let digit_start = segment
                .bytes()
                .position(|b| b.is_ascii_digit())
                .unwrap_or(segment.len());
            let (name, version_text) = segment.split_at(digit_start);
            if name.len() <= ext_class.prefix_lower().len()
                || !name.bytes().all(|b| b.is_ascii_lowercase())
            {
                return Err(Self::malformed(format!(
                    "invalid or malformed extension `{segment}`"
                )));
            }
            let (ver, leftover) = self.version_suffix(version_text);
            if !leftover.is_empty() {
                return Err(Self::malformed(format!(
                    "malformed version suffix in `{segment}`"
                )));
            }
            if self.subsets.lookup(name).is_some() {
                return Err(ArchError::DuplicateExtension {
                    name: name.to_owned(),
                });
            }
            if !ext_class.is_valid(name) {
                return Err(ArchError::UnknownExtension {
                    class: ext_class,
                    name: name.to_owned(),
                });
            }
            trace!(subset = name, version = %ver, class = %ext_class, "prefixed extension");
            self.subsets.add(name, ver);
        }
        Ok(())
    }

    /// Parses a version suffix under the active spec's version kind.
    ///
    /// Under a draft-dated spec a bare 8-digit run (no `p`) is a draft date,
    /// while a `p`-separated run is still a release pair; under a release
    /// spec every suffix is a release pair.
    fn version_suffix<'s>(&self, text: &'s str) -> (Version, &'s str) {
        let (major, minor, rest) = version::split_suffix(text);
        let ver = match (major, minor) {
            (None, _) => Version::NULL,
            (Some(date), None) if self.spec.version().is_draft() && is_date(date) => {
                Version::Draft { date }
            }
            (Some(major), minor) => Version::Release {
                major,
                minor: minor.unwrap_or(0),
            },
        };
        (ver, rest)
    }
}
