//! Error definitions for ISA string processing.
//!
//! This module defines the closed error taxonomy shared by the parser, the
//! version model, and the specification registry. It provides:
//! 1. **Parse errors:** Structural faults in an ISA string (bad width, bad
//!    ordering, duplicates, empty segments).
//! 2. **Version errors:** Malformed version arguments and cross-kind
//!    comparisons.
//! 3. **Registry errors:** Requests for specification revisions that were
//!    never registered.
//!
//! Every variant is local and deterministic: parsing the same input under the
//! same specification always fails with the same error.

use thiserror::Error;

use crate::class::ExtClass;
use crate::version::Version;

/// Errors produced while parsing, validating, or comparing ISA descriptors.
///
/// `Display` renders the human-readable diagnostic handed to the caller's
/// error sink; the variant itself carries enough context for programmatic
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchError {
    /// The ISA string violates the grammar in a way no other variant covers.
    ///
    /// `reason` is the specific diagnostic, e.g. "first ISA subset must be
    /// `e`, `i` or `g`".
    #[error("{reason}")]
    MalformedIsaString {
        /// Specific diagnostic for the structural fault.
        reason: String,
    },

    /// The width digits after `rv` name an unsupported XLEN.
    ///
    /// Only 32, 64, and 128 are valid RISC-V base widths.
    #[error("unsupported XLEN `{width}`, ISA string must begin with rv32, rv64 or rv128")]
    UnsupportedXlen {
        /// The offending width digits as written.
        width: String,
    },

    /// An extension appears before another one that must precede it.
    ///
    /// The required relative order of extension classes comes from the active
    /// ISA specification's parse-order table.
    #[error("misordered extension `{name}`, {class} extensions must appear earlier")]
    MisorderedExtension {
        /// Class of the misplaced extension.
        class: ExtClass,
        /// The misplaced extension name.
        name: String,
    },

    /// Consecutive or trailing underscores produced an empty segment.
    #[error("empty extension segment in ISA string")]
    EmptyExtensionSegment,

    /// An extension name failed its class's validity check.
    ///
    /// Never raised for `x`/`sx` names, which are non-standard by definition
    /// and cannot be unknown.
    #[error("unknown {class} extension `{name}`")]
    UnknownExtension {
        /// Class whose validity predicate rejected the name.
        class: ExtClass,
        /// The rejected extension name.
        name: String,
    },

    /// The same extension name was given twice in one ISA string.
    #[error("duplicate extension `{name}`")]
    DuplicateExtension {
        /// The repeated extension name.
        name: String,
    },

    /// A standalone version argument is neither `MAJOR.MINOR` nor an
    /// 8-digit draft date.
    #[error("invalid ISA version `{text}`, expected MAJOR.MINOR or an 8-digit date")]
    InvalidVersionFormat {
        /// The argument as written.
        text: String,
    },

    /// A release-numbered version was ordered against a draft-dated one.
    ///
    /// The two kinds share no common scale, so the comparison is rejected
    /// rather than coerced.
    #[error("cannot order ISA versions {lhs} and {rhs}, release and draft versions are incomparable")]
    IncomparableVersions {
        /// Left-hand version of the failed comparison.
        lhs: Version,
        /// Right-hand version of the failed comparison.
        rhs: Version,
    },

    /// The requested ISA specification revision is not in the registry.
    #[error("unknown ISA specification version {requested}")]
    UnknownIsaSpecVersion {
        /// The revision that was asked for.
        requested: Version,
    },
}
