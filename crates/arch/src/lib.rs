//! RISC-V ISA string parsing and canonicalization.
//!
//! This crate interprets textual architecture descriptors such as
//! `rv64imafdc_zicsr2p0_xfoo1p0` for a compiler toolchain:
//! 1. **Parse:** Convert a raw ISA string into an ordered, version-annotated
//!    [`SubsetList`], validated against a selected ISA specification
//!    revision.
//! 2. **Classify:** Sort extension names into base / standard / supervisor /
//!    non-standard classes, each with its own validity policy.
//! 3. **Canonicalize:** Re-serialize a subset list into its unique canonical
//!    string form, stable under re-parsing.
//! 4. **Query:** Look up extensions by name, optionally under an exact or
//!    minimum version bound, for code-generation and attribute-merging
//!    consumers.
//!
//! The whole crate is synchronous and deterministic: a parse is a pure
//! function of (input, spec revision), and the specification registry is an
//! immutable process-wide table safe for concurrent reads.

/// Canonical serialization of a subset list.
pub mod arch;
/// Extension class taxonomy and validity tables.
pub mod class;
/// Error taxonomy shared by parser, version model, and registry.
pub mod error;
/// The ISA string parser.
pub mod parse;
/// Registry of ISA specification revisions and their parse-order rules.
pub mod spec;
/// Subset list construction and lookup.
pub mod subset;
/// Release/draft version model and version-string parsing.
pub mod version;

/// Canonical string renderer; inverse of a successful parse.
pub use crate::arch::arch_str;
/// Extension classification by name prefix.
pub use crate::class::ExtClass;
/// Every failure mode of this crate.
pub use crate::error::ArchError;
/// Main entry points; produce a [`ParsedArch`] from a raw string.
pub use crate::parse::{ParsedArch, parse_subset, parse_subset_with};
/// Specification registry access.
pub use crate::spec::{IsaSpec, latest_spec, lookup_spec};
/// The structured architecture representation.
pub use crate::subset::{Subset, SubsetList, VersionMatch};
/// Release/draft version selector.
pub use crate::version::{Version, parse_isa_version_string, parse_version_suffix};
