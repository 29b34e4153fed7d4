//! Subset list: the structured form of a parsed ISA string.
//!
//! A [`SubsetList`] is an ordered collection of (name, version) entries, one
//! per enabled extension. Insertion order is significant: a successful
//! parse stores entries in the canonical class order, and the canonicalizer
//! serializes them back without re-sorting. Lookups scan by name and are
//! order-independent.

use std::cmp::Ordering;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// One enabled extension: a lowercase name plus its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subset {
    /// Lowercase extension name, unique within its list.
    pub name: String,
    /// Extension version; [`Version::NULL`] when none was given.
    pub version: Version,
}

/// Version constraint for [`SubsetList::lookup_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionMatch {
    /// Don't-care: match on name alone.
    Any,
    /// Require exactly this release version.
    Exact(u32, u32),
    /// Require at least this release version (capability checks such as
    /// "is `d` present at version >= 2.2"). Draft-versioned entries never
    /// satisfy a release bound.
    AtLeast(u32, u32),
}

impl VersionMatch {
    /// Tests a stored version against this constraint.
    fn matches(self, version: Version) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(major, minor) => version == Version::release(major, minor),
            Self::AtLeast(major, minor) => matches!(
                version.compare(Version::release(major, minor)),
                Ok(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

/// Ordered, append-only collection of enabled extensions.
///
/// Name uniqueness is an invariant the *builder* maintains: the parser
/// checks for duplicates before appending, and hand-built lists that violate
/// it get no defensive repair here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetList {
    entries: Vec<Subset>,
}

impl SubsetList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an extension at the tail, preserving insertion order.
    ///
    /// The caller must have already ensured `name` is not present; a
    /// duplicate append is a caller error, not a silent de-duplication.
    pub fn add(&mut self, name: impl Into<String>, version: Version) {
        self.entries.push(Subset {
            name: name.into(),
            version,
        });
    }

    /// Finds an extension by exact (case-sensitive) name.
    ///
    /// At most one entry can match by the uniqueness invariant.
    pub fn lookup(&self, name: &str) -> Option<&Subset> {
        self.entries.iter().find(|subset| subset.name == name)
    }

    /// Finds an extension by name under a version constraint.
    ///
    /// [`VersionMatch::Any`] degenerates to a name-only lookup.
    pub fn lookup_version(&self, name: &str, want: VersionMatch) -> Option<&Subset> {
        self.entries
            .iter()
            .find(|subset| subset.name == name && want.matches(subset.version))
    }

    /// Releases every entry; the list is reusable afterwards. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of enabled extensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no extension is enabled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Subset> {
        self.entries.iter()
    }

    /// Entries in insertion order, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Subset] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a SubsetList {
    type Item = &'a Subset;
    type IntoIter = slice::Iter<'a, Subset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
