//! ISA specification registry.
//!
//! The rules for parsing an ISA string changed across revisions of the
//! RISC-V manual; the most visible change is the relative order in which
//! extension classes may appear. Each registered [`IsaSpec`] pins the
//! parse-order
//! table in force at one revision, so the parser consults the registry
//! instead of hardcoding any single dialect.
//!
//! The registry is a process-wide constant: built at compile time, read-only
//! thereafter, safe to share across concurrent parses.

use tracing::debug;

use crate::class::ExtClass;
use crate::error::ArchError;
use crate::version::Version;

/// Class parse order of the user-level ISA manual v2.2, which predates
/// `z`-extensions.
const PARSE_ORDER_RVI_2P2: &[ExtClass] = &[
    ExtClass::Supervisor,
    ExtClass::SupervisorNonStandard,
    ExtClass::NonStandard,
];

/// Class parse order of the ratified 20190608 manual, which introduces the
/// `z` class ahead of the supervisor and non-standard classes.
const PARSE_ORDER_RVI_20190608: &[ExtClass] = &[
    ExtClass::Standard,
    ExtClass::Supervisor,
    ExtClass::SupervisorNonStandard,
    ExtClass::NonStandard,
];

/// One registered ISA specification revision and its parsing rules.
#[derive(Debug)]
pub struct IsaSpec {
    version: Version,
    parse_order: &'static [ExtClass],
}

impl IsaSpec {
    /// The revision this entry describes.
    #[inline]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Extension classes in the relative order this revision requires.
    #[inline]
    pub const fn parse_order(&self) -> &'static [ExtClass] {
        self.parse_order
    }

    /// Position of a class in this revision's parse order, or `None` when
    /// the revision has no such class at all.
    pub fn class_index(&self, class: ExtClass) -> Option<usize> {
        self.parse_order.iter().position(|entry| *entry == class)
    }
}

/// Every known ISA specification revision, oldest first.
static ISA_SPECS: [IsaSpec; 2] = [
    IsaSpec {
        version: Version::Release { major: 2, minor: 2 },
        parse_order: PARSE_ORDER_RVI_2P2,
    },
    IsaSpec {
        version: Version::Draft { date: 20190608 },
        parse_order: PARSE_ORDER_RVI_20190608,
    },
];

/// Returns the most recently registered specification revision.
pub fn latest_spec() -> &'static IsaSpec {
    let [.., latest] = &ISA_SPECS;
    latest
}

/// Looks up a specification revision in the registry.
///
/// `None` means "don't care" and resolves to the latest registered entry;
/// an explicit version must match a registered entry exactly.
///
/// # Errors
///
/// Returns [`ArchError::UnknownIsaSpecVersion`] for an explicit version that
/// was never registered.
pub fn lookup_spec(requested: Option<Version>) -> Result<&'static IsaSpec, ArchError> {
    let Some(version) = requested else {
        let latest = latest_spec();
        debug!(spec = %latest.version(), "defaulting to latest ISA spec");
        return Ok(latest);
    };
    ISA_SPECS
        .iter()
        .find(|spec| spec.version == version)
        .ok_or(ArchError::UnknownIsaSpecVersion { requested: version })
}
