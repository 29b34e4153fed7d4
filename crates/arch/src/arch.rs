//! Canonical serialization of a subset list.
//!
//! Produces the unique textual form of a validated architecture: base
//! letters run together directly after the width, prefixed extensions
//! follow underscore-separated, and non-null versions render as `2p0` for
//! releases or raw digits for drafts. Re-parsing the output under the same
//! specification reproduces the same set of (name, version) pairs.

use crate::subset::SubsetList;
use crate::version::Version;

/// Renders the canonical ISA string for a validated subset list.
///
/// Entries are emitted in list order; a successful parse already stored
/// them canonically, with base letters first. Lists built by hand in
/// violation of the construction invariants are outside the contract and
/// get no defensive checks here.
pub fn arch_str(xlen: u32, subsets: &SubsetList) -> String {
    let mut out = format!("rv{xlen}");
    for subset in subsets {
        if subset.name.len() > 1 {
            out.push('_');
        }
        out.push_str(&subset.name);
        match subset.version {
            Version::Release { major, minor } if !subset.version.is_null() => {
                out.push_str(&format!("{major}p{minor}"));
            }
            Version::Draft { date } => out.push_str(&date.to_string()),
            Version::Release { .. } => {}
        }
    }
    out
}
