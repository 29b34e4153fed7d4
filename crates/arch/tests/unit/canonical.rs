//! Canonical Serialization Tests.
//!
//! Verifies `arch_str` output shapes: base letters run together, prefixed
//! extensions underscore-separated, null versions omitted, release versions
//! as `MAJORpMINOR`, draft versions as raw dates.

use pretty_assertions::assert_eq;
use rvarch_core::{SubsetList, Version, arch_str, latest_spec, parse_subset};

#[test]
fn base_letters_render_without_separators() {
    let arch = parse_subset("rv64imafdc", latest_spec()).unwrap();
    assert_eq!(arch.arch_str(), "rv64imafdc");
}

#[test]
fn g_expansion_renders_as_imafd() {
    // Expansion is one-directional; `g` never reappears.
    let arch = parse_subset("rv32g", latest_spec()).unwrap();
    assert_eq!(arch.arch_str(), "rv32imafd");
}

#[test]
fn null_versions_are_omitted() {
    let mut list = SubsetList::new();
    list.add("i", Version::NULL);
    list.add("xfoo", Version::NULL);
    assert_eq!(arch_str(64, &list), "rv64i_xfoo");
}

#[test]
fn release_versions_render_as_major_p_minor() {
    let mut list = SubsetList::new();
    list.add("i", Version::release(2, 1));
    list.add("zicsr", Version::release(2, 0));
    assert_eq!(arch_str(64, &list), "rv64i2p1_zicsr2p0");
}

#[test]
fn draft_versions_render_as_raw_dates() {
    let mut list = SubsetList::new();
    list.add("i", Version::NULL);
    list.add("xvendor", Version::draft(20190604));
    assert_eq!(arch_str(32, &list), "rv32i_xvendor20190604");
}

#[test]
fn versioned_base_letters_render_inline() {
    let arch = parse_subset("rv32i2p0m", latest_spec()).unwrap();
    assert_eq!(arch.arch_str(), "rv32i2p0m");
}

#[test]
fn display_matches_arch_str() {
    let arch = parse_subset("rv64imafdc_zicsr2p0_xfoo1p0", latest_spec()).unwrap();
    assert_eq!(arch.to_string(), arch.arch_str());
    assert_eq!(arch.to_string(), "rv64imafdc_zicsr2p0_xfoo1p0");
}

#[test]
fn canonical_form_is_a_fixed_point() {
    let arch = parse_subset("RV64GC_Zicsr2p0", latest_spec()).unwrap();
    let canonical = arch.arch_str();
    let reparsed = parse_subset(&canonical, latest_spec()).unwrap();
    assert_eq!(reparsed.arch_str(), canonical);
}
