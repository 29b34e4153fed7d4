//! Round-Trip Properties.
//!
//! For every accepted string `s`, parsing the canonical rendering of
//! `parse(s)` must succeed and yield the same set of (name, version) pairs.
//! Generated inputs cover base-letter subsequences, optional version
//! suffixes in both bare and `p`-separated forms, standard `z` names, and
//! non-standard `sx`/`x` names with release or draft versions.

use proptest::collection::hash_set;
use proptest::prelude::*;
use proptest::sample::subsequence;
use rvarch_core::{ParsedArch, Version, latest_spec, parse_subset};

/// Parsed entries as a name-sorted vector; names are unique, so this is a
/// canonical set representation.
fn entry_set(arch: &ParsedArch) -> Vec<(String, Version)> {
    let mut entries: Vec<(String, Version)> = arch
        .subsets
        .iter()
        .map(|s| (s.name.clone(), s.version))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Asserts the round-trip law for one accepted input.
fn assert_round_trip(isa: &str) {
    let spec = latest_spec();
    let first = parse_subset(isa, spec).unwrap();
    let canonical = first.arch_str();
    let second = parse_subset(&canonical, spec).unwrap();
    assert_eq!(second.xlen, first.xlen, "xlen drifted for `{isa}`");
    assert_eq!(
        entry_set(&second),
        entry_set(&first),
        "subset set drifted for `{isa}` via `{canonical}`"
    );
}

// ─── Fixed cases ─────────────────────────────────────────────────────────────

#[test]
fn round_trip_fixed_examples() {
    for isa in [
        "rv64imafdc",
        "rv32e",
        "rv32g",
        "rv128i",
        "rv64imafdc_zicsr2p0_xfoo1p0",
        "rv64i2p1m3",
        "rv32ic_zicsr_ztso_sxvendor_xbar20190604",
        "RV64GC_ZIFENCEI",
    ] {
        assert_round_trip(isa);
    }
}

// ─── Generators ──────────────────────────────────────────────────────────────

/// A version suffix: empty, bare major, or `MAJORpMINOR`.
fn version_suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1_u32..=999).prop_map(|major| major.to_string()),
        ((1_u32..=99), (0_u32..=99)).prop_map(|(major, minor)| format!("{major}p{minor}")),
    ]
}

/// A version suffix for non-standard extensions, adding the draft-date form.
fn nonstd_version_suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        version_suffix(),
        (10_000_000_u32..=99_999_999).prop_map(|date| date.to_string()),
    ]
}

/// Standard base letters in canonical order, each with a version suffix.
fn base_letters() -> impl Strategy<Value = Vec<(char, String)>> {
    subsequence(
        vec!['m', 'a', 'f', 'd', 'q', 'l', 'c', 'b', 'j', 't', 'p', 'v', 'n'],
        0..=6,
    )
    .prop_flat_map(|letters| {
        let count = letters.len();
        (
            Just(letters),
            proptest::collection::vec(version_suffix(), count),
        )
            .prop_map(|(letters, versions)| letters.into_iter().zip(versions).collect())
    })
}

/// Distinct alphabetic name stems for `sx`/`x` extensions.
fn name_stems() -> impl Strategy<Value = Vec<String>> {
    hash_set("[a-k]{2,6}", 0..3).prop_map(|stems| stems.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip_generated(
        xlen in prop_oneof![Just(32_u32), Just(64_u32), Just(128_u32)],
        i_version in version_suffix(),
        letters in base_letters(),
        z_names in subsequence(vec!["zicsr", "zifencei", "zam", "ztso"], 0..=4),
        sx_stems in name_stems(),
        x_stems in name_stems(),
        prefixed_versions in proptest::collection::vec(nonstd_version_suffix(), 12),
    ) {
        let mut isa = format!("rv{xlen}i{i_version}");
        for (letter, version) in &letters {
            isa.push(*letter);
            isa.push_str(version);
        }
        let mut version_pool = prefixed_versions.iter();
        let mut next_version = || version_pool.next().cloned().unwrap_or_default();
        for name in &z_names {
            isa.push('_');
            isa.push_str(name);
        }
        for stem in &sx_stems {
            let version = next_version();
            isa.push_str("_sx");
            isa.push_str(stem);
            isa.push_str(&version);
        }
        for stem in &x_stems {
            let version = next_version();
            isa.push_str("_x");
            isa.push_str(stem);
            isa.push_str(&version);
        }
        assert_round_trip(&isa);
    }
}

// ─── Persistence of the parsed model ─────────────────────────────────────────

#[test]
fn parsed_arch_survives_serde() {
    let arch = parse_subset("rv64imafdc_zicsr2p0_xfoo1p0", latest_spec()).unwrap();
    let json = serde_json::to_string(&arch).unwrap();
    let restored: ParsedArch = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, arch);
    assert_eq!(restored.arch_str(), arch.arch_str());
}
