use super::*;
use crate::foundation::core::VariantKind;

fn pattern(codename: &str, kind: VariantKind) -> NamePattern {
    NamePattern::for_request(&IllustrationRequest::new(codename, kind).unwrap())
}

fn pinned_skin(codename: &str, number: &str) -> NamePattern {
    let req = IllustrationRequest::new(codename, VariantKind::Skin)
        .unwrap()
        .with_variant_suffix(number)
        .unwrap();
    NamePattern::for_request(&req)
}

#[test]
fn regular_matches_codename_after_revision() {
    let p = pattern("amiya", VariantKind::Base);
    assert_eq!(p.verdict("char_002_amiya"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya[alpha]"), NameVerdict::Match);
    assert_eq!(p.verdict("char__amiya"), NameVerdict::Match);
    assert_eq!(p.verdict("prefix char_1_amiya_2"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_kaltsit"), NameVerdict::Miss);
    assert_eq!(p.verdict("char002_amiya"), NameVerdict::Miss);
    assert_eq!(p.verdict("char_00x_amiya"), NameVerdict::Miss);
}

#[test]
fn regular_is_case_sensitive() {
    let p = pattern("amiya", VariantKind::Elite1);
    assert_eq!(p.verdict("CHAR_002_AMIYA"), NameVerdict::Miss);
    assert_eq!(p.verdict("char_002_Amiya"), NameVerdict::Miss);
}

#[test]
fn regular_rejects_backup_marker_unless_another_position_matches() {
    let p = pattern("amiya", VariantKind::Base);
    assert_eq!(p.verdict("char_002_amiyab"), NameVerdict::Backup);
    assert_eq!(p.verdict("char_002_amiyab[alpha]"), NameVerdict::Backup);
    assert_eq!(p.verdict("char_002_amiyab_char_002_amiya"), NameVerdict::Match);
    // Uppercase is not the backup marker in case-sensitive mode.
    assert_eq!(p.verdict("char_002_amiyaB"), NameVerdict::Match);
}

#[test]
fn regular_suffix_extends_codename() {
    let req = IllustrationRequest::new("amiya", VariantKind::Elite2)
        .unwrap()
        .with_variant_suffix("_2")
        .unwrap();
    let p = NamePattern::for_request(&req);
    assert_eq!(p.verdict("char_002_amiya_2"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya"), NameVerdict::Miss);
}

#[test]
fn skin_requires_hash_number() {
    let p = pattern("amiya_winter", VariantKind::Skin);
    assert_eq!(p.verdict("char_002_amiya_winter#1"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya_winter#1[alpha]"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya_winter#"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya_winter"), NameVerdict::Miss);
    assert_eq!(p.verdict("char_002_amiya_winter_1"), NameVerdict::Miss);
}

#[test]
fn skin_is_case_insensitive() {
    let p = pattern("Amiya_Winter", VariantKind::Skin);
    assert_eq!(p.verdict("CHAR_002_AMIYA_WINTER#1"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya_winter#1B"), NameVerdict::Backup);
}

#[test]
fn skin_backup_marker_rejects_even_with_alpha_tag() {
    let p = pattern("amiya_winter", VariantKind::Skin);
    assert_eq!(p.verdict("char_002_amiya_winter#1b"), NameVerdict::Backup);
    assert_eq!(p.verdict("char_002_amiya_winter#1b[alpha]"), NameVerdict::Backup);
    // Leftmost hit decides; a clean later hit does not rescue the name.
    assert_eq!(
        p.verdict("char_002_amiya_winter#1b char_002_amiya_winter#1"),
        NameVerdict::Backup
    );
}

#[test]
fn skin_pinned_number_skips_other_numbers() {
    let p = pinned_skin("amiya_winter", "2");
    assert_eq!(p.verdict("char_002_amiya_winter#2"), NameVerdict::Match);
    assert_eq!(p.verdict("char_002_amiya_winter#1"), NameVerdict::Miss);
    assert_eq!(p.verdict("char_002_amiya_winter#21"), NameVerdict::Miss);
    assert_eq!(p.verdict("char_002_amiya_winter#2b"), NameVerdict::Backup);
}

#[test]
fn codename_is_literal() {
    let p = pattern("a.b", VariantKind::Base);
    assert_eq!(p.verdict("char_1_a.b"), NameVerdict::Match);
    assert_eq!(p.verdict("char_1_axb"), NameVerdict::Miss);
}

#[test]
fn alpha_marker_is_exact() {
    assert!(has_alpha_marker("char_002_amiya[alpha]"));
    assert!(!has_alpha_marker("char_002_amiya[ALPHA]"));
    assert!(!has_alpha_marker("char_002_amiya_alpha"));
}
