use super::*;

#[test]
fn new_rejects_blank_codename() {
    assert!(IllustrationRequest::new("", VariantKind::Base).is_err());
    assert!(IllustrationRequest::new("   ", VariantKind::Skin).is_err());
    let req = IllustrationRequest::new("amiya", VariantKind::Base).unwrap();
    assert_eq!(req.image_codename(), "amiya");
    assert_eq!(req.variant_kind(), VariantKind::Base);
    assert_eq!(req.raw_variant_suffix(), None);
}

#[test]
fn skin_suffix_must_be_numeric() {
    let skin = IllustrationRequest::new("amiya_winter", VariantKind::Skin).unwrap();
    assert!(skin.clone().with_variant_suffix("1b").is_err());
    assert!(skin.clone().with_variant_suffix("").is_err());
    let pinned = skin.with_variant_suffix("2").unwrap();
    assert_eq!(pinned.raw_variant_suffix(), Some("2"));

    let base = IllustrationRequest::new("amiya", VariantKind::Elite2).unwrap();
    assert!(base.with_variant_suffix("_2").is_ok());
}

#[test]
fn display_includes_variant_and_suffix() {
    let req = IllustrationRequest::new("amiya_winter", VariantKind::Skin)
        .unwrap()
        .with_variant_suffix("1")
        .unwrap();
    assert_eq!(req.to_string(), "amiya_winter (skin) suffix '1'");
    assert!(VariantKind::Skin.is_skin());
    assert!(!VariantKind::Promotion.is_skin());
}

#[test]
fn serde_json_roundtrip_and_validation() {
    let req: IllustrationRequest = serde_json::from_str(
        r#"{"image_codename":"amiya_winter","variant_kind":"Skin","raw_variant_suffix":"1"}"#,
    )
    .unwrap();
    assert_eq!(req.variant_kind(), VariantKind::Skin);
    assert_eq!(req.raw_variant_suffix(), Some("1"));

    let json = serde_json::to_string(&req).unwrap();
    let back: IllustrationRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, req);

    let defaulted: IllustrationRequest =
        serde_json::from_str(r#"{"image_codename":"amiya"}"#).unwrap();
    assert_eq!(defaulted.variant_kind(), VariantKind::Base);

    let blank = serde_json::from_str::<IllustrationRequest>(r#"{"image_codename":""}"#);
    assert!(blank.is_err());
}
