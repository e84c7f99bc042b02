use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IllustrationError::not_found("x")
            .to_string()
            .contains("illustration not found:")
    );
    assert!(
        IllustrationError::incomplete("x")
            .to_string()
            .contains("incomplete illustration:")
    );
    assert!(
        IllustrationError::asset_not_found("x")
            .to_string()
            .contains("asset not found:")
    );
    assert!(
        IllustrationError::invalid_texture("x")
            .to_string()
            .contains("invalid texture:")
    );
    assert!(
        IllustrationError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IllustrationError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = IllustrationError::DimensionMismatch {
        color: (64, 64),
        alpha: (32, 32),
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch: color layer is 64x64, alpha layer is 32x32"
    );
}

#[test]
fn decode_keeps_context_chain() {
    let base = anyhow::anyhow!("bad magic").context("read container header");
    let err = IllustrationError::decode(base);
    let msg = err.to_string();
    assert!(msg.starts_with("decode error:"));
    assert!(msg.contains("read container header"));
    assert!(msg.contains("bad magic"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IllustrationError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
