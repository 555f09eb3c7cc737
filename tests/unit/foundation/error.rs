use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TagbloomError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TagbloomError::dataset("x")
            .to_string()
            .contains("dataset error:")
    );
    assert!(
        TagbloomError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        TagbloomError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TagbloomError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
    let err = TagbloomError::from(err);
    assert!(matches!(err, TagbloomError::Serde(_)));
}
