use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OrizuruError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OrizuruError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        OrizuruError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        OrizuruError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OrizuruError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
