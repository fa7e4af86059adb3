use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WipeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WipeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        WipeError::dependency_missing("observer")
            .to_string()
            .contains("dependency missing:")
    );
    assert_eq!(
        WipeError::container_not_found(".scroll_wrap").to_string(),
        "container not found: '.scroll_wrap'"
    );
    assert_eq!(
        WipeError::CountMismatch {
            triggers: 3,
            panels: 2
        }
        .to_string(),
        "count mismatch: 3 triggers vs 2 panels"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WipeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_empty_input_is_non_fatal() {
    assert!(!WipeError::EmptyInput.is_fatal());
    assert!(WipeError::validation("x").is_fatal());
    assert!(
        WipeError::CountMismatch {
            triggers: 1,
            panels: 0
        }
        .is_fatal()
    );
}
