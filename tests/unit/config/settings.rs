use super::*;
use crate::animation::ease::Ease;

#[test]
fn empty_document_yields_defaults() {
    let c = WipeConfig::from_json_str("{}").unwrap();
    assert_eq!(c, WipeConfig::default());
    assert_eq!(c.container_selector, ".scroll_wrap");
    assert_eq!(c.strategy, ClipStrategy::Snap);
    assert_eq!(c.smooth_scroll.unwrap().smooth_secs, 1.0);
}

#[test]
fn null_smooth_scroll_disables_emulator() {
    let c = WipeConfig::from_json_str(r#"{ "smooth_scroll": null }"#).unwrap();
    assert!(c.smooth_scroll.is_none());
}

#[test]
fn partial_smooth_scroll_fills_defaults() {
    let c = WipeConfig::from_json_str(
        r#"{ "strategy": { "kind": "continuous", "ease": "in_out_quad" },
             "smooth_scroll": { "smooth_secs": 0.4 } }"#,
    )
    .unwrap();
    assert_eq!(
        c.strategy,
        ClipStrategy::Continuous {
            ease: Ease::InOutQuad
        }
    );
    let smooth = c.smooth_scroll.unwrap();
    assert_eq!(smooth.smooth_secs, 0.4);
    assert_eq!(smooth.wrapper, "#smooth-wrapper");
    assert!(smooth.effects);
}

#[test]
fn blank_selector_is_rejected() {
    let err = WipeConfig::from_json_str(r#"{ "panel_selector": "  " }"#).unwrap_err();
    assert!(err.to_string().contains("panel_selector"));
}

#[test]
fn negative_smoothing_is_rejected() {
    let err = WipeConfig::from_json_str(r#"{ "smooth_scroll": { "smooth_secs": -1 } }"#)
        .unwrap_err();
    assert!(matches!(err, WipeError::Validation(_)));
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = WipeConfig::from_json_str(r#"{ "conceal_threshold": 0.7 }"#).unwrap_err();
    assert!(matches!(err, WipeError::Serde(_)));
}
