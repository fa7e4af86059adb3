use super::*;

const CONTINUOUS: ClipStrategy = ClipStrategy::Continuous { ease: Ease::Linear };

#[test]
fn snap_ignores_local_progress() {
    for local in [0.0, 0.3, 1.0] {
        assert_eq!(
            clip_for(RevealPhase::Entering, local, ClipStrategy::Snap),
            ClipGeometry::FULL_OPEN
        );
        assert_eq!(
            clip_for(RevealPhase::Exiting, local, ClipStrategy::Snap),
            ClipGeometry::COLLAPSED_BOTTOM
        );
    }
}

#[test]
fn visible_is_identity_for_every_strategy() {
    for strategy in [ClipStrategy::Snap, CONTINUOUS] {
        assert_eq!(
            clip_for(RevealPhase::Visible, 0.7, strategy),
            ClipGeometry::FULL_OPEN
        );
    }
}

#[test]
fn continuous_entering_grows_from_top() {
    let start = clip_for(RevealPhase::Entering, 0.0, CONTINUOUS);
    assert!(start.approx_eq(&ClipGeometry::COLLAPSED_TOP));
    let mid = clip_for(RevealPhase::Entering, 0.5, CONTINUOUS);
    assert_eq!(mid.visible_rect(), kurbo::Rect::new(0.0, 0.0, 1.0, 0.5));
    assert!(clip_for(RevealPhase::Entering, 1.0, CONTINUOUS).is_fully_open());
}

#[test]
fn continuous_exiting_collapses_into_bottom() {
    assert!(clip_for(RevealPhase::Exiting, 0.0, CONTINUOUS).is_fully_open());
    let g = clip_for(RevealPhase::Exiting, 1.0, CONTINUOUS);
    assert!(g.approx_eq(&ClipGeometry::COLLAPSED_BOTTOM));
}

#[test]
fn continuous_applies_easing() {
    let eased = ClipStrategy::Continuous { ease: Ease::InQuad };
    let g = clip_for(RevealPhase::Exiting, 0.5, eased);
    assert_eq!(g.visible_rect().y0, 0.25);
}

#[test]
fn strategy_serde_is_tagged() {
    let s: ClipStrategy = serde_json::from_str(r#"{"kind":"snap"}"#).unwrap();
    assert_eq!(s, ClipStrategy::Snap);
    let s: ClipStrategy = serde_json::from_str(r#"{"kind":"continuous"}"#).unwrap();
    assert_eq!(s, CONTINUOUS);
    let s: ClipStrategy =
        serde_json::from_str(r#"{"kind":"continuous","ease":"out_cubic"}"#).unwrap();
    assert_eq!(s, ClipStrategy::Continuous { ease: Ease::OutCubic });
}
