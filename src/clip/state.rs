use crate::{animation::ease::Ease, clip::geometry::ClipGeometry};

/// Phase of a panel's reveal/conceal cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Trigger is active and the conceal threshold has not been crossed.
    Entering,
    /// Past the threshold on a panel with no successor; stays open.
    Visible,
    /// Past the threshold on a panel with a successor; wiping up and out.
    Exiting,
}

/// How clip geometry follows progress within a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipStrategy {
    /// Geometry jumps to the phase's end state as soon as the phase is entered.
    #[default]
    Snap,
    /// Geometry interpolates across the phase with the given easing.
    Continuous {
        /// Curve applied to phase-local progress.
        #[serde(default)]
        ease: Ease,
    },
}

/// Clip geometry for `phase` at phase-local progress `local` (clamped to `[0, 1]`).
///
/// Total and pure: the same inputs always produce the same geometry.
pub fn clip_for(phase: RevealPhase, local: f64, strategy: ClipStrategy) -> ClipGeometry {
    match (phase, strategy) {
        (RevealPhase::Visible, _) => ClipGeometry::FULL_OPEN,
        (RevealPhase::Entering, ClipStrategy::Snap) => ClipGeometry::FULL_OPEN,
        (RevealPhase::Exiting, ClipStrategy::Snap) => ClipGeometry::COLLAPSED_BOTTOM,
        (RevealPhase::Entering, ClipStrategy::Continuous { ease }) => ClipGeometry::COLLAPSED_TOP
            .lerp(&ClipGeometry::FULL_OPEN, ease.apply(local)),
        (RevealPhase::Exiting, ClipStrategy::Continuous { ease }) => ClipGeometry::FULL_OPEN
            .lerp(&ClipGeometry::COLLAPSED_BOTTOM, ease.apply(local)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clip/state.rs"]
mod tests;
