/// Easing curve applied to phase-local progress by the continuous clip strategy.
///
/// `Linear` matches an un-eased scrubbed timeline: clip coordinates track the
/// scroll position one-to-one. The in/out variants shape a wipe's edge: `In*` starts
/// slowly at the trigger boundary, `Out*` settles slowly into the open or collapsed clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`
    #[default]
    #[serde(alias = "none")]
    Linear,
    /// `t^2`
    InQuad,
    /// `1 - (1 - t)^2`
    OutQuad,
    /// Quadratic ease in, then out.
    InOutQuad,
    /// `t^3`
    InCubic,
    /// `1 - (1 - t)^3`
    OutCubic,
    /// Cubic ease in, then out.
    InOutCubic,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve. Endpoints are fixed.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t).powi(2),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t.powi(3),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
