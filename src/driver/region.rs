use std::fmt;

use crate::foundation::core::Progress;

/// An edge of an element or of the viewport, along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollEdge {
    /// Leading edge.
    Top,
    /// Midpoint.
    Center,
    /// Trailing edge.
    Bottom,
}

impl ScrollEdge {
    /// Offset of this edge as a fraction of the box height.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// "Element edge meets viewport edge".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RegionBoundary {
    /// Edge of the trigger element.
    pub element: ScrollEdge,
    /// Edge of the viewport.
    pub viewport: ScrollEdge,
}

impl RegionBoundary {
    /// Scroll offset at which this boundary is met.
    pub fn scroll_offset(self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element.fraction() * element_height
            - self.viewport.fraction() * viewport_height
    }
}

impl fmt::Display for RegionBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element.as_str(), self.viewport.as_str())
    }
}

/// Scroll interval over which a trigger's progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TriggerRegion {
    /// Progress 0.
    pub start: RegionBoundary,
    /// Progress 1.
    pub end: RegionBoundary,
}

impl TriggerRegion {
    /// From the trigger's top meeting the viewport top to its bottom meeting the
    /// viewport top.
    pub const PANEL: Self = Self {
        start: RegionBoundary {
            element: ScrollEdge::Top,
            viewport: ScrollEdge::Top,
        },
        end: RegionBoundary {
            element: ScrollEdge::Bottom,
            viewport: ScrollEdge::Top,
        },
    };

    /// Progress at `scroll_y`, or `None` while the region has not started.
    ///
    /// Past the end, progress stays at 1. A zero-length region is a step at its
    /// start offset.
    pub fn progress_at(
        &self,
        scroll_y: f64,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Option<Progress> {
        let start = self
            .start
            .scroll_offset(element_top, element_height, viewport_height);
        let end = self
            .end
            .scroll_offset(element_top, element_height, viewport_height);
        if !scroll_y.is_finite() || scroll_y < start {
            return None;
        }
        if end <= start {
            return Some(Progress::ONE);
        }
        Progress::new((scroll_y - start) / (end - start)).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/region.rs"]
mod tests;
