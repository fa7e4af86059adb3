//! Seams to the host environment: element lookup, clip realization, scroll
//! observation and smooth-scroll emulation.

use crate::{
    clip::geometry::ClipGeometry,
    config::settings::SmoothScrollConfig,
    driver::region::TriggerRegion,
    foundation::error::WipeResult,
    sequence::sequencer::TriggerEvent,
};

/// Callback invoked by a [`ScrollObserver`] for every progress change of one trigger.
pub type TriggerCallback = Box<dyn FnMut(TriggerEvent)>;

/// Element lookup in document order.
pub trait Document {
    /// Cheap handle to an element.
    type Element: Clone + 'static;

    /// First element matching `selector` anywhere in the document.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn query_selector_all(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;
}

/// An element whose visible region can be clipped.
pub trait ClipTarget {
    /// Replace the element's clip region.
    fn apply_clip(&self, geometry: &ClipGeometry);
}

/// Scroll-observation engine.
///
/// Progress delivered to a callback must lie in `[0, 1]` and arrive in scroll order.
pub trait ScrollObserver<T> {
    /// Live registration. Dropping it must stop further callbacks.
    type Subscription;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "scroll observer"
    }

    /// False when the engine is not loaded.
    fn is_ready(&self) -> bool {
        true
    }

    /// Start delivering events for `trigger` over `region`.
    fn observe(
        &mut self,
        trigger: &T,
        region: TriggerRegion,
        on_event: TriggerCallback,
    ) -> WipeResult<Self::Subscription>;
}

/// Smooth-scroll emulator.
pub trait SmoothScroller {
    /// False when the emulator is not loaded.
    fn is_ready(&self) -> bool {
        true
    }

    /// Install the emulator on the page.
    fn create(&mut self, config: &SmoothScrollConfig) -> WipeResult<()>;
}

/// Stand-in for hosts without a smooth scroller. Only usable with
/// `smooth_scroll: None`; otherwise setup reports a missing dependency.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSmoothScroller;

impl SmoothScroller for NoSmoothScroller {
    fn is_ready(&self) -> bool {
        false
    }

    fn create(&mut self, _config: &SmoothScrollConfig) -> WipeResult<()> {
        Err(crate::foundation::error::WipeError::dependency_missing(
            "smooth scroller",
        ))
    }
}
