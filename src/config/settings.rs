use crate::{
    clip::state::ClipStrategy,
    foundation::error::{WipeError, WipeResult},
};

/// Setup configuration for one wipe scene.
///
/// Every field has a default matching the stock markup, so `{}` is a valid
/// document:
///
/// ```json
/// {
///   "container_selector": ".scroll_wrap",
///   "trigger_selector": ".scroll_trigger",
///   "panel_selector": ".scroll_item",
///   "strategy": { "kind": "snap" },
///   "smooth_scroll": { "wrapper": "#smooth-wrapper", "content": "#smooth-content" }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WipeConfig {
    /// Selector for the scroll-wrap container.
    pub container_selector: String,
    /// Selector for trigger elements, scoped to the container.
    pub trigger_selector: String,
    /// Selector for panel elements, scoped to the container.
    pub panel_selector: String,
    /// How clip geometry follows progress.
    pub strategy: ClipStrategy,
    /// Smooth-scroll emulator settings; `null` disables the emulator.
    pub smooth_scroll: Option<SmoothScrollConfig>,
}

impl Default for WipeConfig {
    fn default() -> Self {
        Self {
            container_selector: ".scroll_wrap".to_string(),
            trigger_selector: ".scroll_trigger".to_string(),
            panel_selector: ".scroll_item".to_string(),
            strategy: ClipStrategy::Snap,
            smooth_scroll: Some(SmoothScrollConfig::default()),
        }
    }
}

/// Smooth-scroll emulator settings. Purely visual; the clip logic does not read them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmoothScrollConfig {
    /// Selector for the fixed wrapper element.
    pub wrapper: String,
    /// Selector for the translated content element.
    pub content: String,
    /// Seconds the rendered position takes to catch up with input.
    pub smooth_secs: f64,
    /// Honor per-element speed/lag attributes.
    pub effects: bool,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            wrapper: "#smooth-wrapper".to_string(),
            content: "#smooth-content".to_string(),
            smooth_secs: 1.0,
            effects: true,
        }
    }
}

impl WipeConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> WipeResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| WipeError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check selectors and smoothing parameters.
    pub fn validate(&self) -> WipeResult<()> {
        for (name, value) in [
            ("container_selector", &self.container_selector),
            ("trigger_selector", &self.trigger_selector),
            ("panel_selector", &self.panel_selector),
        ] {
            if value.trim().is_empty() {
                return Err(WipeError::validation(format!("{name} must be non-empty")));
            }
        }

        if let Some(smooth) = &self.smooth_scroll {
            if smooth.wrapper.trim().is_empty() || smooth.content.trim().is_empty() {
                return Err(WipeError::validation(
                    "smooth_scroll wrapper and content must be non-empty",
                ));
            }
            if !smooth.smooth_secs.is_finite() || smooth.smooth_secs < 0.0 {
                return Err(WipeError::validation(
                    "smooth_scroll.smooth_secs must be finite and >= 0",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
