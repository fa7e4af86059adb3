use crate::{
    clip::geometry::ClipGeometry,
    clip::state::{ClipStrategy, RevealPhase, clip_for},
    foundation::core::Progress,
    registry::panels::PairedList,
};

/// Trigger progress at which a panel with a successor starts concealing.
///
/// Conceal begins at the midpoint of the trigger's active range, not at its end,
/// so the outgoing wipe finishes before the trigger region does.
pub const CONCEAL_THRESHOLD: f64 = 0.5;

/// Lifecycle of one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Trigger not reached yet.
    Pending,
    /// Entering, not yet fully open.
    Revealing,
    /// Fully open.
    FullyVisible,
    /// Exiting, partially collapsed.
    Concealing,
    /// Exiting, fully collapsed.
    Hidden,
}

/// Event delivered by the scroll observer for one trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEvent {
    /// Progress through the active region.
    Progress(Progress),
    /// Scrolled back above the trigger start.
    LeaveBack,
}

/// A panel and its position-derived capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    /// 0-based document position.
    pub index: usize,
    /// A panel precedes this one. Without one, the panel starts pre-revealed.
    pub has_predecessor: bool,
    /// A panel follows this one. Without one, the panel never conceals.
    pub has_successor: bool,
}

/// A clip state to write to a panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClipUpdate {
    /// Panel index.
    pub index: usize,
    /// Phase before this update (`None` while pending).
    pub previous_phase: Option<RevealPhase>,
    /// Phase after this update (`None` while pending).
    pub phase: Option<RevealPhase>,
    /// Lifecycle state after this update.
    pub state: PanelState,
    /// Geometry before this update.
    pub previous_geometry: ClipGeometry,
    /// Geometry to apply.
    pub geometry: ClipGeometry,
}

impl ClipUpdate {
    /// True when this update crosses a phase boundary.
    pub fn phase_changed(&self) -> bool {
        self.previous_phase != self.phase
    }

    /// True when the element's clip must be rewritten.
    pub fn geometry_changed(&self) -> bool {
        self.previous_geometry != self.geometry
    }
}

/// Two-phase reveal/conceal state machine for a single panel.
#[derive(Clone, Debug)]
pub struct PanelSequence {
    panel: Panel,
    strategy: ClipStrategy,
    phase: Option<RevealPhase>,
    state: PanelState,
    geometry: ClipGeometry,
}

impl PanelSequence {
    /// Sequence in its initial, pre-scroll render.
    pub fn new(panel: Panel, strategy: ClipStrategy) -> Self {
        Self {
            panel,
            strategy,
            phase: None,
            state: PanelState::Pending,
            geometry: initial_geometry(panel),
        }
    }

    /// The panel this sequence drives.
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Current phase, `None` while pending.
    pub fn phase(&self) -> Option<RevealPhase> {
        self.phase
    }

    /// Geometry last produced.
    pub fn geometry(&self) -> ClipGeometry {
        self.geometry
    }

    /// Update describing the current render, used for the first paint.
    pub fn current(&self) -> ClipUpdate {
        ClipUpdate {
            index: self.panel.index,
            previous_phase: self.phase,
            phase: self.phase,
            state: self.state,
            previous_geometry: self.geometry,
            geometry: self.geometry,
        }
    }

    /// Advance on `event`; `None` when phase, state and geometry are unchanged.
    pub fn apply(&mut self, event: TriggerEvent) -> Option<ClipUpdate> {
        let (phase, geometry) = match event {
            TriggerEvent::LeaveBack => (None, initial_geometry(self.panel)),
            TriggerEvent::Progress(p) => {
                let phase = phase_for(self.panel, p);
                (Some(phase), self.geometry_for(phase, p))
            }
        };
        let state = derive_state(phase, &geometry);

        if phase == self.phase && state == self.state && geometry == self.geometry {
            return None;
        }

        let previous_phase = self.phase;
        let previous_geometry = self.geometry;
        self.phase = phase;
        self.state = state;
        self.geometry = geometry;

        tracing::trace!(
            index = self.panel.index,
            ?previous_phase,
            ?phase,
            ?state,
            "panel clip updated"
        );

        Some(ClipUpdate {
            index: self.panel.index,
            previous_phase,
            phase,
            state,
            previous_geometry,
            geometry,
        })
    }

    fn geometry_for(&self, phase: RevealPhase, p: Progress) -> ClipGeometry {
        match phase {
            // Pre-revealed: the reveal has already been applied.
            RevealPhase::Entering if !self.panel.has_predecessor => ClipGeometry::FULL_OPEN,
            RevealPhase::Entering => {
                clip_for(phase, p.local(0.0, CONCEAL_THRESHOLD), self.strategy)
            }
            RevealPhase::Exiting => {
                clip_for(phase, p.local(CONCEAL_THRESHOLD, 1.0), self.strategy)
            }
            RevealPhase::Visible => clip_for(phase, 1.0, self.strategy),
        }
    }
}

/// Phase reached by `panel` at progress `p`.
pub fn phase_for(panel: Panel, p: Progress) -> RevealPhase {
    if p.get() < CONCEAL_THRESHOLD {
        RevealPhase::Entering
    } else if panel.has_successor {
        RevealPhase::Exiting
    } else {
        RevealPhase::Visible
    }
}

/// Geometry before any scroll event: open for a panel with no predecessor,
/// collapsed onto the top edge otherwise.
pub fn initial_geometry(panel: Panel) -> ClipGeometry {
    if panel.has_predecessor {
        ClipGeometry::COLLAPSED_TOP
    } else {
        ClipGeometry::FULL_OPEN
    }
}

fn derive_state(phase: Option<RevealPhase>, geometry: &ClipGeometry) -> PanelState {
    match phase {
        None => PanelState::Pending,
        Some(RevealPhase::Visible) => PanelState::FullyVisible,
        Some(RevealPhase::Entering) if geometry.is_fully_open() => PanelState::FullyVisible,
        Some(RevealPhase::Entering) => PanelState::Revealing,
        Some(RevealPhase::Exiting) if geometry.is_collapsed() => PanelState::Hidden,
        Some(RevealPhase::Exiting) => PanelState::Concealing,
    }
}

/// Per-panel sequences for a registered list, in document order.
#[derive(Clone, Debug, Default)]
pub struct RevealSequencer {
    sequences: Vec<PanelSequence>,
}

impl RevealSequencer {
    /// Build one sequence per pair, using the pair's capability flags.
    pub fn from_list<T, P>(list: &PairedList<T, P>, strategy: ClipStrategy) -> Self {
        let sequences = list
            .iter()
            .map(|slot| {
                PanelSequence::new(
                    Panel {
                        index: slot.index,
                        has_predecessor: slot.has_predecessor,
                        has_successor: slot.has_successor,
                    },
                    strategy,
                )
            })
            .collect();
        Self { sequences }
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// True when no panels are sequenced.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Sequence for panel `index`.
    pub fn panel(&self, index: usize) -> Option<&PanelSequence> {
        self.sequences.get(index)
    }

    /// Current lifecycle state of every panel.
    pub fn states(&self) -> Vec<PanelState> {
        self.sequences.iter().map(PanelSequence::state).collect()
    }

    /// First-paint updates for every panel.
    pub fn initial_updates(&self) -> Vec<ClipUpdate> {
        self.sequences.iter().map(PanelSequence::current).collect()
    }

    /// Route `event` to panel `index`. Unknown indices are ignored.
    pub fn apply(&mut self, index: usize, event: TriggerEvent) -> Option<ClipUpdate> {
        self.sequences.get_mut(index)?.apply(event)
    }

}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
