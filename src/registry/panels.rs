use crate::foundation::error::{WipeError, WipeResult};

/// One trigger paired with its panel, at its position in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSlot<T, P> {
    /// 0-based position in document order.
    pub index: usize,
    /// Scroll region driving this panel.
    pub trigger: T,
    /// Content element whose clip is driven.
    pub panel: P,
    /// A panel precedes this one.
    pub has_predecessor: bool,
    /// A panel follows this one.
    pub has_successor: bool,
}

/// Trigger/panel pairs in document order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairedList<T, P> {
    slots: Vec<PanelSlot<T, P>>,
}

impl<T, P> PairedList<T, P> {
    /// Pairs in document order.
    pub fn slots(&self) -> &[PanelSlot<T, P>] {
        &self.slots
    }

    /// Number of pairs (always at least one).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; [`register`] rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate pairs in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, PanelSlot<T, P>> {
        self.slots.iter()
    }
}

impl<T, P> IntoIterator for PairedList<T, P> {
    type Item = PanelSlot<T, P>;
    type IntoIter = std::vec::IntoIter<PanelSlot<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

/// Pair triggers with panels by position.
///
/// Order is preserved: it decides which panel is "next" for clip-out. A count
/// mismatch is reported before emptiness, so `0` triggers against `2` panels is a
/// [`WipeError::CountMismatch`], and only `0`/`0` is [`WipeError::EmptyInput`].
pub fn register<T, P>(triggers: Vec<T>, panels: Vec<P>) -> WipeResult<PairedList<T, P>> {
    if triggers.len() != panels.len() {
        return Err(WipeError::CountMismatch {
            triggers: triggers.len(),
            panels: panels.len(),
        });
    }
    if panels.is_empty() {
        return Err(WipeError::EmptyInput);
    }

    let last = panels.len() - 1;
    let slots = triggers
        .into_iter()
        .zip(panels)
        .enumerate()
        .map(|(index, (trigger, panel))| PanelSlot {
            index,
            trigger,
            panel,
            has_predecessor: index > 0,
            has_successor: index < last,
        })
        .collect();

    Ok(PairedList { slots })
}

#[cfg(test)]
#[path = "../../tests/unit/registry/panels.rs"]
mod tests;
