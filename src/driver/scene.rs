use std::{cell::RefCell, rc::Rc};

use crate::{
    clip::geometry::ClipGeometry,
    config::settings::WipeConfig,
    driver::host::{ClipTarget, Document, ScrollObserver, SmoothScroller},
    driver::region::TriggerRegion,
    foundation::error::{WipeError, WipeResult},
    registry::panels::register,
    sequence::sequencer::{PanelState, RevealSequencer},
};

/// A wired wipe scene: one live subscription per panel.
///
/// Dropping the scene releases every subscription, so no callback can reach a
/// detached panel after teardown.
pub struct WipeScene<S> {
    subscriptions: Vec<S>,
    sequencer: Rc<RefCell<RevealSequencer>>,
}

impl<S> std::fmt::Debug for WipeScene<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WipeScene")
            .field("panels", &self.subscriptions.len())
            .finish()
    }
}

impl<S> WipeScene<S> {
    /// Validate the page and wire every panel, or wire nothing.
    ///
    /// Order: dependency checks, smooth-scroll install, container lookup, pairing,
    /// first-paint clip writes, subscriptions. Empty trigger and panel lists give an
    /// inert scene with no clip writes. If a subscription fails, every subscription
    /// made so far is released and every panel is reset to fully open, so the page
    /// falls back to plain, unanimated content.
    #[tracing::instrument(skip_all, fields(container = %config.container_selector))]
    pub fn setup<D, O, M>(
        config: &WipeConfig,
        document: &D,
        observer: &mut O,
        smoother: &mut M,
    ) -> WipeResult<Self>
    where
        D: Document,
        D::Element: ClipTarget,
        O: ScrollObserver<D::Element, Subscription = S>,
        M: SmoothScroller,
    {
        let res = Self::setup_impl(config, document, observer, smoother);
        match &res {
            Ok(scene) if scene.is_empty() => {
                tracing::debug!("no triggers or panels; nothing to wire");
            }
            Ok(scene) => tracing::info!(panels = scene.len(), "wipe scene wired"),
            Err(e @ WipeError::ContainerNotFound(_)) => {
                tracing::warn!(error = %e, "wipe scene skipped");
            }
            Err(e) => tracing::error!(error = %e, "wipe scene setup failed"),
        }
        res
    }

    /// Like [`WipeScene::setup`], degrading to `None` after logging the failure.
    pub fn mount<D, O, M>(
        config: &WipeConfig,
        document: &D,
        observer: &mut O,
        smoother: &mut M,
    ) -> Option<Self>
    where
        D: Document,
        D::Element: ClipTarget,
        O: ScrollObserver<D::Element, Subscription = S>,
        M: SmoothScroller,
    {
        Self::setup(config, document, observer, smoother).ok()
    }

    fn setup_impl<D, O, M>(
        config: &WipeConfig,
        document: &D,
        observer: &mut O,
        smoother: &mut M,
    ) -> WipeResult<Self>
    where
        D: Document,
        D::Element: ClipTarget,
        O: ScrollObserver<D::Element, Subscription = S>,
        M: SmoothScroller,
    {
        config.validate()?;

        if !observer.is_ready() {
            return Err(WipeError::dependency_missing(observer.name()));
        }
        if let Some(smooth) = &config.smooth_scroll {
            if !smoother.is_ready() {
                return Err(WipeError::dependency_missing("smooth scroller"));
            }
            smoother.create(smooth)?;
        }

        let container = document
            .query_selector(&config.container_selector)
            .ok_or_else(|| WipeError::container_not_found(&config.container_selector))?;
        let triggers = document.query_selector_all(&container, &config.trigger_selector);
        let panels = document.query_selector_all(&container, &config.panel_selector);

        let list = match register(triggers, panels) {
            Ok(list) => list,
            Err(WipeError::EmptyInput) => return Ok(Self::inert()),
            Err(e) => return Err(e),
        };

        let sequencer = Rc::new(RefCell::new(RevealSequencer::from_list(&list, config.strategy)));
        for (slot, update) in list.iter().zip(sequencer.borrow().initial_updates()) {
            slot.panel.apply_clip(&update.geometry);
        }

        let painted: Vec<D::Element> = list.iter().map(|slot| slot.panel.clone()).collect();
        let mut subscriptions = Vec::with_capacity(list.len());
        for slot in list {
            let index = slot.index;
            let panel = slot.panel;
            let routed = Rc::clone(&sequencer);
            let res = observer.observe(
                &slot.trigger,
                TriggerRegion::PANEL,
                Box::new(move |event| {
                    let update = routed.borrow_mut().apply(index, event);
                    if let Some(update) = update
                        && update.geometry_changed()
                    {
                        panel.apply_clip(&update.geometry);
                    }
                }),
            );
            match res {
                Ok(sub) => subscriptions.push(sub),
                Err(e) => {
                    drop(subscriptions);
                    for panel in &painted {
                        panel.apply_clip(&ClipGeometry::FULL_OPEN);
                    }
                    return Err(e);
                }
            }
        }

        Ok(Self {
            subscriptions,
            sequencer,
        })
    }

    /// A scene with nothing wired.
    pub fn inert() -> Self {
        Self {
            subscriptions: Vec::new(),
            sequencer: Rc::default(),
        }
    }

    /// Number of wired panels.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// True when nothing is wired.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Current lifecycle state of every wired panel, in document order.
    pub fn states(&self) -> Vec<PanelState> {
        self.sequencer.borrow().states()
    }

    /// Release every subscription.
    pub fn teardown(self) {
        tracing::debug!(panels = self.len(), "wipe scene torn down");
        drop(self);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/scene.rs"]
mod tests;
