use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    clip::geometry::ClipGeometry,
    config::settings::SmoothScrollConfig,
    driver::host::{ClipTarget, Document, ScrollObserver, SmoothScroller, TriggerCallback},
    driver::region::TriggerRegion,
    foundation::error::{WipeError, WipeResult},
    sequence::sequencer::TriggerEvent,
};

/// In-memory element: a vertical box with a class list and a recorded clip.
#[derive(Clone, Debug)]
pub struct HeadlessElement(Rc<ElementData>);

#[derive(Debug)]
struct ElementData {
    id: Option<String>,
    classes: Vec<String>,
    top: f64,
    height: f64,
    children: RefCell<Vec<HeadlessElement>>,
    clip: Cell<Option<ClipGeometry>>,
    clip_writes: Cell<usize>,
}

impl HeadlessElement {
    /// Element with a whitespace-separated class list, positioned at `top`.
    pub fn new(classes: &str, top: f64, height: f64) -> Self {
        Self(Rc::new(ElementData {
            id: None,
            classes: classes.split_whitespace().map(str::to_string).collect(),
            top,
            height,
            children: RefCell::new(Vec::new()),
            clip: Cell::new(None),
            clip_writes: Cell::new(0),
        }))
    }

    /// Element matched by `#id`.
    pub fn with_id(id: &str, top: f64, height: f64) -> Self {
        Self(Rc::new(ElementData {
            id: Some(id.to_string()),
            classes: Vec::new(),
            top,
            height,
            children: RefCell::new(Vec::new()),
            clip: Cell::new(None),
            clip_writes: Cell::new(0),
        }))
    }

    /// Append `child` as the last child.
    pub fn append(&self, child: HeadlessElement) -> HeadlessElement {
        self.0.children.borrow_mut().push(child.clone());
        child
    }

    /// Document offset of the top edge.
    pub fn top(&self) -> f64 {
        self.0.top
    }

    /// Box height.
    pub fn height(&self) -> f64 {
        self.0.height
    }

    /// Clip last applied, if any.
    pub fn clip(&self) -> Option<ClipGeometry> {
        self.0.clip.get()
    }

    /// Number of clip writes received.
    pub fn clip_writes(&self) -> usize {
        self.0.clip_writes.get()
    }

    /// Same underlying element.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(class) = selector.strip_prefix('.') {
            self.0.classes.iter().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.0.id.as_deref() == Some(id)
        } else {
            false
        }
    }

    fn collect_matching(&self, selector: &str, out: &mut Vec<HeadlessElement>) {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect_matching(selector, out);
        }
    }
}

impl ClipTarget for HeadlessElement {
    fn apply_clip(&self, geometry: &ClipGeometry) {
        self.0.clip.set(Some(*geometry));
        self.0.clip_writes.set(self.0.clip_writes.get() + 1);
    }
}

struct Observation {
    id: u64,
    trigger: HeadlessElement,
    region: TriggerRegion,
    callback: TriggerCallback,
    last: Option<f64>,
}

#[derive(Default)]
struct ObserverTable {
    next_id: u64,
    entries: Vec<Observation>,
}

/// Registration on a [`HeadlessScroller`]; dropping it stops delivery.
pub struct HeadlessSubscription {
    id: u64,
    table: Weak<RefCell<ObserverTable>>,
}

impl Drop for HeadlessSubscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

/// Browser-free document: a tree of [`HeadlessElement`]s.
#[derive(Clone, Debug)]
pub struct HeadlessPage {
    root: HeadlessElement,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPage {
    /// Empty page.
    pub fn new() -> Self {
        Self {
            root: HeadlessElement::new("", 0.0, 0.0),
        }
    }

    /// Page with a `.scroll_wrap` holding one `viewport_height`-tall
    /// `.scroll_trigger` per panel, stacked from offset 0, followed by the
    /// `.scroll_item` panels.
    pub fn stacked(viewport_height: f64, panels: usize) -> Self {
        Self::with_counts(viewport_height, panels, panels)
    }

    /// Like [`HeadlessPage::stacked`] with independent trigger and panel counts.
    pub fn with_counts(viewport_height: f64, triggers: usize, panels: usize) -> Self {
        let page = Self::new();
        let total = viewport_height * triggers as f64;
        let wrap = page.append(HeadlessElement::new("scroll_wrap", 0.0, total));
        for i in 0..triggers {
            wrap.append(HeadlessElement::new(
                "scroll_trigger",
                viewport_height * i as f64,
                viewport_height,
            ));
        }
        for _ in 0..panels {
            // Panels are pinned; their box does not drive progress.
            wrap.append(HeadlessElement::new("scroll_item", 0.0, viewport_height));
        }
        page
    }

    /// Append a top-level element.
    pub fn append(&self, child: HeadlessElement) -> HeadlessElement {
        self.root.append(child)
    }

    /// All elements matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Vec<HeadlessElement> {
        self.query_selector_all(&self.root, selector)
    }
}

impl Document for HeadlessPage {
    type Element = HeadlessElement;

    fn query_selector(&self, selector: &str) -> Option<HeadlessElement> {
        self.find_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, scope: &HeadlessElement, selector: &str) -> Vec<HeadlessElement> {
        let mut out = Vec::new();
        scope.collect_matching(selector, &mut out);
        out
    }
}

/// Scroll observer over [`HeadlessElement`] triggers with an immediate scroll
/// position.
///
/// [`HeadlessScroller::scroll_to`] delivers changed progress to every observation
/// in registration order, and `LeaveBack` when the position moves above a
/// trigger's start.
pub struct HeadlessScroller {
    viewport_height: f64,
    scroll_y: f64,
    ready: bool,
    observers: Rc<RefCell<ObserverTable>>,
}

impl HeadlessScroller {
    /// Scroller at offset 0 with the given viewport height.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            ready: true,
            observers: Rc::new(RefCell::new(ObserverTable::default())),
        }
    }

    /// Simulate an engine that is not loaded.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Live observations.
    pub fn active_subscriptions(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll to `y` and deliver events.
    ///
    /// Callbacks must not drop subscriptions of this scroller.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
        let mut table = self.observers.borrow_mut();
        for entry in table.entries.iter_mut() {
            let progress = entry.region.progress_at(
                y,
                entry.trigger.top(),
                entry.trigger.height(),
                self.viewport_height,
            );
            let now = progress.map(|p| p.get());
            if now == entry.last {
                continue;
            }
            let event = match progress {
                Some(p) => TriggerEvent::Progress(p),
                None => TriggerEvent::LeaveBack,
            };
            entry.last = now;
            (entry.callback)(event);
        }
    }
}

impl ScrollObserver<HeadlessElement> for HeadlessScroller {
    type Subscription = HeadlessSubscription;

    fn name(&self) -> &str {
        "headless scroll observer"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn observe(
        &mut self,
        trigger: &HeadlessElement,
        region: TriggerRegion,
        on_event: TriggerCallback,
    ) -> WipeResult<HeadlessSubscription> {
        if !self.ready {
            return Err(WipeError::dependency_missing(self.name()));
        }
        let mut table = self.observers.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push(Observation {
            id,
            trigger: trigger.clone(),
            region,
            callback: on_event,
            last: None,
        });
        Ok(HeadlessSubscription {
            id,
            table: Rc::downgrade(&self.observers),
        })
    }
}

/// Smooth scroller that records its settings and otherwise does nothing.
#[derive(Clone, Debug)]
pub struct HeadlessSmoother {
    ready: bool,
    installed: Option<SmoothScrollConfig>,
}

impl Default for HeadlessSmoother {
    fn default() -> Self {
        Self {
            ready: true,
            installed: None,
        }
    }
}

impl HeadlessSmoother {
    /// Simulate an emulator that is not loaded.
    pub fn missing() -> Self {
        Self {
            ready: false,
            installed: None,
        }
    }

    /// Settings passed to [`SmoothScroller::create`], if it ran.
    pub fn installed(&self) -> Option<&SmoothScrollConfig> {
        self.installed.as_ref()
    }
}

impl SmoothScroller for HeadlessSmoother {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn create(&mut self, config: &SmoothScrollConfig) -> WipeResult<()> {
        if !self.ready {
            return Err(WipeError::dependency_missing("smooth scroller"));
        }
        self.installed = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/headless/page.rs"]
mod tests;
