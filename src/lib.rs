//! scrollwipe drives a sequential "wipe" reveal/conceal effect over a vertically
//! stacked list of content panels as the page scrolls.
//!
//! Each panel is paired with a trigger region. While its trigger is active a panel is
//! fully revealed; once the trigger passes its midpoint the panel is clipped away
//! into its bottom edge, unless it is the last panel, which stays open.
//!
//! # Pipeline overview
//!
//! 1. **Register**: trigger and panel elements are paired by position
//!    ([`register`]), all-or-nothing.
//! 2. **Sequence**: each panel gets a [`PanelSequence`] mapping trigger
//!    [`Progress`] to a [`RevealPhase`] and a [`ClipGeometry`] ([`clip_for`]).
//! 3. **Drive**: [`WipeScene::setup`] writes the first-paint clips and subscribes
//!    every sequence to the host [`ScrollObserver`]. Dropping the scene unsubscribes.
//!
//! Data flows one way: scroll position, observer progress, clip geometry, element
//! style. The host supplies the observer, the [`Document`] and the
//! [`ClipTarget`] realization; [`HeadlessPage`] and [`HeadlessScroller`] are
//! in-memory implementations for tests and non-browser hosts.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Errors only at setup**: once wired, progress handling cannot fail.
//! - **Pure geometry**: clip state is a function of phase and progress alone.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod clip;
mod config;
mod driver;
mod foundation;
mod headless;
mod registry;
mod sequence;

pub use animation::ease::Ease;
pub use clip::geometry::ClipGeometry;
pub use clip::state::{ClipStrategy, RevealPhase, clip_for};
pub use config::settings::{SmoothScrollConfig, WipeConfig};
pub use driver::host::{
    ClipTarget, Document, NoSmoothScroller, ScrollObserver, SmoothScroller, TriggerCallback,
};
pub use driver::region::{RegionBoundary, ScrollEdge, TriggerRegion};
pub use driver::scene::WipeScene;
pub use foundation::core::Progress;
pub use foundation::error::{WipeError, WipeResult};
pub use headless::page::{
    HeadlessElement, HeadlessPage, HeadlessScroller, HeadlessSmoother, HeadlessSubscription,
};
pub use registry::panels::{PairedList, PanelSlot, register};
pub use sequence::sequencer::{
    CONCEAL_THRESHOLD, ClipUpdate, Panel, PanelSequence, PanelState, RevealSequencer,
    TriggerEvent, initial_geometry, phase_for,
};

pub use kurbo::{Point, Rect};
