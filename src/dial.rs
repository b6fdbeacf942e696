//! The clock widget itself.
//!
//! [`Dial`] knows nothing about terminals. A host calls its lifecycle
//! methods ([`Dial::attach`], [`Dial::resize`], [`Dial::draw`] and
//! [`Dial::detach`]) and hands it a [`Surface`] to draw onto.

use std::sync::Arc;

use crate::{
    canvas::Surface,
    layout::{self, Constraint, Layout},
    render,
    scheduler::{Invalidator, Scheduler},
    style::ClockStyle,
    time::{self, TimeSample},
};

/// A live analog clock face.
pub struct Dial {
    /// How the face looks, which never changes after creation.
    style: ClockStyle,

    /// The side length the layout was computed for.
    side: f32,

    /// The cached layout, which is [`None`] until the first resize.
    layout: Option<Layout>,

    /// Where the time comes from.
    source: Box<dyn time::Source>,

    /// Signalled by the scheduler whenever a redraw is due.
    invalidator: Arc<Invalidator>,

    /// The background ticker.
    scheduler: Scheduler<Invalidator>,
}

impl Dial {
    /// Creates a detached dial.
    pub fn new(style: ClockStyle, source: Box<dyn time::Source>) -> Self {
        let invalidator = Arc::new(Invalidator::default());

        Self {
            style,
            side: 0.0,
            layout: None,
            source,
            scheduler: Scheduler::new(&invalidator),
            invalidator,
        }
    }

    /// Picks a square size within the host's constraints.
    pub fn measure(width: Constraint, height: Constraint) -> u16 {
        layout::measure(width, height)
    }

    /// Tells the dial how big its surface is.
    ///
    /// The layout is only recomputed if the size actually changed,
    /// and the return value says whether it did.
    pub fn resize(&mut self, side: f32) -> bool {
        if self.layout.is_some() && (self.side - side).abs() < f32::EPSILON {
            return false;
        }

        let layout = Layout::compute(side, &self.style);
        tracing::debug!(side, radius = layout.radius, "layout recomputed");

        self.side = side;
        self.layout = Some(layout);
        true
    }

    /// The current layout, if the dial has been sized yet.
    pub const fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// The shared redraw flag, for the host to wait on.
    pub fn invalidator(&self) -> Arc<Invalidator> {
        Arc::clone(&self.invalidator)
    }

    /// Whether the dial is currently ticking.
    pub fn attached(&self) -> bool {
        self.scheduler.running()
    }

    /// Starts requesting a redraw every second.
    pub fn attach(&mut self) {
        self.scheduler.start();
    }

    /// Stops requesting redraws, and drops any request that's still pending.
    pub async fn detach(&mut self) {
        self.scheduler.stop().await;
        self.invalidator.take();
    }

    /// Draws the face at the current time.
    ///
    /// Returns the time that was drawn, or [`None`] if the dial
    /// hasn't been sized yet and so nothing was drawn.
    pub fn draw(&self, surface: &mut impl Surface) -> Option<TimeSample> {
        let layout = self.layout.as_ref()?;
        let time = self.source.sample();
        render::draw(surface, layout, time, &self.style);

        Some(time)
    }
}
