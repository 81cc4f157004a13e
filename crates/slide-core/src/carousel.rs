//! The carousel state holder: drag tracking, snap decision and slide commits.
//!
//! Rendering and measurement go through a [`TrackSurface`], so the same state
//! machine drives the DOM in the browser and a recording fake in tests.

use crate::config::CarouselConfig;
use crate::drag::{classify, DragState, GestureOutcome};
use crate::error::{CarouselError, Result};
use crate::layout::{build_entries, SlideEntry, TrackLayout};
use crate::nav::NavigationIndex;

/// Everything the carousel needs from the UI layer.
pub trait TrackSurface {
    /// Opaque handle to one slide element.
    type Slide;

    fn measure(&self) -> TrackLayout<Self::Slide>;
    /// Render the whole track at a horizontal offset.
    fn translate(&mut self, offset: f64);
    fn set_transition(&mut self, enabled: bool);
    /// Move the active marker to `slides[active]`.
    fn mark_active(&mut self, slides: &[SlideEntry<Self::Slide>], active: usize);
}

pub type ObserverId = usize;

type Observer = Box<dyn FnMut(&NavigationIndex)>;

pub struct Carousel<S: TrackSurface> {
    surface: S,
    config: CarouselConfig,
    slides: Vec<SlideEntry<S::Slide>>,
    nav: Option<NavigationIndex>,
    drag: DragState,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: ObserverId,
}

impl<S: TrackSurface> Carousel<S> {
    pub fn new(surface: S, config: CarouselConfig) -> Result<Self> {
        Ok(Self {
            surface,
            config: config.validated()?,
            slides: Vec::new(),
            nav: None,
            drag: DragState::default(),
            observers: Vec::new(),
            next_observer_id: 0,
        })
    }

    /// Measure the slides, enable easing and show the configured start slide.
    pub fn init(&mut self) -> Result<()> {
        self.slides = build_entries(self.surface.measure());
        if self.slides.is_empty() {
            return Err(CarouselError::EmptyTrack);
        }
        self.surface.set_transition(true);
        self.change_slide(self.config.start_index)
    }

    /// Recompute centring offsets and re-centre the active slide.
    ///
    /// Returns `Ok(false)` when the surface reports no slides; the previous
    /// layout is kept in that case.
    pub fn relayout(&mut self) -> Result<bool> {
        let layout: TrackLayout<S::Slide> = self.surface.measure();
        if layout.slides.is_empty() {
            log::debug!("[slide] relayout skipped: no slides");
            return Ok(false);
        }
        self.slides = build_entries(layout);
        let last = self.slides.len() - 1;
        let target = self
            .nav
            .map(|n| n.active)
            .unwrap_or(self.config.start_index)
            .min(last);
        self.change_slide(target)?;
        log::debug!("[slide] relayout: {} slides, active {}", self.slides.len(), target);
        Ok(true)
    }

    pub fn begin_drag(&mut self, pointer_x: f64) -> Result<()> {
        if self.nav.is_none() {
            return Err(CarouselError::EmptyTrack);
        }
        if self.drag.active {
            log::debug!("[drag] restarting gesture that never ended");
        }
        self.drag.begin(pointer_x);
        self.surface.set_transition(false);
        Ok(())
    }

    /// Returns the live offset that was rendered.
    pub fn update_drag(&mut self, pointer_x: f64) -> Result<f64> {
        if !self.drag.active {
            log::warn!("[drag] move at x={pointer_x} without a gesture; ignored");
            return Err(CarouselError::NoActiveDrag);
        }
        let live = self.drag.update(pointer_x, self.config.drag_multiplier);
        self.surface.translate(live);
        Ok(live)
    }

    pub fn end_drag(&mut self) -> Result<GestureOutcome> {
        if !self.drag.active {
            log::warn!("[drag] release without a gesture; ignored");
            return Err(CarouselError::NoActiveDrag);
        }
        let movement = self.drag.end();
        self.surface.set_transition(true);
        let nav = self.nav.ok_or(CarouselError::EmptyTrack)?;
        let outcome = classify(movement, self.config.advance_threshold, &nav);
        log::debug!("[drag] movement {movement:.1} -> {outcome:?}");
        self.change_slide(outcome.target())?;
        Ok(outcome)
    }

    pub fn change_slide(&mut self, index: usize) -> Result<()> {
        let count = self.slides.len();
        let offset = self
            .slides
            .get(index)
            .map(|s| s.center_offset)
            .ok_or(CarouselError::IndexOutOfRange { index, count })?;
        self.surface.translate(offset);
        let nav = NavigationIndex::new(index, count)?;
        self.nav = Some(nav);
        self.drag.final_position = offset;
        self.surface.mark_active(&self.slides, index);
        for (_, observer) in self.observers.iter_mut() {
            observer(&nav);
        }
        Ok(())
    }

    /// Go to the next slide if there is one. Returns whether it moved.
    pub fn active_next(&mut self) -> Result<bool> {
        match self.nav.and_then(|n| n.next) {
            Some(next) => self.change_slide(next).map(|_| true),
            None => Ok(false),
        }
    }

    /// Go to the previous slide if there is one. Returns whether it moved.
    pub fn active_prev(&mut self) -> Result<bool> {
        match self.nav.and_then(|n| n.prev) {
            Some(prev) => self.change_slide(prev).map(|_| true),
            None => Ok(false),
        }
    }

    /// Register a callback fired synchronously after every committed change.
    pub fn subscribe(&mut self, observer: impl FnMut(&NavigationIndex) + 'static) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    #[inline]
    pub fn nav(&self) -> Option<NavigationIndex> {
        self.nav
    }

    #[inline]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[inline]
    pub fn slides(&self) -> &[SlideEntry<S::Slide>] {
        &self.slides
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
