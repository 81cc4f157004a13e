//! Shared per-instance state: the core carousel plus the bits of DOM glue that
//! every listener needs.
//!
//! All mutation goes through methods here so the core borrow is released
//! before `changeEvent` is dispatched; listeners of that event read the
//! carousel again and would otherwise hit a double borrow.

use crate::constants::CHANGE_EVENT;
use crate::track::DomTrack;
use slide_core::{Carousel, CarouselConfig, ChangeLatch, GestureOutcome, ResizeDebounce, Result};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct SlideState {
    core: RefCell<Carousel<DomTrack>>,
    wrapper: web::HtmlElement,
    changed: ChangeLatch,
    debounce: RefCell<ResizeDebounce>,
}

impl SlideState {
    pub fn new(
        slide: web::HtmlElement,
        wrapper: web::HtmlElement,
        config: CarouselConfig,
    ) -> anyhow::Result<Rc<Self>> {
        let debounce = ResizeDebounce::new(config.resize_quiescence);
        let mut core = Carousel::new(DomTrack::new(slide, wrapper.clone()), config)?;
        let changed = ChangeLatch::default();
        changed.attach(&mut core);
        Ok(Rc::new(Self {
            core: RefCell::new(core),
            wrapper,
            changed,
            debounce: RefCell::new(debounce),
        }))
    }

    fn with_core<T>(&self, f: impl FnOnce(&mut Carousel<DomTrack>) -> T) -> T {
        let out = f(&mut self.core.borrow_mut());
        self.flush_change();
        out
    }

    fn flush_change(&self) {
        if !self.changed.take() {
            return;
        }
        match web::Event::new(CHANGE_EVENT) {
            Ok(ev) => {
                let _ = self.wrapper.dispatch_event(&ev);
            }
            Err(e) => log::error!("[slide] create {CHANGE_EVENT}: {e:?}"),
        }
    }

    pub fn init(&self) -> Result<()> {
        self.with_core(|c| c.init())
    }

    pub fn begin_drag(&self, pointer_x: f64) -> Result<()> {
        self.with_core(|c| c.begin_drag(pointer_x))
    }

    pub fn update_drag(&self, pointer_x: f64) -> Result<f64> {
        self.with_core(|c| c.update_drag(pointer_x))
    }

    pub fn end_drag(&self) -> Result<GestureOutcome> {
        self.with_core(|c| c.end_drag())
    }

    pub fn change_slide(&self, index: usize) -> Result<()> {
        self.with_core(|c| c.change_slide(index))
    }

    pub fn active_next(&self) -> Result<bool> {
        self.with_core(|c| c.active_next())
    }

    pub fn active_prev(&self) -> Result<bool> {
        self.with_core(|c| c.active_prev())
    }

    pub fn relayout(&self) -> Result<bool> {
        self.with_core(|c| c.relayout())
    }

    pub fn is_dragging(&self) -> bool {
        self.core.borrow().drag().active
    }

    pub fn active_index(&self) -> Option<usize> {
        self.core.borrow().nav().map(|n| n.active)
    }

    pub fn slide_count(&self) -> usize {
        self.core.borrow().slide_count()
    }

    #[inline]
    pub fn wrapper(&self) -> &web::HtmlElement {
        &self.wrapper
    }

    #[inline]
    pub fn debounce(&self) -> &RefCell<ResizeDebounce> {
        &self.debounce
    }
}
