//! Optional decoration layer: arrow buttons and the indicator list.
//!
//! Both only talk to the carousel through `change_slide`, `active_next`,
//! `active_prev` and the wrapper's `changeEvent`.

use crate::constants::{ACTIVE_CLASS, CHANGE_EVENT, CONTROL_ATTR, CONTROL_ATTR_VALUE};
use crate::dom;
use crate::markup::indicator_markup;
use crate::slide::SlideState;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type ClickHandler = Closure<dyn FnMut(web::Event)>;

fn listen(target: &web::EventTarget, kind: &str, handler: &ClickHandler) {
    let _ = target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref());
}

fn unlisten(target: &web::EventTarget, kind: &str, handler: &ClickHandler) {
    let _ = target.remove_event_listener_with_callback(kind, handler.as_ref().unchecked_ref());
}

/// Previous/next buttons.
pub struct Arrows {
    prev: web::HtmlElement,
    next: web::HtmlElement,
    on_prev: ClickHandler,
    on_next: ClickHandler,
}

impl Arrows {
    pub fn wire(state: &Rc<SlideState>, prev: web::HtmlElement, next: web::HtmlElement) -> Self {
        let s = state.clone();
        let on_prev = Closure::wrap(Box::new(move |_: web::Event| {
            if let Err(e) = s.active_prev() {
                log::warn!("[controls] prev: {e}");
            }
        }) as Box<dyn FnMut(_)>);
        let s = state.clone();
        let on_next = Closure::wrap(Box::new(move |_: web::Event| {
            if let Err(e) = s.active_next() {
                log::warn!("[controls] next: {e}");
            }
        }) as Box<dyn FnMut(_)>);
        listen(&prev, "click", &on_prev);
        listen(&next, "click", &on_next);
        Self {
            prev,
            next,
            on_prev,
            on_next,
        }
    }
}

impl Drop for Arrows {
    fn drop(&mut self) {
        unlisten(&self.prev, "click", &self.on_prev);
        unlisten(&self.next, "click", &self.on_next);
    }
}

/// Indicator list with one clickable item per slide.
pub struct Indicators {
    list: web::HtmlElement,
    items: Rc<Vec<web::HtmlElement>>,
    wrapper: web::HtmlElement,
    on_click: Vec<ClickHandler>,
    on_change: ClickHandler,
    generated: bool,
}

fn mark_item(items: &[web::HtmlElement], active: Option<usize>) {
    for (i, item) in items.iter().enumerate() {
        dom::set_class(item, ACTIVE_CLASS, Some(i) == active);
    }
}

impl Indicators {
    /// Build `<ul data-control="slide">` inside the wrapper.
    pub fn create(state: &Rc<SlideState>, document: &web::Document) -> anyhow::Result<Self> {
        let list = document
            .create_element("ul")
            .map_err(|e| anyhow!("create ul: {e:?}"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("ul is not an HTML element"))?;
        let _ = list.set_attribute(CONTROL_ATTR, CONTROL_ATTR_VALUE);
        list.set_inner_html(&indicator_markup(state.slide_count()));
        state
            .wrapper()
            .append_child(&list)
            .map_err(|e| anyhow!("append indicators: {e:?}"))?;
        Ok(Self::wire(state, list, true))
    }

    /// Adopt a list already in the page; its children map to slides by position.
    pub fn adopt(state: &Rc<SlideState>, list: web::HtmlElement) -> Self {
        Self::wire(state, list, false)
    }

    fn wire(state: &Rc<SlideState>, list: web::HtmlElement, generated: bool) -> Self {
        let items = Rc::new(dom::html_children(&list));
        if items.len() != state.slide_count() {
            log::warn!(
                "[controls] {} indicator items for {} slides",
                items.len(),
                state.slide_count()
            );
        }

        let on_click = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let s = state.clone();
                let handler = Closure::wrap(Box::new(move |ev: web::Event| {
                    ev.prevent_default();
                    if let Err(e) = s.change_slide(index) {
                        log::warn!("[controls] indicator {index}: {e}");
                    }
                }) as Box<dyn FnMut(_)>);
                listen(item, "click", &handler);
                handler
            })
            .collect();

        let s = state.clone();
        let marked = items.clone();
        let on_change = Closure::wrap(Box::new(move |_: web::Event| {
            mark_item(&marked, s.active_index());
        }) as Box<dyn FnMut(_)>);
        let wrapper = state.wrapper().clone();
        listen(&wrapper, CHANGE_EVENT, &on_change);
        mark_item(&items, state.active_index());

        Self {
            list,
            items,
            wrapper,
            on_click,
            on_change,
            generated,
        }
    }
}

impl Drop for Indicators {
    fn drop(&mut self) {
        unlisten(&self.wrapper, CHANGE_EVENT, &self.on_change);
        for (item, handler) in self.items.iter().zip(&self.on_click) {
            unlisten(item, "click", handler);
        }
        if self.generated {
            self.list.remove();
        }
    }
}
