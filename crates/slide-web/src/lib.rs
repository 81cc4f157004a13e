#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use slide_core::CarouselConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod controls;
mod dom;
mod events;
mod input;
mod markup;
mod slide;
mod timing;
mod track;

use controls::{Arrows, Indicators};
use events::{DragListeners, ResizeListener};
use slide::SlideState;

#[inline]
fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn document() -> anyhow::Result<web::Document> {
    dom::window_document().ok_or_else(|| anyhow!("no document"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slide-web loaded");
    Ok(())
}

/// A draggable carousel bound to a track element and its wrapper.
///
/// ```js
/// const slide = new SlideNav(".slide", ".wrapper");
/// slide.init();
/// slide.addArrow(".prev", ".next");
/// slide.addControl();
/// ```
///
/// Every exported method takes `&self`: `changeEvent` listeners run inside
/// these calls and may call back into the same object.
#[wasm_bindgen]
pub struct SlideNav {
    state: Rc<SlideState>,
    drag: RefCell<Option<DragListeners>>,
    resize: RefCell<Option<ResizeListener>>,
    arrows: RefCell<Option<Arrows>>,
    control: RefCell<Option<Indicators>>,
}

impl SlideNav {
    fn build(slide: &str, wrapper: &str) -> anyhow::Result<SlideNav> {
        let document = document()?;
        let slide_el = dom::query_html(&document, slide)?;
        let wrapper_el = dom::query_html(&document, wrapper)?;
        let config = config::config_from_attributes(CarouselConfig::default(), |name| {
            wrapper_el.get_attribute(name)
        });
        let state = SlideState::new(slide_el, wrapper_el, config)?;
        Ok(SlideNav {
            state,
            drag: RefCell::new(None),
            resize: RefCell::new(None),
            arrows: RefCell::new(None),
            control: RefCell::new(None),
        })
    }
}

#[wasm_bindgen]
impl SlideNav {
    #[wasm_bindgen(constructor)]
    pub fn new(slide: &str, wrapper: &str) -> Result<SlideNav, JsValue> {
        Self::build(slide, wrapper).map_err(|e| js_err(format!("{e:#}")))
    }

    /// Measure slides, show the start slide and attach drag and resize handling.
    pub fn init(&self) -> Result<(), JsValue> {
        self.state.init().map_err(js_err)?;
        let drag = DragListeners::wire(&self.state);
        let resize = ResizeListener::wire(&self.state).map_err(js_err)?;
        self.drag.replace(Some(drag));
        self.resize.replace(Some(resize));
        log::info!(
            "[slide] ready: {} slides, active {:?}",
            self.state.slide_count(),
            self.state.active_index()
        );
        Ok(())
    }

    #[wasm_bindgen(js_name = addArrow)]
    pub fn add_arrow(&self, prev: &str, next: &str) -> Result<(), JsValue> {
        let document = document().map_err(js_err)?;
        let prev_el = dom::query_html(&document, prev).map_err(js_err)?;
        let next_el = dom::query_html(&document, next).map_err(js_err)?;
        let arrows = Arrows::wire(&self.state, prev_el, next_el);
        self.arrows.replace(Some(arrows));
        Ok(())
    }

    /// Attach indicators: adopt the list at `custom_control`, or generate one.
    #[wasm_bindgen(js_name = addControl)]
    pub fn add_control(&self, custom_control: Option<String>) -> Result<(), JsValue> {
        drop(self.control.take());
        let document = document().map_err(js_err)?;
        let control = match custom_control {
            Some(selector) => {
                let list = dom::query_html(&document, &selector).map_err(js_err)?;
                Indicators::adopt(&self.state, list)
            }
            None => Indicators::create(&self.state, &document).map_err(js_err)?,
        };
        self.control.replace(Some(control));
        Ok(())
    }

    #[wasm_bindgen(js_name = changeSlide)]
    pub fn change_slide(&self, index: usize) -> Result<(), JsValue> {
        self.state.change_slide(index).map_err(js_err)
    }

    #[wasm_bindgen(js_name = activeNextSlide)]
    pub fn active_next_slide(&self) -> Result<bool, JsValue> {
        self.state.active_next().map_err(js_err)
    }

    #[wasm_bindgen(js_name = activePrevSlide)]
    pub fn active_prev_slide(&self) -> Result<bool, JsValue> {
        self.state.active_prev().map_err(js_err)
    }

    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> Option<u32> {
        self.state.active_index().map(|i| i as u32)
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.state.slide_count() as u32
    }
}
