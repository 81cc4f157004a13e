use crate::constants::{ACTIVE_CLASS, TRACK_TRANSITION};
use crate::dom;
use crate::markup::translate_css;
use slide_core::{SlideEntry, SlideGeometry, TrackLayout, TrackSurface};
use web_sys as web;

/// The slide strip and its viewport wrapper.
pub struct DomTrack {
    slide: web::HtmlElement,
    wrapper: web::HtmlElement,
}

impl DomTrack {
    pub fn new(slide: web::HtmlElement, wrapper: web::HtmlElement) -> Self {
        Self { slide, wrapper }
    }
}

impl TrackSurface for DomTrack {
    type Slide = web::HtmlElement;

    fn measure(&self) -> TrackLayout<web::HtmlElement> {
        let slides = dom::html_children(&self.slide)
            .into_iter()
            .map(|el| {
                let geometry = SlideGeometry {
                    left: el.offset_left() as f64,
                    width: el.offset_width() as f64,
                };
                (el, geometry)
            })
            .collect();
        TrackLayout {
            wrapper_width: self.wrapper.offset_width() as f64,
            slides,
        }
    }

    fn translate(&mut self, offset: f64) {
        dom::set_style(&self.slide, "transform", &translate_css(offset));
    }

    fn set_transition(&mut self, enabled: bool) {
        dom::set_style(
            &self.slide,
            "transition",
            if enabled { TRACK_TRANSITION } else { "" },
        );
    }

    fn mark_active(&mut self, slides: &[SlideEntry<web::HtmlElement>], active: usize) {
        for (i, entry) in slides.iter().enumerate() {
            dom::set_class(&entry.element, ACTIVE_CLASS, i == active);
        }
    }
}
