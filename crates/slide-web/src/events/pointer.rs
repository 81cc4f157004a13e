use crate::input::{is_mouse_event, move_event_for, released_elsewhere, END_EVENTS, START_EVENTS};
use crate::slide::SlideState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Horizontal pointer coordinate of a mouse event or the first changed touch.
fn pointer_x(ev: &web::Event) -> Option<f64> {
    if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(me.client_x() as f64);
    }
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(|te| te.changed_touches().get(0))
        .map(|t| t.client_x() as f64)
}

/// Press/move/release handlers for one carousel.
///
/// The closures are built once and kept here so the move handler added at
/// gesture start is the very same function removed at gesture end. Dropping
/// this struct detaches everything from the wrapper.
pub struct DragListeners {
    wrapper: web::HtmlElement,
    on_start: Handler,
    on_move: Handler,
    on_end: Handler,
}

impl DragListeners {
    pub fn wire(state: &Rc<SlideState>) -> Self {
        let wrapper = state.wrapper().clone();

        let s = state.clone();
        let target = wrapper.clone();
        let own_fn: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
        let own = own_fn.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::Event| {
            let released = ev
                .dyn_ref::<web::MouseEvent>()
                .is_some_and(|me| released_elsewhere(&ev.type_(), me.buttons()));
            if released {
                if let Some(f) = own.borrow().as_ref() {
                    let _ = target.remove_event_listener_with_callback("mousemove", f);
                }
                if s.is_dragging() {
                    match s.end_drag() {
                        Ok(outcome) => log::debug!("[drag] released outside wrapper: {outcome:?}"),
                        Err(e) => log::warn!("[drag] released outside wrapper: {e}"),
                    }
                }
                return;
            }
            if let Some(x) = pointer_x(&ev) {
                let _ = s.update_drag(x);
            }
        }) as Box<dyn FnMut(_)>);
        let move_fn: js_sys::Function = on_move.as_ref().unchecked_ref::<js_sys::Function>().clone();
        own_fn.replace(Some(move_fn.clone()));

        let s = state.clone();
        let target = wrapper.clone();
        let add_move = move_fn.clone();
        let on_start = Closure::wrap(Box::new(move |ev: web::Event| {
            let kind = ev.type_();
            if is_mouse_event(&kind) {
                ev.prevent_default();
            }
            let Some(x) = pointer_x(&ev) else {
                return;
            };
            if let Err(e) = s.begin_drag(x) {
                log::warn!("[drag] {kind} ignored: {e}");
                return;
            }
            if let Some(move_kind) = move_event_for(&kind) {
                let _ = target.add_event_listener_with_callback(move_kind, &add_move);
            }
        }) as Box<dyn FnMut(_)>);

        let s = state.clone();
        let target = wrapper.clone();
        let remove_move = move_fn;
        let on_end = Closure::wrap(Box::new(move |ev: web::Event| {
            let kind = ev.type_();
            if let Some(move_kind) = move_event_for(&kind) {
                let _ = target.remove_event_listener_with_callback(move_kind, &remove_move);
            }
            if !s.is_dragging() {
                return;
            }
            match s.end_drag() {
                Ok(outcome) => log::debug!("[drag] {kind}: {outcome:?}"),
                Err(e) => log::warn!("[drag] {kind}: {e}"),
            }
        }) as Box<dyn FnMut(_)>);

        for kind in START_EVENTS {
            let _ = wrapper.add_event_listener_with_callback(kind, on_start.as_ref().unchecked_ref());
        }
        for kind in END_EVENTS {
            let _ = wrapper.add_event_listener_with_callback(kind, on_end.as_ref().unchecked_ref());
        }

        Self {
            wrapper,
            on_start,
            on_move,
            on_end,
        }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        let w = &self.wrapper;
        for kind in START_EVENTS {
            let _ = w.remove_event_listener_with_callback(kind, self.on_start.as_ref().unchecked_ref());
        }
        for kind in END_EVENTS {
            let _ = w.remove_event_listener_with_callback(kind, self.on_end.as_ref().unchecked_ref());
        }
        for kind in ["mousemove", "touchmove"] {
            let _ = w.remove_event_listener_with_callback(kind, self.on_move.as_ref().unchecked_ref());
        }
    }
}
