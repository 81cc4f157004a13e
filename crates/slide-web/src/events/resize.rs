use crate::slide::SlideState;
use crate::timing::timeout_millis;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pending `setTimeout` for the settle check. Re-arming clears the previous
/// handle so only the latest timer can fire.
struct Timer {
    window: web::Window,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<js_sys::Function>>,
}

impl Timer {
    fn arm(&self, delay: Duration) {
        self.cancel();
        let Some(callback) = self.callback.borrow().clone() else {
            return;
        };
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&callback, timeout_millis(delay))
        {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::error!("[resize] setTimeout: {e:?}"),
        }
    }

    fn cancel(&self) {
        if let Some(h) = self.handle.take() {
            self.window.clear_timeout_with_handle(h);
        }
    }
}

/// Window `resize` listener that re-centres the carousel once resizing settles.
pub struct ResizeListener {
    timer: Rc<Timer>,
    on_resize: Closure<dyn FnMut()>,
    _on_settle: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn wire(state: &Rc<SlideState>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let timer = Rc::new(Timer {
            window: window.clone(),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let s = state.clone();
        let t = timer.clone();
        let on_settle = Closure::wrap(Box::new(move || {
            t.handle.set(None);
            let now = Instant::now();
            let due = s.debounce().borrow_mut().poll(now);
            if !due {
                // Timer fired a hair early; wait out the rest of the window.
                if let Some(left) = s.debounce().borrow().remaining(now) {
                    t.arm(left);
                }
                return;
            }
            match s.relayout() {
                Ok(true) => log::debug!("[resize] relayout done"),
                Ok(false) => {}
                Err(e) => log::error!("[resize] relayout: {e}"),
            }
        }) as Box<dyn FnMut()>);
        *timer.callback.borrow_mut() = Some(on_settle.as_ref().unchecked_ref::<js_sys::Function>().clone());

        let s = state.clone();
        let t = timer.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let mut debounce = s.debounce().borrow_mut();
            debounce.signal(Instant::now());
            t.arm(debounce.window());
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("resize listener: {e:?}"))?;

        Ok(Self {
            timer,
            on_resize,
            _on_settle: on_settle,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.timer.cancel();
        let _ = self
            .timer
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        self.timer.callback.borrow_mut().take();
    }
}
