use crate::constants::{LOADING_OVERLAY_ID, LOGO_BOUNDS_ID, LOGO_ID};
use crate::core::Scene;
use crate::dom;
use crate::overlay;
use crate::render::CanvasRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub renderer: Rc<RefCell<CanvasRenderer>>,
    pub document: web::Document,
    pub logo: Option<web::HtmlElement>,
    pub loading: Rc<Cell<bool>>,
}

impl FrameContext {
    /// One display refresh: update, then draw. Nothing here suspends.
    pub fn frame(&mut self) {
        let container = dom::element_size(&self.document, LOGO_BOUNDS_ID);
        let mut scene = self.scene.borrow_mut();
        scene.tick(container);

        let distance = scene.connection_distance();
        let hue = scene.hue;
        let logo_pos = scene.logo.pos;
        self.renderer
            .borrow()
            .draw(scene.positions(), distance, &hue);
        drop(scene);

        if let Some(logo) = &self.logo {
            let style = logo.style();
            _ = style.set_property("left", &format!("{}px", logo_pos.x));
            _ = style.set_property("top", &format!("{}px", logo_pos.y));
        }
        if self.loading.get() {
            overlay::tint(&self.document, LOADING_OVERLAY_ID, &hue.css());
        }
    }
}

pub fn logo_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(LOGO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop; cancelled on `stop` or drop.
pub struct AnimationLoop {
    tick: TickClosure,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                handle_clone.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        Self { tick, handle }
    }

    pub fn stop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Dropping the closure also breaks its self-reference.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

/// setInterval timer; cleared on drop.
pub struct IntervalTimer {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(period_ms: i32, callback: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval error: {:?}", e))?;
        Ok(Self {
            handle: Some(handle),
            _callback: callback,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

/// Event listener that is removed again on drop.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl ListenerGuard {
    pub fn attach(
        target: web::EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target,
            event,
            callback,
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// One-shot timeout; the closure frees itself after firing.
pub fn set_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(callback);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms,
    );
}
