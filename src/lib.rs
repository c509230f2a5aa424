#![cfg(target_arch = "wasm32")]
use crate::app::App;
use crate::constants::*;
use crate::core::{FieldKind, Notice, Param, Scene, Settings};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod clipboard;
mod constants;
mod core;
mod dom;
mod frame;
mod overlay;
mod panel;
mod render;

/// Handles whose drop tears the background down.
struct Running {
    _animation: frame::AnimationLoop,
    _modulation: frame::IntervalTimer,
    _resize: frame::ListenerGuard,
    app: Rc<App>,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop, the modulation timer and the resize listener.
#[wasm_bindgen]
pub fn teardown() {
    let running = RUNNING.with(|r| r.borrow_mut().take());
    if let Some(running) = running {
        log::info!(
            "dotfield-web stopping ({} dots)",
            running.app.scene.borrow().dot_count()
        );
        drop(running);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let kind = FieldKind::from_attr(canvas.get_attribute(VARIANT_ATTR).as_deref());
    let viewport = dom::sync_canvas_to_viewport(&canvas);
    let clock = Instant::now();
    let scene = Scene::new(
        kind,
        viewport,
        Settings::default(),
        StdRng::from_entropy(),
        0.0,
    );
    log::info!(
        "[scene] {:?} {}x{} dots={}",
        kind,
        viewport.x,
        viewport.y,
        scene.dot_count()
    );

    let renderer = render::CanvasRenderer::new(&canvas)?;
    let panel = panel::ControlPanel::build(&document, CONTROLS_PANEL_ID)?;
    tag_click_exempt(&document);

    let app = Rc::new(App {
        document: document.clone(),
        canvas,
        scene: Rc::new(RefCell::new(scene)),
        renderer: Rc::new(RefCell::new(renderer)),
        panel,
        notice: Rc::new(RefCell::new(Notice::default())),
        controls_visible: Cell::new(true),
        loading: Rc::new(Cell::new(false)),
        clock,
    });

    app.import_fragment(&dom::location_hash());
    app.sync_ui();

    wire_panel(&app);
    wire_controls_toggle(&app);
    wire_screen_click(&app);

    let resize_app = app.clone();
    let resize = frame::ListenerGuard::attach(window.clone().into(), "resize", move || {
        resize_app.resize();
    });

    let tick_app = app.clone();
    let modulation = frame::IntervalTimer::start(MODULATION_INTERVAL_MS, move || {
        tick_app.modulation_tick();
    })?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: app.scene.clone(),
        renderer: app.renderer.clone(),
        document: document.clone(),
        logo: frame::logo_element(&document),
        loading: app.loading.clone(),
    }));
    let animation = frame::AnimationLoop::start(frame_ctx);

    RUNNING.with(|r| {
        *r.borrow_mut() = Some(Running {
            _animation: animation,
            _modulation: modulation,
            _resize: resize,
            app,
        });
    });
    Ok(())
}

// Clicks on these must not toggle modulate-all.
fn tag_click_exempt(document: &web::Document) {
    for (id, class) in [
        (LOGO_ID, "logo-container"),
        (CONTROLS_TOGGLE_ID, "controls-toggle"),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.class_list().add_1(class);
        }
    }
}

fn wire_panel(app: &Rc<App>) {
    for control in &app.panel.controls {
        let param: Param = control.param;

        let slider_app = app.clone();
        let slider = control.slider.clone();
        dom::add_listener(&control.slider, "input", move |_ev| {
            if let Some(v) = panel::read_slider(param, &slider) {
                slider_app.set_manual(param, v);
            }
        });

        let toggle_app = app.clone();
        dom::add_listener(&control.toggle, "click", move |ev| {
            ev.stop_propagation();
            toggle_app.toggle_modulation(param);
        });
    }

    let all_app = app.clone();
    dom::add_listener(&app.panel.modulate_all, "click", move |ev| {
        ev.stop_propagation();
        all_app.toggle_all_modulated();
    });

    let export_app = app.clone();
    dom::add_listener(&app.panel.export, "click", move |ev| {
        ev.stop_propagation();
        export_app.export();
    });
}

fn wire_controls_toggle(app: &Rc<App>) {
    let Some(input) = app
        .document
        .get_element_by_id(CONTROLS_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("missing #{}; controls stay visible", CONTROLS_TOGGLE_ID);
        return;
    };
    input.set_checked(app.controls_visible.get());
    let toggle_app = app.clone();
    let checkbox = input.clone();
    dom::add_listener(&input, "change", move |_ev| {
        toggle_app.set_controls_visible(checkbox.checked());
    });
}

// A tap anywhere outside the panel, logo and switch toggles modulate-all.
fn wire_screen_click(app: &Rc<App>) {
    let click_app = app.clone();
    dom::add_listener(&app.document, "click", move |ev| {
        if !dom::event_within(&ev, CLICK_EXEMPT_SELECTOR) {
            click_app.toggle_all_modulated();
        }
    });
}
