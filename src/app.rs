use crate::clipboard;
use crate::constants::*;
use crate::core::fragment;
use crate::core::{Notice, Param, Scene};
use crate::dom;
use crate::frame;
use crate::overlay;
use crate::panel::ControlPanel;
use crate::render::CanvasRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the event handlers, the frame loop and the modulation timer
/// share. Lives on the single UI thread behind an `Rc`.
pub struct App {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub renderer: Rc<RefCell<CanvasRenderer>>,
    pub panel: ControlPanel,
    pub notice: Rc<RefCell<Notice>>,
    pub controls_visible: Cell<bool>,
    pub loading: Rc<Cell<bool>>,
    pub clock: Instant,
}

impl App {
    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    /// Repaint everything derived from settings, flags and panel visibility.
    pub fn sync_ui(&self) {
        let all_modulated = {
            let scene = self.scene.borrow();
            self.panel.sync(scene.settings(), scene.flags());
            scene.flags().all()
        };
        let visible = self.controls_visible.get();
        overlay::set_visible(&self.document, CONTROLS_PANEL_ID, visible);
        if all_modulated && !visible {
            overlay::show_text(&self.document, MODULATION_BANNER_ID, MSG_ALL_MODULATED);
        } else {
            overlay::hide(&self.document, MODULATION_BANNER_ID);
        }
    }

    /// Show `message` in the notification banner for a few seconds.
    pub fn notify(&self, message: &str) {
        let generation = self.notice.borrow_mut().show(message);
        overlay::show_text(&self.document, NOTIFICATION_ID, message);
        let notice = self.notice.clone();
        let document = self.document.clone();
        frame::set_timeout(NOTIFICATION_MS, move || {
            if notice.borrow_mut().expire(generation) {
                overlay::hide(&document, NOTIFICATION_ID);
            }
        });
    }

    pub fn set_manual(&self, param: Param, value: f64) {
        let changed = self.scene.borrow_mut().set_manual(param, value);
        if changed {
            self.sync_ui();
        }
    }

    pub fn toggle_modulation(&self, param: Param) {
        let now = self.now_sec();
        self.scene.borrow_mut().toggle_modulation(param, now);
        self.sync_ui();
    }

    pub fn set_all_modulated(&self, on: bool) {
        let now = self.now_sec();
        self.scene.borrow_mut().set_all_modulated(on, now);
        log::info!("[modulation] all={}", on);
        self.sync_ui();
    }

    pub fn toggle_all_modulated(&self) {
        let all = self.scene.borrow().flags().all();
        self.set_all_modulated(!all);
    }

    pub fn set_controls_visible(&self, visible: bool) {
        self.controls_visible.set(visible);
        self.sync_ui();
    }

    /// Fixed-interval modulation pass, independent of the refresh rate.
    pub fn modulation_tick(&self) {
        let now = self.now_sec();
        let changed = self.scene.borrow_mut().modulate(now);
        if changed {
            self.sync_ui();
        }
    }

    pub fn resize(&self) {
        let size = dom::sync_canvas_to_viewport(&self.canvas);
        self.renderer.borrow_mut().resize(size);
        let mut scene = self.scene.borrow_mut();
        scene.resize(size);
        log::info!(
            "[resize] {}x{} reseeded {} dots",
            size.x,
            size.y,
            scene.dot_count()
        );
    }

    /// Apply settings encoded in the location hash, if any.
    pub fn import_fragment(&self, hash: &str) {
        let current = *self.scene.borrow().settings();
        let Some(outcome) = fragment::import(hash, current) else {
            return;
        };
        self.loading.set(true);
        overlay::show(&self.document, LOADING_OVERLAY_ID);
        match &outcome.error {
            None => {
                self.scene.borrow_mut().replace_settings(outcome.settings);
                log::info!("[fragment] imported {:?}", outcome.settings);
            }
            Some(e) => log::error!("Failed to parse settings from hash: {}", e),
        }
        self.notify(outcome.message);
        self.loading.set(false);
        overlay::hide(&self.document, LOADING_OVERLAY_ID);
        self.sync_ui();
    }

    /// Copy a shareable URL for the current settings to the clipboard.
    pub fn export(self: &Rc<Self>) {
        let url = match dom::page_base() {
            Ok((origin, pathname)) => {
                fragment::share_url(&origin, &pathname, self.scene.borrow().settings())
            }
            Err(e) => {
                log::error!("Failed to copy URL: {:?}", e);
                self.notify(MSG_COPY_FAILED);
                return;
            }
        };
        let app = self.clone();
        spawn_local(async move {
            match clipboard::copy_text(&url).await {
                Ok(()) => {
                    log::info!("[export] {}", url);
                    app.notify(MSG_COPY_OK);
                }
                Err(e) => {
                    log::error!("Failed to copy URL: {:?}", e);
                    app.notify(MSG_COPY_FAILED);
                }
            }
        });
    }
}
