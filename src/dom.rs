use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `target` for the page lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// CSS pixel size of the browser viewport.
pub fn viewport_size() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ZERO)
}

/// Match the canvas backing store to the viewport; returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let size = viewport_size();
    canvas.set_width(size.x.max(0.0) as u32);
    canvas.set_height(size.y.max(0.0) as u32);
    size
}

/// Size of an element's layout box, or zero if it is missing.
pub fn element_size(document: &web::Document, element_id: &str) -> Vec2 {
    document
        .get_element_by_id(element_id)
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            Vec2::new(rect.width() as f32, rect.height() as f32)
        })
        .unwrap_or(Vec2::ZERO)
}

/// Create an element with a class attribute.
pub fn create_with_class(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

/// True if the event target sits inside an element matching `selector`.
pub fn event_within(ev: &web::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// `origin` and `pathname` of the current page.
pub fn page_base() -> anyhow::Result<(String, String)> {
    let location = web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .location();
    let origin = location.origin().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let pathname = location.pathname().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((origin, pathname))
}

/// Current location hash including the leading `#`, or empty.
pub fn location_hash() -> String {
    web::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
