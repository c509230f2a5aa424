use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("clipboard write rejected: {:?}", e))?;
    Ok(())
}
