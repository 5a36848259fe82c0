use wasm_bindgen_futures::JsFuture;
use web_sys::window;

pub async fn write_text(text: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
