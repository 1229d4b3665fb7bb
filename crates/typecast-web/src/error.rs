/// DOM binding error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window object available")]
    NoWindow,
    /// `window.document` is missing.
    #[error("no document attached to window")]
    NoDocument,
    /// A DOM call threw; carries the rendered exception.
    #[error("dom call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
