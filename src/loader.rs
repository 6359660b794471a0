//! Dynamic module loader.
//!
//! Some views pull an external charting library at runtime instead of
//! bundling it. The capability sits behind [`ModuleLoader`] so non-browser
//! targets (and tests) can supply a no-op instead of touching the DOM.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Failures while loading an external script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderError {
    #[error("no document available")]
    NoDocument,

    #[error("dom error: {0}")]
    Dom(String),

    #[error("failed to load script {0}")]
    Failed(String),
}

/// Loads an external script module and resolves once it is executable.
// Single-threaded WASM; the futures never cross a thread.
#[allow(async_fn_in_trait)]
pub trait ModuleLoader {
    async fn load(&self, src: &str) -> Result<(), LoaderError>;
}

/// Browser implementation: appends a `<script>` tag to the document body
/// and settles on the element's load/error events.
pub struct DomScriptLoader;

impl ModuleLoader for DomScriptLoader {
    async fn load(&self, src: &str) -> Result<(), LoaderError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(LoaderError::NoDocument)?;

        let script: web_sys::HtmlScriptElement = document
            .create_element("script")
            .map_err(|e| LoaderError::Dom(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| LoaderError::Dom("not a script element".to_string()))?;
        script.set_src(src);

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        document
            .body()
            .ok_or(LoaderError::NoDocument)?
            .append_child(&script)
            .map_err(|e| LoaderError::Dom(format!("{:?}", e)))?;

        JsFuture::from(loaded)
            .await
            .map(|_| ())
            .map_err(|_| LoaderError::Failed(src.to_string()))
    }
}

/// No-op loader for tests and headless targets.
pub struct NoopLoader;

impl ModuleLoader for NoopLoader {
    async fn load(&self, _src: &str) -> Result<(), LoaderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_loader_always_succeeds() {
        let result = futures::executor::block_on(NoopLoader.load("https://example.com/lib.js"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_loader_error_names_the_source() {
        let err = LoaderError::Failed("https://example.com/lib.js".to_string());
        assert_eq!(err.to_string(), "failed to load script https://example.com/lib.js");
    }
}
