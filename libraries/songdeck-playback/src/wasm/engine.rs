//! `HTMLAudioElement` media engine

use crate::{MediaEngine, PlaybackError, Result};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Media engine over a detached `<audio>` element
pub struct HtmlAudioEngine {
    element: HtmlAudioElement,
}

impl HtmlAudioEngine {
    /// Create a fresh `<audio>` element
    pub fn new() -> Result<Self> {
        let element = HtmlAudioElement::new().map_err(js_error)?;
        element.set_preload("metadata");
        Ok(Self { element })
    }

    /// Wrap an element already in the page
    pub fn with_element(element: HtmlAudioElement) -> Self {
        Self { element }
    }

    /// The element, for attaching `timeupdate`/`ended` listeners
    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl MediaEngine for HtmlAudioEngine {
    fn load(&self, locator: &str) -> Result<()> {
        self.element.set_src(locator);
        self.element.load();
        Ok(())
    }

    fn play(&self) -> Result<()> {
        let promise = self.element.play().map_err(js_error)?;

        // Autoplay policy rejections arrive later through the promise
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::warn!(error = ?e, "Browser rejected play()");
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.element.pause().map_err(js_error)
    }

    fn seek_to(&self, seconds: f64) -> Result<()> {
        self.element.set_current_time(seconds);
        Ok(())
    }

    fn set_volume(&self, level: f64) -> Result<()> {
        self.element.set_volume(level);
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.element.duration();
        duration.is_finite().then_some(duration)
    }
}

fn js_error(value: JsValue) -> PlaybackError {
    PlaybackError::engine(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
