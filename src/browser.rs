use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Browser refused to open {0}")]
    Blocked(String),
    #[error("Browser call failed: {0}")]
    Js(String),
}

/// The side effects the site has on the browser. Both are fire and forget.
pub trait BrowsingContext: Send + Sync {
    /// Opens `url` in a new tab or window.
    fn open_new(&self, url: &str) -> Result<(), BrowserError>;
    /// Points the current tab at `url`.
    fn redirect(&self, url: &str) -> Result<(), BrowserError>;
}

/// The real `window`.
pub struct WindowContext;

impl BrowsingContext for WindowContext {
    fn open_new(&self, url: &str) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or_else(|| BrowserError::Js("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(BrowserError::Blocked(url.to_string())),
            Err(e) => Err(BrowserError::Js(format!("{e:?}"))),
        }
    }

    fn redirect(&self, url: &str) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or_else(|| BrowserError::Js("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| BrowserError::Js(format!("{e:?}")))
    }
}

/// Cloneable handle provided to components through context.
#[derive(Clone)]
pub struct Browser(Arc<dyn BrowsingContext>);

impl Browser {
    pub fn new(ctx: impl BrowsingContext + 'static) -> Self {
        Self(Arc::new(ctx))
    }

    pub fn open_new(&self, url: &str) {
        if let Err(e) = self.0.open_new(url) {
            log::warn!("{e}");
        }
    }

    pub fn redirect(&self, url: &str) {
        if let Err(e) = self.0.redirect(url) {
            log::warn!("{e}");
        }
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new(WindowContext)
    }
}
