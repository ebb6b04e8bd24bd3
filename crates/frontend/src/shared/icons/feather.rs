//! Browser side of the icon bootstrap: the Feather script, the live DOM
//! and gloo timers.

use super::{BootstrapError, IconMarkup, RenderProvider, Ticker};
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlScriptElement};

/// Attribute marking an icon placeholder
pub const PLACEHOLDER_ATTR: &str = "data-feather";

/// Wrapper class put around placeholders by [`super::icon`]; the element
/// the icon decorates is the wrapper's parent.
pub const ICON_SLOT_CLASS: &str = "icon-slot";

/// `window.feather`, loaded from a CDN on demand
pub struct FeatherProvider {
    script_url: String,
}

impl FeatherProvider {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

/// `window.feather` and its `replace` function, once both exist
fn feather_replace() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let feather = Reflect::get(&window, &JsValue::from_str("feather")).ok()?;
    if feather.is_undefined() || feather.is_null() {
        return None;
    }
    let replace = Reflect::get(&feather, &JsValue::from_str("replace")).ok()?;
    replace.dyn_into::<Function>().ok().map(|f| (feather, f))
}

pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Event handlers attached to an element. The detach step runs before the
/// handlers are freed, also when the future holding them is dropped while
/// still waiting, so the browser never calls into a freed closure.
struct AttachedHandlers<H> {
    _handlers: H,
    detach: Option<Box<dyn FnOnce()>>,
}

impl<H> AttachedHandlers<H> {
    fn new(handlers: H, detach: impl FnOnce() + 'static) -> Self {
        Self {
            _handlers: handlers,
            detach: Some(Box::new(detach)),
        }
    }
}

impl<H> Drop for AttachedHandlers<H> {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Append `<script src=url>` to `<head>` and wait for its load or error event
async fn load_script(url: String) -> Result<(), BootstrapError> {
    let failure = |reason: String| BootstrapError::AcquisitionFailure {
        url: url.clone(),
        reason,
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| failure("document is not available".into()))?;
    let head = document
        .head()
        .ok_or_else(|| failure("document has no <head>".into()))?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| failure(js_message(&e)))?
        .dyn_into()
        .map_err(|_| failure("<script> is not an HtmlScriptElement".into()))?;
    script.set_src(&url);

    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }) as Box<dyn FnMut()>)
    };
    let on_error = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("failed to load script".to_string()));
            }
        }) as Box<dyn FnMut()>)
    };
    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    let handlers = {
        let script = script.clone();
        AttachedHandlers::new((on_load, on_error), move || {
            script.set_onload(None);
            script.set_onerror(None);
        })
    };

    head.append_child(&script)
        .map_err(|e| failure(js_message(&e)))?;

    let settled = rx.await;
    drop(handlers);

    match settled {
        Ok(Ok(())) => Ok(()),
        Ok(Err(reason)) => Err(failure(reason)),
        Err(_) => Err(failure("load handler dropped".into())),
    }
}

impl RenderProvider for FeatherProvider {
    fn is_ready(&self) -> bool {
        feather_replace().is_some()
    }

    fn acquire(&self) -> LocalBoxFuture<'static, Result<(), BootstrapError>> {
        log::debug!("fetching icon library from {}", self.script_url);
        Box::pin(load_script(self.script_url.clone()))
    }

    fn render(&self) -> Result<(), BootstrapError> {
        let (feather, replace) = feather_replace()
            .ok_or_else(|| BootstrapError::RenderError("feather.replace is not available".into()))?;
        replace
            .call0(&feather)
            .map(|_| ())
            .map_err(|e| BootstrapError::RenderError(js_message(&e)))
    }
}

/// `[data-feather]` elements of the current document
pub struct DomMarkup;

impl DomMarkup {
    /// Element the icon decorates, skipping the icon slot wrapper
    fn container(icon: &Element) -> Option<Element> {
        let parent = icon.parent_element()?;
        if parent.class_list().contains(ICON_SLOT_CLASS) {
            parent.parent_element()
        } else {
            Some(parent)
        }
    }

    fn set_display(element: &Element, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("display", value);
        }
    }
}

impl IconMarkup for DomMarkup {
    type Placeholder = Element;

    fn placeholders(&self) -> Vec<Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(&format!("[{}]", PLACEHOLDER_ATTR)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn icon_name(&self, icon: &Element) -> Option<String> {
        icon.get_attribute(PLACEHOLDER_ATTR)
    }

    fn set_icon_name(&self, icon: &Element, name: &str) {
        let _ = icon.set_attribute(PLACEHOLDER_ATTR, name);
    }

    fn hide(&self, icon: &Element) {
        Self::set_display(icon, "none");
    }

    fn container_text(&self, icon: &Element) -> Option<String> {
        Self::container(icon)?
            .text_content()
            .map(|t| t.trim().to_string())
    }

    fn show_container_inline(&self, icon: &Element) {
        if let Some(container) = Self::container(icon) {
            Self::set_display(&container, "inline");
        }
    }

    fn insert_label(&self, icon: &Element, label: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(parent) = icon.parent_node() {
            let anchor: &web_sys::Node = icon;
            let text = document.create_text_node(label);
            let _ = parent.insert_before(&text, Some(anchor));
        }
    }
}

/// `setTimeout`-backed sleeps
pub struct GlooTicker;

impl Ticker for GlooTicker {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{self, Either};

    type Journal = Rc<RefCell<Vec<&'static str>>>;

    struct Released(Journal);

    impl Drop for Released {
        fn drop(&mut self) {
            self.0.borrow_mut().push("released");
        }
    }

    fn attached(journal: &Journal) -> AttachedHandlers<Released> {
        let sink = journal.clone();
        AttachedHandlers::new(Released(journal.clone()), move || {
            sink.borrow_mut().push("detached")
        })
    }

    #[test]
    fn test_handlers_are_detached_before_release() {
        let journal = Journal::default();

        drop(attached(&journal));

        assert_eq!(*journal.borrow(), vec!["detached", "released"]);
    }

    #[test]
    fn test_abandoned_wait_still_detaches_handlers() {
        let journal = Journal::default();
        let (tx, rx) = oneshot::channel::<()>();

        let wait = {
            let journal = journal.clone();
            async move {
                let _handlers = attached(&journal);
                let _ = rx.await;
                journal.borrow_mut().push("settled");
            }
        };

        // The wait is polled first and parks on the channel; the timeout wins.
        let raced = futures::executor::block_on(future::select(Box::pin(wait), future::ready(())));
        assert!(matches!(raced, Either::Right(_)));
        assert!(journal.borrow().is_empty());

        drop(raced);
        assert_eq!(*journal.borrow(), vec!["detached", "released"]);
        drop(tx);
    }
}
