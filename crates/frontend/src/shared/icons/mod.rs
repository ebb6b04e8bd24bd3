//! Feather icons for the whole page.
//!
//! The library is fetched once at startup by [`init_icons`]. Components
//! render placeholders with [`icon`] and call [`request_icon_refresh`]
//! after every markup change that adds placeholders; refreshes requested
//! before the library is ready are queued and replayed in order. If the
//! library never arrives, icons degrade to `[icon-id]` text labels and the
//! rest of the application keeps working.

pub mod bootstrap;
pub mod error;
pub mod feather;
pub mod markup;
pub mod name_map;
pub mod provider;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{BootstrapStats, IconBootstrap};
pub use error::BootstrapError;
pub use feather::{DomMarkup, FeatherProvider, GlooTicker, ICON_SLOT_CLASS};
pub use markup::IconMarkup;
pub use name_map::IconNameMap;
pub use provider::{RenderProvider, Ticker};
pub use state::ResourceState;

use crate::shared::config::{page_config, IconsConfig};
use leptos::prelude::*;
use std::rc::Rc;

type PageIcons = IconBootstrap<FeatherProvider, DomMarkup, GlooTicker>;

thread_local! {
    static PAGE_ICONS: Rc<PageIcons> = Rc::new(page_icons(page_config().icons));
}

fn page_icons(config: IconsConfig) -> PageIcons {
    IconBootstrap::new(
        FeatherProvider::new(config.script_url.clone()),
        DomMarkup,
        GlooTicker,
        config,
    )
}

/// Start loading the icon library in the background. Startup never waits
/// on it; failures end in degraded mode and a console warning.
pub fn init_icons() {
    let icons = PAGE_ICONS.with(Rc::clone);
    leptos::task::spawn_local(async move {
        if let Err(e) = icons.bootstrap().await {
            log::warn!("❌ icons unavailable, showing text labels: {}", e);
        }
        log::debug!("icon library settled in state {:?}", icon_state());
    });
    run_when_ready(mark_document_ready);
}

/// Render placeholders added since the last pass (or queue the request)
pub fn request_icon_refresh() {
    PAGE_ICONS.with(|icons| icons.request_icon_refresh());
}

/// Run `op` once icons are usable; dropped if they never are
pub fn run_when_ready(op: impl FnOnce() + 'static) {
    PAGE_ICONS.with(|icons| icons.run_when_ready(op));
}

/// Current lifecycle state of the page icons
pub fn icon_state() -> ResourceState {
    PAGE_ICONS.with(|icons| icons.state())
}

/// Class put on `<body>` once icons render, so styles can reveal them
pub const READY_CLASS: &str = "icons-ready";

fn mark_document_ready() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    let marked = match body {
        Some(body) => body
            .class_list()
            .add_1(READY_CLASS)
            .map_err(|e| feather::js_message(&e)),
        None => Err("document has no <body>".to_string()),
    };
    report_ready_mark(marked);
}

fn report_ready_mark(marked: Result<(), String>) -> bool {
    match marked {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("could not add .{} to <body>: {}", READY_CLASS, reason);
            false
        }
    }
}

/// Icon placeholder, rendered by the library on the next refresh
pub fn icon(name: &str) -> AnyView {
    view! {
        <span class=ICON_SLOT_CLASS>
            <i data-feather=name.to_string()></i>
        </span>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_mark_failure_is_reported_not_raised() {
        assert!(report_ready_mark(Ok(())));
        assert!(!report_ready_mark(Err("InvalidCharacterError".into())));
        assert!(!report_ready_mark(Err("document has no <body>".into())));
    }
}
