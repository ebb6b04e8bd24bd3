use crate::shared::icons::request_icon_refresh;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Top-level sections of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppTab {
    Dashboard,
    Kanban,
    NovaOs,
    Materiais,
    Producao,
}

impl AppTab {
    /// Tab bar order
    pub fn all() -> Vec<AppTab> {
        vec![
            AppTab::Dashboard,
            AppTab::Kanban,
            AppTab::NovaOs,
            AppTab::Materiais,
            AppTab::Producao,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "dashboard",
            AppTab::Kanban => "kanban",
            AppTab::NovaOs => "nova-os",
            AppTab::Materiais => "materiais",
            AppTab::Producao => "producao",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::Kanban => "Kanban de OS",
            AppTab::NovaOs => "Nova OS",
            AppTab::Materiais => "Materiais",
            AppTab::Producao => "Produção",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "bar-chart-2",
            AppTab::Kanban => "trello",
            AppTab::NovaOs => "plus-circle",
            AppTab::Materiais => "package",
            AppTab::Producao => "tool",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.key() == key)
    }
}

impl Default for AppTab {
    /// First tab of the bar
    fn default() -> Self {
        AppTab::Dashboard
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tab: Option<String>,
}

/// Tab named by a `?tab=` query string, if it names a known one
pub fn tab_from_query(search: &str) -> Option<AppTab> {
    let query: TabQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.tab.as_deref().and_then(AppTab::from_key)
}

/// `?tab=<key>`
pub fn tab_query(tab: AppTab) -> String {
    let query = TabQuery {
        tab: Some(tab.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppTab>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppTab::default()),
        }
    }

    pub fn activate_tab(&self, tab: AppTab) {
        log::debug!("activate_tab: {}", tab.key());
        self.active.set(tab);
    }

    pub fn is_active(&self, tab: AppTab) -> bool {
        self.active.get() == tab
    }

    /// Restore the active tab from the URL and keep the URL in sync.
    /// Every switch re-renders icons of the newly shown section.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(tab) = tab_from_query(&search) {
            self.activate_tab(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active.get();
            let new_url = tab_query(tab);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }

            request_icon_refresh();
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
