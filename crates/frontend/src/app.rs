use crate::layout::global_context::AppGlobalContext;
use crate::layout::{ModalHost, ModalService, Shell};
use crate::shared::config::page_config;
use crate::shared::data::MockStore;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = page_config();

    // Active tab, synced with `?tab=`
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    provide_context(ModalService::new());
    provide_context(NotificationService::new(config.notifications));
    provide_context(RwSignal::new(MockStore::seeded()));

    view! {
        <Shell />
        <ModalHost />
        <NotificationHost />
    }
}
