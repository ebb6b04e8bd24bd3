//! Page frame: header, tab bar and the active section

use super::global_context::{AppGlobalContext, AppTab};
use super::modal_service::{ModalContent, ModalService};
use crate::dashboards::d001_overview::ui::OverviewDashboard;
use crate::domain::a001_work_order::ui::{KanbanBoard, WorkOrderForm};
use crate::domain::a002_material::ui::list::MaterialList;
use crate::domain::a003_production_entry::ui::list::ProductionList;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal = use_context::<ModalService>().expect("ModalService not found");

    view! {
        <div class="app-layout">
            <header class="header">
                <div class="header-title">
                    {icon("tool")}
                    <div>
                        <h1>"Manutenção Predial"</h1>
                        <p>"Divisão de Manutenção - Ordens de Serviço"</p>
                    </div>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| modal.show(ModalContent::NewWorkOrder)
                >
                    {icon("plus")}
                    " Nova OS"
                </button>
            </header>

            <nav class="tabs">
                {AppTab::all().into_iter().map(|tab| view! {
                    <button
                        class=move || if ctx.is_active(tab) { "tab active" } else { "tab" }
                        data-tab=tab.key()
                        on:click=move |_| ctx.activate_tab(tab)
                    >
                        {icon(tab.icon())}
                        {tab.title()}
                    </button>
                }).collect_view()}
            </nav>

            <main class="tab-content active">
                {move || match ctx.active.get() {
                    AppTab::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    AppTab::Kanban => view! { <KanbanBoard /> }.into_any(),
                    AppTab::NovaOs => view! { <WorkOrderForm /> }.into_any(),
                    AppTab::Materiais => view! { <MaterialList /> }.into_any(),
                    AppTab::Producao => view! { <ProductionList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
