use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::layout::modal_service::{ModalContent, ModalService};
use crate::shared::components::{CardStatus, StatCard};
use crate::shared::data::{DashboardStats, MockStore};
use crate::shared::export::{export_excel, export_pdf};
use crate::shared::format::{format_currency, format_number};
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

/// Orders shown in the "recent" list
const RECENT_LIMIT: usize = 5;

fn open_status(stats: &DashboardStats) -> CardStatus {
    match stats.open {
        0 => CardStatus::Good,
        1..=5 => CardStatus::Neutral,
        _ => CardStatus::Warning,
    }
}

fn low_stock_status(stats: &DashboardStats) -> CardStatus {
    if stats.low_stock == 0 {
        CardStatus::Good
    } else {
        CardStatus::Bad
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let stats = Memo::new(move |_| store.with(|s| s.stats()));

    let recent = move || {
        store.with(|s| {
            let mut orders: Vec<_> = s.work_orders().into_iter().cloned().collect();
            orders.sort_by(|a, b| b.number().cmp(a.number()));
            orders.truncate(RECENT_LIMIT);
            orders
        })
    };

    Effect::new(move |_| {
        store.track();
        request_icon_refresh();
    });

    view! {
        <div class="section-header">
            <h2>{icon("bar-chart-2")}" Visão Geral"</h2>
            <div class="section-actions">
                <button class="btn btn-primary" on:click=move |_| modal.show(ModalContent::NewWorkOrder)>
                    {icon("plus")}" Nova OS"
                </button>
                <button class="btn btn-secondary" on:click=move |_| export_pdf(notifications)>
                    {icon("file-text")}" Exportar PDF"
                </button>
                <button class="btn btn-secondary" on:click=move |_| export_excel(notifications)>
                    {icon("download")}" Exportar Excel"
                </button>
            </div>
        </div>

        <div class="stats-grid">
            <StatCard
                label="OS Abertas"
                icon_name="inbox"
                value=Signal::derive(move || stats.get().open.to_string())
                status=Signal::derive(move || open_status(&stats.get()))
            />
            <StatCard
                label="Em Andamento"
                icon_name="clock"
                value=Signal::derive(move || stats.get().in_progress.to_string())
                status=CardStatus::Neutral
            />
            <StatCard
                label="Aguardando Material"
                icon_name="pause-circle"
                value=Signal::derive(move || stats.get().waiting_material.to_string())
                status=CardStatus::Warning
            />
            <StatCard
                label="Concluídas"
                icon_name="check-circle"
                value=Signal::derive(move || stats.get().done.to_string())
                status=CardStatus::Good
            />
            <StatCard
                label="Materiais em Falta"
                icon_name="alert-triangle"
                value=Signal::derive(move || stats.get().low_stock.to_string())
                status=Signal::derive(move || low_stock_status(&stats.get()))
                subtitle=Signal::derive(move || {
                    Some(format!("Estoque: {}", format_currency(stats.get().stock_value)))
                })
            />
            <StatCard
                label="Unidades Produzidas"
                icon_name="layers"
                value=Signal::derive(move || format_number(stats.get().units_produced as f64, 0))
                status=CardStatus::Neutral
            />
        </div>

        <div class="dashboard-card">
            <div class="dashboard-card__header">
                <h3>{icon("list")}" OS Recentes"</h3>
                <button class="btn-link" on:click=move |_| tabs.activate_tab(AppTab::Kanban)>
                    "Ver kanban "{icon("arrow-right")}
                </button>
            </div>
            <ul class="recent-list">
                {move || recent().into_iter().map(|order| {
                    let id = order.base.id;
                    view! {
                        <li on:click=move |_| modal.show(ModalContent::WorkOrderDetails(id))>
                            <span class="os-number">"OS #"{order.number().to_string()}</span>
                            <span>{order.base.description.clone()}</span>
                            <span class=order.urgency.badge_class()>{order.urgency.display_name()}</span>
                            <span class="os-status">{order.status.display_name()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_status() {
        let mut stats = DashboardStats::default();
        assert_eq!(open_status(&stats), CardStatus::Good);
        assert_eq!(low_stock_status(&stats), CardStatus::Good);

        stats.open = 8;
        stats.low_stock = 2;
        assert_eq!(open_status(&stats), CardStatus::Warning);
        assert_eq!(low_stock_status(&stats), CardStatus::Bad);
    }
}
