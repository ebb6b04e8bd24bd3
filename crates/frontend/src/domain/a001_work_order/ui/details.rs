use crate::shared::data::MockStore;
use crate::shared::format::format_date;
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_work_order::WorkOrderId;
use contracts::enums::WorkOrderStatus;
use leptos::prelude::*;

use super::kanban::MOVED_MESSAGE;

/// Read-only view of one OS with a status picker
#[component]
pub fn WorkOrderDetails(id: WorkOrderId) -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let change_status = move |code: String| {
        let Some(status) = WorkOrderStatus::from_code(&code) else {
            return;
        };
        match store.try_update(|s| s.move_work_order(id, status)) {
            Some(Ok(true)) => notifications.success(MOVED_MESSAGE),
            Some(Ok(false)) | None => {}
            Some(Err(e)) => notifications.error(e),
        }
    };

    Effect::new(move |_| {
        store.track();
        request_icon_refresh();
    });

    view! {
        {move || match store.with(|s| s.work_order(id).cloned()) {
            None => view! { <p class="empty">"OS não encontrada"</p> }.into_any(),
            Some(order) => view! {
                <dl class="os-details">
                    <dt>"Número"</dt>
                    <dd>"OS #"{order.number().to_string()}</dd>
                    <dt>"Aberta em"</dt>
                    <dd>{format_date(order.base.metadata.created_at.date_naive())}</dd>
                    <dt>"Número SEI"</dt>
                    <dd>{order.sei_number.clone().unwrap_or_else(|| "-".to_string())}</dd>
                    <dt>"Solicitante"</dt>
                    <dd>{order.requester.clone()}" ("{order.agency.clone()}")"</dd>
                    <dt>"Local"</dt>
                    <dd>{icon("map-pin")}" "{order.location.clone()}</dd>
                    <dt>"Tipo"</dt>
                    <dd>{order.service_type.display_name()}</dd>
                    <dt>"Urgência"</dt>
                    <dd><span class=order.urgency.badge_class()>{order.urgency.display_name()}</span></dd>
                    <dt>"Descrição"</dt>
                    <dd>{order.base.description.clone()}</dd>
                </dl>
                <div class="form-group">
                    <label for="os-status">"Situação"</label>
                    <select
                        id="os-status"
                        prop:value=order.status.code()
                        on:change=move |ev| change_status(event_target_value(&ev))
                    >
                        {WorkOrderStatus::all().into_iter().map(|s| view! {
                            <option value=s.code()>{s.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            }.into_any(),
        }}
    }
}
