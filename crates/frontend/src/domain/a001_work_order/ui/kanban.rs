use crate::layout::modal_service::{ModalContent, ModalService};
use crate::shared::data::MockStore;
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_work_order::{WorkOrder, WorkOrderId};
use contracts::enums::WorkOrderStatus;
use leptos::ev::DragEvent;
use leptos::prelude::*;

pub const MOVED_MESSAGE: &str = "OS movida com sucesso!";

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let dragging = RwSignal::new(None::<WorkOrderId>);
    let drag_over = RwSignal::new(None::<WorkOrderStatus>);

    let move_card = Callback::new(move |(id, status): (WorkOrderId, WorkOrderStatus)| {
        match store.try_update(|s| s.move_work_order(id, status)) {
            Some(Ok(true)) => {
                log::debug!("work order moved to {}", status.code());
                notifications.success(MOVED_MESSAGE);
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => notifications.error(e),
        }
    });

    // Cards are re-rendered on every store change.
    Effect::new(move |_| {
        store.track();
        request_icon_refresh();
    });

    view! {
        <div class="section-header">
            <h2>{icon("trello")}" Kanban de Ordens de Serviço"</h2>
        </div>
        <div class="kanban-board">
            {WorkOrderStatus::all().into_iter().map(|status| {
                let count = move || {
                    store.with(|s| s.kanban_counts().get(&status).copied().unwrap_or(0))
                };
                let cards = move || {
                    store.with(|s| {
                        s.work_orders_in(status).into_iter().cloned().collect::<Vec<_>>()
                    })
                };
                let column_class = move || {
                    if drag_over.get() == Some(status) {
                        "kanban-column drag-over"
                    } else {
                        "kanban-column"
                    }
                };

                view! {
                    <div
                        class=column_class
                        data-status=status.code()
                        on:dragover=move |ev: DragEvent| {
                            ev.prevent_default();
                            drag_over.set(Some(status));
                        }
                        on:dragleave=move |_| drag_over.set(None)
                        on:drop=move |ev: DragEvent| {
                            ev.prevent_default();
                            drag_over.set(None);
                            if let Some(id) = dragging.get_untracked() {
                                dragging.set(None);
                                move_card.run((id, status));
                            }
                        }
                    >
                        <div class="kanban-header">
                            <h3>{status.display_name()}</h3>
                            <span class="kanban-count">{count}</span>
                        </div>
                        <For
                            each=cards
                            key=|order| (order.base.id, order.base.metadata.version)
                            children=move |order| view! {
                                <KanbanCard
                                    order=order
                                    dragging=dragging
                                    on_move=move_card
                                    on_open=Callback::new(move |id| {
                                        modal.show(ModalContent::WorkOrderDetails(id))
                                    })
                                />
                            }
                        />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn KanbanCard(
    order: WorkOrder,
    dragging: RwSignal<Option<WorkOrderId>>,
    on_move: Callback<(WorkOrderId, WorkOrderStatus)>,
    on_open: Callback<WorkOrderId>,
) -> impl IntoView {
    let id = order.base.id;
    let next = order.status.next();

    let card_class = move || {
        if dragging.get() == Some(id) {
            "os-card dragging"
        } else {
            "os-card"
        }
    };

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=move |ev: DragEvent| {
                // Firefox does not start a drag without data
                if let Some(data) = ev.data_transfer() {
                    let _ = data.set_data("text/plain", &id.0.to_string());
                }
                dragging.set(Some(id));
            }
            on:dragend=move |_| dragging.set(None)
        >
            <div class="os-card-header">
                <span class="os-number">"OS #"{order.number().to_string()}</span>
                <span class=order.urgency.badge_class()>{order.urgency.display_name()}</span>
            </div>
            <p class="os-description">{order.base.description.clone()}</p>
            <div class="os-meta">
                <span>{icon("map-pin")}" "{order.location.clone()}</span>
                <span>{icon("user")}" "{order.requester.clone()}</span>
            </div>
            <div class="os-card-actions">
                <button class="btn-icon" title="Detalhes" on:click=move |_| on_open.run(id)>
                    {icon("eye")}
                </button>
                {next.map(|status| view! {
                    <button
                        class="btn-icon"
                        title=format!("Mover para {}", status.display_name())
                        on:click=move |_| on_move.run((id, status))
                    >
                        {icon("arrow-right")}
                    </button>
                })}
            </div>
        </div>
    }
}
