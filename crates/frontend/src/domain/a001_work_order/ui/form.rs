//! "Nova OS" form with the similar-case hints

use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::shared::data::MockStore;
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::notifications::NotificationService;
use chrono::Datelike;
use contracts::domain::a001_work_order::{suggestions_for, Suggestion, WorkOrder, WorkOrderDto};
use contracts::enums::{ServiceType, Urgency};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Simulated time to register the OS
const CREATE_DELAY_MS: u32 = 2000;
/// Pause before showing the new card on the board
const SWITCH_TO_KANBAN_MS: u32 = 2000;

/// Toast shown once the OS exists
pub fn creation_message(order: &WorkOrder) -> String {
    format!(
        "Ordem de Serviço criada com sucesso!\n\n\
         Número: OS #{}\n\
         Solicitante: {}\n\
         Local: {}\n\
         Tipo: {}\n\n\
         Um PDF de registro foi gerado automaticamente.\n\
         Notificação enviada para a divisão responsável.",
        order.number(),
        order.requester,
        order.location,
        order.service_type.display_name(),
    )
}

/// Sequence part of a new OS number
fn random_sequence() -> u32 {
    800 + (js_sys::Math::random() * 1000.0).floor() as u32
}

type FieldRef = fn(&WorkOrderDto) -> &String;
type FieldMut = fn(&mut WorkOrderDto) -> &mut String;

fn text_field(
    form: RwSignal<WorkOrderDto>,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    get: FieldRef,
    set: FieldMut,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            />
        </div>
    }
}

fn suggestion_card(suggestion: Suggestion) -> impl IntoView {
    view! {
        <div class="suggestion-card">
            <h4>{icon(suggestion.icon)}" "{suggestion.title}</h4>
            {suggestion.body.map(|body| view! { <p>{body}</p> })}
            {suggestion.details.into_iter().map(|line| view! {
                <p class="suggestion-detail">{line}</p>
            }).collect_view()}
            {(!suggestion.items.is_empty()).then(|| view! {
                <ul class="materials-list">
                    {suggestion.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}

#[component]
pub fn WorkOrderForm(
    /// Called after the OS was stored and the form reset
    #[prop(optional)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let form = RwSignal::new(WorkOrderDto::default());
    let loading = RwSignal::new(false);

    let selected_type = move || form.with(|f| f.service_type.clone());

    // Hints and the submit button swap icons.
    Effect::new(move |_| {
        selected_type();
        loading.get();
        request_icon_refresh();
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let dto = form.get_untracked();
        if let Err(message) = dto.validate() {
            notifications.error(message);
            return;
        }
        loading.set(true);

        spawn_local(async move {
            TimeoutFuture::new(CREATE_DELAY_MS).await;

            let year = chrono::Local::now().year();
            let created = store
                .try_update(|s| {
                    let number = s.pick_work_order_number(year, random_sequence);
                    s.create_work_order(number, &dto)
                })
                .unwrap_or_else(|| Err("Dados indisponíveis".to_string()));

            match created {
                Ok(id) => {
                    let created = store.with_untracked(|s| {
                        s.work_order(id)
                            .map(|o| (o.number().to_string(), creation_message(o)))
                    });
                    if let Some((number, message)) = created {
                        log::info!("work order {} created", number);
                        notifications.success(message);
                    }
                    form.set(WorkOrderDto::default());
                    loading.set(false);
                    if let Some(on_created) = on_created {
                        on_created.run(());
                    }

                    TimeoutFuture::new(SWITCH_TO_KANBAN_MS).await;
                    tabs.activate_tab(AppTab::Kanban);
                }
                Err(e) => {
                    log::warn!("work order not created: {}", e);
                    notifications.error(e);
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="os-form" on:submit=submit>
            <div class="form-grid">
                <div class="form-group">
                    <label for="sei-number">"Número SEI"</label>
                    <input
                        id="sei-number"
                        type="text"
                        placeholder="6016.2025/0001234-5"
                        prop:value=move || form.with(|f| f.sei_number.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.sei_number = (!value.trim().is_empty()).then_some(value));
                        }
                    />
                </div>
                {text_field(form, "solicitante", "Solicitante *", "Nome do solicitante",
                    |f| &f.requester, |f| &mut f.requester)}
                {text_field(form, "orgao", "Órgão *", "Secretaria / órgão",
                    |f| &f.agency, |f| &mut f.agency)}
                {text_field(form, "local", "Local *", "Endereço ou unidade",
                    |f| &f.location, |f| &mut f.location)}

                <div class="form-group">
                    <label for="tipo-servico">"Tipo de Serviço *"</label>
                    <select
                        id="tipo-servico"
                        prop:value=selected_type
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.service_type = value);
                        }
                    >
                        <option value="">"Selecione..."</option>
                        {ServiceType::all().into_iter().map(|t| view! {
                            <option value=t.code()>{t.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="urgencia">"Urgência *"</label>
                    <select
                        id="urgencia"
                        prop:value=move || form.with(|f| f.urgency.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.urgency = value);
                        }
                    >
                        <option value="">"Selecione..."</option>
                        {Urgency::all().into_iter().map(|u| view! {
                            <option value=u.code()>{u.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="descricao">"Descrição do Problema *"</label>
                <textarea
                    id="descricao"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                ></textarea>
            </div>

            {move || {
                let code = selected_type();
                (!code.is_empty()).then(|| {
                    let cards = suggestions_for(ServiceType::from_code(&code));
                    view! {
                        <div id="ai-suggestions" class="ai-suggestions">
                            <h3>{icon("cpu")}" Sugestões da IA"</h3>
                            {cards.into_iter().map(suggestion_card).collect_view()}
                        </div>
                    }
                })
            }}

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || loading.get()
                    on:click=move |_| form.set(WorkOrderDto::default())
                >
                    "Limpar"
                </button>
                <button
                    type="submit"
                    class=move || if loading.get() { "btn btn-primary loading" } else { "btn btn-primary" }
                    disabled=move || loading.get()
                >
                    {move || if loading.get() {
                        view! { {icon("loader")}" Criando..." }.into_any()
                    } else {
                        view! { {icon("save")}" Criar Ordem de Serviço" }.into_any()
                    }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_message() {
        let dto = WorkOrderDto {
            sei_number: None,
            requester: "Maria Souza".into(),
            agency: "Secretaria de Educação".into(),
            location: "EMEI Jardim Adriana".into(),
            service_type: "telhado".into(),
            urgency: "alta".into(),
            description: "Goteiras na sala 3".into(),
        };
        let order = WorkOrder::new_for_insert("2025-0912".into(), &dto).unwrap();

        let message = creation_message(&order);
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines[0], "Ordem de Serviço criada com sucesso!");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Número: OS #2025-0912");
        assert_eq!(lines[3], "Solicitante: Maria Souza");
        assert_eq!(lines[4], "Local: EMEI Jardim Adriana");
        assert_eq!(lines[5], "Tipo: Telhado");
        assert!(message.ends_with("Notificação enviada para a divisão responsável."));
    }
}
