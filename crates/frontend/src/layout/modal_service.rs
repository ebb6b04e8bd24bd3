use crate::domain::a001_work_order::ui::{WorkOrderDetails, WorkOrderForm};
use crate::shared::icons::{icon, request_icon_refresh};
use contracts::domain::a001_work_order::WorkOrderId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Length of the fade-out animation in `style.css`
pub const MODAL_CLOSE_MS: u32 = 300;

/// What the modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalContent {
    NewWorkOrder,
    WorkOrderDetails(WorkOrderId),
}

impl ModalContent {
    pub fn title(&self) -> &'static str {
        match self {
            ModalContent::NewWorkOrder => "Nova Ordem de Serviço",
            ModalContent::WorkOrderDetails(_) => "Detalhes da OS",
        }
    }
}

/// Single application modal
#[derive(Clone, Copy)]
pub struct ModalService {
    content: RwSignal<Option<ModalContent>>,
    closing: RwSignal<bool>,
    /// Bumped on every open so a stale close timer leaves a new modal alone
    generation: StoredValue<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(None),
            closing: RwSignal::new(false),
            generation: StoredValue::new(0),
        }
    }

    pub fn show(&self, content: ModalContent) {
        log::debug!("modal open: {:?}", content);
        self.generation.update_value(|g| *g += 1);
        self.closing.set(false);
        self.content.set(Some(content));
        lock_body_scroll(true);
    }

    /// Play the close animation, then remove the modal
    pub fn hide(&self) {
        if self.content.get_untracked().is_none() || self.closing.get_untracked() {
            return;
        }
        self.closing.set(true);

        let svc = *self;
        let generation = self.generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(MODAL_CLOSE_MS).await;
            // Reopened while fading out
            if svc.generation.get_value() != generation {
                return;
            }
            svc.content.set(None);
            svc.closing.set(false);
            lock_body_scroll(false);
        });
    }

    pub fn is_open(&self) -> bool {
        self.content.get().is_some()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", value);
}

/// Renders the modal at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.content.get_untracked().is_some() {
                    svc.hide();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost is mounted once for the whole app lifetime; keep closure alive.
            closure.forget();
        }
    });

    // Modal markup carries icon placeholders.
    Effect::new(move |_| {
        if svc.content.with(|c| c.is_some()) {
            request_icon_refresh();
        }
    });

    let overlay_class = move || {
        if svc.closing.get() {
            "modal-overlay modal-overlay--closing"
        } else {
            "modal-overlay"
        }
    };

    view! {
        {move || svc.content.get().map(|content| {
            let body = match content {
                ModalContent::NewWorkOrder => view! {
                    <WorkOrderForm on_created=Callback::new(move |_| svc.hide()) />
                }
                .into_any(),
                ModalContent::WorkOrderDetails(id) => view! {
                    <WorkOrderDetails id=id />
                }
                .into_any(),
            };

            view! {
                <div class=overlay_class on:click=move |_| svc.hide()>
                    <div class="modal-content" on:click=|e| e.stop_propagation()>
                        <div class="modal-header">
                            <h2>{content.title()}</h2>
                            <button class="modal-close" on:click=move |_| svc.hide()>
                                {icon("x")}
                            </button>
                        </div>
                        <div class="modal-body">{body}</div>
                    </div>
                </div>
            }
        })}
    }
}
