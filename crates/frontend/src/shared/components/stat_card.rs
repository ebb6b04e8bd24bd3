use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual status of a dashboard figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Neutral,
    Good,
    Warning,
    Bad,
}

impl CardStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardStatus::Good => "stat-card stat-card--success",
            CardStatus::Bad => "stat-card stat-card--error",
            CardStatus::Warning => "stat-card stat-card--warning",
            CardStatus::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon id passed to `icon()`
    icon_name: &'static str,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    status: Signal<CardStatus>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=move || status.get().css_class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__label">{label}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
