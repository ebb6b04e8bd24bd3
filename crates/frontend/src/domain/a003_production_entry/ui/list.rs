use crate::shared::data::MockStore;
use crate::shared::format::{format_currency, format_date, format_number};
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::list_utils::{contains_ci, filter_list, Searchable};
use contracts::domain::a003_production_entry::ProductionEntry;
use leptos::prelude::*;

impl Searchable for ProductionEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.document_no, filter)
            || contains_ci(&self.article, filter)
            || contains_ci(&self.base.description, filter)
    }
}

/// Units and cost of a set of entries
pub fn totals(entries: &[ProductionEntry]) -> (i64, f64) {
    entries
        .iter()
        .fold((0, 0.0), |(count, amount), e| (count + e.count, amount + e.amount))
}

#[component]
pub fn ProductionList() -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let filter = RwSignal::new(String::new());

    let rows = move || {
        let items: Vec<ProductionEntry> =
            store.with(|s| s.production_entries().into_iter().cloned().collect());
        filter_list(items, &filter.get())
    };

    Effect::new(move |_| {
        filter.track();
        request_icon_refresh();
    });

    view! {
        <div class="section-header">
            <h2>{icon("tool")}" Produção da Fábrica"</h2>
            <input
                type="text"
                class="search-input"
                placeholder="Buscar (mín. 3 caracteres)..."
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
        </div>
        {move || {
            let entries = rows();
            let (count, amount) = totals(&entries);
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Documento"</th>
                            <th>"Data"</th>
                            <th>"Artigo"</th>
                            <th>"Descrição"</th>
                            <th>"Quantidade"</th>
                            <th>"Custo Total"</th>
                            <th>"Custo Unit."</th>
                        </tr>
                    </thead>
                    <tbody>
                        {entries.into_iter().map(|e| view! {
                            <tr>
                                <td>{e.document_no.clone()}</td>
                                <td>{format_date(e.document_date)}</td>
                                <td>{e.article.clone()}</td>
                                <td>{e.base.description.clone()}</td>
                                <td class="num">{format_number(e.count as f64, 0)}</td>
                                <td class="num">{format_currency(e.amount)}</td>
                                <td class="num">
                                    {e.cost_per_unit.map(format_currency).unwrap_or_else(|| "-".to_string())}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="4">"Total"</td>
                            <td class="num">{format_number(count as f64, 0)}</td>
                            <td class="num">{format_currency(amount)}</td>
                            <td></td>
                        </tr>
                    </tfoot>
                </table>
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(article: &str, count: i64, amount: f64) -> ProductionEntry {
        ProductionEntry::new_for_insert(
            "F-00000090".into(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            "Bloco".into(),
            article.into(),
            count,
            amount,
        )
    }

    #[test]
    fn test_totals() {
        let entries = vec![entry("BLC-1419", 100, 230.0), entry("GUI-1030", 10, 280.0)];
        assert_eq!(totals(&entries), (110, 510.0));
        assert_eq!(totals(&[]), (0, 0.0));
    }

    #[test]
    fn test_search_by_article() {
        let entries = vec![entry("BLC-1419", 100, 230.0), entry("GUI-1030", 10, 280.0)];
        assert_eq!(filter_list(entries, "gui-")[0].article, "GUI-1030");
    }
}
