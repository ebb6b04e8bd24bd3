use crate::shared::data::MockStore;
use crate::shared::export::{export_excel, export_pdf};
use crate::shared::format::{format_currency, format_number};
use crate::shared::icons::{icon, request_icon_refresh};
use crate::shared::list_utils::{
    contains_ci, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::notifications::NotificationService;
use contracts::domain::a002_material::{Material, MaterialId};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Material {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.base.code, filter) || contains_ci(&self.base.description, filter)
    }
}

impl Sortable for Material {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => self.base.description.cmp(&other.base.description),
            "quantity" => self.quantity.total_cmp(&other.quantity),
            "value" => self.stock_value().total_cmp(&other.stock_value()),
            _ => self.base.code.cmp(&other.base.code),
        }
    }
}

#[component]
pub fn MaterialList() -> impl IntoView {
    let store = use_context::<RwSignal<MockStore>>().expect("MockStore not provided in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let filter = RwSignal::new(String::new());
    let sort_field = RwSignal::new("code".to_string());
    let sort_ascending = RwSignal::new(true);

    let rows = move || {
        let items: Vec<Material> = store.with(|s| s.materials().into_iter().cloned().collect());
        let mut items = filter_list(items, &filter.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let total_value = move || {
        store.with(|s| s.materials().iter().map(|m| m.stock_value()).sum::<f64>())
    };

    let adjust = move |id: MaterialId, delta: f64| {
        if let Some(Err(e)) = store.try_update(|s| s.adjust_stock(id, delta)) {
            notifications.error(e);
        }
    };

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let header = move |field: &'static str, title: &'static str| {
        view! {
            <th class="sortable" on:click=move |_| toggle_sort(field)>
                {title}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    Effect::new(move |_| {
        store.track();
        filter.track();
        request_icon_refresh();
    });

    view! {
        <div class="section-header">
            <h2>{icon("package")}" Controle de Materiais"</h2>
            <div class="section-actions">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar (mín. 3 caracteres)..."
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
                <button class="btn btn-secondary" on:click=move |_| export_pdf(notifications)>
                    {icon("file-text")}" PDF"
                </button>
                <button class="btn btn-secondary" on:click=move |_| export_excel(notifications)>
                    {icon("download")}" Excel"
                </button>
            </div>
        </div>
        <table class="data-table">
            <thead>
                <tr>
                    {header("code", "Código")}
                    {header("description", "Descrição")}
                    {header("quantity", "Estoque")}
                    <th>"Mínimo"</th>
                    <th>"Preço Unit."</th>
                    {header("value", "Valor em Estoque")}
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|m| (m.base.id, m.base.metadata.version)
                    children=move |m| {
                        let id = m.base.id;
                        let low = m.is_below_minimum();
                        let row_class = if low { "low-stock" } else { "" };
                        view! {
                            <tr class=row_class>
                                <td>{m.base.code.clone()}</td>
                                <td>
                                    {m.base.description.clone()}
                                    {low.then(|| view! {
                                        <span class="badge badge--warning" title="Abaixo do estoque mínimo">
                                            {icon("alert-triangle")}" Estoque baixo"
                                        </span>
                                    })}
                                </td>
                                <td class="num">{format_number(m.quantity, 0)}" "{m.unit.clone()}</td>
                                <td class="num">{format_number(m.minimum_stock, 0)}</td>
                                <td class="num">{format_currency(m.unit_price)}</td>
                                <td class="num">{format_currency(m.stock_value())}</td>
                                <td class="row-actions">
                                    <button class="btn-icon" title="Retirar" on:click=move |_| adjust(id, -1.0)>
                                        {icon("minus")}
                                    </button>
                                    <button class="btn-icon" title="Repor" on:click=move |_| adjust(id, 1.0)>
                                        {icon("plus")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="5">"Total"</td>
                    <td class="num">{move || format_currency(total_value())}</td>
                    <td></td>
                </tr>
            </tfoot>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(code: &str, description: &str, quantity: f64) -> Material {
        Material::new_for_insert(code.into(), description.into(), "un".into(), quantity, 5.0, 2.0)
    }

    #[test]
    fn test_search_by_code_or_description() {
        let items = vec![material("MAT-0001", "Tubo PVC", 10.0), material("MAT-0002", "Cimento", 3.0)];
        assert_eq!(filter_list(items.clone(), "pvc").len(), 1);
        assert_eq!(filter_list(items, "mat-0002")[0].base.description, "Cimento");
    }

    #[test]
    fn test_sort_by_stock_value() {
        let mut items = vec![material("A", "a", 10.0), material("B", "b", 3.0)];
        sort_list(&mut items, "value", true);
        assert_eq!(items[0].base.code, "B");
    }
}
