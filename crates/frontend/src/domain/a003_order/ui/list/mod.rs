mod model;
pub mod state;

use crate::shared::api_utils::show_alert;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_product_catalog::ProductType;
use contracts::domain::a003_order::OrderSearchQuery;
use leptos::prelude::*;
use state::{OrderRow, OrderSearchForm};

/// Query string of the current page URL
fn current_query() -> OrderSearchQuery {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    OrderSearchQuery::from_query_string(&search).unwrap_or_else(|e| {
        log::warn!("ignoring malformed search query '{}': {}", search, e);
        OrderSearchQuery::default()
    })
}

/// Mirror the search in the address bar so the listing can be bookmarked
fn push_query_to_location(query: &OrderSearchQuery) {
    let Some(w) = web_sys::window() else { return };
    let hash = w.location().hash().unwrap_or_default();
    let qs = query.to_query_string();
    let url = if qs.is_empty() {
        format!("{}{}", w.location().pathname().unwrap_or_default(), hash)
    } else {
        format!("?{}{}", qs, hash)
    };
    if let Ok(history) = w.history() {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

fn type_filter_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "Todos".to_string()))
        .chain(
            ProductType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.display_name().to_string())),
        )
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let initial_query = current_query();
    let form = RwSignal::new(OrderSearchForm::from_query(&initial_query));
    let (items, set_items) = signal::<Vec<OrderRow>>(Vec::new());
    let (is_loaded, set_is_loaded) = signal(false);

    let fetch = move |query: OrderSearchQuery| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_orders(&query).await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(OrderRow::from).collect());
                    set_is_loaded.set(true);
                }
                Err(e) => {
                    log::error!("order list request failed: {}", e);
                    show_alert("Ocurrió un error al cargar los pedidos.");
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = form.with_untracked(|f| f.to_query());
        push_query_to_location(&query);
        fetch(query);
    };

    let field = move |get: fn(&OrderSearchForm) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };

    fetch(initial_query);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pedidos"}</h1>
                </div>
            </div>

            <form id="buscar-pedidos-form" class="filter-panel" on:submit=on_submit>
                <Input
                    label="Solicitante"
                    id="buscar_nombre_solicitante"
                    value=field(|f| &f.nombre_solicitante)
                    on_input=Callback::new(move |v: String| form.update(|f| f.nombre_solicitante = v))
                />
                <Select
                    label="Producto"
                    id="buscar_tipo_producto"
                    value=field(|f| &f.tipo_producto)
                    options=Signal::derive(type_filter_options)
                    on_change=Callback::new(move |v: String| form.update(|f| f.tipo_producto = v))
                />
                <Input
                    label="Desde"
                    id="buscar_fecha_desde"
                    input_type="date"
                    value=field(|f| &f.fecha_desde)
                    on_input=Callback::new(move |v: String| form.update(|f| f.fecha_desde = v))
                />
                <Input
                    label="Hasta"
                    id="buscar_fecha_hasta"
                    input_type="date"
                    value=field(|f| &f.fecha_hasta)
                    on_input=Callback::new(move |v: String| form.update(|f| f.fecha_hasta = v))
                />
                <Button button_type="submit">
                    {icon("search")}
                    {"Buscar"}
                </Button>
            </form>

            <div class="table">
                <table id="pedidos-table" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Fecha"}</th>
                            <th class="table__header-cell">{"Solicitante"}</th>
                            <th class="table__header-cell">{"Producto"}</th>
                            <th class="table__header-cell">{"Talla"}</th>
                            <th class="table__header-cell">{"Color"}</th>
                            <th class="table__header-cell">{"Cantidad"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = items.get();
                            if rows.is_empty() && is_loaded.get() {
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="6">
                                            {"No hay pedidos."}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| view! {
                                    <tr class="table__row" data-id=row.id>
                                        <td class="table__cell">{row.fecha}</td>
                                        <td class="table__cell">{row.nombre_solicitante}</td>
                                        <td class="table__cell">{row.tipo_producto}</td>
                                        <td class="table__cell">{row.talla}</td>
                                        <td class="table__cell">{row.color}</td>
                                        <td class="table__cell table__cell--number">{row.cantidad}</td>
                                    </tr>
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
