use super::view_model::RegistrationFormViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_product_catalog::ProductType;
use leptos::prelude::*;

/// Label of an option; the empty value is the placeholder
fn option_label(value: &str) -> String {
    if value.is_empty() {
        "Seleccione...".to_string()
    } else {
        value.to_string()
    }
}

fn to_options(values: &[String]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.clone(), option_label(v)))
        .collect()
}

fn product_type_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), option_label("")))
        .chain(
            ProductType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.display_name().to_string())),
        )
        .collect()
}

/// One product row: type selector driving size/color/quantity, plus a remove control
#[component]
pub fn ProductRow(vm: RegistrationFormViewModel, row_id: u32) -> impl IntoView {
    let cascade = vm.row_cascade(row_id);
    let position = move || {
        vm.row_ids()
            .iter()
            .position(|id| *id == row_id)
            .map(|idx| idx + 1)
            .unwrap_or_default()
    };

    let tipo = vm.row_field(row_id, |r| r.tipo_producto.clone());
    let talla = vm.row_field(row_id, |r| r.talla.clone());
    let color = vm.row_field(row_id, |r| r.color.clone());
    let cantidad = vm.row_field(row_id, |r| r.cantidad.clone());

    let size_options = Signal::derive(move || cascade.with(|c| to_options(&c.sizes)));
    let color_options = Signal::derive(move || cascade.with(|c| to_options(&c.colors)));

    view! {
        <div class="product-row">
            <div class="product-row__header">
                <span class="product-row__title">{move || format!("Producto {}", position())}</span>
                <Button
                    variant="danger"
                    title="Eliminar producto"
                    on_click=Callback::new(move |_| vm.remove_row(row_id))
                >
                    {icon("delete")}
                    {"Eliminar"}
                </Button>
            </div>
            <div class="product-row__fields">
                <Select
                    label="Tipo de producto"
                    id=format!("tipo_producto_{}", row_id)
                    value=tipo
                    options=Signal::derive(product_type_options)
                    required=true
                    on_change=Callback::new(move |code: String| {
                        vm.update_row(row_id, |r| r.select_type(&code))
                    })
                />
                <Select
                    label="Talla"
                    id=format!("talla_{}", row_id)
                    value=talla
                    options=size_options
                    required=true
                    hidden=Signal::derive(move || !cascade.with(|c| c.size_visible))
                    on_change=Callback::new(move |v: String| vm.update_row(row_id, |r| r.talla = v))
                />
                <Select
                    label="Color"
                    id=format!("color_{}", row_id)
                    value=color
                    options=color_options
                    hidden=Signal::derive(move || !cascade.with(|c| c.color_visible))
                    on_change=Callback::new(move |v: String| vm.update_row(row_id, |r| r.color = v))
                />
                <Input
                    label="Cantidad"
                    id=format!("cantidad_{}", row_id)
                    input_type="number"
                    min="1"
                    value=cantidad
                    required=true
                    hidden=Signal::derive(move || !cascade.with(|c| c.quantity_visible))
                    on_input=Callback::new(move |v: String| vm.update_row(row_id, |r| r.cantidad = v))
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_option_label() {
        let opts = to_options(&["".to_string(), "CH".to_string()]);
        assert_eq!(opts[0], (String::new(), "Seleccione...".to_string()));
        assert_eq!(opts[1], ("CH".to_string(), "CH".to_string()));
    }

    #[test]
    fn test_type_options_start_with_placeholder() {
        let opts = product_type_options();
        assert_eq!(opts.len(), ProductType::all().len() + 1);
        assert_eq!(opts[0].0, "");
        assert!(opts.iter().any(|(code, _)| code == "espinillera"));
    }
}
