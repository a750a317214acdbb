use super::product_row::ProductRow;
use super::view_model::RegistrationFormViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn EquipmentRegistrationForm() -> impl IntoView {
    let vm = RegistrationFormViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Registro de equipo"}</h1>
                </div>
            </div>

            <form id="registro-equipo-form" class="details-form" on:submit=on_submit>
                <Input
                    label="Nombre del solicitante"
                    id="nombre_solicitante"
                    value=vm.requester()
                    required=true
                    placeholder="Nombre completo"
                    on_input=Callback::new(move |v: String| vm.set_requester(v))
                />

                <div class="product-rows">
                    <For
                        each=move || vm.row_ids()
                        key=|row_id| *row_id
                        children=move |row_id| view! { <ProductRow vm=vm row_id=row_id /> }
                    />
                    <Show when=move || vm.draft.with(|d| d.rows.is_empty())>
                        <div class="product-rows__empty">
                            {"Agregue al menos un producto."}
                        </div>
                    </Show>
                </div>

                <div class="details-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| vm.add_row())
                    >
                        {icon("plus")}
                        {"Agregar producto"}
                    </Button>
                    <Button button_type="submit">
                        {icon("save")}
                        {"Registrar"}
                    </Button>
                </div>
            </form>
        </div>
    }
}
