use crate::domain::a002_equipment_registration::ui::form::EquipmentRegistrationForm;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_location_sync();
    provide_context(ctx);

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Page::Pedidos => view! { <OrderList /> }.into_any(),
                Page::RegistroEquipo => view! { <EquipmentRegistrationForm /> }.into_any(),
            }}
        </Shell>
    }
}
