//! Slot creation page.

use leptos::prelude::*;

use crate::components::slot_form::SlotCreationForm;
use crate::state::date::DateState;

#[component]
pub fn CreateSlotPage() -> impl IntoView {
    let date = expect_context::<RwSignal<DateState>>();

    view! {
        <div class="create-slot-page">
            <h1 class="create-slot-page__title">"Create Slot"</h1>
            <SlotCreationForm shared_date=date/>
        </div>
    }
}
