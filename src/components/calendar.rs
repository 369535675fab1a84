//! Single-date calendar backed by the browser's native date input.

use leptos::prelude::*;
use time::Date;

use crate::util::date_format::{format_date, parse_date_input};

/// Pick one date and emit it.
///
/// Clearing the input emits `None`.
#[component]
pub fn Calendar(
    selected: Signal<Date>,
    on_select: Callback<Option<Date>>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class=format!("calendar {class}")
            prop:value=move || format_date(selected.get())
            on:change=move |ev| on_select.run(parse_date_input(&event_target_value(&ev)))
        />
    }
}
