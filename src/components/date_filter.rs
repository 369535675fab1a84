//! Date picker that scopes sibling views to one date.
//!
//! DESIGN
//! ======
//! A pick writes the shared date first and then asks the parent to refetch,
//! so the refetch always reads the new date. Clearing the picker does neither.

#[cfg(test)]
#[path = "date_filter_test.rs"]
mod date_filter_test;

use leptos::prelude::*;
use time::Date;

use crate::components::calendar::Calendar;
use crate::state::date::DateState;

/// Publish `pick` and request one refetch; no-op for `None`.
fn handle_pick(pick: Option<Date>, publish: impl FnOnce(Date), refetch: impl FnOnce()) {
    let Some(day) = pick else {
        return;
    };
    publish(day);
    refetch();
}

#[component]
pub fn DateFilter(date: RwSignal<DateState>, on_refetch: Callback<()>) -> impl IntoView {
    let on_select = Callback::new(move |pick: Option<Date>| {
        handle_pick(pick, |day| date.update(|s| s.set(day)), || on_refetch.run(()));
    });

    view! {
        <div class="date-filter">
            <Calendar
                selected=Signal::derive(move || date.with(DateState::selected))
                on_select=on_select
                class="date-filter__calendar"
            />
        </div>
    }
}
