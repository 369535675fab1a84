//! Availability page: open slots for the shared date.
//!
//! SYSTEM CONTEXT
//! ==============
//! The date filter writes the shared `DateState` and then triggers `load`,
//! which reads the new date untracked. Results that arrive for a date the user
//! already left are dropped by `AvailabilityState::apply`.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use leptos::prelude::*;

use crate::components::date_filter::DateFilter;
use crate::net::api::HttpApi;
#[cfg(feature = "hydrate")]
use crate::net::api::SlotClient as _;
use crate::net::types::Slot;
use crate::state::availability::AvailabilityState;
use crate::state::date::DateState;

/// One-line summary of an open slot.
fn slot_label(slot: &Slot) -> String {
    match slot.room.name() {
        Some(name) => format!("{} - {} · {name}", slot.start_time, slot.end_time),
        None => format!("{} - {}", slot.start_time, slot.end_time),
    }
}

fn room_href(slot: &Slot) -> String {
    format!("/rooms/{}", slot.room.id())
}

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let date = expect_context::<RwSignal<DateState>>();
    let api = expect_context::<HttpApi>();
    let availability = RwSignal::new(AvailabilityState::default());

    let load = Callback::new(move |()| {
        let day = date.with_untracked(|d| d.canonical().to_owned());
        availability.update(|s| s.start(&day));

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list_available_slots(&day).await;
                if let Err(e) = &result {
                    log::warn!("availability fetch for {day} failed: {e}");
                }
                availability.update(|s| {
                    s.apply(&day, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    // Initial fetch; effects only run in the browser.
    Effect::new(move || load.run(()));

    view! {
        <div class="availability-page">
            <aside class="availability-page__filter">
                <DateFilter date=date on_refetch=load/>
            </aside>
            <section class="availability-page__slots">
                <h2>{move || format!("Available slots on {}", date.with(|d| d.canonical().to_owned()))}</h2>
                <Show when=move || availability.with(|s| s.error.is_some())>
                    <p class="availability-page__error">
                        {move || availability.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show
                    when=move || !availability.with(|s| s.loading)
                    fallback=move || view! { <p>"Loading slots..."</p> }
                >
                    {move || {
                        let slots = availability.with(|s| s.slots.clone());
                        if slots.is_empty() {
                            view! { <p class="availability-page__empty">"No available slots for this date."</p> }
                                .into_any()
                        } else {
                            view! {
                                <ul class="slot-list">
                                    {slots
                                        .iter()
                                        .map(|slot| {
                                            view! {
                                                <li class="slot-list__item">
                                                    <a class="slot-list__link" href=room_href(slot)>
                                                        {slot_label(slot)}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
