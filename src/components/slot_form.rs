//! Slot creation form: calendar, room and time selects, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Room options come from the room directory, fetched once on mount. A
//! calendar pick is mirrored into the shared `DateState` so the availability
//! page follows the date chosen here. Submission progress is reported through
//! the toast surface from context.

#[cfg(test)]
#[path = "slot_form_test.rs"]
mod slot_form_test;

use leptos::prelude::*;
use time::Date;

use crate::components::calendar::Calendar;
use crate::net::api::HttpApi;
#[cfg(feature = "hydrate")]
use crate::net::api::RoomDirectory as _;
use crate::state::date::DateState;
use crate::state::rooms::RoomsState;
use crate::state::slot_form::SlotForm;
#[cfg(feature = "hydrate")]
use crate::state::slot_form::submit_slot;
use crate::state::toast::ToastState;
use crate::util::time_options::time_options;

/// Apply a calendar pick to the form and mirror it into the shared date.
fn apply_form_date_pick(form: &mut SlotForm, shared: &mut DateState, pick: Option<Date>) -> bool {
    match form.select_date(pick) {
        Some(day) => {
            shared.set(day);
            true
        }
        None => false,
    }
}

#[component]
pub fn SlotCreationForm(shared_date: RwSignal<DateState>) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(SlotForm::new(shared_date.with_untracked(DateState::selected)));
    let rooms = RwSignal::new(RoomsState { loading: true, ..RoomsState::default() });

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_rooms().await;
            if let Err(e) = &result {
                log::warn!("room list fetch failed: {e}");
            }
            rooms.update(|s| s.apply(result));
        });
    }

    let on_date_select = Callback::new(move |pick: Option<Date>| {
        if pick.is_none() {
            return;
        }
        let mut next_form = form.get_untracked();
        let mut next_shared = shared_date.get_untracked();
        if apply_form_date_pick(&mut next_form, &mut next_shared, pick) {
            form.set(next_form);
            shared_date.set(next_shared);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(SlotForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_slot(&api, &request, &toasts).await;
                form.update(|f| f.finish_submit(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, request, toasts);
        }
    };

    view! {
        <div class="slot-form">
            <Calendar
                selected=Signal::derive(move || form.with(|f| f.date))
                on_select=on_date_select
                class="slot-form__calendar"
            />
            <form class="slot-form__fields" on:submit=on_submit>
                <div class="slot-form__row">
                    <select
                        name="room"
                        id="room"
                        class="slot-form__select"
                        prop:value=move || form.with(|f| f.room_id.clone())
                        on:change=move |ev| form.update(|f| f.select_room(event_target_value(&ev)))
                    >
                        <option value="">"Select Room"</option>
                        {move || {
                            rooms
                                .with(RoomsState::options)
                                .into_iter()
                                .map(|(id, name)| view! { <option value=id>{name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="slot-form__row">
                    <TimeSelect
                        name="startTime"
                        placeholder="Start Time"
                        value=Signal::derive(move || form.with(|f| f.start_time.clone()))
                        on_change=Callback::new(move |label: String| form.update(|f| f.select_start_time(label)))
                    />
                    <TimeSelect
                        name="endTime"
                        placeholder="End Time"
                        value=Signal::derive(move || form.with(|f| f.end_time.clone()))
                        on_change=Callback::new(move |label: String| form.update(|f| f.select_end_time(label)))
                    />
                </div>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="slot-form__error">
                        {move || form.with(|f| f.error.map(|e| e.to_string()).unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || rooms.with(|r| r.error.is_some())>
                    <p class="slot-form__error slot-form__error--rooms">
                        {move || rooms.with(|r| r.error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <button
                    type="submit"
                    class="btn btn--primary slot-form__submit"
                    disabled=move || !form.with(SlotForm::can_submit)
                >
                    "Submit"
                </button>
            </form>
        </div>
    }
}

/// Select over the fixed time-of-day labels.
#[component]
fn TimeSelect(
    name: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            name=name
            id=name
            class="slot-form__select slot-form__select--time"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {time_options()
                .into_iter()
                .map(|label| {
                    let value = label.clone();
                    view! { <option value=value>{label}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
