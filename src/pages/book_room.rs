//! Room booking page: details for one room and a "Book Now" affordance.
//!
//! The room id comes from the route. Booking itself is not wired up; the
//! button is presentational.

#[cfg(test)]
#[path = "book_room_test.rs"]
mod book_room_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{ApiError, HttpApi};
#[cfg(feature = "hydrate")]
use crate::net::api::RoomDirectory as _;
use crate::net::types::Room;
use crate::state::room_detail::{RoomDetailState, RoomPhase};

fn floor_label(floor_no: u32) -> String {
    format!("Floor: {floor_no}")
}

fn room_no_label(room_no: u32) -> String {
    format!("Room No: {room_no}")
}

fn capacity_label(capacity: u32) -> String {
    format!("Capacity: {capacity} people")
}

fn price_label(price: f64) -> String {
    format!("${price}")
}

#[component]
pub fn BookRoomPage() -> impl IntoView {
    let params = use_params_map();
    let api = expect_context::<HttpApi>();
    let detail = RwSignal::new(RoomDetailState::default());

    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            detail.update(|s| s.apply(Err(ApiError::Rejected("missing room id".to_owned()))));
            return;
        };
        detail.update(RoomDetailState::start);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.get_room(&id).await;
                if let Err(e) = &result {
                    log::warn!("room {id} fetch failed: {e}");
                }
                // Drop replies for a room the route already moved away from.
                if params.read_untracked().get("id").as_deref() == Some(id.as_str()) {
                    detail.update(|s| s.apply(result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, id);
        }
    });

    view! {
        {move || {
            detail
                .with(|s| match s.phase() {
                    RoomPhase::Loading => view! { <div class="book-room book-room--loading">"Loading...."</div> }.into_any(),
                    RoomPhase::Unavailable(reason) => {
                        let reason = reason.to_owned();
                        view! {
                            <div class="book-room book-room--unavailable">
                                <p>{reason}</p>
                            </div>
                        }
                            .into_any()
                    }
                    RoomPhase::Ready(room) => view! { <RoomDetails room=room.clone()/> }.into_any(),
                })
        }}
    }
}

/// Read-only room attributes.
#[component]
fn RoomDetails(room: Room) -> impl IntoView {
    view! {
        <div class="book-room">
            <div class="book-room__gallery" aria-hidden="true"></div>
            <div class="book-room__info">
                <h2 class="book-room__name">{room.name}</h2>
                <p class="book-room__fact">{floor_label(room.floor_no)}</p>
                <p class="book-room__fact">{room_no_label(room.room_no)}</p>
                <p class="book-room__fact">{capacity_label(room.capacity)}</p>
                <p class="book-room__amenities">
                    {room
                        .amenities
                        .into_iter()
                        .map(|amenity| view! { <span class="book-room__amenity">{amenity}</span> })
                        .collect::<Vec<_>>()}
                </p>
                <p class="book-room__price">{price_label(room.price_per_slot)}</p>
                <button class="btn btn--primary book-room__book" type="button">
                    "Book Now"
                </button>
            </div>
        </div>
    }
}
