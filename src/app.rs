//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{availability::AvailabilityPage, book_room::BookRoomPage, create_slot::CreateSlotPage};
use crate::state::date::DateState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client, the shared date, and the toast surface, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let date = RwSignal::new(DateState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(HttpApi::new(&config));
    provide_context(date);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/roombook.css"/>
        <Title text="Room Booking"/>

        <Router>
            <nav class="top-nav">
                <a class="top-nav__link" href="/">"Availability"</a>
                <a class="top-nav__link" href="/slots/new">"Create Slot"</a>
            </nav>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=AvailabilityPage/>
                    <Route path=(StaticSegment("slots"), StaticSegment("new")) view=CreateSlotPage/>
                    <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=BookRoomPage/>
                </Routes>
            </main>
            <Toaster toasts=toasts/>
        </Router>
    }
}
