//! Main App component

use crate::components::indicator_detail::IndicatorDetail;
use crate::components::indicator_list::IndicatorList;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="OSINT Warning Dashboard" />
        <Router>
            <main style="padding: 2rem; font-family: sans-serif;">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=IndicatorList />
                    <Route path=path!("/indicator/:id") view=IndicatorDetail />
                </Routes>
            </main>
        </Router>
    }
}
