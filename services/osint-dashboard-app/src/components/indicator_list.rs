//! Indicator list page

use crate::api::{fetch_indicators, Indicator};
use crate::state::PageState;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::location::Url;

/// Fetches /indicators and links each one to its detail page
#[component]
pub fn IndicatorList() -> impl IntoView {
    let indicators = LocalResource::new(fetch_indicators);

    view! {
        <Suspense fallback=move || view! { <div>"Loading..."</div> }>
            {move || match PageState::from_fetch(indicators.get()) {
                PageState::Loading => view! { <div>"Loading..."</div> }.into_any(),
                PageState::Failed => view! { <div>"Failed to load indicators"</div> }.into_any(),
                PageState::Loaded(list) => view! {
                    <h1>"OSINT Warning Dashboard"</h1>
                    <p>"This prototype lists available indicators and links to detail pages."</p>
                    <ul>
                        <For
                            each=move || list.clone()
                            key=|indicator| indicator.id.clone()
                            children=move |indicator| view! { <IndicatorLink indicator=indicator /> }
                        />
                    </ul>
                }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn IndicatorLink(indicator: Indicator) -> impl IntoView {
    // the router unescapes route params, so the detail page sees the raw id
    let href = format!("/indicator/{}", Url::escape(&indicator.id));
    let label = format!("{}: {}", indicator.id, indicator.description);

    view! {
        <li style="margin-bottom: 0.5rem;">
            <A href=href>{label}</A>
        </li>
    }
}
