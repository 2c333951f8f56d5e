//! Indicator detail page with the simulate-event action

use crate::api::{fetch_indicators, post_event, Indicator};
use crate::components::evaluation_panel::EvaluationPanel;
use crate::state::{ActionState, DetailState};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Resolves the route id against the fetched collection
#[component]
pub fn IndicatorDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    let indicators = LocalResource::new(fetch_indicators);

    view! {
        <Suspense fallback=move || view! { <div>"Loading..."</div> }>
            {move || match DetailState::resolve(indicators.get(), &id()) {
                DetailState::Loading => view! { <div>"Loading..."</div> }.into_any(),
                DetailState::Failed => view! { <div>"Error loading indicator"</div> }.into_any(),
                DetailState::NotFound => view! { <div>"Indicator not found"</div> }.into_any(),
                DetailState::Found(indicator) => {
                    view! { <IndicatorCard indicator=indicator /> }.into_any()
                }
            }}
        </Suspense>
    }
}

#[component]
fn IndicatorCard(indicator: Indicator) -> impl IntoView {
    let evaluate = Action::new_local(|indicator_id: &String| post_event(indicator_id.clone()));
    let action_state =
        move || ActionState::from_action(evaluate.pending().get(), evaluate.value().get());

    let indicator_id = indicator.id.clone();
    let signals = indicator.data_signals.join(", ");

    view! {
        <div>
            <h1>"Indicator " {indicator.id}</h1>
            <p><strong>"Description:"</strong> " " {indicator.description}</p>
            <p><strong>"PIR:"</strong> " " {indicator.pir}</p>
            <p><strong>"Course of action:"</strong> " " {indicator.coa}</p>
            <p><strong>"Data signals:"</strong> " " {signals}</p>
            <button
                on:click=move |_| {
                    evaluate.dispatch(indicator_id.clone());
                }
                disabled=move || action_state().is_disabled()
                style="margin-top: 1rem; padding: 0.5rem 1rem;"
            >
                {move || action_state().label()}
            </button>
            {move || evaluate.value().get().map(|result| view! { <EvaluationPanel result=result /> })}
        </div>
    }
}
