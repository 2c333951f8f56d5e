//! Evaluation result panel

use crate::state::EvaluationResult;
use leptos::prelude::*;

/// Pretty-printed JSON on success, a red error line on failure
#[component]
pub fn EvaluationPanel(result: EvaluationResult) -> impl IntoView {
    let body = match result.error_message() {
        Some(message) => {
            let text = format!("Error: {}", message);
            view! { <p style="color: red;">{text}</p> }.into_any()
        }
        None => view! {
            <pre style="background: #f0f0f0; padding: 1rem;">{result.pretty_json()}</pre>
        }
        .into_any(),
    };

    view! {
        <div style="margin-top: 1rem;">
            <h2>"Evaluation Result"</h2>
            {body}
        </div>
    }
}
