//! Server-rendered HTML for the indicator list and detail pages

use crate::indicator::{find_indicator, Indicator};

const TITLE: &str = "OSINT Warning Dashboard";

/// Handles the "Simulate Event" button: posts to the dashboard relay, keeps the
/// button disabled while the request is in flight, then renders the JSON reply
/// or the error message.
const EVALUATE_SCRIPT: &str = r#"<script>
    const button = document.getElementById('evaluate');
    const output = document.getElementById('evaluation');

    function renderResult(result) {
        output.innerHTML = '';
        output.style.marginTop = '1rem';
        const heading = document.createElement('h2');
        heading.textContent = 'Evaluation Result';
        output.appendChild(heading);
        if (result && result.error) {
            const p = document.createElement('p');
            p.style.color = 'red';
            p.textContent = 'Error: ' + result.error;
            output.appendChild(p);
        } else {
            const pre = document.createElement('pre');
            pre.style.background = '#f0f0f0';
            pre.style.padding = '1rem';
            pre.textContent = JSON.stringify(result, null, 2);
            output.appendChild(pre);
        }
    }

    button.addEventListener('click', async () => {
        button.disabled = true;
        button.textContent = 'Evaluating…';
        try {
            let result;
            try {
                const res = await fetch('/api/event', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ indicator_id: button.dataset.indicatorId, payload: {} }),
                });
                result = await res.json();
            } catch (err) {
                result = { error: err.message };
            }
            renderResult(result);
        } finally {
            button.disabled = false;
            button.textContent = 'Simulate Event';
        }
    });
</script>"#;

/// Escape text for interpolation into HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body style="padding: 2rem; font-family: sans-serif;">
{body}
</body>
</html>"#,
        title = escape_html(title),
        body = body,
    )
}

/// Link target for an indicator's detail page, with the id as one encoded segment
pub fn detail_href(indicator: &Indicator) -> String {
    format!("/indicator/{}", path_segment(&indicator.id))
}

fn path_segment(segment: &str) -> String {
    let Ok(mut url) = reqwest::Url::parse("http://localhost/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Render the list page from the result of fetching the collection
pub fn render_index(indicators: &crate::Result<Vec<Indicator>>) -> String {
    let indicators = match indicators {
        Ok(indicators) => indicators,
        Err(_) => return document(TITLE, "<div>Failed to load indicators</div>"),
    };

    let items: String = indicators
        .iter()
        .map(|indicator| {
            format!(
                r#"
        <li style="margin-bottom: 0.5rem;"><a href="{}">{}: {}</a></li>"#,
                escape_html(&detail_href(indicator)),
                escape_html(&indicator.id),
                escape_html(&indicator.description),
            )
        })
        .collect();

    let body = format!(
        r#"    <h1>{TITLE}</h1>
    <p>This prototype lists available indicators and links to detail pages.</p>
    <ul>{items}
    </ul>"#
    );

    document(TITLE, &body)
}

/// Render the detail page for `id` from the result of fetching the collection
pub fn render_detail(id: &str, indicators: &crate::Result<Vec<Indicator>>) -> String {
    let indicators = match indicators {
        Ok(indicators) => indicators,
        Err(_) => return document(TITLE, "<div>Error loading indicator</div>"),
    };

    let Some(indicator) = find_indicator(indicators, id) else {
        return document(TITLE, "<div>Indicator not found</div>");
    };

    let body = format!(
        r#"    <h1>Indicator {id}</h1>
    <p><strong>Description:</strong> {description}</p>
    <p><strong>PIR:</strong> {pir}</p>
    <p><strong>Course of action:</strong> {coa}</p>
    <p><strong>Data signals:</strong> {signals}</p>
    <button id="evaluate" data-indicator-id="{id}" style="margin-top: 1rem; padding: 0.5rem 1rem;">Simulate Event</button>
    <div id="evaluation"></div>
    {script}"#,
        id = escape_html(&indicator.id),
        description = escape_html(&indicator.description),
        pir = escape_html(&indicator.pir),
        coa = escape_html(&indicator.coa),
        signals = escape_html(&indicator.data_signals.join(", ")),
        script = EVALUATE_SCRIPT,
    );

    document(&format!("Indicator {}", indicator.id), &body)
}
