use chrono::{DateTime, Local};

use super::{
    html::{escape, Markup, Notice},
    View,
};

/// Wraps a rendered view in the dashboard chrome
///
/// Load warnings are repeated on every page so a missing dataset stays
/// visible whichever view the user is on.
pub fn render_page(active: View, body: &Markup, warnings: &[String], updated: DateTime<Local>) -> String {
    let warnings: Markup = warnings.iter().map(|w| Notice::warning(w.as_str()).render()).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} · E-commerce Recommender System</title>
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        {nav}
        <p class="updated">Updated: {updated}</p>
    </aside>
    <main class="block-container">
        {warnings}
        {body}
        <hr>
    </main>
</body>
</html>"#,
        title = escape(active.label()),
        css = inline_css(),
        nav = render_nav(active),
        updated = updated.format("%b %d, %Y %H:%M"),
        warnings = warnings,
        body = body,
    )
}

fn render_nav(active: View) -> String {
    let options: String = View::ALL
        .iter()
        .map(|view| {
            let checked = if *view == active { " checked" } else { "" };
            format!(
                r#"<label class="nav-option"><input type="radio" name="view" value="{slug}" onchange="this.form.submit()"{checked}> {label}</label>"#,
                slug = view.slug(),
                label = view.label(),
            )
        })
        .collect();

    format!(
        r#"<h2>🔖 Navigation</h2>
        <form method="get" action="/"><p>Go to</p>{options}<noscript><button type="submit">Go</button></noscript></form>"#
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; display: flex; font-family: sans-serif; }
.block-container {
    flex: 1;
    padding: 2rem 3rem;
    min-height: 100vh;
    background: linear-gradient(135deg, #eef3f8 0%, #cfdcec 100%);
}
.sidebar {
    width: 260px;
    padding: 1.5rem;
    background-color: rgba(255,255,255,0.85);
    border-right: 4px solid #e05a47;
}
.sidebar h2 { color: #4e79a7; font-weight: 800; }
.nav-option { display: block; font-size: 18px; padding: 6px 8px; border-radius: 8px; }
.nav-option:has(input:checked) { background-color: #e05a47; color: white; }
.updated { margin-top: 2rem; color: #555; font-size: 0.9em; }
h1, h2, h3 { color: #e05a47; text-shadow: 2px 2px 4px rgba(0,0,0,0.3); }
h1.centered { text-align: center; color: #4e79a7; }
.accent { color: #e05a47; }
button {
    background-color: #e05a47;
    border: none;
    border-radius: 12px;
    color: white;
    font-weight: 600;
    padding: 6px 14px;
}
.hero, .banner { width: 100%; border-radius: 10px; }
.cards { display: flex; gap: 2rem; }
.card { flex: 1; text-decoration: none; color: inherit; }
.highlight { background-color: rgba(224,90,71,0.2); padding: 15px; border-radius: 10px; }
.selection { display: flex; flex-direction: column; gap: 0.5rem; margin: 1rem 0; max-width: 420px; }
.notice { padding: 12px 16px; border-radius: 8px; margin: 12px 0; }
.notice-warning { background-color: #fff4d6; color: #7a5b00; }
.notice-error { background-color: #fde2e0; color: #8a1c12; }
.notice-info { background-color: #e1edfb; color: #1c4a8a; }
.styled-table, .grid-table {
    width: 100%;
    border-collapse: collapse;
    margin: 25px 0;
    font-size: 1.1em;
    font-family: sans-serif;
}
.styled-table { box-shadow: 0 0 10px rgba(0,0,0,0.15); }
.styled-table thead tr {
    background-color: #4e79a7;
    color: #ffffff;
    text-align: left;
}
.styled-table th, .styled-table td, .grid-table th, .grid-table td { padding: 12px 15px; }
.grid-table th { text-align: left; border-bottom: 2px solid #4e79a7; }
.styled-table tbody tr, .grid-table tbody tr { border-bottom: 1px solid #dddddd; }
.styled-table tbody tr:nth-of-type(even) { background-color: #f3f3f3; }
.styled-table tbody tr:last-of-type { border-bottom: 2px solid #4e79a7; }
"#
}
