//! Escaping HTML building blocks
//!
//! Field values from the CSV files go through [`escape`] on their way into
//! every table, notice and form; only the fixed page chrome is inserted raw.

use std::fmt::{Display, Write};

use crate::models::Key;

/// Escape HTML special characters
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// An HTML fragment that is safe to embed as-is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Trusted markup, inserted verbatim
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Untrusted text, escaped
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::default();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// Table rendered with a header row and escaped cells
#[derive(Debug, Clone)]
pub struct HtmlTable {
    class: &'static str,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl HtmlTable {
    /// The dashboard's highlighted result table
    pub fn styled<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self::with_class("styled-table", headers)
    }

    /// Plain grid for record listings
    pub fn grid<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self::with_class("grid-table", headers)
    }

    fn with_class<H: Into<String>>(class: &'static str, headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            class,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<C: Into<String>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> Markup {
        let mut html = format!(r#"<table class="{}"><thead><tr>"#, self.class);
        for header in &self.headers {
            let _ = write!(html, "<th>{}</th>", escape(header));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                let _ = write!(html, "<td>{}</td>", escape(cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        Markup(html)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
    Info,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
            NoticeLevel::Info => "notice-info",
        }
    }
}

/// A boxed message shown in place of, or above, view content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn render(&self) -> Markup {
        Markup(format!(
            r#"<div class="notice {}">{}</div>"#,
            self.level.class(),
            escape(&self.message)
        ))
    }
}

/// GET form that re-renders the current view with new selections
///
/// The view slug travels as a hidden field so changing a control never
/// navigates away from the page it sits on.
#[derive(Debug, Clone)]
pub struct SelectionForm {
    view: &'static str,
    controls: Vec<String>,
}

impl SelectionForm {
    pub fn new(view: &'static str) -> Self {
        Self { view, controls: Vec::new() }
    }

    /// Single-choice dropdown over `options`
    pub fn select(mut self, name: &str, label: &str, options: &[Key], selected: &Key) -> Self {
        let mut html = format!(
            r#"<label for="{name}">{label}</label><select id="{name}" name="{name}" onchange="this.form.submit()">"#,
            name = escape(name),
            label = escape(label),
        );
        for option in options {
            let value = escape(option.as_str());
            let marker = if option == selected { " selected" } else { "" };
            let _ = write!(html, r#"<option value="{value}"{marker}>{value}</option>"#);
        }
        html.push_str("</select>");
        self.controls.push(html);
        self
    }

    /// Bounded numeric slider
    pub fn range(mut self, name: &str, label: &str, min: usize, max: usize, value: usize) -> Self {
        self.controls.push(format!(
            r#"<label for="{name}">{label}: <output>{value}</output></label><input type="range" id="{name}" name="{name}" min="{min}" max="{max}" value="{value}" onchange="this.form.submit()">"#,
            name = escape(name),
            label = escape(label),
        ));
        self
    }

    pub fn render(&self) -> Markup {
        let mut html = String::from(r#"<form class="selection" method="get" action="/">"#);
        let _ = write!(html, r#"<input type="hidden" name="view" value="{}">"#, self.view);
        for control in &self.controls {
            html.push_str(control);
        }
        html.push_str(r#"<noscript><button type="submit">Show</button></noscript></form>"#);
        Markup(html)
    }
}

/// Shown for blank numeric cells
pub const MISSING_VALUE: &str = "n/a";

/// Formats a cell that may be blank in the source file
pub fn optional(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Two decimal places, as used for lift values
pub fn decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// `$12.50`
pub fn dollars(value: f64) -> String {
    format!("${:.2}", value)
}

/// `$1,234.50`
pub fn dollars_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("${sign}{grouped}")
    } else {
        format!("${sign}{grouped}.{frac}")
    }
}

/// `recommended_product_name` -> `Recommended Product Name`
pub fn title_case(column: &str) -> String {
    column
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_table_escapes_cells_and_headers() {
        let html = HtmlTable::styled(["<b>Name</b>"])
            .row(["<script>alert(1)</script>"])
            .render();
        assert!(!html.as_str().contains("<script>"));
        assert!(html.as_str().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.as_str().contains("<th>&lt;b&gt;Name&lt;/b&gt;</th>"));
    }

    #[test]
    fn test_table_row_count() {
        let table = HtmlTable::grid(["A", "B"]).row(["1", "2"]).row(["3", "4"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.render().as_str().matches("<tr>").count(), 3);
    }

    #[test]
    fn test_notice_levels() {
        assert_eq!(
            Notice::info("No recommendations").render().as_str(),
            r#"<div class="notice notice-info">No recommendations</div>"#
        );
        assert!(Notice::error("x").render().as_str().contains("notice-error"));
    }

    #[test]
    fn test_select_marks_selected_option() {
        let options = vec![Key::from("bread"), Key::from("milk")];
        let html = SelectionForm::new("market-basket")
            .select("antecedent", "Antecedent", &options, &Key::from("milk"))
            .render();
        assert!(html.as_str().contains(r#"<option value="milk" selected>milk</option>"#));
        assert!(html.as_str().contains(r#"<option value="bread">bread</option>"#));
        assert!(html.as_str().contains(r#"name="view" value="market-basket""#));
    }

    #[test]
    fn test_decimal_formatting() {
        assert_eq!(decimal(1.8), "1.80");
        assert_eq!(decimal(2.349), "2.35");
        assert_eq!(dollars(4.5), "$4.50");
    }

    #[test]
    fn test_optional_formats_or_placeholder() {
        assert_eq!(optional(Some(1.8), decimal), "1.80");
        assert_eq!(optional(None, dollars), "n/a");
    }

    #[test]
    fn test_dollars_grouped() {
        assert_eq!(dollars_grouped(0.5), "$0.50");
        assert_eq!(dollars_grouped(999.0), "$999.00");
        assert_eq!(dollars_grouped(1250.5), "$1,250.50");
        assert_eq!(dollars_grouped(1234567.891), "$1,234,567.89");
        assert_eq!(dollars_grouped(-1500.0), "$-1,500.00");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("recommended_product_name"), "Recommended Product Name");
        assert_eq!(title_case("price"), "Price");
        assert_eq!(title_case("purchased_product_IDS"), "Purchased Product Ids");
    }
}
