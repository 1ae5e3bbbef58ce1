//! HTML report rendering.
//!
//! Produces a self-contained static document with inline styles. Field values
//! come from a remote service and are escaped before being embedded.

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use strum::IntoEnumIterator;

use super::map_link;
use crate::config::REPORT_GENERATED_FORMAT;
use crate::lookup::{Field, LookupResult};

const STYLESHEET: &str = "\
            body { font-family: Arial, sans-serif; margin: 20px; }
            h1 { color: #4b2e83; }
            table { border-collapse: collapse; width: 100%; margin-top: 20px; }
            th { background-color: #4b2e83; color: white; padding: 10px; text-align: left; }
            td { padding: 8px; border-bottom: 1px solid #ddd; }
            .map-link { margin-top: 20px; }";

/// Escapes the characters that are significant in HTML text and attributes.
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Renders `result` as an HTML report.
///
/// # Arguments
///
/// * `result` - The lookup to render
/// * `generated_at` - Timestamp shown on the "Generated on" line
pub fn render_html<Tz>(result: &LookupResult, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    out.push_str("    <title>IP Information Report</title>\n");
    let _ = writeln!(out, "    <style>\n{}\n    </style>", STYLESHEET);
    out.push_str("</head>\n<body>\n");
    out.push_str("    <h1>🌐 IP Information Report</h1>\n");
    let _ = writeln!(
        out,
        "    <p>Generated on: {}</p>",
        generated_at.format(REPORT_GENERATED_FORMAT)
    );

    out.push_str("    <table>\n");
    out.push_str("        <tr><th>Category</th><th>Information</th></tr>\n");
    for field in Field::iter() {
        let _ = writeln!(
            out,
            "        <tr><td>{}</td><td>{}</td></tr>",
            field.label(),
            escape_html(result.display_value(field))
        );
    }
    out.push_str("    </table>\n");

    if let Some(link) = map_link(result) {
        let _ = writeln!(
            out,
            "    <div class=\"map-link\">\n        <p><a href=\"{}\" target=\"_blank\">📍 View on Google Maps</a></p>\n    </div>",
            escape_html(&link)
        );
    }

    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use scraper::{Html, Selector};

    fn fixed_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .map(|dt| dt.and_utc())
            .expect("Valid test timestamp")
    }

    /// Returns the (label, value) pairs of the report table.
    fn table_rows(html: &str) -> Vec<(String, String)> {
        let document = Html::parse_document(html);
        let row_selector = Selector::parse("tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();
        document
            .select(&row_selector)
            .filter_map(|row| {
                let cells: Vec<String> = row
                    .select(&cell_selector)
                    .map(|c| c.text().collect::<String>())
                    .collect();
                match cells.as_slice() {
                    [label, value] => Some((label.clone(), value.clone())),
                    _ => None,
                }
            })
            .collect()
    }

    #[test]
    fn test_generated_on_line() {
        let html = render_html(&LookupResult::default(), &fixed_time());
        assert!(html.contains("Generated on: 2024-03-09 14:05:07"));
    }

    #[test]
    fn test_missing_field_placeholder() {
        let result = LookupResult {
            ip: Some("1.1.1.1".to_string()),
            city: Some("Brisbane".to_string()),
            ..Default::default()
        };
        let rows = table_rows(&render_html(&result, &fixed_time()));
        assert_eq!(rows.len(), 9);
        for ((label, value), field) in rows.iter().zip(Field::iter()) {
            assert_eq!(label, field.label());
            match field {
                Field::Ip => assert_eq!(value, "1.1.1.1"),
                Field::City => assert_eq!(value, "Brisbane"),
                _ => assert_eq!(value, "N/A", "{:?}", field),
            }
        }
    }

    #[test]
    fn test_map_link() {
        let result = LookupResult {
            loc: Some("12.34,56.78".to_string()),
            ..Default::default()
        };
        let html = render_html(&result, &fixed_time());
        let document = Html::parse_document(&html);
        let link = document
            .select(&Selector::parse(".map-link a").unwrap())
            .next()
            .expect("Map link should be present");
        assert_eq!(
            link.value().attr("href"),
            Some("https://www.google.com/maps?q=12.34,56.78")
        );
        assert_eq!(link.value().attr("target"), Some("_blank"));
    }

    #[test]
    fn test_no_map_link_without_loc() {
        let html = render_html(&LookupResult::default(), &fixed_time());
        assert!(!html.contains("map-link\""));
        assert!(!html.contains("google.com/maps"));
    }

    #[test]
    fn test_values_are_escaped() {
        let result = LookupResult {
            org: Some("<script>alert('x')</script> & Co".to_string()),
            ..Default::default()
        };
        let html = render_html(&result, &fixed_time());
        assert!(!html.contains("<script>"));
        let rows = table_rows(&html);
        let (_, org) = rows
            .iter()
            .find(|(label, _)| label == "ISP")
            .expect("ISP row");
        assert_eq!(org, "<script>alert('x')</script> & Co");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
