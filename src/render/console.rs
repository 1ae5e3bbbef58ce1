//! Console table rendering.

use std::fmt::Write;

use colored::{Color, Colorize};
use strum::IntoEnumIterator;

use super::map_link;
use crate::lookup::{Field, LookupResult};

const TITLE_BANNER: [&str; 3] = [
    "╔════════════════════════════════════╗",
    "║    🌟 IP INFORMATION REPORT 🌟     ║",
    "╚════════════════════════════════════╝",
];

const CATEGORY_HEADER: &str = "CATEGORY";
const INFORMATION_HEADER: &str = "INFORMATION";

/// Color of a field's value in the table.
fn value_color(field: Field) -> Color {
    match field {
        Field::City | Field::Region => Color::Green,
        Field::Country => Color::Blue,
        Field::Location => Color::Magenta,
        Field::Org => Color::Cyan,
        Field::Ip | Field::Hostname | Field::Postal | Field::Timezone => Color::White,
    }
}

fn separator(label_width: usize, value_width: usize) -> String {
    format!(
        "╬{}╬{}╬",
        "═".repeat(label_width + 2),
        "═".repeat(value_width + 2)
    )
}

/// Renders `result` as a bordered table with a title banner.
///
/// One row per field, in `Field` order, with `N/A` for missing values. When the
/// location has exactly two components, a map link line follows the table.
/// Column widths are computed from the uncolored text so borders line up.
pub fn render_console(result: &LookupResult) -> String {
    let label_width = Field::iter()
        .map(|f| f.label().chars().count())
        .chain(std::iter::once(CATEGORY_HEADER.len()))
        .max()
        .unwrap_or(0);
    let value_width = Field::iter()
        .map(|f| result.display_value(f).chars().count())
        .chain(std::iter::once(INFORMATION_HEADER.len()))
        .max()
        .unwrap_or(0);
    let rule = separator(label_width, value_width);

    let mut out = String::new();
    out.push('\n');
    for line in TITLE_BANNER {
        let _ = writeln!(out, "{}", line.magenta());
    }

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "║ {} ║ {} ║",
        format!("{:<label_width$}", CATEGORY_HEADER).cyan(),
        format!("{:<value_width$}", INFORMATION_HEADER).cyan(),
    );
    let _ = writeln!(out, "{}", rule);

    for field in Field::iter() {
        let _ = writeln!(
            out,
            "║ {} ║ {} ║",
            format!("{:<label_width$}", field.label()).yellow(),
            format!("{:<value_width$}", result.display_value(field)).color(value_color(field)),
        );
    }
    let _ = writeln!(out, "{}", rule);

    if let Some(link) = map_link(result) {
        let _ = writeln!(
            out,
            "\n{} {}",
            "🔗 Google Maps:".bright_green(),
            link.bright_green().bold()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_for<'a>(table: &'a str, field: Field) -> &'a str {
        table
            .lines()
            .find(|line| line.contains(field.label()))
            .unwrap_or_else(|| panic!("No row for {:?}", field))
    }

    fn sample() -> LookupResult {
        LookupResult {
            ip: Some("8.8.8.8".to_string()),
            hostname: Some("dns.google".to_string()),
            city: Some("Mountain View".to_string()),
            region: Some("California".to_string()),
            country: Some("US".to_string()),
            loc: Some("37.4056,-122.0775".to_string()),
            org: Some("AS15169 Google LLC".to_string()),
            postal: Some("94043".to_string()),
            timezone: Some("America/Los_Angeles".to_string()),
        }
    }

    #[test]
    fn test_all_fields_present() {
        let result = sample();
        let table = render_console(&result);
        assert!(table.contains("IP INFORMATION REPORT"));
        for field in Field::iter() {
            let row = row_for(&table, field);
            assert!(row.contains(result.get(field).unwrap()));
            assert!(!row.contains("N/A"));
        }
    }

    /// `sample()` with `field` left out, as when the service omits the key.
    fn sample_without(field: Field) -> LookupResult {
        let mut result = sample();
        let slot = match field {
            Field::Ip => &mut result.ip,
            Field::Hostname => &mut result.hostname,
            Field::City => &mut result.city,
            Field::Region => &mut result.region,
            Field::Country => &mut result.country,
            Field::Location => &mut result.loc,
            Field::Org => &mut result.org,
            Field::Postal => &mut result.postal,
            Field::Timezone => &mut result.timezone,
        };
        *slot = None;
        result
    }

    #[test]
    fn test_missing_field_shows_placeholder_only_there() {
        for missing in Field::iter() {
            let result = sample_without(missing);
            let table = render_console(&result);
            assert_eq!(
                table.matches("N/A").count(),
                1,
                "Exactly one placeholder with {:?} missing",
                missing
            );
            for field in Field::iter() {
                let row = row_for(&table, field);
                if field == missing {
                    assert!(row.contains("N/A"), "{:?} row: {}", field, row);
                } else {
                    assert!(!row.contains("N/A"), "{:?} row: {}", field, row);
                    assert!(row.contains(result.get(field).unwrap()));
                }
            }
        }
    }

    #[test]
    fn test_map_link_line() {
        let result = LookupResult {
            loc: Some("12.34,56.78".to_string()),
            ..Default::default()
        };
        let table = render_console(&result);
        assert!(table.contains("Google Maps:"));
        assert!(table.contains("https://www.google.com/maps?q=12.34,56.78"));
    }

    #[test]
    fn test_no_map_link_without_valid_loc() {
        let table = render_console(&LookupResult {
            loc: Some("not-a-pair".to_string()),
            ..Default::default()
        });
        assert!(!table.contains("google.com/maps"));
        assert!(row_for(&table, Field::Location).contains("not-a-pair"));
    }

    #[test]
    fn test_rows_have_equal_width() {
        colored::control::set_override(false);
        let table = render_console(&sample());
        let widths: Vec<usize> = table
            .lines()
            .filter(|l| l.starts_with('║') || l.starts_with('╬'))
            .filter(|l| !l.contains("IP INFORMATION REPORT"))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.len() >= 13);
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
