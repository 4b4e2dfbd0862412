use chrono::{DateTime, Utc};

use crate::dates::LabeledDate;
use crate::format::format_date_diff;

const TITLE: &str = "TIC";
const HEADING_COLOR: &str = "red";

/// One rendered line of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub label: String,
    pub elapsed: String,
}

/// Elapsed time since each date as of `now`, read in the date's own timezone.
pub fn entries(dates: &[LabeledDate], now: DateTime<Utc>) -> Vec<PageEntry> {
    dates
        .iter()
        .map(|d| PageEntry {
            label: d.label.clone(),
            elapsed: format_date_diff(&d.date, &now),
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn build_entry(entry: &PageEntry) -> String {
    format!(
        "<h2>{}</h2>\n<h1>{}</h1>\n",
        escape_html(&entry.label),
        escape_html(&entry.elapsed)
    )
}

/// Full HTML document listing every entry in order.
pub fn render(entries: &[PageEntry]) -> String {
    let body: String = entries.iter().map(build_entry).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>
h1 {{
    color: {HEADING_COLOR};
}}
</style>
</head>
<body>
<center>
{body}</center>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Toronto;

    fn entry(label: &str, elapsed: &str) -> PageEntry {
        PageEntry {
            label: label.to_string(),
            elapsed: elapsed.to_string(),
        }
    }

    #[test]
    fn entries_are_computed_in_the_dates_timezone() {
        let dates = vec![
            LabeledDate::midnight("first", 2016, 4, 7, Toronto).unwrap(),
            LabeledDate::midnight("second", 2016, 4, 27, Toronto).unwrap(),
        ];
        // 2020-04-07 00:30 in Toronto, but already 04:30 UTC
        let now = Utc.with_ymd_and_hms(2020, 4, 7, 4, 30, 0).unwrap();

        assert_eq!(
            entries(&dates, now),
            vec![entry("first", "4y"), entry("second", "3y 11m 10d")]
        );
    }

    #[test]
    fn empty_elapsed_on_the_day_itself() {
        let dates = vec![LabeledDate::midnight("today", 2016, 4, 7, Toronto).unwrap()];
        let now = Utc.with_ymd_and_hms(2016, 4, 7, 18, 0, 0).unwrap();
        assert_eq!(entries(&dates, now), vec![entry("today", "")]);
    }

    #[test]
    fn renders_entries_in_order() {
        let html = render(&[entry("Beto's TIC", "4y"), entry("In job", "1m 1d")]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>TIC</title>"));
        assert!(html.contains("color: red;"));

        let first = html.find("<h2>Beto&#39;s TIC</h2>\n<h1>4y</h1>").unwrap();
        let second = html.find("<h2>In job</h2>\n<h1>1m 1d</h1>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn escapes_labels() {
        let html = render(&[entry("<script>&", "")]);
        assert!(html.contains("<h2>&lt;script&gt;&amp;</h2>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_page_still_renders() {
        let html = render(&[]);
        assert!(html.contains("<center>\n</center>"));
    }
}
