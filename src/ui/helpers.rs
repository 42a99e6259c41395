//! Formatting and highlight helpers for view model computation.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a short human-readable date, e.g. `"Jan 5, 2024"`.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use contactdesk::ui::format_date;
///
/// let date = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
/// assert_eq!(format_date(date), "Jan 1, 2024");
/// ```
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Computes byte ranges of case-insensitive, non-overlapping occurrences of
/// `term` in `text`, for search-match highlighting.
///
/// Ranges are `(start, end)` with exclusive end, suitable for slicing `text`.
/// A whitespace-only term yields no ranges. Matching is per-character so
/// multi-byte text cannot produce out-of-bounds ranges.
///
/// # Examples
///
/// ```
/// use contactdesk::ui::highlight_ranges;
///
/// assert_eq!(highlight_ranges("Anna Anderson", "an"), vec![(0, 2), (5, 7)]);
/// assert_eq!(highlight_ranges("Anna", ""), vec![]);
/// ```
#[must_use]
pub fn highlight_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i + needle.len() <= chars.len() {
        let window_matches = chars[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|((_, c), n)| c.to_lowercase().eq(n.to_lowercase()));

        if window_matches {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map_or(text.len(), |(offset, _)| *offset);
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_case_insensitive() {
        assert_eq!(highlight_ranges("Tech Corp", "TECH"), vec![(0, 4)]);
        assert_eq!(highlight_ranges("grace.miller@email.com", "Miller"), vec![(6, 12)]);
    }

    #[test]
    fn highlight_trims_the_term() {
        assert_eq!(highlight_ranges("Anna", "  an  "), vec![(0, 2)]);
        assert_eq!(highlight_ranges("Anna", "   "), vec![]);
    }

    #[test]
    fn highlight_finds_every_occurrence_without_overlap() {
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn highlight_ranges_slice_the_original_text() {
        let text = "Diana Davis";
        for (start, end) in highlight_ranges(text, "da") {
            assert!(text[start..end].eq_ignore_ascii_case("da"));
        }
    }

    #[test]
    fn format_date_is_short_style() {
        let date = chrono::DateTime::from_timestamp(1_735_603_200, 0).unwrap();
        assert_eq!(format_date(date), "Dec 31, 2024");
    }
}
