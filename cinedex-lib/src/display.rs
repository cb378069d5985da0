//! Display helpers for rendering movie records as a fixed-width text table.
//!
//! Column widths are measured in terminal cells, not bytes or chars: East
//! Asian wide, fullwidth, and ambiguous characters take two cells.

use cinedex_catalog::MovieRecord;
use icu_properties::CodePointMapData;
use icu_properties::props::EastAsianWidth;

/// Table columns as (header, width in cells).
pub const COLUMNS: [(&str, usize); 5] = [
    ("Title", 20),
    ("Director", 24),
    ("Genre", 12),
    ("Year", 10),
    ("Rating", 6),
];

/// Sum of all column widths; also the length of the separator rule.
pub const TABLE_WIDTH: usize = 72;

/// Line printed in place of a table when there are no records.
pub const NO_DATA: &str = "No data";

// ---------------------------------------------------------------------------
// Width and padding
// ---------------------------------------------------------------------------

/// Number of terminal cells `text` occupies.
///
/// Characters whose East_Asian_Width property is Fullwidth, Wide, or
/// Ambiguous count as 2. Everything else, including combining marks that are
/// not Ambiguous and control characters, counts as 1.
pub fn display_width(text: &str) -> usize {
    let eaw = CodePointMapData::<EastAsianWidth>::new();
    text.chars()
        .map(|c| match eaw.get(c) {
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Ambiguous => 2,
            _ => 1,
        })
        .sum()
}

/// Right-pad `text` with spaces to `total_width` cells. Never truncates.
pub fn pad(text: &str, total_width: usize) -> String {
    let padding = total_width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + padding);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', padding));
    out
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Text form of a rating: always at least one decimal place (`9` -> `9.0`).
pub fn format_rating(rating: f64) -> String {
    format!("{:?}", rating)
}

/// Render records as table lines: header, dash rule, one row per record.
///
/// An empty slice renders as the single line [`NO_DATA`].
pub fn render_table(records: &[MovieRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_DATA.to_string()];
    }

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(
        COLUMNS
            .iter()
            .map(|(header, width)| pad(header, *width))
            .collect(),
    );
    lines.push("-".repeat(TABLE_WIDTH));

    for movie in records {
        let cells = [
            movie.title.clone(),
            movie.director.clone(),
            movie.genre.clone(),
            movie.year.to_string(),
            format_rating(movie.rating),
        ];
        lines.push(
            cells
                .iter()
                .zip(COLUMNS.iter())
                .map(|(cell, (_, width))| pad(cell, *width))
                .collect(),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, director: &str, rating: f64) -> MovieRecord {
        MovieRecord {
            id: 1,
            title: title.to_string(),
            director: director.to_string(),
            genre: "Drama".to_string(),
            year: 2000,
            rating,
        }
    }

    #[test]
    fn test_display_width_ascii_and_cjk() {
        assert_eq!(display_width("A"), 1);
        assert_eq!(display_width("中"), 2);
        assert_eq!(display_width("A中B"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_fullwidth_and_ambiguous() {
        // U+FF21 FULLWIDTH LATIN CAPITAL LETTER A
        assert_eq!(display_width("Ａ"), 2);
        // U+00B1 PLUS-MINUS SIGN is East Asian Ambiguous
        assert_eq!(display_width("±"), 2);
        // Hiragana is Wide
        assert_eq!(display_width("かな"), 4);
    }

    #[test]
    fn test_display_width_ambiguous_letters() {
        // é is Ambiguous, so "Amélie" is 5 narrow cells plus 2
        assert_eq!(display_width("Amélie"), 7);
        assert_eq!(display_width("Léon"), 5);
        // U+0391 GREEK CAPITAL LETTER ALPHA, U+0430 CYRILLIC SMALL LETTER A
        assert_eq!(display_width("\u{0391}"), 2);
        assert_eq!(display_width("\u{0430}"), 2);
        // U+0301 COMBINING ACUTE ACCENT is Ambiguous
        assert_eq!(display_width("e\u{0301}"), 3);
    }

    #[test]
    fn test_display_width_neutral_symbols() {
        // U+2150 VULGAR FRACTION ONE SEVENTH and U+219A LEFTWARDS ARROW WITH STROKE are Neutral
        assert_eq!(display_width("\u{2150}"), 1);
        assert_eq!(display_width("\u{219A}"), 1);
        // U+FF71 HALFWIDTH KATAKANA LETTER A
        assert_eq!(display_width("\u{FF71}"), 1);
    }

    #[test]
    fn test_pad_ambiguous() {
        assert_eq!(pad("Léon", 8), "Léon   ");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("中", 4), "中  ");
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abcdef", 4), "abcdef");
        assert_eq!(pad("中文", 4), "中文");
        assert_eq!(pad("中文字", 4), "中文字");
    }

    #[test]
    fn test_column_widths_sum() {
        let total: usize = COLUMNS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, TABLE_WIDTH);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_rating(8.8), "8.8");
        assert_eq!(format_rating(10.0), "10.0");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), vec![NO_DATA.to_string()]);
    }

    #[test]
    fn test_render_rows() {
        let lines = render_table(&[movie("Heat", "Mann", 8.3), movie("花樣年華", "王家衛", 9.0)]);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Title               Director"));
        assert_eq!(lines[1], "-".repeat(72));
        for line in &lines {
            assert_eq!(display_width(line), TABLE_WIDTH);
        }
        assert!(lines[2].starts_with("Heat                Mann"));
        assert!(lines[3].starts_with("花樣年華            王家衛"));
        assert!(lines[3].ends_with("9.0   "));
    }

    #[test]
    fn test_render_overlong_cell_shifts_row() {
        let long_title = "A".repeat(25);
        let lines = render_table(&[movie(&long_title, "Mann", 8.3)]);
        assert!(lines[1].len() < lines[2].len());
        assert!(lines[2].starts_with(&format!("{}Mann", long_title)));
    }
}
