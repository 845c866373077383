use crate::error::{AppError, DisplayError};
use comfy_table::{Attribute, Cell, Color, Table, presets};
use crossterm::terminal;
use serde::Serialize;

/// One spelled-out amount, ready for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordsRow {
    pub amount: String,
    pub currency: String,
    pub words: String,
}

impl WordsRow {
    pub fn new(amount: &str, currency: &str, words: &str) -> Self {
        Self {
            amount: amount.to_string(),
            currency: currency.to_string(),
            words: words.to_string(),
        }
    }
}

/// Formatter for table output
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Terminal width clamped to 40..=200, 80 when there is no terminal
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render amounts and their words as a three-column table.
    pub fn render_words(&self, rows: &[WordsRow]) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let headers = ["Amount", "Currency", "Words"];
        if self.use_colors {
            table.set_header(headers.iter().map(|h| {
                Cell::new(h)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }));
        } else {
            table.set_header(headers);
        }

        for row in rows {
            let amount = if self.use_colors {
                Cell::new(&row.amount).fg(Color::Cyan)
            } else {
                Cell::new(&row.amount)
            };
            table.add_row(vec![amount, Cell::new(&row.currency), Cell::new(&row.words)]);
        }

        table.to_string()
    }

    fn configure_table_width(&self, table: &mut Table) {
        // Leave room for borders and padding
        let width = self.max_width.map_or(80, |w| if w > 20 { w - 6 } else { 40 });
        table.set_width(width as u16);
    }
}

/// One line of words per amount.
pub fn render_plain(rows: &[WordsRow]) -> String {
    rows.iter()
        .map(|row| row.words.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(rows: &[WordsRow]) -> Result<String, AppError> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Display(DisplayError::Json(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<WordsRow> {
        vec![
            WordsRow::new("1.00", "RUB", "один рубль 00 копеек"),
            WordsRow::new("21.50", "RUB", "двадцать один рубль пятьдесят копеек"),
        ]
    }

    #[test]
    fn test_render_words_contains_rows() {
        let output = TableDisplay::new()
            .with_colors(false)
            .with_max_width(120)
            .render_words(&rows());
        assert!(output.contains("Amount"));
        assert!(output.contains("21.50"));
        assert!(output.contains("пятьдесят"));
    }

    #[test]
    fn test_render_plain_one_line_per_row() {
        let output = render_plain(&rows());
        assert_eq!(output.lines().count(), 2);
        assert_eq!(output.lines().next(), Some("один рубль 00 копеек"));
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let output = render_json(&rows()).expect("rows serialize");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed[1]["amount"], "21.50");
        assert_eq!(parsed[0]["words"], "один рубль 00 копеек");
    }
}
