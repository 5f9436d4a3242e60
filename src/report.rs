// src/report.rs

use crate::{
    config::InspectorConfig,
    table::{Record, Row, Table, Value},
};
use prettytable::{format, Cell, Row as TextRow, Table as TextTable};

const ELLIPSIS: &str = "...";

/// Cut `text` to `width` chars, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width).collect();
        cut.push_str(ELLIPSIS);
        cut
    }
}

/// Plain-text renderer for a bounded number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    pub max_rows: usize,
    pub max_field_width: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            max_rows: 5,
            max_field_width: 100,
        }
    }
}

impl Reporter {
    pub fn new(max_rows: usize, max_field_width: usize) -> Self {
        Self {
            max_rows,
            max_field_width,
        }
    }

    pub fn from_config(cfg: &InspectorConfig) -> Self {
        Self::new(cfg.default_row_limit, cfg.max_field_width)
    }

    pub fn with_max_rows(self, max_rows: usize) -> Self {
        Self { max_rows, ..self }
    }

    fn cell(&self, v: Option<Value>) -> Cell {
        match v {
            // absent column
            None => Cell::new(""),
            Some(v @ (Value::Int(_) | Value::Float(_))) => Cell::new(&v.to_string()).style_spec("r"),
            Some(v) => Cell::new(&truncate(
                &v.to_string().replace(['\n', '\r'], " "),
                self.max_field_width,
            )),
        }
    }

    /// Boxed table of the first `max_rows` rows, each labelled with its position,
    /// followed by a `[showing k of n rows]` note when rows were left out.
    /// Column widths follow terminal display width, so full-width kana line up.
    pub fn render<R: Record>(&self, rows: &[R], columns: &[&str]) -> String {
        if rows.is_empty() {
            return "(no rows)\n".to_string();
        }
        let shown = &rows[..rows.len().min(self.max_rows)];

        let mut table = TextTable::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let mut titles = vec![Cell::new("")];
        titles.extend(columns.iter().map(|c| Cell::new(c).style_spec("b")));
        table.set_titles(TextRow::new(titles));

        for (pos, r) in shown.iter().enumerate() {
            let mut cells = vec![Cell::new(&pos.to_string()).style_spec("r")];
            cells.extend(columns.iter().map(|c| self.cell(r.get(c))));
            table.add_row(TextRow::new(cells));
        }

        let mut out = table.to_string();
        if shown.len() < rows.len() {
            out.push_str(&format!("[showing {} of {} rows]\n", shown.len(), rows.len()));
        }
        out
    }

    /// Render `table`; an empty `columns` selects every column.
    pub fn render_table(&self, table: &Table, columns: &[&str]) -> String {
        let all = table.column_names();
        let selected: Vec<&str> = if columns.is_empty() {
            all.iter().map(String::as_str).collect()
        } else {
            columns.to_vec()
        };
        let rows: Vec<Row<'_>> = table.rows().collect();
        self.render(&rows, &selected)
    }

    pub fn print_table(&self, table: &Table, columns: &[&str]) {
        print!("{}", self.render_table(table, columns));
    }
}
