//! Terminal rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use typescore_detect::{PatternCatalog, PatternKind};
use typescore_model::TypeLabel;
use typescore_score::{ColumnProfile, ScoreReport, TableProfile};

/// How tables are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// Rounded UTF-8 borders with colors when writing to a terminal.
    #[default]
    Rich,
    /// Plain markdown pipes, left aligned and never colored.
    Markdown,
}

/// One classified cell, as printed by `detect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub cell: String,
    pub label: TypeLabel,
}

/// One-line summary of a score.
pub fn score_line(report: &ScoreReport) -> String {
    format!(
        "score {} ({} of {} cells typed)",
        report.score, report.known, report.total
    )
}

pub fn detections_table(detections: &[Detection], style: TableStyle) -> Table {
    let mut table = new_table(style);
    table.set_header(vec![header_cell("Cell"), header_cell("Label")]);
    for detection in detections {
        table.add_row(vec![
            Cell::new(format!("{:?}", detection.cell)),
            label_cell(detection.label),
        ]);
    }
    table
}

pub fn profile_table(profile: &TableProfile, style: TableStyle) -> Table {
    let mut table = new_table(style);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Cells"),
        header_cell("Known"),
        header_cell("Dominant"),
        header_cell("Labels"),
    ]);
    for column in &profile.columns {
        table.add_row(vec![
            Cell::new(column.index),
            Cell::new(column.total),
            ratio_cell(column.known_ratio()),
            column
                .dominant()
                .map_or_else(|| dim_cell("-"), label_cell),
            Cell::new(label_counts(column)),
        ]);
    }
    if style == TableStyle::Rich {
        for index in 0..3 {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    table
}

pub fn patterns_table(catalog: &PatternCatalog, style: TableStyle) -> Table {
    let mut table = new_table(style);
    table.set_header(vec![header_cell("Kind"), header_cell("Count"), header_cell("Patterns")]);
    for (kind, name) in [(PatternKind::Fixed, "fixed"), (PatternKind::Date, "date")] {
        let names: Vec<&str> = catalog.names_of(kind).collect();
        table.add_row(vec![
            Cell::new(name),
            Cell::new(names.len()),
            Cell::new(summarize_names(&names)),
        ]);
    }
    if style == TableStyle::Rich {
        align_column(&mut table, 1, CellAlignment::Right);
    }
    table
}

fn summarize_names(names: &[&str]) -> String {
    match names {
        [] => "-".to_string(),
        [only] => (*only).to_string(),
        _ if names.iter().all(|name| name.starts_with("date_")) => {
            format!("{} .. {}", names[0], names[names.len() - 1])
        }
        _ => names.join(", "),
    }
}

fn label_counts(column: &ColumnProfile) -> String {
    column
        .counts
        .iter()
        .map(|(label, count)| format!("{label}={count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn new_table(style: TableStyle) -> Table {
    let mut table = Table::new();
    match style {
        TableStyle::Rich => {
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
        }
        TableStyle::Markdown => {
            table
                .load_preset(ASCII_MARKDOWN)
                .set_content_arrangement(ContentArrangement::Disabled)
                .force_no_tty();
        }
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: TypeLabel) -> Cell {
    if label.is_known() {
        Cell::new(label).fg(Color::Green)
    } else {
        Cell::new(label).fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn ratio_cell(ratio: f64) -> Cell {
    let color = if ratio >= 1.0 {
        Color::Green
    } else if ratio >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{:.1}%", ratio * 100.0)).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
