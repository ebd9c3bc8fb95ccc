//! Text and table rendering of roster state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::ManagerSummary;
use roster_model::Student;

/// One `id | name | age | department` line per student.
pub fn plain_roster<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    students
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn roster_table<'a>(students: impl IntoIterator<Item = &'a Student>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Age"),
        header_cell("Department"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (position, student) in students.into_iter().enumerate() {
        table.add_row(vec![
            dim_cell(position + 1),
            Cell::new(&student.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&student.name),
            Cell::new(student.age),
            Cell::new(&student.department),
        ]);
    }
    table
}

pub fn plain_status(summary: &ManagerSummary, stored_documents: usize) -> String {
    format!(
        "Records: {}\nPending admissions: {}\nUndo depth: {}\nStored documents: {}",
        summary.records, summary.pending_admissions, summary.undo_depth, stored_documents
    )
}

pub fn status_table(summary: &ManagerSummary, stored_documents: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("View"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("Records", summary.records),
        ("Pending admissions", summary.pending_admissions),
        ("Undo depth", summary.undo_depth),
        ("Stored documents", stored_documents),
    ] {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
