use crate::core::config::OutputFormat;
use crate::core::{ChangeDisplay, Field, FormFields, PLACEHOLDER};
use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use serde::Serialize;

/// Defines different styles for text elements.
pub enum StyleType {
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Input text of a field; an empty field shows the placeholder in grey.
fn field_cell(text: &str) -> Cell {
    if text.trim().is_empty() {
        Cell::new(PLACEHOLDER)
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(text).set_alignment(CellAlignment::Right)
    }
}

/// Change displays are green when the customer gets money back, red when
/// they still owe some.
fn change_cell(text: &str) -> Cell {
    let cell = Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right);
    if text == PLACEHOLDER {
        cell.fg(Color::DarkGrey)
    } else if text.starts_with('-') {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Green)
    }
}

fn mode_name(mixed_mode: bool) -> &'static str {
    if mixed_mode { "on" } else { "off" }
}

#[derive(Serialize)]
struct FormView<'a> {
    fields: &'a FormFields,
    mixed_payment: bool,
    change: &'a ChangeDisplay,
}

/// Renders the whole form: the four inputs, the mode and both change displays.
pub fn render_form(
    fields: &FormFields,
    mixed_mode: bool,
    change: &ChangeDisplay,
    format: OutputFormat,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => {
            let mut table = new_styled_table();
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            for field in Field::ALL {
                table.add_row(vec![Cell::new(field.name()), field_cell(fields.get(field))]);
            }
            table.add_row(vec![
                Cell::new("mixed"),
                Cell::new(mode_name(mixed_mode)).set_alignment(CellAlignment::Right),
            ]);
            table.add_row(vec![
                Cell::new("change-eur").add_attribute(Attribute::Bold),
                change_cell(&change.eur),
            ]);
            table.add_row(vec![
                Cell::new("change-bgn").add_attribute(Attribute::Bold),
                change_cell(&change.bgn),
            ]);
            table.to_string()
        }
        OutputFormat::Plain => {
            let mut lines: Vec<String> = Field::ALL
                .iter()
                .map(|field| format!("{}: {}", field.name(), fields.get(*field)))
                .collect();
            lines.push(format!("mixed: {}", mode_name(mixed_mode)));
            lines.push(format!("change-eur: {}", change.eur));
            lines.push(format!("change-bgn: {}", change.bgn));
            lines.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(&FormView {
            fields,
            mixed_payment: mixed_mode,
            change,
        })?,
    };
    Ok(rendered)
}
