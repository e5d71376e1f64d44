//! Progress bar style listing

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ui::{fill_widths, BarPreset, BarStyle};

/// Serializable preset for JSON output
#[derive(Serialize)]
struct SerializableStyle {
    name: BarStyle,
    #[serde(flatten)]
    preset: BarPreset,
}

/// Sample bar at 60%, drawn without color
fn preview(preset: &BarPreset) -> String {
    let (fill, empty) = fill_widths(preset.width, 60);
    format!(
        "{}{}{}{}",
        preset.left_border,
        preset.bar_char.repeat(fill),
        preset.empty_char.repeat(empty),
        preset.right_border
    )
}

/// Output all style presets in the specified format
pub fn output_styles(format: OutputFormat) -> Result<()> {
    let styles = BarStyle::all();
    match format {
        OutputFormat::Table => output_table(styles),
        OutputFormat::Csv => output_csv(styles),
        OutputFormat::Json => println!("{}", render_json(styles)?),
    }
    Ok(())
}

fn output_table(styles: &[BarStyle]) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Style", "Width", "Preview"]);

    for style in styles {
        let preset = style.preset();
        table.add_row(vec![
            style.name().to_string(),
            preset.width.to_string(),
            preview(&preset),
        ]);
    }

    println!("{}", table);
}

fn output_csv(styles: &[BarStyle]) {
    println!("style,width,bar_char,empty_char,left_border,right_border");
    for style in styles {
        let preset = style.preset();
        println!(
            "{},{},{},{},{},{}",
            style.name(),
            preset.width,
            escape_csv(preset.bar_char),
            escape_csv(preset.empty_char),
            escape_csv(preset.left_border),
            escape_csv(preset.right_border)
        );
    }
}

fn render_json(styles: &[BarStyle]) -> Result<String> {
    let rows: Vec<SerializableStyle> = styles
        .iter()
        .map(|style| SerializableStyle {
            name: *style,
            preset: style.preset(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
