//! Spinner theme listing

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::ui::SpinnerTheme;

/// Serializable theme for JSON output
#[derive(Serialize)]
struct SerializableTheme {
    name: SpinnerTheme,
    frame_count: usize,
    frames: &'static [&'static str],
}

impl From<&SpinnerTheme> for SerializableTheme {
    fn from(theme: &SpinnerTheme) -> Self {
        Self {
            name: *theme,
            frame_count: theme.frames().len(),
            frames: theme.frames(),
        }
    }
}

/// Output all registered themes in the specified format
pub fn output_themes(format: OutputFormat) -> Result<()> {
    let themes = SpinnerTheme::all();
    match format {
        OutputFormat::Table => output_table(themes),
        OutputFormat::Csv => output_csv(themes),
        OutputFormat::Json => println!("{}", render_json(themes)?),
    }
    Ok(())
}

fn output_table(themes: &[SpinnerTheme]) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Theme", "Frames", "Preview"]);

    for theme in themes {
        table.add_row(vec![
            theme.name().to_string(),
            theme.frames().len().to_string(),
            theme.frames().join(" "),
        ]);
    }

    println!("{}", table);
}

fn output_csv(themes: &[SpinnerTheme]) {
    println!("theme,frame_count,frames");
    for theme in themes {
        println!(
            "{},{},{}",
            theme.name(),
            theme.frames().len(),
            escape_csv(&theme.frames().join(" "))
        );
    }
}

fn render_json(themes: &[SpinnerTheme]) -> Result<String> {
    let rows: Vec<SerializableTheme> = themes.iter().map(SerializableTheme::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
