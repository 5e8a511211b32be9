//! Terminal output helpers: plain text for humans, JSON for machines.

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Print `value` as pretty JSON, or run `render` for text output
pub fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => {
            let text = render(value);
            if !text.is_empty() {
                println!("{}", text.trim_end());
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ErrorMsg<'a> {
    level: &'a str,
    message: String,
}

/// Report a fatal error on stderr
pub fn error(format: OutputFormat, err: &anyhow::Error) {
    match format {
        OutputFormat::Json => {
            let msg = ErrorMsg {
                level: "error",
                message: format!("{err:#}"),
            };
            let json = serde_json::to_string(&msg)
                .unwrap_or_else(|_| format!("{{\"level\":\"error\",\"message\":\"{err}\"}}"));
            eprintln!("{json}");
        }
        OutputFormat::Text => eprintln!("error: {err:#}"),
    }
}

/// Left-align `cells` into columns separated by two spaces
pub fn table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(col, cell)| format!("{cell:<width$}", width = widths[col]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
