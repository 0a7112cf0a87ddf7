use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Screens render as one key/value table of their scalar fields (nested
/// objects flattened to dotted keys) followed by one titled table per list
/// of rows.
fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let mut scalars = Vec::new();
            let mut sections = Vec::new();
            collect_fields("", Value::Object(map), &mut scalars, &mut sections);

            let mut blocks = Vec::with_capacity(1 + sections.len());
            if !scalars.is_empty() {
                let headers = ["key", "value"];
                let rows = scalars
                    .into_iter()
                    .map(|(key, value)| vec![key, value])
                    .collect::<Vec<_>>();
                blocks.push(table::render_rows(&headers, &rows, options));
            }
            for (name, items) in sections {
                blocks.push(format!("[{name}]\n{}", render_array_table(&items, options)));
            }

            if blocks.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            Ok(blocks.join("\n\n"))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_rows(&headers, &rows, options))
        }
    }
}

fn collect_fields(
    prefix: &str,
    value: Value,
    scalars: &mut Vec<(String, String)>,
    sections: &mut Vec<(String, Vec<Value>)>,
) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                collect_fields(&join_key(prefix, &key), inner, scalars, sections);
            }
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            sections.push((prefix.to_string(), items));
        }
        other => scalars.push((prefix.to_string(), value_to_cell(&other))),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_rows(&headers, &rows, options);
    }

    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            let mut cells = Vec::new();
            flatten_row("", map, &mut cells);
            cells
        })
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for row in &flattened {
        for (key, _) in row {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| {
                    row.iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, cell)| cell.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_rows(&header_refs, &rows, options)
}

fn flatten_row(prefix: &str, map: &Map<String, Value>, cells: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let key = join_key(prefix, key);
        match value {
            Value::Object(inner) => flatten_row(&key, inner, cells),
            other => cells.push((key, value_to_cell(other))),
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Badge {
        label: &'static str,
        tone: &'static str,
    }

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        status: Badge,
    }

    #[derive(Serialize)]
    struct Screen {
        count_label: &'static str,
        rows: Vec<Row>,
        empty: Vec<Row>,
        note: Option<&'static str>,
    }

    fn screen() -> Screen {
        Screen {
            count_label: "2 projects",
            rows: vec![
                Row {
                    id: "bloemhof",
                    status: Badge {
                        label: "Building",
                        tone: "success",
                    },
                },
                Row {
                    id: "commercial-ti",
                    status: Badge {
                        label: "Permitting",
                        tone: "warning",
                    },
                },
            ],
            empty: Vec::new(),
            note: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&screen(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["count_label"], "2 projects");
        assert_eq!(parsed["rows"][1]["status"]["tone"], "warning");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&screen(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["rows"][0]["id"], "bloemhof");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_splits_scalars_from_row_sections() {
        let out = render_table(&screen(), PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("key"));
        assert!(out.contains("count_label"));
        assert!(out.contains("[rows]"));
        assert!(out.contains("status.label"));
        assert!(out.contains("Permitting"));
    }

    #[test]
    fn empty_lists_and_nulls_stay_in_the_key_table() {
        let out = render_table(&screen(), PLAIN).expect("table render should work");
        assert!(!out.contains("[empty]"));
        let empty_line = out
            .lines()
            .find(|line| line.starts_with("empty"))
            .expect("empty list rendered as a scalar");
        assert!(empty_line.contains("[]"));
        let note_line = out
            .lines()
            .find(|line| line.starts_with("note"))
            .expect("null rendered as a scalar");
        assert!(note_line.trim_end().ends_with('-'));
    }

    #[test]
    fn top_level_lists_render_one_table() {
        let out = render_table(&screen().rows, PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
