//! Fixed-width text tables for `--format table`.

const GAP: &str = "  ";
const MIN_WIDTH: usize = 6;
const ELLIPSIS: char = '…';

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

struct Column<'a> {
    header: &'a str,
    width: usize,
}

impl Column<'_> {
    /// Narrowest width the column may be squeezed to.
    fn floor(&self) -> usize {
        self.header.chars().count().max(MIN_WIDTH)
    }
}

/// Header, dashed divider, then one line per row. Missing cells print `-`.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut columns: Vec<Column<'_>> = headers
        .iter()
        .copied()
        .enumerate()
        .map(|(index, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            let mut column = Column { header, width: 0 };
            column.width = widest_cell.max(column.floor());
            column
        })
        .collect();

    if let Some(limit) = options.max_width {
        shrink_to(&mut columns, limit);
    }

    let header_line = columns
        .iter()
        .map(|column| render_cell(column.header, column.width, false))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let value = row.get(index).map_or("-", String::as_str);
                render_cell(value, column.width, options.color)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column until the line fits `limit` or every column sits
/// at its floor.
fn shrink_to(columns: &mut [Column<'_>], limit: usize) {
    let gaps = columns.len().saturating_sub(1) * GAP.len();
    loop {
        let total = columns.iter().map(|column| column.width).sum::<usize>() + gaps;
        let overshoot = total.saturating_sub(limit);
        if overshoot == 0 {
            return;
        }

        let Some(widest) = (0..columns.len())
            .filter(|&index| columns[index].width > columns[index].floor())
            .max_by_key(|&index| columns[index].width)
        else {
            return;
        };
        let runner_up = columns
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != widest)
            .map(|(_, column)| column.width)
            .max()
            .unwrap_or(0);

        let column = &mut columns[widest];
        let target = column
            .floor()
            .max(runner_up)
            .max(column.width.saturating_sub(overshoot));
        column.width = if target < column.width {
            target
        } else {
            column.width - 1
        };
    }
}

/// Clip to `width`, pad with spaces, and color the visible text only.
fn render_cell(value: &str, width: usize, color: bool) -> String {
    let text = clip(value, width);
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    let right = is_numeric(&text);
    let shown = match tint(&text).filter(|_| color) {
        Some(code) => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
        None => text,
    };
    if right {
        format!("{fill}{shown}")
    } else {
        format!("{shown}{fill}")
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Money and percentages (`$1.2M`, `+$420K`, `-4.2%`) right-align like plain
/// numbers.
fn is_numeric(value: &str) -> bool {
    let body = value.trim().trim_start_matches(['+', '-']);
    let body = body.strip_prefix('$').unwrap_or(body);
    let body = body.strip_suffix(['%', 'K', 'M']).unwrap_or(body);
    body.starts_with(|ch: char| ch.is_ascii_digit())
        && body.chars().all(|ch| ch.is_ascii_digit() || ch == '.' || ch == ',')
}

/// ANSI color code for a cell naming a tone or status word.
fn tint(value: &str) -> Option<&'static str> {
    let word = value.to_ascii_lowercase().replace('_', " ");
    let code = match word.as_str() {
        "success" | "building" | "approved" | "complete" | "done" => "32",
        "warning" | "pending" | "permitting" | "in progress" => "33",
        "danger" | "rejected" | "on hold" | "over" => "31",
        "accent" | "info" | "planning" => "36",
        _ => return None,
    };
    Some(code)
}
