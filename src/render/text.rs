//! Plain/ANSI text rendering of a [`Page`].

use crate::utils::colors;
use crate::utils::formatting::{display_width, pad_center, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use crate::view::builder::{DayCell, EventRow, GridSize, MonthCard, MonthGrid, Page};
use crate::view::nav::NavControls;

/// Marker appended to day numbers that carry events.
pub const EVENT_MARK: &str = "*";

const CARDS_PER_ROW: usize = 3;
const CARD_GAP: &str = "    ";
const TITLE_WRAP: usize = 40;

#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub color: bool,
}

fn cell_width(size: GridSize) -> usize {
    match size {
        GridSize::Small => 3,
        GridSize::Big => 5,
    }
}

fn day_text(cell: &DayCell, width: usize, color: bool) -> String {
    let raw = if cell.has_events {
        format!("{}{EVENT_MARK}", cell.day)
    } else {
        format!("{} ", cell.day)
    };
    let padded = pad_left(&raw, width);
    if cell.holiday {
        colors::holiday(&padded, color)
    } else if cell.has_events {
        colors::has_event(&padded, color)
    } else {
        padded
    }
}

/// Grid lines: weekday header then one line per week.
pub fn grid_lines(grid: &MonthGrid, opts: TextOptions) -> Vec<String> {
    let w = cell_width(grid.size);
    let mut lines = Vec::new();

    let header: String = grid
        .weekdays
        .iter()
        .map(|label| pad_left(&format!("{label} "), w))
        .collect();
    lines.push(colors::dim(&header, opts.color));

    let layout = &grid.layout;
    let mut weeks: Vec<[Option<&DayCell>; 7]> = vec![[None; 7]; layout.rows() as usize];
    for cell in &grid.cells {
        if let (Some(row), Some(col)) = (layout.row_of(cell.day), layout.column_of(cell.day)) {
            weeks[row as usize][col as usize] = Some(cell);
        }
    }

    for week in &weeks {
        let line: String = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => day_text(cell, w, opts.color),
                None => " ".repeat(w),
            })
            .collect();
        lines.push(line);
    }

    lines
}

fn grid_width(grid: &MonthGrid) -> usize {
    cell_width(grid.size) * 7
}

fn card_lines(card: &MonthCard, opts: TextOptions) -> Vec<String> {
    let width = grid_width(&card.grid);
    let mut lines = vec![
        colors::title(&pad_center(&card.name, width), opts.color),
        colors::dim(&pad_center(&card.target.fragment(), width), opts.color),
    ];
    lines.extend(grid_lines(&card.grid, opts));
    lines
}

/// Visible width of a line that may contain escape codes.
fn visible_width(line: &str, card_width: usize, opts: TextOptions) -> usize {
    if opts.color { card_width } else { display_width(line) }
}

fn render_year(
    title: &str,
    cards: &[MonthCard],
    invalid_months: &[u32],
    opts: TextOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&colors::title(title, opts.color));
    out.push_str("\n\n");

    for chunk in cards.chunks(CARDS_PER_ROW) {
        let blocks: Vec<(Vec<String>, usize)> = chunk
            .iter()
            .map(|c| (card_lines(c, opts), grid_width(&c.grid)))
            .collect();
        let height = blocks.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

        for i in 0..height {
            let mut line = String::new();
            for (j, (lines, width)) in blocks.iter().enumerate() {
                if j > 0 {
                    line.push_str(CARD_GAP);
                }
                let text = lines.get(i).map(String::as_str).unwrap_or("");
                let fill = width.saturating_sub(visible_width(text, *width, opts));
                line.push_str(text);
                line.push_str(&" ".repeat(fill));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    if !invalid_months.is_empty() {
        let ids: Vec<String> = invalid_months.iter().map(u32::to_string).collect();
        out.push_str(&colors::dim(
            &format!("(mes(es) inválido(s): {})", ids.join(", ")),
            opts.color,
        ));
        out.push('\n');
    }

    out
}

fn event_table(events: &[EventRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("Fecha"),
        Column::new("Evento"),
        Column::new(""),
        Column::new("Tag"),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.date_label.clone(),
            textwrap::fill(&ev.title, TITLE_WRAP),
            ev.icon.to_string(),
            ev.icon_label.clone(),
        ]);
    }

    table.render()
}

fn nav_line(nav: &NavControls, opts: TextOptions) -> String {
    let mut parts = Vec::new();
    if let Some(prev) = nav.prev {
        parts.push(format!("← {}", colors::link(&prev.fragment(), opts.color)));
    }
    parts.push(format!("Volver: {}", colors::link(&nav.back.fragment(), opts.color)));
    if let Some(next) = nav.next {
        parts.push(format!("→ {}", colors::link(&next.fragment(), opts.color)));
    }
    parts.join("   ")
}

fn render_month(
    title: &str,
    month_name: &str,
    cover: &str,
    grid: &MonthGrid,
    events: &[EventRow],
    nav: &NavControls,
    opts: TextOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&colors::title(title, opts.color));
    out.push('\n');
    out.push_str(&colors::dim(&format!("[{cover}]"), opts.color));
    out.push_str("\n\n");

    out.push_str(&pad_right(month_name, grid_width(grid)));
    out.push('\n');
    for line in grid_lines(grid, opts) {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if grid.skipped > 0 {
        out.push_str(&colors::dim(
            &format!("({} evento(s) con fecha inválida)", grid.skipped),
            opts.color,
        ));
        out.push('\n');
    }

    out.push_str("\nEventos\n");
    if events.is_empty() {
        out.push_str(&colors::dim("Sin eventos 💤", opts.color));
        out.push('\n');
    } else {
        out.push_str(&event_table(events));
    }

    out.push('\n');
    out.push_str(&nav_line(nav, opts));
    out.push('\n');
    out
}

pub fn render_page(page: &Page, opts: TextOptions) -> String {
    match page {
        Page::Year {
            title,
            cards,
            invalid_months,
        } => render_year(title, cards, invalid_months, opts),
        Page::Month {
            title,
            month_name,
            cover,
            grid,
            events,
            nav,
            ..
        } => render_month(title, month_name, cover, grid, events, nav, opts),
        Page::NotFound { .. } => "Mes no encontrado\n".to_string(),
    }
}
