//! Pure page construction: `(dataset, view, config) -> Page`.
//!
//! Nothing here prints, logs or touches the filesystem; the CLI decides
//! how a [`Page`] reaches the user.

use super::nav::NavControls;
use super::route::View;
use crate::config::Config;
use crate::core::aggregator::{group_by_day, sort_by_date};
use crate::core::geometry::MonthLayout;
use crate::errors::{AppError, AppResult};
use crate::models::tag_kind::{TagKind, icon_label};
use crate::models::{Dataset, Event, Month};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    Small,
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub has_events: bool,
    /// One `"{title} ({tag})"` line per event, in input order.
    pub summary: Vec<String>,
    pub holiday: bool,
}

impl DayCell {
    pub fn hover_text(&self) -> String {
        self.summary.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub size: GridSize,
    pub weekdays: Vec<String>,
    pub layout: MonthLayout,
    pub cells: Vec<DayCell>,
    /// Events left out of the grid because their date is malformed.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCard {
    pub id: u32,
    pub name: String,
    pub cover: String,
    pub grid: MonthGrid,
    pub target: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub date: String,
    pub date_label: String,
    pub title: String,
    pub tag: String,
    pub kind: TagKind,
    pub icon: &'static str,
    pub icon_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Year {
        title: String,
        cards: Vec<MonthCard>,
        /// Dataset months left out because their id is not in 1..=12.
        invalid_months: Vec<u32>,
    },
    Month {
        title: String,
        month_id: u32,
        month_name: String,
        cover: String,
        grid: MonthGrid,
        events: Vec<EventRow>,
        nav: NavControls,
    },
    NotFound {
        month_id: u32,
    },
}

impl Page {
    /// Where the page stands in the navigation; `NotFound` keeps its month route.
    pub fn view(&self) -> View {
        match self {
            Page::Year { .. } => View::Year,
            Page::Month { month_id, .. } | Page::NotFound { month_id } => View::Month(*month_id),
        }
    }
}

/// Lay out one month: blanks, day cells and per-day event summaries.
pub fn month_grid(year: i32, month: &Month, size: GridSize, cfg: &Config) -> AppResult<MonthGrid> {
    let layout = MonthLayout::new(year, month.id)?;
    let groups = group_by_day(&month.events);

    let cells = (1..=layout.days)
        .map(|day| {
            let evs = groups.get(day);
            DayCell {
                day,
                has_events: !evs.is_empty(),
                summary: evs.iter().map(|e| e.summary()).collect(),
                holiday: evs.iter().any(|e| e.kind().is_holiday()),
            }
        })
        .collect();

    Ok(MonthGrid {
        size,
        weekdays: cfg.weekday_labels.clone(),
        layout,
        cells,
        skipped: groups.rejected().len(),
    })
}

fn event_row(month: &Month, ev: &Event) -> EventRow {
    let kind = ev.kind();
    EventRow {
        date: ev.date.clone(),
        date_label: format!("{} {}", month.name, ev.day_str().unwrap_or("??")),
        title: ev.title.clone(),
        tag: ev.tag.clone(),
        kind,
        icon: kind.icon(),
        icon_label: icon_label(&ev.tag),
    }
}

pub fn event_rows(month: &Month) -> Vec<EventRow> {
    sort_by_date(&month.events)
        .into_iter()
        .map(|ev| event_row(month, ev))
        .collect()
}

fn year_page(data: &Dataset, cfg: &Config) -> AppResult<Page> {
    let mut cards = Vec::with_capacity(data.months.len());
    let mut invalid_months = Vec::new();

    for m in &data.months {
        let grid = match month_grid(data.year, m, GridSize::Small, cfg) {
            Ok(grid) => grid,
            Err(AppError::InvalidMonth(id)) => {
                invalid_months.push(id);
                continue;
            }
            Err(e) => return Err(e),
        };

        cards.push(MonthCard {
            id: m.id,
            name: m.name.clone(),
            cover: m.cover(&cfg.placeholder_image).to_string(),
            grid,
            target: View::Month(m.id),
        });
    }

    Ok(Page::Year {
        title: format!("{} {}", cfg.title_prefix, data.year),
        cards,
        invalid_months,
    })
}

fn month_page(data: &Dataset, month_id: u32, cfg: &Config) -> AppResult<Page> {
    let Some(month) = data.month(month_id) else {
        return Ok(Page::NotFound { month_id });
    };

    Ok(Page::Month {
        title: format!("{} {}", month.name, data.year),
        month_id: month.id,
        month_name: month.name.clone(),
        cover: month.cover(&cfg.placeholder_image).to_string(),
        grid: month_grid(data.year, month, GridSize::Big, cfg)?,
        events: event_rows(month),
        nav: NavControls::for_month(month.id),
    })
}

pub fn build_page(data: &Dataset, view: View, cfg: &Config) -> AppResult<Page> {
    match view {
        View::Year => year_page(data, cfg),
        View::Month(id) => month_page(data, id, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset {
            year: 2026,
            months: vec![
                Month::new(1, "Enero").with_events(vec![
                    Event::new("2026-01-05", "A", "cumple"),
                    Event::new("2026-01-05", "B", "feriado"),
                ]),
                Month::new(2, "Febrero").with_image("img/feb.webp"),
            ],
        }
    }

    #[test]
    fn month_page_attaches_events_to_day_cells() {
        let page = build_page(&sample(), View::Month(1), &Config::default()).unwrap();
        let Page::Month { title, grid, events, nav, cover, .. } = page else {
            panic!("expected a month page");
        };

        assert_eq!(title, "Enero 2026");
        assert_eq!(cover, "img/placeholder.webp");
        assert_eq!(grid.size, GridSize::Big);
        assert_eq!(grid.layout.leading_blanks, 4);
        assert_eq!(grid.cells.len(), 31);

        let five = &grid.cells[4];
        assert_eq!(five.day, 5);
        assert!(five.has_events);
        assert!(five.holiday);
        assert_eq!(five.hover_text(), "A (cumple)\nB (feriado)");
        assert!(!grid.cells[5].has_events);

        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(events[0].date_label, "Enero 05");
        assert_eq!(events[0].kind, TagKind::Birthday);
        assert_eq!(events[1].icon, "🦙");

        assert_eq!(nav.prev, None);
        assert_eq!(nav.next, Some(View::Month(2)));
    }

    #[test]
    fn year_page_lists_every_month() {
        let page = build_page(&sample(), View::Year, &Config::default()).unwrap();
        let Page::Year {
            title,
            cards,
            invalid_months,
        } = page
        else {
            panic!("expected the year page");
        };
        assert!(invalid_months.is_empty());

        assert_eq!(title, "CALENDARIO CARRERITAS 2026");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].grid.size, GridSize::Small);
        assert_eq!(cards[1].cover, "img/feb.webp");
        assert_eq!(cards[1].target, View::Month(2));
        assert_eq!(cards[1].grid.layout.leading_blanks, 0);
    }

    #[test]
    fn unknown_month_is_not_found() {
        let page = build_page(&sample(), View::Month(7), &Config::default()).unwrap();
        assert_eq!(page, Page::NotFound { month_id: 7 });
        assert_eq!(page.view(), View::Month(7));
    }

    #[test]
    fn malformed_dates_are_skipped_by_the_grid() {
        let month = Month::new(3, "Marzo").with_events(vec![
            Event::new("2026-03-02", "ok", ""),
            Event::new("2026-3-2", "broken", ""),
        ]);
        let grid = month_grid(2026, &month, GridSize::Small, &Config::default()).unwrap();
        assert_eq!(grid.skipped, 1);
        assert_eq!(grid.cells.iter().filter(|c| c.has_events).count(), 1);

        let rows = event_rows(&month);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn out_of_range_month_is_left_off_the_year_page() {
        let data = Dataset {
            year: 2026,
            months: vec![Month::new(1, "Enero"), Month::new(13, "Nope")],
        };
        let page = build_page(&data, View::Year, &Config::default()).unwrap();
        let Page::Year {
            cards,
            invalid_months,
            ..
        } = page
        else {
            panic!("expected the year page");
        };

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, 1);
        assert_eq!(invalid_months, vec![13]);
    }

    #[test]
    fn out_of_range_month_page_cannot_be_laid_out() {
        let data = Dataset {
            year: 2026,
            months: vec![Month::new(13, "Nope")],
        };
        assert!(matches!(
            build_page(&data, View::Month(13), &Config::default()),
            Err(AppError::InvalidMonth(13))
        ));
    }

    #[test]
    fn full_year_has_twelve_cards_in_order() {
        const NAMES: [&str; 12] = [
            "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
            "Septiembre", "Octubre", "Noviembre", "Diciembre",
        ];
        // (leading blanks, days) for each month of 2026, Sunday first
        const EXPECTED: [(u32, u32); 12] = [
            (4, 31),
            (0, 28),
            (0, 31),
            (3, 30),
            (5, 31),
            (1, 30),
            (3, 31),
            (6, 31),
            (2, 30),
            (4, 31),
            (0, 30),
            (2, 31),
        ];

        let data = Dataset {
            year: 2026,
            months: (1..=12u32)
                .map(|id| Month::new(id, NAMES[id as usize - 1]))
                .collect(),
        };
        let page = build_page(&data, View::Year, &Config::default()).unwrap();
        let Page::Year { cards, .. } = page else {
            panic!("expected the year page");
        };

        assert_eq!(cards.len(), 12);
        for (i, card) in cards.iter().enumerate() {
            let id = i as u32 + 1;
            assert_eq!(card.id, id);
            assert_eq!(card.name, NAMES[i]);
            assert_eq!(card.target, View::Month(id));
            assert_eq!(
                (card.grid.layout.leading_blanks, card.grid.layout.days),
                EXPECTED[i],
                "month {id}"
            );
            assert_eq!(card.grid.cells.len() as u32, EXPECTED[i].1);
        }

        let december = &cards[11];
        assert_eq!(december.grid.layout.leading_blanks, 2);
        assert_eq!(december.grid.layout.days, 31);
    }
}
