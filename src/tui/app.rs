use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEventKind};
use log::warn;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::data::JournalData;
use crate::models::{Category, DayEntry};
use crate::stats::heatmap::HeatmapGrid;
use crate::stats::{overview, Overview, ScoreScheme, StreakSource};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    days, goals, header, heatmap, reading, statsbar, statusbar, streaks, topics,
};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Days,
    Help,
}

/// Section filter for the day browser, cycled with `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Practice,
    Building,
    Reading,
    Exploring,
}

impl DayFilter {
    pub fn next(self) -> Self {
        match self {
            DayFilter::All => DayFilter::Practice,
            DayFilter::Practice => DayFilter::Building,
            DayFilter::Building => DayFilter::Reading,
            DayFilter::Reading => DayFilter::Exploring,
            DayFilter::Exploring => DayFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayFilter::All => "All",
            DayFilter::Practice => "Practice",
            DayFilter::Building => "Building",
            DayFilter::Reading => "Reading",
            DayFilter::Exploring => "Exploring",
        }
    }

    pub fn matches(self, entry: &DayEntry) -> bool {
        match self {
            DayFilter::All => !entry.is_empty(),
            DayFilter::Practice => Category::practice().iter().any(|&c| entry.count(c) > 0),
            DayFilter::Building => entry.count(Category::Building) > 0,
            DayFilter::Reading => entry.count(Category::Reading) > 0,
            DayFilter::Exploring => entry.count(Category::Exploring) > 0,
        }
    }
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub data: JournalData,
    pub scheme: ScoreScheme,
    pub source: StreakSource,
    pub today: NaiveDate,
    pub heatmap_weeks: usize,

    // Derived once per load; recomputed on reload and date rollover.
    pub overview: Overview,
    pub grid: HeatmapGrid,
    pub days: Vec<NaiveDate>,
    pub selected: usize,
    pub filter: DayFilter,
    pub status: Option<String>,
}

/// Logged days for the browser, newest first.
fn day_list(data: &JournalData, filter: DayFilter) -> Vec<NaiveDate> {
    data.entries
        .iter()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(date, _)| *date)
        .rev()
        .collect()
}

impl App {
    pub fn new(
        data: JournalData,
        scheme: ScoreScheme,
        source: StreakSource,
        heatmap_weeks: usize,
        today: NaiveDate,
    ) -> Self {
        let overview = overview::build(&data, source, today);
        let grid =
            crate::stats::heatmap::build_grid(&data.entries, today, heatmap_weeks, scheme);
        let days = day_list(&data, DayFilter::All);

        App {
            view: View::Dashboard,
            should_quit: false,
            data,
            scheme,
            source,
            today,
            heatmap_weeks,
            overview,
            grid,
            days,
            selected: 0,
            filter: DayFilter::All,
            status: None,
        }
    }

    fn refresh(&mut self) {
        self.overview = overview::build(&self.data, self.source, self.today);
        self.grid = crate::stats::heatmap::build_grid(
            &self.data.entries,
            self.today,
            self.heatmap_weeks,
            self.scheme,
        );
        self.days = day_list(&self.data, self.filter);
        if self.selected >= self.days.len() {
            self.selected = self.days.len().saturating_sub(1);
        }
    }

    fn reload(&mut self) {
        match JournalData::load(&self.data.dir) {
            Ok(data) => {
                self.data = data;
                self.refresh();
                self.status = Some(format!("Reloaded {} days", self.data.entries.len()));
            }
            Err(err) => {
                warn!("reload failed: {}", err);
                self.status = Some(format!("Reload failed: {}", err));
            }
        }
    }

    /// Roll statistics over when the wall-clock date changes under a
    /// long-running dashboard.
    pub fn tick(&mut self) {
        let now = Local::now().date_naive();
        if now != self.today {
            self.today = now;
            self.refresh();
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Release and repeat events from some terminals would double-trigger.
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status = None;
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Days => self.handle_days_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('d') | KeyCode::Tab => {
                self.view = View::Days;
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            _ => {}
        }
    }

    fn handle_days_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Tab => {
                self.view = View::Dashboard;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.days.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.days = day_list(&self.data, self.filter);
                self.selected = 0;
            }
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Days => self.draw_days(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // header
                Constraint::Length(3), // stats bar
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer[0], self.today);
        statsbar::render(frame, outer[1], &self.overview);
        statusbar::render(frame, outer[3], &self.view, self.status.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer[2]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11), // heatmap
                Constraint::Length(11), // streak cards
                Constraint::Min(0),     // topics
            ])
            .split(columns[0]);

        heatmap::render(frame, left[0], &self.grid);
        streaks::render(frame, left[1], &self.overview.practice);
        topics::render(frame, left[2], &self.overview.topics);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(12), // goals
                Constraint::Min(0),     // reading
            ])
            .split(columns[1]);

        goals::render(
            frame,
            right[0],
            self.overview.week.as_ref(),
            &self.overview.all_time,
        );
        reading::render(frame, right[1], &self.overview.reading);
    }

    fn draw_days(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        days::render(
            frame,
            chunks[0],
            &self.data,
            &self.days,
            self.selected,
            self.filter,
            self.scheme,
        );
        statusbar::render(frame, chunks[1], &self.view, self.status.as_deref());
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(14),
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [d / Tab]    ", theme::accent()),
                Span::styled("Day browser", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [f]          ", theme::accent()),
                Span::styled("Cycle section filter (day browser)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [↑ ↓ / j k]  ", theme::accent()),
                Span::styled("Move selection", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [r]          ", theme::accent()),
                Span::styled("Reload journal files", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::accent()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [q / Esc]    ", theme::accent()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::accent())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the dashboard event loop.
pub fn run(
    data: JournalData,
    scheme: ScoreScheme,
    source: StreakSource,
    heatmap_weeks: usize,
    today: NaiveDate,
) -> Result<()> {
    let mut app = App::new(data, scheme, source, heatmap_weeks, today);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            // Redrawn on the next loop pass anyway.
            Event::Resize(_, _) => {}
            Event::Tick => app.tick(),
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> DayEntry {
        serde_json::from_str(json).unwrap()
    }

    fn data_with(entries: Vec<(NaiveDate, DayEntry)>) -> JournalData {
        JournalData {
            dir: std::path::PathBuf::new(),
            entries: entries.into_iter().collect(),
            weeks: Default::default(),
            books: Default::default(),
            snapshot: None,
            summaries: Default::default(),
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn filters_match_their_sections() {
        let building = entry(r#"{"building": [{"project": "riyaz", "work": "tui"}]}"#);
        assert!(DayFilter::All.matches(&building));
        assert!(DayFilter::Building.matches(&building));
        assert!(!DayFilter::Practice.matches(&building));
        assert!(!DayFilter::Reading.matches(&building));

        let empty = entry("{}");
        assert!(!DayFilter::All.matches(&empty));
    }

    #[test]
    fn filter_cycle_returns_to_all() {
        let mut filter = DayFilter::All;
        for _ in 0..5 {
            filter = filter.next();
        }
        assert_eq!(filter, DayFilter::All);
    }

    #[test]
    fn day_list_is_newest_first_and_filtered() {
        let data = data_with(vec![
            (date(10), entry(r#"{"practice": {"sql": [{"name": "joins"}]}}"#)),
            (date(12), entry(r#"{"reading": [{"book": "ddia", "pages": [1, 5]}]}"#)),
            (date(11), entry("{}")),
        ]);

        let all = day_list(&data, DayFilter::All);
        assert_eq!(all, vec![date(12), date(10)]);

        let reading = day_list(&data, DayFilter::Reading);
        assert_eq!(reading, vec![date(12)]);
    }
}
