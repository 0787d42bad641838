use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::data::JournalData;
use crate::models::Category;
use crate::stats::heatmap::{self, HeatmapGrid};
use crate::stats::streaks::{self, CategoryStats};
use crate::stats::{goals, overview, reading, topics};
use crate::stats::{ScoreScheme, StreakSource};
use crate::utils::format::{format_percent, long_date, progress_bar, week_id};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;94;196;176m";
const VIOLET: &str = "\x1b[38;2;150;130;220m";
const RESET: &str = "\x1b[0m";

/// Heat ramp for the CLI heatmap, matching the TUI theme's greens.
const HEAT: [&str; 5] = [
    "\x1b[2m",
    "\x1b[38;2;24;68;58m",
    "\x1b[38;2;28;110;88m",
    "\x1b[38;2;48;160;122m",
    "\x1b[38;2;94;220;166m",
];
const HEAT_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init(
    dir: &Path,
    config: &mut AppConfig,
    force: bool,
    persist_dir: bool,
) -> Result<()> {
    let entries = dir.join("entries.json");
    if entries.exists() && !force {
        return Err(anyhow!(
            "{:?} already has a journal. Use --force to overwrite it.",
            dir
        ));
    }

    fs::create_dir_all(dir.join("config"))?;
    fs::write(&entries, "{}\n")?;
    fs::write(dir.join("weeks.json"), "{}\n")?;

    if persist_dir {
        config.journal.data_dir = Some(dir.display().to_string());
        config.save()?;
    }

    println!();
    println_colored!(GREEN, "  ✓ Journal scaffolded at {:?}", dir);
    println!();
    println_colored!(DIM, "  entries.json  — one object per day, keyed \"YYYY-MM-DD\"");
    println_colored!(DIM, "  weeks.json    — goals per week, keyed \"YYYY-Wnn\"");
    println_colored!(DIM, "  config/       — optional books.json with chapter tables");
    println!();
    println_colored!(DIM, "  Run `riyaz` once there is something to look at.");
    println!();
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(data: &JournalData, source: StreakSource, today: NaiveDate) -> Result<()> {
    let overview = overview::build(data, source, today);

    println!();
    println_colored!(
        TEAL,
        "  riyaz — {} ({})",
        long_date(today),
        week_id(today)
    );
    println!();
    println_colored!(
        BOLD,
        "  {} problems  ·  best streak {}d  ·  goals {}  ·  {} perfect weeks",
        overview.total_problems,
        overview.best_streak,
        format_percent(overview.all_time.percentage),
        overview.all_time.perfect_weeks
    );

    println!();
    println_colored!(TEAL, "  Practice");
    for (category, stats) in &overview.practice {
        print_practice_line(*category, stats);
    }

    if let Some(week) = &overview.week {
        println!();
        println_colored!(TEAL, "  Goals — {}", week.id);
        println!(
            "    {}  {}/{} · {}%",
            progress_bar(week.completed, week.total, 12),
            week.completed,
            week.total,
            week.percentage
        );
    }

    if !overview.reading.is_empty() {
        println!();
        println_colored!(TEAL, "  Reading");
        for book in &overview.reading {
            println!(
                "    {}{}{}  {}  {}/{} · {}",
                BOLD,
                book.title,
                RESET,
                progress_bar(book.progress.pages_read, book.progress.total_pages, 12),
                book.progress.pages_read,
                book.progress.total_pages,
                format_percent(book.percent)
            );
            if let Some(current) = &book.current {
                println_colored!(DIM, "      → Ch {} · {}", current.number, current.title);
            }
        }
    }

    if !overview.projects.is_empty() {
        println!();
        println_colored!(TEAL, "  Building");
        for project in &overview.projects {
            let last = project
                .last_active
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".to_string());
            println!(
                "    {:<20}  {:>3} days · last active {}",
                project.name, project.days, last
            );
        }
    }

    println!();
    Ok(())
}

fn print_practice_line(category: Category, stats: &CategoryStats) {
    let mut extras = String::new();
    if stats.easy + stats.medium + stats.hard > 0 {
        extras = format!("   {}E {}M {}H", stats.easy, stats.medium, stats.hard);
    }
    if stats.hld + stats.lld > 0 {
        extras = format!("   {} HLD · {} LLD", stats.hld, stats.lld);
    }
    let streak_color = if stats.streak.current > 0 { GREEN } else { DIM };
    println!(
        "    {:<14} {:>4} {}   {}streak {:>2}d (best {:>2}){}{}{}{}",
        category.display_name(),
        stats.items,
        noun(category),
        streak_color,
        stats.streak.current,
        stats.streak.longest,
        RESET,
        DIM,
        extras,
        RESET
    );
}

fn noun(category: Category) -> &'static str {
    match category {
        Category::Leetcode | Category::Sql => "solved  ",
        _ => "sessions",
    }
}

// ─── Streaks ─────────────────────────────────────────────────────────────────

pub fn handle_streaks(data: &JournalData, source: StreakSource, today: NaiveDate) -> Result<()> {
    let overview = overview::build(data, source, today);

    println!();
    println_colored!(TEAL, "  Streaks");
    println!();
    for (category, stats) in &overview.practice {
        print_streak_line(
            category.display_name(),
            stats.streak.current,
            stats.streak.longest,
            &format!("{} {}", stats.items, noun(*category).trim()),
        );
    }
    println!();
    for category in [Category::Building, Category::Reading, Category::Exploring] {
        let streak = streaks::streaks(&data.entries, category, today);
        print_streak_line(
            category.display_name(),
            streak.current,
            streak.longest,
            &format!("{} active days", streak.total),
        );
    }
    println!();
    Ok(())
}

fn print_streak_line(name: &str, current: u32, longest: u32, tally: &str) {
    let bar = progress_bar(current, longest.max(1), 12);
    let color = if current > 0 { GREEN } else { DIM };
    println!(
        "  {:<14} {}{}{}  {:>3}d   best {:>3}   {}{}{}",
        name, color, bar, RESET, current, longest, DIM, tally, RESET
    );
}

// ─── Heatmap ─────────────────────────────────────────────────────────────────

pub fn handle_heatmap(
    data: &JournalData,
    scheme: ScoreScheme,
    weeks: usize,
    today: NaiveDate,
) -> Result<()> {
    let grid = heatmap::build_grid(&data.entries, today, weeks, scheme);

    println!();
    println_colored!(
        TEAL,
        "  Activity — last {} weeks ({} scoring)",
        grid.weeks.len(),
        scheme
    );
    println!();
    print!("      ");
    println!("{}", month_header(&grid));

    let day_labels = ["    ", "Mon ", "    ", "Wed ", "    ", "Fri ", "    "];
    for day_idx in 0..7 {
        print!("  {}{}{}", DIM, day_labels[day_idx], RESET);
        for week in &grid.weeks {
            let cell = &week[day_idx];
            if cell.future {
                print!("{} {}", DIM, RESET);
            } else {
                let level = cell.intensity as usize;
                print!("{}{}{}", HEAT[level], HEAT_GLYPHS[level], RESET);
            }
        }
        println!();
    }

    println!();
    print!("  {}less {}", DIM, RESET);
    for level in 0..5 {
        print!("{}{}{}", HEAT[level], HEAT_GLYPHS[level], RESET);
    }
    println_colored!(DIM, " more   ·  {} active days", grid.active_days());
    println!();
    Ok(())
}

/// Month labels laid out over the week columns, skipping any label that
/// would overlap the previous one.
fn month_header(grid: &HeatmapGrid) -> String {
    let mut row = vec![' '; grid.weeks.len()];
    let mut next_free = 0;
    for month in &grid.months {
        if month.week < next_free || month.week + month.label.len() > row.len() {
            continue;
        }
        for (i, ch) in month.label.chars().enumerate() {
            row[month.week + i] = ch;
        }
        next_free = month.week + month.label.len() + 1;
    }
    format!("{}{}{}", DIM, row.into_iter().collect::<String>(), RESET)
}

// ─── Goals ───────────────────────────────────────────────────────────────────

pub fn handle_goals(data: &JournalData) -> Result<()> {
    let week = goals::current_week(&data.weeks);
    let all_time = goals::all_time(&data.weeks);

    println!();
    match &week {
        None => println_colored!(DIM, "  No weeks recorded yet."),
        Some(week) => {
            println_colored!(TEAL, "  Goals — {}", week.id);
            println!();
            for goal in &week.goals {
                if goal.done {
                    println_colored!(GREEN, "    ✓ {}", goal.text);
                } else {
                    println_colored!(DIM, "    ○ {}", goal.text);
                }
            }
            println!();
            println!(
                "    {}  {}/{} · {}%",
                progress_bar(week.completed, week.total, 12),
                week.completed,
                week.total,
                week.percentage
            );
            if let Some(highlight) = week.highlight.as_deref().filter(|h| !h.is_empty()) {
                println!();
                println_colored!(AMBER, "    ★ {}", highlight);
            }
            if let Some(review) = week.review.as_deref().filter(|r| !r.is_empty()) {
                println_colored!(DIM, "    {}", review);
            }
        }
    }

    println!();
    println_colored!(
        BOLD,
        "  All-time: {}/{} · {} · {} perfect weeks",
        all_time.completed,
        all_time.total,
        format_percent(all_time.percentage),
        all_time.perfect_weeks
    );

    if let Some(week) = &week {
        if let Some(summary) = data.summaries.get(&week.id) {
            if !summary.narrative.is_empty() {
                println!();
                println_colored!(DIM, "  {}", summary.narrative);
            }
        }
    }
    println!();
    Ok(())
}

// ─── Reading ─────────────────────────────────────────────────────────────────

pub fn handle_reading(data: &JournalData) -> Result<()> {
    let books = reading::book_overviews(data);

    println!();
    if books.is_empty() {
        println_colored!(DIM, "  No reading logged yet.");
        println!();
        return Ok(());
    }

    println_colored!(TEAL, "  Reading");
    println!();
    for book in &books {
        print!("  {}{}{}", BOLD, book.title, RESET);
        if let Some(author) = &book.author {
            print!("{} — {}{}", DIM, author, RESET);
        }
        println!();
        println!(
            "    {}  {}/{} pages · {}",
            progress_bar(book.progress.pages_read, book.progress.total_pages, 16),
            book.progress.pages_read,
            book.progress.total_pages,
            format_percent(book.percent)
        );
        if let Some(current) = &book.current {
            println_colored!(VIOLET, "    → Ch {} · {}", current.number, current.title);
        } else if !book.progress.chapters_completed.is_empty() {
            println_colored!(GREEN, "    ✓ all chapters done");
        }
        if !book.progress.themes_covered.is_empty() {
            println_colored!(DIM, "    themes: {}", book.progress.themes_covered.join(", "));
        }
        println!();
    }
    Ok(())
}

// ─── Topics ──────────────────────────────────────────────────────────────────

pub fn handle_topics(data: &JournalData) -> Result<()> {
    let mut cloud = topics::weighted(&topics::topic_counts(&data.entries));
    if cloud.is_empty() {
        if let Some(snapshot) = &data.snapshot {
            cloud = topics::weighted(&snapshot.exploring.topics);
        }
    }

    println!();
    if cloud.is_empty() {
        println_colored!(DIM, "  Nothing explored yet.");
        println!();
        return Ok(());
    }

    println_colored!(TEAL, "  Topics");
    println!();
    for topic in &cloud {
        let bar_width = (topic.weight * 10.0).round() as u32;
        println!(
            "  {:<24} {:>3}  {}{}{}",
            topic.topic,
            topic.count,
            TEAL,
            "▪".repeat(bar_width.max(1) as usize),
            RESET
        );
    }
    println!();
    Ok(())
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(data: &JournalData, date_arg: Option<&str>, today: NaiveDate) -> Result<()> {
    let date = match date_arg {
        None => today,
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow!("'{}' is not a date. Use YYYY-MM-DD.", raw))?,
    };

    println!();
    let Some(entry) = data.entries.get(&date) else {
        println_colored!(DIM, "  No entry for {}.", date);
        println!();
        return Ok(());
    };

    println_colored!(TEAL, "  {} — {}", long_date(date), entry.preview());
    println!();

    for category in Category::practice() {
        if let Some(items) = entry.practice_items(category) {
            if items.is_empty() {
                continue;
            }
            println_colored!(BOLD, "  {}", category.display_name());
            for item in items {
                let mut tail = String::new();
                if let Some(difficulty) = item.difficulty {
                    tail.push_str(&format!(" ({})", difficulty.as_str()));
                }
                if let Some(kind) = &item.kind {
                    tail.push_str(&format!(" [{}]", kind));
                }
                println!("    · {}{}{}{}", item.name, DIM, tail, RESET);
                if let Some(insight) = item.insight.as_deref().filter(|i| !i.is_empty()) {
                    println_colored!(DIM, "      {}", insight);
                }
            }
        }
    }

    if !entry.building.is_empty() {
        println_colored!(BOLD, "  Building");
        for item in &entry.building {
            println!("    · {}{} — {}{}", item.project, DIM, item.work, RESET);
        }
    }

    if !entry.reading.is_empty() {
        println_colored!(BOLD, "  Reading");
        for item in &entry.reading {
            let mut line = item.book.clone();
            if let Some(chapter) = item.chapter {
                line.push_str(&format!(" · ch {}", chapter));
            }
            if let Some((start, end)) = item.page_range() {
                line.push_str(&format!(" · pp {}–{}", start, end));
            }
            println!("    · {}", line);
            if let Some(insight) = item.insight.as_deref().filter(|i| !i.is_empty()) {
                println_colored!(DIM, "      {}", insight);
            }
        }
    }

    if !entry.exploring.is_empty() {
        println_colored!(BOLD, "  Exploring");
        for item in &entry.exploring {
            println!("    · {}{} — {}{}", item.topic, DIM, item.content, RESET);
        }
    }

    if let Some(notes) = entry.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        println_colored!(BOLD, "  Notes");
        println_colored!(DIM, "    {}", notes);
    }

    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(
    data: &JournalData,
    source: StreakSource,
    scheme: ScoreScheme,
    today: NaiveDate,
) -> Result<()> {
    let overview = overview::build(data, source, today);

    println!("# riyaz — Weekly Summary");
    println!("# {} ({})", today, week_id(today));
    println!();

    if let Some(week) = &overview.week {
        println!("## Goals — {} ({}/{} · {}%)", week.id, week.completed, week.total, week.percentage);
        for goal in &week.goals {
            let mark = if goal.done { "x" } else { " " };
            println!("- [{}] {}", mark, goal.text);
        }
        if let Some(highlight) = week.highlight.as_deref().filter(|h| !h.is_empty()) {
            println!();
            println!("Highlight: {}", highlight);
        }
        println!();
    }

    println!("## Practice");
    for (category, stats) in &overview.practice {
        println!(
            "  {:<14} {:>4} {}  streak {}d (best {})",
            category.display_name(),
            stats.items,
            noun(*category).trim(),
            stats.streak.current,
            stats.streak.longest
        );
    }
    println!();

    println!("## Activity (last 7 days)");
    let week_start = today - chrono::Duration::days(6);
    let mut day = week_start;
    while day <= today {
        let score = data.entries.get(&day).map(|e| scheme.score(e)).unwrap_or(0);
        let level = scheme.intensity(score) as u32;
        println!("  {}  {}  {}", day, progress_bar(level, 4, 4), score);
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    println!();

    if !overview.reading.is_empty() {
        println!("## Reading");
        for book in &overview.reading {
            println!(
                "  {} — {}/{} pages ({})",
                book.title,
                book.progress.pages_read,
                book.progress.total_pages,
                format_percent(book.percent)
            );
            if let Some(current) = &book.current {
                println!("    current: Ch {} · {}", current.number, current.title);
            }
        }
        println!();
    }

    if let Some(week) = &overview.week {
        if let Some(summary) = data.summaries.get(&week.id) {
            if !summary.narrative.is_empty() {
                println!("## Narrative");
                println!("  {}", summary.narrative);
            }
        }
    }

    Ok(())
}
