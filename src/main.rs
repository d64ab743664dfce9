//! headless-ui preview - Main Entry Point
//!
//! Prints a pagination bar and a month grid using the persisted widget
//! config, as text or as JSON (`--json`).
//!
//! ```text
//! headless-ui [--json] [--month YYYY-MM] [--page N/TOTAL]
//! ```

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::Parser;
use headless_ui::components::composite::{DatePicker, Pagination};
use headless_ui::domain::{CalendarDay, PageMarker, SelectionMode, YearMonth};
use headless_ui::states::WidgetConfig;
use serde_json::json;

#[derive(Parser)]
#[command(name = "headless-ui")]
#[command(about = "Preview pagination and calendar widgets")]
struct Args {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
    /// Month to show as YYYY-MM (defaults to the current month)
    #[arg(long, value_parser = parse_month)]
    month: Option<YearMonth>,
    /// Current page and page count as N/TOTAL
    #[arg(long, value_parser = parse_page, default_value = "10/20")]
    page: PageArg,
}

#[derive(Debug, Clone, Copy)]
struct PageArg {
    current: usize,
    total: usize,
}

fn parse_month(value: &str) -> Result<YearMonth, String> {
    let first = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map_err(|e| format!("invalid month {value:?}, expected YYYY-MM: {e}"))?;
    YearMonth::of(first).ok_or_else(|| format!("month {value} is outside the supported range"))
}

fn parse_page(value: &str) -> Result<PageArg, String> {
    let (current, total) = value
        .split_once('/')
        .ok_or_else(|| format!("invalid page {value:?}, expected N/TOTAL"))?;
    Ok(PageArg {
        current: current
            .trim()
            .parse()
            .map_err(|e| format!("invalid page number {current:?}: {e}"))?,
        total: total
            .trim()
            .parse()
            .map_err(|e| format!("invalid page total {total:?}: {e}"))?,
    })
}

fn render_markers(pagination: &Pagination) -> String {
    let mut parts = vec!["«".to_string()];
    for marker in pagination.markers() {
        parts.push(match marker {
            PageMarker::Page(page) if page == pagination.current_page() => format!("[{page}]"),
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        });
    }
    parts.push("»".to_string());
    parts.join(" ")
}

fn render_day(day: &CalendarDay) -> String {
    use chrono::Datelike;

    let number = day.date.day();
    if day.is_disabled {
        return format!("  {:>2}-", number);
    }
    let (open, close) = match (day.is_selected, day.is_today) {
        (true, _) => ('[', ']'),
        (false, true) => ('*', ' '),
        _ => (' ', ' '),
    };
    if day.in_current_month {
        format!(" {open}{number:>2}{close}")
    } else {
        format!(" {open}{:>2}{close}", "·")
    }
}

fn render_calendar(picker: &DatePicker, days: &[CalendarDay]) -> String {
    let mut lines = vec![picker.title()];
    lines.push(
        picker
            .weekday_labels()
            .iter()
            .map(|label| format!(" {label:>3} "))
            .collect(),
    );
    for week in days.chunks(7) {
        lines.push(week.iter().map(render_day).collect());
    }
    lines.join("\n")
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = WidgetConfig::try_load().context("failed to load widget config")?;
    tracing::info!(locale = config.locale().code(), "Rendering preview");

    let pages = config.pagination();
    let pagination = Pagination::new(args.page.current, args.page.total)
        .sibling_count(pages.sibling_count)
        .boundary_count(pages.boundary_count);

    let today = Local::now().date_naive();
    let view = match args.month.or_else(|| YearMonth::of(today)) {
        Some(view) => view,
        None => bail!("today is outside the supported calendar range"),
    };
    let picker = config.new_date_picker(SelectionMode::Single, view);
    let days = picker.days(today);

    if args.json {
        let output = json!({
            "pagination": {
                "current_page": pagination.current_page(),
                "total_pages": pagination.total_pages(),
                "markers": pagination.markers(),
            },
            "calendar": {
                "title": picker.title(),
                "weekdays": picker.weekday_labels(),
                "days": days,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render_markers(&pagination));
    println!();
    println!("{}", render_calendar(&picker, &days));
    Ok(())
}
