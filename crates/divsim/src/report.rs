//! Text and JSON rendering of simulation results

use std::fmt::Write;

use clap::ValueEnum;
use divsim_core::config::SimulationConfig;
use divsim_core::model::SimulationResult;

use crate::util::format::{format_amount, format_percent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Right-aligned plain-text table
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn render(&self, out: &mut String) {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .chain(std::iter::once(&self.headers[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ")
        };

        let _ = writeln!(out, "{}", line(&self.headers));
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(rule_width));
        for row in &self.rows {
            let _ = writeln!(out, "{}", line(row));
        }
    }
}

/// Render the purchase plan, per-year dividend calendars, the cumulative
/// trend and the yearly return table.
///
/// With `year` set, only that year's calendar is shown.
pub fn render_text(
    config: &SimulationConfig,
    result: &SimulationResult,
    year: Option<i32>,
) -> String {
    let mut out = String::new();

    render_plan(config, result, &mut out);

    let calendar_years: Vec<i32> = match year {
        Some(year) => vec![year],
        None => result.years.iter().collect(),
    };
    for year in calendar_years {
        render_calendar(result, year, &mut out);
    }

    if year.is_none() {
        render_trend(result, &mut out);
    }
    render_yearly(result, &mut out);

    out
}

pub fn render_json(result: &SimulationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

fn render_plan(config: &SimulationConfig, result: &SimulationResult, out: &mut String) {
    for security in &config.securities {
        let _ = writeln!(out, "== {} purchase plan ==", security.name);
        let mut table = Table::new(["Year", "Quantity", "Price", "Invested"]);
        for (year, invested) in security.invested_by_year(result.years) {
            let purchase = security.purchases.iter().find(|p| p.year == year);
            table.row(vec![
                year.to_string(),
                purchase.map_or(0, |p| p.quantity).to_string(),
                format_amount(purchase.map_or(0.0, |p| p.price_per_share)),
                format_amount(invested),
            ]);
        }
        table.render(out);
        out.push('\n');
    }
}

fn render_calendar(result: &SimulationResult, year: i32, out: &mut String) {
    let months = result.months_for_year(year);
    if months.is_empty() {
        let _ = writeln!(out, "{year} is outside the simulated years\n");
        return;
    }

    let _ = writeln!(out, "== {year} dividend calendar ==");
    let headers = std::iter::once("Month".to_string())
        .chain(result.securities.iter().cloned())
        .chain(["Total".to_string(), "Year to date".to_string()]);
    let mut table = Table::new(headers);

    for record in months {
        let mut cells = vec![record.month.to_string()];
        cells.extend(
            record
                .dividend_by_security
                .iter()
                .map(|d| format_amount(d.amount)),
        );
        cells.push(format_amount(record.total_dividend));
        cells.push(format_amount(record.cumulative_dividend_in_year));
        table.row(cells);
    }

    let mut totals = vec!["Sum".to_string()];
    totals.extend(
        result
            .security_dividends_for_year(year)
            .iter()
            .map(|d| format_amount(d.amount)),
    );
    if let Some(summary) = result.summary_for(year) {
        totals.push(format_amount(summary.yearly_dividend));
    }
    table.row(totals);

    table.render(out);
    out.push('\n');
}

fn render_trend(result: &SimulationResult, out: &mut String) {
    let _ = writeln!(out, "== Cumulative dividends ==");
    let mut table = Table::new(["Period", "Dividend", "Cumulative"]);
    for record in &result.monthly {
        table.row(vec![
            record.period_label(),
            format_amount(record.total_dividend),
            format_amount(record.cumulative_dividend_all_time),
        ]);
    }
    table.render(out);
    out.push('\n');
}

fn render_yearly(result: &SimulationResult, out: &mut String) {
    let _ = writeln!(out, "== Investment and return by year ==");
    let mut table = Table::new(["Year", "Invested to date", "Yearly dividend", "Return"]);
    for summary in &result.yearly {
        table.row(vec![
            summary.year.to_string(),
            format_amount(summary.cumulative_investment),
            format_amount(summary.yearly_dividend),
            format_percent(summary.yearly_return_rate_percent),
        ]);
    }
    table.render(out);
}
