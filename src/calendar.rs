//! Plain-text month grid, Sunday first.
//!
//! Layout: month title centred over 20 columns, a `Su Mo Tu We Th Fr Sa` header,
//! then one line per week with 2-wide day cells. Trailing spaces are stripped
//! from every line and each line ends with `\n`.

use crate::domain::DomainError;
use chrono::{Datelike, Month, NaiveDate};

const DAY_WIDTH: usize = 2;
const WEEK_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Centre `text` in `width` columns; when the padding is odd the extra space goes right.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let marg = width - len;
    let left = marg / 2 + (marg & width & 1);
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(marg - left)
    )
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Weeks of the month as rows of 7 cells; `None` marks days outside the month.
pub fn month_weeks(year: i32, month: u32) -> Result<Vec<[Option<u32>; 7]>, DomainError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::InvalidInput(format!("no such month: {}-{:02}", year, month))
    })?;
    let days = days_in_month(year, month).ok_or_else(|| {
        DomainError::InvalidInput(format!("month out of range: {}-{:02}", year, month))
    })?;

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = lead;
    for day in 1..=days {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col != 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

/// Format one month, e.g. `format_month(2024, 10)`.
pub fn format_month(year: i32, month: u32) -> Result<String, DomainError> {
    let name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| DomainError::InvalidInput(format!("month must be 1-12, got {}", month)))?
        .name();
    let weeks = month_weeks(year, month)?;

    let width = 7 * (DAY_WIDTH + 1) - 1;
    let mut out = String::new();
    out.push_str(center(&format!("{} {}", name, year), width).trim_end());
    out.push('\n');
    out.push_str(WEEK_HEADER);
    out.push('\n');
    for week in weeks {
        let line = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format!("{:>2}", day),
                None => " ".repeat(DAY_WIDTH),
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
