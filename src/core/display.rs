use crate::domain::model::{GutiNumber, PredictionResult};
use chrono::{DateTime, TimeZone, Timelike};

const HEADERS: [&str; 5] = ["Date", "First Round", "Second Round", "Prediction", "R/W"];

pub const GUTI_BANNER: &str = "F/R & S/R 4 Guti Number our prediction will update after 1 to 2 pm";
pub const NO_PREDICTIONS: &str = "No predictions available";

/// Release status for the day, by local hour.
pub fn schedule_banner(hour: u32) -> &'static str {
    if hour < 13 {
        "Result will show after 1 PM"
    } else if hour < 16 {
        "Second round result will show after 4 PM"
    } else {
        "Today's results are complete"
    }
}

pub fn schedule_banner_at<Tz: TimeZone>(now: &DateTime<Tz>) -> &'static str {
    schedule_banner(now.hour())
}

pub fn render_results_table(results: &[PredictionResult]) -> String {
    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|r| {
            [
                r.date.clone(),
                r.first_round.clone(),
                r.second_round.clone(),
                r.prediction.clone(),
                r.verdict.glyph().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

pub fn render_guti_card(guti: Option<&GutiNumber>) -> String {
    let Some(guti) = guti else {
        return NO_PREDICTIONS.to_string();
    };

    let tokens = guti
        .numbers
        .iter()
        .map(|n| format!("[ {:>2} ]", n))
        .collect::<Vec<_>>()
        .join(" ");

    format!("Date: {}\n4 Guti Prediction:\n{}", guti.date, tokens)
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            // pad by characters, the verdict glyphs are multi-byte
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
