//! Formatters turning SIE responses into agent-readable text.
//!
//! All of these are total functions: a malformed numeric string is passed
//! through untouched, missing fields fall back to `Unknown ...` labels,
//! and degenerate envelopes collapse to a per-domain sentinel string.

use sie_async::types::{Observation, SeriesResponse};

fn date(observation: &Observation) -> &str {
    observation.date.as_deref().unwrap_or("Unknown date")
}

fn raw_value(observation: &Observation) -> &str {
    observation.value.as_deref().unwrap_or("N/A")
}

/// Suffix `%` onto values that parse as numbers; leave everything else alone.
fn percent_value(observation: &Observation) -> String {
    let raw = raw_value(observation);
    if raw.parse::<f64>().is_ok() {
        format!("{raw}%")
    } else {
        raw.to_string()
    }
}

/// Values >= 1000 get thousands separators and two decimals; smaller or
/// non-numeric values keep their raw form.
fn financial_value(observation: &Observation) -> String {
    let raw = raw_value(observation);
    match raw.parse::<f64>() {
        Ok(v) if v >= 1000.0 => group_thousands(v),
        _ => raw.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Format exchange-rate style data: all points when the series is short,
/// otherwise the first five, an elision marker, and the last five.
pub fn exchange_rate(response: &SeriesResponse) -> String {
    let Some(envelope) = &response.bmx else {
        return "No data available".to_string();
    };
    if envelope.series.is_empty() {
        return "No series data found".to_string();
    }

    let mut lines = Vec::new();
    for series in &envelope.series {
        let title = series.title.as_deref().unwrap_or("Unknown Series");
        let id = series.id.as_deref().unwrap_or("Unknown ID");
        lines.push(format!("Series: {title} (ID: {id})"));

        let observations = &series.observations;
        if observations.is_empty() {
            lines.push("  No data points available".to_string());
        } else {
            lines.push(format!("  Total data points: {}", observations.len()));
            if observations.len() <= 10 {
                for obs in observations {
                    lines.push(format!("  {}: {}", date(obs), raw_value(obs)));
                }
            } else {
                for obs in &observations[..5] {
                    lines.push(format!("  {}: {}", date(obs), raw_value(obs)));
                }
                lines.push(format!(
                    "  ... ({} more data points) ...",
                    observations.len() - 10
                ));
                for obs in &observations[observations.len() - 5..] {
                    lines.push(format!("  {}: {}", date(obs), raw_value(obs)));
                }
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Shared shape of the percent-suffixing formatters: recent window only,
/// numeric values suffixed with `%`.
fn percent_series(
    response: &SeriesResponse,
    emoji: &str,
    no_data: &str,
    no_series: &str,
    window: usize,
) -> String {
    let Some(envelope) = &response.bmx else {
        return no_data.to_string();
    };
    if envelope.series.is_empty() {
        return no_series.to_string();
    }

    let mut lines = Vec::new();
    for series in &envelope.series {
        let title = series.title.as_deref().unwrap_or("Unknown Series");
        let id = series.id.as_deref().unwrap_or("Unknown ID");
        lines.push(format!("{emoji} {title} (ID: {id})"));

        let observations = &series.observations;
        if observations.is_empty() {
            lines.push("  No data points available".to_string());
        } else {
            lines.push(format!("  Total data points: {}", observations.len()));
            let shown = observations.len().min(window);
            for obs in &observations[observations.len() - shown..] {
                lines.push(format!("  {}: {}", date(obs), percent_value(obs)));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Format inflation data: last ten points, percent-suffixed.
pub fn inflation(response: &SeriesResponse) -> String {
    percent_series(
        response,
        "\u{1f4ca}",
        "No inflation data available",
        "No inflation series found",
        10,
    )
}

/// Format interest-rate data: last ten points, percent-suffixed.
pub fn interest_rate(response: &SeriesResponse) -> String {
    percent_series(
        response,
        "\u{1f4c8}",
        "No interest rate data available",
        "No interest rate series found",
        10,
    )
}

/// Format unemployment data: wider window (twelve points) to show the
/// labor-market trend, percent-suffixed.
pub fn unemployment(response: &SeriesResponse) -> String {
    percent_series(
        response,
        "\u{1f465}",
        "No unemployment data available",
        "No unemployment series found",
        12,
    )
}

/// Format reserve/asset style data: unit line when present, last ten
/// points, large values grouped with thousands separators.
pub fn financial(response: &SeriesResponse) -> String {
    let Some(envelope) = &response.bmx else {
        return "No financial data available".to_string();
    };
    if envelope.series.is_empty() {
        return "No financial series found".to_string();
    }

    let mut lines = Vec::new();
    for series in &envelope.series {
        let title = series.title.as_deref().unwrap_or("Unknown Series");
        let id = series.id.as_deref().unwrap_or("Unknown ID");
        lines.push(format!("\u{1f4b0} {title} (ID: {id})"));
        if let Some(unit) = series.unit.as_deref().filter(|u| !u.is_empty()) {
            lines.push(format!("  Unit: {unit}"));
        }

        let observations = &series.observations;
        if observations.is_empty() {
            lines.push("  No data points available".to_string());
        } else {
            lines.push(format!("  Total data points: {}", observations.len()));
            let shown = observations.len().min(10);
            for obs in &observations[observations.len() - shown..] {
                lines.push(format!("  {}: {}", date(obs), financial_value(obs)));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Format series metadata: one labeled line per descriptive field.
pub fn metadata(response: &SeriesResponse) -> String {
    let Some(envelope) = &response.bmx else {
        return "No series metadata found".to_string();
    };
    if envelope.series.is_empty() {
        return "No series metadata found".to_string();
    }

    let mut lines = Vec::new();
    for series in &envelope.series {
        lines.push(format!(
            "Series ID: {}",
            series.id.as_deref().unwrap_or("Unknown ID")
        ));
        lines.push(format!(
            "Title: {}",
            series.title.as_deref().unwrap_or("Unknown title")
        ));
        lines.push(format!(
            "Start Date: {}",
            series.start_date.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "End Date: {}",
            series.end_date.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Frequency: {}",
            series.frequency.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Type: {}",
            series.figure_type.as_deref().unwrap_or("Unknown")
        ));
        lines.push(format!(
            "Unit: {}",
            series.unit.as_deref().unwrap_or("Unknown")
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}
