//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use factcalc_core::FactorialValue;

/// Digits kept at each end when a long exact result is truncated.
const TRUNCATE_EDGE: usize = 50;

/// Format a factorial for display, truncating long exact values unless verbose.
#[must_use]
pub fn format_result(value: &FactorialValue, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && value.is_exact() && s.len() > 2 * TRUNCATE_EDGE {
        format!(
            "{}...{} ({} digits)",
            &s[..TRUNCATE_EDGE],
            &s[s.len() - TRUNCATE_EDGE..],
            s.len()
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Write the full result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, value: &FactorialValue) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}
