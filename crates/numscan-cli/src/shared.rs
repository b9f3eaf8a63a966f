use std::io::{self, IsTerminal, Write};
use std::path::Path;

use numscan::{Pdf, ScanError};

use crate::page_range::PageSelection;

/// Exit code for input errors (unreadable or invalid PDF).
pub const EXIT_INPUT: i32 = 1;
/// Exit code for configuration errors (bad flags).
pub const EXIT_CONFIG: i32 = 2;

/// Print an error to stderr and return the matching exit code.
pub fn fail(err: &ScanError) -> i32 {
    eprintln!("Error: {err}");
    match err {
        ScanError::ConfigError(_) => EXIT_CONFIG,
        _ => EXIT_INPUT,
    }
}

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed as a valid PDF.
pub fn open_pdf(file: &Path, password: Option<&str>) -> Result<Pdf, i32> {
    if !file.exists() {
        return Err(fail(&ScanError::input(format!(
            "file not found: {}",
            file.display()
        ))));
    }

    let result = match password {
        Some(pw) => Pdf::open_file_with_password(file, pw),
        None => Pdf::open_file(file),
    };
    result.map_err(|e| fail(&e))
}

/// Parse an optional page selection before the document is opened.
pub fn parse_pages(pages: Option<&str>) -> Result<Option<PageSelection>, i32> {
    pages
        .map(PageSelection::parse)
        .transpose()
        .map_err(|e| fail(&ScanError::ConfigError(e)))
}

/// Resolve an optional page selection into 0-indexed page indices.
///
/// If `selection` is `None`, returns all pages (0..page_count).
pub fn resolve_pages(
    selection: Option<&PageSelection>,
    page_count: usize,
) -> Result<Vec<usize>, i32> {
    match selection {
        Some(sel) => sel
            .resolve(page_count)
            .map_err(|e| fail(&ScanError::ConfigError(e))),
        None => Ok((0..page_count).collect()),
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Format a value with two decimals and thousands separators (`1,234,567.89`).
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and prints unsigned
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// A progress reporter that prints "Reading page N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` pages.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for page `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty {
            eprint!("\rReading page {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
