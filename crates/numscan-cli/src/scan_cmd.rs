use numscan::{
    Basis, NumericMatch, PageText, RankedResult, ScanError, ScanOptions, SuffixScale, rank,
    scan_pages, top_n_from_arg,
};

use crate::cli::{Cli, OutputFormat};
use crate::shared::{
    ProgressReporter, csv_escape, fail, format_grouped, open_pdf, parse_pages, resolve_pages,
};

pub fn run(cli: &Cli) -> Result<(), i32> {
    // Flags are checked before the file is touched.
    let options = build_options(cli).map_err(|e| fail(&e))?;
    let selection = parse_pages(cli.pages.as_deref())?;

    let pdf = open_pdf(&cli.file, cli.password.as_deref())?;
    let page_indices = resolve_pages(selection.as_ref(), pdf.page_count())?;

    let progress = ProgressReporter::new(page_indices.len());
    let mut pages: Vec<PageText> = Vec::with_capacity(page_indices.len());
    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);
        let page = pdf.page_text(idx).map_err(|e| {
            progress.finish();
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;
        pages.push(page);
    }
    progress.finish();

    let scanned = scan_pages(&pages, &options).map_err(|e| fail(&e))?;
    for warning in &scanned.warnings {
        eprintln!("Warning: {warning}");
    }
    tracing::info!(
        pages = pages.len(),
        matches = scanned.value.len(),
        "scan complete"
    );

    let reports: Vec<RankedResult> = cli
        .report
        .bases()
        .iter()
        .map(|&basis| rank(scanned.value.clone(), options.top_n, basis, options.rank_by))
        .collect();

    match cli.format {
        OutputFormat::Text => write_text(&reports),
        OutputFormat::Json => write_json(&reports),
        OutputFormat::Csv => write_csv(&reports),
    }
}

/// Translate CLI flags into validated scan options.
fn build_options(cli: &Cli) -> Result<ScanOptions, ScanError> {
    let mut options = ScanOptions {
        top_n: top_n_from_arg(cli.top)?,
        detect_page_scale: cli.detect_scale,
        rank_by: cli.rank_by.to_rank_by(),
        ..ScanOptions::default()
    };
    if cli.no_suffix {
        options.suffixes = SuffixScale::none();
    }
    for &(page, factor) in &cli.page_scale {
        options = options.page_scale(page, factor);
    }
    options.validate()?;
    Ok(options)
}

fn write_text(reports: &[RankedResult]) -> Result<(), i32> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("--- Top {} {} values ---", report.len(), report.basis.as_str());
        if report.is_empty() {
            println!("(no numbers found)");
        }
        for (rank, m) in report.iter().enumerate() {
            println!(
                "{}. {} (page {}) [{}]",
                rank + 1,
                format_grouped(report.basis.value_of(m)),
                m.page_number,
                m.raw_text,
            );
        }
    }
    Ok(())
}

fn write_json(reports: &[RankedResult]) -> Result<(), i32> {
    let json: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            serde_json::json!({
                "report": report.basis.as_str(),
                "rank_by": report.rank_by,
                "top": report.len(),
                "results": report.entries,
            })
        })
        .collect();

    let json_str = serde_json::to_string_pretty(&json).map_err(|e| {
        eprintln!("Error: failed to serialize results: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(reports: &[RankedResult]) -> Result<(), i32> {
    println!("report,rank,value,page,raw,suffix,scale");
    for report in reports {
        for (rank, m) in report.iter().enumerate() {
            println!("{}", csv_row(report.basis, rank + 1, m));
        }
    }
    Ok(())
}

fn csv_row(basis: Basis, rank: usize, m: &NumericMatch) -> String {
    let suffix = m.suffix_applied.map(|s| s.to_string()).unwrap_or_default();
    let scale = m.scale_applied.map(|s| s.to_string()).unwrap_or_default();
    format!(
        "{},{},{},{},{},{},{}",
        basis.as_str(),
        rank,
        basis.value_of(m),
        m.page_number,
        csv_escape(&m.raw_text),
        suffix,
        scale,
    )
}
