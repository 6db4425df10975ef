//! Plain-text rendering of a scan report

use tallyloclib::ScanReport;

const SEPARATOR: &str = "-------------------------------------";

/// Render the summary block followed by the elapsed time in milliseconds.
pub fn render_report(report: &ScanReport) -> String {
    let summary = &report.summary;
    format!(
        "Source files: {}\n\
         Total lines: {}\n\
         Code lines: {}\n\
         Blank lines: {}\n\
         Comment lines: {}\n\
         {SEPARATOR}\n\
         Total Time is: {}\n",
        summary.file_count,
        summary.total(),
        summary.code(),
        summary.blank(),
        summary.comment(),
        report.elapsed.as_millis(),
    )
}
