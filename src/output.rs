use crate::app::{ExportSummary, ProgressEvent, ProgressSink};

/// Prints the fixed progress milestones and the completion summary to
/// stdout. Diagnostics go to stderr via tracing.
pub struct ConsoleOutput;

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        println!("{}", event.message);
    }
}

impl ConsoleOutput {
    pub fn print_summary(summary: &ExportSummary) {
        println!(
            "wrote {} countries ({} cities) to {}",
            summary.countries, summary.cities, summary.output_path
        );
    }
}
