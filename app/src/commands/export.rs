use clap::ValueEnum;
use std::path::Path;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Txt,
    Json,
}

/// Write the collected rows to `path`. Failures are reported, not returned.
pub fn export_records(state: &AppState, path: &Path, format: ExportFormat) -> bool {
    let result = match format {
        ExportFormat::Txt => state.sink.export_txt(path, &state.generated),
        ExportFormat::Json => state.sink.export_json(path, &state.generated),
    };

    match result {
        Ok(_) => {
            println!("📁 Exported to: {}", path.display());
            true
        }
        Err(engine::Error::NothingToExport) => {
            println!("⚠️ No data to export.");
            false
        }
        Err(e) => {
            tracing::error!("{}", e);
            println!("❌ Export failed: {}", e);
            false
        }
    }
}
