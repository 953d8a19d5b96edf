//! Per-country output files
//!
//! Every open-and-append goes through one shared lock so overlapping runs
//! never interleave partial lines in the same file.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::config::GeneratorConfig;
use crate::country::CountryCode;
use crate::error::{Error, Result};
use crate::record::GeneratedRecord;

#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
    file_suffix: String,
    lock: Arc<Mutex<()>>,
}

impl FileSink {
    /// Create the sink, making the output directory if it does not exist.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir)?;
        Ok(Self {
            output_dir: config.output_dir.clone(),
            file_suffix: config.file_suffix.clone(),
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn country_file(&self, country: CountryCode) -> PathBuf {
        self.output_dir.join(format!("{}{}", country.as_str(), self.file_suffix))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, a panicked writer leaves nothing to repair.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one record to its country file.
    pub fn append(&self, record: &GeneratedRecord) -> Result<()> {
        let line = format!("{}\n", record.line());
        let _guard = self.guard();
        fs::create_dir_all(&self.output_dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.country_file(record.country))?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Overwrite `path` with one line per record.
    pub fn export_txt(&self, path: impl AsRef<Path>, records: &[GeneratedRecord]) -> Result<usize> {
        let path = path.as_ref();
        if records.is_empty() {
            return Err(Error::NothingToExport);
        }
        let export_err = |source| Error::Export {
            path: path.to_path_buf(),
            source,
        };

        let _guard = self.guard();
        let mut writer = BufWriter::new(File::create(path).map_err(export_err)?);
        for record in records {
            writeln!(writer, "{}", record.line()).map_err(export_err)?;
        }
        writer.flush().map_err(export_err)?;

        info!("Exported {} records to {}", records.len(), path.display());
        Ok(records.len())
    }

    /// Overwrite `path` with a JSON document holding the records.
    pub fn export_json(&self, path: impl AsRef<Path>, records: &[GeneratedRecord]) -> Result<usize> {
        let path = path.as_ref();
        if records.is_empty() {
            return Err(Error::NothingToExport);
        }
        let export_err = |source| Error::Export {
            path: path.to_path_buf(),
            source,
        };

        let document = ExportDocument {
            version: 1,
            exported_at: Utc::now(),
            count: records.len(),
            records,
        };

        let _guard = self.guard();
        let mut writer = BufWriter::new(File::create(path).map_err(export_err)?);
        serde_json::to_writer_pretty(&mut writer, &document)
            .map_err(|e| export_err(e.into()))?;
        writer.flush().map_err(export_err)?;

        info!("Exported {} records to {}", records.len(), path.display());
        Ok(records.len())
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    version: u8,
    exported_at: DateTime<Utc>,
    count: usize,
    records: &'a [GeneratedRecord],
}
