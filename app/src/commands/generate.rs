use clap::Args;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use engine::{
    AttemptOutcome, CountrySelection, GenerationEvent, GenerationRequest, NameMode, NumberingPlan,
    RunSummary,
};

use super::export::{export_records, ExportFormat};
use crate::state::AppState;

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Country code (KH, TH, US, VN, JP) or `all` to draw one per attempt
    #[arg(long, value_name = "code", default_value = "KH")]
    pub country: CountrySelection,
    /// `Auto`, `None` or a language name. Defaults to `Auto` for a single
    /// country and `None` for `all`.
    #[arg(long, value_name = "mode")]
    pub language: Option<NameMode>,
    /// Number of attempts, accepted and rejected combined
    #[arg(long, short = 'n', value_name = "count")]
    pub count: Option<u32>,
    /// Stop the run once this much time has passed
    #[arg(long = "max-duration-ms", value_name = "ms")]
    pub max_duration_ms: Option<u64>,
    /// Write the collected rows here once the run completes
    #[arg(long, value_name = "path")]
    pub export: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ExportFormat::Txt)]
    pub format: ExportFormat,
    /// Only print the completion line
    #[arg(long)]
    pub quiet: bool,
}

impl GenerateArgs {
    fn request(&self, state: &AppState) -> engine::Result<GenerationRequest> {
        let count = state
            .config
            .check_count(self.count.unwrap_or(state.config.default_count))?;
        let names = self.language.unwrap_or(match self.country {
            CountrySelection::All => NameMode::None,
            CountrySelection::Single(_) => NameMode::Auto,
        });
        Ok(GenerationRequest {
            count,
            countries: self.country,
            names,
        })
    }
}

/// Start a background run, clearing the rows of any previous run.
pub fn start_generation(
    state: &mut AppState,
    request: GenerationRequest,
) -> Option<Receiver<GenerationEvent>> {
    match state
        .runner
        .start(request, state.sink.clone(), NumberingPlan)
    {
        Ok(rx) => {
            state.generated.clear();
            Some(rx)
        }
        Err(engine::Error::AlreadyRunning) => {
            println!("⚠️ Generation already in progress.");
            None
        }
        Err(e) => {
            tracing::error!("Failed to start generation: {}", e);
            println!("❌ Could not start generation: {}", e);
            None
        }
    }
}

pub fn stop_generation(state: &AppState) {
    if state.runner.stop() {
        println!("⏹️ Stopped by user");
    } else {
        println!("⚠️ No generation in progress");
    }
}

/// Drain events until the run completes, stopping it once `deadline` passes.
pub fn drain_events(
    state: &mut AppState,
    rx: &Receiver<GenerationEvent>,
    deadline: Option<Instant>,
    quiet: bool,
) -> Option<RunSummary> {
    let mut stop_requested = false;
    loop {
        let event = match deadline.filter(|_| !stop_requested) {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(remaining.max(Duration::from_millis(1))) {
                    Ok(event) => event,
                    Err(RecvTimeoutError::Timeout) => {
                        stop_generation(state);
                        stop_requested = true;
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => return None,
                }
            }
            None => match rx.recv() {
                Ok(event) => event,
                Err(_) => return None,
            },
        };

        match event {
            GenerationEvent::Attempt(AttemptOutcome::Accepted(record)) => {
                if !quiet {
                    match record.name {
                        Some(_) => println!("✅ {}", record.line()),
                        None => println!("✅ {}: {}", record.country, record.phone),
                    }
                }
                // `Accepted` carries the same name and phone as the `Row` that
                // follows it, plus the country that the JSON export needs.
                state.generated.push(record);
            }
            GenerationEvent::Attempt(AttemptOutcome::Rejected { country }) => {
                if !quiet {
                    println!("❌ Invalid phone for {}", country);
                }
            }
            // Already collected from `Accepted` above.
            GenerationEvent::Row { .. } => {}
            GenerationEvent::PersistFailed { country, message } => {
                println!("❌ Could not save {} record: {}", country, message);
            }
            GenerationEvent::Completed(summary) => {
                println!(
                    "✅ Generation completed ({} attempts, {} valid, {} invalid)",
                    summary.attempts, summary.accepted, summary.rejected
                );
                return Some(summary);
            }
        }
    }
}

pub fn generate(state: &mut AppState, args: &GenerateArgs) -> anyhow::Result<()> {
    let request = args.request(state)?;
    let deadline = args
        .max_duration_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    let Some(rx) = start_generation(state, request) else {
        return Ok(());
    };
    drain_events(state, &rx, deadline, args.quiet);
    state.runner.join();

    if let Some(path) = &args.export {
        export_records(state, path, args.format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CountryCode, GeneratorConfig};
    use std::fs;

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState::new(GeneratorConfig {
            output_dir: dir.join("phones_output"),
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    fn args(country: &str, count: u32) -> GenerateArgs {
        GenerateArgs {
            country: country.parse().unwrap(),
            language: None,
            count: Some(count),
            max_duration_ms: None,
            export: None,
            format: ExportFormat::Txt,
            quiet: true,
        }
    }

    #[test]
    fn test_default_name_mode_follows_selection() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());

        let single = args("US", 5).request(&state).unwrap();
        assert_eq!(single.names, NameMode::Auto);
        assert_eq!(single.countries, CountrySelection::Single(CountryCode::Us));

        let all = args("all", 5).request(&state).unwrap();
        assert_eq!(all.names, NameMode::None);
    }

    #[test]
    fn test_count_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        assert!(args("US", 0).request(&state).is_err());
        assert!(args("US", 10_001).request(&state).is_err());
    }

    #[test]
    fn test_generate_collects_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let export_path = dir.path().join("export.txt");
        let mut generate_args = args("US", 40);
        generate_args.export = Some(export_path.clone());

        generate(&mut state, &generate_args).unwrap();

        assert!(!state.runner.is_running());
        let persisted = fs::read_to_string(state.sink.country_file(CountryCode::Us))
            .unwrap_or_default();
        assert_eq!(persisted.lines().count(), state.generated.len());
        if !state.generated.is_empty() {
            let exported = fs::read_to_string(&export_path).unwrap();
            assert_eq!(exported, persisted);
        }
    }

    #[test]
    fn test_drain_collects_one_row_per_accepted_record() {
        use engine::{GeneratedRecord, PersonName, ValidPhone};
        use std::sync::mpsc;

        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let record = GeneratedRecord::new(
            ValidPhone {
                country: CountryCode::Jp,
                number: "+819012345678".into(),
            },
            Some(PersonName::new("Yuki", "Sato")),
        );
        let summary = RunSummary {
            attempts: 2,
            accepted: 1,
            rejected: 1,
            ..RunSummary::default()
        };

        let (tx, rx) = mpsc::channel();
        tx.send(GenerationEvent::Attempt(AttemptOutcome::Accepted(record.clone())))
            .unwrap();
        tx.send(GenerationEvent::Row {
            name: record.display_name(),
            phone: record.phone.clone(),
        })
        .unwrap();
        tx.send(GenerationEvent::Attempt(AttemptOutcome::Rejected {
            country: CountryCode::Jp,
        }))
        .unwrap();
        tx.send(GenerationEvent::Completed(summary)).unwrap();

        assert_eq!(drain_events(&mut state, &rx, None, true), Some(summary));
        assert_eq!(state.generated, vec![record]);
        assert_eq!(state.generated[0].display_name(), "Yuki Sato");
    }
}
