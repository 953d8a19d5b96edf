//! Generation Runner - background thread that generates, validates and
//! persists records for a fixed number of attempts

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

use crate::country::{CountryCode, CountrySelection};
use crate::error::{Error, Result};
use crate::names::NameMode;
use crate::phone::random_phone;
use crate::record::GeneratedRecord;
use crate::sink::FileSink;
use crate::validator::{validate, PhoneValidator};

/// What one run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    /// Attempts to make, accepted and rejected combined
    pub count: u32,
    pub countries: CountrySelection,
    pub names: NameMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttemptOutcome {
    Accepted(GeneratedRecord),
    Rejected { country: CountryCode },
}

/// Notifications sent from the worker to whoever drains the channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GenerationEvent {
    Attempt(AttemptOutcome),
    /// Tabular form of an accepted record
    Row { name: String, phone: String },
    PersistFailed { country: CountryCode, message: String },
    Completed(RunSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub attempts: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub persist_failures: u32,
    /// The liveness flag was cleared before all attempts were made
    pub cancelled: bool,
}

/// Run the generation loop on the current thread.
///
/// `running` is checked once before each attempt. Nothing escapes the loop:
/// rejections and write failures become events, and a `Completed` event is
/// always sent last.
pub fn run_generation<V: PhoneValidator + ?Sized>(
    request: &GenerationRequest,
    sink: &FileSink,
    validator: &V,
    running: &AtomicBool,
    events: &Sender<GenerationEvent>,
) -> RunSummary {
    let mut rng = rand::thread_rng();
    let mut summary = RunSummary::default();

    for _ in 0..request.count {
        if !running.load(Ordering::Acquire) {
            summary.cancelled = true;
            break;
        }
        summary.attempts += 1;

        let country = request.countries.resolve(&mut rng);
        let Some(phone) = validate(validator, random_phone(country, &mut rng)) else {
            debug!("Invalid phone for {}", country);
            summary.rejected += 1;
            emit(events, GenerationEvent::Attempt(AttemptOutcome::Rejected { country }));
            continue;
        };

        let name = request.names.resolve(country, &mut rng);
        let record = GeneratedRecord::new(phone, name);
        summary.accepted += 1;

        emit(events, GenerationEvent::Attempt(AttemptOutcome::Accepted(record.clone())));
        emit(
            events,
            GenerationEvent::Row {
                name: record.display_name(),
                phone: record.phone.clone(),
            },
        );

        if let Err(e) = sink.append(&record) {
            warn!("Failed to write {} record: {}", country, e);
            summary.persist_failures += 1;
            emit(
                events,
                GenerationEvent::PersistFailed {
                    country,
                    message: e.to_string(),
                },
            );
        }
    }

    info!(
        "Generation finished: {} attempts, {} accepted, {} rejected{}",
        summary.attempts,
        summary.accepted,
        summary.rejected,
        if summary.cancelled { " (cancelled)" } else { "" }
    );
    emit(events, GenerationEvent::Completed(summary));
    summary
}

fn emit(events: &Sender<GenerationEvent>, event: GenerationEvent) {
    // Listeners are advisory; a dropped receiver does not stop the run.
    let _ = events.send(event);
}

/// Owns the single background generation thread
pub struct GenerationRunner {
    running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<RunSummary>>,
}

impl GenerationRunner {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start a run in the background and return the receiving end of its
    /// event channel.
    ///
    /// Fails with `Error::AlreadyRunning` while a previous run's thread is
    /// still alive, even if it has already been asked to stop.
    pub fn start<V>(
        &mut self,
        request: GenerationRequest,
        sink: FileSink,
        validator: V,
    ) -> Result<Receiver<GenerationEvent>>
    where
        V: PhoneValidator + 'static,
    {
        if self.is_running() {
            warn!("Generation already in progress");
            return Err(Error::AlreadyRunning);
        }
        // Reap a finished run before replacing its handle.
        self.join();

        info!(
            "Starting generation: {} attempts, country {}, names {}",
            request.count, request.countries, request.names
        );

        let running = Arc::new(AtomicBool::new(true));
        self.running = Arc::clone(&running);
        let (tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("phonegen-worker".into())
            .spawn(move || run_generation(&request, &sink, &validator, &running, &tx))?;

        self.thread_handle = Some(handle);
        Ok(rx)
    }

    /// Ask the active run to stop after its current attempt. Does not block.
    /// Returns false when nothing was running.
    pub fn stop(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        info!("Stopping generation...");
        self.running.store(false, Ordering::Release);
        true
    }

    /// Wait for the background thread and return its summary.
    pub fn join(&mut self) -> Option<RunSummary> {
        let handle = self.thread_handle.take()?;
        match handle.join() {
            Ok(summary) => Some(summary),
            Err(_) => {
                warn!("Generation thread panicked");
                None
            }
        }
    }

    /// True while a background thread exists and has not finished.
    pub fn is_running(&self) -> bool {
        self.thread_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for GenerationRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GenerationRunner {
    fn drop(&mut self) {
        self.stop();
        self.join();
    }
}
