use engine::{FileSink, GeneratedRecord, GeneratorConfig, GenerationRunner};

/// Foreground state shared by the commands
pub struct AppState {
    pub config: GeneratorConfig,
    pub sink: FileSink,
    pub runner: GenerationRunner,
    /// Rows collected from the current run, in arrival order
    pub generated: Vec<GeneratedRecord>,
}

impl AppState {
    pub fn new(config: GeneratorConfig) -> engine::Result<Self> {
        let sink = FileSink::new(&config)?;
        Ok(Self {
            config,
            sink,
            runner: GenerationRunner::new(),
            generated: Vec::new(),
        })
    }
}
