use std::fmt;
use std::sync::Arc;

use log::{Level, Log, Metadata, Record};

const TARGET: &str = "regsel::trainer";

/// Log sink handed to the trainer.
///
/// The default forwards to whatever logger the process installed through the
/// `log` facade; tests and embedders can pass their own [`Log`] implementation.
#[derive(Clone)]
pub struct TrainingLogger {
    sink: Arc<dyn Log>,
}

impl TrainingLogger {
    pub fn new(sink: Arc<dyn Log>) -> Self {
        TrainingLogger { sink }
    }

    /// Forward to the process-wide `log` logger.
    pub fn global() -> Self {
        TrainingLogger::new(Arc::new(FacadeLog))
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder().level(level).target(TARGET).build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module_path!()))
                .build(),
        );
    }
}

impl Default for TrainingLogger {
    fn default() -> Self {
        TrainingLogger::global()
    }
}

impl fmt::Debug for TrainingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainingLogger").finish_non_exhaustive()
    }
}

struct FacadeLog;

impl Log for FacadeLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}
