//! Log capture for tests. Records are kept per thread, so parallel tests do
//! not see each other's output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's records.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed in tests");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Messages logged on this thread at exactly `level` since the last `capture_logs`.
pub fn captured(level: Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
