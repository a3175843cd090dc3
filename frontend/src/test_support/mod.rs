#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod timing {
    use std::time::Duration;

    /// Paused-clock timers fire on millisecond ticks, so allow one tick of slack.
    pub fn assert_waited(start: tokio::time::Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed <= expected + Duration::from_millis(1),
            "expected ~{:?}, waited {:?}",
            expected,
            elapsed
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod logging {
    use std::sync::{Mutex, Once};

    static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
    static INSTALL: Once = Once::new();

    struct Capture;

    impl log::Log for Capture {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    /// Installs a process-wide logger that keeps every record. Tests share it,
    /// so filter on something unique to the test.
    pub fn capture() {
        INSTALL.call_once(|| {
            if log::set_logger(&Capture).is_ok() {
                log::set_max_level(log::LevelFilter::Trace);
            }
        });
    }

    pub fn records_containing(needle: &str) -> Vec<(log::Level, String)> {
        RECORDS
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(_, message)| message.contains(needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
