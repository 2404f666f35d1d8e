use std::io::Write;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{} [{:5}] {} {}", timestamp(), record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn timestamp() -> String {
    let format = time_format::DateFormat::Custom("%H:%M:%S.{ms}");
    let Ok(now) = time_format::now_ms() else {
        return "???".to_string();
    };
    time_format::format_common_ms_local(now, format).unwrap_or_else(|_| "???".to_string())
}

static LOGGER: Logger = Logger;

/// Initialise the global logger, writing to stderr.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}
