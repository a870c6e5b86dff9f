use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match (&self.prefix, self.verbose) {
            (Some(prefix), true) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            (Some(prefix), false) => format!("[{}][{}] {}", timestamp, prefix, message),
            (None, true) => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
            (None, false) => format!("[{}] {}", timestamp, message),
        }
    }

    // stderr keeps log lines out of the board drawn on stdout
    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_variants() {
        let plain = Logger::new(None, false).format_line("src/game.rs", 7, "hello");
        assert!(plain.ends_with("] hello"));
        assert!(!plain.contains("game.rs"));

        let located = Logger::new(Some("Cli".to_string()), true).format_line("a/b/game.rs", 7, "hi");
        assert!(located.contains("[Cli][game.rs:7] hi"));
    }
}
