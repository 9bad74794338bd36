//! One-line status output for the non-interactive commands
//!
//! `export-sample` and `init-config` report what they wrote; a broken config
//! file is reported before falling back to defaults.

/// Severity tag printed in front of a status line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Info,
    Warn,
    Success,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Status::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Status::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Format `title`, with `details` tab-separated when present.
pub fn status_line(status: Status, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", status.tag(), title)
    } else {
        format!("{} {}\t {}", status.tag(), title, details)
    }
}

pub fn print_status(status: Status, title: &str, details: &str) {
    println!("{}", status_line(status, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status($crate::cli_messages::Status::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status($crate::cli_messages::Status::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_status($crate::cli_messages::Status::Success, $title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_with_details() {
        let line = status_line(Status::Success, "Config written", "/tmp/config.json");
        assert!(line.contains("[SUCCESS]"));
        assert!(line.ends_with("Config written\t /tmp/config.json"));
    }

    #[test]
    fn test_status_line_without_details() {
        assert!(status_line(Status::Warn, "Ignoring config file", "").ends_with("Ignoring config file"));
    }
}
