use chrono::{DateTime, Local};
use std::collections::{HashSet, VecDeque};

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Reads the `[LEVEL]` prefix written by the log capture layer. TRACE
    /// folds into Debug.
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "TRACE" | "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warn",
            LogLevel::Error => "Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn parse(raw: String) -> Self {
        let (level, message) = raw
            .strip_prefix('[')
            .and_then(|rest| rest.split_once("] "))
            .and_then(|(prefix, message)| {
                LogLevel::from_prefix(prefix).map(|level| (level, message.to_string()))
            })
            .unwrap_or((LogLevel::Info, raw));

        Self {
            timestamp: Local::now(),
            level,
            message,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
    visible_levels: HashSet<LogLevel>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
            visible_levels: [LogLevel::Info, LogLevel::Warn, LogLevel::Error]
                .into_iter()
                .collect(),
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry::parse(message));
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn is_level_visible(&self, level: LogLevel) -> bool {
        self.visible_levels.contains(&level)
    }

    pub fn set_level_visible(&mut self, level: LogLevel, visible: bool) {
        if visible {
            self.visible_levels.insert(level);
        } else {
            self.visible_levels.remove(&level);
        }
    }

    pub fn filtered_logs_reversed(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .rev()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }

    pub fn export_text(&self) -> String {
        self.logs
            .iter()
            .map(|entry| {
                format!(
                    "[{}] [{}] {}",
                    entry.format_timestamp(),
                    entry.level.label(),
                    entry.message
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
