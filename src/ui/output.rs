//! User-facing message output
//!
//! Messages go either to the terminal (the `delete`, `pick`, and `config`
//! subcommands) or to the status bar of the interactive shell. Both sides
//! implement [`OutputWriter`] so reporting code does not care which.

use colored::Colorize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Status bar messages kept before the oldest are dropped
const MAX_MESSAGES: usize = 64;

/// Sink for user-facing messages
///
/// # Examples
///
/// ```no_run
/// use fdel::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Deleted: notes.txt");
/// output.error("Failed to delete build: directory not empty");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a plain message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write a secondary message
    fn info(&self, message: &str);

    /// Drop pending messages (status bar only)
    fn clear(&self);
}

/// Colored stdout/stderr output for subcommands
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message.yellow());
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {}
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain message
    Normal,
    /// Something failed
    Error,
    /// Something succeeded
    Success,
    /// Something needs attention
    Warning,
    /// Secondary information
    Info,
}

#[derive(Debug)]
struct TimedMessage {
    level: MessageLevel,
    text: String,
    at: Instant,
}

/// Buffered messages for the shell's status bar
///
/// Messages expire after a TTL; only unexpired messages are returned.
///
/// # Examples
///
/// ```
/// use fdel::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.success("Deleted 2 item(s)");
///
/// let (level, text) = writer.latest_message().unwrap();
/// assert_eq!(level, MessageLevel::Success);
/// assert_eq!(text, "Deleted 2 item(s)");
/// ```
#[derive(Debug)]
pub struct StatusBarWriter {
    messages: Mutex<VecDeque<TimedMessage>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Default message lifetime
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

    /// Create a writer with the default TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    /// Create a writer with a custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Mutex::new(VecDeque::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<TimedMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self, message: &TimedMessage, now: Instant) -> bool {
        now.saturating_duration_since(message.at) < self.ttl
    }

    /// Unexpired messages, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        self.lock()
            .iter()
            .filter(|m| self.is_live(m, now))
            .map(|m| (m.level, m.text.clone()))
            .collect()
    }

    /// The newest unexpired message
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        self.lock()
            .iter()
            .rev()
            .find(|m| self.is_live(m, now))
            .map(|m| (m.level, m.text.clone()))
    }

    /// Number of unexpired messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        self.lock().iter().filter(|m| self.is_live(m, now)).count()
    }

    /// Drop expired messages
    pub fn prune(&self) {
        let now = Instant::now();
        let ttl = self.ttl;
        self.lock()
            .retain(|m| now.saturating_duration_since(m.at) < ttl);
    }

    fn push(&self, level: MessageLevel, text: &str) {
        let mut messages = self.lock();
        messages.push_back(TimedMessage {
            level,
            text: text.to_string(),
            at: Instant::now(),
        });
        while messages.len() > MAX_MESSAGES {
            messages.pop_front();
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_keeps_order() {
        let writer = StatusBarWriter::new();
        writer.success("Deleted a.txt");
        writer.error("Failed to delete b.txt");
        writer.warning("Deleted 1 item(s), 1 failed");

        let messages = writer.recent_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (MessageLevel::Success, "Deleted a.txt".to_string()));
        assert_eq!(messages[1].0, MessageLevel::Error);
        assert_eq!(messages[2].0, MessageLevel::Warning);
    }

    #[test]
    fn test_status_bar_clear() {
        let writer = StatusBarWriter::new();
        writer.write("one");
        writer.info("two");
        assert_eq!(writer.message_count(), 2);

        writer.clear();
        assert_eq!(writer.message_count(), 0);
        assert!(writer.latest_message().is_none());
    }

    #[test]
    fn test_status_bar_ttl() {
        let writer = StatusBarWriter::with_ttl(Duration::from_millis(30));
        writer.write("short lived");
        assert_eq!(writer.message_count(), 1);

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(writer.message_count(), 0);
        writer.prune();
        assert!(writer.recent_messages().is_empty());
    }

    #[test]
    fn test_status_bar_is_bounded() {
        let writer = StatusBarWriter::new();
        for i in 0..(MAX_MESSAGES + 10) {
            writer.write(&format!("message {i}"));
        }
        assert_eq!(writer.message_count(), MAX_MESSAGES);
        assert_eq!(
            writer.latest_message().map(|(_, text)| text),
            Some(format!("message {}", MAX_MESSAGES + 9))
        );
    }
}
