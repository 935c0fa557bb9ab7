//! Execution result types for operations

use crate::LogEntry;

/// How one execution went, and whether it leaves an activity record.
///
/// Rejections always carry an entry; only successful no-ops go unrecorded.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// The context changed
    Logged { value: T, log_entry: LogEntry },
    /// Success that changed nothing (self-moves, repeated drag-over ticks)
    Unlogged { value: T },
    /// The operation was rejected and the context left as it was
    Failed { error: E, log_entry: LogEntry },
}

impl<T, E> ExecutionResult<T, E> {
    /// The activity record, if this execution produces one
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Logged { log_entry, .. } | Self::Failed { log_entry, .. } => Some(log_entry),
            Self::Unlogged { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Separate the caller-facing result from the activity record
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), Some(log_entry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(op: &str) -> LogEntry {
        LogEntry::success(op, json!({}), json!({}), 0)
    }

    #[test]
    fn test_logged_splits_into_value_and_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Logged {
            value: 7,
            log_entry: entry("add column"),
        };
        assert_eq!(result.log_entry().map(|l| l.op.as_str()), Some("add column"));

        let (value, log) = result.split();
        assert_eq!(value, Ok(7));
        assert_eq!(log.map(|l| l.op), Some("add column".to_string()));
    }

    #[test]
    fn test_unlogged_has_no_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Unlogged { value: 1 };
        assert!(result.log_entry().is_none());
        assert!(!result.is_failure());
        assert_eq!(result.split(), (Ok(1), None));
    }

    #[test]
    fn test_failure_keeps_its_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Failed {
            error: "gone".into(),
            log_entry: entry("move task"),
        };
        assert!(result.is_failure());

        let (value, log) = result.split();
        assert_eq!(value, Err("gone".to_string()));
        assert!(log.is_some());
    }
}
