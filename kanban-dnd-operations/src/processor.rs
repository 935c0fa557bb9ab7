//! Operation processor: runs operations and records what they did

use crate::{Execute, ExecutionResult, LogEntry, Outcome};
use serde::Serialize;
use std::fmt::Display;
use std::time::Instant;

/// A context that keeps an activity log.
pub trait LogSink {
    fn record(&mut self, entry: LogEntry);
}

/// Runs operations against a context, attributing them to an optional actor.
///
/// Changes and rejections are recorded through [`LogSink`]; successful no-ops
/// are not, since drag-over can produce them on every pointer tick.
#[derive(Debug, Clone, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
}

impl OperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every processed operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute `op` and return the execution result without recording it
    pub fn run<C, E, O>(&self, op: &O, ctx: &mut C) -> ExecutionResult<O::Output, E>
    where
        O: Execute<C, E> + Serialize,
        O::Output: Outcome + Serialize,
        E: Display,
    {
        let start = Instant::now();
        let result = op.execute(ctx);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(value) if value.is_change() => {
                let input = serde_json::to_value(op).unwrap_or_default();
                let output = serde_json::to_value(&value).unwrap_or_default();
                let entry = LogEntry::new(
                    op.op_string(),
                    input,
                    output,
                    self.actor.clone(),
                    duration_ms,
                );
                ExecutionResult::Logged {
                    value,
                    log_entry: entry,
                }
            }
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(error) => {
                let input = serde_json::to_value(op).unwrap_or_default();
                let mut entry =
                    LogEntry::failure(op.op_string(), input, &error.to_string(), duration_ms);
                entry.actor = self.actor.clone();
                ExecutionResult::Failed {
                    error,
                    log_entry: entry,
                }
            }
        }
    }

    /// Execute `op`, record its log entry in `ctx`, and return the plain result
    pub fn process<C, E, O>(&self, op: &O, ctx: &mut C) -> Result<O::Output, E>
    where
        C: LogSink,
        O: Execute<C, E> + Serialize,
        O::Output: Outcome + Serialize,
        E: Display,
    {
        let executed = self.run(op, ctx);
        match (&executed, executed.log_entry()) {
            (ExecutionResult::Failed { error, .. }, Some(entry)) => {
                tracing::debug!(op = %entry.op, %error, "operation rejected")
            }
            (_, Some(entry)) => tracing::debug!(
                op = %entry.op,
                duration_ms = entry.duration_ms,
                "operation applied"
            ),
            (_, None) => tracing::trace!(op = %op.op_string(), "operation left board unchanged"),
        }

        let (result, log_entry) = executed.split();
        if let Some(entry) = log_entry {
            ctx.record(entry);
        }
        result
    }
}
