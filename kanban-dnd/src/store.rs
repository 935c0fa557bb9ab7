//! The board state store.
//!
//! `BoardStore` owns the ordered column and task sequences. All mutation goes
//! through [`BoardStore::apply`], which runs a [`Command`] through the
//! operation processor: the command either fully applies or is rejected with
//! the board untouched, and every change or rejection lands in the activity
//! log.

use crate::command::{Command, Effect};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::id_generator::IdGenerator;
use crate::types::{BoardSnapshot, Column, ColumnId, EntityRef, Lane, Task, TaskId};
use kanban_dnd_operations::{LogEntry, LogSink, OperationProcessor};
use std::collections::{HashSet, VecDeque};
use tracing::warn;

/// Authoritative, in-memory board state
#[derive(Debug)]
pub struct BoardStore {
    pub(crate) columns: Vec<Column>,
    pub(crate) tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
    config: BoardConfig,
    processor: OperationProcessor,
    activity: VecDeque<LogEntry>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Empty board with default settings and sequential ids
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Empty board using the generator, templates and actor from `config`
    pub fn with_config(config: BoardConfig) -> Self {
        let processor = match &config.actor {
            Some(actor) => OperationProcessor::with_actor(actor.clone()),
            None => OperationProcessor::new(),
        };
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            ids: config.ids.generator(),
            config,
            processor,
            activity: VecDeque::new(),
        }
    }

    /// Replace the identifier generator
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Apply a command. The single mutation entry point.
    pub fn apply(&mut self, command: impl Into<Command>) -> Result<Effect> {
        let command = command.into();
        let processor = self.processor.clone();
        let result = processor.process(&command, self);

        debug_assert!(
            self.verify().is_ok(),
            "board invariants broken after {command:?}: {:?}",
            self.verify()
        );
        result
    }

    /// Next generated id not already held by a column or task.
    ///
    /// The generator only promises ids it has not issued before; a replaced or
    /// wrapped generator can still repeat one that is live on this board.
    pub(crate) fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            let taken = self.columns.iter().any(|c| c.id.as_str() == id)
                || self.tasks.iter().any(|t| t.id.as_str() == id);
            if !taken {
                return id;
            }
            warn!(%id, "generated id already in use, drawing another");
        }
    }

    // ---- read access ----

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All tasks, in board-wide display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Whether the referenced entity exists
    pub fn contains(&self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Column(id) => self.column_index(id).is_some(),
            EntityRef::Task(id) => self.task_index(id).is_some(),
        }
    }

    /// Tasks of `column`, in display order
    pub fn tasks_in<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| &t.column_id == column)
    }

    pub fn task_count(&self, column: &ColumnId) -> usize {
        self.tasks_in(column).count()
    }

    /// Columns in order, each with its tasks
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        self.columns
            .iter()
            .map(|column| Lane {
                column,
                tasks: self.tasks_in(&column.id).collect(),
            })
            .collect()
    }

    /// Owned copy of the current columns and tasks
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Activity log, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// Check id uniqueness and that every task points at an existing column
    pub fn verify(&self) -> Result<()> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::duplicate_id("column", &column.id));
            }
        }

        let mut task_ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task_ids.insert(&task.id) {
                return Err(BoardError::duplicate_id("task", &task.id));
            }
            if !column_ids.contains(&task.column_id) {
                return Err(BoardError::OrphanTask {
                    task: task.id.to_string(),
                    column: task.column_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl LogSink for BoardStore {
    fn record(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_limit);
    }
}
