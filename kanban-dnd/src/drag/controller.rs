//! Drag session controller.
//!
//! Interprets drag events and turns them into store commands:
//!
//! - Tasks move live during drag-over, including across columns. Nothing is
//!   rolled back when the drop is cancelled.
//! - Columns only move at drag-end, and only onto a valid target.

use super::event::DragEvent;
use super::session::{DragSession, Overlay};
use crate::column::MoveColumn;
use crate::command::Effect;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::task::MoveTask;
use crate::types::{ColumnId, EntityRef};
use tracing::{debug, trace, warn};

/// What handling one drag event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A drag session began
    Started,
    /// The board was not changed
    Unchanged,
    /// A move was applied to the board
    Applied(Effect),
    /// The event named something the board no longer has; nothing changed
    Rejected(BoardError),
}

impl DragOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

impl From<Result<Effect>> for DragOutcome {
    fn from(result: Result<Effect>) -> Self {
        match result {
            Ok(Effect::Unchanged) => Self::Unchanged,
            Ok(effect) => Self::Applied(effect),
            Err(error) => Self::Rejected(error),
        }
    }
}

/// Tracks the in-progress drag and mutates the store in response to events
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: DragSession,
    editing: Option<EntityRef>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Preview for the current drag, if any
    pub fn overlay(&self, store: &BoardStore) -> Option<Overlay> {
        self.session.overlay(store)
    }

    /// Mark an entity as being edited; it cannot be dragged until editing ends
    pub fn begin_editing(&mut self, entity: impl Into<EntityRef>) {
        self.editing = Some(entity.into());
    }

    pub fn end_editing(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&EntityRef> {
        self.editing.as_ref()
    }

    fn is_editing(&self, entity: &EntityRef) -> bool {
        self.editing.as_ref() == Some(entity)
    }

    /// Dispatch one event
    pub fn handle(&mut self, store: &mut BoardStore, event: &DragEvent) -> DragOutcome {
        match event {
            DragEvent::Start { active } => self.drag_start(store, active),
            DragEvent::Over { active, over } => self.drag_over(store, active, over.as_ref()),
            DragEvent::End { active, over } => self.drag_end(store, active, over.as_ref()),
        }
    }

    /// Begin a drag, capturing a snapshot of the active entity
    pub fn drag_start(&mut self, store: &BoardStore, active: &EntityRef) -> DragOutcome {
        if self.is_editing(active) {
            debug!(%active, "drag start ignored while editing");
            return DragOutcome::Unchanged;
        }

        let session = match active {
            EntityRef::Column(id) => store
                .column(id)
                .cloned()
                .map(DragSession::DraggingColumn)
                .ok_or_else(|| BoardError::column_not_found(id)),
            EntityRef::Task(id) => store
                .task(id)
                .cloned()
                .map(DragSession::DraggingTask)
                .ok_or_else(|| BoardError::task_not_found(id)),
        };

        match session {
            Ok(session) => {
                if let Some(previous) = self.session.active() {
                    warn!(%previous, %active, "drag started while another drag was active");
                }
                debug!(%active, "drag started");
                self.session = session;
                DragOutcome::Started
            }
            Err(error) => {
                debug!(%active, %error, "drag start rejected");
                DragOutcome::Rejected(error)
            }
        }
    }

    /// Pointer moved over a candidate target.
    ///
    /// Only tasks move here; column drags wait for drag-end.
    pub fn drag_over(
        &mut self,
        store: &mut BoardStore,
        active: &EntityRef,
        over: Option<&EntityRef>,
    ) -> DragOutcome {
        let Some(over) = over else {
            trace!(%active, "drag over nothing");
            return DragOutcome::Unchanged;
        };
        if active.id_str() == over.id_str() || self.is_editing(active) {
            return DragOutcome::Unchanged;
        }

        match active {
            EntityRef::Task(id) => {
                let moved = store.apply(MoveTask::new(id.clone(), over.clone()));
                let outcome = DragOutcome::from(moved);
                log_outcome("drag over", active, over, &outcome);
                outcome
            }
            EntityRef::Column(_) => {
                trace!(%active, %over, "column drag over deferred to drag end");
                DragOutcome::Unchanged
            }
        }
    }

    /// Release the pointer. Always ends the session.
    ///
    /// Without a target nothing happens, and task moves already applied during
    /// drag-over stay applied.
    pub fn drag_end(
        &mut self,
        store: &mut BoardStore,
        active: &EntityRef,
        over: Option<&EntityRef>,
    ) -> DragOutcome {
        self.session = DragSession::Idle;

        let Some(over) = over else {
            debug!(%active, "drag ended outside any target");
            return DragOutcome::Unchanged;
        };
        if active.id_str() == over.id_str() || self.is_editing(active) {
            return DragOutcome::Unchanged;
        }

        let EntityRef::Column(id) = active else {
            debug!(%active, %over, "task drag ended");
            return DragOutcome::Unchanged;
        };

        // A card is never a column, so a drop onto a task is rejected by the store
        let target = ColumnId::from(over.id_str());
        let moved = store.apply(MoveColumn::new(id.clone(), target));
        let outcome = DragOutcome::from(moved);
        log_outcome("drag end", active, over, &outcome);
        outcome
    }
}

fn log_outcome(phase: &str, active: &EntityRef, over: &EntityRef, outcome: &DragOutcome) {
    match outcome {
        DragOutcome::Applied(effect) => debug!(%active, %over, ?effect, "{phase}: moved"),
        DragOutcome::Rejected(error) => debug!(%active, %over, %error, "{phase}: rejected"),
        _ => trace!(%active, %over, "{phase}: unchanged"),
    }
}
