//! Drag session state and the overlay preview derived from it

use crate::store::BoardStore;
use crate::types::{Column, EntityRef, Task};

/// What is being dragged right now.
///
/// The captured value is a read-only snapshot taken at drag start for preview
/// rendering; moves always go through the store by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Reference to the dragged entity, if any
    pub fn active(&self) -> Option<EntityRef> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(EntityRef::Column(column.id.clone())),
            Self::DraggingTask(task) => Some(EntityRef::Task(task.id.clone())),
        }
    }

    /// Preview to render under the pointer.
    ///
    /// A dragged column shows its tasks as they are in the store now, since
    /// tasks may have moved in or out while the column was picked up.
    pub fn overlay(&self, store: &BoardStore) -> Option<Overlay> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(Overlay::Column {
                column: column.clone(),
                tasks: store.tasks_in(&column.id).cloned().collect(),
            }),
            Self::DraggingTask(task) => Some(Overlay::Task(task.clone())),
        }
    }
}

/// Drag preview content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Column { column: Column, tasks: Vec<Task> },
    Task(Task),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::task::AddTask;

    #[test]
    fn test_idle_has_no_overlay() {
        let store = BoardStore::new();
        assert!(DragSession::Idle.overlay(&store).is_none());
        assert!(DragSession::default().is_idle());
        assert!(DragSession::Idle.active().is_none());
    }

    #[test]
    fn test_column_overlay_reads_current_tasks() {
        let mut store = BoardStore::new();
        store.apply(AddColumn::new()).unwrap();
        let session = DragSession::DraggingColumn(store.columns()[0].clone());

        store.apply(AddTask::new("1")).unwrap();

        match session.overlay(&store) {
            Some(Overlay::Column { column, tasks }) => {
                assert_eq!(column.id.as_str(), "1");
                assert_eq!(tasks.len(), 1);
            }
            other => panic!("expected column overlay, got {other:?}"),
        }
        assert_eq!(session.active(), Some(EntityRef::Column("1".into())));
    }
}
