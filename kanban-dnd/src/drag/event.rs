//! Semantic drag events emitted by the host's pointer sensor

use crate::types::EntityRef;
use serde::{Deserialize, Serialize};

/// One step of a drag gesture.
///
/// `over` is whatever droppable sits under the pointer; `None` when the pointer
/// is outside every droppable area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        active: EntityRef,
    },
    Over {
        active: EntityRef,
        #[serde(default)]
        over: Option<EntityRef>,
    },
    End {
        active: EntityRef,
        #[serde(default)]
        over: Option<EntityRef>,
    },
}

impl DragEvent {
    pub fn start(active: impl Into<EntityRef>) -> Self {
        Self::Start {
            active: active.into(),
        }
    }

    pub fn over(active: impl Into<EntityRef>, over: impl Into<EntityRef>) -> Self {
        Self::Over {
            active: active.into(),
            over: Some(over.into()),
        }
    }

    pub fn end(active: impl Into<EntityRef>, over: impl Into<EntityRef>) -> Self {
        Self::End {
            active: active.into(),
            over: Some(over.into()),
        }
    }

    /// Drop outside any droppable area
    pub fn end_outside(active: impl Into<EntityRef>) -> Self {
        Self::End {
            active: active.into(),
            over: None,
        }
    }

    /// The entity being dragged
    pub fn active(&self) -> &EntityRef {
        match self {
            Self::Start { active } | Self::Over { active, .. } | Self::End { active, .. } => active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, TaskId};

    #[test]
    fn test_drag_event_serde_shape() {
        let event = DragEvent::over(TaskId::from("3"), ColumnId::from("2"));
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({"type": "over", "active": {"task": "3"}, "over": {"column": "2"}})
        );

        let parsed: DragEvent =
            serde_json::from_str(r#"{"type": "end", "active": {"column": "1"}}"#).unwrap();
        assert_eq!(parsed, DragEvent::end_outside(ColumnId::from("1")));
        assert_eq!(parsed.active(), &EntityRef::Column("1".into()));
    }
}
