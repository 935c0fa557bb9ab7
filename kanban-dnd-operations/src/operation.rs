//! Operation metadata and execution traits

/// Metadata describing a board operation.
///
/// The canonical op string is `"{verb} {noun}"` (e.g. `"move task"`) and is what
/// ends up in the activity log.
pub trait Operation {
    /// The action, e.g. `"add"`, `"move"`
    fn verb(&self) -> &'static str;

    /// The entity kind acted on, e.g. `"column"`, `"task"`
    fn noun(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context.
///
/// Execution is synchronous: the operation either fully applies or returns an
/// error without touching the context.
pub trait Execute<C, E>: Operation {
    /// Value produced by a successful execution
    type Output;

    fn execute(&self, ctx: &mut C) -> Result<Self::Output, E>;
}

/// Distinguishes outputs that changed state from successful no-ops.
pub trait Outcome {
    fn is_change(&self) -> bool;
}
