//! Two-stack undo/redo bookkeeping.
//!
//! `past` holds states the machine has left, most recent last. `undone`
//! holds states that were stepped back out of, most recent last. Both are
//! plain LIFO stacks; nothing is ever removed from the middle.

use super::state::State;

/// Linear undo/redo history of visited states.
///
/// # Example
///
/// ```rust
/// use rewind::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record("A".to_string());
///
/// // Undo out of "B" back to "A".
/// let previous = history.step_back("B".to_string());
/// assert_eq!(previous.as_deref(), Some("A"));
/// assert_eq!(history.undone(), ["B".to_string()]);
///
/// // Redo out of "A" forward to "B".
/// let next = history.step_forward("A".to_string());
/// assert_eq!(next.as_deref(), Some("B"));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoHistory<S: State> {
    past: Vec<S>,
    undone: Vec<S>,
}

impl<S: State> Default for UndoHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> UndoHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Record that `left` was exited by a new move.
    ///
    /// A new move starts a new branch, so the redo stack is dropped.
    pub fn record(&mut self, left: S) {
        self.past.push(left);
        self.undone.clear();
    }

    /// Record that `left` was exited, keeping the redo stack intact.
    pub fn record_keep_redo(&mut self, left: S) {
        self.past.push(left);
    }

    /// Step back out of `current`.
    ///
    /// Returns the state to return to, or `None` (with no bookkeeping done)
    /// when there is nothing to undo.
    pub fn step_back(&mut self, current: S) -> Option<S> {
        let previous = self.past.pop()?;
        self.undone.push(current);
        Some(previous)
    }

    /// Step forward out of `current`, the inverse of [`step_back`](Self::step_back).
    pub fn step_forward(&mut self, current: S) -> Option<S> {
        let next = self.undone.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.undone.clear();
    }

    /// States that can be undone back to, oldest first.
    pub fn past(&self) -> &[S] {
        &self.past
    }

    /// States that can be redone forward to, oldest first.
    pub fn undone(&self) -> &[S] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn new_history_is_empty() {
        let history: UndoHistory<String> = UndoHistory::new();
        assert!(history.past().is_empty());
        assert!(history.undone().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn step_back_on_empty_history_does_nothing() {
        let mut history: UndoHistory<String> = UndoHistory::new();
        assert_eq!(history.step_back(s("A")), None);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn step_forward_on_empty_redo_does_nothing() {
        let mut history = UndoHistory::new();
        history.record(s("A"));
        assert_eq!(history.step_forward(s("B")), None);
        assert_eq!(history.past(), [s("A")]);
    }

    #[test]
    fn record_clears_redo_stack() {
        let mut history = UndoHistory::new();
        history.record(s("A"));
        history.step_back(s("B"));
        assert!(history.can_redo());

        history.record(s("A"));
        assert!(!history.can_redo());
        assert_eq!(history.past(), [s("A")]);
    }

    #[test]
    fn record_keep_redo_preserves_redo_stack() {
        let mut history = UndoHistory::new();
        history.record(s("A"));
        history.step_back(s("B"));

        history.record_keep_redo(s("A"));
        assert_eq!(history.past(), [s("A")]);
        assert_eq!(history.undone(), [s("B")]);
    }

    #[test]
    fn stacks_are_lifo() {
        let mut history = UndoHistory::new();
        history.record(s("A"));
        history.record(s("B"));

        assert_eq!(history.step_back(s("C")), Some(s("B")));
        assert_eq!(history.step_back(s("B")), Some(s("A")));
        assert_eq!(history.undone(), [s("C"), s("B")]);

        assert_eq!(history.step_forward(s("A")), Some(s("B")));
        assert_eq!(history.step_forward(s("B")), Some(s("C")));
        assert_eq!(history.past(), [s("A"), s("B")]);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = UndoHistory::new();
        history.record(s("A"));
        history.record(s("B"));
        history.step_back(s("C"));

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
