//! Incremental observation of a running solve.

use super::IterationRecord;

/// What the solver should do after an observer has seen a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverAction {
    /// Keep iterating.
    #[default]
    Continue,
    /// Abort the solve with [`MathError::Stopped`](crate::MathError::Stopped).
    Stop,
}

/// Receives each iteration record as soon as it is appended to the trace.
///
/// Closures `FnMut(&IterationRecord<T>) -> ObserverAction` implement this
/// trait, and `()` is a no-op observer.
pub trait IterationObserver<T> {
    /// Observes one record and decides whether the solve continues.
    fn observe(&mut self, record: &IterationRecord<T>) -> ObserverAction;
}

impl<T, F> IterationObserver<T> for F
where
    F: FnMut(&IterationRecord<T>) -> ObserverAction,
{
    fn observe(&mut self, record: &IterationRecord<T>) -> ObserverAction {
        self(record)
    }
}

impl<T> IterationObserver<T> for () {
    fn observe(&mut self, _record: &IterationRecord<T>) -> ObserverAction {
        ObserverAction::Continue
    }
}
