//! In-flight guards for user-facing async actions.
//!
//! Each button that triggers a gateway call owns a `RequestSlot`. The slot
//! refuses to start a second request while one is pending; it is a flag,
//! not a queue, and nothing is ever cancelled.

/// Lifecycle of one action's request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Done(T),
    Failed,
}

/// Explicit `Idle | Pending | Done | Failed` state for one action.
///
/// ```
/// use alif_arena::gateway::{RequestSlot, RequestState};
///
/// let mut slot: RequestSlot<String> = RequestSlot::new();
/// assert!(slot.begin());
/// assert!(!slot.begin()); // already in flight
///
/// slot.complete("done".to_string());
/// assert_eq!(slot.state(), &RequestState::Done("done".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSlot<T> {
    state: RequestState<T>,
}

impl<T> RequestSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    /// Result of the last successful request.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            RequestState::Done(value) => Some(value),
            _ => None,
        }
    }

    /// Mark the action in flight.
    ///
    /// Returns `false` if a request is already pending; the caller must not
    /// start another one.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.state = RequestState::Pending;
        true
    }

    pub fn complete(&mut self, value: T) {
        self.state = RequestState::Done(value);
    }

    pub fn fail(&mut self) {
        self.state = RequestState::Failed;
    }

    /// Settle the slot from a request result.
    pub fn settle<E>(&mut self, result: Result<T, E>) {
        match result {
            Ok(value) => self.complete(value),
            Err(_) => self.fail(),
        }
    }

    /// Back to `Idle`, dropping any stored value.
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_guards_pending() {
        let mut slot: RequestSlot<u32> = RequestSlot::new();
        assert_eq!(slot.state(), &RequestState::Idle);

        assert!(slot.begin());
        assert!(slot.is_pending());
        assert!(!slot.begin());
    }

    #[test]
    fn test_settle() {
        let mut slot: RequestSlot<u32> = RequestSlot::new();
        slot.begin();
        slot.settle::<()>(Ok(7));
        assert_eq!(slot.value(), Some(&7));

        // A finished slot can be restarted
        assert!(slot.begin());
        slot.settle(Err("boom"));
        assert_eq!(slot.state(), &RequestState::Failed);
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn test_reset() {
        let mut slot: RequestSlot<u32> = RequestSlot::new();
        slot.begin();
        slot.complete(1);
        slot.reset();
        assert_eq!(slot.state(), &RequestState::Idle);
    }
}
