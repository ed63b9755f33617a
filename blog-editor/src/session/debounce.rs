//! Trailing-edge debounce handles
//!
//! A [`Debounce`] does not own a timer. Each `schedule` hands out a
//! [`DebounceToken`]; the UI sleeps for the delay and then asks the handle
//! whether that token is still the latest one. Rescheduling or cancelling
//! invalidates every earlier token, so at most one pending fire is ever
//! honoured.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone, Default)]
pub struct Debounce {
    generation: u64,
    pending: Option<u64>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending fire with a new one.
    pub fn schedule(&mut self) -> DebounceToken {
        self.generation += 1;
        self.pending = Some(self.generation);
        DebounceToken(self.generation)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending fire if `token` is still current.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending == Some(token.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// The one live timer behind a [`Debounce`]. Storing a new timer hands the
/// previous one back so the caller can cancel it.
#[derive(Debug)]
pub struct TimerSlot<T>(Option<T>);

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> TimerSlot<T> {
    pub fn replace(&mut self, timer: T) -> Option<T> {
        self.0.replace(timer)
    }

    pub fn clear(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_slot_hands_back_superseded_timer() {
        let mut slot = TimerSlot::default();
        assert_eq!(slot.replace(1), None);
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.replace(3), Some(2));
        assert!(slot.is_armed());
        assert_eq!(slot.clear(), Some(3));
        assert!(!slot.is_armed());
        assert_eq!(slot.clear(), None);
    }

    #[test]
    fn only_latest_token_fires() {
        let mut debounce = Debounce::new();
        let first = debounce.schedule();
        let second = debounce.schedule();
        let third = debounce.schedule();

        assert!(!debounce.fire(first));
        assert!(!debounce.fire(second));
        assert!(debounce.fire(third));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn token_fires_once() {
        let mut debounce = Debounce::new();
        let token = debounce.schedule();
        assert!(debounce.fire(token));
        assert!(!debounce.fire(token));
    }

    #[test]
    fn cancel_invalidates_pending() {
        let mut debounce = Debounce::new();
        let token = debounce.schedule();
        debounce.cancel();
        assert!(!debounce.fire(token));
    }

    #[test]
    fn reschedule_after_cancel_issues_fresh_token() {
        let mut debounce = Debounce::new();
        let old = debounce.schedule();
        debounce.cancel();
        let new = debounce.schedule();
        assert_ne!(old, new);
        assert!(!debounce.fire(old));
        assert!(debounce.fire(new));
    }
}
