//! Leptos Transition Utilities
//!
//! Open/close sequencing for panels and modals driven by CSS transitions.
//! Opening displays the element first and applies the "open" state a tick
//! later; closing removes the "open" state and hides the element once the
//! leave delay has elapsed. Every request bumps an epoch, so a timer that
//! belongs to a superseded request never touches the state.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Visual phase of a transitioned element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Removed from layout
    #[default]
    Hidden,
    /// Displayed, open state not applied yet
    Entering,
    /// Displayed with open state
    Shown,
    /// Open state removed, waiting for the leave transition to finish
    Leaving,
}

impl TransitionPhase {
    /// Whether the element takes part in layout
    pub fn is_displayed(self) -> bool {
        self != TransitionPhase::Hidden
    }

    /// Whether the open class/state is applied
    pub fn is_open(self) -> bool {
        self == TransitionPhase::Shown
    }

    /// Whether the latest request was an open request
    pub fn is_opening(self) -> bool {
        matches!(self, TransitionPhase::Entering | TransitionPhase::Shown)
    }
}

/// Phase plus the epoch of the request that produced it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionState {
    pub phase: TransitionPhase,
    pub epoch: u64,
}

impl TransitionState {
    /// Start opening. Returns the epoch the settle timer must carry,
    /// or None when already opening/open.
    pub fn begin_open(&mut self) -> Option<u64> {
        if self.phase.is_opening() {
            return None;
        }
        self.epoch += 1;
        self.phase = TransitionPhase::Entering;
        Some(self.epoch)
    }

    /// Start closing. Returns the epoch the settle timer must carry,
    /// or None when already hidden/leaving.
    pub fn begin_close(&mut self) -> Option<u64> {
        if !self.phase.is_opening() {
            return None;
        }
        self.epoch += 1;
        self.phase = TransitionPhase::Leaving;
        Some(self.epoch)
    }

    /// Open when hidden/leaving, close otherwise
    pub fn begin_toggle(&mut self) -> Option<u64> {
        if self.phase.is_opening() {
            self.begin_close()
        } else {
            self.begin_open()
        }
    }

    /// Finish the pending step. Stale epochs are ignored.
    pub fn settle(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        match self.phase {
            TransitionPhase::Entering => self.phase = TransitionPhase::Shown,
            TransitionPhase::Leaving => self.phase = TransitionPhase::Hidden,
            _ => return false,
        }
        true
    }
}

/// Delays between the two steps of each sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    pub enter_delay_ms: u32,
    pub leave_delay_ms: u32,
}

impl TransitionTiming {
    /// How long the given in-between phase lasts before it settles
    pub fn delay_for(&self, phase: TransitionPhase) -> u32 {
        match phase {
            TransitionPhase::Leaving => self.leave_delay_ms,
            _ => self.enter_delay_ms,
        }
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            leave_delay_ms: 300,
        }
    }
}

/// Transition state signals
#[derive(Clone, Copy)]
pub struct Transition {
    pub state_read: ReadSignal<TransitionState>,
    state_write: WriteSignal<TransitionState>,
    timing: TransitionTiming,
}

pub fn create_transition(timing: TransitionTiming) -> Transition {
    let (state_read, state_write) = signal(TransitionState::default());
    Transition {
        state_read,
        state_write,
        timing,
    }
}

impl Transition {
    pub fn open(&self) {
        let mut epoch = None;
        self.state_write.update(|s| epoch = s.begin_open());
        if let Some(epoch) = epoch {
            schedule_settle(self.state_write, epoch, self.timing.delay_for(TransitionPhase::Entering));
        }
    }

    pub fn close(&self) {
        let mut epoch = None;
        self.state_write.update(|s| epoch = s.begin_close());
        if let Some(epoch) = epoch {
            schedule_settle(self.state_write, epoch, self.timing.delay_for(TransitionPhase::Leaving));
        }
    }

    pub fn toggle(&self) {
        let mut step = None;
        self.state_write.update(|s| {
            step = s.begin_toggle().map(|epoch| (epoch, s.phase));
        });
        if let Some((epoch, phase)) = step {
            schedule_settle(self.state_write, epoch, self.timing.delay_for(phase));
        }
    }

    /// Current phase (tracked)
    pub fn phase(&self) -> TransitionPhase {
        self.state_read.get().phase
    }

    pub fn is_displayed(&self) -> bool {
        self.phase().is_displayed()
    }

    pub fn is_open(&self) -> bool {
        self.phase().is_open()
    }

    pub fn is_opening(&self) -> bool {
        self.phase().is_opening()
    }
}

fn schedule_settle(write: WriteSignal<TransitionState>, epoch: u64, delay_ms: u32) {
    // The owning component may be gone by the time this fires
    Timeout::new(delay_ms, move || {
        write.try_update(|s| s.settle(epoch));
    })
    .forget();
}

/// True when the click landed on the element carrying the handler itself
/// (the backdrop) and not on anything nested inside it
pub fn is_backdrop_click(ev: &web_sys::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Create click handler for a modal backdrop
pub fn make_on_backdrop_click(transition: Transition) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if is_backdrop_click(&ev) {
            transition.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_settle_shows() {
        let mut state = TransitionState::default();
        let epoch = state.begin_open().unwrap();
        assert_eq!(state.phase, TransitionPhase::Entering);
        assert!(state.phase.is_displayed());
        assert!(!state.phase.is_open());

        assert!(state.settle(epoch));
        assert_eq!(state.phase, TransitionPhase::Shown);
        assert!(state.phase.is_open());
    }

    #[test]
    fn open_close_returns_to_initial_flags() {
        let mut state = TransitionState::default();
        let open = state.begin_open().unwrap();
        state.settle(open);
        let close = state.begin_close().unwrap();
        assert_eq!(state.phase, TransitionPhase::Leaving);
        assert!(state.phase.is_displayed());
        assert!(!state.phase.is_open());

        assert!(state.settle(close));
        assert_eq!(state.phase, TransitionState::default().phase);
        assert!(!state.phase.is_displayed());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut state = TransitionState::default();
        let open = state.begin_open().unwrap();
        // Closed again before the enter timer fired
        let close = state.begin_close().unwrap();

        assert!(!state.settle(open));
        assert_eq!(state.phase, TransitionPhase::Leaving);
        assert!(state.settle(close));
        assert_eq!(state.phase, TransitionPhase::Hidden);
    }

    #[test]
    fn reopen_during_leave_keeps_element_displayed() {
        let mut state = TransitionState::default();
        let open = state.begin_open().unwrap();
        state.settle(open);
        let close = state.begin_close().unwrap();
        let reopen = state.begin_open().unwrap();

        // Leave timer fires late and must not hide the reopened element
        assert!(!state.settle(close));
        assert_eq!(state.phase, TransitionPhase::Entering);
        assert!(state.settle(reopen));
        assert_eq!(state.phase, TransitionPhase::Shown);
    }

    #[test]
    fn redundant_requests_are_noops() {
        let mut state = TransitionState::default();
        assert_eq!(state.begin_close(), None);
        state.begin_open();
        assert_eq!(state.begin_open(), None);
        assert_eq!(state.epoch, 1);
    }

    #[test]
    fn toggle_alternates() {
        let mut state = TransitionState::default();
        state.begin_toggle();
        assert!(state.phase.is_opening());
        state.begin_toggle();
        assert_eq!(state.phase, TransitionPhase::Leaving);
        state.begin_toggle();
        assert_eq!(state.phase, TransitionPhase::Entering);
    }

    #[test]
    fn toggle_settles_with_matching_delay() {
        let timing = TransitionTiming::default();
        let mut state = TransitionState::default();

        let open = state.begin_toggle().unwrap();
        assert_eq!(timing.delay_for(state.phase), 10);
        assert!(state.settle(open));

        let close = state.begin_toggle().unwrap();
        assert_eq!(timing.delay_for(state.phase), 300);
        assert!(state.settle(close));
        assert_eq!(state, TransitionState { phase: TransitionPhase::Hidden, epoch: 2 });
    }
}
