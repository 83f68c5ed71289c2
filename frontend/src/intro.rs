//! Once-per-session intro: a "Loading..." splash, then the brand mark, then
//! the page itself.
//!
//! The sequencer is a plain state machine. Callers own the clock: they ask
//! for the pending deadlines, arm timers for them, and call
//! [`IntroSequencer::advance`] with the elapsed time since mount when a timer
//! fires. Storage, sound and the progress bar are injected.

use crate::utils::audio::{Cue, CuePlayer};
use crate::utils::progress::ProgressIndicator;
use crate::utils::session::{intro_played, mark_intro_played, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Intro,
    Loading,
    Ready,
}

/// Fixed delays of the sequence, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTimings {
    /// Mount until the brand mark replaces the splash.
    pub intro_ms: u32,
    /// Entering `Loading` until the name cue.
    pub name_cue_ms: u32,
    /// Entering `Loading` until the page is shown.
    pub loading_ms: u32,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            intro_ms: 2_000,
            name_cue_ms: 1_000,
            loading_ms: 3_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStep {
    EnterLoading,
    NameCue,
    EnterReady,
}

/// A step and its deadline relative to mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at_ms: u32,
    pub step: IntroStep,
}

impl IntroTimings {
    /// Steps in firing order. `EnterReady` always sorts after `EnterLoading`
    /// and ties keep this order.
    pub fn schedule(&self) -> Vec<ScheduledStep> {
        let loading_at = self.intro_ms;
        let mut steps = vec![
            ScheduledStep { at_ms: loading_at, step: IntroStep::EnterLoading },
            ScheduledStep { at_ms: loading_at.saturating_add(self.name_cue_ms), step: IntroStep::NameCue },
            ScheduledStep { at_ms: loading_at.saturating_add(self.loading_ms), step: IntroStep::EnterReady },
        ];
        steps.sort_by_key(|s| s.at_ms);
        steps
    }
}

pub struct IntroSequencer<S, C, P> {
    store: S,
    cues: C,
    progress: P,
    phase: IntroPhase,
    pending: Vec<ScheduledStep>,
    attached: bool,
}

impl<S, C, P> IntroSequencer<S, C, P>
where
    S: SessionStore,
    C: CuePlayer,
    P: ProgressIndicator,
{
    /// Reads the session flag once. A session that already saw the intro
    /// starts in `Ready` with nothing scheduled.
    pub fn mount(store: S, cues: C, progress: P, timings: IntroTimings) -> Self {
        let (phase, pending) = if intro_played(&store) {
            progress.done();
            (IntroPhase::Ready, Vec::new())
        } else {
            (IntroPhase::Intro, timings.schedule())
        };
        log::info!("Intro mounted in {:?} with {} pending steps", phase, pending.len());
        Self {
            store,
            cues,
            progress,
            phase,
            pending,
            attached: true,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Deadlines still to fire, in order.
    pub fn pending(&self) -> &[ScheduledStep] {
        &self.pending
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Fires every step due at `elapsed_ms`, oldest first, and returns them.
    /// Detached sequencers do nothing.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<IntroStep> {
        if !self.attached {
            return Vec::new();
        }
        let due = self.pending.iter().take_while(|s| s.at_ms <= elapsed_ms).count();
        let fired: Vec<IntroStep> = self.pending.drain(..due).map(|s| s.step).collect();
        for step in &fired {
            self.apply(*step);
        }
        fired
    }

    /// Stops all further transitions and side effects.
    pub fn unmount(&mut self) {
        if self.attached && self.phase != IntroPhase::Ready {
            log::debug!("Intro unmounted in {:?}, dropping {} steps", self.phase, self.pending.len());
        }
        self.attached = false;
        self.pending.clear();
    }

    fn apply(&mut self, step: IntroStep) {
        match step {
            IntroStep::EnterLoading => {
                self.phase = IntroPhase::Loading;
                self.progress.start();
                self.cues.play(Cue::Loader);
            }
            IntroStep::NameCue => self.cues.play(Cue::Name),
            IntroStep::EnterReady => {
                self.phase = IntroPhase::Ready;
                self.progress.done();
                mark_intro_played(&self.store);
            }
        }
        log::info!("Intro step {:?}, now {:?}", step, self.phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::audio::testing::RecordingCues;
    use crate::utils::progress::testing::{ProgressCall, RecordingProgress};
    use crate::utils::session::testing::MemorySessionStore;
    use crate::utils::session::INTRO_PLAYED_KEY;
    use std::rc::Rc;

    type TestSequencer =
        IntroSequencer<Rc<MemorySessionStore>, Rc<RecordingCues>, Rc<RecordingProgress>>;

    struct Harness {
        store: Rc<MemorySessionStore>,
        cues: Rc<RecordingCues>,
        progress: Rc<RecordingProgress>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: Rc::new(MemorySessionStore::default()),
                cues: Rc::new(RecordingCues::default()),
                progress: Rc::new(RecordingProgress::default()),
            }
        }

        fn mount(&self) -> TestSequencer {
            IntroSequencer::mount(
                self.store.clone(),
                self.cues.clone(),
                self.progress.clone(),
                IntroTimings::default(),
            )
        }
    }

    #[test]
    fn first_visit_runs_intro_then_loading_then_ready() {
        let h = Harness::new();
        let mut seq = h.mount();
        assert_eq!(seq.phase(), IntroPhase::Intro);

        assert!(seq.advance(1_999).is_empty());
        assert_eq!(seq.phase(), IntroPhase::Intro);

        assert_eq!(seq.advance(2_000), vec![IntroStep::EnterLoading]);
        assert_eq!(seq.phase(), IntroPhase::Loading);
        assert_eq!(*h.cues.played.borrow(), vec![Cue::Loader]);
        assert_eq!(*h.progress.calls.borrow(), vec![ProgressCall::Start]);

        assert_eq!(seq.advance(3_000), vec![IntroStep::NameCue]);
        assert_eq!(seq.phase(), IntroPhase::Loading);
        assert_eq!(*h.cues.played.borrow(), vec![Cue::Loader, Cue::Name]);

        assert!(seq.advance(4_999).is_empty());
        assert!(!intro_played(&*h.store));

        assert_eq!(seq.advance(5_000), vec![IntroStep::EnterReady]);
        assert_eq!(seq.phase(), IntroPhase::Ready);
        assert_eq!(*h.progress.calls.borrow(), vec![ProgressCall::Start, ProgressCall::Done]);
        assert!(intro_played(&*h.store));
        assert!(seq.pending().is_empty());
    }

    #[test]
    fn late_timer_still_passes_through_loading() {
        let h = Harness::new();
        let mut seq = h.mount();
        let fired = seq.advance(60_000);
        assert_eq!(
            fired,
            vec![IntroStep::EnterLoading, IntroStep::NameCue, IntroStep::EnterReady]
        );
        assert_eq!(seq.phase(), IntroPhase::Ready);
        assert_eq!(*h.cues.played.borrow(), vec![Cue::Loader, Cue::Name]);
    }

    #[test]
    fn played_session_skips_straight_to_ready() {
        let h = Harness::new();
        h.store.set(INTRO_PLAYED_KEY, "true");
        let mut seq = h.mount();

        assert_eq!(seq.phase(), IntroPhase::Ready);
        assert!(seq.pending().is_empty());
        assert!(seq.advance(10_000).is_empty());
        assert!(h.cues.played.borrow().is_empty());
        assert_eq!(*h.progress.calls.borrow(), vec![ProgressCall::Done]);
    }

    #[test]
    fn remount_after_ready_skips_intro() {
        let h = Harness::new();
        let mut first = h.mount();
        first.advance(5_000);
        first.unmount();

        let second = h.mount();
        assert_eq!(second.phase(), IntroPhase::Ready);
        assert!(second.pending().is_empty());
        assert!(intro_played(&*h.store));
    }

    #[test]
    fn unmount_mid_sequence_freezes_state() {
        let h = Harness::new();
        let mut seq = h.mount();
        seq.advance(2_500);
        assert_eq!(seq.phase(), IntroPhase::Loading);

        seq.unmount();
        assert!(!seq.is_attached());
        assert!(seq.advance(5_000).is_empty());
        assert_eq!(seq.phase(), IntroPhase::Loading);
        assert!(!intro_played(&*h.store));
        assert_eq!(*h.cues.played.borrow(), vec![Cue::Loader]);
        assert_eq!(*h.progress.calls.borrow(), vec![ProgressCall::Start]);
    }

    #[test]
    fn interrupted_intro_replays_on_next_mount() {
        let h = Harness::new();
        let mut seq = h.mount();
        seq.advance(1_000);
        seq.unmount();

        let again = h.mount();
        assert_eq!(again.phase(), IntroPhase::Intro);
        assert_eq!(again.pending().len(), 3);
    }

    #[test]
    fn schedule_follows_timings() {
        let timings = IntroTimings { intro_ms: 100, name_cue_ms: 50, loading_ms: 20 };
        let steps: Vec<_> = timings.schedule().into_iter().map(|s| (s.at_ms, s.step)).collect();
        assert_eq!(
            steps,
            vec![
                (100, IntroStep::EnterLoading),
                (120, IntroStep::EnterReady),
                (150, IntroStep::NameCue),
            ]
        );
    }
}
