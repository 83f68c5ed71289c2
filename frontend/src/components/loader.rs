use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::config;
use crate::intro::{IntroPhase, IntroSequencer, IntroTimings};
use crate::utils::audio::HtmlCuePlayer;
use crate::utils::progress::TopProgressBar;
use crate::utils::session::BrowserSessionStore;

type BrowserIntro = IntroSequencer<BrowserSessionStore, HtmlCuePlayer, TopProgressBar>;

/// Drives the intro for the calling page and returns the phase to render.
///
/// One timer is armed per pending step; the handles live in the effect, so
/// leaving the page cancels them before they can touch the sequencer.
#[hook]
pub fn use_intro() -> IntroPhase {
    let sequencer = use_mut_ref(|| -> BrowserIntro {
        IntroSequencer::mount(
            BrowserSessionStore,
            HtmlCuePlayer::default(),
            TopProgressBar,
            IntroTimings::default(),
        )
    });
    let phase = use_state_eq(|| sequencer.borrow().phase());

    {
        let sequencer = sequencer.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = sequencer
                    .borrow()
                    .pending()
                    .iter()
                    .map(|scheduled| {
                        let at_ms = scheduled.at_ms;
                        let sequencer = sequencer.clone();
                        let phase = phase.clone();
                        Timeout::new(at_ms, move || {
                            let current = {
                                let mut seq = sequencer.borrow_mut();
                                seq.advance(at_ms);
                                seq.phase()
                            };
                            phase.set(current);
                        })
                    })
                    .collect();
                move || {
                    drop(timers);
                    sequencer.borrow_mut().unmount();
                }
            },
            (),
        );
    }

    *phase
}

/// Opaque full-screen splash covering everything while in `Intro`.
#[function_component(IntroScreen)]
pub fn intro_screen() -> Html {
    html! {
        <div class="intro-screen">
            <p class="intro-text">{"Loading..."}</p>
        </div>
    }
}

/// Centered brand mark shown while in `Loading`.
#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <div class="brand-screen">
            <img class="brand-logo" src={config::LOGO_PATH} alt={format!("{} Logo", config::SITE_OWNER)} />
        </div>
    }
}
