use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use crate::config;

/// Short sounds the site plays. All playback is best-effort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    PageLoad,
    Loader,
    Name,
    Click,
}

impl Cue {
    pub fn src(self) -> &'static str {
        match self {
            Cue::PageLoad => config::PAGE_LOAD_SOUND,
            Cue::Loader => config::LOADER_SOUND,
            Cue::Name => config::NAME_SOUND,
            Cue::Click => config::CLICK_SOUND,
        }
    }
}

/// Fire-and-forget playback. Implementations must never panic and never
/// block the caller; a rejected play is simply dropped.
pub trait CuePlayer {
    fn play(&self, cue: Cue);
}

impl<P: CuePlayer + ?Sized> CuePlayer for Rc<P> {
    fn play(&self, cue: Cue) {
        (**self).play(cue)
    }
}

/// Plays cues through lazily created `<audio>` elements, one per cue.
#[derive(Default)]
pub struct HtmlCuePlayer {
    elements: RefCell<HashMap<Cue, HtmlAudioElement>>,
}

impl HtmlCuePlayer {
    fn element(&self, cue: Cue) -> Option<HtmlAudioElement> {
        if let Some(existing) = self.elements.borrow().get(&cue) {
            return Some(existing.clone());
        }
        match HtmlAudioElement::new_with_src(cue.src()) {
            Ok(audio) => {
                audio.set_preload("auto");
                self.elements.borrow_mut().insert(cue, audio.clone());
                Some(audio)
            }
            Err(e) => {
                log::debug!("Could not create audio element for {:?}: {:?}", cue, e);
                None
            }
        }
    }
}

impl CuePlayer for HtmlCuePlayer {
    fn play(&self, cue: Cue) {
        let Some(audio) = self.element(cue) else {
            return;
        };
        // rewind so rapid repeats (clicks) restart the sound
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("{:?} playback blocked or failed: {:?}", cue, e);
                }
            }),
            Err(e) => log::debug!("{:?} playback failed to start: {:?}", cue, e),
        }
    }
}

/// Whether a click on an element with this tag name gets the click sound.
pub fn plays_click_cue(tag_name: Option<&str>) -> bool {
    matches!(tag_name, Some(tag) if ["BUTTON", "A", "INPUT"].iter().any(|t| t.eq_ignore_ascii_case(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_interactive_elements_click() {
        assert!(plays_click_cue(Some("BUTTON")));
        assert!(plays_click_cue(Some("a")));
        assert!(plays_click_cue(Some("INPUT")));
        assert!(!plays_click_cue(Some("DIV")));
        assert!(!plays_click_cue(None));
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records every requested cue instead of playing it.
    #[derive(Default)]
    pub struct RecordingCues {
        pub played: RefCell<Vec<Cue>>,
    }

    impl CuePlayer for RecordingCues {
        fn play(&self, cue: Cue) {
            self.played.borrow_mut().push(cue);
        }
    }
}
