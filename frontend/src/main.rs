use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod intro;
mod utils {
    pub mod audio;
    pub mod document;
    pub mod progress;
    pub mod relay;
    pub mod session;
}
mod contact {
    pub mod flow;
    pub mod form;
    pub mod payload;
}
mod content {
    pub mod certificates;
    pub mod profile;
    pub mod projects;
    pub mod stories;
}
mod components {
    pub mod loader;
    pub mod nav;
}
mod pages {
    pub mod certificates;
    pub mod home;
    pub mod not_found;
    pub mod project_detail;
    pub mod stories;
}

use pages::{
    certificates::Certificates, home::Home, not_found::NotFound,
    project_detail::ProjectDetail, stories::Stories,
};
use utils::audio::{plays_click_cue, Cue, CuePlayer, HtmlCuePlayer};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/certificates")]
    Certificates,
    #[at("/projects/:project_id")]
    ProjectDetail { project_id: String },
    #[at("/stories")]
    Stories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Certificates => html! { <Certificates /> },
        Route::ProjectDetail { project_id } => html! { <ProjectDetail {project_id} /> },
        Route::Stories => html! { <Stories /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let cues = use_memo(|_| HtmlCuePlayer::default(), ());
    // Page-load sound once, plus a click sound for every interactive element
    {
        let cues = cues.clone();
        use_effect_with_deps(
            move |_| {
                cues.play(Cue::PageLoad);
                let destructor: Box<dyn FnOnce()> = if let Some(document) = window().and_then(|w| w.document()) {
                    let listener = Closure::<dyn Fn(MouseEvent)>::new({
                        let cues = cues.clone();
                        move |e: MouseEvent| {
                            let tag = e
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .map(|el| el.tag_name());
                            if plays_click_cue(tag.as_deref()) {
                                cues.play(Cue::Click);
                            }
                        }
                    });
                    if let Err(e) = document
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach click listener: {:?}", e);
                    }
                    Box::new(move || {
                        let _ = document
                            .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <div class="app-shell">
                <video class="background-video" autoplay=true loop=true muted=true playsinline=true>
                    <source src={config::BACKGROUND_VIDEO_PATH} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_routes_accept_any_slug() {
        assert_eq!(
            Route::recognize("/projects/no-such-project"),
            Some(Route::ProjectDetail { project_id: "no-such-project".to_string() })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/certificates"), Some(Route::Certificates));
        assert_eq!(
            Route::recognize("/does/not/exist").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
    }
}
