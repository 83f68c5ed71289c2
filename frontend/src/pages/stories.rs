use yew::prelude::*;
use crate::components::nav::PageNav;
use crate::config::SITE_OWNER;
use crate::content::stories::STORIES;
use crate::utils::document::set_title;
use crate::Route;

#[function_component(Stories)]
pub fn stories() -> Html {
    use_effect_with_deps(
        move |_| {
            set_title(&format!("Stories | {} Portfolio", SITE_OWNER));
            || ()
        },
        (),
    );

    html! {
        <div class="page stories-page">
            <PageNav back_to={Route::Home} back_label="Back to Home" />
            <div class="page-body">
                <h1 class="page-title">{"📚 Shayan's Stories"}</h1>
                <div class="story-grid">
                    { for STORIES.iter().map(|story| html! {
                        <div class="story-card">
                            <img src={story.image} alt={story.title} />
                            <h3>{story.title}</h3>
                            <p>{story.summary}</p>
                            <a href={story.link} class="story-link">{"Read More →"}</a>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
