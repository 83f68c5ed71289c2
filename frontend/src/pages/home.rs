use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::loader::{use_intro, BrandMark, IntroScreen};
use crate::components::nav::SiteNav;
use crate::config;
use crate::contact::form::ContactForm;
use crate::content::profile::{ABOUT, EXPERIENCE, TAGLINE};
use crate::content::projects::{Project, PROJECTS};
use crate::intro::IntroPhase;
use crate::utils::document::set_title;
use crate::Route;

fn render_project_card(project: &'static Project) -> Html {
    html! {
        <div class={classes!("project-card", format!("accent-{}", project.accent))}>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-summary">{project.short_description}</p>
            <p class="project-tools">{format!("Tools: {}", project.tools)}</p>
            <div class="project-actions">
                <Link<Route> to={Route::ProjectDetail { project_id: project.id.to_string() }} classes="button">
                    {"Project Details"}
                </Link<Route>>
                if let Some(live) = project.live_demo_link {
                    <a href={live} target="_blank" rel="noopener noreferrer" class="button button-live">
                        {"View Live"}
                    </a>
                }
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let phase = use_intro();

    use_effect_with_deps(
        move |_| {
            set_title(config::HOME_TITLE);
            || ()
        },
        (),
    );

    // Nothing of the page mounts until the intro is over
    match phase {
        IntroPhase::Intro => return html! { <IntroScreen /> },
        IntroPhase::Loading => return html! { <BrandMark /> },
        IntroPhase::Ready => {}
    }

    html! {
        <div class="page home-page">
            <SiteNav />

            <section id="hero" class="hero">
                <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                    <source src={config::BACKGROUND_VIDEO_PATH} type="video/mp4" />
                </video>
                <div class="hero-content">
                    <h1 class="hero-title">{config::SITE_OWNER}</h1>
                    <p class="hero-tagline">{TAGLINE}</p>
                </div>
            </section>

            <section id="about" class="section about-section">
                <h2 class="section-title">{"About Me"}</h2>
                <p class="about-text">{ABOUT}</p>
            </section>

            <section id="projects" class="section projects-section">
                <h2 class="section-title">{"Projects"}</h2>
                <div class="project-list">
                    { for PROJECTS.iter().map(render_project_card) }
                </div>
            </section>

            <section id="awards" class="section awards-section">
                <h2 class="section-title">{"Experience & Awards"}</h2>
                <div class="timeline">
                    { for EXPERIENCE.iter().map(|entry| html! {
                        <div class="timeline-entry">
                            <h3>{entry.role}</h3>
                            <p>{entry.description}</p>
                            <span class="period">{entry.period}</span>
                        </div>
                    }) }
                </div>
            </section>

            <ContactForm />
        </div>
    }
}
