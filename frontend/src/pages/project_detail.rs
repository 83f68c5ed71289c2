use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::nav::PageNav;
use crate::content::projects::{find_project, project_page_title, Project};
use crate::utils::document::{scroll_to_top, set_title};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project_id: String,
}

fn render_not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="not-found">
                <h1>{"Project Not Found"}</h1>
                <p>{"The project you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home}>{"Go back to Home"}</Link<Route>>
            </div>
        </div>
    }
}

fn render_project(project: &'static Project) -> Html {
    html! {
        <div class="page project-page">
            <PageNav back_to={Route::Home} back_label="Back to Projects" />
            <div class="page-body">
                <h1 class="page-title">{project.title}</h1>
                <p class="project-lead">{project.short_description}</p>

                <div class="technologies">
                    <h2 class="subsection-title">{"Technologies Used"}</h2>
                    <div class="tech-tags">
                        { for project.technologies.iter().map(|tech| html! {
                            <span class="tech-tag">{*tech}</span>
                        }) }
                    </div>
                </div>

                if !project.images.is_empty() {
                    <div class="gallery">
                        { for project.images.iter().enumerate().map(|(index, src)| html! {
                            <figure class="gallery-item">
                                <img src={*src} alt={format!("{} Image {}", project.title, index + 1)} />
                                <figcaption>{format!("Image {}", index + 1)}</figcaption>
                            </figure>
                        }) }
                    </div>
                }

                <div class="overview">
                    <h2 class="subsection-title">{"Project Overview"}</h2>
                    { for project.full_description.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>

                if project.github_link.is_some() || project.live_demo_link.is_some() {
                    <div class="project-links">
                        if let Some(github) = project.github_link {
                            <a href={github} target="_blank" rel="noopener noreferrer" class="button">{"View GitHub"}</a>
                        }
                        if let Some(live) = project.live_demo_link {
                            <a href={live} target="_blank" rel="noopener noreferrer" class="button button-live">{"Live Demo"}</a>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

/// Unknown ids render a "not found" page rather than failing.
#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let project = find_project(&props.project_id);

    use_effect_with_deps(
        move |_| {
            set_title(&project_page_title(project));
            scroll_to_top();
            || ()
        },
        props.project_id.clone(),
    );

    match project {
        Some(project) => render_project(project),
        None => render_not_found(),
    }
}
