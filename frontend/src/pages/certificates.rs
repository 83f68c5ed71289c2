use yew::prelude::*;
use crate::components::nav::PageNav;
use crate::config::SITE_OWNER;
use crate::content::certificates::{has_more, load_more, visible_certificates, CERTIFICATES, ITEMS_PER_LOAD};
use crate::utils::document::{scroll_to_top, set_title};
use crate::Route;

#[function_component(Certificates)]
pub fn certificates() -> Html {
    let shown = use_state(|| ITEMS_PER_LOAD);

    use_effect_with_deps(
        move |_| {
            set_title(&format!("Certificates | {} Portfolio", SITE_OWNER));
            scroll_to_top();
            || ()
        },
        (),
    );

    let on_load_more = {
        let shown = shown.clone();
        Callback::from(move |_: MouseEvent| shown.set(load_more(*shown)))
    };

    html! {
        <div class="page certificates-page">
            <PageNav back_to={Route::Home} back_label="Back to Home" />
            <div class="page-body">
                <h1 class="page-title">{"All Certificates"}</h1>
                <div class="info-bar">
                    <span>{format!("{} Certificates", CERTIFICATES.len())}</span>
                    <div class="info-bar-filters">
                        <span>{"CERTIFICATION BODY"}</span>
                        <span>{"FILTER BY CATEGORY"}</span>
                    </div>
                </div>
                <div class="certificate-grid">
                    { for visible_certificates(*shown).iter().map(|cert| html! {
                        <a
                            key={cert.id}
                            class="certificate-card"
                            href={cert.link.unwrap_or(cert.image)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <div class="certificate-image">
                                <img src={cert.image} alt={cert.title} />
                                <div class="certificate-overlay">
                                    <h3>{cert.title}</h3>
                                </div>
                            </div>
                            <div class="certificate-body">
                                <p class="award-body">{cert.award_body}</p>
                                <p class="certificate-description">{cert.description}</p>
                            </div>
                        </a>
                    }) }
                </div>
                if has_more(*shown) {
                    <div class="load-more">
                        <button class="load-more-button" onclick={on_load_more}>{"Load More"}</button>
                    </div>
                }
            </div>
        </div>
    }
}
