use yew::prelude::*;
use yew_router::prelude::*;
use crate::config::SITE_OWNER;
use crate::content::profile::SOCIAL_LINKS;
use crate::utils::document::scroll_to_section;
use crate::Route;

pub fn render_social_links(class: &'static str) -> Html {
    html! {
        <div class={class}>
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    style={format!("--hover-color: {};", link.color)}
                >
                    {link.label}
                </a>
            }) }
        </div>
    }
}

/// Full navigation bar used on the home page.
#[function_component(SiteNav)]
pub fn site_nav() -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let hire_me = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <h1 class="nav-title">{SITE_OWNER}</h1>
                </Link<Route>>
                <ul class="nav-links desktop-only">
                    <li><a href="#about">{"About"}</a></li>
                    <li><a href="#projects">{"Projects"}</a></li>
                    <li><Link<Route> to={Route::Certificates}>{"Certificates"}</Link<Route>></li>
                    <li><a href="#awards">{"Experience"}</a></li>
                    <li><a href="#contact">{"Contact"}</a></li>
                </ul>
                <div class="nav-actions">
                    <button class="hire-button" onclick={hire_me}>{"Hire Me"}</button>
                    { render_social_links("nav-socials desktop-only") }
                </div>
                <button class="hamburger mobile-only" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu mobile-only">
                    <ul>
                        <li><a href="#hero">{"Home"}</a></li>
                        <li><a href="#about">{"About"}</a></li>
                        <li><a href="#projects">{"Projects"}</a></li>
                        <li><a href="#awards">{"Experience"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                        <li><Link<Route> to={Route::Stories}>{"Stories"}</Link<Route>></li>
                    </ul>
                    { render_social_links("mobile-socials") }
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageNavProps {
    pub back_to: Route,
    pub back_label: AttrValue,
}

/// Slim bar for secondary pages: brand on the left, a way back on the right.
#[function_component(PageNav)]
pub fn page_nav(props: &PageNavProps) -> Html {
    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <h1 class="nav-title">{SITE_OWNER}</h1>
                </Link<Route>>
                <Link<Route> to={props.back_to.clone()} classes="nav-back">
                    {format!("← {}", props.back_label)}
                </Link<Route>>
            </div>
        </nav>
    }
}
