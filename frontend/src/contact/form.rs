use chrono::Utc;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use crate::components::nav::render_social_links;
use crate::config::RelayEndpoint;
use crate::contact::flow::{ContactFlow, SubmissionState, SubmitOutcome, STATUS_DISPLAY_MS};
use crate::contact::payload::ContactFields;
use crate::utils::audio::HtmlCuePlayer;
use crate::utils::relay::FetchRelay;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    // Endpoint is resolved once for the lifetime of the form
    let flow = use_memo(
        |_| {
            let flow = ContactFlow::new(RelayEndpoint::from_build_env(), FetchRelay, HtmlCuePlayer::default());
            log::info!("Contact form posting to {}", flow.endpoint().url());
            flow
        },
        (),
    );
    let fields = use_state(ContactFields::default);
    let submission = use_state(SubmissionState::default);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let hide_timer = hide_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    hide_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.name = input.value();
            fields.set(next);
        })
    };
    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.email = input.value();
            fields.set(next);
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = input.value();
            fields.set(next);
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        let fields = fields.clone();
        let submission = submission.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let flow = flow.clone();
            let fields = fields.clone();
            let submission = submission.clone();
            let hide_timer = hide_timer.clone();
            let mut submitted = (*fields).clone();
            spawn_local(async move {
                let outcome = flow.submit(&submitted, Utc::now()).await;
                let shown_at = Date::now();
                let mut next = (*submission).clone();
                next.record(outcome, &mut submitted, shown_at);
                if outcome == SubmitOutcome::Sent {
                    fields.set(submitted);
                }
                submission.set(next.clone());

                let submission = submission.clone();
                // replacing the handle cancels the previous hide
                *hide_timer.borrow_mut() = Some(Timeout::new(STATUS_DISPLAY_MS, move || {
                    let mut expired = next;
                    expired.expire(shown_at + f64::from(STATUS_DISPLAY_MS));
                    submission.set(expired);
                }));
            });
        })
    };

    let status_class = if submission.visible { "status visible" } else { "status hidden" };

    html! {
        <section id="contact" class="section contact-section">
            <div class="contact-inner">
                <h2 class="section-title">{"Let's Connect"}</h2>
                <form class="contact-form" {onsubmit}>
                    <div class="field">
                        <label for="contact-name">{"Name"}</label>
                        <input id="contact-name" name="name" type="text" required=true
                            value={fields.name.clone()} oninput={on_name} />
                    </div>
                    <div class="field">
                        <label for="contact-email">{"Email"}</label>
                        <input id="contact-email" name="email" type="email" required=true
                            value={fields.email.clone()} oninput={on_email} />
                    </div>
                    <div class="field">
                        <label for="contact-message">{"Message"}</label>
                        <textarea id="contact-message" name="message" rows="4" required=true
                            value={fields.message.clone()} oninput={on_message} />
                    </div>
                    <button type="submit" class="submit-button">{"Send Message"}</button>
                </form>
                if let Some(status) = submission.status.as_ref() {
                    <p class={status_class}>{status.clone()}</p>
                }
                { render_social_links("contact-socials") }
            </div>
        </section>
    }
}
