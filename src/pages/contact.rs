use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::contact::{
    self, ContactIcon, ContactInquiry, ContactType,
};
use crate::content::Language;

/// Submission lifecycle: `Idle → Submitting → Success | Error → Idle`.
/// A completed outcome returns to `Idle` on the next submit (via
/// `reset` + `begin`); a submit while one is in flight goes nowhere.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Start a submission. Clears any prior outcome by construction;
    /// returns `None` while one is already in flight.
    pub fn begin(&self) -> Option<SubmitState> {
        if self.is_submitting() {
            None
        } else {
            Some(SubmitState::Submitting)
        }
    }

    /// Fold the boundary's result back into the lifecycle.
    pub fn resolve(result: Result<(), String>) -> SubmitState {
        match result {
            Ok(()) => SubmitState::Success,
            Err(message) => SubmitState::Error(message),
        }
    }

    /// Dismiss a completed outcome. An in-flight submission cannot be
    /// reset out from under the boundary that owns it.
    pub fn reset(&self) -> SubmitState {
        match self {
            SubmitState::Submitting => SubmitState::Submitting,
            _ => SubmitState::Idle,
        }
    }
}

/// Title of the currently selected contact type, if any. Selecting a
/// different card replaces the previous selection outright.
pub fn selected_type_title<'a>(
    types: &'a [ContactType],
    selected: Option<&str>,
) -> Option<&'a str> {
    let selected = selected?;
    types
        .iter()
        .find(|contact_type| contact_type.id == selected)
        .map(|contact_type| contact_type.title)
}

/// Local stand-in for the inquiry endpoint: logs the would-be request
/// body, waits a fixed delay, and always succeeds.
async fn submit_inquiry(inquiry: &ContactInquiry) -> Result<(), String> {
    if let Ok(payload) = serde_json::to_string(inquiry) {
        log!("Contact form submitted:", payload);
    }
    TimeoutFuture::new(config::SUBMIT_STUB_DELAY_MS).await;
    Ok(())
}

fn type_icon(icon: ContactIcon) -> Html {
    let paths: &[&str] = match icon {
        ContactIcon::Users => &[
            "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        ],
        ContactIcon::Handshake => &[
            "M7 11l5-5m0 0l5 5m-5-5v12M3 21h18M5 21v-6a2 2 0 012-2h10a2 2 0 012 2v6",
        ],
        ContactIcon::TrendingUp => &["M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"],
    };
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct ContactTypeCardProps {
    contact_type: ContactType,
    selected: bool,
    on_select: Callback<()>,
}

#[function_component(ContactTypeCard)]
fn contact_type_card(props: &ContactTypeCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };

    html! {
        <button
            class={classes!("contact-type-card", props.selected.then(|| "selected"))}
            onclick={onclick}
            type="button"
        >
            <div class="contact-type-radio">
                {
                    if props.selected {
                        html! {
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                 stroke-width="3" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M5 13l4 4L19 7" />
                            </svg>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="contact-type-icon">
                {type_icon(props.contact_type.icon)}
            </div>
            <h3>{props.contact_type.title}</h3>
            <p>{props.contact_type.description}</p>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub language: Language,
}

#[function_component(ContactPage)]
pub fn contact_page(props: &ContactPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let selected_type = use_state(|| None::<String>);
    let status = use_state(SubmitState::default);

    let page_content = contact::page_content(props.language);
    let contact_types = contact::contact_types(props.language);
    let contact_info = contact::contact_info();
    let copy = contact::copy(props.language);

    let is_submitting = status.is_submitting();

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let selected_type = selected_type.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Prior outcome is dismissed before the new attempt; a
            // submit while one is in flight is a no-op.
            let Some(next) = status.reset().begin() else {
                return;
            };
            status.set(next);

            let inquiry = ContactInquiry {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
                contact_type: (*selected_type).clone(),
            };

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let selected_type = selected_type.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = submit_inquiry(&inquiry).await;
                if outcome.is_ok() {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    selected_type.set(None);
                }
                status.set(SubmitState::resolve(outcome));
            });
        })
    };

    let on_email_click = Callback::from(|_: MouseEvent| {
        log!("Email link clicked");
    });

    let selected_title =
        selected_type_title(&contact_types, selected_type.as_deref()).map(str::to_owned);

    html! {
        <div class="contact-page">
            <div class="contact-inner">
                <header class="contact-header">
                    <h1>{page_content.headline}</h1>
                    <p>{page_content.intro}</p>
                </header>

                <section class="contact-types">
                    <h2>{copy.type_prompt}</h2>
                    <div class="contact-types-grid">
                        {
                            for contact_types.iter().map(|contact_type| {
                                let on_select = {
                                    let selected_type = selected_type.clone();
                                    let id = contact_type.id.to_string();
                                    Callback::from(move |_| selected_type.set(Some(id.clone())))
                                };
                                html! {
                                    <ContactTypeCard
                                        key={contact_type.id}
                                        contact_type={contact_type.clone()}
                                        selected={selected_type.as_deref() == Some(contact_type.id)}
                                        on_select={on_select}
                                    />
                                }
                            })
                        }
                    </div>
                </section>

                <section class="contact-form-panel">
                    <h2>{copy.form_title}</h2>
                    <form onsubmit={onsubmit}>
                        <div class="contact-form-row">
                            <div class="contact-field">
                                <label for="name">{copy.name_label}</label>
                                <input
                                    type="text"
                                    id="name"
                                    value={(*name).clone()}
                                    oninput={oninput_name}
                                    placeholder={copy.name_placeholder}
                                    disabled={is_submitting}
                                    required={true}
                                />
                            </div>
                            <div class="contact-field">
                                <label for="email">{copy.email_label}</label>
                                <input
                                    type="email"
                                    id="email"
                                    value={(*email).clone()}
                                    oninput={oninput_email}
                                    placeholder={copy.email_placeholder}
                                    disabled={is_submitting}
                                    required={true}
                                />
                            </div>
                        </div>

                        <div class="contact-field">
                            <label for="message">{copy.message_label}</label>
                            <textarea
                                id="message"
                                rows="5"
                                value={(*message).clone()}
                                oninput={oninput_message}
                                placeholder={copy.message_placeholder}
                                disabled={is_submitting}
                                required={true}
                            />
                        </div>

                        {
                            match &*status {
                                SubmitState::Success => html! {
                                    <div class="contact-banner success">
                                        <p>{copy.success_message}</p>
                                    </div>
                                },
                                SubmitState::Error(message) => html! {
                                    <div class="contact-banner error">
                                        <p>{message.clone()}</p>
                                    </div>
                                },
                                _ => html! {},
                            }
                        }

                        <div class="contact-form-footer">
                            <button type="submit" class="contact-submit" disabled={is_submitting}>
                                {
                                    if is_submitting {
                                        copy.submitting_label
                                    } else {
                                        copy.submit_label
                                    }
                                }
                                {
                                    if !is_submitting {
                                        html! {
                                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                                 stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                                <path d="M14 5l7 7m0 0l-7 7m7-7H3" />
                                            </svg>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </button>

                            {
                                if let Some(title) = selected_title {
                                    html! {
                                        <p class="contact-selected-type">
                                            {copy.selected_type_label}
                                            {" "}
                                            <span>{title}</span>
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </form>
                </section>

                <section class="contact-direct">
                    <p>{copy.direct_email_lead}</p>
                    <a
                        href={contact::mailto_href(&contact_info)}
                        onclick={on_email_click}
                    >
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                             stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
                        </svg>
                        {contact_info.email}
                    </a>
                </section>
            </div>

            <style>
                {r#"
                    .contact-page {
                        min-height: 100vh;
                        background: #0f172a;
                        color: #ffffff;
                    }

                    .contact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem 6rem;
                    }

                    .contact-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .contact-header h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 0 0 1rem;
                    }

                    .contact-header p {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.125rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }

                    .contact-types {
                        margin-bottom: 4rem;
                    }

                    .contact-types h2 {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #64748b;
                        margin: 0 0 1rem;
                    }

                    .contact-types-grid {
                        display: grid;
                        gap: 1rem;
                    }

                    @media (min-width: 768px) {
                        .contact-types-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .contact-type-card {
                        position: relative;
                        width: 100%;
                        text-align: left;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 2px solid #334155;
                        background: rgba(30, 41, 59, 0.5);
                        cursor: pointer;
                        transition: border-color 0.2s ease, background 0.2s ease;
                    }

                    .contact-type-card:hover {
                        border-color: rgba(34, 211, 238, 0.5);
                    }

                    .contact-type-card.selected {
                        border-color: #06b6d4;
                        background: rgba(8, 145, 178, 0.15);
                    }

                    .contact-type-radio {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 9999px;
                        border: 2px solid #475569;
                        transition: border-color 0.2s ease, background 0.2s ease;
                    }

                    .contact-type-card.selected .contact-type-radio {
                        border-color: #06b6d4;
                        background: #06b6d4;
                    }

                    .contact-type-radio svg {
                        width: 100%;
                        height: 100%;
                        padding: 0.1rem;
                        color: #ffffff;
                    }

                    .contact-type-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: #334155;
                        color: #cbd5e1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        transition: background 0.2s ease, color 0.2s ease;
                    }

                    .contact-type-card.selected .contact-type-icon {
                        background: #06b6d4;
                        color: #ffffff;
                    }

                    .contact-type-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .contact-type-card h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #ffffff;
                        margin: 0 0 0.5rem;
                    }

                    .contact-type-card p {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .contact-form-panel {
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 1px 2px rgba(2, 6, 23, 0.3);
                    }

                    .contact-form-panel h2 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 0 0 1.5rem;
                    }

                    .contact-form-row {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .contact-form-row {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    .contact-field {
                        display: flex;
                        flex-direction: column;
                    }

                    .contact-field label {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #cbd5e1;
                        margin-bottom: 0.5rem;
                    }

                    .contact-field input,
                    .contact-field textarea {
                        font-family: 'Inter', sans-serif;
                        font-size: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #475569;
                        background: #0f172a;
                        color: #ffffff;
                        transition: box-shadow 0.2s ease, border-color 0.2s ease;
                        resize: none;
                    }

                    .contact-field input::placeholder,
                    .contact-field textarea::placeholder {
                        color: #64748b;
                    }

                    .contact-field input:focus,
                    .contact-field textarea:focus {
                        outline: none;
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #06b6d4;
                    }

                    .contact-field input:disabled,
                    .contact-field textarea:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }

                    .contact-banner {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                    }

                    .contact-banner p {
                        font-family: 'Inter', sans-serif;
                        font-weight: 500;
                        margin: 0;
                    }

                    .contact-banner.success {
                        background: rgba(22, 101, 52, 0.3);
                        border: 1px solid #166534;
                    }

                    .contact-banner.success p {
                        color: #86efac;
                    }

                    .contact-banner.error {
                        background: rgba(153, 27, 27, 0.3);
                        border: 1px solid #991b1b;
                    }

                    .contact-banner.error p {
                        color: #fca5a5;
                    }

                    .contact-form-footer {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .contact-form-footer {
                            flex-direction: row;
                            align-items: center;
                            justify-content: space-between;
                        }
                    }

                    .contact-submit {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 2rem;
                        background: #0891b2;
                        color: #ffffff;
                        font-family: 'Inter', sans-serif;
                        font-size: 1rem;
                        font-weight: 600;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
                        transition: background 0.2s ease, box-shadow 0.2s ease;
                    }

                    .contact-submit:hover {
                        background: #0e7490;
                        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.4);
                    }

                    .contact-submit:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                        background: #0891b2;
                    }

                    .contact-submit svg {
                        width: 1rem;
                        height: 1rem;
                    }

                    .contact-selected-type {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        margin: 0;
                    }

                    .contact-selected-type span {
                        font-weight: 500;
                        color: #22d3ee;
                    }

                    .contact-direct {
                        margin-top: 3rem;
                        text-align: center;
                    }

                    .contact-direct p {
                        font-family: 'Inter', sans-serif;
                        color: #64748b;
                        margin: 0 0 0.75rem;
                    }

                    .contact-direct a {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-family: 'Inter', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #22d3ee;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .contact-direct a:hover {
                        color: #67e8f9;
                    }

                    .contact-direct svg {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_begins_only_from_a_settled_state() {
        assert_eq!(SubmitState::Idle.begin(), Some(SubmitState::Submitting));
        assert_eq!(SubmitState::Success.begin(), Some(SubmitState::Submitting));
        assert_eq!(
            SubmitState::Error("boom".into()).begin(),
            Some(SubmitState::Submitting)
        );
        // Submitting again while in flight is a no-op.
        assert_eq!(SubmitState::Submitting.begin(), None);
    }

    #[test]
    fn begin_clears_a_prior_outcome() {
        let state = SubmitState::Error("unreachable".into());
        let next = state.reset().begin();
        assert_eq!(next, Some(SubmitState::Submitting));
    }

    #[test]
    fn resolve_maps_the_boundary_result() {
        assert_eq!(SubmitState::resolve(Ok(())), SubmitState::Success);
        assert_eq!(
            SubmitState::resolve(Err("network down".into())),
            SubmitState::Error("network down".into())
        );
    }

    #[test]
    fn reset_dismisses_outcomes_but_not_in_flight_submissions() {
        assert_eq!(SubmitState::Success.reset(), SubmitState::Idle);
        assert_eq!(SubmitState::Error("x".into()).reset(), SubmitState::Idle);
        assert_eq!(SubmitState::Idle.reset(), SubmitState::Idle);
        assert_eq!(SubmitState::Submitting.reset(), SubmitState::Submitting);
        // Which is what makes reset-then-begin safe on every submit.
        assert_eq!(SubmitState::Submitting.reset().begin(), None);
    }

    #[test]
    fn selecting_a_type_replaces_the_previous_one() {
        let types = contact::contact_types(Language::En);

        let first = selected_type_title(&types, Some("experts"));
        assert_eq!(first, Some("Join as an Expert"));

        let replaced = selected_type_title(&types, Some("investors"));
        assert_eq!(replaced, Some("Invest in the Future"));

        assert_eq!(selected_type_title(&types, None), None);
        assert_eq!(selected_type_title(&types, Some("unknown")), None);
    }
}
