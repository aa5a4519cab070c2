use yew::prelude::*;

use crate::content::vision::{CallToAction, CtaVariant};

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title_plain: &'static str,
    pub title_accent: &'static str,
    pub lead: &'static str,
    pub calls_to_action: Vec<CallToAction>,
    /// Emits the activated CTA's target-section id, once per activation.
    pub on_navigate: Callback<String>,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-glow cta-glow-cyan"></div>
            <div class="cta-glow cta-glow-lime"></div>

            <div class="cta-inner">
                <h2>
                    <span class="cta-title-plain">{props.title_plain}</span>
                    <br />
                    <span class="cta-title-accent">{props.title_accent}</span>
                </h2>
                <p class="cta-lead">{props.lead}</p>

                <div class="cta-buttons">
                    {
                        for props.calls_to_action.iter().map(|cta| {
                            let on_click = {
                                let on_navigate = props.on_navigate.clone();
                                let target = cta.target_section.to_string();
                                Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()))
                            };
                            let variant_class = match cta.variant {
                                CtaVariant::Primary => "cta-primary",
                                CtaVariant::Secondary => "cta-secondary",
                            };
                            html! {
                                <button key={cta.id} class={classes!("cta-button", variant_class)} onclick={on_click}>
                                    <span>{cta.label}</span>
                                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                         stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M5 12h14" />
                                        <path d="m12 5 7 7-7 7" />
                                    </svg>
                                    <span class="cta-hint">{cta.description}</span>
                                </button>
                            }
                        })
                    }
                </div>

                <div class="cta-tail">
                    <div class="cta-tail-line"></div>
                    <div class="cta-tail-dot"></div>
                </div>
            </div>

            <style>
                {r#"
                    .cta-section {
                        position: relative;
                        padding: 8rem 1.5rem;
                        overflow: hidden;
                    }

                    .cta-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }

                    .cta-glow-cyan {
                        top: 0;
                        left: 25%;
                        background: rgba(6, 182, 212, 0.1);
                    }

                    .cta-glow-lime {
                        bottom: 0;
                        right: 25%;
                        background: rgba(132, 204, 22, 0.1);
                    }

                    .cta-inner {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .cta-inner h2 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }

                    .cta-title-plain {
                        color: #ffffff;
                    }

                    .cta-title-accent {
                        background: linear-gradient(to right, #22d3ee, #a3e635);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .cta-lead {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.25rem;
                        color: #94a3b8;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        line-height: 1.7;
                    }

                    .cta-buttons {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        align-items: center;
                        justify-content: center;
                    }

                    @media (min-width: 640px) {
                        .cta-buttons {
                            flex-direction: row;
                        }
                    }

                    .cta-button {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        border: none;
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease,
                                    border-color 0.3s ease;
                    }

                    .cta-button:hover {
                        transform: scale(1.05);
                    }

                    .cta-button svg {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.3s ease;
                    }

                    .cta-button:hover svg {
                        transform: translateX(0.25rem);
                    }

                    .cta-primary {
                        background: linear-gradient(to right, #06b6d4, #84cc16);
                        color: #020617;
                    }

                    .cta-primary:hover {
                        box-shadow: 0 25px 50px rgba(6, 182, 212, 0.5);
                    }

                    .cta-secondary {
                        background: #1e293b;
                        color: #ffffff;
                        border: 2px solid #334155;
                    }

                    .cta-secondary:hover {
                        border-color: #84cc16;
                        box-shadow: 0 25px 50px rgba(132, 204, 22, 0.3);
                    }

                    .cta-hint {
                        position: absolute;
                        bottom: -2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        white-space: nowrap;
                        font-family: 'Inter', sans-serif;
                        font-size: 0.75rem;
                        font-weight: 400;
                        color: #64748b;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .cta-button:hover .cta-hint {
                        opacity: 1;
                    }

                    .cta-tail {
                        margin-top: 6rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }

                    .cta-tail-line {
                        width: 0.25rem;
                        height: 4rem;
                        border-radius: 9999px;
                        background: linear-gradient(to bottom, #84cc16, transparent);
                    }

                    .cta-tail-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: #84cc16;
                        animation: ctaPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    @keyframes ctaPulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                "#}
            </style>
        </section>
    }
}
