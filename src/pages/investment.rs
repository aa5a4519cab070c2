use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{investment, Language};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct InvestmentPageProps {
    pub language: Language,
}

#[function_component(InvestmentPage)]
pub fn investment_page(props: &InvestmentPageProps) -> Html {
    let navigator = use_navigator();

    let on_contact_click = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Contact);
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let hero = investment::hero(props.language);
    let key_points = investment::key_points(props.language);
    let cta = investment::cta(props.language);

    html! {
        <div class="investment-page">
            <section class="investment-hero">
                <div class="investment-glow glow-cyan"></div>
                <div class="investment-glow glow-lime"></div>
                <div class="investment-hero-inner">
                    <h1>{hero.headline}</h1>
                    <p>{hero.subheadline}</p>
                </div>
            </section>

            <section class="investment-points">
                {
                    for key_points.iter().enumerate().map(|(index, point)| {
                        let delay = format!("animation-delay: {}ms;", index * 100);
                        html! {
                            <article key={point.id} class="investment-point" style={delay}>
                                <div class="investment-point-accent"></div>
                                <div class="investment-point-number">
                                    {format!("{:02}", index + 1)}
                                </div>
                                <h3>{point.title}</h3>
                                <p>{point.description}</p>
                            </article>
                        }
                    })
                }
            </section>

            <section class="investment-cta">
                <div class="investment-cta-panel">
                    <p>{cta.description}</p>
                    <button onclick={on_contact_click}>
                        {cta.text}
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </button>
                </div>
            </section>

            <style>
                {r#"
                    .investment-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #0f172a, #020617);
                        color: #ffffff;
                    }

                    .investment-hero {
                        position: relative;
                        overflow: hidden;
                    }

                    .investment-glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        pointer-events: none;
                    }

                    .glow-cyan {
                        top: -6rem;
                        right: -6rem;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(34, 211, 238, 0.05);
                    }

                    .glow-lime {
                        top: 50%;
                        left: -6rem;
                        width: 18rem;
                        height: 18rem;
                        background: rgba(163, 230, 53, 0.05);
                    }

                    .investment-hero-inner {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 7rem 1.5rem 6rem;
                        text-align: center;
                    }

                    .investment-hero-inner h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        line-height: 1.15;
                        margin: 0;
                    }

                    .investment-hero-inner p {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.25rem;
                        color: #cbd5e1;
                        max-width: 42rem;
                        margin: 1.5rem auto 0;
                        line-height: 1.7;
                    }

                    .investment-points {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem 6rem;
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .investment-points {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .investment-points {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .investment-point {
                        position: relative;
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        border-radius: 1rem;
                        padding: 2rem;
                        transition: box-shadow 0.3s ease, border-color 0.3s ease;
                        animation: pointFadeIn 0.6s ease-out backwards;
                    }

                    .investment-point:hover {
                        border-color: rgba(34, 211, 238, 0.4);
                        box-shadow: 0 20px 25px rgba(2, 6, 23, 0.5);
                    }

                    .investment-point-accent {
                        position: absolute;
                        top: 0;
                        left: 1.5rem;
                        right: 1.5rem;
                        height: 2px;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #06b6d4, #84cc16);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .investment-point:hover .investment-point-accent {
                        opacity: 1;
                    }

                    .investment-point-number {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: rgba(34, 211, 238, 0.1);
                        color: #22d3ee;
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .investment-point h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 0 0 0.75rem;
                    }

                    .investment-point p {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.95rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .investment-cta {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem 7rem;
                    }

                    .investment-cta-panel {
                        position: relative;
                        background: linear-gradient(to bottom right, #0891b2, #0e7490);
                        border-radius: 1.5rem;
                        padding: 3rem 2rem;
                        text-align: center;
                        overflow: hidden;
                    }

                    .investment-cta-panel p {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.125rem;
                        color: #cffafe;
                        max-width: 36rem;
                        margin: 0 auto 2rem;
                        line-height: 1.7;
                    }

                    .investment-cta-panel button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        background: #0f172a;
                        color: #22d3ee;
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1rem;
                        font-weight: 600;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(2, 6, 23, 0.3);
                        transition: background 0.2s ease, box-shadow 0.2s ease;
                    }

                    .investment-cta-panel button:hover {
                        background: #1e293b;
                        box-shadow: 0 20px 25px rgba(2, 6, 23, 0.4);
                    }

                    .investment-cta-panel button svg {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    @keyframes pointFadeIn {
                        from {
                            opacity: 0;
                            transform: translateY(16px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
