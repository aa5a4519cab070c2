use yew::prelude::*;

use crate::config;
use crate::content::vision::Hero;
use crate::scroll::{self, ScrollListener};

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub hero: Hero,
    pub scroll_hint: &'static str,
}

/// Full-viewport hero with a parallax background layer. The background
/// translates by `scroll × PARALLAX_DAMPING` so it lags behind the
/// foreground while the user scrolls away from the top.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let scroll_top = use_state(|| 0.0f64);

    {
        let scroll_top = scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    if let Some(window) = web_sys::window() {
                        scroll_top.set(ScrollListener::scroll_top(&window));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let parallax = scroll::parallax_offset(*scroll_top, config::PARALLAX_DAMPING);
    let background_style = format!(
        "transform: translateY({parallax}px); background-image: url('{}');",
        props.hero.image_url
    );

    html! {
        <section class="vision-hero">
            <div
                class="vision-hero-background"
                style={background_style}
                role="img"
                aria-label={props.hero.image_alt}
            >
                <div class="vision-hero-overlay"></div>
                <div class="vision-hero-grid"></div>
                <div class="vision-hero-orb orb-cyan"></div>
                <div class="vision-hero-orb orb-lime"></div>
            </div>

            <div class="vision-hero-content">
                <h1>
                    <span class="vision-hero-title">{props.hero.title}</span>
                    <span class="vision-hero-subtitle">{props.hero.subtitle}</span>
                </h1>
                <div class="vision-hero-scroll-hint">
                    <span>{props.scroll_hint}</span>
                    <div class="scroll-indicator">
                        <div class="scroll-indicator-dot"></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .vision-hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: flex-end;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .vision-hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        background-repeat: no-repeat;
                    }

                    .vision-hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom,
                            rgba(15, 23, 42, 0.8),
                            rgba(2, 6, 23, 0.7),
                            rgba(2, 6, 23, 0.9));
                    }

                    .vision-hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background-image:
                            linear-gradient(to right, rgba(6, 182, 212, 0.1) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(6, 182, 212, 0.1) 1px, transparent 1px);
                        background-size: 80px 80px;
                    }

                    .vision-hero-orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        animation: heroPulse 3s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    .orb-cyan {
                        top: 25%;
                        left: 25%;
                        background: rgba(6, 182, 212, 0.2);
                    }

                    .orb-lime {
                        bottom: 25%;
                        right: 25%;
                        background: rgba(132, 204, 22, 0.2);
                    }

                    .vision-hero-content {
                        position: relative;
                        z-index: 10;
                        padding: 0 1rem 8rem;
                        text-align: center;
                        max-width: 64rem;
                    }

                    .vision-hero-content h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 0 0 1.5rem;
                        animation: heroFadeInUp 1s ease-out;
                    }

                    .vision-hero-title {
                        display: block;
                        color: #ffffff;
                        font-size: clamp(2.5rem, 7vw, 5rem);
                        margin-bottom: 0.5rem;
                    }

                    .vision-hero-subtitle {
                        display: block;
                        font-size: clamp(1.75rem, 5vw, 3.5rem);
                        background: linear-gradient(to right, #22d3ee, #a3e635, #34d399);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .vision-hero-scroll-hint {
                        margin-top: 4rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        opacity: 0.6;
                    }

                    .vision-hero-scroll-hint span {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #94a3b8;
                    }

                    .scroll-indicator {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(34, 211, 238, 0.5);
                        border-radius: 9999px;
                        display: flex;
                        align-items: flex-start;
                        justify-content: center;
                        padding: 0.5rem;
                    }

                    .scroll-indicator-dot {
                        width: 0.25rem;
                        height: 0.5rem;
                        background: #22d3ee;
                        border-radius: 9999px;
                        animation: heroBounce 1s infinite;
                    }

                    @keyframes heroFadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    @keyframes heroPulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }

                    @keyframes heroBounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(0.4rem); }
                    }
                "#}
            </style>
        </section>
    }
}
