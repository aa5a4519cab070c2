use yew::prelude::*;

use crate::scroll::{self, ScrollListener};

/// Vertical "road" spine behind the vision sections. A gradient line and
/// a glowing dot advance along the dashed background path in proportion
/// to how far the user has scrolled through the whole document.
#[function_component(JourneyRoad)]
pub fn journey_road() -> Html {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    if let Some(window) = web_sys::window() {
                        progress.set(scroll::document_progress(
                            ScrollListener::scroll_top(&window),
                            ScrollListener::viewport_height(&window),
                            ScrollListener::document_height(&window),
                        ));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let marker = format!("{}%", *progress * 100.0);

    html! {
        <svg class="journey-road">
            <line
                x1="50%" y1="0" x2="50%" y2="100%"
                stroke="rgba(6, 182, 212, 0.1)"
                stroke-width="2"
                stroke-dasharray="8 8"
            />
            <line
                x1="50%" y1="0" x2="50%" y2={marker.clone()}
                stroke="url(#roadGradient)"
                stroke-width="3"
                stroke-linecap="round"
                class="journey-road-progress"
            />
            <defs>
                <linearGradient id="roadGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" stop-color="#06b6d4" stop-opacity="0.8" />
                    <stop offset="50%" stop-color="#84cc16" stop-opacity="0.9" />
                    <stop offset="100%" stop-color="#10b981" stop-opacity="1" />
                </linearGradient>
            </defs>
            <circle cx="50%" cy={marker} r="6" fill="#84cc16" class="journey-road-dot" />

            <style>
                {r#"
                    .journey-road {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        height: 100%;
                        width: 0.5rem;
                        transform: translateX(-50%);
                        pointer-events: none;
                        min-height: 100%;
                    }

                    .journey-road-progress {
                        filter: drop-shadow(0 0 8px rgba(6, 182, 212, 0.5));
                        transition: y2 0.1s ease-out;
                    }

                    .journey-road-dot {
                        filter: drop-shadow(0 0 12px rgba(132, 204, 22, 0.8));
                        transition: cy 0.1s ease-out;
                    }

                    @media (max-width: 768px) {
                        .journey-road {
                            display: none;
                        }
                    }
                "#}
            </style>
        </svg>
    }
}
