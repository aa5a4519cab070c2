use web_sys::Element;
use yew::prelude::*;

use crate::content::vision::VisualConcept;
use crate::scroll::{self, ScrollListener};

#[derive(Properties, PartialEq)]
pub struct VisualConceptsProps {
    pub title: &'static str,
    pub lead: &'static str,
    pub concepts: Vec<VisualConcept>,
}

/// Concept gallery with one emphasized card. While the section midpoint
/// is near the viewport midpoint the emphasized card follows the scroll
/// position; the dot selector below sets it directly, and keeps it until
/// the next in-band scroll sample takes over again.
#[function_component(VisualConceptsSection)]
pub fn visual_concepts_section(props: &VisualConceptsProps) -> Html {
    let active = use_state(|| 0usize);
    let section_ref = use_node_ref();

    {
        let active = active.clone();
        let section_ref = section_ref.clone();
        let len = props.concepts.len();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    let (Some(window), Some(section)) =
                        (web_sys::window(), section_ref.cast::<Element>())
                    else {
                        return;
                    };
                    let rect = section.get_bounding_client_rect();
                    let viewport = ScrollListener::viewport_height(&window);
                    if let Some(index) = scroll::active_item(viewport, rect.top(), rect.height(), len)
                    {
                        active.set(index);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(index))
    };

    html! {
        <section ref={section_ref} class="concepts-section">
            <div class="concepts-inner">
                <h2 class="section-title concepts-title">{props.title}</h2>
                <p class="section-lead">{props.lead}</p>

                <div class="concepts-grid">
                    {
                        for props.concepts.iter().enumerate().map(|(index, concept)| {
                            let is_active = *active == index;
                            html! {
                                <div
                                    key={concept.id}
                                    class={classes!("concept-card", is_active.then(|| "active"))}
                                >
                                    <div class="concept-image">
                                        <img src={concept.image_url} alt={concept.image_alt} loading="lazy" />
                                        { if is_active { html! { <div class="concept-ring"></div> } } else { html! {} } }
                                    </div>
                                    <div class="concept-text">
                                        <h3>{concept.title}</h3>
                                        <p>{concept.description}</p>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>

                <div class="concepts-dots">
                    {
                        for (0..props.concepts.len()).map(|index| {
                            html! {
                                <button
                                    class={classes!("concept-dot", (*active == index).then(|| "active"))}
                                    onclick={select(index)}
                                    aria-label={format!("View concept {}", index + 1)}
                                />
                            }
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .concepts-section {
                        position: relative;
                        padding: 8rem 1.5rem;
                    }

                    .concepts-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .concepts-title {
                        background: linear-gradient(to right, #c084fc, #f472b6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .concepts-grid {
                        display: grid;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .concepts-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    .concept-card {
                        transition: transform 0.7s ease, opacity 0.7s ease;
                        transform: scale(1);
                        opacity: 0.6;
                    }

                    .concept-card.active {
                        transform: scale(1.05);
                        opacity: 1;
                    }

                    .concept-image {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #1e293b;
                        border: 1px solid #334155;
                    }

                    .concept-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .concept-ring {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        box-shadow: 0 0 0 2px #22d3ee;
                    }

                    .concept-text {
                        margin-top: 1.5rem;
                    }

                    .concept-text h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #ffffff;
                        margin: 0 0 0.5rem;
                        transition: color 0.3s ease;
                    }

                    .concept-card.active .concept-text h3 {
                        color: #22d3ee;
                    }

                    .concept-text p {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .concepts-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 3rem;
                    }

                    .concept-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: #334155;
                        cursor: pointer;
                        transition: background 0.3s ease, width 0.3s ease;
                    }

                    .concept-dot:hover {
                        background: #475569;
                    }

                    .concept-dot.active {
                        background: #22d3ee;
                        width: 2rem;
                    }
                "#}
            </style>
        </section>
    }
}
