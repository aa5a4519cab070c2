use gloo_console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::concepts::VisualConceptsSection;
use crate::components::content_node::{ContentNode, NodeSide, NodeVariant};
use crate::components::cta::CtaSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::HeroSection;
use crate::components::journey::JourneyRoad;
use crate::components::team::TeamSection;
use crate::content::{vision, Language};
use crate::route_for_target;

#[derive(Properties, PartialEq)]
pub struct VisionPageProps {
    pub language: Language,
}

#[function_component(VisionPage)]
pub fn vision_page(props: &VisionPageProps) -> Html {
    let navigator = use_navigator();

    let on_navigate = Callback::from(move |target: String| {
        if let (Some(navigator), Some(route)) = (navigator.clone(), route_for_target(&target)) {
            navigator.push(&route);
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    // Expert detail views are not built yet; the card click only logs.
    let on_view_expert = Callback::from(|id: String| {
        log!("View expert:", id);
    });

    let copy = vision::copy(props.language);
    let goals = vision::goals(props.language);
    let problems = vision::problems(props.language);
    let solutions = vision::solutions(props.language);

    html! {
        <div class="vision-page">
            <HeroSection hero={vision::hero(props.language)} scroll_hint={copy.scroll_hint} />

            <div class="vision-journey">
                <JourneyRoad />

                <section class="vision-section">
                    <div class="vision-section-inner">
                        <h2 class="section-title goals-title">{copy.goals_title}</h2>
                        <p class="section-lead">{copy.goals_lead}</p>
                        <div class="vision-nodes">
                            {
                                for goals.iter().enumerate().map(|(index, goal)| html! {
                                    <ContentNode
                                        key={goal.id}
                                        title={goal.title}
                                        description={goal.description}
                                        index={index}
                                        side={if index % 2 == 0 { NodeSide::Left } else { NodeSide::Right }}
                                        variant={NodeVariant::Goal}
                                    />
                                })
                            }
                        </div>
                    </div>
                </section>

                <section class="vision-section alternate">
                    <div class="vision-section-inner">
                        <h2 class="section-title problems-title">{copy.problems_title}</h2>
                        <p class="section-lead">{copy.problems_lead}</p>
                        <div class="vision-nodes">
                            {
                                for problems.iter().enumerate().map(|(index, problem)| html! {
                                    <ContentNode
                                        key={problem.id}
                                        title={problem.title}
                                        description={problem.description}
                                        index={index}
                                        side={if index % 2 == 0 { NodeSide::Right } else { NodeSide::Left }}
                                        variant={NodeVariant::Problem}
                                    />
                                })
                            }
                        </div>
                    </div>
                </section>

                <section class="vision-section">
                    <div class="vision-section-inner">
                        <h2 class="section-title solutions-title">{copy.solutions_title}</h2>
                        <p class="section-lead">{copy.solutions_lead}</p>
                        <div class="vision-nodes">
                            {
                                for solutions.iter().enumerate().map(|(index, solution)| html! {
                                    <ContentNode
                                        key={solution.id}
                                        title={solution.title}
                                        description={solution.description}
                                        index={index}
                                        side={if index % 2 == 0 { NodeSide::Left } else { NodeSide::Right }}
                                        variant={NodeVariant::Solution}
                                    />
                                })
                            }
                        </div>
                    </div>
                </section>

                <VisualConceptsSection
                    title={copy.concepts_title}
                    lead={copy.concepts_lead}
                    concepts={vision::visual_concepts(props.language)}
                />

                <section class="vision-section alternate">
                    <div class="vision-section-inner">
                        <h2 class="section-title features-title">{copy.features_title}</h2>
                        <p class="section-lead">{copy.features_lead}</p>
                        <FeatureGrid features={vision::city_features(props.language)} />
                    </div>
                </section>

                <TeamSection
                    title={copy.team_title}
                    lead={copy.team_lead}
                    experts={vision::experts(props.language)}
                    on_view_expert={on_view_expert}
                />

                <CtaSection
                    title_plain={copy.cta_title_plain}
                    title_accent={copy.cta_title_accent}
                    lead={copy.cta_lead}
                    calls_to_action={vision::calls_to_action(props.language)}
                    on_navigate={on_navigate}
                />
            </div>

            <style>
                {r#"
                    .vision-page {
                        position: relative;
                        background: #020617;
                        color: #ffffff;
                        overflow: hidden;
                    }

                    .vision-journey {
                        position: relative;
                    }

                    .vision-section {
                        position: relative;
                        padding: 8rem 1.5rem;
                    }

                    .vision-section.alternate {
                        background: rgba(15, 23, 42, 0.5);
                    }

                    .vision-section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .section-title {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        font-weight: 700;
                        text-align: center;
                        margin: 0 0 1rem;
                    }

                    .section-lead {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.25rem;
                        color: #94a3b8;
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 5rem;
                    }

                    .goals-title {
                        background: linear-gradient(to right, #22d3ee, #a3e635);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .problems-title {
                        background: linear-gradient(to right, #f87171, #fb923c);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .solutions-title {
                        background: linear-gradient(to right, #a3e635, #34d399);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .features-title {
                        background: linear-gradient(to right, #22d3ee, #60a5fa);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .vision-nodes {
                        display: grid;
                        gap: 3rem;
                    }
                "#}
            </style>
        </div>
    }
}
