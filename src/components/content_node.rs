use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::RevealObserver;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NodeSide {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NodeVariant {
    Goal,
    Problem,
    Solution,
}

impl NodeVariant {
    fn class(self) -> &'static str {
        match self {
            NodeVariant::Goal => "node-goal",
            NodeVariant::Problem => "node-problem",
            NodeVariant::Solution => "node-solution",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentNodeProps {
    pub title: &'static str,
    pub description: &'static str,
    pub index: usize,
    pub side: NodeSide,
    pub variant: NodeVariant,
}

/// One card on the journey road. Slides in the first time it enters the
/// viewport, staggered by its position in the list.
#[function_component(ContentNode)]
pub fn content_node(props: &ContentNodeProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node_ref.cast::<Element>().and_then(|element| {
                    RevealObserver::observe(&element, move || revealed.set(true))
                });
                move || drop(observer)
            },
            (),
        );
    }

    let class = classes!(
        "content-node",
        props.variant.class(),
        match props.side {
            NodeSide::Left => "node-left",
            NodeSide::Right => "node-right",
        },
        revealed.then(|| "revealed"),
    );
    let delay_style = format!("transition-delay: {}ms;", props.index * 100);

    html! {
        <div ref={node_ref} class={class} style={delay_style}>
            <div class="content-node-dot"></div>
            <div class="content-node-card">
                <div class="content-node-badge">{props.index + 1}</div>
                <h3>{props.title}</h3>
                <p>{props.description}</p>
            </div>

            <style>
                {r#"
                    .content-node {
                        position: relative;
                        max-width: 42rem;
                        margin: 0 auto;
                        opacity: 0;
                        transform: translateY(2rem);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }

                    .content-node.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .content-node-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid;
                        backdrop-filter: blur(4px);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .content-node-card:hover {
                        transform: scale(1.02);
                    }

                    .content-node-card h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: #ffffff;
                        margin: 0 0 1rem;
                    }

                    .content-node-card p {
                        font-family: 'Inter', sans-serif;
                        color: #cbd5e1;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .content-node-badge {
                        position: absolute;
                        top: -1rem;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ffffff;
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }

                    .content-node-dot {
                        display: none;
                        position: absolute;
                        top: 2rem;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 9999px;
                    }

                    .node-goal .content-node-card {
                        border-color: rgba(6, 182, 212, 0.3);
                        background: rgba(6, 182, 212, 0.05);
                    }

                    .node-goal .content-node-card:hover {
                        box-shadow: 0 25px 50px rgba(6, 182, 212, 0.2);
                    }

                    .node-goal .content-node-badge,
                    .node-goal .content-node-dot {
                        background: #06b6d4;
                        filter: drop-shadow(0 0 8px #06b6d4);
                    }

                    .node-problem .content-node-card {
                        border-color: rgba(239, 68, 68, 0.3);
                        background: rgba(239, 68, 68, 0.05);
                    }

                    .node-problem .content-node-card:hover {
                        box-shadow: 0 25px 50px rgba(239, 68, 68, 0.2);
                    }

                    .node-problem .content-node-badge,
                    .node-problem .content-node-dot {
                        background: #ef4444;
                        filter: drop-shadow(0 0 8px #ef4444);
                    }

                    .node-solution .content-node-card {
                        border-color: rgba(132, 204, 22, 0.3);
                        background: rgba(132, 204, 22, 0.05);
                    }

                    .node-solution .content-node-card:hover {
                        box-shadow: 0 25px 50px rgba(132, 204, 22, 0.2);
                    }

                    .node-solution .content-node-badge,
                    .node-solution .content-node-dot {
                        background: #84cc16;
                        filter: drop-shadow(0 0 8px #84cc16);
                    }

                    @media (min-width: 769px) {
                        .content-node-dot {
                            display: block;
                        }

                        .node-left {
                            margin-right: auto;
                            margin-left: 0;
                            padding-right: 3rem;
                        }

                        .node-left .content-node-dot {
                            right: 0;
                            transform: translateX(50%);
                        }

                        .node-left .content-node-badge {
                            left: 2rem;
                        }

                        .node-right {
                            margin-left: auto;
                            margin-right: 0;
                            padding-left: 3rem;
                        }

                        .node-right .content-node-dot {
                            left: 0;
                            transform: translateX(-50%);
                        }

                        .node-right .content-node-badge {
                            right: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
