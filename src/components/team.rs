use yew::prelude::*;

use crate::content::vision::VisionExpert;

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    pub title: &'static str,
    pub lead: &'static str,
    pub experts: Vec<VisionExpert>,
    pub on_view_expert: Callback<String>,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    html! {
        <section class="team-section">
            <div class="team-inner">
                <h2 class="section-title team-title">{props.title}</h2>
                <p class="section-lead">{props.lead}</p>

                <div class="team-grid">
                    {
                        for props.experts.iter().enumerate().map(|(index, expert)| {
                            let on_click = {
                                let on_view_expert = props.on_view_expert.clone();
                                let id = expert.id.to_string();
                                Callback::from(move |_: MouseEvent| on_view_expert.emit(id.clone()))
                            };
                            let delay = format!("animation-delay: {}ms;", index * 80);
                            html! {
                                <button key={expert.id} class="expert-card" style={delay} onclick={on_click}>
                                    <div class="expert-avatar">
                                        <img src={expert.avatar_url} alt={expert.name} loading="lazy" />
                                    </div>
                                    <h3>{expert.name}</h3>
                                    <p class="expert-title">{expert.title}</p>
                                    <div class="expert-domain">
                                        <span>{expert.domain}</span>
                                    </div>
                                    <p class="expert-bio">{expert.bio}</p>
                                </button>
                            }
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                    .team-section {
                        position: relative;
                        padding: 8rem 1.5rem;
                    }

                    .team-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .team-title {
                        background: linear-gradient(to right, #a3e635, #22d3ee);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(1, 1fr);
                        gap: 2rem;
                    }

                    @media (min-width: 640px) {
                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .team-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }

                    @media (min-width: 1280px) {
                        .team-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .expert-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        text-align: left;
                        cursor: pointer;
                        transition: transform 0.3s ease, border-color 0.3s ease,
                                    background 0.3s ease, box-shadow 0.3s ease;
                        animation: expertFadeInUp 0.6s ease-out backwards;
                    }

                    .expert-card:hover {
                        background: #1e293b;
                        border-color: rgba(132, 204, 22, 0.5);
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px rgba(132, 204, 22, 0.1);
                    }

                    .expert-avatar {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                        border: 2px solid rgba(132, 204, 22, 0.3);
                        overflow: hidden;
                        background: #334155;
                        transition: border-color 0.3s ease;
                    }

                    .expert-card:hover .expert-avatar {
                        border-color: rgba(132, 204, 22, 0.6);
                    }

                    .expert-avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .expert-card h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #ffffff;
                        margin: 0 0 0.25rem;
                        transition: color 0.3s ease;
                    }

                    .expert-card:hover h3 {
                        color: #a3e635;
                    }

                    .expert-title {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #22d3ee;
                        margin: 0 0 0.5rem;
                    }

                    .expert-domain {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid #334155;
                        margin-bottom: 0.75rem;
                    }

                    .expert-domain span {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.75rem;
                        color: #94a3b8;
                    }

                    .expert-bio {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }

                    @keyframes expertFadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(20px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
