use yew::prelude::*;

use crate::content::{organization, Language};

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub language: Language,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let org = organization::organization(props.language);
    let experts = organization::experts(props.language);
    let copy = organization::copy(props.language);

    html! {
        <div class="about-page">
            <div class="about-inner">
                <header class="about-header">
                    <h1>{org.name}</h1>
                    <p class="about-mission">{org.mission}</p>
                    <p class="about-description">{org.description}</p>
                </header>

                <section>
                    <h2 class="about-team-heading">{copy.team_heading}</h2>
                    <div class="about-roster">
                        {
                            for experts.iter().map(|expert| html! {
                                <div key={expert.id} class="about-expert-row">
                                    <div class="about-expert-main">
                                        <h3>{expert.name}</h3>
                                        <p>{expert.role}</p>
                                    </div>
                                    <span class="about-expert-domain">{expert.expertise}</span>
                                </div>
                            })
                        }
                    </div>
                </section>
            </div>

            <style>
                {r#"
                    .about-page {
                        min-height: 100vh;
                        background: #0f172a;
                        color: #ffffff;
                    }

                    .about-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem 6rem;
                    }

                    .about-header {
                        margin-bottom: 3rem;
                    }

                    .about-header h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        font-weight: 700;
                        letter-spacing: -0.025em;
                        margin: 0 0 0.5rem;
                    }

                    .about-mission {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: #22d3ee;
                        margin: 0 0 1.5rem;
                    }

                    .about-description {
                        font-family: 'Inter', sans-serif;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .about-team-heading {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #64748b;
                        margin: 0 0 1rem;
                    }

                    .about-roster {
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        border-radius: 1rem;
                        padding: 0 1.5rem;
                    }

                    .about-expert-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 0;
                        border-bottom: 1px solid rgba(51, 65, 85, 0.5);
                    }

                    .about-expert-row:last-child {
                        border-bottom: none;
                    }

                    .about-expert-main {
                        flex: 1;
                        min-width: 0;
                    }

                    .about-expert-main h3 {
                        font-family: 'Inter', sans-serif;
                        font-size: 1rem;
                        font-weight: 500;
                        color: #ffffff;
                        margin: 0;
                    }

                    .about-expert-main p {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        margin: 0.25rem 0 0;
                    }

                    .about-expert-domain {
                        margin-left: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(34, 211, 238, 0.1);
                        color: #67e8f9;
                        font-family: 'Inter', sans-serif;
                        font-size: 0.75rem;
                        font-weight: 500;
                        white-space: nowrap;
                    }
                "#}
            </style>
        </div>
    }
}
