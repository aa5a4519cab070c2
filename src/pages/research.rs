use yew::prelude::*;

use crate::content::{research, Language};

#[derive(Properties, PartialEq)]
pub struct ResearchPageProps {
    pub language: Language,
}

#[function_component(ResearchPage)]
pub fn research_page(props: &ResearchPageProps) -> Html {
    let placeholder = research::placeholder(props.language);

    html! {
        <div class="research-page">
            <div class="research-card">
                <div class="research-icon">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
                         stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M19.428 15.428a2 2 0 0 0-1.022-.547l-2.387-.477a6 6 0 0 0-3.86.517l-.318.158a6 6 0 0 1-3.86.517L6.05 15.21a2 2 0 0 0-1.806.547" />
                        <path d="M8 4h8l-1 1v5.172a2 2 0 0 0 .586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 0 0 9 10.172V5L8 4z" />
                    </svg>
                </div>
                <h1>{placeholder.title}</h1>
                <p>{placeholder.message}</p>
                <div class="research-status">
                    <span class="research-status-dot"></span>
                    {placeholder.status_badge}
                </div>
            </div>

            <style>
                {r#"
                    .research-page {
                        min-height: 100vh;
                        background: #0f172a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .research-card {
                        max-width: 28rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }

                    .research-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 1rem;
                        background: rgba(34, 211, 238, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .research-icon svg {
                        width: 2rem;
                        height: 2rem;
                        color: #22d3ee;
                    }

                    .research-card h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #ffffff;
                        margin: 0 0 0.75rem;
                    }

                    .research-card p {
                        font-family: 'Inter', sans-serif;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    .research-status {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(163, 230, 53, 0.1);
                        color: #bef264;
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .research-status-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #84cc16;
                        animation: researchPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    @keyframes researchPulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                "#}
            </style>
        </div>
    }
}
