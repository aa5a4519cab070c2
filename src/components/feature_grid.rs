use yew::prelude::*;

use crate::content::vision::{CityFeature, FeatureIcon};

fn icon_svg(icon: FeatureIcon) -> Html {
    let paths: &[&str] = match icon {
        FeatureIcon::Brain => &[
            "M12 4.5a2.5 2.5 0 0 0-4.96-.46 2.5 2.5 0 0 0-1.98 3 2.5 2.5 0 0 0-1.32 4.24 3 3 0 0 0 .34 5.58 2.5 2.5 0 0 0 2.96 3.08A2.5 2.5 0 0 0 12 19.5Z",
            "M12 4.5a2.5 2.5 0 0 1 4.96-.46 2.5 2.5 0 0 1 1.98 3 2.5 2.5 0 0 1 1.32 4.24 3 3 0 0 1-.34 5.58 2.5 2.5 0 0 1-2.96 3.08A2.5 2.5 0 0 1 12 19.5Z",
        ],
        FeatureIcon::ShieldCheck => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        FeatureIcon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        FeatureIcon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        FeatureIcon::Database => &[
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
            "M21 5a9 3 0 1 1-18 0 9 3 0 0 1 18 0",
        ],
        FeatureIcon::Wifi => &[
            "M5 13a10 10 0 0 1 14 0",
            "M8.5 16.5a5 5 0 0 1 7 0",
            "M2 8.82a15 15 0 0 1 20 0",
            "M12 20h.01",
        ],
        FeatureIcon::Home => &[
            "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        FeatureIcon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
            "M12 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
        ],
    };

    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor"
             stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub features: Vec<CityFeature>,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <div class="feature-grid">
            {
                for props.features.iter().enumerate().map(|(index, feature)| {
                    let delay = format!("animation-delay: {}ms;", index * 50);
                    html! {
                        <div key={feature.id} class="feature-card" style={delay}>
                            <div class="feature-card-icon">
                                {icon_svg(feature.icon)}
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }
                })
            }

            <style>
                {r#"
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(1, 1fr);
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .feature-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(30, 41, 59, 0.5);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        backdrop-filter: blur(4px);
                        transition: transform 0.3s ease, border-color 0.3s ease,
                                    background 0.3s ease, box-shadow 0.3s ease;
                        animation: featureFadeInScale 0.6s ease-out backwards;
                    }

                    .feature-card:hover {
                        background: #1e293b;
                        border-color: rgba(6, 182, 212, 0.5);
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px rgba(6, 182, 212, 0.1);
                    }

                    .feature-card-icon {
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to bottom right,
                            rgba(6, 182, 212, 0.2), rgba(132, 204, 22, 0.2));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .feature-card-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #22d3ee;
                    }

                    .feature-card h3 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #ffffff;
                        margin: 0 0 0.5rem;
                        transition: color 0.3s ease;
                    }

                    .feature-card:hover h3 {
                        color: #22d3ee;
                    }

                    .feature-card p {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        line-height: 1.7;
                        margin: 0;
                    }

                    @keyframes featureFadeInScale {
                        from {
                            opacity: 0;
                            transform: scale(0.9) translateY(20px);
                        }
                        to {
                            opacity: 1;
                            transform: scale(1) translateY(0);
                        }
                    }
                "#}
            </style>
        </div>
    }
}
