use yew::prelude::*;
use yew_router::components::Link;

use crate::content::Language;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    pub language: Language,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let (message, home_label) = match props.language {
        Language::Ua => ("Сторінку не знайдено", "На головну"),
        Language::En => ("Page not found", "Return Home"),
    };

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{message}</p>
            <Link<Route> to={Route::Vision} classes="not-found-home">
                {home_label}
            </Link<Route>>

            <style>
                {r#"
                    .not-found-page {
                        min-height: calc(100vh - 4rem);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        background: #020617;
                    }

                    .not-found-page h1 {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: clamp(3.75rem, 10vw, 4.5rem);
                        font-weight: 700;
                        color: #ffffff;
                        margin: 0 0 1rem;
                    }

                    .not-found-page p {
                        font-family: 'Inter', sans-serif;
                        font-size: 1.25rem;
                        color: #94a3b8;
                        margin: 0 0 2rem;
                        text-align: center;
                    }

                    .not-found-home {
                        padding: 0.75rem 1.5rem;
                        background: #0891b2;
                        color: #ffffff;
                        font-family: 'Inter', sans-serif;
                        font-weight: 500;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: background 0.2s ease;
                    }

                    .not-found-home:hover {
                        background: #0e7490;
                    }
                "#}
            </style>
        </div>
    }
}
