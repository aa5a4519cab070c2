use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod scroll;
mod shell;

mod components {
    pub mod concepts;
    pub mod content_node;
    pub mod cta;
    pub mod feature_grid;
    pub mod hero;
    pub mod journey;
    pub mod reveal;
    pub mod team;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod investment;
    pub mod not_found;
    pub mod research;
    pub mod vision;
}

use content::Language;
use pages::{
    about::AboutPage, contact::ContactPage, investment::InvestmentPage, not_found::NotFoundPage,
    research::ResearchPage, vision::VisionPage,
};
use shell::{Nav, ShellMode};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Vision,
    #[at("/investment")]
    Investment,
    #[at("/research")]
    Research,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route requested by a call-to-action's target-section id. Unknown
/// targets stay on the current page.
pub fn route_for_target(target_section: &str) -> Option<Route> {
    match target_section {
        "investment-opportunity" => Some(Route::Investment),
        "contact-engagement" => Some(Route::Contact),
        _ => None,
    }
}

fn switch(routes: Route, language: Language) -> Html {
    match routes {
        Route::Vision => {
            info!("Rendering Vision page");
            html! { <VisionPage language={language} /> }
        }
        Route::Investment => {
            info!("Rendering Investment page");
            html! { <InvestmentPage language={language} /> }
        }
        Route::Research => {
            info!("Rendering Research page");
            html! { <ResearchPage language={language} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage language={language} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage language={language} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFoundPage language={language} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppContentProps {
    language: Language,
    on_language_change: Callback<Language>,
}

#[function_component(AppContent)]
fn app_content(props: &AppContentProps) -> Html {
    let route = use_route::<Route>();

    // The vision page's hero owns the top of the viewport, so it gets
    // the minimal shell; everything else keeps the full header.
    let mode = match route {
        Some(Route::Vision) => ShellMode::Minimal,
        _ => ShellMode::Full,
    };

    let language = props.language;

    html! {
        <div lang={language.code()}>
            <Nav
                language={language}
                on_language_change={props.on_language_change.clone()}
                mode={mode}
            />
            <Switch<Route> render={move |route| switch(route, language)} />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let language = use_state(|| Language::Ua);

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |selected: Language| {
            language.set(selected);
        })
    };

    html! {
        <BrowserRouter>
            <AppContent language={*language} on_language_change={on_language_change} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_targets_map_to_their_routes() {
        assert_eq!(
            route_for_target("investment-opportunity"),
            Some(Route::Investment)
        );
        assert_eq!(route_for_target("contact-engagement"), Some(Route::Contact));
        // Anything else stays on the page rather than guessing.
        assert_eq!(route_for_target("unknown-section"), None);
        assert_eq!(route_for_target(""), None);
    }

    #[test]
    fn routes_render_at_their_paths() {
        assert_eq!(Route::Vision.to_path(), "/");
        assert_eq!(Route::Investment.to_path(), "/investment");
        assert_eq!(Route::Research.to_path(), "/research");
        assert_eq!(Route::About.to_path(), "/about");
        assert_eq!(Route::Contact.to_path(), "/contact");
    }
}
