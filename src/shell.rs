use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::Language;
use crate::scroll::ScrollListener;
use crate::Route;

/// How a page wants the shell presented. The vision page uses `Minimal`
/// so its hero owns the top of the viewport; everything else is `Full`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShellMode {
    Full,
    Minimal,
}

/// Header visibility for the current mode and scroll offset. `Full` is
/// always visible; `Minimal` shows the header only near the top of the
/// page. Strict comparison, no hysteresis band: flicker at exactly the
/// threshold is accepted behavior.
pub fn header_visible(mode: ShellMode, scroll_top: f64) -> bool {
    match mode {
        ShellMode::Full => true,
        ShellMode::Minimal => scroll_top < config::HEADER_REVEAL_PX,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub fn nav_items(language: Language) -> Vec<NavItem> {
    let labels = match language {
        Language::Ua => ["Візія", "Інвестиції", "Дослідження", "Про нас", "Контакти"],
        Language::En => ["Vision", "Investment", "Research", "About", "Contact"],
    };
    let routes = [
        Route::Vision,
        Route::Investment,
        Route::Research,
        Route::About,
        Route::Contact,
    ];
    labels
        .into_iter()
        .zip(routes)
        .map(|(label, route)| NavItem { label, route })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub current: Language,
    pub on_change: Callback<Language>,
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let select = |language: Language| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(language))
    };

    html! {
        <div class="language-switcher">
            <button
                class={classes!("language-option", (props.current == Language::Ua).then(|| "active"))}
                onclick={select(Language::Ua)}
            >
                {"UA"}
            </button>
            <button
                class={classes!("language-option", (props.current == Language::En).then(|| "active"))}
                onclick={select(Language::En)}
            >
                {"EN"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub language: Language,
    pub on_language_change: Callback<Language>,
    pub mode: ShellMode,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let scroll_top = use_state(|| 0.0f64);
    let current_route = use_route::<Route>();

    {
        let scroll_top = scroll_top.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    if let Some(window) = web_sys::window() {
                        scroll_top.set(ScrollListener::scroll_top(&window));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let visible = header_visible(props.mode, *scroll_top);
    let items = nav_items(props.language);

    let header_class = classes!(
        "shell-header",
        (props.mode == ShellMode::Minimal).then(|| "minimal"),
        (!visible).then(|| "concealed"),
    );

    let link = |item: &NavItem, mobile: bool| {
        let is_active = current_route.as_ref() == Some(&item.route);
        let classes = classes!(
            if mobile { "mobile-nav-link" } else { "nav-link" },
            is_active.then(|| "active"),
        );
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={item.route.clone()} classes={classes}>
                    {item.label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <header class={header_class}>
            <div class="shell-header-content">
                <Link<Route> to={Route::Vision} classes="shell-logo">
                    {"ГО \"Розум\""}
                </Link<Route>>

                <nav class="nav-links">
                    { for items.iter().map(|item| link(item, false)) }
                </nav>

                <div class="shell-header-right">
                    <LanguageSwitcher
                        current={props.language}
                        on_change={props.on_language_change.clone()}
                    />
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for items.iter().map(|item| link(item, true)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .shell-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: #020617;
                        border-bottom: 1px solid rgba(148, 163, 184, 0.15);
                        transition: background 0.3s ease, border-color 0.3s ease;
                    }

                    .shell-header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .shell-logo {
                        font-family: 'Space Grotesk', sans-serif;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #ffffff;
                        text-decoration: none;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-family: 'Inter', sans-serif;
                        font-size: 0.95rem;
                        color: #94a3b8;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #ffffff;
                    }

                    .nav-link.active {
                        color: #22d3ee;
                    }

                    .shell-header-right {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .language-switcher {
                        display: flex;
                        gap: 0.25rem;
                        background: rgba(148, 163, 184, 0.1);
                        border-radius: 0.375rem;
                        padding: 0.25rem;
                    }

                    .language-option {
                        border: none;
                        background: transparent;
                        color: #94a3b8;
                        font-family: 'Inter', sans-serif;
                        font-size: 0.85rem;
                        font-weight: 500;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.25rem;
                        cursor: pointer;
                        transition: color 0.2s ease, background 0.2s ease;
                    }

                    .language-option.active {
                        background: #0f172a;
                        color: #22d3ee;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: transparent;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #e2e8f0;
                        transition: transform 0.2s ease;
                    }

                    .mobile-menu {
                        display: none;
                        flex-direction: column;
                        border-top: 1px solid rgba(148, 163, 184, 0.15);
                        background: rgba(2, 6, 23, 0.95);
                        backdrop-filter: blur(8px);
                        padding: 0.5rem 1.5rem 1rem;
                    }

                    .mobile-nav-link {
                        display: block;
                        padding: 0.75rem 0;
                        color: #e2e8f0;
                        text-decoration: none;
                        font-family: 'Inter', sans-serif;
                    }

                    .mobile-nav-link.active {
                        color: #22d3ee;
                    }

                    .shell-header.concealed {
                        background: transparent;
                        border-bottom-color: transparent;
                    }

                    .shell-header.concealed .nav-links,
                    .shell-header.concealed .language-switcher,
                    .shell-header.concealed .burger-menu,
                    .shell-header.concealed .mobile-menu {
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }

                        .mobile-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mode_ignores_scroll_offset() {
        assert!(header_visible(ShellMode::Full, 0.0));
        assert!(header_visible(ShellMode::Full, 9.0));
        assert!(header_visible(ShellMode::Full, 10.0));
        assert!(header_visible(ShellMode::Full, 10_000.0));
    }

    #[test]
    fn minimal_mode_toggles_at_the_reveal_threshold() {
        assert!(header_visible(ShellMode::Minimal, 0.0));
        assert!(header_visible(ShellMode::Minimal, 9.0));
        // 10px is already past the threshold.
        assert!(!header_visible(ShellMode::Minimal, 10.0));
        assert!(!header_visible(ShellMode::Minimal, 600.0));
    }

    #[test]
    fn nav_items_cover_every_page_in_both_languages() {
        let ua = nav_items(Language::Ua);
        let en = nav_items(Language::En);
        assert_eq!(ua.len(), 5);
        assert_eq!(en.len(), 5);
        assert_eq!(ua[0].label, "Візія");
        assert_eq!(en[0].label, "Vision");
        assert_eq!(ua[4].label, "Контакти");
        assert_eq!(en[4].label, "Contact");
        // Routes are language independent.
        for (a, b) in ua.iter().zip(en.iter()) {
            assert_eq!(a.route, b.route);
        }
        assert_eq!(ua[1].route, Route::Investment);
        assert_eq!(ua[3].route, Route::About);
    }
}
