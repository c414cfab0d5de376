use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod shop {
    pub mod pricing;
    pub mod order;
}
mod forms {
    pub mod validation;
    pub mod state;
    pub mod submit;
}
mod uploads {
    pub mod object_url;
    pub mod intake;
    pub mod attachments;
}
mod decor {
    pub mod placement;
    pub mod dimensions;
    pub mod gradient;
    pub mod parallax;
    pub mod counter;
    pub mod magnetic;
}
mod components {
    pub mod bento;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod pricing;
    pub mod checkout;
    pub mod confirmation;
    pub mod contact;
    pub mod faq;
    pub mod upload;
}

use pages::{
    home::Home,
    services::Services,
    pricing::Pricing,
    checkout::Checkout,
    confirmation::Confirmation,
    contact::Contact,
    faq::Faq,
    upload::Upload,
};
use components::footer::Footer;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/pricing")]
    Pricing,
    #[at("/upload")]
    Upload,
    #[at("/checkout")]
    Checkout,
    #[at("/confirmation")]
    Confirmation,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Upload => {
            info!("Rendering Upload page");
            html! { <Upload /> }
        },
        Route::Checkout => {
            info!("Rendering Checkout page");
            html! { <Checkout /> }
        },
        Route::Confirmation => {
            info!("Rendering Confirmation page");
            html! { <Confirmation /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_top > 40.0);
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
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

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Home, "Home"),
        (Route::Services, "Services"),
        (Route::Pricing, "Pricing"),
        (Route::Faq, "FAQ"),
        (Route::Contact, "Contact"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#".top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 100;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    color: #111;
                    text-decoration: none;
                }
                .nav-logo span { color: #ff5941; }
                .nav-right { display: flex; gap: 1.5rem; }
                .nav-link { color: #333; text-decoration: none; }
                .nav-link:hover { color: #ff5941; }
                .burger-menu { display: none; background: none; border: none; }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #111;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 1.5rem;
                        background: #fff;
                    }
                }"#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Image"}<span>{"Printing"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">
                                {label}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
