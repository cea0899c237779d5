use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod behavior {
    pub mod feedback;
    pub mod lifecycle;
    pub mod navigation;
    pub mod scroll;
    pub mod validation;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use behavior::{lifecycle, navigation, scroll};
use pages::{about::About, contact::Contact, home::Home, services::Services};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
}

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Contact, "Contact"),
];

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();

            let resize_callback = Closure::wrap(Box::new(move || {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                // Runs on every resize event, no debounce.
                if navigation::is_desktop_width(width) {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(navigation::toggled(*menu_open));
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let expanded = navigation::aria_expanded(*menu_open);

    html! {
        <header class="site-header">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Waypost"}
                </Link<Route>>

                <button
                    class="menu-toggle"
                    aria-expanded={expanded}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("site-nav", (*menu_open).then(|| "active"))}>
                    {
                        NAV_ITEMS.iter().map(|(route, label)| {
                            let href = route.to_path();
                            let active = navigation::link_is_active(&href, &pathname);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            lifecycle::mark_loaded_on_window_load();
            scroll::intercept_anchor_clicks();
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
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
