use dioxus::prelude::*;

use records::{ClientConfig, RecordId};
use ui::{ActivityLog, ActivityLogPanel, ActivityLogToggle, ClientProvider, Navbar};
use views::{NewUser, PageNotFound, UserDetail, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Users {},
        #[route("/user/new")]
        NewUser {},
        #[route("/user/:id")]
        UserDetail { id: RecordId },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; the browser has no filesystem to read it from.
const CONFIG_TOML: &str = include_str!("../weight-tracker.toml");

fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml_or_default(CONFIG_TOML);
    match option_env!("WEIGHT_TRACKER_API_URL") {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting weight tracker UI");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config: load_config(),
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Users {}, "Users" }
            Link { to: Route::NewUser {}, "Add User" }
            ActivityLogToggle {}
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
    }
}
