use api::ClientConfig;
use dioxus::prelude::*;
use ui::views::{Home, Login};
use ui::AuthProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:..query")]
    Login { query: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const CLIENT_CONFIG: &str = include_str!("../client.toml");

fn main() {
    let config = ClientConfig::from_toml_or_default(CLIENT_CONFIG);

    let level = config
        .log
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).expect("Failed to initialize logger");

    tracing::info!(backend = ?config.auth.backend, "starting web client");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();

    rsx! {
        AuthProvider {
            config: config.auth,
            Router::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 gap-2",
            h1 { class: "text-neutral-800 font-bold text-[1.75rem]", "Page not found" }
            p { class: "text-neutral-600 text-sm", "Nothing lives at /{path} yet." }
            Link { class: "text-sm font-medium text-neutral-900 hover:underline", to: Route::Home {}, "Go home" }
        }
    }
}
