use dioxus::prelude::*;
use lumen_landing::theme;
use lumen_landing::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One theme signal per session, shared with the whole view tree through a
    // single provider scope. The startup apply runs exactly once so a stored
    // "dark" preference restyles the page before any toggle happens.
    let theme = use_signal(|| {
        let initial = theme::load_theme();
        theme::apply_theme(initial);
        initial
    });
    use_context_provider(|| theme);

    rsx! {
        div {
            class: "app",
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
