use crate::theme::{ apply_theme, Theme };
use dioxus::prelude::*;
use crate:: {
    routes::Route,
};
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    class: "navbar-inner",
                    span {
                        class: "navbar-brand",
                        "Lumen"
                    }
                    div {
                        class: "navbar-links",
                        a {
                            class: "navbar-link",
                            href: "#features",
                            "Features"
                        }
                        button {
                            class: "theme-toggle",
                            onclick: move |_| {
                                let next = theme().toggle();
                                apply_theme(next);
                                theme.set(next);
                            },
                            if theme().is_dark() {
                                "☀️ Light Mode"
                            } else {
                                "🌙 Dark Mode"
                            }
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
