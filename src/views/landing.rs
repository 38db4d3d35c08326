use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-content",
                h1 {
                    class: "hero-title rise-in",
                    "Welcome to Lumen"
                }
                p {
                    class: "hero-tagline fade-in",
                    "We bring ideas to life with creativity and code."
                }
                a {
                    class: "hero-cta fade-in",
                    href: "#features",
                    "Explore More"
                }
            }
        }
    }
}
