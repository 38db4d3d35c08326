use dioxus::prelude::*;

const FEATURES: [&str; 3] = ["🚀 Fast", "🎨 Beautiful", "⚙️ Functional"];

// Cards enter one after another, each delayed by its position in the row.
const STAGGER_MS: usize = 300;

#[component]
pub fn Features() -> Element {
    let cards = FEATURES.iter().enumerate().map(|(idx, feature)| {
        let delay = idx * STAGGER_MS;
        rsx! {
            div {
                key: "{feature}",
                class: "feature-card rise-in",
                style: "animation-delay: {delay}ms",
                "{feature}"
            }
        }
    });

    rsx! {
        section {
            id: "features",
            class: "features",
            h2 {
                class: "features-title",
                "Features"
            }
            div {
                class: "feature-grid",
                {cards}
            }
        }
    }
}
