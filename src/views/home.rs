use dioxus::prelude::*;
use crate::views::{ Features, Landing };

#[component]
pub fn Home() -> Element {
    rsx! {
        Landing {}
        Features {}
    }
}
