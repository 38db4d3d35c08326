use dioxus::prelude::*;
use crate::views::{ Home, Navbar };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
}
