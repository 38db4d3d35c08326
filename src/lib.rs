pub mod views;
mod utils;
mod routes;
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
