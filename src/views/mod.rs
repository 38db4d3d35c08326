mod features;
mod home;
mod landing;
mod navbar;

pub use features::Features;
pub use home::Home;
pub use landing::Landing;
pub use navbar::Navbar;
