// Page sections, in page order

mod about;
mod cta;
mod events;
mod footer;
mod gallery;
mod hero;
mod nav;
mod stories;

pub use about::About;
pub use cta::Cta;
pub use events::{Events, EventsTable};
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use nav::Nav;
pub use stories::Stories;
