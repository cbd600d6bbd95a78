// Reusable UI primitives

mod button;
mod card;
mod section_header;

pub use button::{Button, ButtonSize, ButtonStyle, ButtonVariant};
pub use card::{Card, CardContent};
pub use section_header::SectionHeader;
