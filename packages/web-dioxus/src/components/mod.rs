//! Reusable UI components

mod blog_card;
mod job_card;
mod layout;
mod loading;
mod member_card;
mod notice;
mod service_card;

pub use blog_card::*;
pub use job_card::*;
pub use layout::*;
pub use loading::*;
pub use member_card::*;
pub use notice::*;
pub use service_card::*;
