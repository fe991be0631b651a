//! Page components

mod blog;
mod careers;
mod contact;
mod home;
mod services;
mod team;

pub use blog::Blog;
pub use careers::Careers;
pub use contact::Contact;
pub use home::Home;
pub use services::Services;
pub use team::Team;
