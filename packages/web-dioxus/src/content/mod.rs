//! Bundled content and the policies that decide what to render.

pub mod defaults;
mod fallback;
mod grouping;

pub use fallback::select;
pub use grouping::{group_by_category, CategorySection, FALLBACK_CATEGORY_ORDER};
