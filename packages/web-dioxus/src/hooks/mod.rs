//! Data hooks for the site's content domains.
//!
//! Every hook is an instance of [`use_collection`] over one
//! `CollectionSource`; each mounted consumer gets its own fetch and change
//! subscription, with no cross-component cache.

mod use_collection;

pub use use_collection::{use_collection, UseCollection};

use content_client::TableSource;

use crate::feeds::FirmBlogFeed;
use crate::types::{BlogPost, Category, JobPosition, Service, TeamMember};

pub fn use_services() -> UseCollection<Service> {
    use_collection(|| TableSource::shared("services"))
}

pub fn use_team_members() -> UseCollection<TeamMember> {
    use_collection(|| TableSource::shared("team_members"))
}

pub fn use_categories() -> UseCollection<Category> {
    use_collection(|| TableSource::shared("categories"))
}

pub fn use_job_positions() -> UseCollection<JobPosition> {
    use_collection(|| TableSource::shared("job_positions"))
}

pub fn use_blog_posts() -> UseCollection<BlogPost> {
    use_collection(FirmBlogFeed::new)
}
