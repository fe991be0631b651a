//! Blog aggregation from the firm's two publishing platforms.
//!
//! The firm publishes in two places: its hosted newsroom and a column on a
//! legal publishing platform. Each feed has its own response shape; both are
//! normalised to [`BlogPost`] here, at the boundary, so presentation only
//! ever sees the canonical type.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use content_client::{ChangeSubscription, CollectionSource, FetchError, OnChange};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::{BlogPost, BlogSource};

const NEWSROOM_FEED_URL: &str =
    "https://newsroom.mwangiwekesa.co.ke/api/posts";
const COLUMN_FEED_URL: &str =
    "https://api.wakilidigest.com/v2/columns/mwangi-wekesa/articles";

/// Both blog feeds exposed as one [`CollectionSource`].
pub struct FirmBlogFeed {
    http: reqwest::Client,
    newsroom_url: String,
    column_url: String,
}

impl FirmBlogFeed {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            newsroom_url: NEWSROOM_FEED_URL.to_string(),
            column_url: COLUMN_FEED_URL.to_string(),
        }
    }

    async fn fetch_feed<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// The newsroom's post shape.
#[derive(Debug, Deserialize)]
struct NewsroomPost {
    id: String,
    title: String,
    #[serde(default)]
    brief: Option<String>,
    url: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

impl From<NewsroomPost> for BlogPost {
    fn from(post: NewsroomPost) -> Self {
        BlogPost {
            id: post.id,
            title: post.title,
            excerpt: post.brief.unwrap_or_default(),
            url: post.url,
            author: post.author,
            published_at: post.published_at,
            source: BlogSource::Newsroom,
        }
    }
}

/// The column platform's article shape.
#[derive(Debug, Deserialize)]
struct ColumnArticle {
    slug: String,
    headline: String,
    #[serde(default)]
    standfirst: Option<String>,
    canonical_url: String,
    #[serde(default)]
    byline: Option<String>,
    date: DateTime<Utc>,
}

impl From<ColumnArticle> for BlogPost {
    fn from(article: ColumnArticle) -> Self {
        BlogPost {
            id: article.slug,
            title: article.headline,
            excerpt: article.standfirst.unwrap_or_default(),
            url: article.canonical_url,
            author: article.byline,
            published_at: article.date,
            source: BlogSource::Column,
        }
    }
}

/// Merge the two feeds newest-first.
fn merge_posts(newsroom: Vec<BlogPost>, column: Vec<BlogPost>) -> Vec<BlogPost> {
    let mut posts: Vec<BlogPost> = newsroom.into_iter().chain(column).collect();
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

#[async_trait(?Send)]
impl CollectionSource for FirmBlogFeed {
    type Item = BlogPost;

    async fn fetch_all(&self) -> Result<Vec<BlogPost>, FetchError> {
        let (newsroom, column) = futures::join!(
            self.fetch_feed::<NewsroomPost>(&self.newsroom_url),
            self.fetch_feed::<ColumnArticle>(&self.column_url),
        );

        let newsroom: Result<Vec<BlogPost>, FetchError> =
            newsroom.map(|posts| posts.into_iter().map(BlogPost::from).collect());
        let column: Result<Vec<BlogPost>, FetchError> =
            column.map(|articles| articles.into_iter().map(BlogPost::from).collect());

        // One platform being down should not empty the whole blog page.
        match (newsroom, column) {
            (Ok(newsroom), Ok(column)) => Ok(merge_posts(newsroom, column)),
            (Ok(newsroom), Err(err)) => {
                tracing::warn!(error = %err, "column feed unavailable");
                Ok(newsroom)
            }
            (Err(err), Ok(column)) => {
                tracing::warn!(error = %err, "newsroom feed unavailable");
                Ok(column)
            }
            (Err(newsroom_err), Err(column_err)) => {
                tracing::warn!(
                    newsroom_error = %newsroom_err,
                    column_error = %column_err,
                    "both blog feeds unavailable"
                );
                Err(newsroom_err)
            }
        }
    }

    async fn subscribe_changes(
        &self,
        _on_change: OnChange,
    ) -> Result<ChangeSubscription, FetchError> {
        // The publishing platforms push no change events; the feed refreshes
        // on the next mount or manual reload.
        Ok(ChangeSubscription::inert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, source: BlogSource, timestamp: i64) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: id.to_string(),
            excerpt: String::new(),
            url: format!("https://example.com/{id}"),
            author: None,
            published_at: Utc.timestamp_opt(timestamp, 0).unwrap(),
            source,
        }
    }

    #[test]
    fn merge_sorts_newest_first_across_sources() {
        let newsroom = vec![
            post("n1", BlogSource::Newsroom, 100),
            post("n2", BlogSource::Newsroom, 300),
        ];
        let column = vec![post("c1", BlogSource::Column, 200)];

        let merged = merge_posts(newsroom, column);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["n2", "c1", "n1"]);
    }

    #[test]
    fn newsroom_posts_normalise_to_the_canonical_shape() {
        let raw: Vec<NewsroomPost> = serde_json::from_str(
            r#"[{
                "id": "pandemic-contracts",
                "title": "Force majeure after the pandemic",
                "brief": "What recent rulings mean for suppliers.",
                "url": "https://newsroom.mwangiwekesa.co.ke/p/pandemic-contracts",
                "author": "Grace Mwangi",
                "publishedAt": "2026-05-04T08:30:00Z"
            }]"#,
        )
        .unwrap();

        let posts: Vec<BlogPost> = raw.into_iter().map(BlogPost::from).collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].source, BlogSource::Newsroom);
        assert_eq!(posts[0].author.as_deref(), Some("Grace Mwangi"));
    }

    #[test]
    fn column_articles_normalise_to_the_canonical_shape() {
        let raw: Vec<ColumnArticle> = serde_json::from_str(
            r#"[{
                "slug": "land-registration-act",
                "headline": "Ten years of the Land Registration Act",
                "canonical_url": "https://wakilidigest.com/a/land-registration-act",
                "date": "2026-04-11T06:00:00Z"
            }]"#,
        )
        .unwrap();

        let posts: Vec<BlogPost> = raw.into_iter().map(BlogPost::from).collect();
        assert_eq!(posts[0].source, BlogSource::Column);
        assert_eq!(posts[0].excerpt, "");
        assert_eq!(posts[0].author, None);
    }
}
