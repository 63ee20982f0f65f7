pub mod index;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;

pub use index::{estimate_reading_minutes, matches_search, matches_tag, PostIndex};

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

/// The full post list, fetched or parsed once per process (server) or page (browser).
pub static GLOBAL_INDEX: OnceLock<PostIndex> = OnceLock::new();
pub static GLOBAL_POST_CACHE: LazyLock<DashMap<String, Post>> = LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "blog"]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    date: DateTime<Utc>,
    excerpt: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub reading_minutes: u32,
}

/// A post with its markdown body rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Blog post not found")]
    NotFound,
    #[error("Couldn't parse blog post {0}")]
    Parse(String),
    #[error("Duplicate blog post slug {0}")]
    DuplicateSlug(String),
}

impl PostMeta {
    /// e.g. `Feb 22, 2026`
    pub fn short_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    /// e.g. `February 22, 2026`
    pub fn long_date(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// Share intents for a post published at `url`.
pub fn share_links(title: &str, url: &str) -> [ShareLink; 3] {
    let text = urlencoding::encode(title);
    let url = urlencoding::encode(url);
    [
        ShareLink {
            label: "Share on Twitter",
            href: format!("https://twitter.com/intent/tweet?text={text}&url={url}"),
        },
        ShareLink {
            label: "Share on LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        },
        ShareLink {
            label: "Share on Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        },
    ]
}

/// Newest first; posts published on the same instant fall back to slug order.
pub fn sort_posts(posts: &mut [PostMeta]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

#[cfg(feature = "ssr")]
fn read_asset(file: &str) -> Result<String, BlogError> {
    let asset = Assets::get(file).ok_or(BlogError::NotFound)?;
    String::from_utf8(asset.data.into_owned()).map_err(|_| BlogError::Parse(file.to_string()))
}

/// Splits a post source into its metadata and its markdown body.
#[cfg(feature = "ssr")]
fn parse_source(slug: &str, source: &str) -> Result<(PostMeta, String), BlogError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| BlogError::Parse(slug.to_string()))?;
    let fm = parsed.data;
    let body = parsed.content;
    let meta = PostMeta {
        slug: slug.to_string(),
        title: fm.title,
        date: fm.date,
        excerpt: fm.excerpt,
        tags: fm.tags,
        image: fm.image,
        reading_minutes: estimate_reading_minutes(&body),
    };
    Ok((meta, body))
}

/// The process-wide index, parsed on first use.
#[cfg(feature = "ssr")]
pub fn load_index() -> Result<&'static PostIndex, BlogError> {
    if let Some(index) = GLOBAL_INDEX.get() {
        return Ok(index);
    }
    let mut posts = Assets::iter()
        .filter_map(|file| {
            let slug = file.strip_suffix(".md")?.to_string();
            Some((slug, file))
        })
        .map(|(slug, file)| {
            let source = read_asset(&file)?;
            parse_source(&slug, &source).map(|(meta, _)| meta)
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| tracing::error!(error = %e, "failed to load blog posts"))?;
    sort_posts(&mut posts);

    let index = PostIndex::new(posts)?;
    tracing::info!(posts = index.len(), "loaded blog index");
    // a concurrent loader may have won; both built the same index
    Ok(GLOBAL_INDEX.get_or_init(|| index))
}

#[cfg(feature = "ssr")]
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let parser = highlight(parser);

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(feature = "ssr")]
pub fn get_post(slug: &str) -> Result<Post, BlogError> {
    let cache = &*GLOBAL_POST_CACHE;
    if let Some(post) = cache.get(slug) {
        return Ok(post.clone());
    }

    // only slugs present in the index are read from the embedded assets
    load_index()?.find(slug)?;
    let source = read_asset(&format!("{slug}.md"))?;
    let (meta, body) = parse_source(slug, &source)?;
    let post = Post {
        meta,
        content: render_markdown(&body),
    };
    tracing::debug!(slug, "rendered blog post");
    cache.insert(slug.to_string(), post.clone());
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta(slug: &str, day: u32) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            date: Utc.with_ymd_and_hms(2026, 2, day, 0, 0, 0).unwrap(),
            excerpt: String::new(),
            tags: Vec::new(),
            image: None,
            reading_minutes: 0,
        }
    }

    #[test]
    fn test_sort_newest_first_then_slug() {
        let mut posts = vec![meta("b", 20), meta("c", 23), meta("a", 20), meta("d", 22)];
        sort_posts(&mut posts);
        let order = posts.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn test_date_formats() {
        let post = meta("welcome", 2);
        assert_eq!(post.short_date(), "Feb 02, 2026");
        assert_eq!(post.long_date(), "February 02, 2026");
        assert_eq!(post.href(), "/blog/welcome");
    }

    #[test]
    fn test_share_links_encode_title_and_url() {
        let links = share_links("Tips & Tricks", "https://example.com/blog/a b");
        assert_eq!(
            links[0].href,
            "https://twitter.com/intent/tweet?text=Tips%20%26%20Tricks&url=https%3A%2F%2Fexample.com%2Fblog%2Fa%20b"
        );
        assert!(links[1].href.ends_with("?url=https%3A%2F%2Fexample.com%2Fblog%2Fa%20b"));
        assert_eq!(links[2].label, "Share on Facebook");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_source_front_matter() {
        let source = "---\ntitle: \"Hello: World\"\ndate: 2026-02-22T00:00:00Z\nexcerpt: \"Short\"\ntags:\n  - a\n  - b\n---\n\n# Heading\n\nsome body text\n";
        let (meta, body) = parse_source("hello", source).unwrap();
        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.title, "Hello: World");
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.image, None);
        assert_eq!(meta.reading_minutes, 1);
        assert!(body.contains("# Heading"));
        assert!(!body.contains("excerpt"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_source_missing_front_matter() {
        assert_eq!(
            parse_source("bare", "just markdown"),
            Err(BlogError::Parse("bare".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_index_shipped_posts() {
        let index = load_index().unwrap();
        let slugs = index
            .posts()
            .iter()
            .map(|p| p.slug.as_str())
            .collect::<Vec<_>>();
        assert_eq!(slugs, vec!["free-claude-code", "welcome", "my-journey"]);

        let personal = index
            .filter("", Some("personal"))
            .into_iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            personal,
            vec!["Welcome to My Blog", "My Journey into Full-Stack Development"]
        );
        assert!(index.filter("zzz-no-match", None).is_empty());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_index_is_shared() {
        let first = load_index().unwrap();
        let second = load_index().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, GLOBAL_INDEX.get().unwrap()));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_get_post_renders_markdown() {
        let post = get_post("welcome").unwrap();
        assert_eq!(post.meta.title, "Welcome to My Blog");
        assert!(post.content.contains("<h1>Welcome to My Blog</h1>"));
        assert!(post.content.contains("<pre style="));
        assert!(!post.content.contains("excerpt:"));
        assert!(post.meta.reading_minutes >= 1);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_get_post_unknown_slug() {
        assert_eq!(get_post("does-not-exist"), Err(BlogError::NotFound));
        assert_eq!(get_post("../Cargo.toml"), Err(BlogError::NotFound));
    }
}
