use std::collections::HashSet;

use super::{BlogError, PostMeta};

const WORDS_PER_MINUTE: usize = 200;

/// Case-insensitive substring match against the title or the excerpt.
pub fn matches_search(post: &PostMeta, query: &str) -> bool {
    let query = query.to_lowercase();
    post.title.to_lowercase().contains(&query) || post.excerpt.to_lowercase().contains(&query)
}

pub fn matches_tag(post: &PostMeta, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => post.tags.iter().any(|t| t == tag),
    }
}

/// Minutes needed to read `text` at 200 words per minute, rounded up.
///
/// Text with no words reads in 0 minutes; anything else takes at least 1.
pub fn estimate_reading_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// The ordered, immutable collection of posts.
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<PostMeta>,
}

impl PostIndex {
    /// Builds an index over `posts`, which must already be in display order.
    pub fn new(posts: Vec<PostMeta>) -> Result<Self, BlogError> {
        let mut slugs = HashSet::new();
        if let Some(dup) = posts.iter().find(|p| !slugs.insert(p.slug.as_str())) {
            return Err(BlogError::DuplicateSlug(dup.slug.clone()));
        }
        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[PostMeta] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts matching both `query` and `tag`, in index order.
    pub fn filter(&self, query: &str, tag: Option<&str>) -> Vec<&PostMeta> {
        self.posts
            .iter()
            .filter(|p| matches_search(p, query) && matches_tag(p, tag))
            .collect()
    }

    /// Every tag in the index, once, in order of first appearance.
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    pub fn find(&self, slug: &str) -> Result<&PostMeta, BlogError> {
        self.posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or(BlogError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str, title: &str, excerpt: &str, tags: &[&str], day: u32) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: title.to_string(),
            date: Utc.with_ymd_and_hms(2026, 2, day, 0, 0, 0).unwrap(),
            excerpt: excerpt.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            reading_minutes: 1,
        }
    }

    fn sample_posts() -> Vec<PostMeta> {
        vec![
            post(
                "free-claude-code",
                "Free Claude Code: Using AI Coding Assistants Without API Costs",
                "Learn how to set up and use Claude Code for free.",
                &["AI", "Developer Tools", "Tutorial", "Open Source"],
                23,
            ),
            post(
                "welcome",
                "Welcome to My Blog",
                "Introducing my new blog where I share my thoughts on web development.",
                &["personal", "intro"],
                22,
            ),
            post(
                "levelup",
                "LevelUp",
                "A modern, multi-language SaaS starter.",
                &["projects", "SaaS"],
                21,
            ),
            post(
                "my-journey",
                "My Journey into Full-Stack Development",
                "Reflecting on how I got started with coding.",
                &["career", "reflection", "personal"],
                20,
            ),
        ]
    }

    fn slugs(posts: &[&PostMeta]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let all = index.filter("", None);
        assert_eq!(
            slugs(&all),
            vec!["free-claude-code", "welcome", "levelup", "my-journey"]
        );
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let found = index.filter("levelup", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "LevelUp");
    }

    #[test]
    fn test_query_matches_excerpt() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let found = index.filter("GOT STARTED", None);
        assert_eq!(slugs(&found), vec!["my-journey"]);
    }

    #[test]
    fn test_tag_filter_preserves_order() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let found = index.filter("", Some("personal"));
        let titles = found.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Welcome to My Blog", "My Journey into Full-Stack Development"]
        );
    }

    #[test]
    fn test_tag_match_is_exact() {
        let index = PostIndex::new(sample_posts()).unwrap();
        assert!(index.filter("", Some("Personal")).is_empty());
        assert!(index.filter("", Some("person")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let index = PostIndex::new(sample_posts()).unwrap();
        assert!(index.filter("zzz-no-match", None).is_empty());
        assert!(index.filter("zzz-no-match", Some("personal")).is_empty());
    }

    #[test]
    fn test_query_results_are_subset_of_tag_results() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let tags = [None, Some("personal"), Some("AI"), Some("missing")];
        let queries = ["", "blog", "my", "code", "e", "nothing here"];
        for tag in tags {
            let base = slugs(&index.filter("", tag));
            for q in queries {
                for slug in slugs(&index.filter(q, tag)) {
                    assert!(base.contains(&slug), "{slug} for {q:?}/{tag:?}");
                }
            }
        }
    }

    #[test]
    fn test_distinct_tags_first_seen_order() {
        let index = PostIndex::new(sample_posts()).unwrap();
        assert_eq!(
            index.distinct_tags(),
            vec![
                "AI",
                "Developer Tools",
                "Tutorial",
                "Open Source",
                "personal",
                "intro",
                "projects",
                "SaaS",
                "career",
                "reflection",
            ]
        );
    }

    #[test]
    fn test_distinct_tags_has_no_duplicates() {
        let index = PostIndex::new(sample_posts()).unwrap();
        let tags = index.distinct_tags();
        let unique = tags.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut posts = sample_posts();
        posts.push(post("welcome", "Again", "", &[], 1));
        match PostIndex::new(posts) {
            Err(BlogError::DuplicateSlug(slug)) => assert_eq!(slug, "welcome"),
            other => panic!("expected duplicate slug error, got {other:?}"),
        }
    }

    #[test]
    fn test_find_unknown_slug() {
        let index = PostIndex::new(sample_posts()).unwrap();
        assert_eq!(index.find("welcome").unwrap().title, "Welcome to My Blog");
        assert!(matches!(
            index.find("does-not-exist"),
            Err(BlogError::NotFound)
        ));
    }

    #[test]
    fn test_reading_minutes() {
        assert_eq!(estimate_reading_minutes(""), 0);
        assert_eq!(estimate_reading_minutes("   \n\t "), 0);
        assert_eq!(estimate_reading_minutes("one"), 1);
        assert_eq!(estimate_reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(estimate_reading_minutes(&"word ".repeat(201)), 2);
        assert_eq!(estimate_reading_minutes("  spaced \n\n out\twords  "), 1);
    }

    #[test]
    fn test_reading_minutes_monotonic() {
        let mut last = 0;
        for n in 0..1000 {
            let minutes = estimate_reading_minutes(&"w ".repeat(n));
            assert!(minutes >= last);
            last = minutes;
        }
    }
}
