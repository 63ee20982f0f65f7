use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::{Meta, Title};
use leptos_router::{components::*, hooks::use_params_map};

use super::not_found::set_not_found_status;
#[cfg(feature = "ssr")]
use crate::blog::{get_post, load_index, BlogError};
use crate::blog::{share_links, Post, PostIndex, PostMeta, GLOBAL_INDEX, GLOBAL_POST_CACHE};
use crate::content::PROFILE;

#[component]
pub fn BlogWrapper() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <section class="container mx-auto px-4 pt-32 pb-20">
            <Outlet />
        </section>
    }
}

#[server(input = GetUrl)]
pub async fn list_posts() -> Result<Vec<PostMeta>, ServerFnError> {
    load_index()
        .map(|index| index.posts().to_vec())
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// `None` when no post has this slug.
#[server(input = GetUrl)]
pub async fn fetch_post(slug: String) -> Result<Option<Post>, ServerFnError> {
    post_response(&slug, get_post(&slug))
}

#[cfg(feature = "ssr")]
fn post_response(
    slug: &str,
    result: Result<Post, BlogError>,
) -> Result<Option<Post>, ServerFnError> {
    match result {
        Ok(post) => Ok(Some(post)),
        Err(BlogError::NotFound) => {
            tracing::debug!(slug, "blog post not found");
            Ok(None)
        }
        Err(e) => {
            tracing::error!(slug, error = %e, "couldn't render blog post");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 rounded-full text-sm bg-teal text-navy font-medium"
    } else {
        "px-3 py-1 rounded-full text-sm border border-border hover:border-teal hover:text-teal transition-colors"
    }
}

#[component]
pub fn BlogHome() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let tag = RwSignal::new(None::<String>);
    let posts = Resource::new(
        || (),
        |_| async move {
            if let Some(index) = GLOBAL_INDEX.get() {
                return Ok(index.posts().to_vec());
            }
            let posts = list_posts().await?;
            // the server fills its own index while loading
            #[cfg(feature = "hydrate")]
            if let Ok(index) = PostIndex::new(posts.clone()) {
                let _ = GLOBAL_INDEX.set(index);
            }
            Ok::<_, ServerFnError>(posts)
        },
    );

    view! {
        <Title text="Blog" />
        <div class="text-center mb-12">
            <h1 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                "My " <span class="text-teal">"Blog"</span>
            </h1>
            <p class="text-muted-foreground max-w-2xl mx-auto">
                "Thoughts, tutorials, and insights about web development, programming, and technology."
            </p>
        </div>
        <div class="max-w-5xl mx-auto">
            <input
                type="search"
                class="w-full px-4 py-3 mb-6 rounded-md border border-border bg-background dark:bg-navy-light focus:outline-none focus:ring-2 focus:ring-teal"
                placeholder="Search posts..."
                prop:value=query
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Transition fallback=move || {
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <div class="loading-skeleton h-64 rounded-lg"></div>
                        <div class="loading-skeleton h-64 rounded-lg"></div>
                        <div class="loading-skeleton h-64 rounded-lg"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match posts.await.and_then(|p| {
                        PostIndex::new(p).map_err(|e| ServerFnError::new(e.to_string()))
                    }) {
                        Err(e) => {
                            Either::Left(
                                view! {
                                    <p class="text-center text-red-500">
                                        {format!("Couldn't load posts: {e}")}
                                    </p>
                                },
                            )
                        }
                        Ok(index) => {
                            let tags = index.distinct_tags();
                            let index = StoredValue::new(index);
                            let visible = Memo::new(move |_| {
                                let query = query.read();
                                let tag = tag.read();
                                index
                                    .with_value(|index| {
                                        index
                                            .filter(&query, tag.as_deref())
                                            .into_iter()
                                            .cloned()
                                            .collect::<Vec<_>>()
                                    })
                            });
                            Either::Right(
                                view! {
                                    <div class="flex flex-wrap gap-2 mb-8">
                                        <button
                                            class=move || chip_class(tag.read().is_none())
                                            on:click=move |_| tag.set(None)
                                        >
                                            "All Posts"
                                        </button>
                                        {tags
                                            .into_iter()
                                            .map(|t| {
                                                let label = t.clone();
                                                let selected = t.clone();
                                                view! {
                                                    <button
                                                        class=move || {
                                                            chip_class(tag.read().as_deref() == Some(selected.as_str()))
                                                        }
                                                        on:click=move |_| tag.set(Some(t.clone()))
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {move || {
                                        let list = visible.get();
                                        if list.is_empty() {
                                            Either::Left(
                                                view! {
                                                    <div class="text-center py-16">
                                                        <p class="text-xl font-medium mb-2">"No posts found"</p>
                                                        <p class="text-muted-foreground">
                                                            "Try a different search term or tag."
                                                        </p>
                                                    </div>
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                        {list
                                                            .into_iter()
                                                            .map(|post| view! { <PostCard post /> })
                                                            .collect_view()}
                                                    </div>
                                                },
                                            )
                                        }
                                    }}
                                },
                            )
                        }
                    }
                })}
            </Transition>
        </div>
    }
}

#[component]
fn PostCard(post: PostMeta) -> impl IntoView {
    let href = post.href();
    let date = post.short_date();
    let more_tags = post.tags.len().saturating_sub(2);
    let PostMeta {
        title,
        excerpt,
        tags,
        image,
        reading_minutes,
        ..
    } = post;
    let alt = title.clone();

    view! {
        <A
            href=href
            attr:class="group flex flex-col rounded-lg overflow-hidden border border-border bg-card dark:bg-navy-light hover:border-teal transition-colors"
        >
            {image
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=alt
                            class="h-48 w-full object-cover group-hover:scale-105 transition-transform"
                        />
                    }
                })}
            <div class="p-5 flex flex-col flex-1">
                <div class="flex flex-wrap gap-2 mb-3">
                    {tags
                        .into_iter()
                        .take(2)
                        .map(|t| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-teal/10 text-teal">{t}</span>
                            }
                        })
                        .collect_view()}
                    {(more_tags > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-muted text-muted-foreground">
                                    {format!("+{more_tags}")}
                                </span>
                            }
                        })}
                </div>
                <h2 class="text-xl font-semibold font-heading mb-2 group-hover:text-teal transition-colors">
                    {title}
                </h2>
                <p class="text-muted-foreground text-sm mb-4 flex-1">{excerpt}</p>
                <div class="flex justify-between text-xs text-muted-foreground">
                    <span>{date}</span>
                    <span>{format!("{reading_minutes} min read")}</span>
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let post = Resource::new(slug, |slug| async move {
        if let Some(post) = GLOBAL_POST_CACHE.get(&slug) {
            return Ok(Some(post.value().clone()));
        }
        let post = fetch_post(slug.clone()).await?;
        // misses stay uncached
        #[cfg(feature = "hydrate")]
        if let Some(post) = &post {
            GLOBAL_POST_CACHE.insert(slug, post.clone());
        }
        Ok::<_, ServerFnError>(post)
    });

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="max-w-3xl mx-auto space-y-4">
                    <div class="loading-skeleton h-10 rounded w-3/4"></div>
                    <div class="loading-skeleton h-6 rounded w-1/2"></div>
                    <div class="loading-skeleton h-96 rounded"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match post.await {
                    Ok(Some(post)) => Either::Left(view! { <PostView post /> }),
                    Ok(None) => Either::Right(Either::Left(view! { <PostNotFound /> })),
                    Err(e) => {
                        Either::Right(
                            Either::Right(
                                view! {
                                    <p class="text-center text-red-500">
                                        {format!("Couldn't load this post: {e}")}
                                    </p>
                                },
                            ),
                        )
                    }
                }
            })}
        </Suspense>
    }
}

#[component]
fn PostNotFound() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Post not found" />
        <div class="text-center py-20">
            <h1 class="text-3xl font-bold font-heading mb-4">"Post not found"</h1>
            <p class="text-muted-foreground mb-8">
                "The post you're looking for doesn't exist or has been removed."
            </p>
            <A href="/blog" attr:class="text-teal hover:underline">
                "← Back to Blog"
            </A>
        </div>
    }
}

#[component]
fn PostView(post: Post) -> impl IntoView {
    let Post { meta, content } = post;
    let url = format!("{}{}", PROFILE.site_url, meta.href());
    let shares = share_links(&meta.title, &url);
    let date = meta.long_date();
    let PostMeta {
        title,
        excerpt,
        tags,
        image,
        reading_minutes,
        ..
    } = meta;

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=excerpt.clone() />
        <article class="max-w-3xl mx-auto">
            <A
                href="/blog"
                attr:class="inline-block mb-8 text-sm text-muted-foreground hover:text-teal"
            >
                "← Back to Blog"
            </A>
            <div class="flex flex-wrap gap-2 mb-4">
                {tags
                    .into_iter()
                    .map(|t| {
                        view! {
                            <span class="text-xs px-2 py-1 rounded bg-teal/10 text-teal">{t}</span>
                        }
                    })
                    .collect_view()}
            </div>
            <h1 class="text-4xl md:text-5xl font-bold font-heading mb-4">{title.clone()}</h1>
            <p class="text-lg text-muted-foreground mb-6">{excerpt}</p>
            <div class="flex flex-wrap gap-4 text-sm text-muted-foreground pb-6 mb-8 border-b border-border">
                <span>{PROFILE.name}</span>
                <span>{date}</span>
                <span>{format!("{reading_minutes} min read")}</span>
            </div>
            {image
                .map(|src| {
                    view! {
                        <img src=src alt=title class="w-full rounded-lg mb-10 object-cover max-h-96" />
                    }
                })}
            <div class="prose dark:prose-invert max-w-none" inner_html=content></div>
            <div class="mt-12 pt-6 border-t border-border flex flex-col sm:flex-row justify-between gap-4">
                <div class="flex items-center gap-3 text-sm">
                    <span class="text-muted-foreground">"Share:"</span>
                    {shares
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-teal"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <A href="/blog" attr:class="text-teal hover:underline text-sm">
                    "Read More Articles →"
                </A>
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_posts_in_collection_order() {
        let posts = list_posts().await.unwrap();
        let listed = posts
            .iter()
            .map(|p| (p.slug.as_str(), p.tags.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            listed,
            vec![("free-claude-code", 4), ("welcome", 2), ("my-journey", 4)]
        );
    }

    #[tokio::test]
    async fn test_fetch_post_unknown_slug_is_none() {
        assert!(fetch_post("does-not-exist".to_string())
            .await
            .unwrap()
            .is_none());
        assert!(fetch_post("../Cargo.toml".to_string())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_fetch_post_known_slug() {
        let post = fetch_post("welcome".to_string()).await.unwrap().unwrap();
        assert_eq!(post.meta.title, "Welcome to My Blog");
        assert!(post.content.contains("<h1>Welcome to My Blog</h1>"));
    }

    #[test]
    fn test_parse_failure_is_server_error() {
        let err = post_response("broken", Err(BlogError::Parse("broken".to_string())))
            .unwrap_err();
        assert!(err.to_string().contains("Couldn't parse blog post broken"));
        assert!(post_response("gone", Err(BlogError::NotFound))
            .unwrap()
            .is_none());
    }
}
