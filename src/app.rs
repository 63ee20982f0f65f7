mod blog;
mod contact;
mod homepage;
mod navbar;
mod not_found;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::PROFILE;
use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::STORAGE_KEY;

use blog::{BlogHome, BlogPage, BlogWrapper};
use homepage::HomePage;
use navbar::Navbar;
use not_found::NotFound;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    // the stored theme is only readable once hydrated
    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored.set(*t),
            false,
        );
    }

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-background text-foreground dark:bg-navy dark:text-white",
                    theme.get().class(),
                )
            }>
                <Navbar />
                <main class="overflow-hidden relative">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <ParentRoute path=path!("/blog") view=BlogWrapper>
                            <Route path=path!("") view=BlogHome />
                            // async so a missing post can still set the 404 status
                            <Route path=path!(":slug") view=BlogPage ssr=SsrMode::Async />
                        </ParentRoute>
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    let year = built.get(..4).unwrap_or_default();
    view! {
        <footer class="border-t border-border py-10 px-4">
            <div class="container mx-auto flex flex-col md:flex-row justify-between gap-6">
                <div>
                    <A href="/" attr:class="text-xl font-bold font-heading">
                        <span class="text-teal">"<"</span>
                        {PROFILE.name}
                        <span class="text-teal">"/>"</span>
                    </A>
                    <p class="text-sm text-muted-foreground mt-2">{PROFILE.summary}</p>
                </div>
                <div class="flex gap-4 items-start">
                    <a href=PROFILE.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <i class="devicon-github-original text-xl"></i>
                    </a>
                    <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <i class="devicon-linkedin-plain text-xl"></i>
                    </a>
                    <a href=PROFILE.twitter target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                        <i class="devicon-twitter-original text-xl"></i>
                    </a>
                    <a href=format!("mailto:{}", PROFILE.email) aria-label="Email">
                        "✉"
                    </a>
                    <a href=PROFILE.resume_path download=PROFILE.resume_file_name class="hover:text-teal">
                        "Download CV"
                    </a>
                </div>
            </div>
            <p class="text-center text-xs text-muted-foreground mt-8">
                {format!("© {year} {}. ", PROFILE.name)}
                <span title="Build time">{format!("Built {built}")}</span>
            </p>
        </footer>
    }
}
