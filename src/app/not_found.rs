use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Marks the server response as a 404; a no-op in the browser.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Page not found" />
        <section class="min-h-[70vh] flex flex-col items-center justify-center px-4 text-center">
            <p class="font-mono text-teal text-lg mb-2">"404"</p>
            <h1 class="text-4xl md:text-5xl font-bold font-heading mb-4">"Page not found"</h1>
            <p class="text-muted-foreground max-w-md mb-8">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A
                href="/"
                attr:class="px-6 py-3 rounded-md border border-teal text-teal hover:bg-teal/10 transition-colors"
            >
                "Back to Home"
            </A>
        </section>
    }
}
