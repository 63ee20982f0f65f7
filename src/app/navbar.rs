use leptos::{either::Either, prelude::*};
use leptos_router::{components::A, hooks::use_location};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::PROFILE;
use crate::nav::{is_scrolled, ActiveSection, NavLink, Route, SectionId, NAV_LINKS};
use crate::theme::Theme;

fn section_offset(id: SectionId) -> Option<f64> {
    document()
        .get_element_by_id(id.as_str())?
        .dyn_ref::<leptos::web_sys::HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| Route::parse(&location.pathname.get()));
    let active = RwSignal::new(ActiveSection::default());
    let menu_open = RwSignal::new(false);
    let theme = expect_context::<RwSignal<Theme>>();
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let route = route.get();
        active.update(|a| {
            a.on_scroll(&route, y, section_offset);
        });
    });

    Effect::new(move |_| {
        let route = route.get();
        let hash = location.hash.get();
        active.update(|a| {
            a.on_navigate(&route, &hash);
        });
        menu_open.set(false);
    });

    let link_class = move |link: NavLink| {
        let route = route.get();
        if active.get().is_active(&link, &route) {
            "text-teal font-medium"
        } else {
            "text-foreground/80 hover:text-teal transition-colors"
        }
    };

    let nav_item = move |link: NavLink| {
        let class = move || link_class(link);
        if link.is_route {
            Either::Left(view! {
                <A href=link.href attr:class=class>
                    {link.label}
                </A>
            })
        } else {
            Either::Right(view! {
                <a href=link.href class=class on:click=move |_| menu_open.set(false)>
                    {link.label}
                </a>
            })
        }
    };

    let theme_toggle = move || {
        view! {
            <button
                class="p-2 rounded-full hover:bg-teal/10 transition-colors"
                aria-label=move || theme.get().toggle_label()
                on:click=move |_| theme.update(|t| *t = t.toggled())
            >
                {move || match theme.get() {
                    Theme::Dark => "☀",
                    Theme::Light => "☾",
                }}
            </button>
        }
    };

    view! {
        <header class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed top-0 inset-x-0 z-50 py-3 bg-background/80 dark:bg-navy/80 backdrop-blur shadow-md transition-all"
            } else {
                "fixed top-0 inset-x-0 z-50 py-5 bg-transparent transition-all"
            }
        }>
            <nav class="container mx-auto px-4 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold font-heading">
                    <span class="text-teal">"<"</span>
                    {PROFILE.short_name}
                    <span class="text-teal">"/>"</span>
                </A>
                <div class="hidden md:flex items-center gap-6">
                    {NAV_LINKS.into_iter().map(nav_item).collect_view()}
                    {theme_toggle()}
                    <a
                        href=PROFILE.resume_path
                        download=PROFILE.resume_file_name
                        class="px-4 py-2 rounded-md border border-teal text-teal hover:bg-teal/10 transition-colors"
                    >
                        "Resume"
                    </a>
                </div>
                <div class="flex md:hidden items-center gap-2">
                    {theme_toggle()}
                    <button
                        class="p-2"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden container mx-auto px-4 pt-4 pb-6 flex flex-col gap-4 bg-background dark:bg-navy">
                    {NAV_LINKS.into_iter().map(nav_item).collect_view()}
                    <a
                        href=PROFILE.resume_path
                        download=PROFILE.resume_file_name
                        class="text-teal"
                    >
                        "Download CV"
                    </a>
                </div>
            </Show>
        </header>
    }
}
