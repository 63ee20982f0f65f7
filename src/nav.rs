use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far below the viewport top a section may start and still count as entered.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;
/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Education,
    Blog,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Blog,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
    pub href: &'static str,
    /// Route links go through the router; the rest are in-page anchors on `/`.
    pub is_route: bool,
}

pub const NAV_LINKS: [NavLink; 8] = [
    NavLink {
        section: SectionId::Home,
        label: "Home",
        href: "/",
        is_route: true,
    },
    NavLink {
        section: SectionId::About,
        label: "About",
        href: "/#about",
        is_route: false,
    },
    NavLink {
        section: SectionId::Projects,
        label: "Projects",
        href: "/#projects",
        is_route: false,
    },
    NavLink {
        section: SectionId::Skills,
        label: "Skills",
        href: "/#skills",
        is_route: false,
    },
    NavLink {
        section: SectionId::Experience,
        label: "Experience",
        href: "/#experience",
        is_route: false,
    },
    NavLink {
        section: SectionId::Education,
        label: "Education",
        href: "/#education",
        is_route: false,
    },
    NavLink {
        section: SectionId::Blog,
        label: "Blog",
        href: "/blog",
        is_route: true,
    },
    NavLink {
        section: SectionId::Contact,
        label: "Contact",
        href: "/#contact",
        is_route: false,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    BlogIndex,
    BlogPost(String),
    NotFound,
}

impl Route {
    pub fn parse(pathname: &str) -> Route {
        match pathname {
            "" | "/" => Route::Home,
            "/blog" | "/blog/" => Route::BlogIndex,
            path => match path.strip_prefix("/blog/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Route::BlogPost(slug.to_string())
                }
                _ => Route::NotFound,
            },
        }
    }

    pub fn is_blog(&self) -> bool {
        matches!(self, Route::BlogIndex | Route::BlogPost(_))
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self {
            current: SectionId::Home,
        }
    }
}

impl ActiveSection {
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Re-evaluates after a scroll.
    ///
    /// `offset_top` yields a section's top offset in page pixels, or `None`
    /// when that section isn't on the page. The last section whose top is at
    /// or above `scroll_y + SCROLL_LOOKAHEAD` wins; if none is, nothing changes.
    pub fn on_scroll<F>(&mut self, route: &Route, scroll_y: f64, offset_top: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        match route {
            Route::BlogIndex | Route::BlogPost(_) => self.current = SectionId::Blog,
            Route::NotFound => {}
            Route::Home => {
                let scroll_position = scroll_y + SCROLL_LOOKAHEAD;
                if let Some(id) = SectionId::ALL
                    .into_iter()
                    .rev()
                    .find(|id| offset_top(*id).is_some_and(|top| top <= scroll_position))
                {
                    self.current = id;
                }
            }
        }
        self.current
    }

    /// Re-evaluates after navigation; `hash` may carry its leading `#`.
    pub fn on_navigate(&mut self, route: &Route, hash: &str) -> SectionId {
        match route {
            Route::BlogIndex | Route::BlogPost(_) => self.current = SectionId::Blog,
            Route::Home => {
                self.current = hash
                    .trim_start_matches('#')
                    .parse()
                    .unwrap_or(SectionId::Home);
            }
            Route::NotFound => {}
        }
        self.current
    }

    pub fn is_active(&self, link: &NavLink, route: &Route) -> bool {
        match link.section {
            SectionId::Blog => route.is_blog(),
            section => *route == Route::Home && self.current == section,
        }
    }
}
