use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactForm;
use crate::content::{
    skills_in, SkillCategory, ABOUT, EDUCATION, EXPERIENCE, PROFILE, PROJECTS,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Experience />
        <Education />
        <Contact />
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold font-heading mb-4">{title}</h2>
            <div class="w-20 h-1 bg-teal mx-auto mb-4 rounded"></div>
            <p class="text-muted-foreground max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center pt-24 px-4">
            <div class="container mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div class="animate-fade-in-up">
                    <p class="font-mono text-teal mb-4">"Hi, my name is"</p>
                    <h1 class="text-4xl md:text-6xl font-bold font-heading mb-4">{PROFILE.name}</h1>
                    <h2 class="text-2xl md:text-4xl font-bold text-muted-foreground mb-6">
                        {PROFILE.headline}
                    </h2>
                    <p class="text-muted-foreground max-w-xl mb-8">{PROFILE.summary}</p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="/#projects"
                            class="px-6 py-3 rounded-md bg-teal text-navy font-medium hover:bg-teal/90 transition-colors"
                        >
                            "View My Work"
                        </a>
                        <a
                            href=PROFILE.resume_path
                            download=PROFILE.resume_file_name
                            class="px-6 py-3 rounded-md border border-teal text-teal hover:bg-teal/10 transition-colors"
                        >
                            "Download CV"
                        </a>
                    </div>
                </div>
                <div class="flex justify-center">
                    <img
                        src=PROFILE.portrait
                        alt=PROFILE.name
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-teal/40 shadow-xl"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeader title="About Me" subtitle="Get to know me better" />
                <div class="max-w-3xl mx-auto space-y-4 text-muted-foreground leading-relaxed">
                    {ABOUT.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    <p>{format!("Based in {}.", PROFILE.location)}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 bg-muted/30 dark:bg-navy-light/40">
            <div class="container mx-auto">
                <SectionHeader title="My Projects" subtitle="Some things I've built" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="flex flex-col rounded-lg overflow-hidden border border-border bg-card dark:bg-navy-light hover:border-teal transition-colors">
                                    {project
                                        .image
                                        .map(|src| {
                                            view! {
                                                <img src=src alt=project.title class="h-48 w-full object-cover" />
                                            }
                                        })}
                                    <div class="p-5 flex flex-col flex-1">
                                        <h3 class="text-xl font-semibold font-heading mb-2">{project.title}</h3>
                                        <p class="text-sm text-muted-foreground mb-4 flex-1">
                                            {project.description}
                                        </p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 rounded bg-teal/10 text-teal">
                                                            {*t}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <div class="flex gap-4 text-sm">
                                            {project
                                                .github
                                                .map(|href| {
                                                    view! {
                                                        <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-teal">
                                                            "Code"
                                                        </a>
                                                    }
                                                })}
                                            {project
                                                .demo
                                                .map(|href| {
                                                    view! {
                                                        <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-teal">
                                                            "Live Demo"
                                                        </a>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn category_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 rounded-full text-sm capitalize bg-teal text-navy font-medium"
    } else {
        "px-4 py-2 rounded-full text-sm capitalize border border-border hover:border-teal hover:text-teal transition-colors"
    }
}

#[component]
fn Skills() -> impl IntoView {
    let category = RwSignal::new(None::<SkillCategory>);
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeader title="My Skills" subtitle="Technologies I work with" />
                <div class="flex flex-wrap justify-center gap-2 mb-10">
                    <button
                        class=move || category_class(category.get().is_none())
                        on:click=move |_| category.set(None)
                    >
                        "all"
                    </button>
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || category_class(category.get() == Some(c))
                                    on:click=move |_| category.set(Some(c))
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-6">
                    {move || {
                        skills_in(category.get())
                            .into_iter()
                            .map(|skill| {
                                let icon_class = if skill.is_monochrome() {
                                    "w-12 h-12 dark:invert"
                                } else {
                                    "w-12 h-12"
                                };
                                view! {
                                    <div class="flex flex-col items-center gap-2 p-4 rounded-lg border border-border hover:border-teal transition-colors">
                                        <img src=skill.icon_url() alt=skill.name class=icon_class loading="lazy" />
                                        <span class="text-sm text-center">{skill.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 bg-muted/30 dark:bg-navy-light/40">
            <div class="container mx-auto max-w-4xl">
                <SectionHeader title="Experience" subtitle="Where I've worked" />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|job| {
                            view! {
                                <div class="relative pl-8 border-l-2 border-teal/40">
                                    <span class="absolute -left-2 top-1 w-4 h-4 rounded-full bg-teal"></span>
                                    <div class="flex flex-col md:flex-row md:justify-between mb-2">
                                        <h3 class="text-xl font-semibold font-heading">
                                            {job.role} " @ "
                                            {match job.website {
                                                Some(href) => {
                                                    leptos::either::Either::Left(
                                                        view! {
                                                            <a href=href target="_blank" rel="noopener noreferrer" class="text-teal hover:underline">
                                                                {job.company}
                                                            </a>
                                                        },
                                                    )
                                                }
                                                None => {
                                                    leptos::either::Either::Right(
                                                        view! { <span class="text-teal">{job.company}</span> },
                                                    )
                                                }
                                            }}
                                        </h3>
                                        <span class="font-mono text-sm text-muted-foreground">{job.period}</span>
                                    </div>
                                    <p class="text-sm text-muted-foreground mb-3">{job.location}</p>
                                    <p class="mb-3">{job.description}</p>
                                    <ul class="list-disc pl-5 space-y-1 text-muted-foreground mb-4">
                                        {job.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                    </ul>
                                    <div class="flex flex-wrap gap-2">
                                        {job
                                            .technologies
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded bg-teal/10 text-teal">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 px-4">
            <div class="container mx-auto max-w-4xl">
                <SectionHeader title="Education" subtitle="My academic background" />
                <div class="grid md:grid-cols-3 gap-6">
                    {EDUCATION
                        .iter()
                        .map(|e| {
                            view! {
                                <div class="p-6 rounded-lg border border-border bg-card dark:bg-navy-light">
                                    <h3 class="text-lg font-semibold font-heading mb-2">{e.degree}</h3>
                                    <p class="text-teal mb-1">{e.institution}</p>
                                    <p class="text-sm text-muted-foreground mb-1">{e.period}</p>
                                    <p class="text-sm">{format!("CGPA: {}", e.cgpa)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 bg-muted/30 dark:bg-navy-light/40">
            <div class="container mx-auto max-w-5xl">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to say hi? My inbox is always open."
                />
                <div class="grid md:grid-cols-3 gap-10">
                    <div class="space-y-6">
                        <div>
                            <h3 class="font-semibold mb-1">"Email"</h3>
                            <a href=format!("mailto:{}", PROFILE.email) class="text-teal hover:underline break-all">
                                {PROFILE.email}
                            </a>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-1">"Location"</h3>
                            <p class="text-muted-foreground">{PROFILE.location}</p>
                        </div>
                        <div class="flex gap-4">
                            <a href=PROFILE.github target="_blank" rel="noopener noreferrer" class="hover:text-teal">
                                "GitHub"
                            </a>
                            <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" class="hover:text-teal">
                                "LinkedIn"
                            </a>
                            <a href=PROFILE.twitter target="_blank" rel="noopener noreferrer" class="hover:text-teal">
                                "Twitter"
                            </a>
                        </div>
                    </div>
                    <div class="md:col-span-2">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}
