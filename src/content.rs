use std::fmt;

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
    pub portrait: &'static str,
    /// Public origin, used for absolute links such as share intents.
    pub site_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Krishna Bahadur Gurung",
    short_name: "Krishna",
    headline: "I build things for the web.",
    summary: "I'm a full-stack developer specializing in building exceptional digital experiences. Currently, I'm focused on building accessible, human-centered products.",
    email: "gkrishnabahadur618@gmail.com",
    location: "Pokhara, Nepal",
    github: "https://github.com/KrishnaGrg1/",
    linkedin: "https://www.linkedin.com/in/krishna-bahadur-gurung-60933a2a6/",
    twitter: "https://x.com/krishna_ba63631",
    resume_path: "/krishna.pdf",
    resume_file_name: "Krishna_Bahadur_Gurung_CV.pdf",
    portrait: "/portfolio.jpg",
    site_url: "https://krishna-portfolio-sand.vercel.app",
};

pub const ABOUT: [&str; 3] = [
    "Hello! I'm Krishna Bahadur Gurung, a Full Stack Developer with a passion for building robust, scalable, and user-friendly web applications. With a solid foundation in both frontend and backend technologies, I specialize in creating end-to-end solutions for SaaS products. My journey began during my BCA studies, where I discovered my love for coding, and I've since gained hands-on experience with modern stacks like React, Next.js, Node.js, and NestJS.",
    "I've successfully delivered projects ranging from multi-tenant SaaS platforms to gamified productivity apps, always focusing on clean code and seamless user experiences. I thrive in environments that challenge me to learn and adapt, whether it's implementing AI-driven features or optimizing database performance.",
    "Currently, I'm expanding my expertise in server-side rendering, authentication with BetterAuth, and cloud deployments. I'm actively seeking opportunities to contribute to innovative SaaS products and grow as a software engineer.",
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub image: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "A modern portfolio website with smooth animations, dark mode, and responsive design.",
        tags: &["React", "Next.js", "Tailwind CSS", "Framer Motion"],
        github: Some("https://github.com/KrishnaGrg1/Personal-Portfolio"),
        demo: Some("https://krishna-portfolio-sand.vercel.app/"),
        image: Some("/Portfolio.png"),
    },
    Project {
        title: "LevelUp",
        description: "LevelUp is a modern, multi-language SaaS starter built with Next.js 15, React 19, TypeScript, and Tailwind CSS.",
        tags: &["Next.js", "Tailwind CSS", "Shadcn Ui", "Tanstack", "Zustand"],
        github: Some("https://github.com/KrishnaGrg1/LevelUp"),
        demo: Some("https://www.melevelup.me/"),
        image: Some("/levelup.png"),
    },
    Project {
        title: "KanBanBoard",
        description: "A simple Kanban board using Next.js, Shadcn Ui, Tailwind CSS and Supabase.",
        tags: &["Next.js", "Tailwind CSS", "Shadcn Ui", "Tanstack"],
        github: Some("https://github.com/KrishnaGrg1/kanbanboard"),
        demo: Some("https://kanbanboard-lemon.vercel.app"),
        image: Some("/kanbanboard.png"),
    },
    Project {
        title: "PopCornBox",
        description: "A subscription-based service where users select plans, manage their profiles, and pay securely through integrated gateways like Khalti.",
        tags: &["EJs", "Node.js", "Express.js", "MongoDB", "Khalti"],
        github: Some("https://github.com/KrishnaGrg1/6th-Semester-Project"),
        demo: Some("https://popcornbox.up.railway.app/"),
        image: Some("/PopCornBox.jpg"),
    },
    Project {
        title: "Samjhana",
        description: "Attach YouTube and Twitter links for enhanced content association.",
        tags: &[
            "TypeScript",
            "React",
            "NodeJs",
            "Express.js",
            "MongoDB",
            "Tailwind CSS",
        ],
        github: Some("https://github.com/KrishnaGrg1/Samjhana"),
        demo: None,
        image: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Databases,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Databases => "databases",
            SkillCategory::Tools => "tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Devicon path below the CDN root.
    pub icon: &'static str,
    pub category: SkillCategory,
}

impl Skill {
    pub fn icon_url(&self) -> String {
        format!("{DEVICON}/{}", self.icon)
    }

    /// Icons drawn in black that need inverting on a dark background.
    pub fn is_monochrome(&self) -> bool {
        matches!(self.name, "Next.js" | "Express.js" | "GitHub")
    }
}

const fn skill(name: &'static str, icon: &'static str, category: SkillCategory) -> Skill {
    Skill {
        name,
        icon,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("JavaScript", "javascript/javascript-original.svg", SkillCategory::Languages),
    skill("TypeScript", "typescript/typescript-original.svg", SkillCategory::Languages),
    skill("Python", "python/python-original.svg", SkillCategory::Languages),
    skill("SQL", "azuresqldatabase/azuresqldatabase-original.svg", SkillCategory::Languages),
    skill("React", "react/react-original.svg", SkillCategory::Frontend),
    skill("Next.js", "nextjs/nextjs-original.svg", SkillCategory::Frontend),
    skill("TanStack Start", "react/react-original.svg", SkillCategory::Frontend),
    skill("React Native", "react/react-original.svg", SkillCategory::Frontend),
    skill("SvelteKit", "svelte/svelte-original.svg", SkillCategory::Frontend),
    skill("Tailwind CSS", "tailwindcss/tailwindcss-original.svg", SkillCategory::Frontend),
    skill("Node.js", "nodejs/nodejs-original.svg", SkillCategory::Backend),
    skill("Express.js", "express/express-original.svg", SkillCategory::Backend),
    skill("NestJS", "nestjs/nestjs-original.svg", SkillCategory::Backend),
    skill("PostgreSQL", "postgresql/postgresql-original.svg", SkillCategory::Databases),
    skill("MongoDB", "mongodb/mongodb-original.svg", SkillCategory::Databases),
    skill("BetterAuth", "oauth/oauth-original.svg", SkillCategory::Tools),
    skill("JWT", "oauth/oauth-original.svg", SkillCategory::Tools),
    skill("Cloudinary", "cloudflare/cloudflare-original.svg", SkillCategory::Tools),
    skill("Git", "git/git-original.svg", SkillCategory::Tools),
    skill("GitHub", "github/github-original.svg", SkillCategory::Tools),
    skill("VS Code", "vscode/vscode-original.svg", SkillCategory::Tools),
];

/// Skills in `category`, or all of them for `None`, in table order.
pub fn skills_in(category: Option<SkillCategory>) -> Vec<&'static Skill> {
    SKILLS
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .collect()
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub website: Option<&'static str>,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Lexflow",
        role: "Full Stack Developer Intern",
        location: "Pokhara, Nepal (Remote)",
        period: "July 2025 — Oct 2025",
        website: Some("https://lexflow.fr/en/"),
        description: "Contributed to Lexflow, a SaaS platform enabling businesses to automate client onboarding, document workflows, and company creation with multi-language support.",
        highlights: &[
            "Developed dynamic dashboards and user management systems using SvelteKit, Flask, and automation tools like n8n.",
            "Collaborated on frontend modules for company sites built with React, leveraging Zustand and TanStack Query for state and data management.",
        ],
        technologies: &["SvelteKit", "Flask", "n8n", "React", "Zustand", "TanStack Query"],
    },
    Experience {
        company: "BrandBuilder",
        role: "Full Stack Developer Intern",
        location: "Pokhara, Nepal",
        period: "April 2025 — July 2025",
        website: None,
        description: "Developed cross-platform mobile applications using React Native, Express.js, and TypeScript.",
        highlights: &[
            "Built and deployed mobile applications with focus on performance and user experience.",
            "Implemented RESTful APIs and integrated backend services for seamless data flow.",
        ],
        technologies: &["React Native", "Express.js", "TypeScript"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub cgpa: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Computer Application (BCA)",
        institution: "LA Grandee International College",
        period: "2021 – 2025",
        cgpa: "3.12",
    },
    Education {
        degree: "+2 Management",
        institution: "Sagarmatha Higher Secondary College",
        period: "2019 – 2021",
        cgpa: "3.12",
    },
    Education {
        degree: "SEE",
        institution: "Pokhara Academy",
        period: "2009 – 2019",
        cgpa: "3.7",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skills_without_category() {
        assert_eq!(skills_in(None).len(), SKILLS.len());
    }

    #[test]
    fn test_skills_by_category_keep_order() {
        let names = skills_in(Some(SkillCategory::Databases))
            .into_iter()
            .map(|s| s.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["PostgreSQL", "MongoDB"]);
    }

    #[test]
    fn test_every_skill_in_exactly_one_category() {
        let total = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(Some(*c)).len())
            .sum::<usize>();
        assert_eq!(total, SKILLS.len());
        assert!(SkillCategory::ALL.iter().all(|c| !skills_in(Some(*c)).is_empty()));
    }

    #[test]
    fn test_icon_url() {
        let git = SKILLS.iter().find(|s| s.name == "Git").unwrap();
        assert_eq!(
            git.icon_url(),
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg"
        );
        assert!(!git.is_monochrome());
    }
}
