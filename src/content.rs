//! Constant content consumed by the presentational sections.

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
    /// Tailwind gradient stops for the category badge.
    pub color: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Education,
}

pub struct TimelineEntry {
    pub id: u32,
    pub kind: EntryKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub technologies: &'static [&'static str],
    pub code_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub icon: &'static str,
}

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub content: &'static str,
    pub href: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const FULL_NAME: &str = "Vishnu Mahendra Reddy L";
pub const ROLE: &str = "Full Stack Developer & Cybersecurity Analyst";
pub const TAGLINE: &str = "As a Full Stack Developer and Cybersecurity Analyst, I specialize in developing secure, high-performance applications — merging frontend finesse with backend strength and cybersecurity best practices.";
pub const EMAIL: &str = "vishnumahenadrreddy@gmail.com";

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        icon: "icon-code",
        skills: &[
            "React",
            "TypeScript",
            "Next.js",
            "Vue.js",
            "Tailwind CSS",
            "SASS",
            "JavaScript",
            "HTML5",
            "CSS3",
            "Framer Motion",
        ],
        color: "from-blue-500 to-purple-600",
    },
    SkillCategory {
        title: "Backend Development",
        icon: "icon-server",
        skills: &[
            "Node.js",
            "Python",
            "Express.js",
            "Django",
            "FastAPI",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "GraphQL",
            "REST APIs",
        ],
        color: "from-green-500 to-teal-600",
    },
    SkillCategory {
        title: "Tools & Technologies",
        icon: "icon-wrench",
        skills: &[
            "Git", "Docker", "AWS", "Vercel", "Figma", "VS Code", "Postman", "Jest", "Cypress",
            "Webpack",
        ],
        color: "from-orange-500 to-red-600",
    },
];

pub static WORK_EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        kind: EntryKind::Work,
        title: "Senior Full Stack Developer",
        organization: "TechCorp Solutions",
        location: "San Francisco, CA",
        period: "2022 - Present",
        description: "Lead development of scalable web applications serving 100k+ users. Mentored junior developers and established coding standards.",
        achievements: &[
            "Reduced application load time by 40% through optimization",
            "Led team of 5 developers on major product redesign",
            "Implemented CI/CD pipeline reducing deployment time by 60%",
        ],
        technologies: &["React", "Node.js", "AWS", "TypeScript", "PostgreSQL"],
    },
    TimelineEntry {
        id: 2,
        kind: EntryKind::Work,
        title: "Full Stack Developer",
        organization: "StartupXYZ",
        location: "Austin, TX",
        period: "2020 - 2022",
        description: "Developed MVP for B2B SaaS platform from ground up. Collaborated with design team to create intuitive user experiences.",
        achievements: &[
            "Built core product features used by 500+ businesses",
            "Integrated payment processing and subscription management",
            "Achieved 99.9% uptime through robust error handling",
        ],
        technologies: &["Vue.js", "Express.js", "MongoDB", "Stripe", "Docker"],
    },
    TimelineEntry {
        id: 3,
        kind: EntryKind::Work,
        title: "Frontend Developer",
        organization: "Digital Agency Pro",
        location: "Remote",
        period: "2019 - 2020",
        description: "Created responsive websites and web applications for various clients. Focused on performance optimization and user experience.",
        achievements: &[
            "Delivered 20+ projects with 100% client satisfaction",
            "Improved Core Web Vitals scores by average of 35%",
            "Established component library used across multiple projects",
        ],
        technologies: &["React", "SASS", "Webpack", "Figma", "Git"],
    },
];

pub static EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        kind: EntryKind::Education,
        title: "Computer Science Engineering",
        organization: "Jain Institute of Technology",
        location: "Davangere, Karnataka, India",
        period: "2022 - 2026",
        description: "Comprehensive engineering program focusing on software development, algorithms, and cybersecurity.",
        achievements: &[
            "Specialized in cybersecurity and software engineering",
            "Completed full-stack development projects",
            "Strong foundation in computer science fundamentals",
        ],
        technologies: &["Java", "Python", "C++", "JavaScript", "React", "Node.js"],
    },
    TimelineEntry {
        id: 2,
        kind: EntryKind::Education,
        title: "PUC (Pre-University Course)",
        organization: "Jain University",
        location: "Davangere, Karnataka, India",
        period: "2020 - 2022",
        description: "Pre-university education with focus on science and mathematics, preparing for engineering studies.",
        achievements: &[
            "Completed with good academic performance",
            "Strong foundation in mathematics and physics",
            "Developed analytical and problem-solving skills",
        ],
        technologies: &["Mathematics", "Physics", "Chemistry", "Computer Science"],
    },
    TimelineEntry {
        id: 3,
        kind: EntryKind::Education,
        title: "SSLC (Secondary School Leaving Certificate)",
        organization: "KSS English Medium School",
        location: "Davangere, Karnataka, India",
        period: "2018 - 2019",
        description: "Secondary education with comprehensive curriculum and strong academic foundation.",
        achievements: &[
            "Completed secondary education successfully",
            "Developed strong communication skills",
            "Built foundation for higher studies",
        ],
        technologies: &["English", "Mathematics", "Science", "Social Studies"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with real-time inventory management, payment processing, and admin dashboard.",
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "Redux"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "Collaborative project management tool with real-time updates, team communication, and progress tracking.",
        image_url: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
        technologies: &["Next.js", "TypeScript", "Prisma", "Socket.io", "Tailwind"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 3,
        title: "Weather Analytics Dashboard",
        description: "Real-time weather data visualization with interactive charts, forecasting, and location-based insights.",
        image_url: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=600&h=400&fit=crop",
        technologies: &["Vue.js", "Python", "D3.js", "FastAPI", "Chart.js"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    Project {
        id: 4,
        title: "Social Media Platform",
        description: "Modern social networking platform with real-time messaging, content sharing, and user engagement features.",
        image_url: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=600&h=400&fit=crop",
        technologies: &["React", "Express", "MongoDB", "WebSocket", "AWS"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    Project {
        id: 5,
        title: "AI-Powered Content Generator",
        description: "Content creation tool powered by AI with customizable templates, SEO optimization, and multi-format export.",
        image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=400&fit=crop",
        technologies: &["Next.js", "OpenAI API", "Supabase", "Vercel", "Framer Motion"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        id: 6,
        title: "Fitness Tracking Mobile App",
        description: "Cross-platform fitness application with workout tracking, nutrition monitoring, and social challenges.",
        image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=400&fit=crop",
        technologies: &["React Native", "Firebase", "Redux", "Health APIs", "Push Notifications"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        year: "2023",
        icon: "🏆",
    },
    Certification {
        title: "React Developer Certification",
        issuer: "Meta",
        year: "2022",
        icon: "⚛️",
    },
    Certification {
        title: "Google Analytics Individual Qualification",
        issuer: "Google",
        year: "2023",
        icon: "🎯",
    },
];

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "icon-mail",
        label: "Email",
        content: "vishnumahenadrreddy@gmail.com",
        href: "mailto:vishnumahenadrreddy@gmail.com",
    },
    ContactDetail {
        icon: "icon-phone",
        label: "Phone",
        content: "+91 8088875808",
        href: "tel:+918088875808",
    },
    ContactDetail {
        icon: "icon-map-pin",
        label: "Location",
        content: "Davanagere, Karnataka 577004",
        href: "#",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "devicon-github-plain",
        url: "https://github.com",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "devicon-linkedin-plain",
        url: "https://linkedin.com",
    },
    SocialLink {
        name: "Twitter",
        icon: "devicon-twitter-original",
        url: "https://twitter.com",
    },
    SocialLink {
        name: "Discord",
        icon: "icon-message-square",
        url: "https://discord.com",
    },
];
