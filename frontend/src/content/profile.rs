pub const TAGLINE: &str =
    "Creative Technologist & Full-Stack Developer crafting immersive, intelligent digital experiences.";

pub const ABOUT: &str = "I'm a passionate Web Developer and Creative Technologist, driven by a deep love for both design and code. I specialize in crafting dynamic, user-friendly websites and digital experiences that are visually appealing and built with robust functionality.";

pub struct Experience {
    pub role: &'static str,
    pub description: &'static str,
    pub period: &'static str,
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Chairperson – IETE Student Chapter",
        description: "Led the chapter, organized workshops, tech talks, and innovation-driven student events to boost engagement and industry interaction.",
        period: "2024–2025",
    },
    Experience {
        role: "Team Lead – Cognizant Safe City",
        description: "Led a team building an AI-based urban safety platform with smart surveillance and threat detection features like panic alerts and crime heatmaps.",
        period: "2023–2025",
    },
    Experience {
        role: "Resilience Tech Masters – Winner",
        description: "Awarded for developing a cutting-edge safety solution. Recognized for pushing boundaries and applying tech for real-world impact.",
        period: "2025",
    },
    Experience {
        role: "Most Promising BE Student",
        description: "Acknowledged for academic excellence and leadership capabilities by M.H. Saboo Siddik College of Engineering.",
        period: "2024–2025",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Hover colour of the icon.
    pub color: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/shayan-shaikh-816832221/",
        color: "#0A66C2",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Shayuuu",
        color: "#6e5494",
    },
    SocialLink {
        label: "Gmail",
        href: "mailto:shayanshaikh2003.ss@gmail.com",
        color: "#EA4335",
    },
];
