use crate::config::SITE_OWNER;

#[derive(Debug, PartialEq)]
pub struct Project {
    /// URL slug, `/projects/<id>`.
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub images: &'static [&'static str],
    pub github_link: Option<&'static str>,
    pub live_demo_link: Option<&'static str>,
    /// Accent used on the home page card.
    pub accent: &'static str,
    /// Tool summary shown on the home page card.
    pub tools: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "cognizant-safe-city",
        title: "Cognizant Safe City",
        short_description: "AI-powered smart city solution integrating emergency-responsive traffic signals, real-time headcount tech for fire safety, and mobile apps for citizen feedback.",
        full_description: &[
            "The Cognizant Safe City project is a cutting-edge, AI-powered public safety solution developed to modernize urban security and optimize emergency response mechanisms. Designed in collaboration with Cognizant under its CSR and Academic Connect initiative, the platform aims to integrate smart surveillance, real-time analytics, and citizen-focused tools into a unified ecosystem that supports proactive law enforcement and safer communities.",
            "Key features include a real-time facial recognition system using OpenCV and Python, enabling authorities to identify individuals from surveillance feeds and match them with criminal databases. A geo-mapping dashboard visualizes crime-prone zones and patrol routes, providing data-driven insights for intelligent policing. The platform also includes a centralized incident reporting portal, allowing citizens to file complaints and track their resolution, thereby fostering transparency and community trust.",
            "We engineered a dynamic emergency alert system, including a panic button trigger for distress situations, integrated with police and emergency units for instant response. Leveraging IoT and cloud services, the system also supports anomaly detection in public spaces and secure data handling through encrypted APIs and role-based access control. The web application, built with React.js, Node.js, Express.js, and MongoDB, delivers a seamless experience, combining modern UI/UX with powerful backend capabilities.",
            "Machine Learning models were incorporated to detect suspicious behavior and predict crime hotspots using historical data patterns. As part of the development team, I contributed to AI modules, UI development, secure API integration, and performance optimization. The project was successfully presented to Cognizant mentors and showcased at intercollegiate innovation forums, representing a significant leap toward intelligent, safer urban infrastructure.",
        ],
        technologies: &[
            "AI",
            "AR",
            "Full Stack (React, Node.js)",
            "IoT",
            "Embedded Systems",
            "Machine Learning",
            "Computer Vision",
            "PostgreSQL",
            "AWS",
        ],
        images: &["/image1.jpg", "/image2.jpg", "/image3.jpg", "/image4.jpg"],
        github_link: None,
        live_demo_link: None,
        accent: "blue",
        tools: "AI, AR, Full Stack, IoT, Embedded Systems",
    },
    Project {
        id: "research-ipr-management",
        title: "Research & IPR Management Platform",
        short_description: "A centralized digital platform to streamline research activities, manage intellectual property rights, and support entrepreneurial growth.",
        full_description: &[
            "This platform provides a centralized digital solution to streamline research activities and manage intellectual property rights (IPR) efficiently. It is designed to support entrepreneurial growth within academic and R&D institutions.",
            "Key functionalities include real-time data tracking of research projects, comprehensive collaboration modules for researchers, and optimized resource management features. The platform facilitates the entire IPR lifecycle, from ideation and patent application to commercialization. It ensures secure storage of research data and provides analytics for project progress and resource utilization.",
        ],
        technologies: &["React", "Node.js", "PostgreSQL", "Firebase", "AWS S3", "Auth0"],
        images: &[
            "/projects/ipr-platform/image1.jpg",
            "/projects/ipr-platform/image2.jpg",
        ],
        github_link: None,
        live_demo_link: None,
        accent: "green",
        tools: "React, Node.js, PostgreSQL, Firebase, AWS S3, Auth0",
    },
    Project {
        id: "movie-website",
        title: "Movie Website",
        short_description: "A dynamic movie platform built with React, fetching data from The Movie Database (TMDb) API.",
        full_description: &[
            "A dynamic movie platform built with React, fetching data from The Movie Database (TMDb) API. Features include browsing popular movies, detailed movie pages, responsive design, and search functionality.",
        ],
        technologies: &["React", "Tailwind CSS", "Framer Motion", "TMDb API"],
        images: &[],
        github_link: None,
        live_demo_link: Some("https://movie-iota-beryl.vercel.app/"),
        accent: "purple",
        tools: "React, Tailwind CSS, Framer Motion, TMDb API",
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn project_page_title(project: Option<&Project>) -> String {
    match project {
        Some(p) => format!("{} | {} Portfolio", p.title, SITE_OWNER),
        None => format!("Project Not Found | {} Portfolio", SITE_OWNER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_by_slug() {
        let project = find_project("research-ipr-management").expect("known project");
        assert_eq!(project.title, "Research & IPR Management Platform");
        assert_eq!(
            project_page_title(Some(project)),
            "Research & IPR Management Platform | Shayan Shaikh Portfolio"
        );
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(find_project("does-not-exist").is_none());
        assert!(find_project("").is_none());
        assert_eq!(
            project_page_title(find_project("does-not-exist")),
            "Project Not Found | Shayan Shaikh Portfolio"
        );
    }

    #[test]
    fn slugs_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
