#[derive(Debug, PartialEq)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub award_body: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

/// Certificates revealed per "Load More" click.
pub const ITEMS_PER_LOAD: usize = 6;

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "Resilence Techmaster 2.0",
        award_body: "Anjuman-I-Islam",
        image: "/gold.jpg",
        description: "Clinched 1st Prize at Resilience TechMaster 2.0, a celebration of innovation, teamwork, and unbreakable spirit!",
        link: None,
    },
    Certificate {
        id: 2,
        title: "IP Awareness/Training program",
        award_body: "National IP Awarness Mission",
        image: "/NPM.jpg",
        description: "Successfully conducted an IP Awareness/Training Program under NIPAM, fostering innovation through education on intellectual property rights.",
        link: None,
    },
    Certificate {
        id: 3,
        title: "The Complete Web Development",
        award_body: "Udemy",
        image: "/udemy.jpg",
        description: "Mastering HTML, CSS, JavaScript, Node.js, MongoDB, and more to build full-stack web applications.",
        link: None,
    },
    Certificate {
        id: 4,
        title: "ERR_404 Hackathon",
        award_body: "Anjuman-I-Islam",
        image: "/404.jpg",
        description: "Successfully participated in a 36-hour hackathon, pushing boundaries through nonstop innovation, collaboration, and problem-solving under pressure.",
        link: None,
    },
    Certificate {
        id: 5,
        title: "Inovative Project",
        award_body: "Creative Ideas And Inovation In Action",
        image: "/ciia.jpg",
        description: "Showcased an innovative idea at CIIA 4, blending creativity with real-world impact.",
        link: None,
    },
    Certificate {
        id: 6,
        title: "Web Development Internship",
        award_body: "CodeAlpha",
        image: "/code.jpg",
        description: "Gaining hands-on experience in building responsive and dynamic web applications.",
        link: None,
    },
    Certificate {
        id: 7,
        title: "Letter Of Appoinment",
        award_body: "Instituion Of Electronics And Telecommunication Engineering",
        image: "/LOP.jpg",
        description: "Elected as Chairman of the IETE Student Forum to lead innovation, foster technical growth, and empower student engagement.",
        link: None,
    },
    Certificate {
        id: 8,
        title: "Project Display",
        award_body: "Fr. Conceicao Rodrigues College Of Engineering Bandra",
        image: "/parkalp.png",
        description: "Learned about Agile principles and Scrum framework for project management.",
        link: None,
    },
    Certificate {
        id: 9,
        title: "Innovative Idea For Entrepreneurship",
        award_body: "Entrepreneur Development Cell",
        image: "/edc.png",
        description: "Developed a startup-focused project, aimed at solving real-world problems through innovation and entrepreneurial thinking.",
        link: None,
    },
];

/// First `shown` certificates, clamped to what exists.
pub fn visible_certificates(shown: usize) -> &'static [Certificate] {
    &CERTIFICATES[..shown.min(CERTIFICATES.len())]
}

pub fn has_more(shown: usize) -> bool {
    shown < CERTIFICATES.len()
}

pub fn load_more(shown: usize) -> usize {
    shown.saturating_add(ITEMS_PER_LOAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_then_remainder() {
        assert_eq!(visible_certificates(ITEMS_PER_LOAD).len(), 6);
        assert!(has_more(ITEMS_PER_LOAD));

        let shown = load_more(ITEMS_PER_LOAD);
        assert_eq!(visible_certificates(shown).len(), CERTIFICATES.len());
        assert!(!has_more(shown));
    }

    #[test]
    fn visible_slice_keeps_order() {
        let ids: Vec<u32> = visible_certificates(3).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
