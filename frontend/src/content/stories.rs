pub struct Story {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub static STORIES: &[Story] = &[
    Story {
        title: "The Hunt",
        summary: "A relentless masked hunter stalks a war-torn world, driven by vengeance and blood-soaked secrets.",
        image: "/stories/the-hunt.png",
        link: "/story/the-tiger-in-the-city",
    },
    Story {
        title: "Echoes of the Rain",
        summary: "In the monsoon-drenched alleys of a forgotten village, a girl uncovers a haunting family secret.",
        image: "/stories/rain.jpg",
        link: "/story/echoes-of-the-rain",
    },
    Story {
        title: "Neon Dreams",
        summary: "A hacker in 2092 Mumbai risks everything to rewrite reality for love.",
        image: "/stories/neon.jpg",
        link: "/story/neon-dreams",
    },
];
