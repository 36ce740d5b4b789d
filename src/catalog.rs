//! Static page content. Every section renders from these lists, so there is
//! exactly one copy of each.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub link: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Facebook,
    Instagram,
    Email,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Facebook => "facebook",
            IconKind::Instagram => "instagram",
            IconKind::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinkEntry {
    pub id: u32,
    pub name: &'static str,
    pub url: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub subtitle: &'static str,
    pub image_path: &'static str,
    pub intro: &'static [&'static str],
    pub about: &'static [&'static str],
    pub quick_info: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Clariz Joy Lolong",
    short_name: "Clariz Joy",
    subtitle: "Aspiring Developer & Lifelong Learner",
    image_path: "/image/profilepicture.jpg",
    intro: &[
        "Ever since I was young, I have dreamed of becoming a civil engineer. However, fate led me to a different course one I never imagined taking. At first, I didn't like it, and I struggled because it wasn't something I truly wanted. But despite that, I chose to keep trying.",
        "They say, \"Learn to love what you do, even if it's not what you dreamed of,\" because sometimes comfort and purpose come when you least expect them. I believe that if something is not meant for you, then it's not for you but if it is, no matter what happens, it will always find its way to you.",
    ],
    about: &[
        "I'm Clariz Joy Lolong, a student who enjoys reading stories on Wattpad and playing online games in my free time. I may not be very skilled with computers yet, but I have some basic knowledge of HTML and I'm always eager to learn more.",
        "I believe that with patience and dedication, I can continue to grow and improve my skills day by day. Every challenge is an opportunity to learn something new, and I'm excited about the journey ahead.",
    ],
    quick_info: "Student · Aspiring Developer · Curious Learner",
};

pub const SKILLS: &[&str] = &["HTML", "CSS", "Learning JavaScript", "Problem Solving"];

pub const HOBBIES: &[&str] = &[
    "Reading stories on Wattpad",
    "Playing online games",
    "Learning new technologies",
    "Exploring web development",
    "Connecting with friends online",
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "Flappy Fish Game",
        description: "A fun web-based game inspired by Flappy Bird, made with HTML, CSS, and JavaScript. Navigate your fish through obstacles and see how far you can go!",
        image_path: "/image/flappy fish.png",
        link: "https://yumhae.github.io/flappy-fish/",
        tags: &["HTML", "CSS", "JavaScript", "Game"],
    },
    ProjectEntry {
        id: 2,
        title: "Period Tracker App",
        description: "A simple web app that helps track menstrual cycles with a built-in calendar feature. Stay organized and plan ahead with ease.",
        image_path: "/image/periodtracker.png",
        link: "https://yumhae.github.io/period-tracker/",
        tags: &["HTML", "CSS", "JavaScript", "Calendar"],
    },
];

pub const SOCIAL_LINKS: &[SocialLinkEntry] = &[
    SocialLinkEntry {
        id: 1,
        name: "Facebook",
        url: "https://www.facebook.com/clarizjoy.lolong",
        icon: IconKind::Facebook,
    },
    SocialLinkEntry {
        id: 2,
        name: "Instagram",
        url: "https://www.instagram.com/clarixx_joy/",
        icon: IconKind::Instagram,
    },
    SocialLinkEntry {
        id: 3,
        name: "Email",
        url: "mailto:clarizjoylolong@gmail.com",
        icon: IconKind::Email,
    },
];

pub fn project_by_id(id: u32) -> Option<&'static ProjectEntry> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn social_by_id(id: u32) -> Option<&'static SocialLinkEntry> {
    SOCIAL_LINKS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::CONTACT_ADDRESS;

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(PROJECTS.len(), 2);
    }

    #[test]
    fn test_social_ids_unique_and_ordered() {
        let ids = SOCIAL_LINKS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), SOCIAL_LINKS.len());
        let names = SOCIAL_LINKS.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Facebook", "Instagram", "Email"]);
    }

    #[test]
    fn test_projects_link_out() {
        for p in PROJECTS {
            assert!(p.link.starts_with("https://"), "{} should link out", p.title);
            assert!(p.image_path.starts_with('/'));
            assert!(!p.tags.is_empty());
        }
    }

    #[test]
    fn test_email_link_matches_contact_address() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|s| s.icon == IconKind::Email)
            .expect("there should be an email link");
        assert_eq!(email.url, format!("mailto:{CONTACT_ADDRESS}"));
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(
            project_by_id(2).map(|p| p.title),
            Some("Period Tracker App")
        );
        assert!(project_by_id(99).is_none());
        assert_eq!(social_by_id(2).map(|s| s.icon), Some(IconKind::Instagram));
        assert!(social_by_id(0).is_none());
    }
}
