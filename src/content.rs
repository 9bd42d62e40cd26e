//! Static portfolio catalog.
//!
//! Everything here is compiled in; asset paths are relative to the asset
//! directory given on the command line.

use crate::models::{Contact, GalleryItem, Profile, Project};

pub const PROFILE: Profile = Profile {
    name: "Vaishnavi Bhalla",
    initials: "VB",
    degree: "BS in Computational Media",
    tagline: "designer & developer ✧˖° // currently @ Georgia Institute of Technology",
};

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Graphic Medicine VIP",
        description: "Collaborated with the website team to develop and launch the Graphic Medicine \
            website as part of Georgia Tech's VIP program. Integrated Figma mockups into a \
            WordPress platform, ensuring seamless functionality and visual appeal.",
        tech: &["Figma", "WordPress"],
        image: "images/GraphicMed.png",
        link: "https://sites.gatech.edu/graphicmedicinelab/",
    },
    Project {
        title: "Spotify Wrapped",
        description: "Led frontend development for Spotify Wrapped, implementing animated designs \
            and maintaining cohesive styles. Created engaging user experiences through Figma \
            prototypes and dynamic content delivery using the Spotify API.",
        tech: &["Python", "Django", "CSS/HTML"],
        image: "images/spotify.png",
        link: "https://kenzieelle4.wixsite.com/atl-eats-demo/detailed-description",
    },
    Project {
        title: "ATL Eats",
        description: "Developed a full-stack web application for exploring Atlanta restaurants, \
            featuring Google Maps integration. Created responsive front-end components and \
            implemented robust search functionality.",
        tech: &["Python", "Django", "HTML/CSS"],
        image: "images/Atleats.png",
        link: "https://kenzieelle4.wixsite.com/atl-eats-demo/copy-of-detailed-description",
    },
];

pub static GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        src: "images/mont.png",
        alt: "Mountain Studio Ghibli",
        title: "Mountain View",
        description: "Studio Ghibli mountain landscape.",
    },
    GalleryItem {
        src: "images/plant.png",
        alt: ":)",
        title: "Green Plant",
        description: "A close-up of a vibrant plant.",
    },
    GalleryItem {
        src: "images/wormart.png",
        alt: "Dune Inspired",
        title: "Abstract Worm",
        description: "Dune inspired eclipse.",
    },
    GalleryItem {
        src: "images/final.png",
        alt: "Final Project",
        title: "Final Project",
        description: "Took a year to finish this Studio Ghibli painting.",
    },
];

pub static CONTACTS: [Contact; 3] = [
    Contact {
        label: "GitHub",
        link: "https://github.com/Navibhalla101",
    },
    Contact {
        label: "LinkedIn",
        link: "https://www.linkedin.com/in/vaishnavibhalla/",
    },
    Contact {
        label: "Email",
        link: "mailto:navibhalla113@gmail.com",
    },
];

pub static SKILLS: [&str; 6] = ["React", "JavaScript", "Python", "UI/UX", "Node.js", "Figma"];

pub const ABOUT: &str = "I am currently an undergraduate student at the Georgia Institute of \
    Technology. I'm pursuing a B.S. in Computational Media with a concentration in Intelligence \
    and Interaction Design under both the College of Computing and the Ivan Allen College of \
    Liberal Arts. My unique position at the intersection of the College of Computing and Ivan \
    Allen College of Liberal Arts allows me to approach problems with both analytical precision \
    and creative insight. I combine strong programming fundamentals with design thinking \
    methodology to create meaningful technological solutions. Whether I'm prototyping new \
    interfaces, conducting user research, or developing interactive applications, I focus on \
    crafting experiences that are both technically robust and aesthetically engaging.";

/// Resume PDF, relative to the asset directory
pub const RESUME: &str = "images/VB_Resume.pdf";

/// Every image the catalog refers to, projects first
pub fn image_refs() -> impl Iterator<Item = &'static str> {
    PROJECTS
        .iter()
        .map(|project| project.image)
        .chain(GALLERY.iter().map(|item| item.src))
}
