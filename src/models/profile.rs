// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static profile content shown behind the login gate.

/// Person the résumé belongs to.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
    /// Folder with downloadable copies of the résumé.
    pub download_url: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: Option<ProjectLink>,
}

pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Gaurav Patil",
    title: "Frontend Developer | React Enthusiast",
    email: "gauravpatil@example.com",
    phone: "+91 98765 43210",
    location: "Pune, Maharashtra, India",
    summary: "A passionate web developer with experience in building responsive and \
              interactive web applications using React.js and modern front-end \
              technologies. I love creating clean UI and seamless user experiences.",
    skills: &[
        "React.js",
        "JavaScript (ES6+)",
        "HTML5",
        "CSS3",
        "Tailwind CSS",
        "Node.js (Basics)",
        "Git & GitHub",
    ],
    projects: &[
        Project {
            name: "IRCTC Online Ticket Booking",
            description: "Developed a responsive web app for train ticket booking with \
                          real-time seat availability and payment gateway integration.",
            link: None,
        },
        Project {
            name: "Crop Detection & Govt Schemes Portal",
            description: "AI-integrated portal helping farmers identify crops and access \
                          government schemes with daily agricultural news updates.",
            link: Some(ProjectLink {
                label: "View Project on Hugging Face",
                url: "https://huggingface.co/spaces/nurturingagriculture/agriculture-project-testing",
            }),
        },
    ],
    download_url: "https://drive.google.com/drive/folders/1c0nRXbC3gFEUZ8yCSS7EU3VdyFNFHEHS",
};
