/// Recipient of the contact form's mail hand-off. Set `PORTFOLIO_CONTACT_EMAIL` at build time.
pub const CONTACT_RECIPIENT: &str = env!("CONTACT_RECIPIENT");

/// Shown in the navigation bar, the document title and the footer.
pub const SITE_TITLE: &str = env!("SITE_TITLE");

/// Id of the host element the app is mounted into.
pub const MOUNT_ID: &str = "root";

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com",
        icon: "fab fa-linkedin-in",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: "fab fa-github",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: "fab fa-twitter",
    },
];
