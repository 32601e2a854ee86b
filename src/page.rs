use std::fmt;

/// The section currently shown by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Projects, Page::About, Page::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Returns the page to switch to, or `None` if `next` is already showing.
    pub fn transition(self, next: Page) -> Option<Page> {
        if self == next {
            None
        } else {
            Some(next)
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
