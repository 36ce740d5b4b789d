use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Menu order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section on the page.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no section with id '{0}'")]
    SectionNotFound(String),
}

/// Scrolls the page to an element by id.
pub trait SectionScroller {
    fn scroll_to(&self, id: &str) -> Result<(), NavError>;
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Returns true if the key closed the menu.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open {
            self.close();
            return true;
        }
        false
    }

    /// Returns true if the pointer-down closed the menu.
    pub fn handle_pointer_down(&mut self, inside_nav: bool) -> bool {
        if self.is_open && !inside_nav {
            self.close();
            return true;
        }
        false
    }

    /// Scrolls to `id` if it exists. The menu is closed either way.
    pub fn navigate_to_section<S>(&mut self, scroller: &S, id: &str) -> Result<(), NavError>
    where
        S: SectionScroller + ?Sized,
    {
        let res = scroller.scroll_to(id);
        self.close();
        res
    }
}

pub use dom::DocumentScroller;

mod dom {
    use leptos::prelude::document;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    use super::{NavError, SectionScroller};

    /// Smooth-scrolls the live document. Only usable in the browser.
    pub struct DocumentScroller;

    impl SectionScroller for DocumentScroller {
        fn scroll_to(&self, id: &str) -> Result<(), NavError> {
            let el = document()
                .get_element_by_id(id)
                .ok_or_else(|| NavError::SectionNotFound(id.to_string()))?;
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            Ok(())
        }
    }
}
