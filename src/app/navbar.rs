use leptos::{html, prelude::*};

use crate::{
    catalog::PROFILE,
    nav::{DocumentScroller, MenuState, Section, SectionScroller},
};

/// Menu state shared by the navbar and in-page links.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    menu: RwSignal<MenuState>,
}

impl NavContext {
    pub fn provide() -> Self {
        let ctx = Self {
            menu: RwSignal::new(MenuState::default()),
        };
        provide_context(ctx);
        ctx
    }

    pub fn is_open(&self) -> bool {
        self.menu.get().is_open
    }

    pub fn toggle(&self) {
        self.menu.update(MenuState::toggle);
    }

    pub fn navigate(&self, section: Section) {
        self.navigate_with(&DocumentScroller, section);
    }

    pub fn navigate_with<S>(&self, scroller: &S, section: Section)
    where
        S: SectionScroller + ?Sized,
    {
        let mut menu = self.menu.get_untracked();
        if let Err(e) = menu.navigate_to_section(scroller, section.id()) {
            log::debug!("[nav] {e}");
        }
        self.menu.set(menu);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let container_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    listeners::attach(nav.menu, container_ref);

    view! {
        <header class="sticky top-0 z-40 bg-white/90 backdrop-blur shadow-sm">
            <nav>
                <div
                    node_ref=container_ref
                    class="nav-container relative flex items-center justify-between max-w-6xl mx-auto px-4 py-3"
                >
                    <div class="nav-logo flex items-center gap-1 text-xl font-bold">
                        <span>{PROFILE.short_name}</span>
                        <div class="nav-logo-dot w-2 h-2 rounded-full bg-purple-600"></div>
                    </div>

                    <button
                        type="button"
                        class="nav-hamburger flex flex-col gap-1 p-2 md:hidden"
                        class:active=move || nav.is_open()
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || nav.is_open().to_string()
                        on:click=move |_| nav.toggle()
                    >
                        <span class="block w-6 h-0.5 bg-gray-800"></span>
                        <span class="block w-6 h-0.5 bg-gray-800"></span>
                        <span class="block w-6 h-0.5 bg-gray-800"></span>
                    </button>

                    <ul
                        class="nav-menu absolute md:static top-full inset-x-0 flex-col md:flex md:flex-row gap-4 bg-white md:bg-transparent p-4 md:p-0"
                        class:hidden=move || !nav.is_open()
                        class:flex=move || nav.is_open()
                        class:active=move || nav.is_open()
                    >
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{}", section.id())
                                            class="nav-link font-medium hover:text-purple-600 transition-colors"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                nav.navigate(section);
                                            }
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        </header>
    }
}

/// Document-level listeners for closing the menu. `use_event_listener`
/// removes them again when the navbar's owner is cleaned up.
#[cfg(feature = "hydrate")]
mod listeners {
    use leptos::{
        ev::{self, KeyboardEvent, PointerEvent},
        html,
        prelude::*,
    };
    use leptos_use::{use_document, use_event_listener};
    use wasm_bindgen::JsCast;

    use crate::{config, nav::MenuState};

    pub fn attach(menu: RwSignal<MenuState>, container_ref: NodeRef<html::Div>) {
        let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
            let mut state = menu.get_untracked();
            if state.handle_key(&ev.key()) {
                menu.set(state);
            }
        });

        let _ = use_event_listener(use_document(), ev::pointerdown, move |ev: PointerEvent| {
            let mut state = menu.get_untracked();
            if !state.is_open {
                return;
            }
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let target = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if config::nav_debug() {
                log::debug!("[nav] pointer target: {:?}", target);
            }
            let inside = target.is_some_and(|node| container.contains(Some(&node)));
            if state.handle_pointer_down(inside) {
                menu.set(state);
            }
        });
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::cell::RefCell;

    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::nav::NavError;

    struct RecordingScroller {
        missing: &'static str,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingScroller {
        fn new(missing: &'static str) -> Self {
            Self {
                missing,
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for RecordingScroller {
        fn scroll_to(&self, id: &str) -> Result<(), NavError> {
            if id == self.missing {
                return Err(NavError::SectionNotFound(id.to_string()));
            }
            self.scrolled.borrow_mut().push(id.to_string());
            Ok(())
        }
    }

    fn render(open: bool) -> String {
        Owner::new().with(|| {
            let nav = NavContext::provide();
            if open {
                nav.toggle();
            }
            view! { <Navbar /> }.to_html()
        })
    }

    // Class tokens of the first element whose class list starts with `first`.
    fn class_tokens(html: &str, first: &str) -> Vec<String> {
        let start = html
            .find(&format!("class=\"{first}"))
            .expect("element should be rendered")
            + "class=\"".len();
        let end = start + html[start..].find('"').expect("class attribute should close");
        html[start..end]
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_closed_menu_markup() {
        let html = render(false);
        assert!(html.contains("aria-expanded=\"false\""));
        let menu = class_tokens(&html, "nav-menu");
        assert!(menu.contains(&"hidden".to_string()));
        assert!(!menu.contains(&"active".to_string()));
        assert!(!class_tokens(&html, "nav-hamburger").contains(&"active".to_string()));
    }

    #[test]
    fn test_open_menu_markup() {
        let html = render(true);
        assert!(html.contains("aria-expanded=\"true\""));
        let menu = class_tokens(&html, "nav-menu");
        assert!(menu.contains(&"active".to_string()));
        assert!(!menu.contains(&"hidden".to_string()));
        assert!(class_tokens(&html, "nav-hamburger").contains(&"active".to_string()));
    }

    #[test]
    fn test_section_links_in_menu_order() {
        let html = render(false);
        let container = html.find("nav-container").expect("container should render");
        let positions = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!("href=\"#{}\"", s.id()))
                    .expect("every section should have a link")
            })
            .collect::<Vec<_>>();
        assert!(positions.iter().all(|p| *p > container));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_navigate_closes_menu() {
        Owner::new().with(|| {
            let nav = NavContext::provide();
            let scroller = RecordingScroller::new("");
            nav.toggle();
            assert!(nav.menu.get_untracked().is_open);
            nav.navigate_with(&scroller, Section::About);
            assert!(!nav.menu.get_untracked().is_open);
            assert_eq!(*scroller.scrolled.borrow(), vec!["about".to_string()]);
        });
    }

    #[test]
    fn test_navigate_to_missing_section_closes_menu() {
        Owner::new().with(|| {
            let nav = NavContext::provide();
            let scroller = RecordingScroller::new("contact");
            nav.toggle();
            nav.navigate_with(&scroller, Section::Contact);
            assert!(!nav.menu.get_untracked().is_open);
            assert!(scroller.scrolled.borrow().is_empty());
        });
    }

    #[test]
    fn test_toggle_flips_shared_state() {
        Owner::new().with(|| {
            let nav = NavContext::provide();
            nav.toggle();
            assert!(expect_context::<NavContext>().menu.get_untracked().is_open);
            nav.toggle();
            assert!(!nav.menu.get_untracked().is_open);
        });
    }
}
