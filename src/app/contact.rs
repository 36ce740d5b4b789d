use leptos::{either::EitherOf3, ev::SubmitEvent, prelude::*};

use super::reveal::Reveal;
use crate::{
    catalog::{IconKind, SocialLinkEntry, SOCIAL_LINKS},
    config::CONTACT_ADDRESS,
    contact::{hand_off, ContactDraft},
    motion::{Entrance, LINK_STAGGER},
    nav::Section,
};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="contact-section px-4 py-20 bg-purple-50">
            <Reveal entrance=Entrance::fade_up()>
                <h2 class="text-3xl font-bold text-center mb-4">"Let's Connect!"</h2>
            </Reveal>
            <Reveal entrance=Entrance::fade_up().delay(0.2)>
                <p class="contact-subtitle text-center text-gray-600 max-w-2xl mx-auto mb-10">
                    "I'd love to hear from you! Feel free to reach out through any of my social media platforms or send me an email."
                </p>
            </Reveal>
            <div class="contact-inner grid md:grid-cols-2 gap-10 max-w-5xl mx-auto">
                <div class="contact-left">
                    <Reveal entrance=Entrance::fade_up().delay(0.4) class="social-links flex flex-col gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, link)| view! { <SocialLink link=*link index /> })
                            .collect_view()}
                    </Reveal>
                </div>
                <div class="contact-right">
                    <Reveal entrance=Entrance::fade_up().delay(0.6)>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialLink(link: SocialLinkEntry, index: usize) -> impl IntoView {
    let entrance = Entrance::fade_up().in_view().staggered(index, LINK_STAGGER);
    view! {
        <Reveal entrance>
            <a
                href=link.url
                target="_blank"
                rel="noopener noreferrer"
                class="social-link flex items-center gap-3 rounded-lg bg-white px-5 py-3 shadow hover:bg-purple-600 hover:text-white hover:scale-105 active:scale-95 transition"
            >
                <span class=format!("social-icon icon-{}", link.icon.as_str())>
                    <SocialIcon kind=link.icon />
                </span>
                <span class="social-text">{link.name}</span>
            </a>
        </Reveal>
    }
}

#[component]
fn SocialIcon(kind: IconKind) -> impl IntoView {
    match kind {
        IconKind::Facebook => EitherOf3::A(view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                <path d="M22 12.07C22 6.48 17.52 2 11.93 2S2 6.48 2 12.07c0 4.99 3.66 9.13 8.44 9.93v-7.03H8.08v-2.9h2.36V9.41c0-2.33 1.39-3.62 3.52-3.62 1.02 0 2.09.18 2.09.18v2.3h-1.17c-1.15 0-1.5.71-1.5 1.44v1.73h2.56l-.41 2.9h-2.15v7.03C18.34 21.2 22 17.06 22 12.07z" />
            </svg>
        }),
        IconKind::Instagram => EitherOf3::B(view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                <path d="M12 8.5a3.5 3.5 0 1 1 0 7 3.5 3.5 0 0 1 0-7z" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                <path d="M17.5 6.5h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        }),
        IconKind::Email => EitherOf3::C(view! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M3 8.5v7a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
                <path d="M21 8.5l-9 6-9-6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        }),
    }
}

/// Required-field and email-format checks are left to the browser.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = hand_off(&draft.get_untracked(), CONTACT_ADDRESS) {
            log::warn!("{e}");
        }
    };

    view! {
        <form class="contact-form flex flex-col gap-4" on:submit=on_submit>
            <input
                class="contact-input rounded-md border border-gray-300 px-4 py-2"
                placeholder="Your name"
                required
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                class="contact-input rounded-md border border-gray-300 px-4 py-2"
                placeholder="Your email"
                type="email"
                required
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <textarea
                class="contact-textarea rounded-md border border-gray-300 px-4 py-2"
                placeholder="Message"
                rows="4"
                required
                prop:value=move || draft.with(|d| d.message.clone())
                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
            ></textarea>
            <button
                class="contact-button rounded-md bg-purple-600 text-white font-medium px-6 py-3"
                type="submit"
            >
                "Send message"
            </button>
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render() -> String {
        Owner::new().with(|| view! { <ContactSection /> }.to_html())
    }

    #[test]
    fn test_social_links_in_order() {
        let html = render();
        let positions = SOCIAL_LINKS
            .iter()
            .map(|l| {
                html.find(&format!("href=\"{}\"", l.url))
                    .expect("every social link should be rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_social_links_open_new_context() {
        let html = render();
        assert_eq!(html.matches("target=\"_blank\"").count(), SOCIAL_LINKS.len());
        for kind in [IconKind::Facebook, IconKind::Instagram, IconKind::Email] {
            assert!(html.contains(&format!("icon-{}", kind.as_str())));
        }
    }

    #[test]
    fn test_form_fields_required() {
        let html = render();
        assert_eq!(html.matches("required").count(), 3);
        assert!(html.contains("type=\"email\""));
    }
}
