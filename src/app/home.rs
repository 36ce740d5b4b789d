use leptos::prelude::*;

use super::{navbar::NavContext, reveal::Reveal};
use crate::{catalog::PROFILE, motion::Entrance, nav::Section};

#[component]
pub fn HomeSection() -> impl IntoView {
    let nav = expect_context::<NavContext>();

    view! {
        <section
            id=Section::Home.id()
            class="home-section flex flex-col items-center text-center gap-6 px-4 py-24 max-w-3xl mx-auto"
        >
            <Reveal
                entrance=Entrance::pop()
                class="profile-image w-40 h-40 rounded-full overflow-hidden shadow-lg hover:scale-105 transition-transform"
            >
                <img src=PROFILE.image_path alt=PROFILE.name class="w-full h-full object-cover" />
            </Reveal>
            <Reveal entrance=Entrance::fade_up().delay(0.2)>
                <h1 class="text-4xl font-bold">{PROFILE.name}</h1>
            </Reveal>
            <Reveal entrance=Entrance::fade_up().delay(0.4)>
                <p class="subtitle text-xl text-purple-600">{PROFILE.subtitle}</p>
            </Reveal>
            <Reveal entrance=Entrance::fade_up().delay(0.7) class="intro-text space-y-4 leading-relaxed">
                {PROFILE.intro.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </Reveal>
            <Reveal entrance=Entrance::fade_up().delay(0.9) class="flex gap-4">
                <a
                    href=format!("#{}", Section::Projects.id())
                    class="btn px-6 py-3 rounded-md bg-purple-600 text-white font-medium"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(Section::Projects);
                    }
                >
                    "View My Work"
                </a>
                <a
                    href=format!("#{}", Section::Contact.id())
                    class="btn btn-outline px-6 py-3 rounded-md border border-purple-600 text-purple-600 font-medium"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(Section::Contact);
                    }
                >
                    "Get In Touch"
                </a>
            </Reveal>
        </section>
    }
}
