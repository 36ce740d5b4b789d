use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    catalog::{HOBBIES, PROFILE, SKILLS},
    motion::Entrance,
    nav::Section,
};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about-section px-4 py-20 bg-purple-50">
            <Reveal entrance=Entrance::fade_up()>
                <h2 class="text-3xl font-bold text-center mb-10">"About Me"</h2>
            </Reveal>
            <div class="about-content grid md:grid-cols-2 gap-10 max-w-5xl mx-auto">
                <Reveal entrance=Entrance::from_left().delay(0.2) class="about-text space-y-4">
                    {PROFILE.about.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    <div class="skills flex flex-wrap gap-2">
                        {SKILLS
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="skill-tag rounded-full px-3 py-1 bg-purple-100 text-purple-700 text-sm">
                                        {*s}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal
                    entrance=Entrance::from_right().delay(0.4)
                    class="about-card rounded-lg bg-white shadow p-6 text-center"
                >
                    <div class="avatar w-24 h-24 mx-auto rounded-full overflow-hidden mb-4">
                        <img
                            src=PROFILE.image_path
                            alt=format!("{} avatar", PROFILE.short_name)
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <h4 class="font-bold">"Quick Info"</h4>
                    <p class="text-sm text-gray-600 mb-4">{PROFILE.quick_info}</p>
                    <div class="hobbies text-left">
                        <h3 class="font-bold mb-2">"Things I Love"</h3>
                        <ul class="list-disc list-inside space-y-1">
                            {HOBBIES.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                        </ul>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
