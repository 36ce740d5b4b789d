use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    catalog::{ProjectEntry, PROJECTS},
    motion::{Entrance, CARD_STAGGER},
    nav::Section,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="projects-section px-4 py-20">
            <Reveal entrance=Entrance::fade_up()>
                <h2 class="text-3xl font-bold text-center mb-10">"Featured Projects"</h2>
            </Reveal>
            <div class="projects-grid grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> impl IntoView {
    let entrance = Entrance::fade_up().rise(50.0).in_view().staggered(index, CARD_STAGGER);
    view! {
        <Reveal
            entrance
            class="project-card rounded-xl overflow-hidden bg-white shadow-md hover:-translate-y-2 hover:shadow-xl transition"
        >
            <div class="project-image aspect-video overflow-hidden">
                <img
                    src=project.image_path
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
            </div>
            <div class="project-content p-6 space-y-3">
                <h3 class="text-xl font-bold">{project.title}</h3>
                <p class="text-gray-600">{project.description}</p>
                <div class="project-badges flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="project-tag rounded-md px-2 py-1 bg-gray-100 text-sm">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="project-link project-cta inline-block font-medium text-purple-600"
                >
                    "View Project →"
                </a>
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render() -> String {
        Owner::new().with(|| view! { <ProjectsSection /> }.to_html())
    }

    #[test]
    fn test_one_card_per_project() {
        let html = render();
        assert_eq!(html.matches("project-card ").count(), PROJECTS.len());
        for p in PROJECTS {
            assert!(html.contains(p.title));
            assert!(html.contains(p.link));
        }
    }

    #[test]
    fn test_links_open_new_context() {
        let html = render();
        assert_eq!(html.matches("target=\"_blank\"").count(), PROJECTS.len());
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            PROJECTS.len()
        );
    }

    #[test]
    fn test_render_is_stable() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_cards_start_hidden() {
        let html = render();
        assert!(html.contains("opacity: 0; transform: translate(0px, 50px)"));
    }
}
