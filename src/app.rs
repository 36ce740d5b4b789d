mod about;
mod contact;
mod footer;
mod home;
mod navbar;
mod progress_bar;
mod projects;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::catalog::PROFILE;
use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use home::HomeSection;
use navbar::{NavContext, Navbar};
use progress_bar::ScrollProgress;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-gray-800 scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    NavContext::provide();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta
            name="description"
            content=format!("{} - {}", PROFILE.name, PROFILE.subtitle)
        />

        <Router>
            <ScrollProgress />
            <Navbar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// All four sections, stacked in menu order.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HomeSection />
        <AboutSection />
        <ProjectsSection />
        <ContactSection />
    }
}
