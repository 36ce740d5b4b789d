use leptos::prelude::*;

use crate::{catalog::PROFILE, config::build_year};

#[component]
pub fn Footer() -> impl IntoView {
    let notice = match build_year() {
        Some(year) => format!("© {year} {}", PROFILE.name),
        None => format!("© {}", PROFILE.name),
    };
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            <p>{notice}</p>
        </footer>
    }
}
