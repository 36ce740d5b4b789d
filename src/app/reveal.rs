use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use crate::motion::Trigger;
use crate::motion::Entrance;

/// Wraps `children` in a div that plays `entrance` once.
#[component]
pub fn Reveal(
    entrance: Entrance,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    reveal_on_trigger(el, revealed, entrance);

    view! {
        <div node_ref=el class=class style=move || entrance.style(revealed.get())>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn reveal_on_trigger(el: NodeRef<html::Div>, revealed: RwSignal<bool>, entrance: Entrance) {
    use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

    use crate::motion::IN_VIEW_THRESHOLD;

    match entrance.trigger {
        Trigger::Mount => {
            Effect::new(move |_| request_animation_frame(move || revealed.set(true)));
        }
        Trigger::InView => {
            let _ = use_intersection_observer_with_options(
                el,
                move |entries, _| {
                    if revealed.get_untracked() {
                        return;
                    }
                    if entries
                        .iter()
                        .any(|entry| entrance.reveals_at(entry.intersection_ratio()))
                    {
                        revealed.set(true);
                    }
                },
                UseIntersectionObserverOptions::<web_sys::Element, web_sys::Element>::default()
                    .thresholds(vec![IN_VIEW_THRESHOLD]),
            );
        }
    }
}
