use leptos::prelude::*;

/// Thin bar across the top of the viewport, filled by how far the page is scrolled.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scale = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    follow_scroll(scale);

    view! {
        <div
            class="progress-bar fixed top-0 inset-x-0 h-1 z-50 bg-purple-600 origin-left"
            style=move || format!("transform: scaleX({:.4});", scale.get())
        ></div>
    }
}

/// Steps the spring once per animation frame while it is moving. The loop
/// pauses once the bar has settled and resumes on the next scroll.
#[cfg(feature = "hydrate")]
fn follow_scroll(scale: RwSignal<f64>) {
    use std::{cell::RefCell, rc::Rc};

    use leptos_use::{use_raf_fn, use_window_scroll, utils::Pausable, UseRafFnCallbackArgs};

    use crate::progress::{scroll_ratio, Spring, SpringState};

    let (_, scroll_y) = use_window_scroll();
    let spring = Spring::default();
    let state = StoredValue::new(SpringState::default());
    let pause_slot: Rc<RefCell<Option<Rc<dyn Fn()>>>> = Rc::new(RefCell::new(None));

    let Pausable { pause, resume, .. } = use_raf_fn({
        let pause_slot = Rc::clone(&pause_slot);
        move |args: UseRafFnCallbackArgs| {
            let scroll_height = document()
                .document_element()
                .map(|el| el.scroll_height() as f64)
                .unwrap_or_default();
            let viewport_height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let target = scroll_ratio(scroll_y.get_untracked(), scroll_height, viewport_height);

            let mut s = state.get_value();
            spring.step(&mut s, target, args.delta / 1000.0);
            state.set_value(s);

            if s.position != scale.get_untracked() {
                scale.set(s.position);
            }
            if s.is_resting(target, &spring) {
                let pause = pause_slot.borrow().clone();
                if let Some(pause) = pause {
                    pause();
                }
            }
        }
    });
    *pause_slot.borrow_mut() = Some(Rc::new(pause));

    Effect::new(move |_| {
        scroll_y.track();
        resume();
    });
}
