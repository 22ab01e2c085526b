use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use super::timers::SequenceDriver;
use crate::{sequence::intro::IntroSequence, site::HEADLINE_TEXT};

/// Full-screen headline shown on load. Blurs out after a short hold, or
/// immediately on the first wheel or touch.
#[component]
pub fn IntroOverlay(intro: SequenceDriver<IntroSequence>) -> impl IntoView {
    Effect::new(move |_| {
        intro.dispatch(|sequence, timeline| sequence.start(timeline));
    });

    let skip = move || {
        intro.dispatch(|sequence, timeline| {
            if sequence.skip(timeline) {
                log::debug!("intro skipped");
            }
        })
    };
    let options = UseEventListenerOptions::default()
        .once(true)
        .passive::<bool>(Some(true));
    let _ = use_event_listener_with_options(use_window(), ev::wheel, move |_| skip(), options.clone());
    let _ = use_event_listener_with_options(use_window(), ev::touchstart, move |_| skip(), options);

    view! {
        <Show when=move || intro.with(IntroSequence::overlay_visible)>
            <div
                class="intro-overlay"
                class:intro-overlay-blur=move || intro.with(IntroSequence::overlay_blurring)
                aria-hidden="true"
            >
                <h1 class="intro-headline">
                    {HEADLINE_TEXT
                        .split(' ')
                        .enumerate()
                        .map(|(index, word)| {
                            view! {
                                <span
                                    class="intro-word"
                                    style=format!(
                                        "animation-delay: {}ms",
                                        IntroSequence::word_delay_ms(index),
                                    )
                                >
                                    {word}
                                </span>
                            }
                        })
                        .collect_view()}
                </h1>
            </div>
        </Show>
    }
}
