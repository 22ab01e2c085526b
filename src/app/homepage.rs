use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use chrono::Utc;
use leptos_use::{use_interval_fn, use_timeout_fn, UseTimeoutFnReturn};

use super::{
    card::CaseStudyCard,
    contact::{ContraLink, EmailCopyButton},
    hero::Hero,
    intro::IntroOverlay,
    theme_toggle::ThemeToggle,
    timers::SequenceDriver,
};
use crate::{
    clock::{brooklyn_now, ms_until_next_minute, CLOCK_REFRESH_MS},
    sequence::intro::IntroSequence,
    site::{
        entrance_style, EntranceDelays, CASE_GRID, LOCATION_LABEL, NAV_ENTRANCE_DURATION_MS,
        NOTE_TEXT, OWNER_NAME,
    },
};

#[component]
fn BrooklynClock() -> impl IntoView {
    let time = RwSignal::new(brooklyn_now());
    // one extra refresh right as the minute turns, so the first change isn't
    // up to a whole interval late
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| time.set(brooklyn_now()),
        ms_until_next_minute(Utc::now()) as f64,
    );
    Effect::new(move |_| {
        time.set(brooklyn_now());
        start(());
    });
    let _ = use_interval_fn(move || time.set(brooklyn_now()), CLOCK_REFRESH_MS);
    view! { <span class="nav-right">{LOCATION_LABEL} " " {move || time.get()}</span> }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let intro = SequenceDriver::new(IntroSequence::new());
    let page_visible = move || intro.with(IntroSequence::page_visible);

    let delays = RwSignal::new(EntranceDelays::baseline());
    Effect::new(move |_| delays.set(EntranceDelays::jittered(&mut rand::thread_rng())));

    view! {
        <Title text="Home" />
        <main class="container">
            <IntroOverlay intro />

            <nav
                class="nav"
                class:nav-visible=page_visible
                class:nav-hidden=move || !page_visible()
                style=move || entrance_style(delays.get().nav, Some(NAV_ENTRANCE_DURATION_MS))
                aria-label="Site header"
            >
                <A href="/" attr:class="nav-left">
                    {OWNER_NAME}
                </A>
                <div class="nav-right-group">
                    <BrooklynClock />
                    <ThemeToggle />
                </div>
            </nav>

            <div
                class="page-layer"
                class:page-layer-visible=page_visible
                class:page-layer-hidden=move || !page_visible()
            >
                <div class="hero-wrapper">
                    <Hero entrance_delay=Signal::derive(move || delays.get().hero) />
                    <p
                        class="construction-note entrance-item"
                        style=move || entrance_style(delays.get().note, None)
                    >
                        {NOTE_TEXT}
                        " "
                        <ContraLink />
                        " and email "
                        <EmailCopyButton />
                    </p>
                </div>

                <section class="case-grid">
                    {CASE_GRID
                        .into_iter()
                        .enumerate()
                        .map(|(index, spec)| {
                            view! {
                                <div
                                    class="entrance-item"
                                    style=move || entrance_style(delays.get().cards[index], None)
                                >
                                    <CaseStudyCard spec />
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <div class="footer" aria-label="Footer">
                    <div class="footer-contact">
                        <span class="footer-icon" aria-hidden="true">
                            "📧"
                        </span>
                        <EmailCopyButton footer=true />
                    </div>
                </div>
            </div>
        </main>
    }
}
