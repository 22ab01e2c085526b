use leptos::{ev, either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

#[cfg(feature = "ssr")]
use crate::case_study::{get_case_study, CaseStudyError};
use crate::case_study::{
    scroll_percentage, should_show_floating_nav, CaseStudy, GLOBAL_CASE_STUDY_CACHE,
};

#[server(input = GetUrl)]
pub async fn get_case_study_server(slug: String) -> Result<CaseStudy, ServerFnError> {
    get_case_study(slug).await.map_err(|err| {
        if matches!(err, CaseStudyError::NotFound(_)) {
            if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                response.set_status(http::StatusCode::NOT_FOUND);
            }
        }
        tracing::info!("case study request failed: {err}");
        ServerFnError::new(err)
    })
}

/// Current scroll offset, full document height and viewport height.
fn page_scroll() -> Option<(f64, f64, f64)> {
    let window = window();
    let scroll_top = window.scroll_y().ok()?;
    let document_height = document().document_element()?.scroll_height();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_top, document_height.into(), viewport_height))
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not found" />
        <div class="not-found">
            <p>"Page not found."</p>
            <A href="/" attr:class="case-home-link">
                "Home"
            </A>
        </div>
    }
}

#[component]
fn CaseStudyBody(study: CaseStudy) -> impl IntoView {
    let meta = study.meta;
    view! {
        <Title text=meta.title.clone() />
        <section class="case-hero">
            {meta
                .logo
                .map(|logo| {
                    view! {
                        <div class="case-logo-wrapper">
                            <div class="case-logo">
                                <img
                                    src=logo
                                    alt=format!("{} Logo", meta.title)
                                    width="200"
                                    height="200"
                                />
                            </div>
                        </div>
                    }
                })}
            <h1 class="case-title">{meta.title.clone()}</h1>
            <p class="case-role">{format!("Role: {}", meta.role)}</p>
            <p class="case-timeline">{format!("Timeline: {}", meta.timeline)}</p>
        </section>
        <article class="case-body" inner_html=study.content></article>
    }
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let study = Resource::new(slug, |slug| async move {
        if let Some(study) = GLOBAL_CASE_STUDY_CACHE.get(&slug) {
            return Ok(study.clone());
        }
        let study = get_case_study_server(slug.clone()).await;
        // only cache on the browser, the server caches on its own
        #[cfg(feature = "hydrate")]
        if let Ok(study) = &study {
            GLOBAL_CASE_STUDY_CACHE.insert(slug, study.clone());
        }
        study
    });

    let show_nav = RwSignal::new(false);
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let Some((top, document_height, viewport_height)) = page_scroll() else {
                return;
            };
            let show = should_show_floating_nav(scroll_percentage(top, document_height, viewport_height));
            if show != show_nav.get_untracked() {
                show_nav.set(show);
            }
        },
        UseEventListenerOptions::default().passive::<bool>(Some(true)),
    );

    view! {
        <main class="case-container">
            <div class="case-content">
                <div class="case-header">
                    <A href="/" attr:class="case-home-link">
                        "Home"
                    </A>
                </div>
                <Suspense fallback=|| {
                    view! { <div class="loading-skeleton case-skeleton"></div> }
                }>
                    {move || Suspend::new(async move {
                        match study.await {
                            Ok(study) => Either::Left(view! { <CaseStudyBody study /> }),
                            Err(_) => Either::Right(view! { <NotFound /> }),
                        }
                    })}
                </Suspense>
            </div>
            <Show when=move || show_nav.get()>
                <A href="/" attr:class="back-to-home" attr:aria-label="Back to home">
                    <svg
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    >
                        <path d="M19 12H5M12 19l-7-7 7-7" />
                    </svg>
                </A>
                <button
                    type="button"
                    class="back-to-top"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_top()
                >
                    <svg
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    >
                        <path d="M12 19V5M5 12l7-7 7 7" />
                    </svg>
                </button>
            </Show>
        </main>
    }
}
