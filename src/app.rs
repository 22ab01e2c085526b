mod card;
mod case_study;
mod contact;
mod hero;
mod homepage;
mod intro;
mod theme_toggle;
mod timers;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use case_study::{CaseStudyPage, NotFound};
use homepage::HomePage;

use crate::{
    site::{SITE_DESCRIPTION, SITE_TITLE},
    theme::THEME_INIT_SCRIPT,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=SITE_DESCRIPTION />
                <meta name="color-scheme" content="light dark" />
                // applies the saved theme before first paint
                <script inner_html=THEME_INIT_SCRIPT></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{SITE_TITLE} - {title}") />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/:slug") view=CaseStudyPage />
            </Routes>
        </Router>
    }
}
