use leptos::{either::Either, prelude::*};
use leptos_router::components::A;

use crate::site::{CardMedia, CardSpec};

#[component]
fn CardBody(spec: CardSpec) -> impl IntoView {
    let media = match spec.media {
        CardMedia::Image(src) => Some(Either::Left(view! {
            <div class="image-wrapper">
                <img src=src alt=spec.title title=spec.title loading="lazy" />
            </div>
        })),
        CardMedia::Video(src) => Some(Either::Right(view! {
            <div class="video-wrapper">
                <video src=src autoplay loop muted playsinline></video>
            </div>
        })),
        CardMedia::None => None,
    };

    view! {
        {media}
        <div class="card-title-wrapper">
            <span class="card-title">{spec.title}</span>
            {spec.subtitle.map(|subtitle| view! { <span class="card-subtitle">{subtitle}</span> })}
            {spec.coming_soon.then(|| view! { <span class="coming-soon">"COMING SOON"</span> })}
        </div>
        {spec.hover_label.map(|label| view! { <span class="card-hover-label">{label}</span> })}
    }
}

#[component]
pub fn CaseStudyCard(spec: CardSpec) -> impl IntoView {
    let class = spec.class_list();
    match spec.href {
        Some(href) => Either::Left(view! {
            <A href=href attr:class=class>
                <CardBody spec />
            </A>
        }),
        None => Either::Right(view! {
            <div class=class>
                <CardBody spec />
            </div>
        }),
    }
}
