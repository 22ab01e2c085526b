use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{
    use_clipboard_with_options, use_timeout_fn, UseClipboardOptions, UseClipboardReturn,
    UseTimeoutFnReturn,
};

use crate::{
    contact::{CopyFeedback, COPIED_RESET_MS, PREVIEW_HIDE_DELAY_MS},
    site::{EMAIL, PORTFOLIO_URL},
};

/// Visibility of a hover preview whose hiding lags the pointer by a moment,
/// so it can be reached before it disappears.
#[derive(Clone, Copy)]
struct DelayedPreview {
    visible: RwSignal<bool>,
}

impl DelayedPreview {
    fn new(on_hide: impl Fn() + Clone + Send + Sync + 'static) -> (Self, impl Fn() + Clone, impl Fn() + Clone) {
        let visible = RwSignal::new(false);
        let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
            move |_: ()| {
                visible.set(false);
                on_hide();
            },
            PREVIEW_HIDE_DELAY_MS,
        );
        let show = {
            let stop = stop.clone();
            move || {
                stop();
                visible.set(true);
            }
        };
        let hide = move || {
            stop();
            start(());
        };
        (Self { visible }, show, hide)
    }
}

#[component]
pub fn ContraLink() -> impl IntoView {
    let (preview, show, hide) = DelayedPreview::new(|| ());
    let (show_focus, hide_blur) = (show.clone(), hide.clone());

    view! {
        <span
            class="contra-link-wrapper"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
        >
            <a
                href=PORTFOLIO_URL
                target="_blank"
                rel="noopener noreferrer"
                on:focus=move |_| show_focus()
                on:blur=move |_| hide_blur()
            >
                "Contra"
            </a>
            <Show when=move || preview.visible.get()>
                <div class="contra-preview">
                    <div class="contra-preview-content">
                        <a
                            href=PORTFOLIO_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="View portfolio on Contra"
                        >
                            "View my portfolio on Contra →"
                        </a>
                    </div>
                </div>
            </Show>
        </span>
    }
}

#[component]
fn CopyIcon(#[prop(into)] copied: Signal<bool>) -> impl IntoView {
    move || {
        if copied.get() {
            view! {
                <svg class="preview-icon" viewBox="0 0 24 24" aria-hidden="true">
                    <path
                        d="M20 6L9 17l-5-5"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="1.8"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            }
            .into_any()
        } else {
            view! {
                <svg class="preview-icon" viewBox="0 0 24 24" aria-hidden="true">
                    <rect
                        x="4"
                        y="4"
                        width="14"
                        height="6"
                        rx="2.5"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="1.7"
                    />
                    <path d="M13 10v4.5" fill="none" stroke="currentColor" stroke-width="1.7" stroke-linecap="round" />
                    <path d="M13 14.5l4.5 4.5" fill="none" stroke="currentColor" stroke-width="1.7" stroke-linecap="round" />
                    <path d="M16.8 18.3l2.2 2.2" fill="none" stroke="currentColor" stroke-width="1.7" stroke-linecap="round" />
                </svg>
            }
            .into_any()
        }
    }
}

/// The email address as a button that copies itself, with a hover preview
/// confirming the copy.
#[component]
pub fn EmailCopyButton(#[prop(optional)] footer: bool) -> impl IntoView {
    let UseClipboardReturn { copied, copy, .. } = use_clipboard_with_options(
        UseClipboardOptions::default().copied_reset_delay(COPIED_RESET_MS),
    );
    // `copied` only rises after a successful write, and falls when its reset
    // delay runs out
    let feedback = RwSignal::new(CopyFeedback::default());
    Effect::watch(
        move || copied.get(),
        move |&is_copied, _, _| {
            if is_copied {
                feedback.update(|f| f.write_finished(true));
            } else {
                feedback.update(CopyFeedback::reset_elapsed);
            }
        },
        false,
    );
    let shown_copied = Signal::derive(move || feedback.with(CopyFeedback::is_copied));

    let (preview, show, hide) =
        DelayedPreview::new(move || feedback.update(CopyFeedback::preview_hidden));
    let (show_focus, hide_blur) = (show.clone(), hide.clone());
    let show_on_copy = show.clone();

    let on_copy = move |_: MouseEvent| {
        show_on_copy();
        copy(EMAIL);
    };
    let copy_from_preview = on_copy.clone();

    view! {
        <span
            class="email-link-wrapper"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
        >
            <button
                class="email-button"
                class:footer-email=footer
                on:click=on_copy
                on:focus=move |_| show_focus()
                on:blur=move |_| hide_blur()
                aria-label="Copy email address"
            >
                {EMAIL}
            </button>
            <Show when=move || preview.visible.get()>
                <div class="email-preview" role="status" aria-live="polite">
                    <div class="email-preview-content">
                        <CopyIcon copied=shown_copied />
                        <button
                            type="button"
                            class="email-preview-action"
                            on:mousedown=|ev| ev.prevent_default()
                            on:click=copy_from_preview.clone()
                            aria-label="Copy email address"
                        >
                            {move || feedback.with(CopyFeedback::label)}
                        </button>
                    </div>
                </div>
            </Show>
        </span>
    }
}
