use std::time::Duration;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{
    parse_stored, Theme, ThemeSource, ThemeState, THEME_ATTRIBUTE, THEME_PREFERENCE_KEY,
    THEME_TRANSITION_CLASSES, THEME_TRANSITION_CLEANUP_BUFFER_MS, THEME_TRANSITION_DURATION_MS,
};

fn set_theme_attribute(root: &web_sys::Element, theme: Theme) {
    if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("couldn't set theme attribute: {err:?}");
    }
}

/// Swap the theme under a short crossfade. A pending cleanup from an earlier
/// toggle is cancelled so the transition classes stay on until the newest
/// crossfade ends.
fn apply_with_transition(theme: Theme, cleanup: StoredValue<Option<TimeoutHandle>>) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Some(handle) = cleanup.try_update_value(Option::take).flatten() {
        handle.clear();
    }

    let [transitioning, crossfade] = THEME_TRANSITION_CLASSES;
    if let Err(err) = root.class_list().add_2(transitioning, crossfade) {
        log::warn!("couldn't start theme transition: {err:?}");
    }
    let frame_root = root.clone();
    request_animation_frame(move || set_theme_attribute(&frame_root, theme));

    let handle = set_timeout_with_handle(
        move || {
            if let Err(err) = root.class_list().remove_2(transitioning, crossfade) {
                log::warn!("couldn't end theme transition: {err:?}");
            }
            cleanup.try_update_value(|pending| *pending = None);
        },
        Duration::from_millis(
            (THEME_TRANSITION_DURATION_MS + THEME_TRANSITION_CLEANUP_BUFFER_MS).into(),
        ),
    );
    match handle {
        Ok(handle) => cleanup.set_value(Some(handle)),
        Err(err) => log::warn!("couldn't schedule theme transition cleanup: {err:?}"),
    }
}

fn apply_theme(theme: Theme, source: ThemeSource, cleanup: StoredValue<Option<TimeoutHandle>>) {
    if source.crossfades() {
        apply_with_transition(theme, cleanup);
    } else if let Some(root) = document().document_element() {
        set_theme_attribute(&root, theme);
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (stored, set_stored, _) =
        use_local_storage::<String, FromToStringCodec>(THEME_PREFERENCE_KEY);
    let prefers_dark = use_preferred_dark();
    // unresolved until the client has read storage
    let state = RwSignal::new(None::<ThemeState>);
    let cleanup = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let resolved =
            ThemeState::resolve(parse_stored(&stored.get_untracked()), prefers_dark.get_untracked());
        if let Some(root) = document().document_element() {
            set_theme_attribute(&root, resolved.theme());
        }
        log::debug!("resolved theme {}", resolved.theme());
        state.set(Some(resolved));
    });

    Effect::watch(
        move || prefers_dark.get(),
        move |&dark, _, _| {
            let next = state
                .try_update(|state| state.as_mut().and_then(|s| s.system_changed(dark)))
                .flatten();
            if let Some(theme) = next {
                apply_theme(theme, ThemeSource::System, cleanup);
            }
        },
        false,
    );

    on_cleanup(move || {
        if let Some(handle) = cleanup.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let on_toggle = move |_| {
        let Some(next) = state.try_update(|state| state.as_mut().map(ThemeState::toggle)).flatten()
        else {
            return;
        };
        set_stored.set(next.to_string());
        apply_theme(next, ThemeSource::Toggle, cleanup);
    };

    let theme = move || state.get().map(|s| s.theme());

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=on_toggle
            disabled=move || theme().is_none()
            aria-label=move || theme().unwrap_or(Theme::Light).toggle_label()
        >
            <span class="theme-toggle-icon" aria-hidden="true">
                {move || if theme() == Some(Theme::Dark) { "☼" } else { "☾" }}
            </span>
            <span
                class="theme-toggle-label"
                class:theme-toggle-label-dark=move || theme() != Some(Theme::Dark)
            >
                {move || if theme() == Some(Theme::Dark) { "Light" } else { "Dark" }}
            </span>
        </button>
    }
}
