use leptos::{ev::PointerEvent, html, prelude::*};

use super::timers::SequenceDriver;
use crate::{
    sequence::reveal::{
        geometry::{PointerHit, Rect},
        headline::HeadlineLayout,
        RevealState, HERO_WORD_REVEAL_RADIUS, KOREAN_EXIT_CHAR_FADE_MS,
    },
    site::{
        entrance_style, ENGLISH_HEADLINE_LINES, HEADLINE_TEXT, HERO_ENTRANCE_DURATION_MS,
        KOREAN_HEADLINE_LINES,
    },
};

fn measure(node: &NodeRef<html::Span>) -> Option<Rect> {
    let rect = node.get_untracked()?.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

#[component]
pub fn Hero(#[prop(into)] entrance_delay: Signal<u32>) -> impl IntoView {
    let layout = HeadlineLayout::new(&ENGLISH_HEADLINE_LINES, &KOREAN_HEADLINE_LINES);
    let line_refs: Vec<NodeRef<html::Span>> = layout
        .english_lines()
        .iter()
        .map(|_| NodeRef::new())
        .collect();
    let word_refs: Vec<NodeRef<html::Span>> = (0..layout.english_word_count())
        .map(|_| NodeRef::new())
        .collect();
    let reveal = SequenceDriver::new(RevealState::new(layout.clone()));

    let on_move = {
        let layout = layout.clone();
        let line_refs = line_refs.clone();
        let word_refs = word_refs.clone();
        move |ev: PointerEvent| {
            if ev.pointer_type() != "mouse" {
                return;
            }
            let lines: Vec<Option<Rect>> = line_refs.iter().map(measure).collect();
            let words: Vec<Option<Rect>> = word_refs.iter().map(measure).collect();
            let hit = PointerHit::resolve(
                &layout,
                &lines,
                &words,
                ev.client_x().into(),
                ev.client_y().into(),
                HERO_WORD_REVEAL_RADIUS,
            );
            reveal.dispatch(|state, timeline| {
                state.pointer_move(&hit, timeline, &mut rand::thread_rng())
            });
        }
    };
    let on_leave = move |ev: PointerEvent| {
        if ev.pointer_type() != "mouse" {
            return;
        }
        reveal.dispatch(|state, timeline| state.pointer_leave(timeline, &mut rand::thread_rng()));
    };

    let english = layout
        .english_lines()
        .iter()
        .enumerate()
        .map(|(line, line_words)| {
            let words = line_words
                .iter()
                .enumerate()
                .map(|(order, word)| {
                    let index = layout.english_word_index(line, order);
                    view! {
                        <span
                            node_ref=word_refs[index]
                            class="hero-word"
                            class:hero-word-returning=move || reveal.with(RevealState::english_returning)
                            class:hero-word-hidden=move || reveal.with(|s| s.is_english_hidden(index))
                            style=move || {
                                reveal
                                    .with(|s| {
                                        format!(
                                            "--word-order: {order}; --hide-delay: {}ms; --return-delay: {}ms",
                                            s.hide_delay(index),
                                            s.return_delay(index),
                                        )
                                    })
                            }
                        >
                            {word.clone()}
                        </span>
                        " "
                    }
                })
                .collect_view();
            view! {
                <span node_ref=line_refs[line] class="hero-english-line">
                    {words}
                </span>
            }
        })
        .collect_view();

    let korean = layout
        .korean_lines()
        .iter()
        .enumerate()
        .map(|(line, line_words)| {
            let words = line_words
                .iter()
                .enumerate()
                .map(|(order, _)| {
                    let index = layout.korean_word_index(line, order);
                    let first_char = layout.korean_char_range(index).start;
                    let chars = layout
                        .korean_chars(index)
                        .iter()
                        .enumerate()
                        .map(|(offset, ch)| {
                            let char_index = first_char + offset;
                            view! {
                                <span
                                    class="hero-korean-char"
                                    style=move || {
                                        reveal
                                            .with(|s| {
                                                format!(
                                                    "--kr-char-exit-delay: {}ms; --kr-char-exit-duration: {KOREAN_EXIT_CHAR_FADE_MS}ms",
                                                    s.exit_char_delay(char_index),
                                                )
                                            })
                                    }
                                >
                                    {ch.to_string()}
                                </span>
                            }
                        })
                        .collect_view();
                    view! {
                        <span
                            class="hero-word hero-korean-word"
                            class:hero-korean-word-exiting=move || reveal.with(|s| s.is_korean_exiting(index))
                            class:hero-korean-word-visible=move || reveal.with(|s| s.is_korean_visible(index))
                        >
                            {chars}
                        </span>
                        " "
                    }
                })
                .collect_view();
            view! { <span class="hero-korean-line">{words}</span> }
        })
        .collect_view();

    view! {
        <div
            class="hero-interactive entrance-item"
            style=move || entrance_style(entrance_delay.get(), Some(HERO_ENTRANCE_DURATION_MS))
            on:pointermove=on_move
            on:pointerleave=on_leave
        >
            <h1 class="hero hero-base" aria-label=HEADLINE_TEXT>
                {english}
            </h1>
            <div class="hero hero-korean" aria-hidden="true">
                {korean}
            </div>
        </div>
    }
}
