//! Animated text
//!
//! Both effects run as scope-owned tasks: unmounting the component stops
//! the ticks, and a new text or trigger cancels the running task before
//! the next one starts.

use codex_core::effects::{drive, Decrypt, Typewriter, DECRYPT_TICK, TYPEWRITER_TICK};
use dioxus::prelude::*;

/// Reveals `text` one character per tick while `trigger` is true.
///
/// Shows nothing while the trigger is false, and a blinking caret while
/// characters remain.
#[component]
pub fn TypewriterText(text: ReadOnlySignal<String>, trigger: ReadOnlySignal<bool>) -> Element {
    let mut shown = use_signal(String::new);
    let mut running: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let text = text();
        let armed = trigger();

        if let Some(task) = running.write().take() {
            task.cancel();
        }
        shown.set(String::new());
        if !armed {
            return;
        }

        let task = spawn(async move {
            let frames = drive(Typewriter::new(&text), TYPEWRITER_TICK, |frame| shown.set(frame)).await;
            tracing::trace!(frames, "Typewriter finished");
        });
        running.set(Some(task));
    });

    let typing = trigger() && Typewriter::is_typing(&text.read(), &shown.read());

    rsx! {
        span { class: "typewriter",
            "{shown}"
            if typing {
                span { class: "caret", "▋" }
            }
        }
    }
}

/// Scrambles `text` for a fixed number of frames whenever `trigger`
/// turns true, resolving left to right.
#[component]
pub fn DecryptText(text: ReadOnlySignal<String>, trigger: ReadOnlySignal<bool>) -> Element {
    let mut shown = use_signal(|| text.peek().clone());
    let mut running: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let text = text();
        let armed = trigger();

        if let Some(task) = running.write().take() {
            task.cancel();
        }
        if !armed {
            shown.set(text);
            return;
        }

        let task = spawn(async move {
            drive(Decrypt::new(&text), DECRYPT_TICK, |frame| shown.set(frame)).await;
        });
        running.set(Some(task));
    });

    rsx! {
        span { class: "decrypt", "{shown}" }
    }
}
