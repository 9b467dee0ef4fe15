use std::time::Duration;

use leptos::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::scramble::Scramble;

const TICK: Duration = Duration::from_millis(40);

/// Renders `text` through a scramble reveal: every position starts as random
/// noise and settles left to right, one character per tick, until the real
/// string is showing. On the server this renders the plain text; the
/// animation kicks in after hydration. Changing `text` restarts from scratch.
#[component]
pub fn ScrambleText(
    #[prop(into)] text: Signal<String>,
    /// characters revealed per tick
    #[prop(default = 1)]
    rate: usize,
) -> impl IntoView {
    let (display, set_display) = signal(text.get_untracked());
    let state = StoredValue::new_local(None::<(Scramble, SmallRng)>);
    let handle = StoredValue::new_local(None::<IntervalHandle>);

    // Completion, restart, and unmount all cancel through this one path, so
    // the interval can never be cleared twice or left running.
    let stop = move || {
        if let Some(h) = handle.try_update_value(|h| h.take()).flatten() {
            h.clear();
        }
    };

    let tick = move || {
        let done = state
            .try_update_value(|s| {
                let Some((anim, rng)) = s.as_mut() else {
                    return true;
                };
                anim.advance();
                if anim.is_done() {
                    set_display(anim.target());
                    true
                } else {
                    set_display(anim.frame(rng));
                    false
                }
            })
            .unwrap_or(true);
        if done {
            stop();
        }
    };

    let restart = move |target: &str| {
        stop();
        let mut rng = SmallRng::from_entropy();
        let anim = Scramble::with_rate(target, rate);
        if anim.is_done() {
            // empty target is terminal from the start, no timer
            set_display(anim.target());
            return;
        }
        set_display(anim.frame(&mut rng));
        state.set_value(Some((anim, rng)));
        handle.set_value(set_interval_with_handle(tick, TICK).ok());
    };

    // runs once after hydration and again whenever the target changes
    Effect::watch(move || text.get(), move |target, _, _| restart(target), true);
    on_cleanup(stop);

    view! { <span aria-label=text>{display}</span> }
}
