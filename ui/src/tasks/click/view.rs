use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::debug;

use crate::core::format;
use crate::t;

use super::countdown::{spawn_countdown, CountdownHandle};
use super::engine::{ClickChallengeEngine, TickOutcome, ROUND_SECONDS};

#[component]
pub fn ClickChallengeView() -> Element {
    let engine = use_signal(ClickChallengeEngine::default);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ClickEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let engine_ref = engine;

        use_coroutine(move |mut rx: UnboundedReceiver<ClickEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut engine_signal = engine_ref;

            async move {
                // Lives as long as the coroutine: dropping it on unmount cancels the timer.
                let mut countdown: Option<CountdownHandle> = None;

                while let Some(event) = rx.next().await {
                    match event {
                        ClickEvent::Start => {
                            if let Some(previous) = countdown.take() {
                                debug!(run_id = previous.run_id(), "cancelling superseded countdown");
                                previous.cancel();
                            }
                            let run_id = engine_signal.with_mut(|eng| eng.start());
                            countdown = queue_countdown(sender_slot.clone(), run_id);
                        }
                        ClickEvent::Click => {
                            engine_signal.with_mut(|eng| eng.register_click());
                        }
                        ClickEvent::Tick { run_id } => {
                            let outcome = engine_signal.with_mut(|eng| eng.tick(run_id));
                            if let TickOutcome::Expired(summary) = outcome {
                                debug!(score = summary.score, clicks = summary.clicks, "click round finished");
                                countdown = None;
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine;
        move |event: ClickEvent| {
            coroutine.send(event);
        }
    };
    let send_start = send_event.clone();
    let send_click = send_event;

    let snapshot = engine();
    let game = snapshot.game;

    rsx! {
        article { class: "task task-click",
            div { class: "task-click__readouts",
                div { class: "task-click__readout",
                    span { class: "task-click__value", "{format::format_count(game.score)}" }
                    span { class: "task-click__label", {t!("game-score")} }
                }
                div { class: "task-click__readout",
                    span { class: "task-click__value", "{format::format_count(game.clicks)}" }
                    span { class: "task-click__label", {t!("game-clicks")} }
                }
                div { class: "task-click__readout",
                    span { class: "task-click__value", "{format::format_seconds(game.seconds_remaining)}" }
                    span { class: "task-click__label", {t!("game-time")} }
                }
            }

            if game.active {
                button {
                    r#type: "button",
                    class: "button button--accent task-click__target",
                    onclick: move |_| send_click(ClickEvent::Click),
                    {t!("game-click")}
                }
            } else {
                button {
                    r#type: "button",
                    class: "button button--primary task-click__start",
                    onclick: move |_| send_start(ClickEvent::Start),
                    {t!("game-start", seconds = ROUND_SECONDS)}
                }
            }

            if let Some(last) = snapshot.last_round.filter(|_| !game.active) {
                p { class: "task-click__summary",
                    {t!("game-summary", score = last.score, clicks = last.clicks)}
                }
            }
        }
    }
}

fn queue_countdown(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ClickEvent>>>>,
    run_id: u64,
) -> Option<CountdownHandle> {
    let sender = sender_slot.borrow().as_ref().cloned()?;
    Some(spawn_countdown(run_id, ROUND_SECONDS, move |tick| {
        sender
            .unbounded_send(ClickEvent::Tick {
                run_id: tick.run_id,
            })
            .is_ok()
    }))
}

#[derive(Debug, Clone)]
enum ClickEvent {
    Start,
    Click,
    Tick { run_id: u64 },
}
