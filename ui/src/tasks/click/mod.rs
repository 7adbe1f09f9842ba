//! Click challenge: ten seconds, ten points per click.

pub mod countdown;
pub mod engine;
mod view;

pub use countdown::{spawn_countdown, CountdownHandle, CountdownTick};
pub use engine::{
    ClickChallengeEngine, EngineState, GameState, RoundSummary, TickOutcome, POINTS_PER_CLICK,
    ROUND_SECONDS,
};
pub use view::ClickChallengeView;
