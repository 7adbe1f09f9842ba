//! Engine for the click challenge: a fixed-length round where every click
//! while the clock runs is worth a fixed number of points.

/// Round length in seconds.
pub const ROUND_SECONDS: u32 = 10;
pub const POINTS_PER_CLICK: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub clicks: u32,
    pub seconds_remaining: u32,
    pub active: bool,
}

impl GameState {
    pub fn idle() -> Self {
        Self {
            score: 0,
            clicks: 0,
            seconds_remaining: ROUND_SECONDS,
            active: false,
        }
    }

    fn fresh_round() -> Self {
        Self {
            active: true,
            ..Self::idle()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running { run_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub clicks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale run or idle engine; nothing changed.
    Ignored,
    Continue { seconds_remaining: u32 },
    Expired(RoundSummary),
}

#[derive(Debug, Clone)]
pub struct ClickChallengeEngine {
    pub state: EngineState,
    pub game: GameState,
    /// Identifier of the most recent round; ticks from older rounds are dropped.
    pub run_id: u64,
    pub last_round: Option<RoundSummary>,
}

impl Default for ClickChallengeEngine {
    fn default() -> Self {
        Self {
            state: EngineState::Idle,
            game: GameState::idle(),
            run_id: 0,
            last_round: None,
        }
    }
}

impl ClickChallengeEngine {
    /// Begin a new round from any state, discarding the current one.
    /// Returns the run id the countdown must tag its ticks with.
    pub fn start(&mut self) -> u64 {
        self.run_id = self.run_id.wrapping_add(1);
        self.state = EngineState::Running {
            run_id: self.run_id,
        };
        self.game = GameState::fresh_round();
        self.run_id
    }

    pub fn tick(&mut self, run_id: u64) -> TickOutcome {
        match self.state {
            EngineState::Running { run_id: current } if current == run_id => {}
            _ => return TickOutcome::Ignored,
        }

        self.game.seconds_remaining = self.game.seconds_remaining.saturating_sub(1);
        if self.game.seconds_remaining > 0 {
            return TickOutcome::Continue {
                seconds_remaining: self.game.seconds_remaining,
            };
        }

        self.game.active = false;
        self.state = EngineState::Idle;
        let summary = RoundSummary {
            score: self.game.score,
            clicks: self.game.clicks,
        };
        self.last_round = Some(summary);
        TickOutcome::Expired(summary)
    }

    /// Count a click if a round is running. Returns whether it counted.
    pub fn register_click(&mut self) -> bool {
        if !self.game.active {
            return false;
        }
        self.game.clicks = self.game.clicks.saturating_add(1);
        self.game.score = self.game.score.saturating_add(POINTS_PER_CLICK);
        true
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(engine: &mut ClickChallengeEngine, run_id: u64, ticks: u32) -> Vec<TickOutcome> {
        (0..ticks).map(|_| engine.tick(run_id)).collect()
    }

    #[test]
    fn start_resets_to_fresh_round() {
        let mut engine = ClickChallengeEngine::default();
        engine.start();

        assert_eq!(
            engine.game,
            GameState {
                score: 0,
                clicks: 0,
                seconds_remaining: 10,
                active: true,
            }
        );
        assert!(engine.is_running());
    }

    #[test]
    fn clicks_before_start_are_discarded() {
        let mut engine = ClickChallengeEngine::default();

        assert!(!engine.register_click());
        assert_eq!(engine.game.score, 0);
        assert_eq!(engine.game.clicks, 0);
    }

    #[test]
    fn score_tracks_clicks_during_run() {
        let mut engine = ClickChallengeEngine::default();
        let run = engine.start();

        for second in 0..5 {
            for _ in 0..=second {
                assert!(engine.register_click());
                assert_eq!(engine.game.score, engine.game.clicks * POINTS_PER_CLICK);
            }
            engine.tick(run);
        }
        assert_eq!(engine.game.clicks, 15);
        assert_eq!(engine.game.score, 150);
    }

    #[test]
    fn ten_ticks_expire_the_round() {
        let mut engine = ClickChallengeEngine::default();
        let run = engine.start();
        engine.register_click();
        engine.register_click();

        let outcomes = run_ticks(&mut engine, run, 10);

        assert_eq!(outcomes[0], TickOutcome::Continue { seconds_remaining: 9 });
        assert_eq!(
            outcomes[9],
            TickOutcome::Expired(RoundSummary {
                score: 20,
                clicks: 2
            })
        );
        assert_eq!(engine.game.seconds_remaining, 0);
        assert!(!engine.game.active);
        assert_eq!(engine.state, EngineState::Idle);
        assert_eq!(engine.last_round.map(|r| r.score), Some(20));
    }

    #[test]
    fn remaining_time_never_increases_or_underflows() {
        let mut engine = ClickChallengeEngine::default();
        let run = engine.start();

        let mut previous = engine.game.seconds_remaining;
        for _ in 0..15 {
            engine.tick(run);
            assert!(engine.game.seconds_remaining <= previous);
            previous = engine.game.seconds_remaining;
        }
        assert_eq!(engine.game.seconds_remaining, 0);
    }

    #[test]
    fn clicks_after_expiry_do_not_score() {
        let mut engine = ClickChallengeEngine::default();
        let run = engine.start();
        run_ticks(&mut engine, run, 10);

        assert!(!engine.register_click());
        assert_eq!(engine.game.clicks, 0);
    }

    #[test]
    fn restart_mid_round_resets_counters() {
        let mut engine = ClickChallengeEngine::default();
        let first = engine.start();
        engine.register_click();
        run_ticks(&mut engine, first, 4);

        let second = engine.start();

        assert_ne!(first, second);
        assert_eq!(engine.game, GameState::fresh_round());
    }

    #[test]
    fn ticks_from_superseded_round_are_ignored() {
        let mut engine = ClickChallengeEngine::default();
        let first = engine.start();
        run_ticks(&mut engine, first, 3);
        let second = engine.start();

        assert_eq!(engine.tick(first), TickOutcome::Ignored);
        assert_eq!(engine.game.seconds_remaining, 10);

        assert_eq!(
            engine.tick(second),
            TickOutcome::Continue { seconds_remaining: 9 }
        );
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut engine = ClickChallengeEngine::default();
        assert_eq!(engine.tick(0), TickOutcome::Ignored);
        assert_eq!(engine.game, GameState::idle());
    }
}
