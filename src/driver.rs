//! Simulated-clock autoplayer.
//!
//! Stands in for a keyboard and a timer: commands are drawn from a seeded
//! RNG, and gravity fires once per loop while the clock advances by the
//! current drop interval.

use tracing::debug;

use tetris_rules::core::{DropPacing, Engine, SimpleRng};
use tetris_rules::types::{GameAction, GameStatus};

/// Player inputs the autoplayer may choose from; `None` means no input this tick.
const INPUTS: [Option<GameAction>; 5] = [
    Some(GameAction::MoveLeft),
    Some(GameAction::MoveRight),
    Some(GameAction::Rotate),
    Some(GameAction::SoftDrop),
    None,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub status: GameStatus,
    pub score: u32,
    pub pieces_generated: u32,
}

#[derive(Debug)]
pub struct Autoplay {
    engine: Engine,
    pacing: DropPacing,
    inputs: SimpleRng,
    interval_ms: u32,
}

impl Autoplay {
    pub fn new(engine: Engine, input_seed: u32) -> Self {
        let pacing = DropPacing::new(engine.config());
        Self {
            engine,
            pacing,
            inputs: SimpleRng::new(input_seed),
            interval_ms: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Play until the game ends or `max_ticks` gravity ticks have run
    pub fn run(&mut self, max_ticks: u64) -> Summary {
        self.engine.start();
        self.refresh_interval();

        let mut ticks = 0;
        let mut elapsed_ms = 0;

        while !self.engine.status().is_terminal() && ticks < max_ticks {
            let pick = self.inputs.next_range(INPUTS.len() as u32) as usize;
            if let Some(action) = INPUTS[pick] {
                self.engine.apply_action(action);
            }

            let pieces_before = self.engine.pieces_generated();
            if !self.engine.status().is_terminal() {
                self.engine.apply_action(GameAction::Tick);
            }

            ticks += 1;
            elapsed_ms += self.interval_ms as u64;

            if self.engine.pieces_generated() != pieces_before {
                self.refresh_interval();
            }
        }

        Summary {
            ticks,
            elapsed_ms,
            status: self.engine.status(),
            score: self.engine.score(),
            pieces_generated: self.engine.pieces_generated(),
        }
    }

    fn refresh_interval(&mut self) {
        let interval = self.pacing.interval_ms(self.engine.pieces_generated());
        if interval != self.interval_ms {
            debug!(
                interval_ms = interval,
                pieces_generated = self.engine.pieces_generated(),
                "drop interval changed"
            );
            self.interval_ms = interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_rules::core::GameConfig;

    #[test]
    fn test_autoplay_is_deterministic() {
        let play = || {
            let engine = Engine::with_seed(GameConfig::default(), 99).unwrap();
            Autoplay::new(engine, 100).run(5_000)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_autoplay_stops_on_terminal_status() {
        let engine = Engine::with_seed(GameConfig::default(), 3).unwrap();
        let mut autoplay = Autoplay::new(engine, 4);
        let summary = autoplay.run(u64::MAX);

        assert!(summary.status.is_terminal());
        assert!(autoplay.engine().final_message().is_some());
    }

    #[test]
    fn test_acceleration_shortens_interval() {
        let config = GameConfig::default().with_acceleration_rate(1);
        let engine = Engine::with_seed(config, 7).unwrap();
        let mut autoplay = Autoplay::new(engine, 8);
        autoplay.run(2_000);

        if autoplay.engine().pieces_generated() > 1 {
            assert!(autoplay.interval_ms < 1000);
        }
    }
}
