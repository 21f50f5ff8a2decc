//! The session: screens, events, and effects.
//!
//! Replaces a DOM-coupled controller with an explicit state object driven by
//! pure-ish transitions: an adapter feeds [`SessionEvent`]s in and honors the
//! few [`Effect`]s that come back out. Everything else - the board, the
//! feedback line, the move counter, the clock - is read from the session
//! between events. No rendering surface is needed to drive or test any of
//! this.
//!
//! ## Deferred callbacks
//!
//! The mismatch reveal delay and the timer tick are the only scheduled work.
//! The session never assumes a scheduled callback can be cancelled: every
//! game start or restart bumps a generation counter, and a late
//! [`SessionEvent::MismatchElapsed`] carrying an old generation no-ops.

use std::time::Duration;

use crate::clock::GameClock;
use crate::core::{DeckRng, GameState, Pair};
use crate::deck::{build_deck, shuffle_deck};
use crate::engine::{self, FlipOutcome, MISMATCH_REVEAL_DELAY};
use crate::input::{parse_pairs, validate, Feedback, EXAMPLE_JSON};
use crate::theme::{Theme, ThemeManager};

/// Which surface is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Text entry with live validity feedback.
    Input,
    /// Card grid, move counter, elapsed-time display.
    Game,
    /// Stats overlay with play-again / new-terms actions.
    Complete,
}

/// External events the session reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The input text changed; revalidate for live feedback.
    InputChanged(String),
    /// Pre-fill the input with the built-in example.
    LoadExample,
    /// Parse the held input and start a game.
    Start { seed: u64 },
    /// The player chose the card at this board position.
    CardChosen(usize),
    /// The mismatch reveal delay elapsed for the given generation.
    MismatchElapsed { generation: u64 },
    /// Reshuffle the same pairs and reset counters.
    Restart,
    /// Back to the input screen, dropping the round.
    NewTerms,
    /// Switch between light and dark.
    ToggleTheme,
}

/// Imperative instructions an adapter must honor; everything else is read
/// from the session after `handle` returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`SessionEvent::MismatchElapsed`] with this generation after
    /// the delay. The scheduling primitive need not support cancellation.
    ScheduleReveal { generation: u64, delay: Duration },
    /// Begin polling the clock for display updates.
    StartTimer,
    /// Stop polling the clock.
    StopTimer,
}

/// Final numbers for the completion overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionStats {
    pub moves: u32,
    pub elapsed: Duration,
}

/// One game in progress: board, source pairs, clock, and the RNG that
/// shuffled it (kept so restarts can fork a fresh permutation).
pub struct GameRound {
    /// Board state, mutated only by the match engine.
    pub state: GameState,
    /// Wall clock for this round.
    pub clock: GameClock,
    pairs: Vec<Pair>,
    rng: DeckRng,
}

impl GameRound {
    /// The pairs this round was built from.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}

/// All session state: active screen, input buffer, optional round, theme.
pub struct Session {
    screen: Screen,
    input: String,
    feedback: Feedback,
    round: Option<GameRound>,
    theme: ThemeManager,
    generation: u64,
}

impl Session {
    /// Fresh session on the input screen.
    #[must_use]
    pub fn new(theme: ThemeManager) -> Self {
        Self {
            screen: Screen::Input,
            input: String::new(),
            feedback: validate(""),
            round: None,
            theme,
            generation: 0,
        }
    }

    /// Apply one event and return the effects the adapter must honor.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::InputChanged(text) => {
                self.input = text;
                self.feedback = validate(&self.input);
                Vec::new()
            }

            SessionEvent::LoadExample => {
                self.input = EXAMPLE_JSON.to_string();
                self.feedback = validate(&self.input);
                Vec::new()
            }

            SessionEvent::Start { seed } => self.start_game(seed),

            SessionEvent::CardChosen(index) => {
                if self.screen != Screen::Game {
                    return Vec::new();
                }
                let Some(round) = self.round.as_mut() else {
                    return Vec::new();
                };
                match engine::flip(&mut round.state, index) {
                    FlipOutcome::Mismatch { generation } => vec![Effect::ScheduleReveal {
                        generation,
                        delay: MISMATCH_REVEAL_DELAY,
                    }],
                    FlipOutcome::Completed => {
                        round.clock.stop();
                        self.screen = Screen::Complete;
                        vec![Effect::StopTimer]
                    }
                    FlipOutcome::Ignored | FlipOutcome::Flipped | FlipOutcome::Matched => {
                        Vec::new()
                    }
                }
            }

            SessionEvent::MismatchElapsed { generation } => {
                if let Some(round) = self.round.as_mut() {
                    engine::resolve_mismatch(&mut round.state, generation);
                }
                Vec::new()
            }

            SessionEvent::Restart => {
                let Some(round) = self.round.as_mut() else {
                    return Vec::new();
                };
                self.generation += 1;
                let mut cards = build_deck(&round.pairs);
                let mut reshuffle = round.rng.fork();
                shuffle_deck(&mut cards, &mut reshuffle);
                round.state = GameState::new(cards, self.generation);
                round.clock = GameClock::start();
                self.screen = Screen::Game;
                vec![Effect::StartTimer]
            }

            SessionEvent::NewTerms => {
                // Bumping the generation strands any reveal still in flight.
                self.generation += 1;
                self.round = None;
                self.screen = Screen::Input;
                vec![Effect::StopTimer]
            }

            SessionEvent::ToggleTheme => {
                if let Err(err) = self.theme.toggle() {
                    log::warn!("failed to persist theme preference: {err}");
                }
                Vec::new()
            }
        }
    }

    fn start_game(&mut self, seed: u64) -> Vec<Effect> {
        if !self.feedback.is_valid() {
            return Vec::new();
        }
        let pairs = match parse_pairs(&self.input) {
            Ok(pairs) => pairs,
            Err(_) => {
                // Validation and parsing disagree only if input mutated
                // between events; refresh the feedback and stay put.
                self.feedback = validate(&self.input);
                return Vec::new();
            }
        };

        self.generation += 1;
        let mut rng = DeckRng::new(seed);
        let mut cards = build_deck(&pairs);
        shuffle_deck(&mut cards, &mut rng);

        log::debug!("starting game: {} pairs, seed {seed}", pairs.len());
        self.round = Some(GameRound {
            state: GameState::new(cards, self.generation),
            clock: GameClock::start(),
            pairs,
            rng,
        });
        self.screen = Screen::Game;
        vec![Effect::StartTimer]
    }

    // === Read surface ===

    /// Active screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current input text.
    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// Live validity feedback for the input surface.
    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// May the start action fire?
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.feedback.is_valid()
    }

    /// The round in progress, if any.
    #[must_use]
    pub fn round(&self) -> Option<&GameRound> {
        self.round.as_ref()
    }

    /// Active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Elapsed-time display for the timer surface.
    #[must_use]
    pub fn timer_display(&self) -> Option<String> {
        self.round.as_ref().map(|round| round.clock.display())
    }

    /// Final stats, present exactly on the completion screen.
    #[must_use]
    pub fn completion_stats(&self) -> Option<CompletionStats> {
        if self.screen != Screen::Complete {
            return None;
        }
        self.round.as_ref().map(|round| CompletionStats {
            moves: round.state.moves,
            elapsed: round.clock.elapsed(),
        })
    }
}

/// Wall-clock seed for callers who want a fresh board every run.
#[must_use]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
