use crate::config::Config;
use crate::engine::milestone::{self, MilestoneState};
use crate::error::DrillError;
use crate::generator::ProblemSource;
use crate::generator::problem::Mode;
use crate::session::effect::{Effect, FlashKind, Outcome, ScheduledEffect, Transition};
use crate::session::input;
use crate::session::messages;
use crate::session::state::{Feedback, SessionState, Theme};
use crate::store::achievements::AchievementStore;
use crate::store::json_store::KeyValueStore;
use crate::store::schema::{self, AchievementRecord};

/// External triggers the host can feed into a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    Backspace,
    ClearInput,
    /// Submit whatever is in the input buffer.
    Submit,
    SubmitAnswer(String),
    SwitchMode(Mode),
    SwitchTheme(Theme),
    SetFastMode(bool),
    /// The deferred advance scheduled by a graded submit has come due.
    Advance,
}

/// Owns one drill sitting: the live counters, the lookahead queue, the
/// milestone cursor and the achievement log it writes to.
pub struct DrillSession<P, S> {
    state: SessionState,
    milestones: MilestoneState,
    source: P,
    store: AchievementStore<S>,
    config: Config,
}

impl<P: ProblemSource, S: KeyValueStore> DrillSession<P, S> {
    pub fn new(config: Config, mut source: P, store: AchievementStore<S>) -> Self {
        let milestones = MilestoneState::resumed(store.max_milestone());
        let first = source.generate(config.mode);
        let fast_mode = config.fast_mode;
        let mut session = Self {
            state: SessionState::new(config.mode, config.theme, first),
            milestones,
            source,
            store,
            config,
        };
        if fast_mode {
            session.set_fast_mode(true);
        }
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn milestones(&self) -> MilestoneState {
        self.milestones
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &AchievementStore<S> {
        &self.store
    }

    /// Achievement log in display order.
    pub fn achievements(&self) -> Vec<AchievementRecord> {
        schema::newest_first(&self.store.load())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Vec<ScheduledEffect>, DrillError> {
        match command {
            Command::Digit(ch) => {
                input::push_digit(&mut self.state.input, ch);
            }
            Command::Backspace => input::backspace(&mut self.state.input),
            Command::ClearInput => input::clear(&mut self.state.input),
            Command::Submit => return self.submit().map(|t| t.effects),
            Command::SubmitAnswer(raw) => return self.submit_answer(&raw).map(|t| t.effects),
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::SwitchTheme(theme) => self.switch_theme(theme),
            Command::SetFastMode(enabled) => self.set_fast_mode(enabled),
            Command::Advance => self.next_problem(),
        }
        Ok(Vec::new())
    }

    /// Replace the current problem, preferring the queued one in fast mode,
    /// and reset per-problem input and feedback.
    pub fn next_problem(&mut self) {
        let mode = self.state.mode;
        let promoted = if self.state.fast_mode {
            self.state.queue.consume()
        } else {
            None
        };
        self.state.current_problem = match promoted {
            Some(problem) => {
                self.state.queue.ensure_queued(mode, true, &mut self.source);
                problem
            }
            None => self.source.generate(mode),
        };
        log::debug!("next problem: {}", self.state.current_problem.display_text);

        input::clear(&mut self.state.input);
        self.state.feedback = None;
        self.state.awaiting_advance = false;
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        log::info!("switching to {mode} mode");
        self.state.mode = mode;
        self.state.queue.discard();
        self.next_problem();
        if self.state.fast_mode {
            self.state.queue.ensure_queued(mode, true, &mut self.source);
        }
    }

    pub fn switch_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
    }

    pub fn set_fast_mode(&mut self, enabled: bool) {
        if enabled != self.state.fast_mode {
            log::info!("fast mode {}", if enabled { "on" } else { "off" });
        }
        self.state.fast_mode = enabled;
        if enabled {
            self.state
                .queue
                .ensure_queued(self.state.mode, true, &mut self.source);
        } else {
            self.state.queue.discard();
        }
    }

    /// Submit the keypad buffer.
    pub fn submit(&mut self) -> Result<Transition, DrillError> {
        let raw = self.state.input.clone();
        self.submit_answer(&raw)
    }

    /// Grade `raw` against the current problem.
    ///
    /// Unparseable input changes no counters. A graded answer never moves
    /// to the next problem by itself: the returned effects end with an
    /// `AdvanceProblem` the host must run after its delay.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Transition, DrillError> {
        let value = match input::parse_answer(raw) {
            Ok(value) => value,
            Err(err) => {
                self.state.feedback = Some(Feedback::InvalidInput {
                    message: messages::INVALID_INPUT.to_string(),
                });
                return Err(err);
            }
        };

        self.state.total_count += 1;
        let expected = self.state.current_problem.answer;
        let fast = self.state.fast_mode;
        let mut effects = Vec::new();

        let outcome = if value == i64::from(expected) {
            self.state.correct_count += 1;
            self.on_correct(fast, &mut effects)
        } else {
            if fast {
                self.flash(FlashKind::Incorrect, &mut effects);
            } else {
                self.state.feedback = Some(Feedback::Incorrect {
                    message: messages::incorrect(expected),
                });
            }
            Outcome::Incorrect {
                expected_answer: expected,
            }
        };

        effects.push(ScheduledEffect::after(
            self.config.advance_delay(fast),
            Effect::AdvanceProblem,
        ));
        self.state.awaiting_advance = true;

        Ok(Transition { outcome, effects })
    }

    fn on_correct(&mut self, fast: bool, effects: &mut Vec<ScheduledEffect>) -> Outcome {
        effects.push(ScheduledEffect::now(Effect::PlaySuccessSound));
        if fast {
            self.flash(FlashKind::Correct, effects);
        }

        let steps = self.config.milestone_steps();
        let eval = milestone::evaluate(self.state.correct_count, self.milestones, steps);
        self.milestones = eval.state;
        let celebrate = self.config.celebrations;

        if let Some(count) = eval.motivational
            && celebrate
        {
            effects.push(ScheduledEffect::now(Effect::ShowMotivation(
                messages::motivational(count, steps.motivational),
            )));
            effects.push(ScheduledEffect::after(
                self.config.message_ms,
                Effect::HideMotivation,
            ));
        }

        if let Some(milestone) = eval.persisted {
            let record = self.record_achievement(milestone);
            effects.push(ScheduledEffect::now(Effect::AchievementUnlocked(record)));
        }

        if celebrate && eval.fired() {
            effects.push(ScheduledEffect::now(Effect::Celebrate));
        }

        if !fast {
            let message = match eval.persisted {
                Some(milestone) => messages::correct_with_achievement(milestone),
                None => messages::CORRECT.to_string(),
            };
            self.state.feedback = Some(Feedback::Correct { message });
        }

        Outcome::Correct {
            motivational: eval.motivational,
            persisted: eval.persisted,
        }
    }

    fn flash(&self, kind: FlashKind, effects: &mut Vec<ScheduledEffect>) {
        effects.push(ScheduledEffect::now(Effect::Flash(kind)));
        effects.push(ScheduledEffect::after(self.config.flash_ms, Effect::ClearFlash));
    }

    fn record_achievement(&mut self, milestone: u32) -> AchievementRecord {
        let record = AchievementRecord::now(self.state.mode, self.state.theme, milestone);
        match self.store.append(record.clone()) {
            Ok(()) => log::info!(
                "achievement unlocked: {} correct ({}, {})",
                milestone,
                record.mode.as_str(),
                record.theme
            ),
            Err(err) => log::error!("failed to save {milestone} achievement: {err:#}"),
        }
        record
    }
}
