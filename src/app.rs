use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use mathdrill::Config;
use mathdrill::generator::RandomProblems;
use mathdrill::generator::problem::Mode;
use mathdrill::session::{Command, DrillSession, Effect, FlashKind, ScheduledEffect};
use mathdrill::store::{AchievementRecord, AchievementStore, KeyValueStore};

pub type Session = DrillSession<RandomProblems<SmallRng>, Box<dyn KeyValueStore>>;

const CONFETTI_MS: u64 = 1500;

/// An effect waiting for its timer.
struct Pending {
    due: Instant,
    effect: Effect,
}

/// Terminal host for a drill session: turns keys into commands and plays
/// back the effects each transition asks for, including the timed ones.
pub struct App {
    pub session: Session,
    pub flash: Option<FlashKind>,
    pub motivation: Option<String>,
    pub unlocked: Option<AchievementRecord>,
    pub confetti_until: Option<Instant>,
    pub achievements: Vec<AchievementRecord>,
    pub should_quit: bool,
    /// Set when a bell should be written after the next draw.
    pub ring_bell: bool,
    pending: Vec<Pending>,
}

impl App {
    pub fn new(config: Config, store: Box<dyn KeyValueStore>) -> Self {
        let source = RandomProblems::new(SmallRng::from_entropy());
        Self::with_session(DrillSession::new(config, source, AchievementStore::new(store)))
    }

    pub fn with_session(session: Session) -> Self {
        let achievements = session.achievements();
        Self {
            session,
            flash: None,
            motivation: None,
            unlocked: None,
            confetti_until: None,
            achievements,
            should_quit: false,
            ring_bell: false,
            pending: Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let state = self.session.state();
        // Input is frozen between grading and the deferred advance.
        let locked = state.awaiting_advance;
        let command = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() && !locked => Command::Digit(ch),
            KeyCode::Backspace if !locked => Command::Backspace,
            KeyCode::Delete | KeyCode::Char('c') if !locked => Command::ClearInput,
            KeyCode::Enter if !locked => Command::Submit,
            KeyCode::Char('m') => Command::SwitchMode(Mode::Multiplication),
            KeyCode::Char('d') => Command::SwitchMode(Mode::Division),
            KeyCode::Char('f') => Command::SetFastMode(!state.fast_mode),
            KeyCode::Char('t') => Command::SwitchTheme(state.theme.toggled()),
            _ => return,
        };

        if matches!(command, Command::SwitchMode(_)) {
            // The new problem is already up; a leftover advance would skip it.
            self.pending.retain(|p| p.effect != Effect::AdvanceProblem);
        }
        if let Command::SetFastMode(false) = command {
            self.flash = None;
        }

        // Invalid input only sets feedback on the session state.
        if let Ok(effects) = self.session.dispatch(command) {
            self.apply(effects, now);
        }
    }

    pub fn apply(&mut self, effects: Vec<ScheduledEffect>, now: Instant) {
        for scheduled in effects {
            if scheduled.delay_ms == 0 {
                self.run(scheduled.effect, now);
            } else {
                self.pending.push(Pending {
                    due: now + Duration::from_millis(scheduled.delay_ms),
                    effect: scheduled.effect,
                });
            }
        }
    }

    /// Run every timed effect that has come due, oldest first.
    pub fn tick(&mut self, now: Instant) {
        let (mut due, later): (Vec<Pending>, Vec<Pending>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|p| p.due <= now);
        self.pending = later;
        due.sort_by_key(|p| p.due);
        for p in due {
            self.run(p.effect, now);
        }

        if self.confetti_until.is_some_and(|until| until <= now) {
            self.confetti_until = None;
        }
    }

    fn run(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::PlaySuccessSound => {
                if self.session.config().sound {
                    self.ring_bell = true;
                }
            }
            Effect::Flash(kind) => self.flash = Some(kind),
            Effect::ClearFlash => self.flash = None,
            Effect::ShowMotivation(text) => self.motivation = Some(text),
            Effect::HideMotivation => self.motivation = None,
            Effect::Celebrate => {
                self.confetti_until = Some(now + Duration::from_millis(CONFETTI_MS));
            }
            Effect::AchievementUnlocked(record) => {
                self.unlocked = Some(record);
                self.achievements = self.session.achievements();
            }
            Effect::AdvanceProblem => {
                self.unlocked = None;
                if let Err(err) = self.session.dispatch(Command::Advance) {
                    log::warn!("advance failed: {err}");
                }
            }
        }
    }
}
