use std::fs;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tempfile::TempDir;

use mathdrill::Config;
use mathdrill::DrillError;
use mathdrill::generator::RandomProblems;
use mathdrill::generator::problem::Mode;
use mathdrill::session::{DrillSession, Effect, Outcome, Theme};
use mathdrill::store::{AchievementStore, JsonStore};

type FileSession = DrillSession<RandomProblems<SmallRng>, JsonStore>;

fn open_session(dir: &TempDir, config: Config, seed: u64) -> FileSession {
    let store = JsonStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    DrillSession::new(
        config,
        RandomProblems::new(SmallRng::seed_from_u64(seed)),
        AchievementStore::new(store),
    )
}

/// Answer the current problem correctly and run the deferred advance.
fn answer_right(session: &mut FileSession) -> Outcome {
    let answer = session.state().current_problem.answer.to_string();
    let transition = session.submit_answer(&answer).unwrap();
    assert_eq!(
        transition.effects.last().map(|e| &e.effect),
        Some(&Effect::AdvanceProblem)
    );
    session.next_problem();
    transition.outcome
}

#[test]
fn fifty_correct_answers_persist_one_achievement() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir, Config::default(), 1);

    let mut persisted = Vec::new();
    let mut motivational = Vec::new();
    for _ in 0..50 {
        if let Outcome::Correct {
            motivational: m,
            persisted: p,
        } = answer_right(&mut session)
        {
            motivational.extend(m);
            persisted.extend(p);
        }
    }

    assert_eq!(motivational, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
    assert_eq!(persisted, vec![50]);

    let json = fs::read_to_string(dir.path().join("achievements.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = stored.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["milestone"], 50);
    assert_eq!(entries[0]["mode"], "multiplication");
    assert_eq!(entries[0]["theme"], "panda");
    assert!(entries[0]["timestamp"].as_i64().unwrap() > 0);
}

#[test]
fn reopened_session_resumes_persisted_milestone() {
    let dir = TempDir::new().unwrap();
    {
        let mut session = open_session(&dir, Config::default(), 2);
        for _ in 0..100 {
            answer_right(&mut session);
        }
        assert_eq!(session.achievements().len(), 2);
    }

    let config = Config {
        mode: Mode::Division,
        theme: Theme::Squirtle,
        ..Config::default()
    };
    let mut session = open_session(&dir, config, 3);
    assert_eq!(session.milestones().last_persisted, 100);
    assert_eq!(session.state().correct_count, 0);

    for _ in 0..150 {
        answer_right(&mut session);
    }

    let log = session.achievements();
    let milestones: Vec<u32> = log.iter().map(|r| r.milestone).collect();
    // newest first: the 150 earned in division, then the two earlier ones
    assert_eq!(milestones[0], 150);
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].mode, Mode::Division);
    assert_eq!(log[0].theme, Theme::Squirtle);
    assert_eq!(session.store().max_milestone(), 150);
}

#[test]
fn corrupt_achievement_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("achievements.json"), "[{\"broken\": ").unwrap();

    let mut session = open_session(&dir, Config::default(), 4);
    assert_eq!(session.milestones().last_persisted, 0);
    assert!(session.achievements().is_empty());

    for _ in 0..50 {
        answer_right(&mut session);
    }
    assert_eq!(session.achievements().len(), 1);
    let kept = fs::read_to_string(dir.path().join("achievements-corrupt.json")).unwrap();
    assert_eq!(kept, "[{\"broken\": ");
}

#[test]
fn wrong_and_invalid_answers_in_a_session() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir, Config::default(), 5);

    let wrong = session.state().current_problem.answer + 1;
    let transition = session.submit_answer(&wrong.to_string()).unwrap();
    assert!(!transition.outcome.is_correct());
    session.next_problem();

    assert!(matches!(
        session.submit_answer("seven"),
        Err(DrillError::InvalidInput { .. })
    ));
    assert_eq!(session.state().total_count, 1);
    assert_eq!(session.state().correct_count, 0);
    assert!(!dir.path().join("achievements.json").exists());
}

#[test]
fn fast_mode_keeps_one_problem_ahead() {
    let dir = TempDir::new().unwrap();
    let mut session = open_session(&dir, Config::default(), 6);
    session.set_fast_mode(true);

    for _ in 0..20 {
        let queued = session.state().queued_problem().cloned().unwrap();
        answer_right(&mut session);
        assert_eq!(session.state().current_problem, queued);
        assert!(session.state().queued_problem().is_some());
    }

    session.switch_mode(Mode::Division);
    assert_eq!(session.state().current_problem.mode(), Mode::Division);
    assert_eq!(
        session.state().queued_problem().map(|p| p.mode()),
        Some(Mode::Division)
    );
}
