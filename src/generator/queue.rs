use crate::generator::ProblemSource;
use crate::generator::problem::{Mode, Problem};

/// One-problem lookahead used by fast mode.
///
/// At most one problem is held. It is only valid for the mode it was
/// generated in; switching modes or leaving fast mode must call `discard`.
#[derive(Clone, Debug, Default)]
pub struct ProblemQueue {
    held: Option<Problem>,
}

impl ProblemQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the buffer filled while fast mode is on.
    ///
    /// With fast mode off the held problem is dropped and `None` returned.
    /// Otherwise an empty buffer is filled from `source`, and the held
    /// problem is returned without regenerating it.
    pub fn ensure_queued<P: ProblemSource + ?Sized>(
        &mut self,
        mode: Mode,
        fast_mode: bool,
        source: &mut P,
    ) -> Option<&Problem> {
        if !fast_mode {
            self.held = None;
            return None;
        }
        if self.held.is_none() {
            let problem = source.generate(mode);
            log::debug!("queued next problem: {}", problem.display_text);
            self.held = Some(problem);
        }
        self.held.as_ref()
    }

    /// Take the held problem. The caller refills with `ensure_queued`.
    pub fn consume(&mut self) -> Option<Problem> {
        self.held.take()
    }

    pub fn discard(&mut self) {
        self.held = None;
    }

    pub fn peek(&self) -> Option<&Problem> {
        self.held.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::test_support::ScriptedProblems;

    #[test]
    fn test_fast_mode_off_returns_none_and_clears() {
        let mut source = ScriptedProblems::cycle(vec![Problem::multiply(2, 3)]);
        let mut queue = ProblemQueue::new();
        assert!(queue.ensure_queued(Mode::Multiplication, true, &mut source).is_some());

        assert!(queue.ensure_queued(Mode::Multiplication, false, &mut source).is_none());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_held_problem_is_not_regenerated() {
        let mut source = ScriptedProblems::new(vec![Problem::multiply(2, 3), Problem::multiply(4, 5)]);
        let mut queue = ProblemQueue::new();
        let first = queue
            .ensure_queued(Mode::Multiplication, true, &mut source)
            .cloned();
        let again = queue
            .ensure_queued(Mode::Multiplication, true, &mut source)
            .cloned();
        assert_eq!(first, Some(Problem::multiply(2, 3)));
        assert_eq!(again, first);
        assert_eq!(source.generated(), 1);
    }

    #[test]
    fn test_consume_then_refill_generates_a_new_problem() {
        let mut source = ScriptedProblems::new(vec![Problem::multiply(2, 3), Problem::multiply(4, 5)]);
        let mut queue = ProblemQueue::new();
        queue.ensure_queued(Mode::Multiplication, true, &mut source);

        let consumed = queue.consume();
        assert_eq!(consumed, Some(Problem::multiply(2, 3)));
        assert!(queue.peek().is_none());

        let refilled = queue
            .ensure_queued(Mode::Multiplication, true, &mut source)
            .cloned();
        assert_eq!(refilled, Some(Problem::multiply(4, 5)));
        assert_eq!(source.generated(), 2);
    }

    #[test]
    fn test_consume_on_empty_queue() {
        let mut queue = ProblemQueue::new();
        assert!(queue.consume().is_none());
    }

    #[test]
    fn test_discard_drops_held_problem() {
        let mut source = ScriptedProblems::cycle(vec![Problem::divide(12, 3).unwrap()]);
        let mut queue = ProblemQueue::new();
        queue.ensure_queued(Mode::Division, true, &mut source);
        queue.discard();
        assert!(queue.peek().is_none());
    }
}
