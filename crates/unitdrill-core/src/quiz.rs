//! The unit-conversion quiz state machine.
//!
//! Terminal-agnostic: the view layer translates key presses into
//! [`QuizInput`], shows whatever the returned [`Transition`] asks for, and
//! calls [`Quiz::acknowledge`] once the player has dismissed it.

use rand::rngs::StdRng;
use rand::Rng;

use crate::equation::Equation;
use crate::session::Session;

/// The highlighted menu row. Persists across equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MenuOption {
    #[default]
    EnterEquation,
    ShowResult,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::EnterEquation,
        MenuOption::ShowResult,
        MenuOption::Exit,
    ];

    /// The row above, staying put at the top.
    pub fn previous(self) -> Self {
        match self {
            MenuOption::EnterEquation | MenuOption::ShowResult => MenuOption::EnterEquation,
            MenuOption::Exit => MenuOption::ShowResult,
        }
    }

    /// The row below, staying put at the bottom.
    pub fn next(self) -> Self {
        match self {
            MenuOption::EnterEquation => MenuOption::ShowResult,
            MenuOption::ShowResult | MenuOption::Exit => MenuOption::Exit,
        }
    }
}

/// Input already decoded from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    Up,
    Down,
    Confirm,
    Backspace,
    Char(char),
    Ignored,
}

/// What a single input produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing to report; keep reading input.
    Continue,
    Valid,
    Wrong,
    ShowResult,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    EnteringValue,
    /// A banner for the given transition is on screen until acknowledged.
    ShowingResult(Transition),
    Exited,
}

/// Session, current equation and menu selection for one quiz run.
#[derive(Debug)]
pub struct Quiz<R = StdRng> {
    session: Session<R>,
    equation: Equation,
    selected: MenuOption,
    state: QuizState,
}

impl<R: Rng> Quiz<R> {
    /// Start a run with a freshly generated equation.
    pub fn new(mut session: Session<R>) -> Self {
        let equation = session.prepare_new_equation();
        Self {
            session,
            equation,
            selected: MenuOption::default(),
            state: QuizState::EnteringValue,
        }
    }

    /// Apply one input. Only acts while a value is being entered.
    pub fn handle_input(&mut self, input: QuizInput) -> Transition {
        if self.state != QuizState::EnteringValue {
            return Transition::Continue;
        }

        let entering = self.selected == MenuOption::EnterEquation;
        let transition = match input {
            QuizInput::Up => {
                self.selected = self.selected.previous();
                Transition::Continue
            }
            QuizInput::Down => {
                self.selected = self.selected.next();
                Transition::Continue
            }
            QuizInput::Confirm => match self.selected {
                MenuOption::EnterEquation => {
                    self.equation.increment_attempts();
                    if self.equation.is_input_correct() {
                        self.session.register_correct_answer();
                        Transition::Valid
                    } else {
                        Transition::Wrong
                    }
                }
                MenuOption::ShowResult => Transition::ShowResult,
                MenuOption::Exit => Transition::Exit,
            },
            QuizInput::Backspace if entering => {
                self.equation.delete_last_input_char();
                Transition::Continue
            }
            QuizInput::Char(ch @ '0'..='9') if entering => {
                self.equation.append_input(ch);
                Transition::Continue
            }
            QuizInput::Char('.' | ',') if entering => {
                self.equation.append_input('.');
                Transition::Continue
            }
            _ => Transition::Continue,
        };

        self.state = match transition {
            Transition::Continue => QuizState::EnteringValue,
            Transition::Exit => QuizState::Exited,
            shown => QuizState::ShowingResult(shown),
        };

        if transition != Transition::Continue {
            tracing::debug!(?transition, attempts = self.equation.attempts(), "quiz transition");
        }

        transition
    }

    /// Dismiss the banner currently shown and resume entering values.
    pub fn acknowledge(&mut self) {
        let QuizState::ShowingResult(shown) = self.state else {
            return;
        };

        match shown {
            Transition::Valid => {
                self.equation = self.session.prepare_new_equation();
            }
            Transition::ShowResult => {
                self.selected = MenuOption::EnterEquation;
            }
            _ => {}
        }

        self.state = QuizState::EnteringValue;
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_exited(&self) -> bool {
        self.state == QuizState::Exited
    }

    pub fn into_session(self) -> Session<R> {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Catalog;

    fn quiz() -> Quiz {
        Quiz::new(Session::seeded(Catalog::metric(), 11))
    }

    fn type_answer(quiz: &mut Quiz, text: &str) {
        for ch in text.chars() {
            quiz.handle_input(QuizInput::Char(ch));
        }
    }

    fn clear_input(quiz: &mut Quiz) {
        while !quiz.equation().input().is_empty() {
            quiz.handle_input(QuizInput::Backspace);
        }
    }

    #[test]
    fn menu_navigation_saturates() {
        let mut q = quiz();
        q.handle_input(QuizInput::Up);
        assert_eq!(q.selected(), MenuOption::EnterEquation);
        q.handle_input(QuizInput::Down);
        q.handle_input(QuizInput::Down);
        q.handle_input(QuizInput::Down);
        assert_eq!(q.selected(), MenuOption::Exit);
        q.handle_input(QuizInput::Up);
        assert_eq!(q.selected(), MenuOption::ShowResult);
    }

    #[test]
    fn input_buffer_normalizes_comma() {
        let mut q = quiz();
        type_answer(&mut q, "1,5");
        assert_eq!(q.equation().input(), "1.5");
        q.handle_input(QuizInput::Backspace);
        assert_eq!(q.equation().input(), "1.");
    }

    #[test]
    fn other_characters_are_ignored() {
        let mut q = quiz();
        type_answer(&mut q, "1a-e 2");
        assert_eq!(q.equation().input(), "12");
        assert_eq!(q.handle_input(QuizInput::Ignored), Transition::Continue);
    }

    #[test]
    fn typing_only_works_on_the_equation_row() {
        let mut q = quiz();
        type_answer(&mut q, "4");
        q.handle_input(QuizInput::Down);
        type_answer(&mut q, "56");
        q.handle_input(QuizInput::Backspace);
        assert_eq!(q.equation().input(), "4");
    }

    #[test]
    fn wrong_answers_keep_the_equation() {
        let mut q = quiz();
        let question = q.equation().to_string();

        type_answer(&mut q, "0");
        assert_eq!(q.handle_input(QuizInput::Confirm), Transition::Wrong);
        assert_eq!(q.state(), QuizState::ShowingResult(Transition::Wrong));

        // Input is ignored until the banner is dismissed.
        type_answer(&mut q, "9");
        assert_eq!(q.equation().input(), "0");

        q.acknowledge();
        assert_eq!(q.state(), QuizState::EnteringValue);
        assert_eq!(q.equation().to_string(), question);
        assert_eq!(q.equation().attempts(), 1);
    }

    #[test]
    fn attempts_accumulate_until_correct() {
        let mut q = quiz();
        let solution = q.equation().solution().to_string();

        for _ in 0..3 {
            clear_input(&mut q);
            type_answer(&mut q, "0");
            assert_eq!(q.handle_input(QuizInput::Confirm), Transition::Wrong);
            q.acknowledge();
        }

        clear_input(&mut q);
        type_answer(&mut q, &solution);
        assert_eq!(q.handle_input(QuizInput::Confirm), Transition::Valid);
        assert_eq!(q.equation().attempts(), 4);
        assert_eq!(q.session().correct_answers(), 1);

        q.acknowledge();
        assert_eq!(q.session().correct_answers(), 1);
        assert_eq!(q.session().equations_count(), 2);
        assert_eq!(q.equation().attempts(), 0);
        assert_eq!(q.equation().input(), "");
    }

    #[test]
    fn show_result_leaves_input_alone() {
        let mut q = quiz();
        type_answer(&mut q, "12");
        q.handle_input(QuizInput::Down);

        assert_eq!(q.handle_input(QuizInput::Confirm), Transition::ShowResult);
        assert_eq!(q.equation().input(), "12");
        assert_eq!(q.equation().attempts(), 0);

        q.acknowledge();
        assert_eq!(q.selected(), MenuOption::EnterEquation);
        assert_eq!(q.equation().input(), "12");
        assert_eq!(q.session().equations_count(), 1);
    }

    #[test]
    fn selection_sticks_after_valid_answer() {
        let mut q = quiz();
        let solution = q.equation().solution().to_string();
        type_answer(&mut q, &solution);
        assert_eq!(q.handle_input(QuizInput::Confirm), Transition::Valid);
        q.acknowledge();
        assert_eq!(q.selected(), MenuOption::EnterEquation);
    }

    #[test]
    fn exit_is_terminal() {
        let mut q = quiz();
        q.handle_input(QuizInput::Down);
        q.handle_input(QuizInput::Down);
        assert_eq!(q.handle_input(QuizInput::Confirm), Transition::Exit);
        assert!(q.is_exited());

        assert_eq!(q.handle_input(QuizInput::Up), Transition::Continue);
        q.acknowledge();
        assert!(q.is_exited());
        assert_eq!(q.selected(), MenuOption::Exit);
    }
}
