//! Full quiz loop runs against a scripted terminal.
//!
//! Every test builds two quizzes from the same seed: one is driven by the
//! view, the other tells the test which equation is on screen.

use unitdrill_core::{Catalog, MenuOption, Quiz, QuizState, Session, Transition};
use unitdrill_tui::scripted::ScriptedSurface;
use unitdrill_tui::views::unit_quiz;
use unitdrill_tui::{run_app, AppOptions, Key, View};

const SEED: u64 = 42;

// Rows for the metric catalog: legend rows 4..=13, menu from row 16.
const EQUATION_ROW: u16 = 20;
const SHOW_ANSWER_ROW: u16 = 22;
const EXIT_ROW: u16 = 23;
const EQUATIONS_ROW: u16 = 27;
const CORRECT_ROW: u16 = 28;

fn quiz() -> Quiz {
    Quiz::new(Session::seeded(Catalog::metric(), SEED))
}

fn solution() -> String {
    quiz().equation().solution().to_string()
}

fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

/// Run the view over `keys`; the script ends with Esc unless the caller
/// wants to stop mid-loop.
fn run(keys: Vec<Key>) -> (ScriptedSurface, Quiz) {
    let mut quiz = quiz();
    let mut surface = ScriptedSurface::new(80, 30, keys);
    let _ = unit_quiz::run(&mut surface, &mut quiz);
    (surface, quiz)
}

fn with_esc(mut keys: Vec<Key>) -> Vec<Key> {
    keys.push(Key::Esc);
    keys
}

#[test]
fn first_frame() {
    let (surface, quiz) = run(vec![Key::Esc]);
    let equation = quiz.equation();

    assert!(surface.contains("U N I T   C O N V E R S I O N"));
    assert!(surface.line(EQUATION_ROW).starts_with("    → "));
    let target = equation.to_unit().symbol(equation.measure());
    assert!(surface.line(EQUATION_ROW).ends_with(&format!("→ {target} =")));
    assert_eq!(surface.line(SHOW_ANSWER_ROW), "        Show answer");
    assert_eq!(surface.line(EXIT_ROW), "        Exit");
    assert_eq!(surface.line(EQUATIONS_ROW), "   Equations: 0");
    assert_eq!(surface.line(CORRECT_ROW), "   Correct:   0");
}

#[test]
fn equation_row_shows_quantity_and_units() {
    let (surface, quiz) = run(vec![Key::Esc]);
    assert_eq!(
        surface.line(EQUATION_ROW).trim_start(),
        format!("→   {} =", quiz.equation())
    );
}

#[test]
fn correct_answer_advances_and_counts() {
    let mut keys = typed(&solution());
    keys.push(Key::Enter);
    let (surface, quiz) = run(keys);

    // Stopped while the banner is up.
    assert_eq!(quiz.state(), QuizState::ShowingResult(Transition::Valid));
    assert!(surface.line(EQUATION_ROW).contains(" BRAVO!  Got it on the first try!"));
    assert!(!surface.is_cursor_visible());
}

#[test]
fn banner_is_cleared_and_statistics_update() {
    let mut keys = typed(&solution());
    keys.push(Key::Enter);
    keys.push(Key::Char(' '));
    let (surface, quiz) = run(with_esc(keys));

    assert_eq!(quiz.session().equations_count(), 2);
    assert_eq!(quiz.session().correct_answers(), 1);
    assert!(!surface.contains("BRAVO"));
    assert_eq!(surface.line(EQUATIONS_ROW), "   Equations: 1");
    assert_eq!(surface.line(CORRECT_ROW), "   Correct:   1 (100%)");
    assert_eq!(quiz.equation().input(), "");
}

#[test]
fn wrong_answer_keeps_equation_and_counts_attempts() {
    let question = quiz().equation().to_string();
    let mut keys = typed("0");
    keys.push(Key::Enter);
    keys.push(Key::Enter);
    keys.push(Key::Enter);
    keys.push(Key::Enter);
    keys.push(Key::Backspace);
    keys.extend(typed(&solution()));
    keys.push(Key::Enter);
    let (surface, quiz) = run(keys);

    assert_eq!(quiz.equation().to_string(), question);
    assert_eq!(quiz.equation().attempts(), 3);
    assert!(surface.contains(" BRAVO!  Got it in 3 attempts"));
}

#[test]
fn wrong_banner_appears_after_input() {
    let mut keys = typed("12");
    keys.push(Key::Enter);
    let (surface, _) = run(keys);
    assert!(surface.line(EQUATION_ROW).ends_with("= 12  Wrong!"));
}

#[test]
fn shorter_input_leaves_no_stale_tail() {
    let mut keys = typed("123456");
    keys.extend([Key::Backspace; 5]);
    let (surface, quiz) = run(with_esc(keys));

    assert_eq!(quiz.equation().input(), "1");
    let line = surface.line(EQUATION_ROW);
    assert_eq!(line.rsplit(" = ").next(), Some("1"));
}

#[test]
fn show_answer_then_back_to_input() {
    let quiz_before = quiz();
    let answer = format!(
        "{} {}",
        quiz_before.equation().solution(),
        quiz_before
            .equation()
            .to_unit()
            .symbol(quiz_before.equation().measure())
    );

    let keys = vec![Key::Down, Key::Enter];
    let (surface, quiz) = run(keys);
    assert_eq!(quiz.selected(), MenuOption::ShowResult);
    assert!(surface.line(SHOW_ANSWER_ROW).contains(&answer));
    assert!(surface.line(SHOW_ANSWER_ROW).starts_with("    →   Show answer"));

    let keys = vec![Key::Down, Key::Enter, Key::Char('k'), Key::Esc];
    let (surface, quiz) = run(keys);
    assert_eq!(quiz.selected(), MenuOption::EnterEquation);
    assert_eq!(quiz.session().equations_count(), 1);
    assert_eq!(surface.line(SHOW_ANSWER_ROW), "        Show answer");
    assert!(surface.line(EQUATION_ROW).starts_with("    → "));
}

#[test]
fn cursor_follows_selection() {
    let (surface, _) = run(typed("7"));
    let (row, col) = surface_cursor(&surface);
    assert_eq!(row, EQUATION_ROW);
    assert_eq!(col as usize, surface.line(EQUATION_ROW).chars().count());
    assert!(surface.is_cursor_visible());

    let (surface, _) = run(vec![Key::Down, Key::Down]);
    assert_eq!(surface_cursor(&surface), (EXIT_ROW, 24));
    assert!(!surface.is_cursor_visible());
    assert!(surface.line(EXIT_ROW).starts_with("    →   Exit"));
}

#[test]
fn typing_on_other_rows_is_ignored() {
    let mut keys = vec![Key::Down];
    keys.extend(typed("99"));
    keys.push(Key::Up);
    keys.extend(typed("5"));
    let (_, quiz) = run(with_esc(keys));
    assert_eq!(quiz.equation().input(), "5");
}

#[test]
fn exit_row_ends_the_view() {
    let mut quiz = quiz();
    let mut surface = ScriptedSurface::new(80, 30, [Key::Down, Key::Down, Key::Enter]);
    unit_quiz::run(&mut surface, &mut quiz).unwrap();
    assert!(quiz.is_exited());
    assert_eq!(surface.remaining_keys(), 0);
}

#[test]
fn app_collects_one_summary_per_quiz_run() {
    let options = AppOptions {
        seed: Some(SEED),
        start: View::UnitQuiz,
        ..AppOptions::default()
    };
    let mut surface = ScriptedSurface::new(80, 30, [Key::Down, Key::Down, Key::Enter]);
    let summary = run_app(&mut surface, &options).unwrap();

    assert_eq!(summary.quiz_sessions.len(), 1);
    let session = &summary.quiz_sessions[0];
    assert_eq!(session.equations, 0);
    assert_eq!(session.correct_answers, 0);
    assert_eq!(session.accuracy_percent, None);
}

fn surface_cursor(surface: &ScriptedSurface) -> (u16, u16) {
    use unitdrill_tui::Surface;
    surface.cursor_position()
}
