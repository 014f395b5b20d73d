//! Word-guessing game logic.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// How many wrong guesses the player can afford.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn max_misses(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    /// Body parts revealed at each miss. Entry `i` lists what appears once
    /// the player has missed `i + 1` times.
    fn reveal_steps(self) -> &'static [&'static [BodyPart]] {
        use BodyPart::*;
        match self {
            Difficulty::Easy => &[
                &[Rope, Head],
                &[LeftShoulder, Neck, RightShoulder],
                &[LeftArm],
                &[Body],
                &[RightArm],
                &[Crotch],
                &[LeftHip],
                &[RightHip],
                &[LeftLeg],
                &[RightLeg],
            ],
            Difficulty::Medium => &[
                &[Rope, Head],
                &[LeftShoulder, Neck, RightShoulder],
                &[LeftArm, Body, RightArm],
                &[Crotch],
                &[LeftHip, RightHip],
                &[LeftLeg],
                &[RightLeg],
            ],
            Difficulty::Hard => &[
                &[Rope, Head],
                &[LeftShoulder, Neck, RightShoulder],
                &[LeftArm, Body, RightArm],
                &[LeftHip, Crotch, RightHip],
                &[LeftLeg, RightLeg],
            ],
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Pieces of the hanged figure, drawn by the view at fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Rope,
    Head,
    LeftShoulder,
    Neck,
    RightShoulder,
    LeftArm,
    Body,
    RightArm,
    LeftHip,
    Crotch,
    RightHip,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// `(column, row, glyph)` relative to the top of the rope.
    pub fn glyph(self) -> (u16, u16, &'static str) {
        match self {
            BodyPart::Rope => (1, 0, "│"),
            BodyPart::Head => (0, 1, "(-)"),
            BodyPart::LeftShoulder => (0, 2, "┌"),
            BodyPart::Neck => (1, 2, "█"),
            BodyPart::RightShoulder => (2, 2, "┐"),
            BodyPart::LeftArm => (0, 3, "│"),
            BodyPart::Body => (1, 3, "║"),
            BodyPart::RightArm => (2, 3, "│"),
            BodyPart::LeftHip => (0, 4, "┌"),
            BodyPart::Crotch => (1, 4, "╨"),
            BodyPart::RightHip => (2, 4, "┐"),
            BodyPart::LeftLeg => (0, 5, "┘"),
            BodyPart::RightLeg => (2, 5, "└"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a letter, or the game is already over.
    Ignored,
    /// Letter was guessed before.
    Repeated,
    Hit,
    Miss,
}

/// One round: the hidden phrase and the guesses made against it.
#[derive(Debug, Clone)]
pub struct HangmanGame {
    phrase: String,
    difficulty: Difficulty,
    guessed: Vec<char>,
    misses: u32,
    status: GameStatus,
}

impl HangmanGame {
    pub fn new(phrase: &str, difficulty: Difficulty) -> Self {
        let mut game = Self {
            phrase: phrase.to_uppercase(),
            difficulty,
            guessed: Vec::new(),
            misses: 0,
            status: GameStatus::Playing,
        };
        game.update_status();
        game
    }

    pub fn add_guess(&mut self, guess: char) -> GuessOutcome {
        if self.status != GameStatus::Playing || !guess.is_alphabetic() {
            return GuessOutcome::Ignored;
        }

        let Some(letter) = guess.to_uppercase().next() else {
            return GuessOutcome::Ignored;
        };
        if self.guessed.contains(&letter) {
            return GuessOutcome::Repeated;
        }
        self.guessed.push(letter);

        let outcome = if self.phrase.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.misses += 1;
            GuessOutcome::Miss
        };

        self.update_status();
        outcome
    }

    /// The phrase with unguessed letters replaced by `_`.
    pub fn masked_phrase(&self) -> String {
        self.phrase
            .chars()
            .map(|ch| {
                if ch.is_alphabetic() && !self.guessed.contains(&ch) {
                    '_'
                } else {
                    ch
                }
            })
            .collect()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn guessed_letters(&self) -> String {
        self.guessed.iter().collect()
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Body parts to draw for the current number of misses.
    pub fn visible_parts(&self) -> Vec<BodyPart> {
        self.difficulty
            .reveal_steps()
            .iter()
            .take(self.misses as usize)
            .flat_map(|step| step.iter().copied())
            .collect()
    }

    fn update_status(&mut self) {
        self.status = if !self.masked_phrase().contains('_') {
            GameStatus::Won
        } else if self.misses >= self.difficulty.max_misses() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
    }
}

const DEFAULT_WORDS: &[&str] = &[
    "kilogram",
    "millimetre",
    "decilitre",
    "centimetre",
    "hectare",
    "microscope",
    "calendar",
    "pendulum",
    "telescope",
    "compass",
    "triangle",
    "fraction",
    "equation",
    "thousand",
    "measure",
    "balance",
    "distance",
    "volume",
    "weight",
    "ruler",
];

/// Words the game picks its phrases from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Keeps non-blank entries, trimmed.
    pub fn new<I, S>(words: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(CatalogError::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn random_word<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn guessing_reveals_letters() {
        let mut game = HangmanGame::new("metre", Difficulty::Easy);
        assert_eq!(game.masked_phrase(), "_____");

        assert_eq!(game.add_guess('e'), GuessOutcome::Hit);
        assert_eq!(game.masked_phrase(), "_E__E");
        assert_eq!(game.add_guess('E'), GuessOutcome::Repeated);
        assert_eq!(game.add_guess('7'), GuessOutcome::Ignored);
        assert_eq!(game.misses(), 0);

        for ch in ['m', 't', 'r'] {
            game.add_guess(ch);
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.add_guess('x'), GuessOutcome::Ignored);
    }

    #[test]
    fn misses_lose_the_game() {
        let mut game = HangmanGame::new("gram", Difficulty::Hard);
        for ch in ['x', 'y', 'z', 'q', 'w'] {
            assert_eq!(game.status(), GameStatus::Playing);
            assert_eq!(game.add_guess(ch), GuessOutcome::Miss);
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.misses(), 5);
        assert_eq!(game.guessed_letters(), "XYZQW");
    }

    #[test]
    fn non_letters_stay_visible() {
        let game = HangmanGame::new("deci-litre 2", Difficulty::Medium);
        assert_eq!(game.masked_phrase(), "____-_____ 2");
    }

    #[test]
    fn parts_follow_difficulty_table() {
        let mut easy = HangmanGame::new("a", Difficulty::Easy);
        let mut hard = HangmanGame::new("a", Difficulty::Hard);
        assert!(easy.visible_parts().is_empty());

        for ch in ['x', 'y', 'z'] {
            easy.add_guess(ch);
            hard.add_guess(ch);
        }
        assert_eq!(easy.visible_parts().len(), 6);
        assert_eq!(hard.visible_parts().len(), 8);

        for ch in ['b', 'c'] {
            hard.add_guess(ch);
        }
        assert_eq!(hard.status(), GameStatus::Lost);
        assert_eq!(hard.visible_parts().len(), 13);
    }

    #[test]
    fn every_difficulty_reveals_whole_figure() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let steps = difficulty.reveal_steps();
            assert_eq!(steps.len() as u32, difficulty.max_misses());
            assert_eq!(steps.iter().map(|s| s.len()).sum::<usize>(), 13);
        }
    }

    #[test]
    fn difficulty_parse_and_display() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("normal".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn word_list_rules() {
        assert_eq!(
            WordList::new(["  ", ""]),
            Err(CatalogError::EmptyWordList)
        );
        let list = WordList::new([" gram ", "litre"]).unwrap();
        assert_eq!(list.len(), 2);

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let word = list.random_word(&mut rng);
            assert!(word == "gram" || word == "litre");
        }
        assert!(!WordList::default().is_empty());
    }
}
