//! Per-game table text: menus, prompts, refusals and verdicts.
//!
//! The two games were written separately and word things differently;
//! each keeps its own phrasing.

use crate::error::HandsError;
use crate::hand::{Hand, Variant, Verdict};

/// All the text one game shows the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wording {
    /// Welcome line.
    pub welcome: &'static str,
    /// Line above the option menu.
    pub menu_header: &'static str,
    /// Between an option's number and its name in the menu.
    pub menu_separator: &'static str,
    /// Prompt for the first answer.
    pub prompt: &'static str,
    /// Prompt after a refused answer.
    pub retry_prompt: &'static str,
    /// Refusal for a number outside the menu.
    pub bad_number: &'static str,
    /// Refusal for input that names no option.
    pub bad_name: &'static str,
    /// Whether option names are shown capitalized.
    pub capitalize: bool,
    /// Whether blank lines set off the choices and the verdict.
    pub spaced: bool,
    /// Verdict texts for win, lose and draw.
    pub verdicts: [&'static str; 3],
}

const CLASSIC: Wording = Wording {
    welcome: "Welcome to Rock, Paper, Scissors!",
    menu_header: "Choose your option:",
    menu_separator: ". ",
    prompt: "Enter the number or name of your choice: ",
    retry_prompt: "Enter the number or name of your choice: ",
    bad_number: "Invalid choice. Please select a valid option.",
    bad_name: "Invalid input. Please enter a valid number or name.",
    capitalize: true,
    spaced: true,
    verdicts: ["You win!", "You lose!", "It's a tie!"],
};

const EXTENDED: Wording = Wording {
    welcome: "Welcome to Rock Paper Scissors Lizard Spock!",
    menu_header: "Options:",
    menu_separator: " ",
    prompt: "Enter your choice (name or number): ",
    retry_prompt: "Enter your choice: ",
    bad_number: "Invalid choice. Please choose again.",
    bad_name: "Invalid choice. Please choose again.",
    capitalize: false,
    spaced: false,
    verdicts: ["You win!", "Computer wins!", "It's a draw!"],
};

impl Variant {
    /// The text this game shows the player.
    pub fn wording(self) -> &'static Wording {
        match self {
            Self::Classic => &CLASSIC,
            Self::Extended => &EXTENDED,
        }
    }
}

impl Wording {
    /// How a hand is named on screen.
    pub fn hand_label(&self, hand: Hand) -> String {
        let name = hand.name();
        if !self.capitalize {
            return name.to_string();
        }
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// One menu line; `index` is 0-based.
    pub fn menu_line(&self, index: usize, hand: Hand) -> String {
        format!("{}{}{}", index + 1, self.menu_separator, self.hand_label(hand))
    }

    /// Refusal shown for a rejected answer.
    pub fn refusal(&self, error: &HandsError) -> &'static str {
        match error {
            HandsError::NoSuchNumber(_) => self.bad_number,
            HandsError::UnknownName(_) => self.bad_name,
        }
    }

    /// Verdict text for the player.
    pub fn verdict(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Win => self.verdicts[0],
            Verdict::Lose => self.verdicts[1],
            Verdict::Draw => self.verdicts[2],
        }
    }
}
