//! Hands, rule tables and round resolution.

use std::fmt;

use log::trace;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{HandsError, HandsResult};

/// A hand a player can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// Crushes scissors and lizard.
    Rock,
    /// Covers rock, disproves spock.
    Paper,
    /// Cuts paper, decapitates lizard.
    Scissors,
    /// Eats paper, poisons spock.
    Lizard,
    /// Smashes scissors, vaporizes rock.
    Spock,
}

impl Hand {
    /// Lowercase name, as typed by the player.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Lizard => "lizard",
            Self::Spock => "spock",
        }
    }

    /// The two hands this hand defeats.
    pub fn defeats(self) -> [Hand; 2] {
        match self {
            Self::Rock => [Self::Lizard, Self::Scissors],
            Self::Paper => [Self::Rock, Self::Spock],
            Self::Scissors => [Self::Lizard, Self::Paper],
            Self::Lizard => [Self::Spock, Self::Paper],
            Self::Spock => [Self::Scissors, Self::Rock],
        }
    }

    /// Whether this hand wins against `other`.
    pub fn beats(self, other: Hand) -> bool {
        self.defeats().contains(&other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Rock, paper, scissors.
    Classic,
    /// Rock, paper, scissors, lizard, spock.
    Extended,
}

impl Variant {
    /// Options in menu order.
    pub fn options(self) -> &'static [Hand] {
        match self {
            Self::Classic => &[Hand::Rock, Hand::Scissors, Hand::Paper],
            Self::Extended => &[
                Hand::Scissors,
                Hand::Paper,
                Hand::Rock,
                Hand::Lizard,
                Hand::Spock,
            ],
        }
    }
}

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The player's hand beats the computer's.
    Win,
    /// The computer's hand beats the player's.
    Lose,
    /// Both threw the same hand.
    Draw,
}

/// Read a player's choice as a 1-based menu number or an option name.
///
/// A number outside the menu is [`HandsError::NoSuchNumber`]; anything else
/// that names no option is [`HandsError::UnknownName`].
pub fn parse_choice(variant: Variant, input: &str) -> HandsResult<Hand> {
    let answer = input.trim().to_lowercase();
    let options = variant.options();

    if !answer.is_empty() && answer.bytes().all(|b| b.is_ascii_digit()) {
        return answer
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|i| options.get(i))
            .copied()
            .ok_or(HandsError::NoSuchNumber(answer));
    }

    options
        .iter()
        .copied()
        .find(|hand| hand.name() == answer)
        .ok_or(HandsError::UnknownName(answer))
}

/// Decide a round.
pub fn judge(player: Hand, computer: Hand) -> Verdict {
    if player == computer {
        Verdict::Draw
    } else if player.beats(computer) {
        Verdict::Win
    } else {
        Verdict::Lose
    }
}

/// Pick the computer's hand uniformly from the variant's options.
pub fn computer_choice(variant: Variant, rng: &mut StdRng) -> Hand {
    let options = variant.options();
    let hand = options[rng.random_range(0..options.len())];
    trace!("computer throws {hand}");
    hand
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn classic_rules() {
        assert_eq!(judge(Hand::Rock, Hand::Scissors), Verdict::Win);
        assert_eq!(judge(Hand::Scissors, Hand::Paper), Verdict::Win);
        assert_eq!(judge(Hand::Paper, Hand::Rock), Verdict::Win);
        assert_eq!(judge(Hand::Rock, Hand::Paper), Verdict::Lose);
        assert_eq!(judge(Hand::Paper, Hand::Paper), Verdict::Draw);
    }

    #[test]
    fn extended_rules() {
        assert_eq!(judge(Hand::Lizard, Hand::Spock), Verdict::Win);
        assert_eq!(judge(Hand::Spock, Hand::Rock), Verdict::Win);
        assert_eq!(judge(Hand::Paper, Hand::Spock), Verdict::Win);
        assert_eq!(judge(Hand::Rock, Hand::Lizard), Verdict::Win);
        assert_eq!(judge(Hand::Scissors, Hand::Lizard), Verdict::Win);
        assert_eq!(judge(Hand::Lizard, Hand::Rock), Verdict::Lose);
    }

    #[test]
    fn every_pair_has_exactly_one_winner() {
        let all = Variant::Extended.options();
        for &a in all {
            for &b in all {
                if a != b {
                    assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn parse_by_number_follows_menu_order() {
        assert_eq!(parse_choice(Variant::Classic, "1"), Ok(Hand::Rock));
        assert_eq!(parse_choice(Variant::Classic, "2"), Ok(Hand::Scissors));
        assert_eq!(parse_choice(Variant::Classic, "3"), Ok(Hand::Paper));
        assert_eq!(parse_choice(Variant::Extended, "1"), Ok(Hand::Scissors));
        assert_eq!(parse_choice(Variant::Extended, "5"), Ok(Hand::Spock));
    }

    #[test]
    fn parse_by_name_ignores_case_and_space() {
        assert_eq!(parse_choice(Variant::Extended, "  Lizard "), Ok(Hand::Lizard));
        assert_eq!(parse_choice(Variant::Classic, "PAPER"), Ok(Hand::Paper));
    }

    #[test]
    fn parse_rejects_unknown_options() {
        assert_eq!(
            parse_choice(Variant::Classic, "spock"),
            Err(HandsError::UnknownName("spock".to_string()))
        );
        assert_eq!(
            parse_choice(Variant::Classic, "4"),
            Err(HandsError::NoSuchNumber("4".to_string()))
        );
        assert!(matches!(
            parse_choice(Variant::Classic, "0"),
            Err(HandsError::NoSuchNumber(_))
        ));
        assert!(matches!(
            parse_choice(Variant::Classic, "99999999999999999999999"),
            Err(HandsError::NoSuchNumber(_))
        ));
        assert!(matches!(
            parse_choice(Variant::Extended, "-1"),
            Err(HandsError::UnknownName(_))
        ));
        assert!(parse_choice(Variant::Extended, "").is_err());
    }

    #[test]
    fn computer_only_throws_variant_options() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Hand> = (0..200)
            .map(|_| computer_choice(Variant::Classic, &mut rng))
            .collect();
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&Hand::Lizard));
        assert!(!seen.contains(&Hand::Spock));
    }

    #[test]
    fn hand_serializes_lowercase() {
        let json = serde_json::to_string(&Hand::Spock).unwrap();
        assert_eq!(json, "\"spock\"");
        let back: Variant = serde_json::from_str("\"extended\"").unwrap();
        assert_eq!(back, Variant::Extended);
    }
}
