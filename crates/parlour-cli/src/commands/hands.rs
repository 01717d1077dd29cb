use std::io;

use colored::Colorize;
use rand::rngs::StdRng;

use parlour_castle::{Console, LineConsole};
use parlour_hands::{Variant, Verdict, computer_choice, judge, parse_choice};

pub fn run(variant: Variant, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng_from(seed);
    let mut console = LineConsole::new(io::stdin().lock(), io::stdout().lock());
    play_round(variant, &mut rng, &mut console).map_err(|e| e.to_string())
}

/// Show the menu, read a valid choice and settle one round.
///
/// Ends quietly if input runs out before a valid choice.
fn play_round(variant: Variant, rng: &mut StdRng, console: &mut dyn Console) -> io::Result<()> {
    let wording = variant.wording();
    console.say(wording.welcome)?;
    console.say(wording.menu_header)?;
    for (i, hand) in variant.options().iter().enumerate() {
        console.say(&wording.menu_line(i, *hand))?;
    }

    let mut prompt = wording.prompt;
    let player = loop {
        let Some(answer) = console.ask(prompt)? else {
            console.say("")?;
            return Ok(());
        };
        match parse_choice(variant, &answer) {
            Ok(hand) => break hand,
            Err(refusal) => {
                console.say(wording.refusal(&refusal))?;
                prompt = wording.retry_prompt;
            }
        }
    };
    let computer = computer_choice(variant, rng);

    if wording.spaced {
        console.say("")?;
    }
    console.say(&format!("You chose: {}", wording.hand_label(player)))?;
    console.say(&format!("Computer chose: {}", wording.hand_label(computer)))?;
    if wording.spaced {
        console.say("")?;
    }

    let verdict = judge(player, computer);
    let text = wording.verdict(verdict);
    let text = match verdict {
        Verdict::Win => text.green(),
        Verdict::Lose => text.red(),
        Verdict::Draw => text.yellow(),
    };
    console.say(&text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlour_hands::Hand;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn round_with_seed(variant: Variant, input: &str, seed: u64) -> String {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());
        play_round(variant, &mut rng, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn round(variant: Variant, input: &str) -> String {
        round_with_seed(variant, input, 42)
    }

    /// A seed whose first computer throw is `hand`.
    fn seed_throwing(variant: Variant, hand: Hand) -> u64 {
        (0..)
            .find(|seed| computer_choice(variant, &mut StdRng::seed_from_u64(*seed)) == hand)
            .unwrap()
    }

    #[test]
    fn menu_lists_variant_options() {
        let out = round(Variant::Classic, "1\n");
        assert!(out.starts_with(
            "Welcome to Rock, Paper, Scissors!\n\
             Choose your option:\n\
             1. Rock\n2. Scissors\n3. Paper\n\
             Enter the number or name of your choice: "
        ));

        let out = round(Variant::Extended, "1\n");
        assert!(out.starts_with(
            "Welcome to Rock Paper Scissors Lizard Spock!\n\
             Options:\n\
             1 scissors\n2 paper\n3 rock\n4 lizard\n5 spock\n\
             Enter your choice (name or number): "
        ));
    }

    #[test]
    fn valid_choice_settles_a_round() {
        let seed = seed_throwing(Variant::Classic, Hand::Rock);
        let out = round_with_seed(Variant::Classic, "rock\n", seed);
        assert!(out.ends_with(
            "Enter the number or name of your choice: \n\
             You chose: Rock\n\
             Computer chose: Rock\n\
             \n\
             It's a tie!\n"
        ));

        let out = round_with_seed(Variant::Classic, "3\n", seed);
        assert!(out.ends_with("You chose: Paper\nComputer chose: Rock\n\nYou win!\n"));

        let seed = seed_throwing(Variant::Extended, Hand::Spock);
        let out = round_with_seed(Variant::Extended, "rock\n", seed);
        assert!(out.ends_with(
            "Enter your choice (name or number): You chose: rock\n\
             Computer chose: spock\n\
             Computer wins!\n"
        ));

        let seed = seed_throwing(Variant::Extended, Hand::Lizard);
        let out = round_with_seed(Variant::Extended, "4\n", seed);
        assert!(out.ends_with("You chose: lizard\nComputer chose: lizard\nIt's a draw!\n"));
    }

    #[test]
    fn classic_refusals_name_the_mistake() {
        let out = round(Variant::Classic, "lizard\n9\n2\n");
        assert!(out.contains(
            "Enter the number or name of your choice: \
             Invalid input. Please enter a valid number or name.\n"
        ));
        assert!(out.contains(
            "Enter the number or name of your choice: \
             Invalid choice. Please select a valid option.\n"
        ));
        assert!(out.contains("You chose: Scissors\n"));
    }

    #[test]
    fn extended_refusal_switches_prompt() {
        let out = round(Variant::Extended, "banana\n9\n5\n");
        assert_eq!(out.matches("Invalid choice. Please choose again.\n").count(), 2);
        assert_eq!(out.matches("Enter your choice (name or number): ").count(), 1);
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
        assert!(out.contains("You chose: spock\n"));
    }

    #[test]
    fn closed_input_skips_the_round() {
        let out = round(Variant::Classic, "banana\n");
        assert!(!out.contains("Computer chose"));
    }
}
