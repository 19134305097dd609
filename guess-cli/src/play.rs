use std::io::{self, BufRead, Write};
use guess_core::GuessSession;

/// Reads a single line, `None` once the input is exhausted.
/// Bytes that are not UTF-8 are kept as replacement characters,
/// which the session then rejects like any other garbage.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line)? {
        0 => Ok(None),
        _ => Ok(Some(String::from_utf8_lossy(&line).into_owned())),
    }
}

fn wants_another_round(answer: &str) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        _ => false,
    }
}

/// Plays rounds until the player declines another one or closes the input.
pub fn play<R: BufRead, W: Write>(session: &mut GuessSession, input: &mut R, output: &mut W) -> io::Result<()> {
    let rules = session.rules().clone();
    writeln!(output, "Guess The Number ({} - {})", rules.lowest(), rules.highest())?;
    writeln!(output, "Enter your guess!")?;

    loop {
        write!(output, "Your Guess: ")?;
        output.flush()?;

        let guess = match read_line(input)? {
            Some(guess) => guess,
            None => break,
        };

        let result = session.submit_guess(&guess);
        writeln!(output, "{}", result.outcome)?;
        writeln!(output, "Attempts Left: {}  Score: {}", result.attempts_remaining, result.score)?;

        if session.is_over() {
            write!(output, "Play again? [y/n] ")?;
            output.flush()?;

            match read_line(input)? {
                Some(answer) if wants_another_round(&answer) => {
                    session.start();
                    writeln!(output, "Enter your guess!")?;
                },
                _ => break,
            }
        }
    }

    writeln!(output)?;
    writeln!(output, "Final Score: {}", session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_core::{FixedSecrets, Rules};
    use std::io::Cursor;

    fn run_bytes(secrets: Vec<i32>, input: &[u8]) -> (GuessSession, String) {
        let mut session = GuessSession::new(Rules::default(), FixedSecrets::new(secrets));
        let mut output = Vec::new();
        play(&mut session, &mut Cursor::new(input), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    fn run(secrets: Vec<i32>, input: &str) -> (GuessSession, String) {
        run_bytes(secrets, input.as_bytes())
    }

    #[test]
    fn hints_lead_to_a_win() {
        let (session, output) = run(vec![50], "30\n70\n50\nn\n");
        assert!(output.contains("Too Low! Try Again."));
        assert!(output.contains("Too High! Try Again."));
        assert!(output.contains("Correct! You win!"));
        assert!(output.contains("Attempts Left: 7  Score: 10"));
        assert!(output.ends_with("Final Score: 10\n"));
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn invalid_input_is_reported() {
        let (session, output) = run(vec![50], "abc\n");
        assert!(output.contains("Please enter a valid number!"));
        assert!(output.contains("Attempts Left: 10  Score: 0"));
        assert_eq!(session.attempts_remaining(), 10);
    }

    #[test]
    fn non_utf8_line_is_just_invalid_input() {
        let (session, output) = run_bytes(vec![50], b"\xff\xfe\n50\nn\n");
        let invalid = output.find("Please enter a valid number!").unwrap();
        let win = output.find("Correct! You win!").unwrap();
        assert!(invalid < win);
        assert_eq!(session.score(), 10);
        assert_eq!(session.attempts_remaining(), 9);
    }

    #[test]
    fn playing_again_keeps_the_score() {
        let (session, output) = run(vec![50, 20], "50\nyes\n20\nY\n");
        assert_eq!(session.score(), 20);
        assert_eq!(session.round(), 3);
        assert!(output.ends_with("Final Score: 20\n"));
    }

    #[test]
    fn losing_reveals_the_secret() {
        let input = "1\n".repeat(10);
        let (session, output) = run(vec![50], &input);
        assert!(output.contains("Game Over! Number was: 50"));
        assert!(session.is_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn closed_input_ends_the_game() {
        let (session, output) = run(vec![50], "");
        assert!(output.ends_with("Final Score: 0\n"));
        assert_eq!(session.attempts_remaining(), 10);
    }
}
