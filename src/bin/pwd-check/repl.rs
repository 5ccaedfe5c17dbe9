//! Interactive session loop.

use std::io::{self, BufRead, Write};

use pwd_check::{MAX_UI_LENGTH, MIN_LENGTH, Session, StrengthRating, TIPS};
use secrecy::{ExposeSecret, SecretString};

use crate::render;

const HELP: &str = "\
Commands:
  check <password>     rate a password
  save <password>      remember a password for this session
  generate [length]    random password (8-32 characters, default 12)
  count                number of remembered passwords
  tips                 advice for strong passwords
  help                 show this message
  quit                 leave the session";

/// Runs the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, session: &mut Session) -> io::Result<()> {
    writeln!(out, "Password Strength Checker & Generator")?;
    writeln!(out, "Type `help` for the list of commands.")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_start();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        match command {
            "" => continue,
            "check" => check(out, session, &SecretString::new(argument.into()))?,
            "save" => save(out, session, &SecretString::new(argument.into()))?,
            "generate" => generate(out, session, argument.trim())?,
            "count" => writeln!(out, "{}", session.stored_summary())?,
            "tips" => {
                for tip in TIPS {
                    writeln!(out, "{}", render::tip(tip))?;
                }
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => {
                tracing::debug!("unknown command {:?}", other);
                writeln!(out, "Unknown command `{other}`. Type `help` for the list of commands.")?;
            }
        }
    }

    Ok(())
}

pub fn check<W: Write>(out: &mut W, session: &Session, password: &SecretString) -> io::Result<()> {
    match session.check(password) {
        Ok(evaluation) => writeln!(out, "{}", render::alert(evaluation.rating, evaluation.message())),
        Err(e) => writeln!(out, "{}", render::alert(StrengthRating::Weak, &e.to_string())),
    }
}

fn save<W: Write>(out: &mut W, session: &mut Session, password: &SecretString) -> io::Result<()> {
    match session.save(password) {
        Ok(outcome) => {
            writeln!(out, "{}", render::alert(outcome.style(), outcome.message()))?;
            writeln!(out, "{}", session.stored_summary())
        }
        Err(e) => writeln!(out, "{}", render::alert(StrengthRating::Weak, &e.to_string())),
    }
}

fn generate<W: Write>(out: &mut W, session: &Session, argument: &str) -> io::Result<()> {
    let length = if argument.is_empty() {
        pwd_check::DEFAULT_LENGTH
    } else {
        match argument.parse::<usize>() {
            Ok(length) => length,
            Err(_) => {
                return writeln!(out, "Length must be a number, got `{argument}`.");
            }
        }
    };

    if length > MAX_UI_LENGTH {
        return writeln!(
            out,
            "Length must be between {MIN_LENGTH} and {MAX_UI_LENGTH} characters."
        );
    }

    match session.generate(length) {
        Ok(password) => writeln!(out, "Generated Password: {}", password.expose_secret()),
        Err(e) => writeln!(out, "{}", render::alert(StrengthRating::Weak, &e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Session) {
        let mut session = Session::new();
        let mut out = Vec::new();
        run(Cursor::new(script.to_string()), &mut out, &mut session).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_check_command() {
        let (out, _) = run_script("check Abc12345\ncheck Abc123!@\ncheck abc\n");
        assert!(out.contains("Consider adding digits and special characters."));
        assert!(out.contains("This is a strong password!"));
        assert!(out.contains("Password must be at least 8 characters long."));
    }

    #[test]
    fn test_check_without_password() {
        let (out, _) = run_script("check\n");
        assert!(out.contains("Please enter a password."));
    }

    #[test]
    fn test_password_may_contain_spaces() {
        let (out, _) = run_script("check Abc 123 !@\n");
        assert!(out.contains("This is a strong password!"));
    }

    #[test]
    fn test_leading_whitespace_and_tabs() {
        let (out, _) = run_script("  check Abc123!@\ncheck\tAbc12345\n\tcount \n");
        assert!(out.contains("This is a strong password!"));
        assert!(out.contains("Consider adding digits and special characters."));
        assert!(out.contains("Stored Passwords Count: 0/10"));
    }

    #[test]
    fn test_save_and_reuse() {
        let (out, session) = run_script("save Pass1234!\nsave Pass1234!\n");
        assert!(out.contains("Password saved successfully!"));
        assert!(out.contains("This password has already been used! Choose a new one."));
        assert!(out.contains("Stored Passwords Count: 1/10"));
        assert_eq!(session.stored_count(), 1);
    }

    #[test]
    fn test_save_without_password() {
        let (out, session) = run_script("save\n");
        assert!(out.contains("Enter a password first."));
        assert_eq!(session.stored_count(), 0);
    }

    #[test]
    fn test_count_after_overflow() {
        let script: String = (0..11).map(|i| format!("save password-{i}\n")).collect();
        let (out, session) = run_script(&(script + "count\n"));
        assert!(out.trim_end().ends_with("Stored Passwords Count: 10/10"));
        assert_eq!(session.stored_count(), 10);
    }

    #[test]
    fn test_generate_default_length() {
        let (out, _) = run_script("generate\n");
        let line = out
            .lines()
            .find_map(|l| l.strip_prefix("Generated Password: "))
            .expect("a generated password");
        assert_eq!(line.chars().count(), pwd_check::DEFAULT_LENGTH);
    }

    #[test]
    fn test_generate_out_of_range() {
        let (out, _) = run_script("generate 40\ngenerate 5\ngenerate many\n");
        assert!(out.contains("Length must be between 8 and 32 characters."));
        assert!(out.contains("at least 8 characters (requested 5)"));
        assert!(out.contains("Length must be a number, got `many`."));
        assert!(!out.contains("Generated Password"));
    }

    #[test]
    fn test_quit_stops_processing() {
        let (out, session) = run_script("quit\nsave Pass1234!\n");
        assert!(!out.contains("saved"));
        assert_eq!(session.stored_count(), 0);
    }

    #[test]
    fn test_unknown_command() {
        let (out, _) = run_script("frobnicate\n");
        assert!(out.contains("Unknown command `frobnicate`"));
    }
}
