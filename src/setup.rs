use std::collections::BTreeMap;
use std::io;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::git;
use crate::keys;

// The menu accepts exactly these outcomes; free-text input never falls
// through to an implicit default.
enum MenuChoice {
    Select(String),
    Clear,
    Invalid,
}

pub fn run_setup(
    config: &SetupConfig,
    email_flag: Option<&str>,
    connector_id: &str,
) -> Result<(), SetupError> {
    git::check_worktree()?;
    cleanup()?;

    let email = match resolve_email(config, email_flag)? {
        Some(email) => email,
        // "clear" or an unrecognized menu choice: cleanup already ran and
        // there is nothing left to write.
        None => return Ok(()),
    };

    apply(&email, connector_id)
}

pub fn run_clear() -> Result<(), SetupError> {
    git::check_worktree()?;
    cleanup()
}

// No rollback on later failure: a repository can end up cleaned but not
// reconfigured. The local config store has no multi-key transaction to
// lean on.
fn cleanup() -> Result<(), SetupError> {
    for key in keys::CLEANUP_KEYS {
        git::unset_local(key)?;
    }
    Ok(())
}

fn apply(email: &str, connector_id: &str) -> Result<(), SetupError> {
    for (key, value) in keys::signing_config(email, connector_id) {
        git::set_local(key, &value)?;
    }
    Ok(())
}

/// Resolves the email to configure: the flag value when supplied, a
/// free-form prompt when the known-email list is empty, a numbered menu
/// otherwise. `None` means resolution finished without an address to apply.
fn resolve_email(config: &SetupConfig, flag: Option<&str>) -> Result<Option<String>, SetupError> {
    if let Some(email) = flag {
        if !email.is_empty() {
            return validated(email).map(Some);
        }
    }

    if config.emails.is_empty() {
        println!("Enter email address to use:");
        let line = read_line()?;
        return validated(line.trim()).map(Some);
    }

    println!("Enter which email address to use:");
    for (key, email) in &config.emails {
        println!("{}) {}", key, email);
    }
    println!("0) clear");

    let line = read_line()?;
    match parse_menu_choice(line.trim(), &config.emails) {
        MenuChoice::Select(email) => validated(&email).map(Some),
        MenuChoice::Clear => Ok(None),
        MenuChoice::Invalid => {
            println!("Invalid option");
            Ok(None)
        }
    }
}

fn read_line() -> Result<String, SetupError> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| SetupError::PromptFailed(e.to_string()))?;
    Ok(line)
}

fn parse_menu_choice(input: &str, emails: &BTreeMap<String, String>) -> MenuChoice {
    if input == "0" {
        return MenuChoice::Clear;
    }
    match emails.get(input) {
        Some(email) => MenuChoice::Select(email.clone()),
        None => MenuChoice::Invalid,
    }
}

fn validated(email: &str) -> Result<String, SetupError> {
    if is_plausible_email(email) {
        Ok(email.to_string())
    } else {
        Err(SetupError::InvalidEmail(email.to_string()))
    }
}

// Deliberately minimal: both characters present, nothing more. Not RFC
// validation.
fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_emails() -> BTreeMap<String, String> {
        let mut emails = BTreeMap::new();
        emails.insert("1".to_string(), "work@example.com".to_string());
        emails.insert("2".to_string(), "personal@example.org".to_string());
        emails
    }

    #[test]
    fn accepts_strings_with_at_and_dot() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@example.com"));
        assert!(is_plausible_email(".@"));
    }

    #[test]
    fn rejects_strings_missing_at_or_dot() {
        assert!(!is_plausible_email("a.b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn menu_choice_maps_known_selection() {
        match parse_menu_choice("2", &sample_emails()) {
            MenuChoice::Select(email) => assert_eq!(email, "personal@example.org"),
            _ => panic!("expected a selection"),
        }
    }

    #[test]
    fn menu_choice_zero_is_clear() {
        assert!(matches!(
            parse_menu_choice("0", &sample_emails()),
            MenuChoice::Clear
        ));
    }

    #[test]
    fn menu_choice_unknown_is_invalid() {
        assert!(matches!(
            parse_menu_choice("9", &sample_emails()),
            MenuChoice::Invalid
        ));
        assert!(matches!(
            parse_menu_choice("clear", &sample_emails()),
            MenuChoice::Invalid
        ));
    }
}
