// ── Sign-up form rules ──
//
// Blank fields (empty or whitespace only) are reported together as one
// message. After that the checks stop at the first failure: the password
// must match its confirmation and be at least eight characters long.

use roombook_api::UserCommand;
use secrecy::{ExposeSecret, SecretString};

use super::{ValidationFailed, ValidationOutcome};

pub const FIELDS_REQUIRED: &str = "All fields must be filled";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Raw values from a sign-up form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// A sign-up that passed validation. The confirmation is gone.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

impl RegistrationRequest {
    /// Request body for `POST users`.
    pub fn to_command(&self) -> UserCommand {
        UserCommand {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.expose_secret().to_owned(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate(form: &RegistrationForm) -> ValidationOutcome<RegistrationRequest> {
    let password = form.password.expose_secret();
    let confirmation = form.confirm_password.expose_secret();

    if [
        form.first_name.as_str(),
        form.last_name.as_str(),
        form.email.as_str(),
        password,
        confirmation,
    ]
    .into_iter()
    .any(is_blank)
    {
        return Err(ValidationFailed::single(FIELDS_REQUIRED));
    }
    if password != confirmation {
        return Err(ValidationFailed::single(PASSWORD_MISMATCH));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationFailed::single(PASSWORD_TOO_SHORT));
    }

    Ok(RegistrationRequest {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn form(password: &str, confirmation: &str) -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: secret(password),
            confirm_password: secret(confirmation),
        }
    }

    #[test]
    fn blank_fields_give_one_message() {
        let mut blank = form("", "");
        blank.first_name = "   ".into();
        blank.email = String::new();
        let err = validate(&blank).unwrap_err();
        assert_eq!(err.messages(), [FIELDS_REQUIRED]);
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        let err = validate(&form("abc", "abd")).unwrap_err();
        assert_eq!(err.messages(), [PASSWORD_MISMATCH]);
    }

    #[test]
    fn short_password_is_rejected() {
        let err = validate(&form("abc", "abc")).unwrap_err();
        assert_eq!(err.messages(), [PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn seven_character_password_is_too_short() {
        let err = validate(&form("abc1234", "abc1234")).unwrap_err();
        assert_eq!(err.messages(), [PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn eight_character_password_with_wrong_confirmation_mismatches() {
        let err = validate(&form("abcdefgh", "abcdefghX")).unwrap_err();
        assert_eq!(err.messages(), [PASSWORD_MISMATCH]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Seven characters, fourteen bytes.
        let err = validate(&form("ééééééé", "ééééééé")).unwrap_err();
        assert_eq!(err.first(), Some(PASSWORD_TOO_SHORT));
        assert!(validate(&form("éééééééé", "éééééééé")).is_ok());
    }

    #[test]
    fn valid_form_drops_confirmation() {
        let request = validate(&form("analytical", "analytical")).unwrap();
        let command = request.to_command();
        assert_eq!(command.email, "ada@example.com");
        assert_eq!(command.password, "analytical");
    }
}
