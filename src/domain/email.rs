use crate::validation::is_valid_email;

/// Canonical email address: surrounding whitespace is stripped and the
/// address grammar is checked once, at parse time.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: String) -> Result<Email, String> {
        let candidate = raw.trim();
        if !is_valid_email(candidate) {
            return Err(format!("'{candidate}' is not a valid email address"));
        }
        Ok(Email(candidate.to_string()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let email = Email::parse("  a@x.com ".to_string()).unwrap();
        assert_eq!(email.as_ref(), "a@x.com");
    }

    #[test]
    fn parse_rejects_invalid_addresses() {
        assert!(Email::parse("not-an-email".to_string()).is_err());
        assert!(Email::parse(String::new()).is_err());
    }
}
