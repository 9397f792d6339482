use once_cell::sync::Lazy;
use regex::Regex;

// Practical upper bound from the mail RFCs; anything longer is junk input.
const MAX_EMAIL_BYTES: usize = 254;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]._%+-]+@[[:alnum:]-]+(\.[[:alnum:]-]+)+$").unwrap());

/// True for `local@host` where the host has at least one dot-separated label
/// after its first. Deliverability is the mail server's problem; this only
/// screens out strings that cannot be addresses.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_BYTES && EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn rejects_oversized_input() {
        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_BYTES));
        assert!(!is_valid_email(&long));
    }
}
