//! Username derivation for new accounts.

/// Derive a username from an email address.
///
/// The username is everything before the first `@`. An input without `@`
/// is returned whole; registration only checks that the email is present.
///
/// ```
/// use lunev_shop_core::username_from_email;
///
/// assert_eq!(username_from_email("ivan.petrov@mail.ru"), "ivan.petrov");
/// ```
#[must_use]
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_local_part() {
        assert_eq!(username_from_email("anna@example.com"), "anna");
    }

    #[test]
    fn test_first_at_wins() {
        assert_eq!(username_from_email("a@b@c"), "a");
    }

    #[test]
    fn test_without_at_sign() {
        assert_eq!(username_from_email("anna"), "anna");
    }

    #[test]
    fn test_leading_at_gives_empty_username() {
        assert_eq!(username_from_email("@example.com"), "");
    }
}
