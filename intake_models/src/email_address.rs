use std::{str::FromStr, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose `local@domain.tld` shape check used for addresses entered by
/// visitors.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// An email address entered by a visitor.
#[nutype(
    validate(regex = EMAIL_ADDRESS_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize)
)]
pub struct EmailAddress(String);

/// A configured mailbox, optionally with a display name, e.g.
/// `Jane Doe <jane@example.com>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_address_shape() {
        for (input, valid) in [
            ("max.mustermann@example.de", true),
            ("a@b.c", true),
            ("user+tag@mail.example.com", true),
            ("", false),
            ("plainaddress", false),
            ("missing-at.example.com", false),
            ("no-tld@example", false),
            ("two@@example.com", false),
            ("spa ce@example.com", false),
            ("@example.com", false),
        ] {
            assert_eq!(
                EmailAddress::try_new(input.to_owned()).is_ok(),
                valid,
                "{input:?}"
            );
        }
    }

    #[test]
    fn mailbox_with_name() {
        let mailbox: EmailAddressWithName = "Jane Doe <jane@example.com>".parse().unwrap();
        assert_eq!(mailbox.0.email.to_string(), "jane@example.com");
        assert_eq!(mailbox.0.name.as_deref(), Some("Jane Doe"));
        assert_eq!(mailbox.to_string(), "Jane Doe <jane@example.com>");
    }

    #[test]
    fn mailbox_with_ampersand_in_name() {
        let mailbox: EmailAddressWithName =
            "Valiant Vineyards Winery & Distillery <noreply@valiantvineyards.us>"
                .parse()
                .unwrap();
        assert_eq!(
            mailbox.0.name.as_deref(),
            Some("Valiant Vineyards Winery & Distillery")
        );
        assert_eq!(
            mailbox.to_string(),
            "Valiant Vineyards Winery & Distillery <noreply@valiantvineyards.us>"
        );
    }

    #[test]
    fn mailbox_without_name() {
        let mailbox: EmailAddressWithName = "jane@example.com".parse().unwrap();
        assert_eq!(mailbox.0.name, None);
        assert_eq!(mailbox.to_string(), "jane@example.com");
    }
}
