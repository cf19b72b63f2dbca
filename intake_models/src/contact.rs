use nutype::nutype;

use crate::email_address::EmailAddress;

/// Value of the `subscribe` form field that requests newsletter enrollment.
pub const SUBSCRIBE_MARKER: &str = "yes";

/// Contact form fields exactly as submitted. Nothing in here has been
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub subscribe: Option<String>,
    pub challenge_token: Option<String>,
}

/// A contact form submission whose required fields are present and whose
/// email address is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: SenderName,
    pub email: EmailAddress,
    pub phone: Option<SenderPhone>,
    pub message: SubmissionMessage,
    pub subscribe_requested: bool,
    pub challenge_token: ChallengeToken,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct SenderName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct SenderPhone(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
)]
pub struct SubmissionMessage(String);

#[nutype(validate(not_empty), derive(Clone, PartialEq, Eq, TryFrom, Deref))]
pub struct ChallengeToken(String);

impl std::fmt::Debug for ChallengeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChallengeToken(***)")
    }
}
