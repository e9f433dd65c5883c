//! Contact field extraction
//!
//! Emails and phone numbers are pulled out of flattened resume text with
//! regular expressions behind the [`EmailMatcher`] / [`ContactMatcher`]
//! traits. Every candidate is kept in document order; the report only uses
//! the first one of each, normalized:
//!
//! - email: all whitespace removed
//! - contact: every non-digit removed

mod matchers;

pub use matchers::{RegexContactMatcher, RegexEmailMatcher, CONTACT_PATTERN, EMAIL_PATTERN};

use shared_types::{ContactMatcher, EmailMatcher};

/// All candidates found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub emails: Vec<String>,
    pub contacts: Vec<String>,
}

impl ContactFields {
    pub fn canonical_email(&self) -> String {
        self.emails
            .first()
            .map(|email| canonicalize_email(email))
            .unwrap_or_default()
    }

    pub fn canonical_contact(&self) -> String {
        self.contacts
            .first()
            .map(|contact| canonicalize_contact(contact))
            .unwrap_or_default()
    }
}

pub fn canonicalize_email(candidate: &str) -> String {
    candidate.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn canonicalize_contact(candidate: &str) -> String {
    candidate.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub struct FieldExtractor {
    email: Box<dyn EmailMatcher>,
    contact: Box<dyn ContactMatcher>,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::with_matchers(
            Box::new(RegexEmailMatcher::default()),
            Box::new(RegexContactMatcher::default()),
        )
    }

    pub fn with_matchers(email: Box<dyn EmailMatcher>, contact: Box<dyn ContactMatcher>) -> Self {
        Self { email, contact }
    }

    pub fn extract(&self, text: &str) -> ContactFields {
        ContactFields {
            emails: self.email.find_emails(text),
            contacts: self.contact.find_contacts(text),
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
