use regex::Regex;
use shared_types::{ContactMatcher, EmailMatcher};

/// `local-part@domain.tld`, final label two or more letters.
pub const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b";

/// Phone shapes, tried in priority order at each position.
pub const CONTACT_PATTERN: &str = r"(?x)
    # international: +CC then two or three digit groups, a group may be parenthesized
    \+[0-9]{1,3}(?:[-.\s]?\(?[0-9]{1,5}\)?){2,3}\b
    # area code in parentheses: (415) 555-2671
    | \([0-9]{2,6}\)\s*[0-9]{1,5}[-.\s]*[0-9]{1,5}[-.\s]*[0-9]{1,5}
    # bare run of ten or more digits, optionally followed by short groups
    | \b[0-9]{10,}(?:[-.][0-9]{1,5}){0,2}\b
";

pub struct RegexEmailMatcher {
    regex: Regex,
}

impl RegexEmailMatcher {
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexEmailMatcher {
    fn default() -> Self {
        Self {
            regex: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }
}

impl EmailMatcher for RegexEmailMatcher {
    fn find_emails(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

pub struct RegexContactMatcher {
    regex: Regex,
}

impl RegexContactMatcher {
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexContactMatcher {
    fn default() -> Self {
        Self {
            regex: Regex::new(CONTACT_PATTERN).expect("contact pattern is valid"),
        }
    }
}

impl ContactMatcher for RegexContactMatcher {
    fn find_contacts(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}
