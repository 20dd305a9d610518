use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

// Shape check only, not deliverability: no whitespace or extra `@` on either
// side, and the domain carries at least one dot.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// One contact-form submission. Created per request, consumed exactly once
/// by [`crate::ContactService::submit`], never persisted.
///
/// Every field is defaulted so an incomplete payload deserializes and gets
/// rejected by validation instead of failing at the serde boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl Inquiry {
    /// Required-field presence first, then the address shape; the first
    /// failure wins and nothing else is checked. Company, phone, budget and
    /// message content are unconstrained.
    pub fn validate(&self) -> Result<(), RejectReason> {
        let required = [&self.name, &self.email, &self.service, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(RejectReason::MissingRequiredFields);
        }

        if !EMAIL_RE.is_match(&self.email) {
            return Err(RejectReason::InvalidEmailFormat);
        }

        Ok(())
    }

    /// Optional fields arrive from the form as empty strings; treat those as
    /// absent.
    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.phone)
    }

    pub fn budget(&self) -> Option<&str> {
        non_empty(&self.budget)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Why validation turned a submission away. Dispatch is never attempted for
/// a rejected inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingRequiredFields,
    InvalidEmailFormat,
}

impl RejectReason {
    /// User-actionable text surfaced through the API boundary.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => {
                "Please fill in all required fields (Name, Email, Service, and Message)"
            }
            Self::InvalidEmailFormat => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inquiry() -> Inquiry {
        Inquiry {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            service: "web-development".to_string(),
            message: "We need a new site.".to_string(),
            ..Inquiry::default()
        }
    }

    #[test]
    fn a_complete_inquiry_validates() {
        assert!(valid_inquiry().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        for strip in ["name", "email", "service", "message"] {
            let mut inquiry = valid_inquiry();
            match strip {
                "name" => inquiry.name.clear(),
                "email" => inquiry.email.clear(),
                "service" => inquiry.service.clear(),
                _ => inquiry.message.clear(),
            }
            assert_eq!(
                inquiry.validate(),
                Err(RejectReason::MissingRequiredFields),
                "blank {strip} should reject"
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let inquiry = Inquiry {
            message: "   \n\t".to_string(),
            ..valid_inquiry()
        };
        assert_eq!(inquiry.validate(), Err(RejectReason::MissingRequiredFields));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for email in ["not-an-email", "a@b", "@b.com", "a b@c.com", "a@b@c.com"] {
            let inquiry = Inquiry {
                email: email.to_string(),
                ..valid_inquiry()
            };
            assert_eq!(
                inquiry.validate(),
                Err(RejectReason::InvalidEmailFormat),
                "{email} should reject"
            );
        }
    }

    #[test]
    fn missing_fields_win_over_a_bad_address() {
        let inquiry = Inquiry {
            name: String::new(),
            email: "not-an-email".to_string(),
            ..valid_inquiry()
        };
        assert_eq!(inquiry.validate(), Err(RejectReason::MissingRequiredFields));
    }

    #[test]
    fn empty_optional_fields_read_as_absent() {
        let inquiry = Inquiry {
            company: Some(String::new()),
            phone: Some("  ".to_string()),
            budget: None,
            ..valid_inquiry()
        };
        assert_eq!(inquiry.company(), None);
        assert_eq!(inquiry.phone(), None);
        assert_eq!(inquiry.budget(), None);
    }
}
