//! Quote requests sent to an installer

use crate::core::error::ValidationError;
use crate::core::installer::Installer;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MIN_PHONE_DIGITS: usize = 10;
const MIN_DETAILS_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

/// Customer-entered part of a quote request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub project_type: ProjectType,
    pub project_details: String,
    pub preferred_contact: PreferredContact,
}

impl QuoteForm {
    /// Validate every field, collecting one message per failing field
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = IndexMap::new();

        if self.customer_name.trim().is_empty() {
            errors.insert("customerName".to_string(), "Name is required".to_string());
        }

        if self.customer_email.trim().is_empty() {
            errors.insert("customerEmail".to_string(), "Email is required".to_string());
        } else if !is_valid_email(&self.customer_email) {
            errors.insert(
                "customerEmail".to_string(),
                "Invalid email address".to_string(),
            );
        }

        if self.customer_phone.trim().is_empty() {
            errors.insert(
                "customerPhone".to_string(),
                "Phone number is required".to_string(),
            );
        } else if phone_digits(&self.customer_phone) < MIN_PHONE_DIGITS {
            errors.insert(
                "customerPhone".to_string(),
                "Invalid phone number (minimum 10 digits)".to_string(),
            );
        }

        let details = self.project_details.trim();
        if details.is_empty() {
            errors.insert(
                "projectDetails".to_string(),
                "Project details are required".to_string(),
            );
        } else if details.chars().count() < MIN_DETAILS_CHARS {
            errors.insert(
                "projectDetails".to_string(),
                "Please provide more details (minimum 20 characters)".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }

    /// Address the form to an installer
    pub fn into_request(self, installer: &Installer) -> QuoteRequest {
        QuoteRequest {
            installer_id: installer.id.clone(),
            installer_name: installer.name.clone(),
            form: self,
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
    regex.is_match(email)
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// A validated form addressed to one installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub installer_id: String,
    pub installer_name: String,
    #[serde(flatten)]
    pub form: QuoteForm,
}

/// Confirmation handed back once a request is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipt {
    pub quote_number: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: QuoteRequest,
}

impl QuoteReceipt {
    /// Issue a receipt stamped with `now`
    pub fn issue(request: QuoteRequest, now: DateTime<Utc>) -> Self {
        let quote_number = quote_number(now);
        tracing::info!(
            quote_number = %quote_number,
            installer_id = %request.installer_id,
            "quote request accepted"
        );
        Self {
            quote_number,
            submitted_at: now,
            request,
        }
    }
}

/// `QT-` followed by the last six digits of the Unix-millisecond timestamp
pub fn quote_number(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    format!("QT-{:06}", millis)
}
