//! Contact form state machine: Idle -> Submitting -> Submitted -> Idle

use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ContactConfig;
use crate::Result;

/// Same shape the browser accepts for an email input
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn looks_like_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| compile_pattern(EMAIL_PATTERN))
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Compile a validation pattern; a bad one is logged and rejects everything
fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "Invalid validation pattern, every value will be rejected");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }

    /// Message is the only multi-line field
    pub fn multiline(self) -> bool {
        self == Field::Message
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("A message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Submitted { reset_at: Instant },
}

/// Snapshot of the fields handed to a `Submitter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<()>;
}

/// Waits for a fixed delay and reports success
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(Duration::from_millis(config.submit_delay_ms))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        info!(from = %submission.email, subject = %submission.subject, "Contact message sent");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    phase: Phase,
    reset_delay: Duration,
}

impl ContactForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            phase: Phase::Idle,
            reset_delay,
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(Duration::from_millis(config.reset_delay_ms))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fields accept input only while idle
    pub fn is_editable(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Append a character; ignored unless idle
    pub fn push(&mut self, field: Field, c: char) {
        if !self.is_editable() || (c == '\n' && !field.multiline()) {
            return;
        }
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self, field: Field) {
        if self.is_editable() {
            self.value_mut(field).pop();
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_editable() {
            *self.value_mut(field) = value.into();
        }
    }

    /// Check every field; reports the first problem in field order
    pub fn validate(&self) -> std::result::Result<Submission, FormError> {
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and enter `Submitting`. On error the form stays idle.
    pub fn begin_submit(&mut self) -> std::result::Result<Submission, FormError> {
        if self.phase != Phase::Idle {
            return Err(FormError::Busy);
        }
        let submission = self.validate()?;
        self.phase = Phase::Submitting;
        Ok(submission)
    }

    /// Record the submitter's outcome. A failure returns to idle with the
    /// fields kept so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<()>, now: Instant) {
        if self.phase != Phase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.phase = Phase::Submitted {
                    reset_at: now + self.reset_delay,
                };
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                self.phase = Phase::Idle;
            }
        }
    }

    /// Clear the form once the success message has been shown long enough.
    /// Returns true when it reset.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Submitted { reset_at } if now >= reset_at => {
                self.clear();
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        for field in Field::ALL {
            self.value_mut(field).clear();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}
