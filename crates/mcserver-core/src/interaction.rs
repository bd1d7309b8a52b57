//! User interaction port
//!
//! Workflows ask questions and report progress through this trait. The
//! cliclack implementation lives in `tui`; tests script the answers.
//! Every question method returns `ScaffoldError::Cancelled` when the user
//! backs out.

use crate::error::ScaffoldResult;

/// Returns an error message for invalid input
pub type TextValidator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Free-text question
pub struct TextPrompt {
    pub question: String,
    /// Used when the user submits an empty answer
    pub default: Option<String>,
    pub validate: Option<TextValidator>,
}

impl TextPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            default: None,
            validate: None,
        }
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validator));
        self
    }

    /// Run the validator, if any
    pub fn check(&self, value: &str) -> Result<(), String> {
        match &self.validate {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

/// One entry of a select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub hint: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: String::new(),
        }
    }
}

/// Questions and progress output
pub trait Interaction: Send + Sync {
    /// Ask for free text
    fn text(&self, prompt: TextPrompt) -> ScaffoldResult<String>;

    /// Ask the user to pick one option; returns its value
    fn select(
        &self,
        question: &str,
        options: &[SelectOption],
        initial: Option<&str>,
    ) -> ScaffoldResult<String>;

    /// Ask a yes/no question
    fn confirm(&self, question: &str, initial: bool) -> ScaffoldResult<bool>;

    /// Open a new section of output
    fn section(&self, heading: &str, subheading: Option<&str>) -> ScaffoldResult<()>;

    /// Mark a section as finished
    fn step(&self, message: &str) -> ScaffoldResult<()>;

    fn info(&self, message: &str) -> ScaffoldResult<()>;

    fn warn(&self, message: &str) -> ScaffoldResult<()>;

    fn success(&self, message: &str) -> ScaffoldResult<()>;

    /// Start a spinner for a long-running step
    fn start_progress(&self, message: &str);

    /// Stop the running spinner, leaving `message` behind
    fn stop_progress(&self, message: &str);

    /// Final line of output
    fn outro(&self, message: &str) -> ScaffoldResult<()>;
}
