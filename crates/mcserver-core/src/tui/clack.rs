//! cliclack-backed interaction

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::interaction::{Interaction, SelectOption, TextPrompt};
use colored::Colorize;
use std::io;
use std::sync::Mutex;

/// Escape and Ctrl+C surface from cliclack as `Interrupted`
fn prompt_error(e: io::Error) -> ScaffoldError {
    if e.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::Terminal(e)
    }
}

/// Charm-style inline prompts
#[derive(Default)]
pub struct ClackInteraction {
    spinner: Mutex<Option<cliclack::ProgressBar>>,
}

impl ClackInteraction {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Interaction for ClackInteraction {
    fn text(&self, prompt: TextPrompt) -> ScaffoldResult<String> {
        let mut input = cliclack::input(&prompt.question);
        if let Some(default) = &prompt.default {
            input = input.default_input(default);
        }
        if let Some(validate) = prompt.validate {
            input = input.validate(move |value: &String| validate(value.as_str()));
        }
        input.interact().map_err(prompt_error)
    }

    fn select(
        &self,
        question: &str,
        options: &[SelectOption],
        initial: Option<&str>,
    ) -> ScaffoldResult<String> {
        let mut select = cliclack::select(question);
        for option in options {
            select = select.item(option.value.clone(), &option.label, &option.hint);
        }
        if let Some(initial) = initial {
            select = select.initial_value(initial.to_string());
        }
        select.interact().map_err(prompt_error)
    }

    fn confirm(&self, question: &str, initial: bool) -> ScaffoldResult<bool> {
        cliclack::confirm(question)
            .initial_value(initial)
            .interact()
            .map_err(prompt_error)
    }

    fn section(&self, heading: &str, subheading: Option<&str>) -> ScaffoldResult<()> {
        let line = match subheading {
            Some(sub) => format!("{} {}", heading.green().bold(), sub.dimmed()),
            None => heading.green().bold().to_string(),
        };
        cliclack::log::step(line).map_err(ScaffoldError::Terminal)
    }

    fn step(&self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::step(message.green().to_string()).map_err(ScaffoldError::Terminal)
    }

    fn info(&self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::info(message).map_err(ScaffoldError::Terminal)
    }

    fn warn(&self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::warning(message).map_err(ScaffoldError::Terminal)
    }

    fn success(&self, message: &str) -> ScaffoldResult<()> {
        cliclack::log::success(message).map_err(ScaffoldError::Terminal)
    }

    fn start_progress(&self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.stop("");
            }
        }
    }

    fn stop_progress(&self, message: &str) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.stop(message);
            }
        }
    }

    fn outro(&self, message: &str) -> ScaffoldResult<()> {
        cliclack::outro(message).map_err(ScaffoldError::Terminal)
    }
}
