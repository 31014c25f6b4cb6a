//! Interactive tour: a single menu loop over line-oriented input.
//!
//! The loop stays in one "awaiting selection" state. Codes `1`-`6` show a
//! screen and return to the menu, `0` ends the tour, anything else is
//! reported inline. Running out of input is an error, not an exit.

pub mod screens;

use std::io::{self, BufRead, Write};

use pizza_demo_core::checks::{ConfigurationChecker, EnvironmentProbe, SystemProbe};
use pizza_demo_core::config::DemoConfig;
use pizza_demo_core::menu::{Menu, MenuChoice};
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::CommandResult;

#[derive(Debug, Error)]
pub enum TourError {
    #[error("input closed while waiting for {waiting_for}")]
    InputClosed { waiting_for: &'static str },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub fn run(config: &DemoConfig) -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut tour = Tour::new(config, &SystemProbe, stdin.lock(), stdout.lock());
    let outcome = tour.run();

    conclude(outcome, &mut io::stderr())
}

/// Maps the end of a tour to an exit status. Failures are reported once on
/// `errors`; the log only carries them at debug level.
fn conclude(outcome: Result<(), TourError>, errors: &mut impl Write) -> CommandResult {
    match outcome {
        Ok(()) => CommandResult::success(String::new()),
        Err(tour_error) => {
            debug!(event_name = "tour.aborted", error = %tour_error, "tour aborted");
            let _ = writeln!(errors, "error: {tour_error}");
            CommandResult::failure(String::new(), 1)
        }
    }
}

pub struct Tour<'a, R, W> {
    menu: Menu,
    checker: ConfigurationChecker,
    probe: &'a dyn EnvironmentProbe,
    pause_after_screen: bool,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Tour<'a, R, W> {
    pub fn new(config: &DemoConfig, probe: &'a dyn EnvironmentProbe, input: R, output: W) -> Self {
        Self {
            menu: Menu::default(),
            checker: ConfigurationChecker::from_config(config),
            probe,
            pause_after_screen: config.tour.pause_after_screen,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), TourError> {
        screens::banner(&mut self.output)?;

        loop {
            screens::menu(&mut self.output, &self.menu)?;
            let prompt = format!("Enter your choice ({}): ", self.menu.code_range());
            let selection = self.prompt_line(&prompt, "a menu selection")?;

            match self.menu.resolve(&selection) {
                Some(MenuChoice::Exit) => {
                    screens::farewell(&mut self.output)?;
                    self.output.flush()?;
                    info!(event_name = "tour.exited", "tour finished");
                    return Ok(());
                }
                Some(choice) => {
                    debug!(
                        event_name = "tour.selection",
                        screen = screens::title(choice),
                        "showing tour screen"
                    );
                    self.show(choice)?;
                    self.pause("\nPress Enter to continue...")?;
                }
                None => {
                    debug!(
                        event_name = "tour.invalid_choice",
                        input_len = selection.trim().chars().count(),
                        "ignoring unrecognized selection"
                    );
                    screens::invalid_choice(&mut self.output, &self.menu)?;
                    self.pause("Press Enter to continue...")?;
                }
            }

            screens::separator(&mut self.output)?;
        }
    }

    fn show(&mut self, choice: MenuChoice) -> Result<(), TourError> {
        let out = &mut self.output;
        match choice {
            MenuChoice::AgentCreator => screens::agent_creator(out)?,
            MenuChoice::ToolBuilder => screens::tool_builder(out)?,
            MenuChoice::KnowledgeBase => screens::knowledge_base(out)?,
            MenuChoice::Ecommerce => screens::ecommerce(out)?,
            MenuChoice::Documentation => screens::documentation(out)?,
            MenuChoice::Configuration => {
                let report = self.checker.run(self.probe);
                screens::configuration(out, &report)?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn pause(&mut self, prompt: &str) -> Result<(), TourError> {
        if !self.pause_after_screen {
            return Ok(());
        }
        self.prompt_line(prompt, "an acknowledgement").map(|_| ())
    }

    fn prompt_line(
        &mut self,
        prompt: &str,
        waiting_for: &'static str,
    ) -> Result<String, TourError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TourError::InputClosed { waiting_for });
        }
        Ok(line)
    }
}
