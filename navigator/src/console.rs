use std::io::{BufRead, Write};

use route::MIN_ROUTE_SIZE;

use crate::types::nav_error::NavError;
use crate::types::session::Navigator;

/// Text console driving a `Navigator` through the main menu.
///
/// Reads answers from `input` and writes everything to `output`, so a session
/// can run on the terminal or on in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Gives back the output, e.g. to inspect what a session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the main menu until the user exits or the input ends.
    pub fn run(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        match self.main_menu(navigator) {
            Err(NavError::EndOfInput) => {
                navigator.log_debug("Console input closed");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        loop {
            writeln!(self.output, "What would you like to do?:")?;
            writeln!(self.output, "1. Create new route")?;
            writeln!(self.output, "2. Display Route")?;
            writeln!(self.output, "3. Remove airport from route")?;
            writeln!(self.output, "4. Reverse Route")?;
            writeln!(self.output, "5. Exit")?;

            match self.read_choice()? {
                Some(1) => self.insert_new_route(navigator)?,
                Some(2) => self.display_route(navigator)?,
                Some(3) => self.remove_airport_from_route(navigator)?,
                Some(4) => self.reverse_route(navigator)?,
                Some(5) => {
                    writeln!(self.output, "Exiting.")?;
                    return Ok(());
                }
                Some(_) => writeln!(
                    self.output,
                    "Invalid choice, please enter a number between 1-5."
                )?,
                None => {}
            }
        }
    }

    fn insert_new_route(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        for line in navigator.catalog().display() {
            writeln!(self.output, "{}", line)?;
        }

        let available = navigator.catalog().len();
        let mut ordinals: Vec<usize> = Vec::new();
        loop {
            self.prompt("Enter the number of the airport to add to your Route: (-1 to end)")?;
            match self.read_choice()? {
                Some(-1) if ordinals.len() < MIN_ROUTE_SIZE => writeln!(
                    self.output,
                    "You must add at least two airports to the route. Please continue adding airports."
                )?,
                Some(-1) => break,
                Some(choice) if choice > 0 && choice as usize <= available => {
                    ordinals.push(choice as usize)
                }
                Some(choice) => writeln!(
                    self.output,
                    "Invalid airport number, {} is out of range, try again.",
                    choice
                )?,
                None => {}
            }
        }

        let route = navigator.create_route(&ordinals)?;
        writeln!(self.output, "Done Building a New Route named: {}", route.name())?;
        Ok(())
    }

    fn display_route(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        if navigator.routes().is_empty() {
            writeln!(self.output, "There are no routes to display.")?;
            return Ok(());
        }

        let ordinal = self.choose_route(navigator)?;
        for line in navigator.describe_route(ordinal)? {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn remove_airport_from_route(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        if navigator.routes().is_empty() {
            writeln!(self.output, "No routes to remove airports")?;
            return Ok(());
        }

        let route_ordinal = self.choose_route(navigator)?;
        let route = navigator.route(route_ordinal)?;
        if route.size() <= MIN_ROUTE_SIZE {
            writeln!(
                self.output,
                "Cannot remove an airport if there are two or fewer airports in the route."
            )?;
            return Ok(());
        }

        writeln!(self.output, "{}", route.name())?;
        for line in route.display() {
            writeln!(self.output, "{}", line)?;
        }

        let size = route.size();
        loop {
            self.prompt("Which airport would you like to remove? (Enter number): ")?;
            match self.read_choice()? {
                Some(choice) if choice > 0 && choice as usize <= size => {
                    navigator.remove_airport(route_ordinal, choice as usize)?;
                    break;
                }
                Some(_) => writeln!(self.output, "Invalid airport selection. Please try again.")?,
                None => {}
            }
        }

        let route = navigator.route(route_ordinal)?;
        for line in route.display() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "Route named {} updated", route.name())?;
        Ok(())
    }

    fn reverse_route(&mut self, navigator: &mut Navigator) -> Result<(), NavError> {
        if navigator.routes().is_empty() {
            writeln!(self.output, "No routes to reverse.")?;
            return Ok(());
        }

        let ordinal = self.choose_route(navigator)?;
        let route = navigator.reverse_route(ordinal)?;
        writeln!(self.output, "Done reversing route: {}", route.name())?;
        for line in route.display() {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Asks for a route until a valid one is chosen. Returns its ordinal.
    fn choose_route(&mut self, navigator: &Navigator) -> Result<usize, NavError> {
        let names = navigator.route_names();
        loop {
            writeln!(self.output, "Choose a route:")?;
            for (i, name) in names.iter().enumerate() {
                writeln!(self.output, "{}: {}", i + 1, name)?;
            }
            writeln!(self.output, "Which route would you like to use?")?;

            match self.read_choice()? {
                Some(choice) if choice > 0 && choice as usize <= names.len() => {
                    return Ok(choice as usize)
                }
                Some(choice) => {
                    let error = NavError::InvalidSelection {
                        choice,
                        max: names.len(),
                    };
                    writeln!(self.output, "{} Try again.", error)?;
                }
                None => {}
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<(), NavError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads a number, reporting text that does not parse. `None` after such a
    /// report, so the caller asks again.
    fn read_choice(&mut self) -> Result<Option<i64>, NavError> {
        match self.read_number() {
            Ok(choice) => Ok(Some(choice)),
            Err(error @ NavError::InvalidInput(_)) => {
                writeln!(self.output, "{} Try again.", error)?;
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Reads one line and parses it as a number.
    ///
    /// # Errors
    /// `NavError::EndOfInput` once the input is exhausted, `NavError::InvalidInput`
    /// with the trimmed line if it is not a number.
    fn read_number(&mut self) -> Result<i64, NavError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(NavError::EndOfInput);
        }
        let line = line.trim();
        line.parse().map_err(|_| NavError::InvalidInput(line.to_string()))
    }
}
