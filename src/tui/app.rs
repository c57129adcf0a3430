//! Workbench application state and logic.

use crate::dispatch::{dispatch, Command, Response};
use crate::logic::{Nibble, Operation};

/// Which operand field receives typed digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
}

/// Workbench application state.
///
/// Only the text being edited lives here. Every calculation and table is
/// produced fresh by the dispatcher.
pub struct WorkbenchApp {
    /// First operand as typed.
    pub a: String,
    /// Second operand as typed.
    pub b: String,
    /// Selected operation.
    pub operation: Operation,
    /// Field currently being edited.
    pub focus: Field,
    /// Output of the last command.
    pub output: String,
    /// Status message to display.
    pub status: String,
    /// Output view scroll offset.
    pub scroll: u16,
    /// Should we quit?
    pub should_quit: bool,
}

impl WorkbenchApp {
    pub fn new() -> Self {
        Self {
            a: String::new(),
            b: String::new(),
            operation: Operation::Add,
            focus: Field::A,
            output: String::new(),
            status: "Type 4 bits for A, Tab to switch, Enter to calculate.".into(),
            scroll: 0,
            should_quit: false,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::A => &mut self.a,
            Field::B => &mut self.b,
        }
    }

    /// Append a 0 or 1 to the focused field, moving on to B once A is full.
    pub fn push_digit(&mut self, c: char) {
        if c != '0' && c != '1' {
            return;
        }
        let field = self.focused_mut();
        if field.len() < Nibble::WIDTH {
            field.push(c);
        }
        if self.focus == Field::A && self.a.len() == Nibble::WIDTH {
            self.focus = Field::B;
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::A => Field::B,
            Field::B => Field::A,
        };
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
        self.status = format!("Operation: {}", operation.name());
    }

    /// Clear both operands and the output.
    pub fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
        self.focus = Field::A;
        self.output.clear();
        self.scroll = 0;
        self.status = "Cleared.".into();
    }

    /// Run a command and show its result.
    pub fn run(&mut self, command: Command) {
        self.scroll = 0;
        match dispatch(&command) {
            Ok(response) => {
                self.status = match &response {
                    Response::Report(report) => format!(
                        "{} {} {} = {}",
                        report.a, report.operation.symbol(), report.b, report.result
                    ),
                    Response::SelfTest(_) if !response.is_success() => "Self-test FAILED.".into(),
                    _ => "Done.".into(),
                };
                self.output = response.to_string();
            }
            Err(e) => {
                self.status = format!("Error: {}", e);
            }
        }
    }

    /// Calculate with the current operands.
    pub fn calculate(&mut self) {
        let command = Command::Calculate {
            a: self.a.clone(),
            op: self.operation.symbol().to_string(),
            b: self.b.clone(),
        };
        self.run(command);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.output.lines().count().saturating_sub(1) as u16;
        if self.scroll < max {
            self.scroll += 1;
        }
    }
}

impl Default for WorkbenchApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the interactive workbench.
pub fn run_workbench() -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    let _restore = TerminalGuard(|| {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    });
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = WorkbenchApp::new();

    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c @ ('0' | '1')) => app.push_digit(c),
                        KeyCode::Char('+') => app.set_operation(Operation::Add),
                        KeyCode::Char('-') => app.set_operation(Operation::Subtract),
                        KeyCode::Backspace => app.backspace(),
                        KeyCode::Tab => app.toggle_focus(),
                        KeyCode::Enter => app.calculate(),
                        KeyCode::Char('x') => app.clear(),
                        KeyCode::Char('g') => app.run(Command::TruthTable(None)),
                        KeyCode::Char('h') => app.run(Command::HalfAdder),
                        KeyCode::Char('f') => app.run(Command::FullAdder),
                        KeyCode::Char('c') => app.run(Command::Complements),
                        KeyCode::Char('a') => app.run(Command::Adder),
                        KeyCode::Char('s') => app.run(Command::AddSubtract),
                        KeyCode::Char('p') => app.run(Command::Properties),
                        KeyCode::Char('t') => app.run(Command::SelfTest),
                        KeyCode::Up => app.scroll_up(),
                        KeyCode::Down => app.scroll_down(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs its closure on drop, so the terminal is restored on every exit path
/// out of [`run_workbench`], including a failed draw or poll.
struct TerminalGuard<F: FnMut()>(F);

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}
