use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq)]
enum Severity {
    Error,
    // Warning,
}

/// A report about a character the scanner could not place in any token
/// category. Carries the byte position and the offending character.
#[derive(Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    pub position: usize,
    pub character: char,
    message: String,
}

impl Diagnostic {
    pub fn unrecognized_character(position: usize, character: char) -> Self {
        Diagnostic {
            severity: Severity::Error,
            position,
            character,
            message: format!("unrecognized character '{}'", character),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Diagnostic(position: {}, message: {})",
            self.position, self.message
        )
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = if diagnostic.severity == Severity::Error {
            "• Error:".red().bold()
        } else {
            "• Warning:".yellow().bold()
        };
        eprintln!(
            "\n{} {} at position {}\n",
            header, diagnostic.message, diagnostic.position
        );
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        let strings: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        String::from("Vec(") + &strings.join(", ") + ")"
    }
}
