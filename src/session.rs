use crate::environment::Environment;
use crate::evaluating::evaluate_statement;
use crate::formatting::format_value;
use crate::scanning::Scanner;
use std::io::{self, Write};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub statements: usize,
    pub failures: usize,
}

pub struct Session {
    environment: Environment,
}

impl Session {
    pub fn new(environment: Environment) -> Self {
        Self{environment}
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// A failed statement loses the rest of its line.
    pub fn run<S: Scanner + ?Sized, W: Write>(&mut self, scanner: &mut S, out: &mut W) -> io::Result<Summary> {
        let mut summary = Summary::default();

        loop {
            scanner.skip_blanks();
            match scanner.peek() {
                None => break,
                Some('\n' | '\r') => {
                    scanner.advance();
                    continue;
                },
                Some(_) => {},
            }

            summary.statements += 1;
            match evaluate_statement(&mut *scanner, &mut self.environment) {
                Ok(value) => writeln!(out, "= {}", format_value(value))?,
                Err(error) => {
                    summary.failures += 1;
                    writeln!(out, "{}: {}", error.kind(), error)?;
                    scanner.discard_line();
                },
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::standard_environment;
    use crate::scanning::{StreamScanner, StringScanner};
    use pretty_assertions::assert_eq;

    fn transcript(session: &mut Session, input: &str) -> (String, Summary) {
        let mut out = Vec::new();
        let summary = session.run(&mut StringScanner::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn prints_each_result() {
        let mut session = Session::new(standard_environment().unwrap());
        let (output, summary) = transcript(&mut session, "1+2\n5>x\nx*2\n");
        assert_eq!(output, "= 3\n= 5\n= 10\n");
        assert_eq!(summary, Summary{statements: 3, failures: 0});
    }

    #[test]
    fn several_statements_share_a_line() {
        let mut session = Session::new(standard_environment().unwrap());
        let (output, _) = transcript(&mut session, "1 2 pi\n");
        assert_eq!(output, "= 1\n= 2\n= 3.14159\n");
    }

    #[test]
    fn failures_discard_the_rest_of_the_line() {
        let mut session = Session::new(standard_environment().unwrap());
        let (output, summary) = transcript(&mut session, "foo 1 2\n3.\n(1\n7\n");
        assert_eq!(output, "execution error: identifier: undefined identifier: foo\n\
                            parse error: number: expected digit after decimal point, got '\\n'\n\
                            parse error: primary: expected ')', got '\\n'\n\
                            = 7\n");
        assert_eq!(summary, Summary{statements: 4, failures: 3});
    }

    #[test]
    fn blank_lines_print_nothing() {
        let mut session = Session::new(standard_environment().unwrap());
        let (output, summary) = transcript(&mut session, "\n  \t\n\r\n4\r\n");
        assert_eq!(output, "= 4\n");
        assert_eq!(summary.statements, 1);
    }

    #[test]
    fn variables_survive_between_runs() {
        let mut session = Session::new(standard_environment().unwrap());
        transcript(&mut session, "2 > two");
        let (output, _) = transcript(&mut session, "two ^ 10 > big");
        assert_eq!(output, "= 1024\n");
        assert_eq!(session.environment().variable("big"), Some(1024.0));
    }

    #[test]
    fn failed_assignment_still_reports_the_error() {
        let mut session = Session::new(standard_environment().unwrap());
        let (output, _) = transcript(&mut session, "1>pi\n");
        assert_eq!(output, "execution error: statement: cannot assign value to constant 'pi'\n");
    }

    #[test]
    fn streams_run_to_the_end() {
        let mut session = Session::new(standard_environment().unwrap());
        let mut out = Vec::new();
        let mut scanner = StreamScanner::new("sqrt(16)\nlog(8, 2)\nsin(1,2)".as_bytes());
        let summary = session.run(&mut scanner, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "= 4\n= 3\nexecution error: sin: wrong number of arguments, expected 1, got 2\n");
        assert_eq!(summary, Summary{statements: 3, failures: 1});
    }
}
