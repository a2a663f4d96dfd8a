use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    number,
    name,
    call,
    primary,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rule::*;
        f.write_str(match self {
            number => "number",
            name => "name",
            call => "call",
            primary => "primary",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(character) => write!(f, "'{}'", character.escape_debug()),
            None => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    constant,
    function,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameKind::constant => "constant",
            NameKind::function => "function",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn exactly(count: usize) -> Self {
        Self{min: count, max: count}
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self{min, max}
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max.saturating_sub(self.min) {
            0 => write!(f, "{}", self.min),
            1 => write!(f, "{} or {}", self.min, self.max),
            _ => write!(f, "{} to {}", self.min, self.max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    parse,
    execution,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::parse => "parse error",
            ErrorKind::execution => "execution error",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{rule}: expected {expected}, got {found}")]
    lexical {
        rule: Rule,
        expected: &'static str,
        found: Found,
    },

    #[error("{rule}: expected {expected}, got {found}")]
    syntax {
        rule: Rule,
        expected: &'static str,
        found: Found,
    },

    #[error("identifier: undefined identifier: {0}")]
    undefined_identifier(String),

    #[error("identifier: undefined function: {0}")]
    undefined_function(String),

    #[error("{function}: wrong number of arguments, expected {expected}, got {got}")]
    wrong_arity {
        function: String,
        expected: Arity,
        got: usize,
    },

    #[error("statement: cannot assign value to {kind} '{name}'")]
    invalid_assignment {
        name: String,
        kind: NameKind,
    },

    #[error("setup: '{0}' is defined more than once")]
    duplicate_definition(String),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        use CalcError::*;
        match self {
            lexical{..} | syntax{..} => ErrorKind::parse,
            _ => ErrorKind::execution,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_rule_and_the_offender() {
        let error = CalcError::lexical {
            rule: Rule::number,
            expected: "digit after decimal point",
            found: Found(None),
        };
        assert_eq!(error.to_string(), "number: expected digit after decimal point, got end of input");

        let error = CalcError::syntax {
            rule: Rule::primary,
            expected: "')'",
            found: Found(Some('\n')),
        };
        assert_eq!(error.to_string(), "primary: expected ')', got '\\n'");
    }

    #[test]
    fn arity_reads_naturally() {
        assert_eq!(Arity::exactly(1).to_string(), "1");
        assert_eq!(Arity::between(1, 2).to_string(), "1 or 2");
        assert_eq!(Arity::between(0, 3).to_string(), "0 to 3");
        assert!(Arity::between(1, 2).accepts(2));
        assert!(!Arity::exactly(1).accepts(0));
    }

    #[test]
    fn inverted_arity_still_displays() {
        let inverted = Arity::between(3, 1);
        assert_eq!(inverted.to_string(), "3");
        assert!(!inverted.accepts(2));
    }

    #[test]
    fn errors_fall_into_two_kinds() {
        let parse = CalcError::syntax {rule: Rule::call, expected: "')'", found: Found(Some(';'))};
        assert_eq!(parse.kind(), ErrorKind::parse);
        assert_eq!(CalcError::undefined_identifier("foo".into()).kind(), ErrorKind::execution);
        assert_eq!(ErrorKind::execution.to_string(), "execution error");
    }
}
