use crate::error_handling::*;
use crate::environment::Value;
use crate::scanning::*;

fn expected<T>(scanner: &(impl Scanner + ?Sized), rule: Rule, expected: &'static str) -> Result<T> {
    Err(CalcError::lexical{rule, expected, found: Found(scanner.peek())})
}

fn take_digits<S: Scanner + ?Sized>(scanner: &mut S, literal: &mut String) {
    while let Some(digit) = scanner.peek().filter(|&c| is_digit(c)) {
        literal.push(digit);
        scanner.advance();
    }
}

/// `digit+ ('.' digit+)? ('e' ('+'|'-')? digit+)?`
///
/// The accepted characters are converted in one correctly rounded step, so
/// every literal has the value `str::parse::<f64>` gives it.
pub fn number<S: Scanner + ?Sized>(scanner: &mut S) -> Result<Value> {
    if !scanner.peek().is_some_and(is_digit) {
        return expected(&*scanner, Rule::number, "digit");
    }

    let mut literal = String::new();
    take_digits(scanner, &mut literal);

    if scanner.peek() == Some('.') {
        literal.push('.');
        scanner.advance();
        if !scanner.peek().is_some_and(is_digit) {
            return expected(&*scanner, Rule::number, "digit after decimal point");
        }
        take_digits(scanner, &mut literal);
    }

    if scanner.peek() == Some('e') {
        literal.push('e');
        scanner.advance();
        match scanner.peek() {
            Some(sign @ ('+' | '-')) => {
                literal.push(sign);
                scanner.advance();
            },
            Some(character) if is_digit(character) => {},
            _ => return expected(&*scanner, Rule::number, "sign or digit after exponent indicator"),
        }
        if !scanner.peek().is_some_and(is_digit) {
            return expected(&*scanner, Rule::number, "digit after exponent sign");
        }
        take_digits(scanner, &mut literal);
    }

    let value = literal.parse::<Value>().map_err(|_| CalcError::lexical {
        rule: Rule::number,
        expected: "decimal literal",
        found: Found(literal.chars().next()),
    })?;

    scanner.skip_blanks();
    Ok(value)
}

pub fn name<S: Scanner + ?Sized>(scanner: &mut S) -> Result<String> {
    if !scanner.peek().is_some_and(is_letter) {
        return expected(&*scanner, Rule::name, "letter");
    }

    let mut name = String::new();
    while let Some(character) = scanner.peek().filter(|&c| is_letter(c) || is_digit(c)) {
        name.push(character);
        scanner.advance();
    }

    scanner.skip_blanks();
    Ok(name)
}
