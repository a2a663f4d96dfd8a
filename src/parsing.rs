use crate::environment::*;
use crate::error_handling::*;
use crate::lexing;
use crate::scanning::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    positive,
    negative,
}

impl Sign {
    pub fn call(&self, value: Value) -> Value {
        match self {
            Sign::positive => value,
            Sign::negative => -value,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<char> for Sign {
    type Error = InvalidOperator;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            '+' => Ok(Sign::positive),
            '-' => Ok(Sign::negative),
            _ => Err(InvalidOperator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    additive,
    multiplicative,
    exponential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    remainder,
    exponentiation,
}

impl BinaryOperator {
    pub fn call(&self, left: Value, right: Value) -> Value {
        use BinaryOperator::*;

        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
            remainder => left % right,
            exponentiation => left.powf(right),
        }
    }

    pub fn precedence(&self) -> Precedence {
        use BinaryOperator::*;
        match self {
            addition | subtraction => Precedence::additive,
            multiplication | division | remainder => Precedence::multiplicative,
            exponentiation => Precedence::exponential,
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = InvalidOperator;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        use BinaryOperator::*;
        match c {
            '+' => Ok(addition),
            '-' => Ok(subtraction),
            '*' => Ok(multiplication),
            '/' => Ok(division),
            '%' => Ok(remainder),
            '^' => Ok(exponentiation),
            _ => Err(InvalidOperator),
        }
    }
}

/// Every `parse_*` method also consumes the blanks after its unit.
pub struct Parser<'a, S: Scanner + ?Sized> {
    scanner: &'a mut S,
    environment: &'a Environment,
}

impl<'a, S: Scanner + ?Sized> Parser<'a, S> {
    pub fn new(scanner: &'a mut S, environment: &'a Environment) -> Self {
        Self{scanner, environment}
    }

    fn expect(&mut self, rule: Rule, expected: char, description: &'static str) -> Result<()> {
        if self.scanner.peek() != Some(expected) {
            return Err(CalcError::syntax{rule, expected: description, found: Found(self.scanner.peek())});
        }
        self.scanner.advance();
        self.scanner.skip_blanks();
        Ok(())
    }

    fn operator(&mut self, precedence: Precedence) -> Option<BinaryOperator> {
        let operator = self.scanner.peek()
            .and_then(|c| BinaryOperator::try_from(c).ok())
            .filter(|operator| operator.precedence() == precedence)?;
        self.scanner.advance();
        self.scanner.skip_blanks();
        Some(operator)
    }

    pub fn parse_identifier(&mut self) -> Result<Value> {
        let name = lexing::name(&mut *self.scanner)?;

        if self.scanner.peek() != Some('(') {
            return self.environment.lookup(&name);
        }
        self.scanner.advance();
        self.scanner.skip_blanks();

        let mut arguments = Vec::new();
        if self.scanner.peek() != Some(')') {
            arguments.push(self.parse_expr()?);
            while self.scanner.peek() == Some(',') {
                self.scanner.advance();
                self.scanner.skip_blanks();
                arguments.push(self.parse_expr()?);
            }
        }
        self.expect(Rule::call, ')', "')'")?;

        self.environment.call(&name, &arguments)
    }

    pub fn parse_primary(&mut self) -> Result<Value> {
        match self.scanner.peek() {
            Some(c) if is_digit(c) => lexing::number(&mut *self.scanner),
            Some(c) if is_letter(c) => self.parse_identifier(),
            Some('(') => {
                self.scanner.advance();
                self.scanner.skip_blanks();
                let value = self.parse_expr()?;
                self.expect(Rule::primary, ')', "')'")?;
                Ok(value)
            },
            found => Err(CalcError::syntax {
                rule: Rule::primary,
                expected: "number, identifier or parenthesized expression",
                found: Found(found),
            }),
        }
    }

    // Exponents are single primaries folded from the left: 2^3^2 is (2^3)^2.
    pub fn parse_factor(&mut self) -> Result<Value> {
        let mut value = self.parse_primary()?;
        while let Some(operator) = self.operator(Precedence::exponential) {
            value = operator.call(value, self.parse_primary()?);
        }
        Ok(value)
    }

    pub fn parse_term(&mut self) -> Result<Value> {
        let mut value = self.parse_factor()?;
        while let Some(operator) = self.operator(Precedence::multiplicative) {
            value = operator.call(value, self.parse_factor()?);
        }
        Ok(value)
    }

    pub fn parse_expr(&mut self) -> Result<Value> {
        let sign = match self.scanner.peek().map(Sign::try_from) {
            Some(Ok(sign)) => {
                self.scanner.advance();
                self.scanner.skip_blanks();
                sign
            },
            _ => Sign::positive,
        };

        let mut value = sign.call(self.parse_term()?);
        while let Some(operator) = self.operator(Precedence::additive) {
            value = operator.call(value, self.parse_term()?);
        }
        Ok(value)
    }
}
