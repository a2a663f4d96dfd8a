use crate::environment::*;
use crate::error_handling::*;
use crate::lexing;
use crate::parsing::Parser;
use crate::scanning::*;
use tracing::debug;

/// Evaluates one `expr ('>' name)?` statement.
///
/// Leaves `scanner` on the first character after the statement, usually a
/// newline or the end of input. The environment only changes when the whole
/// statement succeeded, and then only by the assignment. The value is
/// returned whether or not it was assigned.
pub fn evaluate_statement<S: Scanner + ?Sized>(scanner: &mut S, environment: &mut Environment) -> Result<Value> {
    scanner.skip_blanks();
    let value = Parser::new(&mut *scanner, environment).parse_expr()?;

    if scanner.peek() == Some('>') {
        scanner.advance();
        scanner.skip_blanks();
        let name = lexing::name(scanner)?;
        environment.assign(&name, value)?;
    }

    debug!(value, "statement evaluated");
    Ok(value)
}
