use crate::environment::*;
use crate::error_handling::{Arity, Result};

// Fixed-precision values the calculator has always used, not the full
// machine constants.
#[allow(clippy::approx_constant)]
pub const PI: Value = 3.1415926535898;
#[allow(clippy::approx_constant)]
pub const E: Value = 2.7182818284590;

fn log(arguments: &[Value]) -> Value {
    match arguments {
        [x, base] => x.ln() / base.ln(),
        [x, ..] => x.ln(),
        [] => Value::NAN,
    }
}

/// The environment the calculator starts with: `pi` and `e`, plus `abs`,
/// `pow`, `sqrt`, `exp`, `log`, `sin`, `cos` and `tan`.
pub fn standard_environment() -> Result<Environment> {
    Environment::builder()
        .constant("pi", PI)
        .constant("e", E)
        .function("abs", Function::unary(Value::abs))
        .function("pow", Function::binary(Value::powf))
        .function("sqrt", Function::unary(Value::sqrt))
        .function("exp", Function::unary(Value::exp))
        .function("log", Function::new(Arity::between(1, 2), log))
        .function("sin", Function::unary(Value::sin))
        .function("cos", Function::unary(Value::cos))
        .function("tan", Function::unary(Value::tan))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::CalcError;
    use pretty_assertions::assert_eq;

    fn close(left: Value, right: Value) -> bool {
        (left - right).abs() < 1e-12
    }

    #[test]
    fn constants_are_the_fixed_literals() {
        let environment = standard_environment().unwrap();
        assert_eq!(environment.constant("pi"), Some(3.1415926535898));
        assert_eq!(environment.constant("e"), Some(2.7182818284590));
        assert_eq!(environment.constants().len(), 2);
    }

    #[test]
    fn every_function_is_registered() {
        let environment = standard_environment().unwrap();
        assert_eq!(environment.function_names(),
                   vec!["abs", "cos", "exp", "log", "pow", "sin", "sqrt", "tan"]);
        assert_eq!(environment.function("log").map(Function::arity), Some(Arity::between(1, 2)));
    }

    #[test]
    fn functions_compute_what_they_say() {
        let environment = standard_environment().unwrap();
        assert_eq!(environment.call("abs", &[-3.5]), Ok(3.5));
        assert_eq!(environment.call("pow", &[2.0, 10.0]), Ok(1024.0));
        assert_eq!(environment.call("sqrt", &[9.0]), Ok(3.0));
        assert_eq!(environment.call("exp", &[0.0]), Ok(1.0));
        assert_eq!(environment.call("sin", &[0.0]), Ok(0.0));
        assert_eq!(environment.call("cos", &[0.0]), Ok(1.0));
        assert_eq!(environment.call("tan", &[0.0]), Ok(0.0));
        assert!(close(environment.call("log", &[E]).unwrap(), 1.0));
        assert!(close(environment.call("log", &[8.0, 2.0]).unwrap(), 3.0));
        assert!(close(environment.call("log", &[100.0, 10.0]).unwrap(), 2.0));
    }

    #[test]
    fn log_takes_one_or_two_arguments() {
        let environment = standard_environment().unwrap();
        assert_eq!(environment.call("log", &[1.0, 2.0, 3.0]), Err(CalcError::wrong_arity {
            function: "log".into(),
            expected: Arity::between(1, 2),
            got: 3,
        }));
        assert!(matches!(environment.call("log", &[]), Err(CalcError::wrong_arity{got: 0, ..})));
        assert!(matches!(environment.call("pow", &[2.0]), Err(CalcError::wrong_arity{..})));
    }

    #[test]
    fn domain_problems_give_nan() {
        let environment = standard_environment().unwrap();
        assert!(environment.call("sqrt", &[-1.0]).unwrap().is_nan());
        assert_eq!(environment.call("log", &[0.0]), Ok(Value::NEG_INFINITY));
    }
}
