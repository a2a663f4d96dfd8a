use crate::error_handling::*;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

pub type Value = f64;

pub struct Function {
    arity: Arity,
    action: Box<dyn Fn(&[Value]) -> Value>,
}

impl Function {
    pub fn new(arity: Arity, action: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self{arity, action: Box::new(action)}
    }

    pub fn unary(action: fn(Value) -> Value) -> Self {
        Self::new(Arity::exactly(1), move |arguments| action(arguments[0]))
    }

    pub fn binary(action: fn(Value, Value) -> Value) -> Self {
        Self::new(Arity::exactly(2), move |arguments| action(arguments[0], arguments[1]))
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn call(&self, name: &str, arguments: &[Value]) -> Result<Value> {
        if !self.arity.accepts(arguments.len()) {
            return Err(CalcError::wrong_arity {
                function: name.to_string(),
                expected: self.arity,
                got: arguments.len(),
            });
        }
        Ok((self.action)(arguments))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// Constants, variables and functions that identifiers resolve against.
///
/// The three tables never share a name. Constants and functions are fixed by
/// [`EnvironmentBuilder::build`]; only [`assign`](Environment::assign) changes
/// anything afterwards.
#[derive(Debug, Default)]
pub struct Environment {
    constants: HashMap<String, Value>,
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function>,
}

impl Environment {
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// Looks `name` up as a constant first, then as a variable.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.constants.get(name)
            .or_else(|| self.variables.get(name))
            .copied()
            .ok_or_else(|| CalcError::undefined_identifier(name.to_string()))
    }

    pub fn call(&self, name: &str, arguments: &[Value]) -> Result<Value> {
        let function = self.functions.get(name)
            .ok_or_else(|| CalcError::undefined_function(name.to_string()))?;
        trace!(name, ?arguments, "calling function");
        function.call(name, arguments)
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<()> {
        if self.constants.contains_key(name) {
            return Err(CalcError::invalid_assignment{name: name.to_string(), kind: NameKind::constant});
        }
        if self.functions.contains_key(name) {
            return Err(CalcError::invalid_assignment{name: name.to_string(), kind: NameKind::function});
        }
        debug!(name, value, "assigning variable");
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    pub fn constant(&self, name: &str) -> Option<Value> {
        self.constants.get(name).copied()
    }

    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn constants(&self) -> &HashMap<String, Value> {
        &self.constants
    }

    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Default)]
pub struct EnvironmentBuilder {
    environment: Environment,
    duplicate: Option<String>,
}

impl EnvironmentBuilder {
    fn is_defined(&self, name: &str) -> bool {
        self.environment.constants.contains_key(name) || self.environment.functions.contains_key(name)
    }

    fn note_duplicate(&mut self, name: &str) {
        if self.duplicate.is_none() {
            self.duplicate = Some(name.to_string());
        }
    }

    pub fn constant(mut self, name: &str, value: Value) -> Self {
        if self.is_defined(name) {
            self.note_duplicate(name);
        } else {
            self.environment.constants.insert(name.to_string(), value);
        }
        self
    }

    pub fn function(mut self, name: &str, function: Function) -> Self {
        if self.is_defined(name) {
            self.note_duplicate(name);
        } else {
            self.environment.functions.insert(name.to_string(), function);
        }
        self
    }

    pub fn build(self) -> Result<Environment> {
        match self.duplicate {
            Some(name) => Err(CalcError::duplicate_definition(name)),
            None => Ok(self.environment),
        }
    }
}
