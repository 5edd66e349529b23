use super::errors::{RuntimeError, RuntimeResult};
use super::value::Value;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

type FnType = fn(Vec<Value>, &mut dyn Write) -> RuntimeResult<Value>;

pub struct NativeFnData {
    pub func: FnType,
    pub name: String,
}

#[derive(Clone)]
pub struct NativeFn(Rc<NativeFnData>);

impl NativeFn {
    fn new(name: &str, func: FnType) -> Self {
        let name = name.to_owned();
        NativeFn(Rc::new(NativeFnData { func, name }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn execute(&self, args: Vec<Value>, output: &mut dyn Write) -> RuntimeResult<Value> {
        (self.0.func)(args, output)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<native-func {}>", self.0.name)
    }
}

impl PartialEq<NativeFn> for NativeFn {
    // Function pointers are not reliably comparable. Compare the Rcs.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn get_native_funcs() -> Vec<NativeFn> {
    vec![NativeFn::new("print", print)]
}

/// Writes every argument on its own line.
fn print(args: Vec<Value>, output: &mut dyn Write) -> RuntimeResult<Value> {
    for arg in args.iter() {
        writeln!(output, "{}", arg).map_err(|e| RuntimeError::Output(e.to_string()))?;
    }
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_writes_one_line_per_argument() {
        let print = get_native_funcs().remove(0);
        assert_eq!(print.name(), "print");

        let mut output: Vec<u8> = vec![];
        let args = vec![Value::Number(5.0), Value::Boolean(false), Value::Null];
        assert_eq!(print.execute(args, &mut output), Ok(Value::Null));
        assert_eq!(String::from_utf8(output).unwrap(), "5\nFalse\nnil\n");
    }

    #[test]
    fn test_print_without_arguments_writes_nothing() {
        let print = get_native_funcs().remove(0);
        let mut output: Vec<u8> = vec![];
        assert_eq!(print.execute(vec![], &mut output), Ok(Value::Null));
        assert!(output.is_empty());
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let a = get_native_funcs().remove(0);
        let b = get_native_funcs().remove(0);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
