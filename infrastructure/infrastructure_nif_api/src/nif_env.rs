//! Call Environment
//!
//! Positional argument access for one host call. A `NifArgs` borrows the
//! argument list and remembers the function name so every decoding error it
//! produces is attributed to the right call.

use entities_data_handling::Term;

use crate::error_handling::ArgumentError;
use crate::term_decoding::get_int;

/// Arguments of a single host call
#[derive(Debug, Clone, Copy)]
pub struct NifArgs<'a> {
    function: &'static str,
    args: &'a [Term],
}

impl<'a> NifArgs<'a> {
    /// Wrap an argument list
    pub fn new(function: &'static str, args: &'a [Term]) -> Self {
        Self { function, args }
    }

    /// Name of the function being called
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Number of arguments supplied
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Check the argument count against an inclusive range
    ///
    /// # Errors
    ///
    /// `ArgumentError::WrongArity` carrying `usage` when the count is outside
    /// `min..=max`.
    pub fn check_arity(&self, min: usize, max: usize, usage: &'static str) -> Result<(), ArgumentError> {
        if (min..=max).contains(&self.args.len()) {
            Ok(())
        } else {
            Err(ArgumentError::WrongArity {
                function: self.function,
                usage,
                given: self.args.len(),
            })
        }
    }

    /// Argument at `index`, if supplied
    pub fn get(&self, index: usize) -> Option<&'a Term> {
        self.args.get(index)
    }

    /// Argument at `index`, which must be supplied
    pub fn required(&self, index: usize, param: &'static str) -> Result<&'a Term, ArgumentError> {
        self.get(index).ok_or(ArgumentError::Missing {
            function: self.function,
            param,
        })
    }

    /// Integer argument at `index`, or `default` when omitted
    pub fn int_or(&self, index: usize, param: &'static str, default: i32) -> Result<i32, ArgumentError> {
        match self.get(index) {
            Some(term) => get_int(self.function, param, term),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_arity() {
        let args = [Term::Int(3), Term::Int(4)];
        let call = NifArgs::new("listen", &args);
        assert!(call.check_arity(2, 2, "listen (S, BACKLOG)").is_ok());
        assert_eq!(
            call.check_arity(1, 1, "accept (S)"),
            Err(ArgumentError::WrongArity {
                function: "listen",
                usage: "accept (S)",
                given: 2,
            })
        );
    }

    #[test]
    fn test_empty_args() {
        let call = NifArgs::new("socket", &[]);
        assert!(call.is_empty());
        assert!(call.check_arity(0, 3, "socket (DOMAIN, TYPE, PROTOCOL)").is_ok());
        assert_eq!(call.get(0), None);
    }

    #[test]
    fn test_required_and_defaults() {
        let args = [Term::Int(7)];
        let call = NifArgs::new("recv", &args);
        assert_eq!(call.required(0, "S"), Ok(&Term::Int(7)));
        assert_eq!(
            call.required(1, "LEN"),
            Err(ArgumentError::Missing { function: "recv", param: "LEN" })
        );
        assert_eq!(call.int_or(2, "FLAGS", 0), Ok(0));
        assert_eq!(call.int_or(0, "FLAGS", 0), Ok(7));
    }

    #[test]
    fn test_int_or_reports_bad_value() {
        let args = [Term::from("x")];
        let call = NifArgs::new("send", &args);
        assert_eq!(
            call.int_or(0, "FLAGS", 0),
            Err(ArgumentError::NotAnInteger { function: "send", param: "FLAGS" })
        );
    }
}
