//! The capability a host engine calls into from a rule body.

use crate::binding::BindingEnvironment;
use crate::error::{BuiltinError, Result};
use crate::node::Node;

/// Namespace for builtin URIs; a builtin's URI is this plus its name.
pub const BUILTIN_NAMESPACE: &str = "urn:rule-date-builtins:builtin:";

/// A native function callable from a rule.
///
/// `body_call` returns `Ok(true)` when the condition holds (and any output
/// variables were bound), `Ok(false)` when it does not. `Err` is reserved for
/// rule-authoring mistakes such as a wrong argument count.
pub trait Builtin: Send + Sync {
    /// The functor name rule authors use.
    fn name(&self) -> &str;

    /// Number of arguments, or 0 for variadic builtins.
    fn arity(&self) -> usize;

    fn uri(&self) -> String {
        format!("{BUILTIN_NAMESPACE}{}", self.name())
    }

    /// Whether adding facts can never turn a success into a failure.
    fn is_monotonic(&self) -> bool {
        true
    }

    fn check_args(&self, len: usize) -> Result<()> {
        let expected = self.arity();
        if expected != 0 && expected != len {
            return Err(BuiltinError::ArityMismatch {
                builtin: self.name().to_string(),
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    /// Evaluate the builtin as a rule body condition.
    fn body_call(&self, args: &[Node], env: &mut dyn BindingEnvironment) -> Result<bool>;

    /// Run the builtin as a rule head action. Most builtins are body-only.
    fn head_action(&self, _args: &[Node], _env: &mut dyn BindingEnvironment) -> Result<()> {
        Err(BuiltinError::NotUsableInHead(self.name().to_string()))
    }
}
