//! The `add_days` builtin.
//!
//! Rule usage: `add_days(?start, ?n, ?result)`. Binds `?result` to the
//! `xsd:date` that is `?n` days after `?start`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::binding::BindingEnvironment;
use crate::builtin::Builtin;
use crate::error::Result;
use crate::literal::{Literal, LiteralValue};
use crate::node::Node;
use crate::temporal::{self, CalendarInput};

// ── Options ─────────────────────────────────────────────────────────────────

/// Which datatypes `add_days` accepts as its first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// `xsd:date`, `xsd:dateTime` and `xsd:dateTimeStamp`.
    #[default]
    DateOrDateTime,
    /// `xsd:dateTime` and `xsd:dateTimeStamp` only; plain dates fail.
    DateTimeOnly,
}

/// Options for [`AddDays`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDaysOptions {
    #[serde(default)]
    pub input_policy: InputPolicy,
}

// ── AddDays ─────────────────────────────────────────────────────────────────

/// Date offset builtin: `add_days(date, days, result)`.
#[derive(Debug, Clone, Default)]
pub struct AddDays {
    options: AddDaysOptions,
}

impl AddDays {
    pub const NAME: &'static str = "add_days";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AddDaysOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AddDaysOptions {
        &self.options
    }

    fn accepts_plain_dates(&self) -> bool {
        self.options.input_policy == InputPolicy::DateOrDateTime
    }

    /// Compute the result literal, or `None` when the arguments do not qualify.
    fn evaluate(&self, start: &Node, days: &Node) -> Option<Literal> {
        let (Some(start), Some(days)) = (start.as_literal(), days.as_literal()) else {
            trace!(%start, %days, "add_days: arguments are not both literals");
            return None;
        };

        let input = match start.value() {
            Ok(LiteralValue::DateTime(dt)) => CalendarInput::DateTime(dt),
            Ok(LiteralValue::Date(d)) if self.accepts_plain_dates() => CalendarInput::Date(d),
            Ok(_) => {
                trace!(
                    %start,
                    policy = ?self.options.input_policy,
                    "add_days: first argument is not an accepted date type"
                );
                return None;
            }
            Err(e) => {
                trace!(error = %e, "add_days: malformed first argument");
                return None;
            }
        };

        let days = match days.value() {
            Ok(LiteralValue::Integer(n)) => n,
            Ok(_) => {
                trace!(%days, "add_days: second argument is not an integer");
                return None;
            }
            Err(e) => {
                trace!(error = %e, "add_days: malformed second argument");
                return None;
            }
        };

        match temporal::add_days(input, days) {
            Ok(date) => Some(Literal::date(date)),
            Err(e) => {
                trace!(error = %e, "add_days: result out of range");
                None
            }
        }
    }
}

impl Builtin for AddDays {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn arity(&self) -> usize {
        3
    }

    fn body_call(&self, args: &[Node], env: &mut dyn BindingEnvironment) -> Result<bool> {
        self.check_args(args.len())?;

        let start = env.resolve(&args[0]);
        let days = env.resolve(&args[1]);
        match self.evaluate(&start, &days) {
            Some(result) => Ok(env.bind(&args[2], result.into())),
            None => Ok(false),
        }
    }
}
