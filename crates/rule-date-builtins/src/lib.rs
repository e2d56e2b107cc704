//! # rule-date-builtins
//!
//! Date arithmetic builtins for forward-chaining rule engines.
//!
//! A host engine hands a builtin its argument nodes and a binding environment;
//! the builtin either binds its output and succeeds, or reports that its
//! condition does not hold. This crate provides the `add_days` builtin plus
//! the small host-facing model it needs: typed XSD literals, nodes, a binding
//! environment and a registry.
//!
//! ## Modules
//!
//! - [`add_days`] — `add_days(date, days, result)` builtin and its options
//! - [`temporal`] — Pure calendar arithmetic, independent of any engine
//! - [`builtin`] — The `Builtin` trait hosts call into
//! - [`registry`] — Lookup of builtins by name or URI
//! - [`binding`] — Binding environment trait and a `HashMap` implementation
//! - [`node`] — Rule argument nodes
//! - [`literal`] — XSD date, dateTime and integer literals
//! - [`datatype`] — XSD datatype tags
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use rule_date_builtins::{
//!     BindingEnvironment, Bindings, Builtin, BuiltinRegistry, Datatype, Literal, Node,
//! };
//!
//! let registry = BuiltinRegistry::with_date_builtins();
//! let add_days = registry.get("add_days").unwrap();
//!
//! let mut env = Bindings::new();
//! let args = [
//!     Node::from(Literal::new("2020-02-28", Datatype::Date)),
//!     Node::from(Literal::integer(1)),
//!     Node::variable("next"),
//! ];
//! assert!(add_days.body_call(&args, &mut env).unwrap());
//! assert_eq!(env.get("next").unwrap().to_string(), "\"2020-02-29\"^^xsd:date");
//! ```

pub mod add_days;
pub mod binding;
pub mod builtin;
pub mod datatype;
pub mod error;
pub mod literal;
pub mod node;
pub mod registry;
pub mod temporal;

pub use add_days::{AddDays, AddDaysOptions, InputPolicy};
pub use binding::{BindingEnvironment, Bindings};
pub use builtin::{Builtin, BUILTIN_NAMESPACE};
pub use datatype::{Datatype, IntegerType, XSD_NAMESPACE};
pub use error::{BuiltinError, Result};
pub use literal::{Literal, LiteralValue, XsdDate, XsdDateTime};
pub use node::Node;
pub use registry::BuiltinRegistry;
pub use temporal::{add_days, CalendarInput};
