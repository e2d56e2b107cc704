//! Per-evaluation variable bindings.

use std::collections::HashMap;

use crate::node::Node;

/// The binding environment a host engine supplies for one rule evaluation.
pub trait BindingEnvironment {
    /// The current value of a variable, if bound.
    fn get(&self, variable: &str) -> Option<&Node>;

    /// Bind `target` to `value`.
    ///
    /// An unbound variable takes the value and the call succeeds. A bound
    /// variable, or a non-variable node, succeeds only if it already has the
    /// same value.
    fn bind(&mut self, target: &Node, value: Node) -> bool;

    /// Replace a bound variable with its value. Anything else is returned as is.
    fn resolve(&self, node: &Node) -> Node {
        match node {
            Node::Variable(name) => self.get(name).cloned().unwrap_or_else(|| node.clone()),
            _ => node.clone(),
        }
    }
}

/// A `HashMap`-backed [`BindingEnvironment`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, Node>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl BindingEnvironment for Bindings {
    fn get(&self, variable: &str) -> Option<&Node> {
        self.values.get(variable)
    }

    fn bind(&mut self, target: &Node, value: Node) -> bool {
        match target {
            Node::Variable(name) => match self.values.get(name) {
                Some(existing) => existing.same_value_as(&value),
                None => {
                    self.values.insert(name.clone(), value);
                    true
                }
            },
            other => other.same_value_as(&value),
        }
    }
}
