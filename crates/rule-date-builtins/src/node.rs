//! Rule nodes as the host engine passes them to builtins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::literal::Literal;

/// One argument position of a rule atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// A rule variable, named without the leading `?`.
    Variable(String),
    Literal(Literal),
    Iri(String),
    Blank(String),
}

impl Node {
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    pub const fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(_))
    }

    pub const fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Node::Variable(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Value equality. Literals compare with [`Literal::same_value_as`],
    /// every other node structurally.
    pub fn same_value_as(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Literal(a), Node::Literal(b)) => a.same_value_as(b),
            _ => self == other,
        }
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Variable(name) => write!(f, "?{name}"),
            Node::Literal(lit) => write!(f, "{lit}"),
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(id) => write!(f, "_:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::Datatype;

    #[test]
    fn test_display() {
        assert_eq!(Node::variable("due").to_string(), "?due");
        assert_eq!(Node::iri("http://ex.org/a").to_string(), "<http://ex.org/a>");
        assert_eq!(Node::Blank("b0".into()).to_string(), "_:b0");
        assert_eq!(
            Node::from(Literal::integer(3)).to_string(),
            "\"3\"^^xsd:integer"
        );
    }

    #[test]
    fn test_accessors() {
        let var = Node::variable("x");
        assert!(var.is_variable() && !var.is_literal());
        assert_eq!(var.as_variable(), Some("x"));
        assert!(var.as_literal().is_none());

        let lit = Node::from(Literal::integer(1));
        assert!(lit.is_literal());
        assert_eq!(lit.as_literal(), Some(&Literal::integer(1)));
    }

    #[test]
    fn test_same_value_as_uses_literal_values() {
        let a = Node::from(Literal::new("+5", Datatype::integer()));
        let b = Node::from(Literal::integer(5));
        assert!(a.same_value_as(&b));
        assert!(!a.same_value_as(&Node::iri("http://ex.org/5")));
        assert!(Node::variable("x").same_value_as(&Node::variable("x")));
    }

    #[test]
    fn test_serde_shape() {
        let node = Node::from(Literal::new("2020-02-29", Datatype::Date));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "literal");
        assert_eq!(json["value"]["lexical"], "2020-02-29");
        assert_eq!(
            json["value"]["datatype"],
            "http://www.w3.org/2001/XMLSchema#date"
        );
        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
