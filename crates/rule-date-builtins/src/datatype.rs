//! XML Schema datatype tags carried by literal nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespace shared by every XML Schema datatype IRI.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

// ── IntegerType ─────────────────────────────────────────────────────────────

/// `xsd:integer` and the XSD types derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerType {
    Integer,
    Long,
    Int,
    Short,
    Byte,
    NonNegativeInteger,
    PositiveInteger,
    NonPositiveInteger,
    NegativeInteger,
    UnsignedLong,
    UnsignedInt,
    UnsignedShort,
    UnsignedByte,
}

impl IntegerType {
    pub const ALL: [IntegerType; 13] = [
        IntegerType::Integer,
        IntegerType::Long,
        IntegerType::Int,
        IntegerType::Short,
        IntegerType::Byte,
        IntegerType::NonNegativeInteger,
        IntegerType::PositiveInteger,
        IntegerType::NonPositiveInteger,
        IntegerType::NegativeInteger,
        IntegerType::UnsignedLong,
        IntegerType::UnsignedInt,
        IntegerType::UnsignedShort,
        IntegerType::UnsignedByte,
    ];

    /// Local name within the XSD namespace.
    pub const fn local_name(self) -> &'static str {
        match self {
            IntegerType::Integer => "integer",
            IntegerType::Long => "long",
            IntegerType::Int => "int",
            IntegerType::Short => "short",
            IntegerType::Byte => "byte",
            IntegerType::NonNegativeInteger => "nonNegativeInteger",
            IntegerType::PositiveInteger => "positiveInteger",
            IntegerType::NonPositiveInteger => "nonPositiveInteger",
            IntegerType::NegativeInteger => "negativeInteger",
            IntegerType::UnsignedLong => "unsignedLong",
            IntegerType::UnsignedInt => "unsignedInt",
            IntegerType::UnsignedShort => "unsignedShort",
            IntegerType::UnsignedByte => "unsignedByte",
        }
    }

    pub fn from_local_name(local: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.local_name() == local)
    }

    /// Inclusive value range, clipped to `i64`.
    pub const fn range(self) -> (i64, i64) {
        match self {
            IntegerType::Integer | IntegerType::Long => (i64::MIN, i64::MAX),
            IntegerType::Int => (i32::MIN as i64, i32::MAX as i64),
            IntegerType::Short => (i16::MIN as i64, i16::MAX as i64),
            IntegerType::Byte => (i8::MIN as i64, i8::MAX as i64),
            IntegerType::NonNegativeInteger | IntegerType::UnsignedLong => (0, i64::MAX),
            IntegerType::PositiveInteger => (1, i64::MAX),
            IntegerType::NonPositiveInteger => (i64::MIN, 0),
            IntegerType::NegativeInteger => (i64::MIN, -1),
            IntegerType::UnsignedInt => (0, u32::MAX as i64),
            IntegerType::UnsignedShort => (0, u16::MAX as i64),
            IntegerType::UnsignedByte => (0, u8::MAX as i64),
        }
    }
}

// ── Datatype ────────────────────────────────────────────────────────────────

/// The datatype tag of a literal.
///
/// Serializes as its full IRI so that nodes round-trip through host formats
/// that carry datatypes as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Datatype {
    /// `xsd:date`
    Date,
    /// `xsd:dateTime`
    DateTime,
    /// `xsd:dateTimeStamp` (a dateTime that must carry a timezone).
    DateTimeStamp,
    /// `xsd:integer` or one of its derived types.
    Integer(IntegerType),
    /// `xsd:decimal`
    Decimal,
    /// `xsd:double`
    Double,
    /// `xsd:float`
    Float,
    /// `xsd:string`
    String,
    /// `xsd:boolean`
    Boolean,
    /// Any other datatype IRI.
    Other(String),
}

impl Datatype {
    /// Plain `xsd:integer`.
    pub fn integer() -> Self {
        Datatype::Integer(IntegerType::Integer)
    }

    /// Resolve a datatype IRI to its tag. Unknown IRIs become [`Datatype::Other`].
    pub fn from_iri(iri: &str) -> Self {
        let Some(local) = iri.strip_prefix(XSD_NAMESPACE) else {
            return Datatype::Other(iri.to_string());
        };
        match local {
            "date" => Datatype::Date,
            "dateTime" => Datatype::DateTime,
            "dateTimeStamp" => Datatype::DateTimeStamp,
            "decimal" => Datatype::Decimal,
            "double" => Datatype::Double,
            "float" => Datatype::Float,
            "string" => Datatype::String,
            "boolean" => Datatype::Boolean,
            l => IntegerType::from_local_name(l)
                .map(Datatype::Integer)
                .unwrap_or_else(|| Datatype::Other(iri.to_string())),
        }
    }

    /// The full datatype IRI.
    pub fn iri(&self) -> String {
        match self {
            Datatype::Other(iri) => iri.clone(),
            _ => format!("{XSD_NAMESPACE}{}", self.local_name()),
        }
    }

    /// Short name used in error messages, e.g. `xsd:date`.
    pub fn short_name(&self) -> String {
        match self {
            Datatype::Other(iri) => format!("<{iri}>"),
            _ => format!("xsd:{}", self.local_name()),
        }
    }

    fn local_name(&self) -> &str {
        match self {
            Datatype::Date => "date",
            Datatype::DateTime => "dateTime",
            Datatype::DateTimeStamp => "dateTimeStamp",
            Datatype::Integer(kind) => kind.local_name(),
            Datatype::Decimal => "decimal",
            Datatype::Double => "double",
            Datatype::Float => "float",
            Datatype::String => "string",
            Datatype::Boolean => "boolean",
            Datatype::Other(iri) => iri,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Datatype::Integer(_))
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iri())
    }
}

impl From<Datatype> for String {
    fn from(datatype: Datatype) -> Self {
        datatype.iri()
    }
}

impl From<String> for Datatype {
    fn from(iri: String) -> Self {
        Datatype::from_iri(&iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iri_known_types() {
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#date"),
            Datatype::Date
        );
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#dateTime"),
            Datatype::DateTime
        );
        assert_eq!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#int"),
            Datatype::Integer(IntegerType::Int)
        );
    }

    #[test]
    fn test_from_iri_unknown_is_other() {
        let dt = Datatype::from_iri("http://example.org/types#weekday");
        assert_eq!(
            dt,
            Datatype::Other("http://example.org/types#weekday".to_string())
        );
        assert_eq!(dt.iri(), "http://example.org/types#weekday");
        // Unknown local name inside the XSD namespace is still "other"
        assert!(matches!(
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#gYear"),
            Datatype::Other(_)
        ));
    }

    #[test]
    fn test_iri_roundtrip_for_integer_family() {
        for kind in IntegerType::ALL {
            let iri = format!("{XSD_NAMESPACE}{}", kind.local_name());
            let dt = Datatype::from_iri(&iri);
            assert_eq!(dt, Datatype::Integer(kind));
            assert_eq!(dt.iri(), iri);

            let json = serde_json::to_string(&dt).unwrap();
            let back: Datatype = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dt);
        }
    }

    #[test]
    fn test_integer_type_ranges() {
        assert_eq!(IntegerType::Byte.range(), (-128, 127));
        assert_eq!(IntegerType::UnsignedShort.range(), (0, 65535));
        assert_eq!(IntegerType::PositiveInteger.range().0, 1);
        assert_eq!(IntegerType::NegativeInteger.range().1, -1);
        assert_eq!(IntegerType::from_local_name("decimal"), None);
        assert!(Datatype::integer().is_integer());
        assert!(!Datatype::Decimal.is_integer());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(Datatype::Date.short_name(), "xsd:date");
        assert_eq!(Datatype::integer().short_name(), "xsd:integer");
    }

    #[test]
    fn test_serializes_as_iri() {
        let json = serde_json::to_string(&Datatype::DateTime).unwrap();
        assert_eq!(json, "\"http://www.w3.org/2001/XMLSchema#dateTime\"");
        let back: Datatype = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Datatype::DateTime);
    }
}
