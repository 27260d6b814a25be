//! Typed field paths for item edits.
//!
//! Input controls name the field they edit with a dotted path (`name`,
//! `data.tab`, `data.weight`, ...). Paths are parsed once at the boundary so the
//! rest of the system never builds field keys by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{ItemKind, DEFAULT_KEY, INDEX_KEY, TAB_KEY};
use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::{FieldValue, RawValue};

const DATA_PREFIX: &str = "data.";
const LOCKED_KEY: &str = "locked";

/// An editable field of an item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
    /// The item's display name.
    Name,
    /// Lock flag; locked items and tabs refuse deletion.
    Locked,
    /// Owning tab of a gear item (`data.tab`).
    Tab,
    /// Ordering key of a gear item within its tab (`data.index`).
    Index,
    /// Default flag of a tab (`data.default`).
    Default,
    /// Any other key of the item's data bag (`data.<key>`).
    Data(String),
}

/// The value type a field path accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Boolean,
    Integer,
    ItemRef,
    Any,
}

impl FieldPath {
    /// Parse a dotted path such as `data.index` or `name`.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        match input {
            "name" => return Ok(Self::Name),
            LOCKED_KEY => return Ok(Self::Locked),
            _ => {}
        }
        let key = input.strip_prefix(DATA_PREFIX).ok_or_else(|| {
            DomainError::parse(format!("Unknown field path: '{}'", input))
        })?;
        Self::data(key)
    }

    /// Path for a key of the data bag; reserved keys map to their typed variant.
    pub fn data(key: &str) -> Result<Self, DomainError> {
        match key {
            TAB_KEY => Ok(Self::Tab),
            INDEX_KEY => Ok(Self::Index),
            DEFAULT_KEY => Ok(Self::Default),
            LOCKED_KEY => Ok(Self::Locked),
            "" => Err(DomainError::parse("Field key cannot be empty")),
            key if key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') =>
            {
                Ok(Self::Data(key.to_string()))
            }
            key => Err(DomainError::parse(format!("Invalid field key: '{}'", key))),
        }
    }

    /// Key of this path inside the item's data bag, if it lives there.
    pub fn data_key(&self) -> Option<&str> {
        match self {
            Self::Name | Self::Locked => None,
            Self::Tab => Some(TAB_KEY),
            Self::Index => Some(INDEX_KEY),
            Self::Default => Some(DEFAULT_KEY),
            Self::Data(key) => Some(key.as_str()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Name => FieldType::Text,
            Self::Locked | Self::Default => FieldType::Boolean,
            Self::Index => FieldType::Integer,
            Self::Tab => FieldType::ItemRef,
            Self::Data(_) => FieldType::Any,
        }
    }

    /// Whether this path exists on items of the given kind.
    pub fn applies_to(&self, kind: ItemKind) -> bool {
        match self {
            Self::Tab | Self::Index => kind == ItemKind::Gear,
            Self::Default => kind == ItemKind::Tab,
            Self::Name | Self::Locked | Self::Data(_) => true,
        }
    }

    /// Turn an input value into the stored value for this path.
    ///
    /// Checkbox inputs always become a strict boolean. Text and typed values
    /// pass through unchanged for free-form data keys; typed paths check (and
    /// for text inputs, parse) their value.
    pub fn coerce(&self, raw: RawValue) -> Result<FieldValue, DomainError> {
        match (self.field_type(), raw) {
            (FieldType::Boolean | FieldType::Any, RawValue::Checkbox(checked)) => {
                Ok(FieldValue::Boolean(checked))
            }
            (_, RawValue::Checkbox(_)) => Err(self.type_mismatch("checkbox")),

            (FieldType::Any, RawValue::Text(text)) => Ok(FieldValue::Text(text)),
            (FieldType::Any, RawValue::Value(value)) => Ok(value),

            (FieldType::Text, RawValue::Text(text)) => Ok(FieldValue::Text(text)),
            (FieldType::Text, RawValue::Value(FieldValue::Text(text))) => {
                Ok(FieldValue::Text(text))
            }

            (FieldType::Boolean, RawValue::Text(text)) => match text.trim() {
                "true" => Ok(FieldValue::Boolean(true)),
                "false" => Ok(FieldValue::Boolean(false)),
                _ => Err(self.type_mismatch("text")),
            },
            (FieldType::Boolean, RawValue::Value(FieldValue::Boolean(value))) => {
                Ok(FieldValue::Boolean(value))
            }

            (FieldType::Integer, RawValue::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| {
                    DomainError::validation(format!("{} expects an integer, got '{}'", self, text))
                }),
            (FieldType::Integer, RawValue::Value(FieldValue::Integer(value))) => {
                Ok(FieldValue::Integer(value))
            }

            (FieldType::ItemRef, RawValue::Text(text))
            | (FieldType::ItemRef, RawValue::Value(FieldValue::Text(text))) => {
                let id: ItemId = text.parse()?;
                Ok(FieldValue::Text(id.to_string()))
            }
            (FieldType::ItemRef, RawValue::Value(FieldValue::Null)) => Ok(FieldValue::Null),

            (_, RawValue::Value(other)) => Err(self.type_mismatch(other.type_name())),
        }
    }

    fn type_mismatch(&self, got: &str) -> DomainError {
        DomainError::validation(format!(
            "{} expects a {:?} value, got {}",
            self,
            self.field_type(),
            got
        ))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Locked => write!(f, "{}", LOCKED_KEY),
            other => write!(f, "{}{}", DATA_PREFIX, other.data_key().unwrap_or_default()),
        }
    }
}

impl std::str::FromStr for FieldPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.to_string()
    }
}
