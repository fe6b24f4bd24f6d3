//! Dynamically typed component token values

use std::fmt;

use serde::{Deserialize, Serialize};
use sprout_core::Color;

use crate::tokens::Shadow;

/// A component token field value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenValue {
    Number(f32),
    Integer(i32),
    Color(Color),
    Text(String),
    Shadow(Shadow),
}

impl TokenValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Integer(_) => ValueKind::Integer,
            Self::Color(_) => ValueKind::Color,
            Self::Text(_) => ValueKind::Text,
            Self::Shadow(_) => ValueKind::Shadow,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Integer(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<f32> for TokenValue {
    fn from(v: f32) -> Self {
        Self::Number(v)
    }
}

impl From<f64> for TokenValue {
    fn from(v: f64) -> Self {
        Self::Number(v as f32)
    }
}

impl From<i32> for TokenValue {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<Color> for TokenValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<&str> for TokenValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Shadow> for TokenValue {
    fn from(v: Shadow) -> Self {
        Self::Shadow(v)
    }
}

/// Kind tag of a [`TokenValue`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Integer,
    Color,
    Text,
    Shadow,
}

impl ValueKind {
    /// Whether a field of this kind takes `value`, with the same numeric
    /// coercions as [`TokenField::from_value`]
    pub fn accepts(self, value: &TokenValue) -> bool {
        match (self, value) {
            (Self::Number, TokenValue::Number(_) | TokenValue::Integer(_)) => true,
            (Self::Integer, TokenValue::Integer(_)) => true,
            (Self::Integer, TokenValue::Number(v)) => v.is_finite(),
            (kind, value) => kind == value.kind(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Color => "color",
            Self::Text => "text",
            Self::Shadow => "shadow",
        })
    }
}

/// Rust types that can back a component token field
pub trait TokenField: Sized {
    const KIND: ValueKind;

    fn to_value(&self) -> TokenValue;

    /// Convert back, or `None` if `value` is the wrong kind
    fn from_value(value: &TokenValue) -> Option<Self>;
}

impl TokenField for f32 {
    const KIND: ValueKind = ValueKind::Number;

    fn to_value(&self) -> TokenValue {
        TokenValue::Number(*self)
    }

    fn from_value(value: &TokenValue) -> Option<Self> {
        value.as_number()
    }
}

impl TokenField for i32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn to_value(&self) -> TokenValue {
        TokenValue::Integer(*self)
    }

    fn from_value(value: &TokenValue) -> Option<Self> {
        match value {
            TokenValue::Integer(v) => Some(*v),
            TokenValue::Number(v) if v.is_finite() => Some(v.round() as i32),
            _ => None,
        }
    }
}

impl TokenField for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn to_value(&self) -> TokenValue {
        TokenValue::Color(*self)
    }

    fn from_value(value: &TokenValue) -> Option<Self> {
        value.as_color()
    }
}

impl TokenField for String {
    const KIND: ValueKind = ValueKind::Text;

    fn to_value(&self) -> TokenValue {
        TokenValue::Text(self.clone())
    }

    fn from_value(value: &TokenValue) -> Option<Self> {
        match value {
            TokenValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl TokenField for Shadow {
    const KIND: ValueKind = ValueKind::Shadow;

    fn to_value(&self) -> TokenValue {
        TokenValue::Shadow(*self)
    }

    fn from_value(value: &TokenValue) -> Option<Self> {
        match value {
            TokenValue::Shadow(s) => Some(*s),
            _ => None,
        }
    }
}
