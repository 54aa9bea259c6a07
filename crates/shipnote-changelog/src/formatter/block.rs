//! Chat message blocks

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Text type of every block text object
const MRKDWN: &str = "mrkdwn";

/// A single block of a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `{"type":"divider"}`
    Divider,
    /// `{"type":"section","text":{"type":"mrkdwn","text":...}}`
    TextSection { text: String },
    /// `{"type":"section","fields":[{"type":"mrkdwn","text":"label: value"}, ...]}`
    FieldsSection { fields: Vec<Field> },
}

impl Block {
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextSection { text: text.into() }
    }

    /// Text of a text section
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::TextSection { text } => Some(text),
            _ => None,
        }
    }
}

/// A label/value pair of a fields section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
    /// Render the value as `<value|label>`
    pub is_link: bool,
}

impl Field {
    /// Create a field; labels ending in `url` (any case) become links
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        let label = label.into();
        let is_link = label.to_lowercase().ends_with("url");
        Self {
            label,
            value: value.into(),
            is_link,
        }
    }

    /// `label: value`, or `label: <value|label>` for links
    pub fn text(&self) -> String {
        if self.is_link {
            format!("{}: <{}|{}>", self.label, self.value, self.label)
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}

/// `{"type":"mrkdwn","text":...}`
struct TextObject<'a>(&'a str);

impl Serialize for TextObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", MRKDWN)?;
        map.serialize_entry("text", self.0)?;
        map.end()
    }
}

struct FieldList<'a>(&'a [Field]);

impl Serialize for FieldList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for field in self.0 {
            seq.serialize_element(&TextObject(&field.text()))?;
        }
        seq.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Divider => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "divider")?;
                map.end()
            }
            Self::TextSection { text } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "section")?;
                map.serialize_entry("text", &TextObject(text))?;
                map.end()
            }
            Self::FieldsSection { fields } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "section")?;
                map.serialize_entry("fields", &FieldList(fields))?;
                map.end()
            }
        }
    }
}
