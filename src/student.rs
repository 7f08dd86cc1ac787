//! @ai:module:intent Define the student data consumed by the comment generator
//! @ai:module:layer domain
//! @ai:module:public_api StudentAttributes, StudentRecord, Gender, Rating, Variant
//! @ai:module:depends_on normalize, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::normalize::coerce_list;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// @ai:intent Grammatical gender tag used to pick a pronoun set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    He,
    She,
    #[default]
    They,
}

impl Gender {
    /// @ai:intent Parse a gender tag, falling back to `They` for anything unrecognized
    /// @ai:example ("he") -> He
    /// @ai:example ("Female") -> She
    /// @ai:example ("robot") -> They
    /// @ai:effects pure
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "he" | "male" | "boy" => Gender::He,
            "she" | "female" | "girl" => Gender::She,
            _ => Gender::They,
        }
    }

    /// @ai:intent Canonical tag for this gender
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::He => "he",
            Gender::She => "she",
            Gender::They => "they",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// @ai:intent Overall rating, always within 1..=10
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 5;

    /// @ai:intent Build a rating, clamping out-of-range values
    /// @ai:example (0) -> 1
    /// @ai:example (42) -> 10
    /// @ai:effects pure
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// @ai:intent Parse free text the way a form field arrives; non-numeric text yields 5
    /// @ai:example ("9") -> 9
    /// @ai:example ("7.8") -> 7
    /// @ai:example ("great") -> 5
    /// @ai:effects pure
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::new(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::new(value.trunc() as i64),
            _ => Self::default(),
        }
    }

    /// @ai:intent Coerce a loosely typed JSON value into a rating
    /// @ai:effects pure
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(v) => Self::new(v),
                None => n
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .map(|v| Self::new(v.trunc() as i64))
                    .unwrap_or_default(),
            },
            Value::String(s) => Self::parse(s),
            _ => Self::default(),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for Rating {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// @ai:intent Which of the generated comments is requested (1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Variant(pub u32);

impl Default for Variant {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// @ai:intent Immutable snapshot of everything the teacher entered about one student
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentAttributes {
    pub name: String,
    pub gender: Gender,
    /// Free text, comma separated.
    pub strengths: String,
    /// Free text, comma separated.
    pub weaknesses: String,
    pub rating: Rating,
}

impl StudentAttributes {
    /// @ai:intent Create attributes with only a name; everything else defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_strengths(mut self, strengths: impl Into<String>) -> Self {
        self.strengths = strengths.into();
        self
    }

    pub fn with_weaknesses(mut self, weaknesses: impl Into<String>) -> Self {
        self.weaknesses = weaknesses.into();
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// @ai:intent Name to render, or the fallback when missing or generic
    /// @ai:post result is never empty and never "The student"
    /// @ai:effects pure
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("the student") {
            fallback
        } else {
            trimmed
        }
    }

    /// @ai:intent Check whether a usable name was supplied
    pub fn has_name(&self) -> bool {
        let trimmed = self.name.trim();
        !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("the student")
    }
}

/// @ai:intent Flat key-value record as stored by the persistence layer
///
/// Every field is optional and loosely typed; [`StudentRecord::attributes`]
/// turns it into a well-formed [`StudentAttributes`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    pub student_name: Option<Value>,
    pub gender: Option<Value>,
    pub strengths: Option<Value>,
    pub weaknesses: Option<Value>,
    pub overall_attributes: Option<Value>,
    #[serde(alias = "selectedTopics")]
    pub topics: Option<Value>,
    #[serde(alias = "selectedSubjectTitles")]
    pub subjects: Option<Value>,
}

impl StudentRecord {
    /// @ai:intent Parse a record from JSON text
    /// @ai:pre content is a JSON object
    /// @ai:effects pure
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(Error::InvalidRecord(
                "expected a JSON object at the top level".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// @ai:intent Load a record from a JSON file
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// @ai:intent Convert into generator input, substituting safe defaults
    /// @ai:effects pure
    pub fn attributes(&self) -> StudentAttributes {
        StudentAttributes {
            name: text_field(&self.student_name),
            gender: Gender::parse(&text_field(&self.gender)),
            strengths: text_field(&self.strengths),
            weaknesses: text_field(&self.weaknesses),
            rating: self
                .overall_attributes
                .as_ref()
                .map(Rating::from_value)
                .unwrap_or_default(),
        }
    }

    /// @ai:intent Topic selections, empty when missing or not a list
    pub fn topics(&self) -> Vec<String> {
        self.topics.as_ref().map(coerce_list).unwrap_or_default()
    }

    /// @ai:intent Subject selections, empty when missing or not a list
    pub fn subjects(&self) -> Vec<String> {
        self.subjects.as_ref().map(coerce_list).unwrap_or_default()
    }
}

fn text_field(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
