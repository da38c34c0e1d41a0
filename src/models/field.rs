use chrono::NaiveDate;
use std::fmt;

/// Settable (and one read-only) employee fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Email,
    Image,
    Yearly,
    Hourly,
    Role,
    Department,
    HiredDate,
    LastDay,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Email => "email",
            Field::Image => "image",
            Field::Yearly => "yearly",
            Field::Hourly => "hourly",
            Field::Role => "role",
            Field::Department => "department",
            Field::HiredDate => "hired_date",
            Field::LastDay => "last_day",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An untyped value coming from the presentation layer.
///
/// Setters reached through [`Employee::set_field`](super::employee::Employee::set_field)
/// check the variant as well as the content: an `Int` is not accepted where a
/// float is expected, `Text` is not a date, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Missing,
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Interpret raw pay input the way a text box would: anything that parses
    /// as a number becomes a float, everything else stays text.
    pub fn from_pay_input(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => FieldValue::Float(v),
            Err(_) => FieldValue::Text(s.to_string()),
        }
    }

    /// `YYYY-MM-DD` becomes a date, everything else stays text.
    pub fn from_date_input(s: &str) -> Self {
        match crate::utils::date::parse_date(s.trim()) {
            Some(d) => FieldValue::Date(d),
            None => FieldValue::Text(s.to_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}
