use crate::errors::InvalidDepartmentError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Department {
    Accounting,
    Finance,
    Hr,
    RAndD,
    Machining,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Accounting,
        Department::Finance,
        Department::Hr,
        Department::RAndD,
        Department::Machining,
    ];

    /// Member name as written in the data file
    pub fn name(&self) -> &'static str {
        match self {
            Department::Accounting => "ACCOUNTING",
            Department::Finance => "FINANCE",
            Department::Hr => "HR",
            Department::RAndD => "R_AND_D",
            Department::Machining => "MACHINING",
        }
    }

    /// Human label, e.g. "R And D"
    pub fn label(&self) -> String {
        self.name()
            .split('_')
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert data file string → enum
    pub fn from_name(s: &str) -> Option<Self> {
        Department::ALL.into_iter().find(|d| d.name() == s)
    }

    /// Helper: user input such as "machining", "R And D" or "r-and-d"
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .to_uppercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        Department::from_name(&normalized)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Department {
    type Err = InvalidDepartmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::from_code(s).ok_or_else(|| {
            InvalidDepartmentError::new(format!(
                "'{}' is not one of ACCOUNTING, FINANCE, HR, R_AND_D, MACHINING",
                s
            ))
        })
    }
}
