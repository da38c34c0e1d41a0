use serde::Serialize;
use std::fmt;

/// The six concrete employee variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmployeeType {
    Salaried,
    Hourly,
    Executive,
    Manager,
    Permanent,
    Temporary,
}

impl EmployeeType {
    pub const ALL: [EmployeeType; 6] = [
        EmployeeType::Salaried,
        EmployeeType::Hourly,
        EmployeeType::Executive,
        EmployeeType::Manager,
        EmployeeType::Permanent,
        EmployeeType::Temporary,
    ];

    /// Type name used as the leading token of a record
    pub fn name(&self) -> &'static str {
        match self {
            EmployeeType::Salaried => "Salaried",
            EmployeeType::Hourly => "Hourly",
            EmployeeType::Executive => "Executive",
            EmployeeType::Manager => "Manager",
            EmployeeType::Permanent => "Permanent",
            EmployeeType::Temporary => "Temporary",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        EmployeeType::ALL.into_iter().find(|t| t.name() == s)
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        EmployeeType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(code))
    }

    pub fn is_salaried(&self) -> bool {
        matches!(
            self,
            EmployeeType::Salaried | EmployeeType::Executive | EmployeeType::Manager
        )
    }

    pub fn is_hourly(&self) -> bool {
        !self.is_salaried()
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
