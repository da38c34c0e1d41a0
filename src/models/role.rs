use crate::errors::InvalidRoleError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Ceo,
    Cfo,
    Cio,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Ceo, Role::Cfo, Role::Cio];

    /// Member name as written in the data file
    pub fn name(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Cfo => "CFO",
            Role::Cio => "CIO",
        }
    }

    /// Convert data file string → enum
    pub fn from_name(s: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.name() == s)
    }

    /// Helper: user input, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Role::from_name(&code.trim().to_uppercase())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| {
            InvalidRoleError::new(format!("'{}' is not one of CEO, CFO, CIO", s))
        })
    }
}
