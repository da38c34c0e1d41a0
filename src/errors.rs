//! Unified application error type.
//! Field validation has its own error (`ValidationError`) so the model can be
//! used without the CLI; everything else returns `AppError`.

use std::io;
use thiserror::Error;

/// Raised when a role outside CEO/CFO/CIO is assigned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid role: {message}")]
pub struct InvalidRoleError {
    pub message: String,
}

impl InvalidRoleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised when a department outside the company departments is assigned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid department: {message}")]
pub struct InvalidDepartmentError {
    pub message: String,
}

impl InvalidDepartmentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email: must contain {0}")]
    InvalidEmail(&'static str),

    #[error("Invalid image")]
    InvalidImage,

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Invalid yearly salary: must be a float greater than 50000")]
    InvalidYearly,

    #[error("Invalid hourly salary: must be a float between 15 and 99.99")]
    InvalidHourly,

    #[error("Invalid hired date")]
    InvalidHiredDate,

    #[error("Invalid last day")]
    InvalidLastDay,

    #[error("Employee ids exhausted")]
    IdsExhausted,

    #[error("Field '{0}' is read-only")]
    ReadOnly(&'static str),

    #[error("Field '{field}' does not apply to {kind} employees")]
    NotApplicable {
        field: &'static str,
        kind: &'static str,
    },

    #[error(transparent)]
    Role(#[from] InvalidRoleError),

    #[error(transparent)]
    Department(#[from] InvalidDepartmentError),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data file
    // ---------------------------
    #[error("Data file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corrupt record at line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },

    #[error("Unknown employee type '{name}' at line {line}")]
    UnknownEmployeeType { line: usize, name: String },

    // ---------------------------
    // Model errors
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No employee with ID {0}")]
    EmployeeNotFound(u32),

    #[error("Invalid employee type: {0}")]
    InvalidEmployeeType(String),

    #[error("Missing required option: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
