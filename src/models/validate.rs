//! Field validators.
//!
//! Every setter on [`Employee`](super::employee::Employee) runs one of these
//! before touching the field, so a failed check leaves the old value in place.

use crate::errors::ValidationError;
use std::path::Path;

/// Substring every company email address must contain.
pub const EMAIL_DOMAIN: &str = "@acme-machining.com";

/// Image assigned when none is supplied.
pub const IMAGE_PLACEHOLDER: &str = "./images/placeholder.png";

pub const MIN_YEARLY: f64 = 50000.0;
pub const MIN_HOURLY: f64 = 15.0;
pub const MAX_HOURLY: f64 = 99.99;

pub fn name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

pub fn email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !email.contains(EMAIL_DOMAIN) {
        return Err(ValidationError::InvalidEmail(EMAIL_DOMAIN));
    }
    Ok(())
}

pub fn image(image: &str) -> Result<(), ValidationError> {
    if image.is_empty() {
        return Err(ValidationError::InvalidImage);
    }
    Ok(())
}

/// Like [`image`], but the path must also exist on disk.
pub fn image_on_disk(image_path: &str) -> Result<(), ValidationError> {
    image(image_path)?;
    if !Path::new(image_path).exists() {
        return Err(ValidationError::ImageNotFound(image_path.to_string()));
    }
    Ok(())
}

/// Strictly greater than 50000.
pub fn yearly(yearly: f64) -> Result<(), ValidationError> {
    if !(yearly.is_finite() && yearly > MIN_YEARLY) {
        return Err(ValidationError::InvalidYearly);
    }
    Ok(())
}

/// Open interval (15, 99.99).
pub fn hourly(hourly: f64) -> Result<(), ValidationError> {
    if !(MIN_HOURLY < hourly && hourly < MAX_HOURLY) {
        return Err(ValidationError::InvalidHourly);
    }
    Ok(())
}
