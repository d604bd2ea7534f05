//! Request validation for client and order bodies.

use crate::error::AppError;
use crate::model::{NewClient, NewOrder};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

static DATE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(DATE_PATTERN).ok());

pub struct RequestValidator;

impl RequestValidator {
    pub fn validate_client(body: &NewClient) -> Result<(), AppError> {
        require("name", &body.name)?;
        require("email", &body.email)?;
        validate_email("email", &body.email)?;
        require("phone", &body.phone)?;
        Ok(())
    }

    pub fn validate_order(body: &NewOrder) -> Result<(), AppError> {
        require("product", &body.product)?;
        if !body.amount.is_finite() {
            return Err(AppError::Validation("amount must be a finite number".into()));
        }
        if body.amount < 0.0 {
            return Err(AppError::Validation("amount must be at least 0".into()));
        }
        validate_date("date", &body.date)?;
        Ok(())
    }
}

fn require(col: &str, v: &str) -> Result<(), AppError> {
    if v.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    Ok(())
}

fn validate_email(col: &str, v: &str) -> Result<(), AppError> {
    if !v.contains('@') || v.len() < 3 {
        return Err(AppError::Validation(format!("{} must be a valid email", col)));
    }
    Ok(())
}

/// Dates must be zero-padded `YYYY-MM-DD` so that text order matches calendar order.
pub fn validate_date(col: &str, v: &str) -> Result<(), AppError> {
    let re = DATE_RE
        .as_ref()
        .ok_or_else(|| AppError::Validation(format!("invalid pattern for {}", col)))?;
    if !re.is_match(v) || NaiveDate::parse_from_str(v, DATE_FORMAT).is_err() {
        return Err(AppError::Validation(format!("{} must be a date in YYYY-MM-DD form", col)));
    }
    Ok(())
}
