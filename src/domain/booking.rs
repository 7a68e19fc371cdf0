// src/domain/booking.rs

use crate::domain::availability::{date_key, parse_date_key, Availability};
use crate::domain::pricing::BudgetCalculator;
use crate::errors::ServerError;
use crate::forms::FormData;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Contact and scheduling fields of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingForm {
    /// Lenient read used while the visitor is still filling the form.
    pub fn from_form(form: &FormData) -> Self {
        let text = |key: &str| form.non_empty(key).unwrap_or_default().to_string();
        Self {
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            address: text("address"),
            date: form.non_empty("date").and_then(parse_date_key),
            time: form.non_empty("time").map(str::to_string),
        }
    }

    /// Same checks as the browser's `required` attributes, a basic email
    /// shape check, and the chosen slot must be open. Stores the normalized
    /// email.
    pub fn validate(&mut self, availability: &Availability) -> Result<(), ServerError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(ServerError::BadRequest(format!("missing field: {field}")));
            }
        }
        self.email = normalize_email(&self.email)?;
        let Some(date) = self.date else {
            return Err(ServerError::BadRequest("missing field: date".into()));
        };
        let Some(time) = self.time.as_deref() else {
            return Err(ServerError::BadRequest("select a time slot".into()));
        };
        if !availability.is_open(date, time) {
            return Err(ServerError::BadRequest(format!(
                "slot not available: {} {time}",
                date_key(date)
            )));
        }
        Ok(())
    }
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Snapshot of the calculator at booking time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    /// Empty when the calculator names an unknown service.
    pub service: String,
    pub rooms: u32,
    pub bathrooms: u32,
    pub extras: Vec<String>,
    pub frequency: String,
    pub total: u32,
}

impl ServiceSummary {
    pub fn from_calculator(calc: &BudgetCalculator) -> Self {
        Self {
            service: calc.service().map(|s| s.title).unwrap_or_default().to_string(),
            rooms: calc.rooms,
            bathrooms: calc.bathrooms,
            extras: calc
                .selected_extras()
                .into_iter()
                .map(|e| e.name.to_string())
                .collect(),
            frequency: calc.frequency.label().to_string(),
            total: calc.total(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// A confirmed booking. Shown to the visitor once and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    /// Milliseconds since the epoch at confirmation time.
    pub id: i64,
    #[serde(flatten)]
    pub form: BookingForm,
    pub service_details: ServiceSummary,
    pub status: BookingStatus,
}

impl Booking {
    pub fn date_label(&self) -> String {
        self.form
            .date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_default()
    }
}

pub fn confirm(
    mut form: BookingForm,
    calc: &BudgetCalculator,
    availability: &Availability,
    now: DateTime<Utc>,
) -> Result<Booking, ServerError> {
    form.validate(availability)?;
    Ok(Booking {
        id: now.timestamp_millis(),
        form,
        service_details: ServiceSummary::from_calculator(calc),
        status: BookingStatus::Confirmed,
    })
}
