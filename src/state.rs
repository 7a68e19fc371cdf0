//! Shared application state.
//!
//! Holds the runtime config and the current simulated availability table.
//! The table is the only mutable value shared between workers and is
//! replaced wholesale whenever the landing page is rendered.

use crate::config::AppConfig;
use crate::domain::availability::Availability;
use crate::errors::ServerError;
use chrono::{Local, NaiveDate};
use std::sync::Mutex;

pub struct AppState {
    pub config: AppConfig,
    availability: Mutex<Availability>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let availability = Availability::generate(Local::now().date_naive(), &mut rand::thread_rng());
        Self {
            config,
            availability: Mutex::new(availability),
        }
    }

    /// Re-rolls every slot for the window starting after `today`.
    pub fn refresh_availability(&self, today: NaiveDate) -> Result<Availability, ServerError> {
        let fresh = Availability::generate(today, &mut rand::thread_rng());
        let mut slot = self
            .availability
            .lock()
            .map_err(|_| ServerError::InternalError)?;
        *slot = fresh.clone();
        Ok(fresh)
    }

    pub fn availability(&self) -> Result<Availability, ServerError> {
        self.availability
            .lock()
            .map(|a| a.clone())
            .map_err(|_| ServerError::InternalError)
    }

    #[cfg(test)]
    pub fn set_availability(&self, table: Availability) {
        if let Ok(mut slot) = self.availability.lock() {
            *slot = table;
        }
    }
}
