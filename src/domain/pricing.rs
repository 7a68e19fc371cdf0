// src/domain/pricing.rs

use crate::domain::catalog::{self, ExtraService, Service, DEFAULT_SERVICE_ID};
use crate::forms::FormData;
use std::collections::BTreeSet;

pub const MIN_ROOMS: u32 = 1;
pub const MAX_ROOMS: u32 = 10;
pub const MIN_BATHROOMS: u32 = 1;
pub const MAX_BATHROOMS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    #[default]
    Once,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Once,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Once => "Una vez",
            Frequency::Weekly => "Semanal",
            Frequency::Biweekly => "Quincenal",
            Frequency::Monthly => "Mensual",
        }
    }

    pub fn discount(self) -> f64 {
        match self {
            Frequency::Once => 0.0,
            Frequency::Weekly => 0.15,
            Frequency::Biweekly => 0.10,
            Frequency::Monthly => 0.05,
        }
    }

    pub fn discount_percent(self) -> u32 {
        (self.discount() * 100.0).round() as u32
    }

    /// Unknown keys fall back to a one-off visit.
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }
}

/// Everything the calculator form carries between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCalculator {
    pub rooms: u32,
    pub bathrooms: u32,
    pub service_id: String,
    pub extras: BTreeSet<String>,
    pub frequency: Frequency,
}

impl Default for BudgetCalculator {
    fn default() -> Self {
        Self {
            rooms: MIN_ROOMS,
            bathrooms: MIN_BATHROOMS,
            service_id: DEFAULT_SERVICE_ID.to_string(),
            extras: BTreeSet::new(),
            frequency: Frequency::Once,
        }
    }
}

impl BudgetCalculator {
    /// Reads `service`, `rooms`, `bathrooms`, `frequency` and repeated
    /// `extras`, then applies the one-shot `adjust` and `toggle` actions
    /// sent by the +/- buttons and extra checkboxes.
    pub fn from_form(form: &FormData) -> Self {
        let mut calc = Self {
            rooms: form
                .parse_or("rooms", MIN_ROOMS)
                .clamp(MIN_ROOMS, MAX_ROOMS),
            bathrooms: form
                .parse_or("bathrooms", MIN_BATHROOMS)
                .clamp(MIN_BATHROOMS, MAX_BATHROOMS),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            extras: form
                .get_all("extras")
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
            frequency: form
                .non_empty("frequency")
                .map(Frequency::from_key)
                .unwrap_or_default(),
        };

        if let Some(id) = form.non_empty("service") {
            calc.select_service(id);
        }
        if let Some(adjust) = form.non_empty("adjust") {
            calc.apply_adjust(adjust);
        }
        if let Some(extra_id) = form.non_empty("toggle") {
            calc.toggle_extra(extra_id);
        }

        calc
    }

    /// `"rooms:+1"`, `"bathrooms:-1"`; anything else is ignored.
    fn apply_adjust(&mut self, action: &str) {
        let Some((field, delta)) = action.split_once(':') else {
            return;
        };
        let Ok(delta) = delta.parse::<i32>() else {
            return;
        };
        match field {
            "rooms" => self.adjust_rooms(delta),
            "bathrooms" => self.adjust_bathrooms(delta),
            _ => {}
        }
    }

    pub fn adjust_rooms(&mut self, delta: i32) {
        self.rooms = step(self.rooms, delta, MIN_ROOMS, MAX_ROOMS);
    }

    pub fn adjust_bathrooms(&mut self, delta: i32) {
        self.bathrooms = step(self.bathrooms, delta, MIN_BATHROOMS, MAX_BATHROOMS);
    }

    /// Unknown ids are kept; they price at zero.
    pub fn select_service(&mut self, id: &str) {
        self.service_id = id.to_string();
    }

    pub fn toggle_extra(&mut self, id: &str) {
        if !self.extras.remove(id) {
            self.extras.insert(id.to_string());
        }
    }

    pub fn service(&self) -> Option<&'static Service> {
        catalog::find_service(&self.service_id)
    }

    /// Selected extras in catalogue order; unknown ids are skipped.
    pub fn selected_extras(&self) -> Vec<&'static ExtraService> {
        catalog::EXTRA_SERVICES
            .iter()
            .filter(|e| self.extras.contains(e.id))
            .collect()
    }

    pub fn total(&self) -> u32 {
        calculate_price(self)
    }
}

fn step(value: u32, delta: i32, min: u32, max: u32) -> u32 {
    let next = i64::from(value) + i64::from(delta);
    next.clamp(i64::from(min), i64::from(max)) as u32
}

/// Rounded total for the calculator state. Unknown services price at 0 and
/// unknown extras add nothing.
pub fn calculate_price(calc: &BudgetCalculator) -> u32 {
    let Some(service) = calc.service() else {
        return 0;
    };

    let base = service.base_price;
    let room_price = f64::from(calc.rooms) * base * service.room_multiplier;
    let bathroom_price = f64::from(calc.bathrooms) * base * service.bathroom_multiplier;
    let extras_price: f64 = calc
        .extras
        .iter()
        .filter_map(|id| catalog::find_extra(id))
        .map(|e| e.price)
        .sum();

    let subtotal = room_price + bathroom_price + extras_price;
    let total = subtotal * (1.0 - calc.frequency.discount());

    total.round().max(0.0) as u32
}
