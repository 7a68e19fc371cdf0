use maud::{html, Markup};

pub mod booking;
pub mod calculator;
pub mod chat;
pub mod error;
pub mod hero;
pub mod icons;
pub mod info;
pub mod navigation;
pub mod services;
pub mod testimonials;

pub use error::error_page;

pub fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-header" {
            h2 { (title) }
            p class="lead" { (subtitle) }
        }
    }
}

/// `hx-vals` payload; values are serialized as a JSON object.
pub fn hx_vals(value: serde_json::Value) -> String {
    value.to_string()
}

pub fn money(amount: impl std::fmt::Display) -> String {
    format!("${amount}")
}
