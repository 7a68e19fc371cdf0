// templates/pages/home.rs

use crate::domain::chat::ChatMessage;
use crate::domain::pricing::BudgetCalculator;
use crate::templates::components::booking::{booking_section, BookingView};
use crate::templates::components::calculator::calculator_section;
use crate::templates::components::chat::chat_widget;
use crate::templates::components::hero::hero;
use crate::templates::components::info::{contact_section, footer, quick_actions, why_us_section};
use crate::templates::components::navigation::navigation;
use crate::templates::components::services::services_section;
use crate::templates::components::testimonials::testimonials_section;
use crate::templates::desktop_layout;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub calc: &'a BudgetCalculator,
    pub today: NaiveDate,
    pub greeting: &'a ChatMessage,
    pub whatsapp_url: &'a str,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "CleanerClub | Limpieza profesional en La Serena",
        html! {
            (navigation())
            main {
                (hero())
                (services_section())
                (calculator_section(vm.calc))
                (booking_section(&BookingView {
                    calc: vm.calc,
                    today: vm.today,
                    confirmation: None,
                }))
                (testimonials_section(0))
                (why_us_section())
                (contact_section())
            }
            (footer(vm.whatsapp_url))
            (chat_widget(vm.greeting, vm.whatsapp_url))
            (quick_actions(vm.whatsapp_url))
        },
    )
}
