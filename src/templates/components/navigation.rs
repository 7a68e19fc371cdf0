use crate::templates::components::chat::chat_badge;
use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

pub const TOGGLE_CHAT_JS: &str =
    "var w = document.getElementById('chat-widget'); w.hidden = !w.hidden;";

const SECTIONS: &[(&str, &str)] = &[
    ("home", "Inicio"),
    ("services", "Servicios"),
    ("calculator", "Calculadora"),
    ("booking", "Agendar"),
    ("testimonials", "Testimonios"),
];

pub fn navigation() -> Markup {
    html! {
        nav class="navbar" {
            div class="container navbar-inner" {
                a href="#home" class="brand" {
                    (icon(Icon::Sparkles, "icon-lg brand-icon"))
                    span { "CleanerClub" }
                }
                ul class="nav-links" {
                    @for (id, label) in SECTIONS {
                        li { a href=(format!("#{id}")) { (label) } }
                    }
                }
                button type="button" class="chat-toggle" onclick=(TOGGLE_CHAT_JS) aria-label="Abrir chat" {
                    (icon(Icon::Message, "icon-md"))
                    (chat_badge(0, false))
                }
            }
        }
    }
}
