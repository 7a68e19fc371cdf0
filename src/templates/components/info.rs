// Static sections below the testimonials.
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::navigation::TOGGLE_CHAT_JS;
use crate::templates::components::section_header;
use maud::{html, Markup};

pub fn why_us_section() -> Markup {
    let tiles = [
        (Icon::Bot, "Asistente 24/7", "Resuelve tus dudas al instante, a cualquier hora"),
        (Icon::Calculator, "Precios Transparentes", "Calculadora automática sin sorpresas ni costos ocultos"),
        (Icon::Clock, "Agendamiento Fácil", "Reserva en segundos eligiendo entre los horarios disponibles"),
        (Icon::Shield, "Garantía Total", "Personal certificado y seguro de satisfacción garantizada"),
    ];

    html! {
        section class="section section-accent" {
            div class="container" {
                (section_header("¿Por qué elegir CleanerClub?", "Tecnología y calidad al servicio de tu hogar"))
                div class="grid grid-4" {
                    @for (kind, title, text) in tiles {
                        div class="tile" {
                            (icon(kind, "icon-lg"))
                            h3 { (title) }
                            p { (text) }
                        }
                    }
                }
            }
        }
    }
}

pub fn contact_section() -> Markup {
    html! {
        section id="contact" class="section section-dark" {
            div class="container" {
                (section_header("Contáctanos", "Estamos aquí para ayudarte con todas tus necesidades de limpieza"))
                div class="grid grid-3 center" {
                    div class="contact-item" {
                        (icon(Icon::Phone, "icon-lg"))
                        h3 { "Teléfono" }
                        p { "+56 9 1234 5678" }
                    }
                    div class="contact-item" {
                        (icon(Icon::Mail, "icon-lg"))
                        h3 { "Email" }
                        p { a href="mailto:info@cleanerclub.cl" { "info@cleanerclub.cl" } }
                    }
                    div class="contact-item" {
                        (icon(Icon::MapPin, "icon-lg"))
                        h3 { "Cobertura" }
                        p { "La Serena y alrededores" }
                    }
                }
            }
        }
    }
}

pub fn footer(whatsapp_url: &str) -> Markup {
    html! {
        footer class="footer" {
            div class="container grid grid-4" {
                div {
                    div class="brand" {
                        (icon(Icon::Sparkles, "icon-md"))
                        span { "CleanerClub" }
                    }
                    p class="muted" { "Limpieza profesional con tecnología moderna para tu comodidad." }
                }
                div {
                    h4 { "Servicios" }
                    ul {
                        li { a href="#service-general" { "Limpieza General" } }
                        li { a href="#service-deep" { "Limpieza Profunda" } }
                        li { a href="#service-post-construction" { "Post-Construcción" } }
                        li { a href="#service-express" { "Servicios Express" } }
                    }
                }
                div {
                    h4 { "Empresa" }
                    ul {
                        li { "Sobre Nosotros" }
                        li { "Términos y Condiciones" }
                        li { "Política de Privacidad" }
                        li { "Trabajar con Nosotros" }
                    }
                }
                div {
                    h4 { "Síguenos" }
                    div class="social" {
                        a href=(whatsapp_url) target="_blank" rel="noopener" aria-label="WhatsApp" { (icon(Icon::Phone, "icon-sm")) }
                        button type="button" onclick=(TOGGLE_CHAT_JS) aria-label="Chat" { (icon(Icon::Message, "icon-sm")) }
                        a href="mailto:info@cleanerclub.cl" aria-label="Email" { (icon(Icon::Mail, "icon-sm")) }
                    }
                }
            }
            p class="container copyright" {
                "© 2024 CleanerClub. Todos los derechos reservados. | Desarrollado con ❤️ en La Serena, Chile"
            }
        }
    }
}

/// Floating shortcuts in the bottom-left corner.
pub fn quick_actions(whatsapp_url: &str) -> Markup {
    html! {
        div class="quick-actions" {
            a class="fab fab-whatsapp" href=(whatsapp_url) target="_blank" rel="noopener" title="Contactar por WhatsApp" {
                (icon(Icon::Phone, "icon-md"))
            }
            a class="fab fab-primary" href="#calculator" title="Calcular precio" {
                (icon(Icon::Calculator, "icon-md"))
            }
        }
    }
}
