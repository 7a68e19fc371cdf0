use crate::templates::components::icons::{icon, Icon};
use maud::{html, Markup};

pub fn hero() -> Markup {
    html! {
        section id="home" class="hero" {
            div class="container hero-inner" {
                h1 { "Limpieza Profesional a tu Alcance" }
                p class="hero-lead" {
                    "Servicios de limpieza de alta calidad para tu hogar o negocio. Profesionales certificados, "
                    "productos ecológicos y precios transparentes con nuestra calculadora automática."
                }
                div class="hero-actions" {
                    a href="#calculator" class="btn btn-light" {
                        (icon(Icon::Calculator, "icon-sm"))
                        " Calcular Precio"
                    }
                    a href="#booking" class="btn btn-outline-light" {
                        (icon(Icon::Calendar, "icon-sm"))
                        " Agendar Ahora"
                    }
                }
            }
        }
    }
}
