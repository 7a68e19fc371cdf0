use crate::domain::catalog::{Service, SERVICES};
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::{money, section_header};
use maud::{html, Markup};

pub fn services_section() -> Markup {
    html! {
        section id="services" class="section" {
            div class="container" {
                (section_header(
                    "Nuestros Servicios",
                    "Ofrecemos una amplia gama de servicios de limpieza con precios transparentes y calculadora automática",
                ))
                div class="grid grid-3" {
                    @for service in SERVICES {
                        (service_card(service))
                    }
                }
            }
        }
    }
}

pub fn service_card(service: &Service) -> Markup {
    html! {
        article class="card service-card" id=(format!("service-{}", service.id)) {
            h3 { (service.title) }
            p class="muted" { (service.description) }
            ul class="feature-list" {
                @for feature in service.features {
                    li { (icon(Icon::Check, "icon-xs check")) (feature) }
                }
            }
            p class="price-from" { "Desde " (money(service.base_price)) "/hora" }
            @if service.consultation {
                p class="note" { "Requiere visita técnica para el presupuesto final." }
            }
            // Full reload so the calculator starts from this service.
            a class="btn btn-primary btn-block" href=(format!("/?service={}#calculator", service.id)) {
                "Calcular Precio"
            }
        }
    }
}
