use crate::domain::catalog::{EXTRA_SERVICES, SERVICES};
use crate::domain::pricing::{
    BudgetCalculator, Frequency, MAX_BATHROOMS, MAX_ROOMS, MIN_BATHROOMS, MIN_ROOMS,
};
use crate::templates::components::booking::booking_summary;
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::{hx_vals, money, section_header};
use maud::{html, Markup};
use serde_json::json;

/// Every control re-renders the whole section with the form's current state.
const HX_GET: &str = "/calculator";
const HX_TARGET: &str = "#calculator";
const HX_INCLUDE: &str = "#calculator-form";

pub fn calculator_section(calc: &BudgetCalculator) -> Markup {
    html! {
        section id="calculator" class="section section-muted" {
            div class="container narrow" {
                (section_header("Calculadora de Precios", "Obtén tu presupuesto instantáneo y transparente"))
                div class="card calculator-grid" {
                    (calculator_form(calc))
                    (price_summary(calc))
                }
            }
        }
    }
}

/// Calculator section plus the booking summary, swapped out of band.
pub fn calculator_update(calc: &BudgetCalculator) -> Markup {
    html! {
        (calculator_section(calc))
        (booking_summary(calc, true))
    }
}

fn calculator_form(calc: &BudgetCalculator) -> Markup {
    html! {
        form id="calculator-form" class="stack" onsubmit="return false" {
            input type="hidden" name="rooms" value=(calc.rooms);
            input type="hidden" name="bathrooms" value=(calc.bathrooms);
            @for id in &calc.extras {
                input type="hidden" name="extras" value=(id);
            }

            div class="field" {
                label for="calc-service" { "Tipo de Servicio" }
                select
                    id="calc-service"
                    name="service"
                    hx-get=(HX_GET)
                    hx-include=(HX_INCLUDE)
                    hx-target=(HX_TARGET)
                    hx-swap="outerHTML"
                {
                    @for service in SERVICES {
                        option value=(service.id) selected[service.id == calc.service_id] { (service.title) }
                    }
                }
            }

            div class="field-row" {
                (counter("Habitaciones", "rooms", calc.rooms, MIN_ROOMS, MAX_ROOMS))
                (counter("Baños", "bathrooms", calc.bathrooms, MIN_BATHROOMS, MAX_BATHROOMS))
            }

            div class="field" {
                label for="calc-frequency" { "Frecuencia" }
                select
                    id="calc-frequency"
                    name="frequency"
                    hx-get=(HX_GET)
                    hx-include=(HX_INCLUDE)
                    hx-target=(HX_TARGET)
                    hx-swap="outerHTML"
                {
                    @for freq in Frequency::ALL {
                        option value=(freq.key()) selected[freq == calc.frequency] {
                            (freq.label())
                            @if freq.discount_percent() > 0 {
                                " (-" (freq.discount_percent()) "%)"
                            }
                        }
                    }
                }
            }

            fieldset class="field" {
                legend { "Servicios Adicionales" }
                div class="extras-grid" {
                    @for extra in EXTRA_SERVICES {
                        label class="extra-option" {
                            // Unnamed: the hidden `extras` inputs carry the set,
                            // the checkbox only sends a toggle.
                            input
                                type="checkbox"
                                checked[calc.extras.contains(extra.id)]
                                hx-get=(HX_GET)
                                hx-include=(HX_INCLUDE)
                                hx-vals=(hx_vals(json!({ "toggle": extra.id })))
                                hx-target=(HX_TARGET)
                                hx-swap="outerHTML";
                            span { (extra.name) " (+" (money(extra.price)) ")" }
                        }
                    }
                }
            }
        }
    }
}

fn counter(label: &str, field: &str, value: u32, min: u32, max: u32) -> Markup {
    html! {
        div class="field" {
            label { (label) }
            div class="counter" {
                button
                    type="button"
                    class="counter-btn"
                    disabled[value <= min]
                    aria-label=(format!("Menos {}", label.to_lowercase()))
                    hx-get=(HX_GET)
                    hx-include=(HX_INCLUDE)
                    hx-vals=(hx_vals(json!({ "adjust": format!("{field}:-1") })))
                    hx-target=(HX_TARGET)
                    hx-swap="outerHTML"
                {
                    (icon(Icon::Minus, "icon-xs"))
                }
                span class="counter-value" id=(format!("calc-{field}")) { (value) }
                button
                    type="button"
                    class="counter-btn"
                    disabled[value >= max]
                    aria-label=(format!("Más {}", label.to_lowercase()))
                    hx-get=(HX_GET)
                    hx-include=(HX_INCLUDE)
                    hx-vals=(hx_vals(json!({ "adjust": format!("{field}:+1") })))
                    hx-target=(HX_TARGET)
                    hx-swap="outerHTML"
                {
                    (icon(Icon::Plus, "icon-xs"))
                }
            }
        }
    }
}

pub fn price_summary(calc: &BudgetCalculator) -> Markup {
    let discount = calc.frequency.discount_percent();
    let extras = calc.selected_extras();

    html! {
        aside class="price-summary" {
            h3 { "Resumen del Presupuesto" }
            dl {
                dt { "Servicio:" }
                dd { (calc.service().map(|s| s.title).unwrap_or_default()) }
                dt { "Habitaciones:" }
                dd { (calc.rooms) }
                dt { "Baños:" }
                dd { (calc.bathrooms) }
                @if !extras.is_empty() {
                    dt { "Extras:" }
                    dd { (extras.len()) }
                }
                dt { "Frecuencia:" }
                dd { (calc.frequency.label()) }
                @if discount > 0 {
                    dt { "Descuento:" }
                    dd class="discount" { "-" (discount) "%" }
                }
            }
            hr;
            p class="total" {
                span { "Total:" }
                strong id="calc-total" { (money(calc.total())) }
            }
            a href="#booking" class="btn btn-primary btn-block" { "Agendar Este Servicio" }
        }
    }
}
