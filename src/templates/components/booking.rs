use crate::domain::availability::{date_key, Availability};
use crate::domain::booking::Booking;
use crate::domain::pricing::BudgetCalculator;
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::{hx_vals, money, section_header};
use chrono::NaiveDate;
use maud::{html, Markup};
use serde_json::json;

pub struct BookingView<'a> {
    pub calc: &'a BudgetCalculator,
    pub today: NaiveDate,
    /// Set right after a successful submission; the form itself is blank.
    pub confirmation: Option<&'a Booking>,
}

pub fn booking_section(view: &BookingView) -> Markup {
    html! {
        section id="booking" class="section" {
            div class="container narrow" {
                (section_header("Agenda tu Servicio", "Selecciona fecha y hora disponible para tu servicio"))

                @if let Some(booking) = view.confirmation {
                    (confirmation_panel(booking))
                }

                form
                    id="booking-form"
                    class="card stack"
                    hx-post="/booking"
                    hx-include="#calculator-form"
                    hx-target="#booking"
                    hx-swap="outerHTML"
                {
                    div class="field-row" {
                        (text_field("Nombre completo", "name", "text", None))
                        (text_field("Correo electrónico", "email", "email", None))
                    }
                    div class="field-row" {
                        (text_field("Teléfono", "phone", "tel", None))
                        div class="field" {
                            label for="booking-date" { "Fecha del servicio" }
                            input
                                id="booking-date"
                                type="date"
                                name="date"
                                min=(date_key(view.today))
                                required
                                hx-get="/booking/slots"
                                hx-trigger="change"
                                hx-target="#slot-picker"
                                hx-swap="outerHTML";
                        }
                    }
                    (text_field(
                        "Dirección",
                        "address",
                        "text",
                        Some("Dirección completa donde se realizará el servicio"),
                    ))

                    div id="slot-picker" {}

                    (booking_summary(view.calc, false))
                    (submit_button(false, false))
                }
            }
        }
    }
}

fn text_field(label: &str, name: &str, kind: &str, placeholder: Option<&str>) -> Markup {
    let id = format!("booking-{name}");
    html! {
        div class="field" {
            label for=(id) { (label) }
            input id=(id) type=(kind) name=(name) placeholder=[placeholder] required;
        }
    }
}

/// Slot buttons for the chosen date. A time only counts as selected when
/// it is one of that day's open slots.
pub fn slot_picker(
    date: Option<NaiveDate>,
    time: Option<&str>,
    availability: &Availability,
) -> Markup {
    let Some(date) = date else {
        return html! { div id="slot-picker" {} };
    };
    let selected = time.filter(|t| availability.is_open(date, t));

    html! {
        div id="slot-picker" class="field" {
            @match availability.slots_for(date) {
                Some(slots) => {
                    label { "Horarios disponibles" }
                    div class="slot-grid" {
                        @for slot in slots {
                            @let is_selected = selected == Some(slot.time);
                            button.slot.slot-taken[!slot.available].slot-selected[is_selected]
                                type="button"
                                disabled[!slot.available]
                                hx-get="/booking/slots"
                                hx-vals=(hx_vals(json!({ "date": date_key(date), "time": slot.time })))
                                hx-target="#slot-picker"
                                hx-swap="outerHTML"
                            {
                                (slot.time)
                                @if !slot.available {
                                    small { "No disponible" }
                                }
                            }
                        }
                    }
                    @if let Some(t) = selected {
                        input type="hidden" name="time" value=(t);
                    }
                }
                None => {
                    p class="note" { "No hay horarios para esta fecha. Atendemos de lunes a sábado durante las próximas dos semanas." }
                }
            }
        }
    }
}

/// Response to a date or slot pick: picker plus the submit button out of band.
pub fn slot_update(date: Option<NaiveDate>, time: Option<&str>, availability: &Availability) -> Markup {
    let can_submit = date
        .zip(time)
        .is_some_and(|(d, t)| availability.is_open(d, t));

    html! {
        (slot_picker(date, time, availability))
        (submit_button(can_submit, true))
    }
}

pub fn submit_button(can_submit: bool, oob: bool) -> Markup {
    html! {
        button
            id="booking-submit"
            type="submit"
            class="btn btn-primary btn-block"
            disabled[!can_submit]
            hx-swap-oob=[oob.then_some("true")]
        {
            @if can_submit { "Confirmar Reserva" } @else { "Selecciona un horario" }
        }
    }
}

/// Calculator snapshot shown inside the booking form; hidden while the
/// total is zero.
pub fn booking_summary(calc: &BudgetCalculator, oob: bool) -> Markup {
    let total = calc.total();
    let extras: Vec<&str> = calc.selected_extras().iter().map(|e| e.name).collect();

    html! {
        div id="booking-summary" hx-swap-oob=[oob.then_some("true")] {
            @if total > 0 {
                div class="summary-box" {
                    h4 { "Resumen del servicio a agendar:" }
                    p { "• Servicio: " (calc.service().map(|s| s.title).unwrap_or_default()) }
                    p { "• " (calc.rooms) " habitación(es) + " (calc.bathrooms) " baño(s)" }
                    @if !extras.is_empty() {
                        p { "• Extras: " (extras.join(", ")) }
                    }
                    p { "• Frecuencia: " (calc.frequency.label()) }
                    p class="total" { "• Total: " (money(total)) }
                }
            }
        }
    }
}

pub fn confirmation_panel(booking: &Booking) -> Markup {
    let details = &booking.service_details;
    html! {
        div class="confirmation" role="status" {
            (icon(Icon::Check, "icon-lg"))
            div {
                h3 { "¡Reserva confirmada!" }
                p { "Servicio: " strong { (details.service) } }
                p { "Fecha: " strong { (booking.date_label()) } }
                p { "Hora: " strong { (booking.form.time.as_deref().unwrap_or_default()) } }
                p { "Total: " strong { (money(details.total)) } }
                p class="muted" { "Recibirás una confirmación por email y SMS." }
            }
        }
    }
}
