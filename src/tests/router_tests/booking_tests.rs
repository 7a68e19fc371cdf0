// src/tests/router_tests/booking_tests.rs
use crate::domain::availability::{date_key, Availability};
use crate::errors::ServerError;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, opening_tag, post_form, test_state};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::{rngs::StdRng, SeedableRng};

/// State with a seeded slot table for the two weeks after 2030-01-06.
fn seeded_state() -> (AppState, Availability) {
    let state = test_state();
    let today = NaiveDate::from_ymd_opt(2030, 1, 6).unwrap();
    let table = Availability::generate(today, &mut StdRng::seed_from_u64(11));
    state.set_availability(table.clone());
    (state, table)
}

/// State where every slot from 2030-01-07 to 2030-01-20 is open.
fn open_state() -> AppState {
    let state = test_state();
    state.set_availability(Availability::fully_open(
        NaiveDate::from_ymd_opt(2030, 1, 6).unwrap(),
    ));
    state
}

fn slots(state: &AppState, query: &str) -> String {
    let resp = get(state, &format!("/booking/slots?{query}")).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn picking_a_date_lists_slots_and_keeps_submit_disabled() {
    let (state, table) = seeded_state();
    let date = table.dates().next().unwrap();

    let body = slots(&state, &format!("date={}", date_key(date)));
    assert!(body.contains("Horarios disponibles"));
    for time in ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00"] {
        assert!(body.contains(time));
    }
    assert!(!body.contains(r#"name="time""#));

    let submit = opening_tag(&body, "booking-submit");
    assert!(submit.contains(" disabled"), "{submit}");
    assert!(submit.contains(r#"hx-swap-oob="true""#));
}

#[test]
fn picking_an_open_slot_enables_submit() {
    let (state, table) = seeded_state();
    let (date, slot) = table
        .dates()
        .find_map(|d| {
            table
                .slots_for(d)
                .unwrap()
                .iter()
                .find(|s| s.available)
                .map(|s| (d, s.time))
        })
        .unwrap();

    let body = slots(&state, &format!("date={}&time={slot}", date_key(date)));
    assert!(body.contains(&format!(r#"<input type="hidden" name="time" value="{slot}">"#)));
    assert!(body.contains("slot-selected"));

    let submit = opening_tag(&body, "booking-submit");
    assert!(!submit.contains(" disabled"), "{submit}");
    assert!(body.contains("Confirmar Reserva"));
}

#[test]
fn taken_slot_cannot_be_selected() {
    let (state, table) = seeded_state();
    let taken = table.dates().find_map(|d| {
        table
            .slots_for(d)
            .unwrap()
            .iter()
            .find(|s| !s.available)
            .map(|s| (d, s.time))
    });
    // 72 draws at 30% each; a seeded table always has some taken slots.
    let (date, slot) = taken.unwrap();

    let body = slots(&state, &format!("date={}&time={slot}", date_key(date)));
    assert!(!body.contains(r#"name="time""#));
    assert!(opening_tag(&body, "booking-submit").contains(" disabled"));
    assert!(body.contains("No disponible"));
}

#[test]
fn sunday_has_no_slots() {
    let (state, table) = seeded_state();
    let sunday = NaiveDate::from_ymd_opt(2030, 1, 13).unwrap();
    assert_eq!(sunday.weekday(), Weekday::Sun);
    assert!(table.slots_for(sunday).is_none());

    let body = slots(&state, "date=2030-01-13");
    assert!(body.contains("No hay horarios para esta fecha"));
}

#[test]
fn no_date_renders_an_empty_picker() {
    let (state, _) = seeded_state();
    let body = slots(&state, "date=");
    assert!(body.contains(r#"<div id="slot-picker"></div>"#));
}

const FILLED: &str = "name=Ana+L%C3%B3pez&email=ana%40mail.cl&phone=%2B56911111111\
&address=Av.+del+Mar+100&date=2030-01-08&time=10%3A00\
&service=general&rooms=2&bathrooms=1&frequency=once";

#[test]
fn submitting_a_complete_booking_confirms_and_resets() {
    let state = open_state();
    let resp = post_form(&state, "/booking", FILLED).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("¡Reserva confirmada!"));
    assert!(body.contains("Limpieza General"));
    assert!(body.contains("08-01-2030"));
    assert!(body.contains("10:00"));
    assert!(body.contains("$70"));
    assert!(body.contains("Recibirás una confirmación por email y SMS."));

    // The form comes back blank with the submit locked again.
    assert!(!body.contains("Ana López"));
    assert!(opening_tag(&body, "booking-submit").contains(" disabled"));
}

#[test]
fn submitting_without_a_time_is_rejected() {
    let state = open_state();
    let body = FILLED.replace("&time=10%3A00", "");
    assert!(matches!(
        post_form(&state, "/booking", &body),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn submitting_with_blank_required_fields_is_rejected() {
    let state = open_state();
    for field in ["name", "email", "phone", "address", "date"] {
        let body: String = FILLED
            .split('&')
            .map(|pair| {
                if pair.starts_with(&format!("{field}=")) {
                    format!("{field}=")
                } else {
                    pair.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        assert!(
            matches!(post_form(&state, "/booking", &body), Err(ServerError::BadRequest(_))),
            "{field} should be required"
        );
    }
}

#[test]
fn submitting_a_malformed_email_is_rejected() {
    let state = open_state();
    let body = FILLED.replace("ana%40mail.cl", "ana.mail.cl");
    assert!(matches!(
        post_form(&state, "/booking", &body),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn submitting_a_slot_outside_the_table_is_rejected() {
    let state = open_state();
    for (date, time) in [
        ("2030-01-13", "03%3A17"), // Sunday, not a slot time
        ("2030-01-13", "10%3A00"), // Sunday
        ("2030-01-08", "03%3A17"), // not a slot time
        ("2030-02-20", "10%3A00"), // past the window
    ] {
        let body = FILLED
            .replace("date=2030-01-08", &format!("date={date}"))
            .replace("time=10%3A00", &format!("time={time}"));
        assert!(
            matches!(post_form(&state, "/booking", &body), Err(ServerError::BadRequest(_))),
            "{date} {time}"
        );
    }
}

#[test]
fn submitting_a_taken_slot_is_rejected() {
    let (state, table) = seeded_state();
    let (date, slot) = table
        .dates()
        .find_map(|d| {
            table
                .slots_for(d)
                .unwrap()
                .iter()
                .find(|s| !s.available)
                .map(|s| (d, s.time))
        })
        .unwrap();

    let body = FILLED
        .replace("date=2030-01-08", &format!("date={}", date_key(date)))
        .replace("time=10%3A00", &format!("time={slot}"));
    assert!(matches!(
        post_form(&state, "/booking", &body),
        Err(ServerError::BadRequest(_))
    ));
}
