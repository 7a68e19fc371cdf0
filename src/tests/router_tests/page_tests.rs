// src/tests/router_tests/page_tests.rs
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, opening_tag, post_form, test_state};

#[test]
fn home_renders_every_section() {
    let state = test_state();
    let resp = get(&state, "/").unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(resp);
    for id in [
        "home",
        "services",
        "calculator",
        "booking",
        "testimonials",
        "contact",
        "chat-widget",
    ] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(body.contains("Limpieza Profesional a tu Alcance"));
    assert!(body.contains("https://wa.me/56912345678?text=Hola%20CleanerClub%2C%20necesito%20ayuda"));
}

#[test]
fn home_starts_with_disabled_booking_submit() {
    let state = test_state();
    let body = body_string(get(&state, "/").unwrap());

    let submit = opening_tag(&body, "booking-submit");
    assert!(submit.contains(" disabled"), "{submit}");
    assert!(body.contains("Selecciona un horario"));
}

#[test]
fn home_preselects_service_from_query() {
    let state = test_state();
    let body = body_string(get(&state, "/?service=deep").unwrap());

    assert!(body.contains(r#"<option value="deep" selected>Limpieza Profunda</option>"#));
    // 1 room * 35 * 1.2 + 1 bath * 35 * 1.0 = 77
    assert!(body.contains(r#"<strong id="calc-total">$77</strong>"#));
}

#[test]
fn home_regenerates_availability() {
    let state = test_state();
    state.set_availability(Default::default());
    assert!(state.availability().unwrap().is_empty());

    get(&state, "/").unwrap();
    assert_eq!(state.availability().unwrap().len(), 12);
}

#[test]
fn greeting_comes_from_the_bot() {
    let state = test_state();
    let body = body_string(get(&state, "/").unwrap());
    let log_at = body.find(r#"id="chat-log""#).unwrap();
    assert!(body[log_at..].contains("from-bot"));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();
    let resp = get(&state, "/static/site.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".chat-widget"));
}

#[test]
fn healthz_says_ok() {
    let state = test_state();
    assert_eq!(body_string(get(&state, "/healthz").unwrap()), "ok");
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state();
    assert!(matches!(get(&state, "/admin"), Err(ServerError::NotFound)));
    assert!(matches!(post_form(&state, "/", ""), Err(ServerError::NotFound)));
    assert!(matches!(get(&state, "/booking"), Err(ServerError::NotFound)));
}

#[test]
fn errors_render_html_pages() {
    let resp = crate::responses::error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    let body = body_string(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Not Found"));

    let resp = crate::responses::error_to_response(ServerError::BadRequest("missing field: name".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing field: name"));
}

#[test]
fn carousel_wraps_backwards() {
    let state = test_state();
    let body = body_string(get(&state, "/testimonials?index=-1").unwrap());
    assert!(body.contains("Valentina Rojas"));
    assert!(body.contains(r#"hx-get="/testimonials?index=5""#));

    let first = body_string(get(&state, "/testimonials?index=0").unwrap());
    assert!(first.contains("María Rodríguez"));
    assert!(first.contains(r#"hx-get="/testimonials?index=-1""#));
    assert!(first.contains(r#"hx-get="/testimonials?index=1""#));
}
