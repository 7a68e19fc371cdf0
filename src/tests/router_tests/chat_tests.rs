// src/tests/router_tests/chat_tests.rs
use crate::domain::chat::ReplyCategory;
use crate::tests::utils::{body_string, get, opening_tag, post_form, test_state};

/// Unread count the fragment hands to the next request.
fn carried_count(body: &str) -> usize {
    let tag = opening_tag(body, "chat-count");
    let start = tag.find("value=\"").unwrap() + "value=\"".len();
    let end = start + tag[start..].find('"').unwrap();
    tag[start..end].parse().unwrap()
}

fn is_locked(body: &str) -> bool {
    let input = opening_tag(body, "chat-input").contains(" disabled");
    let send = opening_tag(body, "chat-send").contains(" disabled");
    assert_eq!(input, send, "input and send button disagree");
    input
}

fn post(uri: &str, body: &str) -> String {
    let state = test_state();
    let resp = post_form(&state, uri, body).unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn sending_echoes_the_message_and_schedules_the_reply() {
    let body = post("/chat/messages", "message=Hola+equipo&count=0");

    assert!(body.contains("chat-row from-user"));
    assert!(body.contains("<p>Hola equipo</p>"));
    assert!(body.contains(r#"hx-post="/chat/reply""#));
    assert!(body.contains(r#"hx-trigger="load delay:1500ms""#));
    assert!(body.contains("&quot;count&quot;:1"));

    let badge = opening_tag(&body, "chat-badge");
    assert!(!badge.contains("hidden"), "{badge}");
    assert!(body.contains(r#"<input id="chat-count" type="hidden" name="count" value="1""#));
    // The text box is cleared out of band.
    assert!(opening_tag(&body, "chat-input").contains(r#"hx-swap-oob="true""#));
}

#[test]
fn user_text_is_escaped() {
    let body = post("/chat/messages", "message=%3Cscript%3Ex%3C%2Fscript%3E");
    assert!(!body.contains("<script>x"));
    assert!(body.contains("&lt;script&gt;x"));
}

#[test]
fn blank_message_renders_nothing() {
    assert_eq!(post("/chat/messages", "message=+++&count=3"), "");
    assert_eq!(post("/chat/messages", ""), "");
}

#[test]
fn pricing_question_gets_a_pricing_reply_without_handoff() {
    let body = post("/chat/reply", "message=%C2%BFQu%C3%A9+PRECIO+tiene%3F&count=1");

    assert!(body.contains("chat-row from-bot"));
    assert!(ReplyCategory::Pricing
        .replies()
        .iter()
        .any(|reply| body.contains(reply)));
    assert!(!body.contains("/chat/whatsapp"));
    assert!(body.contains(r#"name="count" value="2""#));
}

#[test]
fn asking_for_a_human_schedules_the_whatsapp_bubble() {
    let body = post("/chat/reply", "message=quiero+un+humano&count=1");

    assert!(ReplyCategory::Human
        .replies()
        .iter()
        .any(|reply| body.contains(reply)));
    assert!(body.contains(r#"hx-get="/chat/whatsapp""#));
    assert!(body.contains(r#"hx-trigger="load delay:500ms""#));
    assert!(body.contains("&quot;count&quot;:2"));
}

#[test]
fn unmatched_question_also_offers_whatsapp() {
    let body = post("/chat/reply", "message=hola&count=0");
    assert!(ReplyCategory::Default
        .replies()
        .iter()
        .any(|reply| body.contains(reply)));
    assert!(body.contains(r#"hx-get="/chat/whatsapp""#));
}

#[test]
fn whatsapp_bubble_links_out_and_bumps_the_badge() {
    let state = test_state();
    let resp = get(&state, "/chat/whatsapp?count=2").unwrap();
    let body = body_string(resp);

    assert!(body.contains(
        r#"href="https://wa.me/56912345678?text=Hola%20CleanerClub%2C%20necesito%20ayuda""#
    ));
    assert!(body.contains("Contactar WhatsApp"));
    assert!(body.contains(r#"target="_blank""#));
    assert!(opening_tag(&body, "chat-badge").contains(r#"hx-swap-oob="true""#));
    assert!(body.contains(r#"name="count" value="3""#));
}

#[test]
fn huge_count_saturates_instead_of_overflowing() {
    let max = usize::MAX;
    let body = post("/chat/messages", &format!("message=hola&count={max}"));
    assert_eq!(carried_count(&body), max);

    let body = post("/chat/reply", &format!("message=hola&count={max}"));
    assert_eq!(carried_count(&body), max);

    let state = test_state();
    let body = body_string(get(&state, &format!("/chat/whatsapp?count={max}")).unwrap());
    assert_eq!(carried_count(&body), max);
}

#[test]
fn input_is_locked_until_the_reply_lands() {
    // Two exchanges back to back: the badge counts every message after the greeting.
    let sent = post("/chat/messages", "message=hola&count=0");
    assert!(is_locked(&sent));
    assert_eq!(carried_count(&sent), 1);

    let replied = post(
        "/chat/reply",
        &format!("message=agendar&count={}", carried_count(&sent)),
    );
    assert!(!is_locked(&replied));
    assert_eq!(carried_count(&replied), 2);

    let sent = post(
        "/chat/messages",
        &format!("message=precio&count={}", carried_count(&replied)),
    );
    assert!(is_locked(&sent));
    assert_eq!(carried_count(&sent), 3);

    let replied = post(
        "/chat/reply",
        &format!("message=precio&count={}", carried_count(&sent)),
    );
    assert!(!is_locked(&replied));
    assert_eq!(carried_count(&replied), 4);
}

#[test]
fn handoff_keeps_the_input_locked_until_the_whatsapp_bubble() {
    let replied = post("/chat/reply", "message=humano&count=1");
    assert!(is_locked(&replied));
    assert_eq!(carried_count(&replied), 2);

    let state = test_state();
    let bubble = body_string(
        get(&state, &format!("/chat/whatsapp?count={}", carried_count(&replied))).unwrap(),
    );
    assert!(!is_locked(&bubble));
    assert_eq!(carried_count(&bubble), 3);
}
