use crate::domain::availability::parse_date_key;
use crate::domain::booking::{self, BookingForm};
use crate::domain::catalog;
use crate::domain::chat::{self, ChatMessage};
use crate::domain::pricing::BudgetCalculator;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::responses::{assets, html_response, text_response, ResultResp};
use crate::state::AppState;
use crate::templates::components::booking::{booking_section, slot_update, BookingView};
use crate::templates::components::calculator::calculator_update;
use crate::templates::components::chat::{bot_turn, user_turn, whatsapp_turn, ChatTiming};
use crate::templates::components::testimonials::carousel;
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;
use chrono::{Local, Utc};
use maud::html;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, state),
        ("GET", "/calculator") => calculator(&req),
        ("GET", "/booking/slots") => booking_slots(&req, state),
        ("POST", "/booking") => submit_booking(&mut req, state),
        ("POST", "/chat/messages") => chat_message(&mut req, state),
        ("POST", "/chat/reply") => chat_reply(&mut req, state),
        ("GET", "/chat/whatsapp") => chat_whatsapp(&req, state),
        ("GET", "/testimonials") => testimonials(&req),
        ("GET", "/static/site.css") => assets::stylesheet(),
        ("GET", "/healthz") => text_response(200, mime::TEXT_PLAIN_UTF_8.as_ref(), "ok".into()),
        _ => Err(ServerError::NotFound),
    }
}

/// Unread count carried by the chat fragments, plus the message being added.
fn next_count(form: &FormData) -> usize {
    form.parse_or("count", 0usize).saturating_add(1)
}

fn whatsapp_url(state: &AppState) -> String {
    chat::whatsapp_link(&state.config.whatsapp_phone, &state.config.whatsapp_message)
}

fn chat_timing(state: &AppState) -> ChatTiming {
    ChatTiming {
        reply_delay_ms: state.config.reply_delay_ms,
        followup_delay_ms: state.config.followup_delay_ms,
    }
}

/// Full page. Every load re-rolls the simulated availability.
fn home(req: &Request, state: &AppState) -> ResultResp {
    let today = Local::now().date_naive();
    state.refresh_availability(today)?;

    // `?service=<id>` from the service cards preselects the calculator.
    let calc = BudgetCalculator::from_form(&FormData::from_query(req));
    let greeting = chat::greeting(&mut rand::thread_rng(), Local::now());
    let whatsapp_url = whatsapp_url(state);

    html_response(home_page(&HomeVm {
        calc: &calc,
        today,
        greeting: &greeting,
        whatsapp_url: &whatsapp_url,
    }))
}

fn calculator(req: &Request) -> ResultResp {
    let calc = BudgetCalculator::from_form(&FormData::from_query(req));
    tracing::debug!(
        service = %calc.service_id,
        rooms = calc.rooms,
        bathrooms = calc.bathrooms,
        total = calc.total(),
        "calculator recomputed"
    );
    html_response(calculator_update(&calc))
}

fn booking_slots(req: &Request, state: &AppState) -> ResultResp {
    let form = FormData::from_query(req);
    let date = form.non_empty("date").and_then(parse_date_key);
    let time = form.non_empty("time");
    let availability = state.availability()?;

    html_response(slot_update(date, time, &availability))
}

fn submit_booking(req: &mut Request, state: &AppState) -> ResultResp {
    let form = FormData::from_request(req)?;
    let calc = BudgetCalculator::from_form(&form);

    if catalog::find_service(&calc.service_id).is_none() {
        tracing::warn!(service = %calc.service_id, "booking for unknown service");
    }

    let availability = state.availability()?;
    let confirmed = booking::confirm(
        BookingForm::from_form(&form),
        &calc,
        &availability,
        Utc::now(),
    )?;

    // Nothing is stored: the log line is the only trace of the booking.
    let record = serde_json::to_string(&confirmed).map_err(|e| {
        tracing::error!(error = %e, "booking serialization failed");
        ServerError::InternalError
    })?;
    tracing::info!(booking_id = confirmed.id, booking = %record, "booking confirmed");

    html_response(booking_section(&BookingView {
        calc: &calc,
        today: Local::now().date_naive(),
        confirmation: Some(&confirmed),
    }))
}

fn chat_message(req: &mut Request, state: &AppState) -> ResultResp {
    let form = FormData::from_request(req)?;
    let text = form.get("message").unwrap_or_default();
    if text.trim().is_empty() {
        return html_response(html! {});
    }

    let count = next_count(&form);
    let msg = ChatMessage::user(text, Local::now());
    html_response(user_turn(&msg, count, chat_timing(state)))
}

fn chat_reply(req: &mut Request, state: &AppState) -> ResultResp {
    let form = FormData::from_request(req)?;
    let text = form.get("message").unwrap_or_default();
    let Some(reply) = chat::respond(text, &mut rand::thread_rng(), Local::now()) else {
        return html_response(html! {});
    };

    tracing::debug!(category = reply.category.key(), "chat reply");

    let count = next_count(&form);
    html_response(bot_turn(
        &reply.message,
        reply.follow_up(),
        count,
        chat_timing(state),
        &whatsapp_url(state),
    ))
}

fn chat_whatsapp(req: &Request, state: &AppState) -> ResultResp {
    let form = FormData::from_query(req);
    let count = next_count(&form);
    html_response(whatsapp_turn(
        &ChatMessage::whatsapp(Local::now()),
        count,
        &whatsapp_url(state),
    ))
}

fn testimonials(req: &Request) -> ResultResp {
    let index = FormData::from_query(req).parse_or("index", 0i64);
    html_response(carousel(index))
}
