use crate::domain::chat::{ChatMessage, Sender};
use crate::templates::components::hx_vals;
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::navigation::TOGGLE_CHAT_JS;
use maud::{html, Markup};
use serde_json::json;

/// Client-side delays for the scripted replies.
#[derive(Debug, Clone, Copy)]
pub struct ChatTiming {
    pub reply_delay_ms: u64,
    pub followup_delay_ms: u64,
}

/// The floating chat window, hidden until the navbar button opens it.
pub fn chat_widget(greeting: &ChatMessage, whatsapp_url: &str) -> Markup {
    html! {
        div id="chat-widget" class="chat-widget" hidden {
            header class="chat-header" {
                div class="chat-title" {
                    (icon(Icon::Bot, "icon-sm"))
                    span { "CleanerClub Bot" }
                    span class="online-dot" {}
                }
                button type="button" class="chat-close" onclick=(TOGGLE_CHAT_JS) aria-label="Cerrar chat" {
                    (icon(Icon::Close, "icon-sm"))
                }
            }
            div id="chat-log" class="chat-log" {
                (chat_bubble(greeting, whatsapp_url))
            }
            form
                id="chat-form"
                class="chat-form"
                hx-post="/chat/messages"
                hx-target="#chat-log"
                hx-swap="beforeend"
            {
                (count_input(0, false))
                (message_input(false, false))
                (send_button(false, false))
            }
        }
    }
}

pub fn chat_bubble(msg: &ChatMessage, whatsapp_url: &str) -> Markup {
    let side = match msg.sender {
        Sender::User => "from-user",
        Sender::Bot => "from-bot",
    };

    html! {
        div class=(format!("chat-row {side}")) {
            div class="bubble" {
                @if msg.whatsapp_button {
                    a class="btn btn-whatsapp" href=(whatsapp_url) target="_blank" rel="noopener" title=(msg.text) {
                        (icon(Icon::Phone, "icon-xs"))
                        span { "Contactar WhatsApp" }
                    }
                } @else {
                    p { (msg.text) }
                }
                time { (msg.time_label()) }
            }
        }
    }
}

/// Unread counter on the navbar button: messages after the greeting.
pub fn chat_badge(count: usize, oob: bool) -> Markup {
    html! {
        span id="chat-badge" class="badge" hidden[count == 0] hx-swap-oob=[oob.then_some("true")] {
            (count)
        }
    }
}

fn count_input(count: usize, oob: bool) -> Markup {
    html! {
        input id="chat-count" type="hidden" name="count" value=(count) hx-swap-oob=[oob.then_some("true")];
    }
}

/// Swapped out of band after each send to clear what the visitor typed.
/// Locked while the bot is typing so every reply lands before the next send.
fn message_input(oob: bool, locked: bool) -> Markup {
    html! {
        input
            id="chat-input"
            type="text"
            name="message"
            placeholder="Escribe tu mensaje..."
            autocomplete="off"
            required
            disabled[locked]
            hx-swap-oob=[oob.then_some("true")];
    }
}

fn send_button(oob: bool, locked: bool) -> Markup {
    html! {
        button
            id="chat-send"
            type="submit"
            class="btn btn-primary"
            aria-label="Enviar"
            disabled[locked]
            hx-swap-oob=[oob.then_some("true")]
        {
            (icon(Icon::Send, "icon-sm"))
        }
    }
}

fn input_lock(locked: bool) -> Markup {
    html! {
        (message_input(true, locked))
        (send_button(true, locked))
    }
}

fn counters(count: usize) -> Markup {
    html! {
        (chat_badge(count, true))
        (count_input(count, true))
    }
}

fn typing_dots() -> Markup {
    html! {
        span class="dot" {}
        span class="dot" {}
        span class="dot" {}
    }
}

/// The visitor's bubble plus a placeholder that asks for the bot reply
/// once the simulated typing delay has elapsed.
pub fn user_turn(msg: &ChatMessage, count: usize, timing: ChatTiming) -> Markup {
    html! {
        (chat_bubble(msg, ""))
        div
            class="chat-row from-bot typing"
            hx-post="/chat/reply"
            hx-trigger=(format!("load delay:{}ms", timing.reply_delay_ms))
            hx-vals=(hx_vals(json!({ "message": msg.text, "count": count })))
            hx-swap="outerHTML"
        {
            div class="bubble" { (typing_dots()) }
        }
        (counters(count))
        (input_lock(true))
    }
}

/// The canned reply; human hand-offs schedule a WhatsApp bubble after it
/// and keep the input locked until that bubble arrives.
pub fn bot_turn(
    msg: &ChatMessage,
    follow_up: bool,
    count: usize,
    timing: ChatTiming,
    whatsapp_url: &str,
) -> Markup {
    html! {
        (chat_bubble(msg, whatsapp_url))
        @if follow_up {
            div
                hx-get="/chat/whatsapp"
                hx-trigger=(format!("load delay:{}ms", timing.followup_delay_ms))
                hx-vals=(hx_vals(json!({ "count": count })))
                hx-swap="outerHTML"
            {}
        }
        (counters(count))
        (input_lock(follow_up))
    }
}

pub fn whatsapp_turn(msg: &ChatMessage, count: usize, whatsapp_url: &str) -> Markup {
    html! {
        (chat_bubble(msg, whatsapp_url))
        (counters(count))
        (input_lock(false))
    }
}
