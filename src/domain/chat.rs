// src/domain/chat.rs

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use url::form_urlencoded;

/// Reply buckets for the scripted assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCategory {
    Greeting,
    Services,
    Pricing,
    Booking,
    Human,
    Default,
}

/// Checked top to bottom; the first category with a matching keyword wins.
const KEYWORDS: &[(ReplyCategory, &[&str])] = &[
    (ReplyCategory::Services, &["servicio", "limpieza"]),
    (ReplyCategory::Pricing, &["precio", "costo", "cuanto"]),
    (ReplyCategory::Booking, &["agendar", "cita", "horario"]),
    (ReplyCategory::Human, &["humano", "persona", "asesor"]),
];

pub const WHATSAPP_PROMPT: &str = "👆 Haz clic aquí para contactar a WhatsApp";

impl ReplyCategory {
    pub fn key(self) -> &'static str {
        match self {
            ReplyCategory::Greeting => "greeting",
            ReplyCategory::Services => "services",
            ReplyCategory::Pricing => "pricing",
            ReplyCategory::Booking => "booking",
            ReplyCategory::Human => "human",
            ReplyCategory::Default => "default",
        }
    }

    pub fn replies(self) -> &'static [&'static str] {
        match self {
            ReplyCategory::Greeting => &[
                "¡Hola! Soy el asistente virtual de CleanerClub. ¿En qué puedo ayudarte hoy?",
                "¡Bienvenido a CleanerClub! ¿Necesitas información sobre nuestros servicios de limpieza?",
            ],
            ReplyCategory::Services => &[
                "Ofrecemos 6 tipos de servicios: Limpieza General, Profunda, Post-Obra, Ventanas, Tapicería y Express. ¿Te interesa alguno en particular?",
                "Nuestros servicios van desde limpieza básica hasta trabajos especializados. Puedes usar nuestra calculadora para obtener un presupuesto instantáneo.",
            ],
            ReplyCategory::Pricing => &[
                "Los precios varían según el número de habitaciones y tipo de servicio. Nuestra calculadora te dará un precio exacto al instante.",
                "Ofrecemos descuentos de hasta 15% para servicios recurrentes. ¿Te gustaría conocer más detalles?",
            ],
            ReplyCategory::Booking => &[
                "Puedes agendar directamente aquí en la web. Selecciona tu fecha preferida y te mostraré los horarios disponibles.",
                "El proceso de agendamiento es súper fácil. Solo necesitas completar tus datos y elegir fecha y hora.",
            ],
            ReplyCategory::Human => &[
                "Te conectaré con un asesor humano. Haz clic en el botón de WhatsApp para chatear directamente con nuestro equipo.",
                "¿Necesitas hablar con una persona? No hay problema, te redirijo a WhatsApp para atención personalizada.",
            ],
            ReplyCategory::Default => &[
                "Interesante pregunta. ¿Te gustaría que te conecte con un asesor humano para una respuesta más detallada?",
                "No estoy seguro de cómo responder a eso. ¿Prefieres hablar con nuestro equipo de soporte?",
            ],
        }
    }

    /// Categories that get a WhatsApp hand-off bubble after the reply.
    pub fn offers_whatsapp(self) -> bool {
        matches!(self, ReplyCategory::Human | ReplyCategory::Default)
    }

    pub fn pick_reply<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        // Every category has at least one reply.
        self.replies().choose(rng).copied().unwrap_or_default()
    }
}

pub fn classify(text: &str) -> ReplyCategory {
    let input = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| input.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(ReplyCategory::Default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub whatsapp_button: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp,
            whatsapp_button: false,
        }
    }

    pub fn bot(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp,
            whatsapp_button: false,
        }
    }

    pub fn whatsapp(timestamp: DateTime<Local>) -> Self {
        Self {
            whatsapp_button: true,
            ..Self::bot(WHATSAPP_PROMPT, timestamp)
        }
    }

    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// The bot's answer to one user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
    pub category: ReplyCategory,
    pub message: ChatMessage,
}

impl BotReply {
    pub fn follow_up(&self) -> bool {
        self.category.offers_whatsapp()
    }
}

/// Answers a user message. `None` for whitespace-only input.
pub fn respond<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
    now: DateTime<Local>,
) -> Option<BotReply> {
    if text.trim().is_empty() {
        return None;
    }
    let category = classify(text);
    Some(BotReply {
        category,
        message: ChatMessage::bot(category.pick_reply(rng), now),
    })
}

pub fn greeting<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> ChatMessage {
    ChatMessage::bot(ReplyCategory::Greeting.pick_reply(rng), now)
}

/// `https://wa.me/<phone>?text=<message>` with the message percent-encoded.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let text: String = form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("https://wa.me/{digits}?text={text}")
}
