// Inline SVG icons, stroke style.
use maud::{html, Markup, PreEscaped};

pub enum Icon {
    Sparkles,
    Message,
    Check,
    Star,
    Phone,
    Mail,
    MapPin,
    Calculator,
    Calendar,
    Clock,
    Shield,
    Bot,
    Send,
    Close,
    Plus,
    Minus,
}

impl Icon {
    fn paths(&self) -> &'static str {
        match self {
            Icon::Sparkles => r#"<path d="M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7z"/><path d="M19 17v4M17 19h4"/>"#,
            Icon::Message => r#"<path d="M21 11.5a8.4 8.4 0 0 1-12.2 7.5L3 21l2-5.8A8.5 8.5 0 1 1 21 11.5z"/>"#,
            Icon::Check => r#"<circle cx="12" cy="12" r="10"/><path d="M8 12l3 3 5-6"/>"#,
            Icon::Star => r#"<polygon points="12 2 15.1 8.3 22 9.3 17 14.1 18.2 21 12 17.8 5.8 21 7 14.1 2 9.3 8.9 8.3 12 2"/>"#,
            Icon::Phone => r#"<path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z"/>"#,
            Icon::Mail => r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M22 6l-10 7L2 6"/>"#,
            Icon::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#,
            Icon::Calculator => r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M8 6h8M8 14h.01M12 14h.01M16 14h.01M8 18h.01M12 18h.01M16 18h.01"/>"#,
            Icon::Calendar => r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#,
            Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
            Icon::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Icon::Bot => r#"<rect x="3" y="11" width="18" height="10" rx="2"/><circle cx="12" cy="5" r="2"/><path d="M12 7v4M8 16h.01M16 16h.01"/>"#,
            Icon::Send => r#"<path d="M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z"/>"#,
            Icon::Close => r#"<path d="M18 6L6 18M6 6l12 12"/>"#,
            Icon::Plus => r#"<path d="M12 5v14M5 12h14"/>"#,
            Icon::Minus => r#"<path d="M5 12h14"/>"#,
        }
    }
}

pub fn icon(kind: Icon, class: &str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=(class)
            aria-hidden="true"
        {
            (PreEscaped(kind.paths()))
        }
    }
}
