use crate::domain::catalog::{testimonial_at, TESTIMONIALS};
use crate::templates::components::icons::{icon, Icon};
use crate::templates::components::section_header;
use maud::{html, Markup};

pub fn testimonials_section(index: i64) -> Markup {
    html! {
        section id="testimonials" class="section" {
            div class="container narrow" {
                (section_header(
                    "Lo que dicen nuestros clientes",
                    "Experiencias reales de personas satisfechas con nuestros servicios",
                ))
                (carousel(index))
            }
        }
    }
}

/// One testimonial with prev/next arrows; the index wraps on the server.
pub fn carousel(index: i64) -> Markup {
    let (current, t) = testimonial_at(index);
    let current = current as i64;

    html! {
        div id="testimonials-carousel" class="carousel" {
            (nav_button(current - 1, "‹", "Anterior"))
            article class="card testimonial" {
                div class="stars" aria-label=(format!("{} de 5 estrellas", t.stars())) {
                    @for _ in 0..t.stars() {
                        (icon(Icon::Star, "icon-sm star"))
                    }
                }
                blockquote { "\"" (t.text) "\"" }
                div class="author" {
                    span class="avatar" { (t.avatar) }
                    div {
                        p class="author-name" { (t.name) }
                        p class="muted" { (t.service) }
                    }
                }
            }
            (nav_button(current + 1, "›", "Siguiente"))
            div class="dots" {
                @for i in 0..TESTIMONIALS.len() {
                    span.dot.active[i as i64 == current] {}
                }
            }
        }
    }
}

fn nav_button(target: i64, glyph: &str, label: &str) -> Markup {
    html! {
        button
            type="button"
            class="carousel-nav"
            aria-label=(label)
            hx-get=(format!("/testimonials?index={target}"))
            hx-target="#testimonials-carousel"
            hx-swap="outerHTML"
        {
            (glyph)
        }
    }
}
