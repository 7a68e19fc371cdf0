use maud::{html, Markup, DOCTYPE};

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Limpieza profesional a domicilio en La Serena. Calcula tu precio y agenda en línea.";
                title { (title) }
                link rel="stylesheet" href="/static/site.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
                (content)
            }
        }
    }
}
