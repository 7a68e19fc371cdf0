use crate::config::AppConfig;
use crate::errors::ResultResp;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Fresh state with default config and a freshly rolled slot table.
pub fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

pub fn get(state: &AppState, uri: &str) -> ResultResp {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    handle(req, state)
}

pub fn post_form(state: &AppState, uri: &str, body: &str) -> ResultResp {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    handle(req, state)
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// The opening tag of the element carrying `id`, e.g. `<button id="x" ...>`.
pub fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
    let needle = format!("id=\"{id}\"");
    let at = html
        .find(&needle)
        .unwrap_or_else(|| panic!("no element with {needle}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}
