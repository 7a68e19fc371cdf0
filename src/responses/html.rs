use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    text_response(200, mime::TEXT_HTML_UTF_8.as_ref(), markup.into_string())
}

pub fn text_response(status: u16, content_type: &str, body: String) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
