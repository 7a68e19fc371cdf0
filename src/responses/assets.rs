// responses/assets.rs
use crate::responses::{text_response, ResultResp};

const SITE_CSS: &str = include_str!("../../static/site.css");

/// Serve the embedded stylesheet
pub fn stylesheet() -> ResultResp {
    text_response(200, mime::TEXT_CSS_UTF_8.as_ref(), SITE_CSS.to_string())
}
