use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static MARKDOWN_IMAGE_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("compile regex"));

/// Returns the target of the first inline markdown image, ie `![alt](url)`.
pub fn first_image_url(text: &str) -> Option<String> {
  MARKDOWN_IMAGE_REGEX
    .captures(text)
    .and_then(|c| c.get(1))
    .map(|m| m.as_str().trim().to_string())
    .filter(|url| !url.is_empty())
}
