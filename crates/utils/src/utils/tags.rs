/// Keywords that turn into tags when they appear anywhere in a post title or body.
pub const TAG_KEYWORDS: [&str; 8] = [
  "python",
  "django",
  "react",
  "ai",
  "database",
  "javascript",
  "next.js",
  "typescript",
];

/// Case-insensitive substring match of every keyword against title and content.
pub fn extract_tags(title: &str, content: &str) -> Vec<String> {
  let haystack = format!("{title} {content}").to_lowercase();
  TAG_KEYWORDS
    .iter()
    .filter(|keyword| haystack.contains(*keyword))
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_extract_tags() {
    let tags = extract_tags("Building with React", "backend is DJANGO on a Database");
    assert_eq!(vec!["django", "react", "database"], tags);
  }

  #[test]
  fn test_substring_matches() {
    // "ai" is a plain substring match, so "email" carries it too
    assert_eq!(vec!["ai"], extract_tags("Email setup", ""));
    assert!(extract_tags("Rust only", "nothing here").is_empty());
  }
}
