//! Token extraction shared by all scorer backends.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// Maximal runs of ASCII alphanumerics plus `+`, `.`, `#`, so skill names
// like `c++`, `node.js`, and `c#` survive as single tokens.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9+.#]+").expect("token pattern compiles"));

/// Lower-cases `text` and collects its unique tokens.
///
/// Characters outside the token class (including all non-ASCII) act as
/// separators, so any input tokenizes without error.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
