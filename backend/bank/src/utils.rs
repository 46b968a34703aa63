use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\s]+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Normalizes a category label into its id, `"Knock Knock"` becomes `knock-knock`.
pub fn sanitize_category(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    let dashed = SEPARATORS.replace_all(&lowered, "-");
    let cleaned = DISALLOWED.replace_all(&dashed, "");

    DASHES.replace_all(&cleaned, "-").trim_matches('-').to_string()
}
