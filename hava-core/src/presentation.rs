//! Mapping from a condition text to the emoji and background palette used to
//! render it. Pure and total: every input, including the empty string, maps
//! to something displayable.

/// Three-stop background gradient, dark to light, as `#rrggbb` strings.
pub type Gradient = [&'static str; 3];

pub const RAIN_GRADIENT: Gradient = ["#4a5568", "#2d3748", "#1a365d"];
pub const CLOUD_GRADIENT: Gradient = ["#718096", "#4a5568", "#2d3748"];
pub const SUN_GRADIENT: Gradient = ["#4299e1", "#63b3ed", "#fbd38d"];
pub const DEFAULT_GRADIENT: Gradient = ["#3182ce", "#4299e1", "#63b3ed"];

pub const DEFAULT_EMOJI: &str = "🌤️";

/// How one condition should look on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub emoji: &'static str,
    pub gradient: Gradient,
}

/// Resolve the look for a condition text.
///
/// Keyword groups are matched case-insensitively against the English and
/// Turkish condition wording, first match wins. Sleet-style texts that name
/// both rain and snow therefore land on the rain branch.
pub fn presentation_for(condition: &str) -> Presentation {
    let cond = condition.to_lowercase();

    Presentation { emoji: emoji_for(&cond), gradient: gradient_for(&cond) }
}

fn contains_any(cond: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| cond.contains(k))
}

fn emoji_for(cond: &str) -> &'static str {
    if contains_any(cond, &["rain", "yağmur"]) {
        "🌧️"
    } else if contains_any(cond, &["cloud", "bulut"]) {
        "☁️"
    } else if contains_any(cond, &["sun", "güneş", "clear"]) {
        "☀️"
    } else if contains_any(cond, &["snow", "kar"]) {
        "❄️"
    } else {
        DEFAULT_EMOJI
    }
}

// Snow deliberately has no gradient of its own and falls through to the
// default palette, matching the emoji/gradient asymmetry of the screen
// design.
fn gradient_for(cond: &str) -> Gradient {
    if contains_any(cond, &["rain", "yağmur"]) {
        RAIN_GRADIENT
    } else if contains_any(cond, &["cloud", "bulut"]) {
        CLOUD_GRADIENT
    } else if contains_any(cond, &["sun", "güneş", "clear"]) {
        SUN_GRADIENT
    } else {
        DEFAULT_GRADIENT
    }
}
