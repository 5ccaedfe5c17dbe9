//! Terminal styling keyed by strength rating.

use console::{Emoji, Style};
use pwd_check::StrengthRating;

static CROSS: Emoji<'_, '_> = Emoji("❌ ", "x ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "+ ");

pub fn style_for(rating: StrengthRating) -> Style {
    match rating {
        StrengthRating::Weak => Style::new().red().bold(),
        StrengthRating::Moderate => Style::new().yellow().bold(),
        StrengthRating::Strong => Style::new().green().bold(),
    }
}

/// Formats `message` as an alert in the style of `rating`.
pub fn alert(rating: StrengthRating, message: &str) -> String {
    let marker = match rating {
        StrengthRating::Weak => &CROSS,
        StrengthRating::Moderate => &WARNING,
        StrengthRating::Strong => &CHECK,
    };
    style_for(rating)
        .apply_to(format!("{marker}{message}"))
        .to_string()
}

pub fn tip(text: &str) -> String {
    format!("{}{text}", &CHECK)
}
