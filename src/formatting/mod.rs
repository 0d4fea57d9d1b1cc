use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::core::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    /// Resolve `--plain` and `--color` on top of the environment.
    pub fn for_cli(plain: bool, color: Option<ColorMode>) -> Self {
        if plain {
            return Self::plain();
        }
        let env = Self::from_env();
        match color {
            Some(color) => Self::new(color, env.emoji),
            None => env,
        }
    }

    pub fn is_plain(&self) -> bool {
        !self.color.should_use_color() && !self.emoji.should_use_emoji()
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn info(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Position badge with ASCII fallback.
pub fn position_badge(position: Position) -> (&'static str, &'static str) {
    match position {
        Position::Below => ("🔴", "[RED]"),
        Position::At => ("🟡", "[YELLOW]"),
        Position::Above => ("🟢", "[GREEN]"),
    }
}

/// Group the integer digits of `value` with commas, no decimals.
///
/// `212500.4` becomes `212,500`; negative values keep their sign.
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && rounded != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Dollar amount, e.g. `$212,500`.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 && format_thousands(value) != "0" {
        format!("-${}", format_thousands(value.abs()))
    } else {
        format!("${}", format_thousands(value))
    }
}

pub fn format_monthly(value: f64) -> String {
    format!("{}/mo", format_currency(value))
}

/// Like `format_thousands`, but a negative value that rounds to zero keeps
/// its sign: `-0.3` becomes `-0`.
pub fn format_signed_thousands(value: f64) -> String {
    let grouped = format_thousands(value);
    if value < 0.0 && grouped == "0" {
        "-0".to_string()
    } else {
        grouped
    }
}

/// Delta shown under a scenario card, relative to current revenue.
pub fn scenario_delta_label(scenario: Position, gap: f64) -> String {
    match scenario {
        Position::Below if gap != 0.0 => format!("{}/mo", format_signed_thousands(gap)),
        Position::At if gap > 0.0 => format!("+${}/mo", format_thousands(gap)),
        Position::At if gap < 0.0 => format!("{}/mo", format_signed_thousands(gap)),
        Position::Above if gap > 0.0 => format!("+${}/mo", format_thousands(gap)),
        _ => "Current".to_string(),
    }
}

pub fn scenario_title(scenario: Position) -> &'static str {
    match scenario {
        Position::Below => "Below Average",
        Position::At => "Industry Average",
        Position::Above => "Top Performer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1_000.0), "1,000");
        assert_eq!(format_thousands(212_500.0), "212,500");
        assert_eq!(format_thousands(2_550_000.0), "2,550,000");
        assert_eq!(format_thousands(-42_500.0), "-42,500");
        assert_eq!(format_thousands(-0.2), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(25_500.0), "$25,500");
        assert_eq!(format_currency(-59_500.0), "-$59,500");
        assert_eq!(format_monthly(38_250.0), "$38,250/mo");
    }

    #[test]
    fn test_scenario_delta_labels() {
        assert_eq!(scenario_delta_label(Position::Below, -42_500.0), "-42,500/mo");
        assert_eq!(scenario_delta_label(Position::Below, 0.0), "Current");
        assert_eq!(scenario_delta_label(Position::At, 25_500.0), "+$25,500/mo");
        assert_eq!(scenario_delta_label(Position::At, 0.0), "Current");
        assert_eq!(scenario_delta_label(Position::At, -1_000.0), "-1,000/mo");
        assert_eq!(scenario_delta_label(Position::Above, 73_100.0), "+$73,100/mo");
        assert_eq!(scenario_delta_label(Position::Above, -5.0), "Current");
    }

    #[test]
    fn test_small_negative_delta_keeps_sign() {
        assert_eq!(format_signed_thousands(-0.3), "-0");
        assert_eq!(format_signed_thousands(0.3), "0");
        assert_eq!(format_signed_thousands(-1_234.0), "-1,234");
        assert_eq!(scenario_delta_label(Position::Below, -0.3), "-0/mo");
        assert_eq!(scenario_delta_label(Position::At, -0.4), "-0/mo");
    }

    #[test]
    fn test_for_cli_applies_plain_and_color_overrides() {
        assert_eq!(
            FormattingConfig::for_cli(true, Some(ColorMode::Always)),
            FormattingConfig::plain()
        );
        let config = FormattingConfig::for_cli(false, Some(ColorMode::Never));
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.emoji, EmojiMode::Auto);
        let config = FormattingConfig::for_cli(false, Some(ColorMode::Always));
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_plain_formatter_passes_text_through() {
        let f = PlainFormatter;
        assert_eq!(f.header("Revenue"), "Revenue");
        assert_eq!(f.emoji("💰", "[$]"), "[$]");
    }
}
