//! Theme and styling for console output.

use crossterm::style::{Color, StyledContent, Stylize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub prompt: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
}

/// Available theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Default,
    KanagawaWave,
}

impl ThemeName {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "kanagawa-wave" | "kanagawa_wave" | "kanagawa" => ThemeName::KanagawaWave,
            _ => ThemeName::Default,
        }
    }
}

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Prompt,
    Success,
    Error,
    Info,
}

/// Theme struct that holds colors and styles output lines.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Default => Self::default_colors(),
            ThemeName::KanagawaWave => Self::kanagawa_wave_colors(),
        };
        Self { name, colors }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(ThemeName::from_str(name))
    }

    fn default_colors() -> ThemeColors {
        ThemeColors {
            prompt: Color::Rgb { r: 99, g: 102, b: 241 },  // Indigo
            success: Color::Rgb { r: 34, g: 197, b: 94 },  // Green
            error: Color::Rgb { r: 239, g: 68, b: 68 },    // Red
            info: Color::Rgb { r: 59, g: 130, b: 246 },    // Blue
            text: Color::Rgb { r: 248, g: 250, b: 252 },   // Slate 50
        }
    }

    /// Kanagawa Wave theme - inspired by kanagawa.nvim
    fn kanagawa_wave_colors() -> ThemeColors {
        ThemeColors {
            prompt: Color::Rgb { r: 0x7E, g: 0x9C, b: 0xD8 },  // crystalBlue
            success: Color::Rgb { r: 0x98, g: 0xBB, b: 0x6C }, // springGreen
            error: Color::Rgb { r: 0xE8, g: 0x24, b: 0x24 },   // samuraiRed
            info: Color::Rgb { r: 0x7F, g: 0xB4, b: 0xCA },    // springBlue
            text: Color::Rgb { r: 0xDC, g: 0xD7, b: 0xBA },    // fujiWhite
        }
    }

    pub fn style<'a>(&self, line: &'a str, tone: Tone) -> StyledContent<&'a str> {
        match tone {
            Tone::Plain => line.with(self.colors.text),
            Tone::Prompt => line.with(self.colors.prompt).bold(),
            Tone::Success => line.with(self.colors.success),
            Tone::Error => line.with(self.colors.error),
            Tone::Info => line.with(self.colors.info),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names() {
        assert_eq!(ThemeName::from_str("Kanagawa"), ThemeName::KanagawaWave);
        assert_eq!(ThemeName::from_str("unknown"), ThemeName::Default);
        assert_eq!(Theme::from_name("kanagawa-wave").name, ThemeName::KanagawaWave);
    }

    #[test]
    fn test_styled_line_keeps_text() {
        let theme = Theme::default();
        let styled = theme.style("Correct!", Tone::Success).to_string();
        assert!(styled.contains("Correct!"));
    }
}
