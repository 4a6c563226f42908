//! Palettes and the style resolver
//!
//! A [`StyleSheet`] maps semantic roles to concrete styles for one palette.
//! It is built once per session from configuration and passed to the
//! renderers explicitly.

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use termcv_tui::{Block, Border, Color, Sides, Spacing, Style, Text};

/// The four colours a résumé is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Name and scroll badge
    pub primary: Color,
    /// Contact line
    pub secondary: Color,
    /// Section titles and item labels
    pub foreground: Color,
    /// Body text and keywords
    pub muted_foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// Truecolor palette
    pub const fn standard() -> Self {
        Self {
            primary: Color::rgb(0xC7, 0x7D, 0xFF),
            secondary: Color::rgb(0xF8, 0xF8, 0xF8),
            foreground: Color::rgb(0xF8, 0xF8, 0xF2),
            muted_foreground: Color::rgb(0xBE, 0xBE, 0xBE),
        }
    }

    /// ANSI-256 palette for terminals without truecolor
    pub const fn simple() -> Self {
        Self {
            primary: Color::indexed(198),
            secondary: Color::indexed(255),
            foreground: Color::indexed(231),
            muted_foreground: Color::indexed(249),
        }
    }

    /// Look up a built-in palette by name
    pub fn named(name: &str) -> Result<Self, ThemeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Self::standard()),
            "simple" => Ok(Self::simple()),
            _ => Err(ThemeError::UnknownPalette(name.to_string())),
        }
    }

    /// Built-in palette named by the config, with any per-color overrides
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut palette = Self::named(&config.palette)?;
        let overrides = [
            ("primary", &config.primary, &mut palette.primary),
            ("secondary", &config.secondary, &mut palette.secondary),
            ("foreground", &config.foreground, &mut palette.foreground),
            (
                "muted_foreground",
                &config.muted_foreground,
                &mut palette.muted_foreground,
            ),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                *slot = Color::parse(value).ok_or_else(|| ThemeError::InvalidColor {
                    field,
                    value: value.clone(),
                })?;
            }
        }
        Ok(palette)
    }
}

/// What a piece of text is, as far as styling is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The person's name
    Title,
    /// Frame around name and headline
    TitleBox,
    SectionTitle,
    SectionBody,
    ContactInfo,
    /// Trailing `|` after each contact field but the last
    ContactSeparator,
    /// Scroll percentage in the footer
    InfoBadge,
    /// Horizontal rules in header and footer
    Rule,
    /// Short labels in item headers (company, position, ...)
    ItemLabel,
    Keyword,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Title,
        Role::TitleBox,
        Role::SectionTitle,
        Role::SectionBody,
        Role::ContactInfo,
        Role::ContactSeparator,
        Role::InfoBadge,
        Role::Rule,
        Role::ItemLabel,
        Role::Keyword,
    ];
}

/// Resolved styling for one role: the text style plus box decoration
#[derive(Debug, Clone, Default)]
pub struct RoleStyle {
    pub text: Style,
    pub block: Block,
}

impl RoleStyle {
    fn plain() -> Self {
        Self::default()
    }

    fn text(style: Style) -> Self {
        Self {
            text: style,
            block: Block::new(),
        }
    }

    /// Style a string and decorate it
    pub fn paint(&self, content: &str) -> Text {
        self.block.render(&Text::styled(content, self.text))
    }

    /// Decorate already-styled text; the role style sits under span styles
    pub fn frame(&self, content: &Text) -> Text {
        self.block.clone().style(self.text).render(content)
    }
}

/// Role-to-style resolver for one palette
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    palette: Palette,
}

impl StyleSheet {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Style for a role. Same role and palette always give the same result.
    pub fn resolve(&self, role: Role) -> RoleStyle {
        let p = &self.palette;
        match role {
            Role::Title => RoleStyle::text(Style::new().fg(p.primary).bold()),
            Role::TitleBox => RoleStyle {
                text: Style::new(),
                block: Block::new()
                    .border(Border::rounded().middle_right('├'))
                    .padding(Spacing::horizontal(1)),
            },
            Role::SectionTitle => RoleStyle::text(Style::new().fg(p.foreground).bold()),
            Role::SectionBody => RoleStyle::text(Style::new().fg(p.muted_foreground)),
            Role::ContactInfo => RoleStyle::text(Style::new().fg(p.secondary)),
            Role::ContactSeparator => RoleStyle {
                text: Style::new().fg(p.secondary),
                block: Block::new()
                    .border(Border::right_only('|'))
                    .sides(Sides::RIGHT)
                    .border_style(Style::new().fg(p.secondary))
                    .padding(Spacing::right(1))
                    .margin(Spacing::right(1)),
            },
            Role::InfoBadge => RoleStyle {
                text: Style::new().fg(p.primary),
                block: Block::new()
                    .border(Border::rounded().middle_left('┤'))
                    .padding(Spacing::horizontal(1)),
            },
            Role::Rule => RoleStyle::plain(),
            Role::ItemLabel => RoleStyle::text(Style::new().fg(p.foreground)),
            Role::Keyword => RoleStyle::text(Style::new().fg(p.muted_foreground).italic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcv_tui::Modifier;

    #[test]
    fn test_named_palettes() {
        assert_eq!(Palette::named("default").unwrap(), Palette::standard());
        assert_eq!(Palette::named("Simple").unwrap(), Palette::simple());
        assert_eq!(
            Palette::named("neon"),
            Err(ThemeError::UnknownPalette("neon".into()))
        );
    }

    #[test]
    fn test_palette_overrides() {
        let config = ThemeConfig {
            palette: "simple".into(),
            primary: Some("#ff0000".into()),
            muted_foreground: Some("244".into()),
            ..ThemeConfig::default()
        };
        let palette = Palette::from_config(&config).unwrap();
        assert_eq!(palette.primary, Color::rgb(255, 0, 0));
        assert_eq!(palette.muted_foreground, Color::indexed(244));
        assert_eq!(palette.secondary, Color::indexed(255));

        let bad = ThemeConfig {
            secondary: Some("#nothex".into()),
            ..ThemeConfig::default()
        };
        assert!(matches!(
            Palette::from_config(&bad),
            Err(ThemeError::InvalidColor {
                field: "secondary",
                ..
            })
        ));
    }

    #[test]
    fn test_title_is_bold_primary() {
        let sheet = StyleSheet::new(Palette::simple());
        let title = sheet.resolve(Role::Title).text;
        assert_eq!(title.fg, Color::indexed(198));
        assert!(title.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_title_box_has_connector() {
        let sheet = StyleSheet::default();
        let boxed = sheet.resolve(Role::TitleBox).paint("Ada");
        let rows: Vec<String> = boxed.lines.iter().map(|l| l.to_plain()).collect();
        assert_eq!(rows, vec!["╭─────╮", "│ Ada ├", "╰─────╯"]);
    }

    #[test]
    fn test_contact_separator_decorates_right_edge_only() {
        let sheet = StyleSheet::default();
        let sep = sheet.resolve(Role::ContactSeparator).paint("Berlin");
        assert_eq!(sep.to_plain_string(), "Berlin | ");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let sheet = StyleSheet::new(Palette::standard());
        for role in Role::ALL {
            let a = sheet.resolve(role).paint("x").to_ansi_string();
            let b = sheet.resolve(role).paint("x").to_ansi_string();
            assert_eq!(a, b);
        }
    }
}
