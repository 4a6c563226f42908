//! Layout engine
//!
//! Composes the whole document for one width: the identity band (title box
//! with a rule running to the right edge), then the body: contact line and
//! every visible section in model order. The result is a pure function of
//! (résumé, width, style sheet).

use crate::blocks::{self, BODY_PADDING};
use crate::model::{Identity, Resume, Section, SectionKind};
use crate::theme::{Role, StyleSheet};
use termcv_tui::{Line, Span, Text};

/// Blank lines between the contact line and the first section
pub const HEADER_SPACING: usize = 1;

/// Blank lines between consecutive sections
pub const SECTION_SPACING: usize = 2;

/// Blank lines between a section title and its content
pub const TITLE_SPACING: usize = 1;

/// Rows taken by the footer band (rule and percentage badge)
pub const FOOTER_HEIGHT: usize = 3;

/// Length of the rule that follows a block `title_width` cells wide
pub fn rule_length(width: usize, title_width: usize) -> usize {
    width.saturating_sub(title_width)
}

/// A fully laid out document: the identity band followed by the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    width: usize,
    band: usize,
    lines: Vec<Line>,
}

impl RenderedDocument {
    /// Width the document was laid out for
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total line count, band included
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn band_height(&self) -> usize {
        self.band
    }

    /// The identity band, pinned above the scrolling body
    pub fn band(&self) -> &[Line] {
        &self.lines[..self.band]
    }

    /// Everything below the identity band
    pub fn body(&self) -> &[Line] {
        &self.lines[self.band..]
    }

    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_ansi_string(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_ansi)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lays out a résumé with one style sheet
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    sheet: StyleSheet,
    skill_columns: usize,
}

impl LayoutEngine {
    /// `skill_columns` is used for skill sections without a column hint
    pub fn new(sheet: StyleSheet, skill_columns: usize) -> Self {
        Self {
            sheet,
            skill_columns,
        }
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Lay out the full document at `width` columns
    pub fn layout(&self, resume: &Resume, width: usize) -> RenderedDocument {
        let band = self.identity_band(&resume.identity, width);
        let body = self.body(resume, width);

        let band_height = band.height();
        let mut lines = band.lines;
        lines.extend(body.lines);
        RenderedDocument {
            width,
            band: band_height,
            lines,
        }
    }

    /// Title box holding name and headline, with a rule attached on its
    /// right that fills the rest of the width
    pub fn identity_band(&self, identity: &Identity, width: usize) -> Text {
        let mut content = self.sheet.resolve(Role::Title).paint(&identity.name);
        if !identity.headline.trim().is_empty() {
            content.extend(Text::raw(&identity.headline));
        }

        let title_box = self.sheet.resolve(Role::TitleBox);
        let mut band = title_box.frame(&content);
        let joint = title_box.block.joint_row(content.height());
        let rule = blocks::rule(rule_length(width, band.width()), &self.sheet);
        if let Some(line) = band.lines.get_mut(joint) {
            line.push(rule);
        }
        band
    }

    /// Contact line and visible sections, indented by the body padding
    pub fn body(&self, resume: &Resume, width: usize) -> Text {
        let inner = width.saturating_sub(BODY_PADDING);
        let mut body = Text::empty();

        let contact = blocks::contact_line(&resume.identity, &self.sheet);
        if !contact.is_empty() {
            body.push(contact);
        }

        let sections = resume
            .sections
            .iter()
            .filter_map(|section| self.section(section, inner));
        for (index, section) in sections.enumerate() {
            if !body.is_empty() {
                let spacing = if index == 0 {
                    HEADER_SPACING
                } else {
                    SECTION_SPACING
                };
                body.push_blank(spacing);
            }
            body.extend(section);
        }

        body.lines
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    let mut indented = Line::raw(" ".repeat(BODY_PADDING));
                    indented.append(line);
                    indented
                }
            })
            .collect()
    }

    /// A section's title and content, or `None` when it is hidden. Hidden
    /// items are left out; a section with nothing to show is just its title.
    pub fn section(&self, section: &Section, width: usize) -> Option<Text> {
        if !section.meta.visible {
            return None;
        }

        let sheet = &self.sheet;
        let content = match &section.kind {
            SectionKind::Summary(content) => {
                blocks::paragraph(content, width, sheet.resolve(Role::SectionBody).text)
            }
            SectionKind::Experience(items) => blocks::join_items(
                items
                    .iter()
                    .filter(|item| item.visible)
                    .map(|item| blocks::experience_item(item, width, sheet))
                    .collect(),
            ),
            SectionKind::Education(items) => blocks::join_items(
                items
                    .iter()
                    .filter(|item| item.visible)
                    .map(|item| blocks::education_item(item, width, sheet))
                    .collect(),
            ),
            SectionKind::Projects(items) => blocks::join_items(
                items
                    .iter()
                    .filter(|item| item.visible)
                    .map(|item| blocks::project_item(item, width, sheet))
                    .collect(),
            ),
            SectionKind::Skills(items) => {
                let visible: Vec<_> = items.iter().filter(|item| item.visible).collect();
                let columns = blocks::effective_columns(section.meta.columns, self.skill_columns);
                blocks::skill_grid(&visible, columns, width, sheet)
            }
        };

        let mut text = blocks::section_title(&section.meta.name, sheet);
        if !content.is_empty() {
            text.push_blank(TITLE_SPACING);
            text.extend(content);
        }
        Some(text)
    }

    /// Rule with the scroll percentage badge attached on its right
    pub fn footer(&self, width: usize, percent: u8) -> Text {
        let badge_style = self.sheet.resolve(Role::InfoBadge);
        let badge = badge_style.paint(&format!("{:>3}%", percent));
        let joint = badge_style.block.joint_row(1);
        let length = rule_length(width, badge.width());

        badge
            .lines
            .into_iter()
            .enumerate()
            .map(|(row, badge_line)| {
                let mut line = if row == joint {
                    Line::from_spans([blocks::rule(length, &self.sheet)])
                } else {
                    Line::from_spans([Span::raw(" ".repeat(length))])
                };
                line.append(badge_line);
                line
            })
            .collect()
    }
}
