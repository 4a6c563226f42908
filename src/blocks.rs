//! Block renderer
//!
//! Pure functions that turn one content entity plus an available width into
//! a finished block of styled lines. They never fail: missing fields render
//! as empty strings and every width is clamped rather than underflowing.

use crate::model::{EducationItem, ExperienceItem, Identity, ProjectItem, SkillItem};
use crate::theme::{Role, StyleSheet};
use termcv_tui::{align, wrap_text, Alignment, Line, Span, Style, Text};

/// Columns of padding between the body and the left edge of the screen
pub const BODY_PADDING: usize = 1;

/// Skill grid columns when neither the document nor the config give any
pub const DEFAULT_SKILL_COLUMNS: usize = 5;

/// Width of each half of a two-column header
pub fn half_width(width: usize) -> usize {
    (width / 2).saturating_sub(BODY_PADDING)
}

/// Grid column count: the hint if positive, else the fallback, else
/// [`DEFAULT_SKILL_COLUMNS`]
pub fn effective_columns(hint: Option<usize>, fallback: usize) -> usize {
    hint.filter(|&c| c > 0)
        .or((fallback > 0).then_some(fallback))
        .unwrap_or(DEFAULT_SKILL_COLUMNS)
}

/// Stack `labels` one per row, each wrapped to `width` and aligned within it
fn column(labels: &[&str], width: usize, alignment: Alignment, style: Style) -> Vec<Line> {
    let mut rows = Vec::new();
    for label in labels {
        let wrapped = wrap_text(label, width);
        if wrapped.is_empty() {
            rows.push(align(Line::empty(), width, alignment));
        }
        for piece in wrapped {
            rows.push(align(Line::styled(piece, style), width, alignment));
        }
    }
    rows
}

/// Join blocks side by side, top-aligned; shorter blocks are padded with
/// blank rows of their own width
fn join_horizontal(blocks: Vec<(Vec<Line>, usize)>) -> Vec<Line> {
    let height = blocks.iter().map(|(rows, _)| rows.len()).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let mut line = Line::empty();
            for (rows, width) in &blocks {
                let cell = rows
                    .get(row)
                    .cloned()
                    .unwrap_or_else(|| align(Line::empty(), *width, Alignment::Left));
                line.append(cell);
            }
            line
        })
        .collect()
}

/// Two half-width columns on the same rows: `left` labels left-aligned,
/// `right` labels right-aligned. Labels wrap within their half and the
/// halves are aligned top to top.
pub fn two_column_header(left: &[&str], right: &[&str], width: usize, style: Style) -> Text {
    let half = half_width(width);
    let left = column(left, half, Alignment::Left, style);
    let right = column(right, half, Alignment::Right, style);
    Text::from_lines(join_horizontal(vec![(left, half), (right, half)]))
}

/// Body text wrapped to `width`, which is already inside the body padding.
/// Existing line breaks are kept; empty text gives no lines at all.
pub fn paragraph(text: &str, width: usize, style: Style) -> Text {
    if text.trim().is_empty() {
        return Text::empty();
    }
    wrap_text(text, width)
        .into_iter()
        .map(|l| Line::styled(l, style))
        .collect()
}

/// Item header followed by its summary, separated by one blank line. An
/// empty summary leaves just the header.
fn with_summary(header: Text, summary: &str, width: usize, sheet: &StyleSheet) -> Text {
    let mut block = header;
    let body = paragraph(summary, width, sheet.resolve(Role::SectionBody).text);
    if !body.is_empty() {
        block.push_blank(1);
        block.extend(body);
    }
    block
}

pub fn experience_item(item: &ExperienceItem, width: usize, sheet: &StyleSheet) -> Text {
    let header = two_column_header(
        &[item.company.as_str(), item.position.as_str()],
        &[item.location.as_str(), item.date.as_str()],
        width,
        sheet.resolve(Role::ItemLabel).text,
    );
    with_summary(header, &item.summary, width, sheet)
}

pub fn education_item(item: &EducationItem, width: usize, sheet: &StyleSheet) -> Text {
    let header = two_column_header(
        &[item.institution.as_str(), item.study_type.as_str()],
        &[item.area.as_str(), item.date.as_str()],
        width,
        sheet.resolve(Role::ItemLabel).text,
    );
    with_summary(header, &item.summary, width, sheet)
}

pub fn project_item(item: &ProjectItem, width: usize, sheet: &StyleSheet) -> Text {
    let header = two_column_header(
        &[item.name.as_str(), item.description.as_str()],
        &[item.date.as_str(), item.url.href.as_str()],
        width,
        sheet.resolve(Role::ItemLabel).text,
    );
    with_summary(header, &item.summary, width, sheet)
}

/// One skill cell: the name, then its keywords, wrapped to the cell width
pub fn skill_cell(item: &SkillItem, cell_width: usize, sheet: &StyleSheet) -> Text {
    let label = sheet.resolve(Role::ItemLabel).text;
    let keyword = sheet.resolve(Role::Keyword).text;

    let mut rows = column(&[item.name.as_str()], cell_width, Alignment::Left, label);
    let keywords = item.keywords.join(", ");
    if !keywords.trim().is_empty() {
        rows.extend(column(&[keywords.as_str()], cell_width, Alignment::Left, keyword));
    }
    Text::from_lines(rows)
}

/// Lay cells out row-major, `columns` per row. Returns one block per grid
/// row; cells in a row are top-aligned and padded to `cell_width`.
pub fn grid(cells: Vec<Text>, columns: usize, cell_width: usize) -> Vec<Text> {
    let columns = columns.max(1);
    let mut cells = cells.into_iter().peekable();
    let mut rows = Vec::new();
    while cells.peek().is_some() {
        let row: Vec<(Vec<Line>, usize)> = cells
            .by_ref()
            .take(columns)
            .map(|cell| {
                let lines = cell
                    .lines
                    .into_iter()
                    .map(|l| align(l, cell_width, Alignment::Left))
                    .collect();
                (lines, cell_width)
            })
            .collect();
        rows.push(Text::from_lines(join_horizontal(row)));
    }
    rows
}

/// Skills as a grid of `width / columns`-wide cells, grid rows separated by
/// a blank line. Fewer columns are used when the width cannot fit one cell
/// per column.
pub fn skill_grid(items: &[&SkillItem], columns: usize, width: usize, sheet: &StyleSheet) -> Text {
    let columns = columns.clamp(1, width.max(1));
    let cell_width = (width / columns).max(1);
    let cells = items
        .iter()
        .map(|item| skill_cell(item, cell_width, sheet))
        .collect();
    join_items(grid(cells, columns, cell_width))
}

/// Join item blocks with one blank line between consecutive items and none
/// after the last
pub fn join_items(items: Vec<Text>) -> Text {
    let mut joined = Text::empty();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            joined.push_blank(1);
        }
        joined.extend(item);
    }
    joined
}

/// Section title line
pub fn section_title(name: &str, sheet: &StyleSheet) -> Text {
    let style = sheet.resolve(Role::SectionTitle).text;
    Text::from_lines([Line::styled(name.to_string(), style)])
}

/// `location | email | phone`, skipping empty fields. Empty when the
/// identity has no contact fields.
pub fn contact_line(identity: &Identity, sheet: &StyleSheet) -> Line {
    let fields = identity.contact_fields();
    let info = sheet.resolve(Role::ContactInfo);
    let separator = sheet.resolve(Role::ContactSeparator);

    let mut line = Line::empty();
    for (index, field) in fields.iter().enumerate() {
        let piece = if index + 1 < fields.len() {
            separator.paint(field)
        } else {
            info.paint(field)
        };
        for row in piece.lines {
            line.append(row);
        }
    }
    line
}

/// A horizontal rule `length` cells long
pub fn rule(length: usize, sheet: &StyleSheet) -> Span {
    Span::styled("─".repeat(length), sheet.resolve(Role::Rule).text)
}
