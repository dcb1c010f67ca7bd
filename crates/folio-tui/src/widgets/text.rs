//! Line-building helpers shared by the section widgets

use folio_core::content::Icon;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Word-wrap `text` to `max_width` columns. Words longer than a line are
/// split on character boundaries. Always returns at least one line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(1);
                if current_width + ch_width > max_width && !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        result.push(current);
    }

    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Cut to `max_width` columns, ending in "…" when shortened
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Left-pad a line so it sits centered in `width`
pub fn center(line: Line<'static>, width: usize) -> Line<'static> {
    let pad = width.saturating_sub(line.width()) / 2;
    indent(line, pad)
}

pub fn indent(mut line: Line<'static>, columns: usize) -> Line<'static> {
    if columns > 0 {
        line.spans.insert(0, Span::raw(" ".repeat(columns)));
    }
    line
}

/// Right-pad with `style` so backgrounds fill the whole row
pub fn pad_line(mut line: Line<'static>, width: usize, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(line.width());
    if pad > 0 {
        line.spans.push(Span::styled(" ".repeat(pad), style));
    }
    line
}

/// Centered title with an accent underline and an optional subtitle
pub fn section_heading(title: &str, subtitle: Option<&str>, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        center(Line::from(Span::styled(title.to_string(), theme.heading())), width),
        center(
            Line::from(Span::styled("━".repeat(title.width().clamp(4, 12)), theme.accent())),
            width,
        ),
    ];
    if let Some(subtitle) = subtitle {
        let inner = width.saturating_sub(8).max(20);
        for row in wrap(subtitle, inner) {
            lines.push(center(Line::from(Span::styled(row, theme.muted())), width));
        }
    }
    lines.push(Line::default());
    lines
}

/// Rounded box around `body`, `width` columns wide including borders.
/// Body lines are padded, not wrapped; wrap them to `width - 4` first.
pub fn card(
    title: Option<Span<'static>>,
    body: Vec<Line<'static>>,
    width: usize,
    border: Style,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let rule = width.saturating_sub(2);
    let mut lines = Vec::with_capacity(body.len() + 2);

    match title {
        Some(title) => {
            let title_width = title.width() + 2;
            let right = rule.saturating_sub(title_width + 1);
            lines.push(Line::from(vec![
                Span::styled("╭─", border),
                Span::raw(" "),
                title,
                Span::raw(" "),
                Span::styled("─".repeat(right), border),
                Span::styled("╮", border),
            ]));
        }
        None => lines.push(Line::from(vec![
            Span::styled("╭", border),
            Span::styled("─".repeat(rule), border),
            Span::styled("╮", border),
        ])),
    }

    for row in body {
        let pad = inner.saturating_sub(row.width());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(row.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("╰", border),
        Span::styled("─".repeat(rule), border),
        Span::styled("╯", border),
    ]));
    lines
}

/// Wrapped paragraph as styled lines
pub fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// Flow `[tag]` chips into rows no wider than `width`
pub fn tags(items: &[&str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let chip = format!(" {} ", item);
        let chip_width = chip.width();
        let gap = usize::from(!spans.is_empty());
        if used + gap + chip_width > width && !spans.is_empty() {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, style));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Horizontal gauge, `fraction` clamped to [0, 1]
pub fn bar(fraction: f64, width: usize, filled: Style, empty: Style) -> Vec<Span<'static>> {
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    let full = ((width as f64) * fraction).round() as usize;
    vec![
        Span::styled("█".repeat(full), filled),
        Span::styled("░".repeat(width.saturating_sub(full)), empty),
    ]
}

/// Two columns side by side; the shorter one is padded with blank rows
pub fn columns(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    left_width: usize,
    gap: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let l = left.next().unwrap_or_default();
            let pad = left_width.saturating_sub(l.width()) + gap;
            let mut spans = l.spans;
            spans.push(Span::raw(" ".repeat(pad)));
            if let Some(r) = right.next() {
                spans.extend(r.spans);
            }
            Line::from(spans)
        })
        .collect()
}

pub fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

pub fn icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => "</>",
        Icon::Database => "◫",
        Icon::Layers => "≡",
        Icon::Workflow => "⇄",
        Icon::Lightbulb => "✦",
        Icon::Cpu => "▣",
        Icon::Wrench => "⚒",
        Icon::Award => "★",
        Icon::Mail => "✉",
        Icon::MapPin => "⌖",
        Icon::Linkedin => "in",
        Icon::Github => "gh",
        Icon::User => "☺",
        Icon::Briefcase => "▤",
        Icon::Languages => "あ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        let rows = wrap("日本語テキスト", 6);
        assert!(rows.iter().all(|r| r.width() <= 6));
        assert_eq!(rows.concat(), "日本語テキスト");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long title", 6), "a lon…");
    }

    #[test]
    fn test_card_rows_have_equal_width() {
        let body = vec![Line::from("hello"), Line::from("a somewhat longer row")];
        let lines = card(Some(Span::raw("Title")), body, 30, Style::default());
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.width(), 30);
        }
    }

    #[test]
    fn test_tags_flow() {
        let lines = tags(&["React", "Node.js", "OpenAPI"], 18, Style::default());
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.width() <= 18));
    }

    #[test]
    fn test_bar_clamps() {
        let spans = bar(1.5, 10, Style::default(), Style::default());
        assert_eq!(spans[0].content.chars().count(), 10);
        assert_eq!(spans[1].content.chars().count(), 0);
        let spans = bar(f64::NAN, 4, Style::default(), Style::default());
        assert_eq!(spans[1].content.chars().count(), 4);
    }
}
