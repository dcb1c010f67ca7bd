use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Fixed-size character grid that collapses into styled lines
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<(char, Option<Color>)>,
}

impl Canvas {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let (width, height) = (usize::from(width), usize::from(height));
        Self {
            width,
            height,
            cells: vec![(' ', None); width * height],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, c: char, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = (c, Some(color));
        }
    }

    pub(crate) fn is_blank(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x].0 == ' '
    }

    /// Merge runs of equal color into spans
    pub(crate) fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width.max(1);
        self.cells
            .chunks(width)
            .take(self.height)
            .map(|row| {
                let mut spans = Vec::new();
                let mut run = String::new();
                let mut run_color: Option<Color> = None;
                for &(c, color) in row {
                    if color != run_color && !run.is_empty() {
                        spans.push(styled(std::mem::take(&mut run), run_color));
                    }
                    run_color = color;
                    run.push(c);
                }
                if !run.is_empty() {
                    spans.push(styled(run, run_color));
                }
                Line::from(spans)
            })
            .collect()
    }
}

fn styled(text: String, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(color)),
        None => Span::raw(text),
    }
}

/// Blend two colors; non-RGB colors snap to the nearer end
pub(crate) fn mix(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let ch = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
            Color::Rgb(ch(r1, r2), ch(g1, g2), ch(b1, b2))
        }
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}
