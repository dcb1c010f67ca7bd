use folio_core::boundary::Fallback;

use super::canvas::Canvas;
use super::{SceneFrame, SceneViewport};

/// Static ring-and-dots illustration used when the scene is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHero;

impl Fallback<SceneViewport> for StaticHero {
    type Output = SceneFrame;

    fn fallback(&self, ctx: &SceneViewport) -> SceneFrame {
        let mut canvas = Canvas::new(ctx.width, ctx.height);
        if canvas.width() < 4 || canvas.height() < 2 {
            return canvas.into_lines();
        }

        let cx = (canvas.width() as f64 - 1.0) / 2.0;
        let cy = (canvas.height() as f64 - 1.0) / 2.0;
        let r = (canvas.height() as f64 / 2.0).min(canvas.width() as f64 / 4.0) * 0.7;

        for step in 0..72 {
            let theta = f64::from(step) * std::f64::consts::TAU / 72.0;
            let x = (cx + theta.cos() * r * 2.0).round() as i32;
            let y = (cy + theta.sin() * r).round() as i32;
            canvas.put(x, y, 'o', ctx.primary);
        }
        for (i, ring) in [1.35_f64, 1.7].iter().enumerate() {
            for step in 0..12 {
                let theta = f64::from(step) * std::f64::consts::TAU / 12.0 + i as f64 * 0.25;
                let x = (cx + theta.cos() * r * 2.0 * ring).round() as i32;
                let y = (cy + theta.sin() * r * ring * 0.5).round() as i32;
                if canvas.is_blank(x, y) {
                    canvas.put(x, y, '·', ctx.dim);
                }
            }
        }
        canvas.into_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::time::Duration;

    #[test]
    fn test_fallback_is_static() {
        let ctx = SceneViewport {
            width: 30,
            height: 10,
            elapsed: Duration::ZERO,
            primary: Color::Blue,
            secondary: Color::Magenta,
            dim: Color::DarkGray,
        };
        let later = SceneViewport {
            elapsed: Duration::from_secs(10),
            ..ctx
        };
        let frame = StaticHero.fallback(&ctx);
        assert_eq!(frame.len(), 10);
        assert_eq!(frame, StaticHero.fallback(&later));
    }
}
