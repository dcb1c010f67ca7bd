use std::f64::consts::{PI, TAU};

use folio_core::boundary::Render;
use folio_core::{Error, Result};

use super::canvas::{mix, Canvas};
use super::{SceneFrame, SceneViewport};

/// Terminal capabilities the scene depends on
#[derive(Debug, Clone, Default)]
pub struct SceneSupport {
    pub term: Option<String>,
}

impl SceneSupport {
    pub fn detect() -> Self {
        Self {
            term: std::env::var("TERM").ok(),
        }
    }

    fn check(&self) -> Result<()> {
        match self.term.as_deref() {
            Some("dumb") => Err(Error::Scene(
                "terminal reports TERM=dumb, no cursor addressing or color".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

const SHADES: [char; 5] = ['.', ':', '-', '=', '+'];
const GRID_STEP: f64 = PI / 6.0;
const ROTATION_SPEED: f64 = 0.6;
const PARTICLES: usize = 48;

#[derive(Debug, Clone)]
struct Particle {
    /// Orbit radius in sphere radii
    radius: f64,
    phase: f64,
    /// Radians per second
    speed: f64,
    /// Sine of the orbit inclination
    incline: f64,
    glyph: char,
}

/// Animated sphere and particle field
#[derive(Debug, Clone)]
pub struct HeroScene {
    particles: Vec<Particle>,
    frames: u64,
}

impl HeroScene {
    pub fn new(support: &SceneSupport) -> Result<Self> {
        support.check()?;
        Ok(Self {
            particles: seed_particles(PARTICLES),
            frames: 0,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Render<SceneViewport> for HeroScene {
    type Output = SceneFrame;

    fn render(&mut self, ctx: &SceneViewport) -> Result<SceneFrame> {
        let t = ctx.elapsed.as_secs_f64();
        self.frames += 1;

        let mut canvas = Canvas::new(ctx.width, ctx.height);
        if canvas.width() < 4 || canvas.height() < 2 {
            return Ok(canvas.into_lines());
        }

        let cx = (canvas.width() as f64 - 1.0) / 2.0;
        let cy = (canvas.height() as f64 - 1.0) / 2.0;
        // cells are roughly twice as tall as they are wide
        let r = (canvas.height() as f64 / 2.0).min(canvas.width() as f64 / 4.0) * 0.7;

        let projected: Vec<(i32, i32, f64, char)> = self
            .particles
            .iter()
            .map(|p| {
                let theta = p.phase + t * p.speed;
                let x = theta.cos() * p.radius;
                let z = theta.sin() * p.radius;
                let y = theta.sin() * p.radius * p.incline;
                let sx = (cx + x * r * 2.0).round() as i32;
                let sy = (cy + y * r).round() as i32;
                (sx, sy, z, p.glyph)
            })
            .collect();

        for &(sx, sy, _, glyph) in projected.iter().filter(|p| p.2 < 0.0) {
            canvas.put(sx, sy, glyph, ctx.dim);
        }

        draw_sphere(&mut canvas, ctx, t, cx, cy, r);

        for &(sx, sy, z, glyph) in projected.iter().filter(|p| p.2 >= 0.0) {
            let on_sphere = {
                let nx = (f64::from(sx) - cx) / (2.0 * r);
                let ny = (f64::from(sy) - cy) / r;
                nx * nx + ny * ny <= 1.0
            };
            if !on_sphere || z > 1.0 {
                canvas.put(sx, sy, glyph, mix(ctx.dim, ctx.secondary, z / 2.0 + 0.5));
            }
        }

        Ok(canvas.into_lines())
    }
}

fn draw_sphere(canvas: &mut Canvas, ctx: &SceneViewport, t: f64, cx: f64, cy: f64, r: f64) {
    let angle = t * ROTATION_SPEED;
    let tilt = 0.35 + (t * 0.8).sin() * 0.1;
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_t, cos_t) = tilt.sin_cos();
    let light = normalize(-0.6, -0.5, 0.8);

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let nx = (x as f64 - cx) / (2.0 * r);
            let ny = (y as f64 - cy) / r;
            let d2 = nx * nx + ny * ny;
            if d2 > 1.0 {
                continue;
            }
            let nz = (1.0 - d2).sqrt();

            // tilt about x, then spin about y
            let ty = ny * cos_t - nz * sin_t;
            let tz = ny * sin_t + nz * cos_t;
            let rx = nx * cos_a + tz * sin_a;
            let rz = -nx * sin_a + tz * cos_a;

            let lon = rx.atan2(rz);
            let lat = ty.clamp(-1.0, 1.0).asin();
            let lum = (nx * light.0 + ny * light.1 + nz * light.2).max(0.0);

            let on_grid = near_multiple(lon, GRID_STEP, 0.12) || near_multiple(lat, GRID_STEP, 0.1);
            let (glyph, color) = if on_grid {
                (
                    if lum > 0.55 { '#' } else { '*' },
                    mix(ctx.secondary, ctx.primary, lum),
                )
            } else {
                let idx = ((lum * SHADES.len() as f64) as usize).min(SHADES.len() - 1);
                (SHADES[idx], mix(ctx.dim, ctx.primary, lum * 0.6))
            };
            canvas.put(x as i32, y as i32, glyph, color);
        }
    }
}

fn near_multiple(value: f64, step: f64, tolerance: f64) -> bool {
    let k = value / step;
    (k - k.round()).abs() < tolerance
}

fn normalize(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let len = (x * x + y * y + z * z).sqrt();
    (x / len, y / len, z / len)
}

/// Deterministic particle field (xorshift, fixed seed)
fn seed_particles(count: usize) -> Vec<Particle> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|i| Particle {
            radius: 1.25 + next() * 0.9,
            phase: next() * TAU,
            speed: (0.15 + next() * 0.35) * if i % 3 == 0 { -1.0 } else { 1.0 },
            incline: next() * 0.6 - 0.3,
            glyph: if i % 5 == 0 { '*' } else { '·' },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::time::Duration;

    fn ctx(width: u16, height: u16, ms: u64) -> SceneViewport {
        SceneViewport {
            width,
            height,
            elapsed: Duration::from_millis(ms),
            primary: Color::Rgb(59, 130, 246),
            secondary: Color::Rgb(147, 51, 234),
            dim: Color::Rgb(60, 60, 70),
        }
    }

    fn text(frame: &SceneFrame) -> Vec<String> {
        frame
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_dumb_terminal_rejected() {
        let support = SceneSupport { term: Some("dumb".into()) };
        assert!(matches!(HeroScene::new(&support), Err(Error::Scene(_))));
        assert!(HeroScene::new(&SceneSupport::default()).is_ok());
    }

    #[test]
    fn test_frame_dimensions() {
        let mut scene = HeroScene::new(&SceneSupport::default()).unwrap();
        let frame = scene.render(&ctx(40, 16, 0)).unwrap();
        assert_eq!(frame.len(), 16);
        for row in text(&frame) {
            assert_eq!(row.chars().count(), 40);
        }
        assert_eq!(scene.frames(), 1);
    }

    #[test]
    fn test_sphere_centered() {
        let mut scene = HeroScene::new(&SceneSupport::default()).unwrap();
        let rows = text(&scene.render(&ctx(40, 16, 0)).unwrap());
        let middle: Vec<char> = rows[8].chars().collect();
        assert_ne!(middle[20], ' ');
    }

    #[test]
    fn test_tiny_viewport_is_blank() {
        let mut scene = HeroScene::new(&SceneSupport::default()).unwrap();
        let frame = scene.render(&ctx(3, 1, 0)).unwrap();
        assert_eq!(text(&frame), vec!["   ".to_string()]);
        assert!(scene.render(&ctx(0, 0, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_long_running_clock_keeps_rendering() {
        let mut scene = HeroScene::new(&SceneSupport::default()).unwrap();
        let mut viewport = ctx(40, 16, 0);
        viewport.elapsed = Duration::from_secs(60 * 60 * 24 * 365);
        assert_eq!(scene.render(&viewport).unwrap().len(), 16);
        assert_eq!(scene.render(&ctx(0, 0, 0)).unwrap().len(), 0);
        assert_eq!(scene.frames(), 2);
    }

    #[test]
    fn test_particles_deterministic() {
        let a = seed_particles(8);
        let b = seed_particles(8);
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.phase, q.phase);
            assert!(p.radius >= 1.25 && p.radius <= 2.15);
        }
    }
}
