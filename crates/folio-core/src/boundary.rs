//! Try-primary, fall-back-on-failure rendering
//!
//! A boundary owns an optional primary renderer and a fallback. Once the
//! primary fails, either while being built or on any later frame, the
//! boundary stays on the fallback for the rest of its life.

use tracing::warn;

use crate::Result;

/// A renderer that may fail
pub trait Render<Ctx: ?Sized> {
    type Output;

    fn render(&mut self, ctx: &Ctx) -> Result<Self::Output>;
}

/// A renderer that always produces output
pub trait Fallback<Ctx: ?Sized> {
    type Output;

    fn fallback(&self, ctx: &Ctx) -> Self::Output;
}

#[derive(Debug)]
enum Slot<P> {
    Live(P),
    Failed,
}

#[derive(Debug)]
pub struct FallbackBoundary<P, F> {
    primary: Slot<P>,
    fallback: F,
    label: &'static str,
}

impl<P, F> FallbackBoundary<P, F> {
    /// Build the primary with `build`; a build error latches the fallback
    pub fn new(label: &'static str, build: impl FnOnce() -> Result<P>, fallback: F) -> Self {
        let primary = match build() {
            Ok(primary) => Slot::Live(primary),
            Err(e) => {
                warn!(boundary = label, error = %e, "Primary renderer unavailable, using fallback");
                Slot::Failed
            }
        };
        Self {
            primary,
            fallback,
            label,
        }
    }

    /// A boundary that starts on the fallback, e.g. when disabled by config
    pub fn disabled(label: &'static str, fallback: F) -> Self {
        Self {
            primary: Slot::Failed,
            fallback,
            label,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.primary, Slot::Failed)
    }

    /// Render one frame. Never fails.
    pub fn render<Ctx>(&mut self, ctx: &Ctx) -> P::Output
    where
        Ctx: ?Sized,
        P: Render<Ctx>,
        F: Fallback<Ctx, Output = P::Output>,
    {
        if let Slot::Live(primary) = &mut self.primary {
            match primary.render(ctx) {
                Ok(output) => return output,
                Err(e) => {
                    warn!(boundary = self.label, error = %e, "Primary renderer failed, using fallback");
                    self.primary = Slot::Failed;
                }
            }
        }
        self.fallback.fallback(ctx)
    }
}
