//! In-memory [`DrawSurface`] and [`FrameScheduler`] for host-side tests.

use crate::error::EngineError;
use crate::paint::{LinearGradient, RadialGradient};
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::surface::DrawSurface;
use crate::viewport::Viewport;
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize(Viewport),
    Clear(Viewport),
    FillRect(RadialGradient),
    FillCircle {
        center: DVec2,
        radius: f64,
        gradient: RadialGradient,
    },
    StrokeSegment {
        from: DVec2,
        to: DVec2,
        width: f64,
        gradient: LinearGradient,
    },
}

/// Records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Commands issued since the most recent clear, inclusive.
    pub fn since_last_clear(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.commands.push(DrawCommand::Resize(viewport));
    }

    fn clear(&mut self, viewport: Viewport) {
        self.commands.push(DrawCommand::Clear(viewport));
    }

    fn fill_rect(&mut self, _viewport: Viewport, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::FillRect(gradient.clone()));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            gradient: gradient.clone(),
        });
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2, width: f64, gradient: &LinearGradient) {
        self.commands.push(DrawCommand::StrokeSegment {
            from,
            to,
            width,
            gradient: gradient.clone(),
        });
    }
}

/// Hands out sequential tokens and keeps the set still pending.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<FrameToken>,
    pub requested: usize,
    pub cancelled: usize,
    /// When set, every request is rejected.
    pub reject: bool,
}

impl ManualScheduler {
    pub fn pending(&self) -> &[FrameToken] {
        &self.pending
    }

    /// Fire the oldest pending request, as the display would.
    pub fn fire(&mut self) -> Option<FrameToken> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&mut self) -> Result<FrameToken, EngineError> {
        if self.reject {
            return Err(EngineError::ScheduleRejected("manual scheduler".into()));
        }
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.push(token);
        self.requested += 1;
        Ok(token)
    }

    fn cancel(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
        self.cancelled += 1;
    }
}
