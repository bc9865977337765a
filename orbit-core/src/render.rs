use crate::body::{Body, ColorTag};
use glam::DVec2;

/// Offset of a label's anchor from its body's position.
pub const LABEL_OFFSET: DVec2 = DVec2::new(10.0, -10.0);

/// What the renderer needs to draw one free body for the current frame.
///
/// Borrowed from the simulation; the core does no drawing itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderBody<'a> {
    pub pos: DVec2,
    pub radius: f64,
    pub color: Option<ColorTag>,
    pub label: Option<&'a str>,
    pub label_anchor: DVec2,
    body: &'a Body,
}

impl<'a> RenderBody<'a> {
    /// Snapshot of a free body, or `None` for a fixed one.
    pub fn of(body: &'a Body) -> Option<Self> {
        if body.fixed {
            return None;
        }
        Some(Self {
            pos: body.pos,
            radius: body.size_hint(),
            color: body.color,
            label: body.label.as_deref(),
            label_anchor: body.pos + LABEL_OFFSET,
            body,
        })
    }

    /// Trail points, oldest first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = DVec2> + 'a {
        self.body.trail.iter()
    }
}
