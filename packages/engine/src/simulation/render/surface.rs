//! Drawing surface abstraction.
//!
//! The paint step only needs to clear a rectangle and fill rectangles with an
//! HSLA colour. The browser binds this to a canvas 2-d context; `DrawList`
//! records the same calls in memory.

use crate::domain::palette::Hsla;

pub trait Surface {
    /// Current drawing size in CSS pixels.
    fn size(&self) -> (f64, f64);

    /// Match the drawing buffer to the viewport.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    Fill { x: f64, y: f64, w: f64, h: f64, color: Hsla },
}

/// In-memory surface: keeps every command since the last `take`.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, commands: Vec::with_capacity(1024) }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Fill commands only.
    pub fn fills(&self) -> impl Iterator<Item = (f64, f64, f64, f64, Hsla)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Fill { x, y, w, h, color } => Some((x, y, w, h, color)),
            DrawCommand::Clear { .. } => None,
        })
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla) {
        self.commands.push(DrawCommand::Fill { x, y, w, h, color });
    }
}
