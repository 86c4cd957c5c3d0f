use crate::scene::{DrawCmd, DrawList};

use super::shapes::{render_circle, render_lines, render_polygon, render_rounded_rect};
use super::{Canvas, Layer, RenderError, RenderSettings};

/// Walks a [`DrawList`] back-to-front and composites every command onto a canvas.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Renders `list` onto a fresh transparent `width` x `height` canvas.
    pub fn render(&self, list: &DrawList, width: u32, height: u32) -> Result<Canvas, RenderError> {
        let mut canvas = Canvas::new(width, height)?;
        self.render_onto(&mut canvas, list)?;
        Ok(canvas)
    }

    /// Composites `list` over whatever `canvas` already holds.
    pub fn render_onto(&self, canvas: &mut Canvas, list: &DrawList) -> Result<(), RenderError> {
        log::debug!(
            "rendering {} draw items onto {}x{} canvas ({}x supersample)",
            list.len(),
            canvas.width(),
            canvas.height(),
            self.settings.supersample,
        );

        for item in list.iter_in_paint_order() {
            let layers = self.render_cmd(&item.cmd)?;
            if layers.is_empty() {
                log::trace!("{} at {:?} produced no coverage", item.cmd.kind(), item.key);
            }
            for layer in &layers {
                canvas.composite(layer);
            }
        }
        Ok(())
    }

    /// Rasterizes one command into the layers it contributes, bottom first.
    pub fn render_cmd(&self, cmd: &DrawCmd) -> Result<Vec<Layer>, RenderError> {
        let layers: Vec<Layer> = match cmd {
            DrawCmd::RoundedRect(c) => render_rounded_rect(c, &self.settings)?.into_iter().collect(),
            DrawCmd::Polygon(c) => match render_polygon(c, &self.settings)? {
                Some(layers) => layers.into_layers().collect(),
                None => Vec::new(),
            },
            DrawCmd::Circle(c) => render_circle(c, &self.settings)?.into_iter().collect(),
            DrawCmd::Lines(c) => render_lines(c)?.into_iter().collect(),
        };
        Ok(layers)
    }
}
