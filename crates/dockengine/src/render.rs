//! The per-frame draw passes.
//!
//! Two passes over one shared quad: the rounded background panel, then every
//! loaded icon at its slot. The host's GL state is captured before the first
//! state change and restored when the pass guard drops, so the host resumes
//! its own rendering in an untouched context even when the engine bails out
//! early.

use glam::{Mat4, Vec3};
use glow::HasContext;

use crate::engine::DockEngine;
use crate::geometry::Rect;
use crate::gl::state::DrawStateGuard;
use crate::hit;
use crate::hover;

/// The background panel extends slightly past the icon corner rounding.
const BACKGROUND_RADIUS_OFFSET: f32 = 4.0;

const QUAD_INDEX_COUNT: i32 = 6;

/// Top-left-origin, Y-down orthographic projection over the target
/// framebuffer. This mirrors the host's framebuffer convention; flipping it
/// renders the dock upside down at the wrong edge.
fn framebuffer_projection(framebuffer: Rect) -> Mat4 {
    Mat4::orthographic_rh_gl(
        framebuffer.x as f32,
        (framebuffer.x + framebuffer.width) as f32,
        (framebuffer.y + framebuffer.height) as f32,
        framebuffer.y as f32,
        -1.0,
        1.0,
    )
}

/// Places the unit quad at `(x, y)` with the given pixel size.
fn model_matrix(x: f32, y: f32, width: f32, height: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, 0.0)) * Mat4::from_scale(Vec3::new(width, height, 1.0))
}

impl DockEngine {
    /// Renders the dock into the host's currently bound framebuffer.
    ///
    /// Call once per host frame, from the overlay hook, with `framebuffer`
    /// describing the target's geometry and `cursor` the current pointer
    /// position in output coordinates (or `None` when the pointer is
    /// elsewhere). Lazily initializes GPU resources on the first frame;
    /// draws nothing if that initialization failed.
    ///
    /// # Safety
    ///
    /// The host's GL context must be current and stay current for the
    /// duration of the call.
    pub unsafe fn render(
        &mut self,
        gl: &glow::Context,
        framebuffer: Rect,
        cursor: Option<(f64, f64)>,
    ) {
        if self.icons.is_empty() {
            return;
        }
        if !self.pool.ensure_initialized(gl, &mut self.icons) {
            return;
        }

        // Hover targets follow the hit test; every icon eases one step.
        let hovered = cursor.and_then(|(x, y)| {
            hit::icon_at(x, y, self.geometry(), &self.settings, self.icons.len())
        });
        for (index, icon) in self.icons.iter_mut().enumerate() {
            let target = if hovered == Some(index) { 1.0 } else { 0.0 };
            icon.hover = hover::step(icon.hover, target);
        }

        let (Some(mesh), Some(icon_program), Some(background_program)) = (
            self.pool.mesh(),
            self.pool.icon_program(),
            self.pool.background_program(),
        ) else {
            return;
        };

        let time = self.clock.elapsed();
        let dock = self.geometry();
        let settings = self.settings;

        let _saved = DrawStateGuard::capture(gl);

        gl.enable(glow::BLEND);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

        let projection = framebuffer_projection(framebuffer);

        // Pass 1: background panel.
        gl.use_program(Some(background_program.program));
        let mvp = projection
            * model_matrix(
                dock.x as f32,
                dock.y as f32,
                dock.width as f32,
                dock.height as f32,
            );
        let uniforms = &background_program.uniforms;
        gl.uniform_matrix_4_f32_slice(uniforms.mvp.as_ref(), false, &mvp.to_cols_array());
        gl.uniform_2_f32(
            uniforms.resolution.as_ref(),
            dock.width as f32,
            dock.height as f32,
        );
        gl.uniform_1_f32(
            uniforms.corner_radius.as_ref(),
            settings.corner_radius + BACKGROUND_RADIUS_OFFSET,
        );
        gl.uniform_4_f32_slice(
            uniforms.background_color.as_ref(),
            &settings.background_color,
        );
        gl.uniform_1_f32(uniforms.time.as_ref(), time);

        gl.bind_vertex_array(Some(mesh.vao));
        gl.draw_elements(glow::TRIANGLES, QUAD_INDEX_COUNT, glow::UNSIGNED_INT, 0);

        // Pass 2: icons, storage order, top to bottom. Unloaded icons keep
        // their slot so the ones below stay put.
        gl.use_program(Some(icon_program.program));
        let icon_x = (dock.x + settings.margin) as f32;
        let mut icon_y = (dock.y + settings.margin) as f32;
        let icon_step = settings.icon_step() as f32;
        let icon_size = settings.icon_size as f32;
        let uniforms = &icon_program.uniforms;

        for icon in &self.icons {
            let Some(texture) = icon.texture else {
                icon_y += icon_step;
                continue;
            };

            let mvp = projection * model_matrix(icon_x, icon_y, icon_size, icon_size);
            gl.uniform_matrix_4_f32_slice(uniforms.mvp.as_ref(), false, &mvp.to_cols_array());
            gl.uniform_1_i32(uniforms.texture.as_ref(), 0);
            gl.uniform_2_f32(uniforms.resolution.as_ref(), icon_size, icon_size);
            gl.uniform_1_f32(uniforms.corner_radius.as_ref(), settings.corner_radius);
            gl.uniform_4_f32_slice(uniforms.bevel_color.as_ref(), &settings.bevel_color);
            gl.uniform_1_f32(uniforms.time.as_ref(), time);
            gl.uniform_1_f32(uniforms.hover.as_ref(), icon.hover);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.draw_elements(glow::TRIANGLES, QUAD_INDEX_COUNT, glow::UNSIGNED_INT, 0);

            icon_y += icon_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn projection_is_top_left_origin_y_down() {
        let projection = framebuffer_projection(Rect::new(0, 0, 800, 600));
        let top_left = projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let bottom_right = projection * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert!((top_left.x - -1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn projection_respects_framebuffer_offset() {
        let projection = framebuffer_projection(Rect::new(100, 200, 400, 300));
        let origin = projection * Vec4::new(100.0, 200.0, 0.0, 1.0);
        assert!((origin.x - -1.0).abs() < 1e-6);
        assert!((origin.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_maps_unit_quad_to_pixel_rect() {
        let model = model_matrix(10.0, 20.0, 64.0, 64.0);
        let origin = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let far = model * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!((origin.x, origin.y), (10.0, 20.0));
        assert_eq!((far.x, far.y), (74.0, 84.0));
    }
}
