//! Scoped capture/restore of host-owned GL bindings.
//!
//! The engine draws in the middle of the host compositor's frame; the host
//! resumes issuing GL immediately after and must not observe any binding the
//! engine changed. The guards capture on construction and restore in `Drop`,
//! so restoration happens on every exit path, including early returns after
//! failed initialization.

use std::num::NonZeroU32;

use glow::HasContext;

fn program_from_raw(raw: i32) -> Option<glow::NativeProgram> {
    NonZeroU32::new(raw as u32).map(glow::NativeProgram)
}

fn vertex_array_from_raw(raw: i32) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(raw as u32).map(glow::NativeVertexArray)
}

fn buffer_from_raw(raw: i32) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(raw as u32).map(glow::NativeBuffer)
}

fn texture_from_raw(raw: i32) -> Option<glow::NativeTexture> {
    NonZeroU32::new(raw as u32).map(glow::NativeTexture)
}

/// Bindings touched while creating meshes and uploading textures.
pub(crate) struct CreateStateGuard<'a> {
    gl: &'a glow::Context,
    vertex_array: Option<glow::NativeVertexArray>,
    array_buffer: Option<glow::NativeBuffer>,
    texture: Option<glow::NativeTexture>,
}

impl<'a> CreateStateGuard<'a> {
    pub unsafe fn capture(gl: &'a glow::Context) -> Self {
        Self {
            gl,
            vertex_array: vertex_array_from_raw(gl.get_parameter_i32(glow::VERTEX_ARRAY_BINDING)),
            array_buffer: buffer_from_raw(gl.get_parameter_i32(glow::ARRAY_BUFFER_BINDING)),
            texture: texture_from_raw(gl.get_parameter_i32(glow::TEXTURE_BINDING_2D)),
        }
    }
}

impl Drop for CreateStateGuard<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(self.vertex_array);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);
            self.gl.bind_texture(glow::TEXTURE_2D, self.texture);
        }
    }
}

/// Bindings and enables touched by the per-frame draw passes.
pub(crate) struct DrawStateGuard<'a> {
    gl: &'a glow::Context,
    program: Option<glow::NativeProgram>,
    vertex_array: Option<glow::NativeVertexArray>,
    texture: Option<glow::NativeTexture>,
    active_texture: u32,
    blend_enabled: bool,
    blend_src_rgb: u32,
    blend_dst_rgb: u32,
    blend_src_alpha: u32,
    blend_dst_alpha: u32,
}

impl<'a> DrawStateGuard<'a> {
    pub unsafe fn capture(gl: &'a glow::Context) -> Self {
        Self {
            gl,
            program: program_from_raw(gl.get_parameter_i32(glow::CURRENT_PROGRAM)),
            vertex_array: vertex_array_from_raw(gl.get_parameter_i32(glow::VERTEX_ARRAY_BINDING)),
            texture: texture_from_raw(gl.get_parameter_i32(glow::TEXTURE_BINDING_2D)),
            active_texture: gl.get_parameter_i32(glow::ACTIVE_TEXTURE) as u32,
            blend_enabled: gl.is_enabled(glow::BLEND),
            blend_src_rgb: gl.get_parameter_i32(glow::BLEND_SRC_RGB) as u32,
            blend_dst_rgb: gl.get_parameter_i32(glow::BLEND_DST_RGB) as u32,
            blend_src_alpha: gl.get_parameter_i32(glow::BLEND_SRC_ALPHA) as u32,
            blend_dst_alpha: gl.get_parameter_i32(glow::BLEND_DST_ALPHA) as u32,
        }
    }
}

impl Drop for DrawStateGuard<'_> {
    fn drop(&mut self) {
        unsafe {
            self.gl.bind_vertex_array(self.vertex_array);
            self.gl.active_texture(self.active_texture);
            self.gl.bind_texture(glow::TEXTURE_2D, self.texture);
            self.gl.use_program(self.program);
            if self.blend_enabled {
                self.gl.enable(glow::BLEND);
            } else {
                self.gl.disable(glow::BLEND);
            }
            self.gl.blend_func_separate(
                self.blend_src_rgb,
                self.blend_dst_rgb,
                self.blend_src_alpha,
                self.blend_dst_alpha,
            );
        }
    }
}
