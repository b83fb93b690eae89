//! Shared GPU resources: the unit quad, the two shader programs, and the
//! per-icon textures.
//!
//! The pool is created empty and initialized lazily from the first frame
//! that needs it. Initialization is idempotent, compilation failure leaves
//! the pool unusable without retry (a broken shader will not fix itself
//! between frames), and teardown releases every handle exactly once.

use glow::{HasContext, PixelUnpackData};
use tracing::{debug, warn};

use crate::gl::compile::ShaderProgram;
use crate::gl::state::CreateStateGuard;
use crate::icon::DockIcon;
use crate::shaders;

/// Unit quad in [0,1]²; V is flipped so decoded images land upright in the
/// framebuffer's top-left-origin convention.
const QUAD_VERTICES: [f32; 16] = [
    0.0, 0.0, 0.0, 1.0, //
    1.0, 0.0, 1.0, 1.0, //
    1.0, 1.0, 1.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

const VERTEX_STRIDE: i32 = 16;

pub(crate) struct QuadMesh {
    pub vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
}

impl QuadMesh {
    unsafe fn create(gl: &glow::Context) -> Result<Self, String> {
        let vao = gl.create_vertex_array()?;
        let vbo = gl.create_buffer()?;
        let ebo = gl.create_buffer()?;

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_VERTICES),
            glow::STATIC_DRAW,
        );
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_INDICES),
            glow::STATIC_DRAW,
        );

        gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, VERTEX_STRIDE, 0);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, VERTEX_STRIDE, 8);
        gl.enable_vertex_attrib_array(1);

        Ok(Self { vao, vbo, ebo })
    }

    unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.vbo);
        gl.delete_buffer(self.ebo);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolState {
    Uninitialized,
    Ready,
    Failed,
}

/// Owns every GL object the dock creates.
pub struct GpuResourcePool {
    state: PoolState,
    mesh: Option<QuadMesh>,
    icon_program: Option<ShaderProgram>,
    background_program: Option<ShaderProgram>,
}

impl GpuResourcePool {
    pub(crate) fn new() -> Self {
        Self {
            state: PoolState::Uninitialized,
            mesh: None,
            icon_program: None,
            background_program: None,
        }
    }

    /// Initializes the pool on first call and reports whether it is usable.
    ///
    /// Already-initialized pools return immediately with the same handles;
    /// a pool whose shader compilation failed stays failed and keeps
    /// returning `false` so the render pass skips drawing for the dock's
    /// lifetime.
    pub(crate) unsafe fn ensure_initialized(
        &mut self,
        gl: &glow::Context,
        icons: &mut [DockIcon],
    ) -> bool {
        match self.state {
            PoolState::Ready => true,
            PoolState::Failed => false,
            PoolState::Uninitialized => self.initialize(gl, icons),
        }
    }

    unsafe fn initialize(&mut self, gl: &glow::Context, icons: &mut [DockIcon]) -> bool {
        let _saved = CreateStateGuard::capture(gl);

        let icon_program =
            match ShaderProgram::compile(gl, shaders::VERTEX_SRC, shaders::ICON_FRAGMENT_SRC) {
                Ok(program) => program,
                Err(err) => {
                    warn!(error = %err, "icon shader unavailable; dock will not render");
                    self.state = PoolState::Failed;
                    return false;
                }
            };

        let background_program = match ShaderProgram::compile(
            gl,
            shaders::VERTEX_SRC,
            shaders::BACKGROUND_FRAGMENT_SRC,
        ) {
            Ok(program) => program,
            Err(err) => {
                warn!(error = %err, "background shader unavailable; dock will not render");
                icon_program.destroy(gl);
                self.state = PoolState::Failed;
                return false;
            }
        };

        let mesh = match QuadMesh::create(gl) {
            Ok(mesh) => mesh,
            Err(message) => {
                warn!(error = %message, "failed to create dock quad mesh");
                icon_program.destroy(gl);
                background_program.destroy(gl);
                self.state = PoolState::Failed;
                return false;
            }
        };

        for icon in icons.iter_mut() {
            upload_icon_texture(gl, icon);
        }

        self.mesh = Some(mesh);
        self.icon_program = Some(icon_program);
        self.background_program = Some(background_program);
        self.state = PoolState::Ready;
        debug!(icons = icons.len(), "dock GPU resources initialized");
        true
    }

    pub(crate) fn mesh(&self) -> Option<&QuadMesh> {
        self.mesh.as_ref()
    }

    pub(crate) fn icon_program(&self) -> Option<&ShaderProgram> {
        self.icon_program.as_ref()
    }

    pub(crate) fn background_program(&self) -> Option<&ShaderProgram> {
        self.background_program.as_ref()
    }

    /// Releases every owned handle. Safe to call more than once; the second
    /// call finds nothing left to delete.
    pub(crate) unsafe fn destroy(&mut self, gl: &glow::Context, icons: &mut [DockIcon]) {
        for icon in icons.iter_mut() {
            if let Some(texture) = icon.texture.take() {
                gl.delete_texture(texture);
            }
            icon.loaded = false;
            icon.width = 0;
            icon.height = 0;
        }
        if let Some(mesh) = self.mesh.take() {
            mesh.destroy(gl);
        }
        if let Some(program) = self.icon_program.take() {
            program.destroy(gl);
        }
        if let Some(program) = self.background_program.take() {
            program.destroy(gl);
        }
        self.state = PoolState::Uninitialized;
    }
}

/// Decodes the icon's PNG and uploads it as an RGBA8 texture. Failures are
/// logged and leave the icon unloaded; its layout slot stays reserved so
/// the rest of the dock keeps its positions.
unsafe fn upload_icon_texture(gl: &glow::Context, icon: &mut DockIcon) {
    if icon.loaded {
        return;
    }
    let Some(path) = icon.icon_path.as_deref() else {
        return;
    };

    let pixels = match image::open(path) {
        Ok(decoded) => decoded.into_rgba8(),
        Err(err) => {
            warn!(
                app = %icon.app_id,
                path = %path.display(),
                error = %err,
                "failed to decode icon image"
            );
            return;
        }
    };
    let (width, height) = pixels.dimensions();

    let texture = match gl.create_texture() {
        Ok(texture) => texture,
        Err(message) => {
            warn!(app = %icon.app_id, error = %message, "failed to create icon texture");
            return;
        }
    };

    gl.bind_texture(glow::TEXTURE_2D, Some(texture));
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_MIN_FILTER,
        glow::LINEAR as i32,
    );
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_MAG_FILTER,
        glow::LINEAR as i32,
    );
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_WRAP_S,
        glow::CLAMP_TO_EDGE as i32,
    );
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_WRAP_T,
        glow::CLAMP_TO_EDGE as i32,
    );
    gl.tex_image_2d(
        glow::TEXTURE_2D,
        0,
        glow::RGBA as i32,
        width as i32,
        height as i32,
        0,
        glow::RGBA,
        glow::UNSIGNED_BYTE,
        PixelUnpackData::Slice(Some(pixels.as_raw())),
    );

    icon.texture = Some(texture);
    icon.width = width as i32;
    icon.height = height as i32;
    icon.loaded = true;
    debug!(app = %icon.app_id, width, height, "uploaded icon texture");
}
