//! Shader program compilation and uniform location caching.

use glow::HasContext;

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to allocate GL object: {0}")]
    Allocate(String),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("program failed to link: {log}")]
    Link { log: String },
}

/// Uniform locations shared by both dock programs.
///
/// A location is `None` when the program does not declare that uniform (the
/// background pass has no texture or hover input, the icon pass has no
/// background color); setting a `None` location is a no-op in glow, so the
/// render pass does not need to branch per program.
pub(crate) struct UniformLocations {
    pub mvp: Option<glow::UniformLocation>,
    pub texture: Option<glow::UniformLocation>,
    pub resolution: Option<glow::UniformLocation>,
    pub corner_radius: Option<glow::UniformLocation>,
    pub bevel_color: Option<glow::UniformLocation>,
    pub background_color: Option<glow::UniformLocation>,
    pub time: Option<glow::UniformLocation>,
    pub hover: Option<glow::UniformLocation>,
}

/// A linked program plus its cached uniform locations.
///
/// The locations are valid only while `program` lives; recompiling produces
/// a whole new `ShaderProgram` so program and locations can never drift
/// apart.
pub(crate) struct ShaderProgram {
    pub program: glow::Program,
    pub uniforms: UniformLocations,
}

impl ShaderProgram {
    pub unsafe fn compile(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(gl, glow::VERTEX_SHADER, "vertex", vertex_src)?;
        let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", fragment_src) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(message) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(ShaderError::Allocate(message));
            }
        };
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        let uniforms = UniformLocations {
            mvp: gl.get_uniform_location(program, "u_mvp"),
            texture: gl.get_uniform_location(program, "u_texture"),
            resolution: gl.get_uniform_location(program, "iResolution"),
            corner_radius: gl.get_uniform_location(program, "cornerRadius"),
            bevel_color: gl.get_uniform_location(program, "bevelColor"),
            background_color: gl.get_uniform_location(program, "backgroundColor"),
            time: gl.get_uniform_location(program, "time"),
            hover: gl.get_uniform_location(program, "hover"),
        };

        Ok(Self { program, uniforms })
    }

    pub unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    stage_name: &'static str,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    let shader = gl.create_shader(stage).map_err(ShaderError::Allocate)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ShaderError::Compile {
            stage: stage_name,
            log,
        });
    }

    Ok(shader)
}
