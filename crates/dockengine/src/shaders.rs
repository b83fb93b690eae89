//! GLSL ES 300 sources for the two dock passes.
//!
//! Both passes share the vertex stage: the unit quad is placed by the MVP
//! uniform, nothing else. The fragment stages do all the visual work in
//! signed-distance space so the rounded shape, bevel ring, and highlights
//! stay resolution independent.

/// Shared vertex stage for both passes.
pub const VERTEX_SRC: &str = r"#version 300 es
precision highp float;
layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_texcoord;
out vec2 v_texcoord;
uniform mat4 u_mvp;
void main() {
    gl_Position = u_mvp * vec4(a_position, 0.0, 1.0);
    v_texcoord = a_texcoord;
}
";

/// Icon pass: textured rounded box with a lit 3D bevel, a moving specular
/// highlight, a diagonal shimmer sweep, and a hover-driven bounce/brighten.
pub const ICON_FRAGMENT_SRC: &str = r"#version 300 es
precision highp float;
in vec2 v_texcoord;
out vec4 frag_color;

uniform sampler2D u_texture;
uniform vec2 iResolution;
uniform float cornerRadius;
uniform vec4 bevelColor;
uniform float time;
uniform float hover;

const float bevelWidth = 12.0;
const float aa = 1.5;

float sdRoundedBox(vec2 p, vec2 b, float r) {
    vec2 q = abs(p) - b + r;
    return min(max(q.x, q.y), 0.0) + length(max(q, 0.0)) - r;
}

void main() {
    float bounce = 1.0 + hover * (sin(time * 6.0) * 0.05 + 0.08);

    vec2 p = (v_texcoord - 0.5) * iResolution;
    float scaledCornerRadius = cornerRadius * bounce;
    float d = sdRoundedBox(p, iResolution * 0.5 * bounce, scaledCornerRadius);
    float shape_alpha = 1.0 - smoothstep(-aa, aa, d);
    float bevel_intensity = smoothstep(-bevelWidth, 0.0, d) - smoothstep(0.0, aa, d);

    float center_distance = length(p) / (min(iResolution.x, iResolution.y) * 0.5);
    float button_height = pow(1.0 - smoothstep(0.0, 0.8, center_distance), 2.0);

    vec2 light_dir = normalize(vec2(-1.0, -1.0));
    float button_lighting = 0.5 + dot(normalize(p), light_dir) * 0.3 * button_height;

    float combined_bevel = max(bevel_intensity, button_height * 0.4);
    float angle = atan(p.y, p.x);
    float highlight_factor = pow(sin(angle * 2.0 - time * 2.5) * 0.5 + 0.5, 8.0);
    float brightness = (0.7 + highlight_factor * 0.6) * button_lighting;

    float shimmer = sin((p.x + p.y) / (iResolution.x + iResolution.y) * 8.0 + time * 4.0);
    float shimmer_intensity = smoothstep(0.6, 1.0, shimmer) * 0.3 *
                              smoothstep(-bevelWidth * 0.5, bevelWidth * 0.5, -abs(d));

    vec2 scaled_uv = clamp((v_texcoord - 0.5) / bounce + 0.5, 0.0, 1.0);
    vec4 tex_color = texture(u_texture, scaled_uv);

    vec3 bevel_col = mix(bevelColor.rgb * brightness, vec3(1.0, 1.0, 0.9), shimmer_intensity);
    vec3 final_rgb = mix(tex_color.rgb, bevel_col, combined_bevel * bevelColor.a);
    final_rgb += vec3(0.2, 0.15, 0.1) * hover * (1.0 - center_distance);

    frag_color = vec4(final_rgb, tex_color.a * shape_alpha);
}
";

/// Background pass: translucent rounded panel with an animated rainbow
/// gradient tracing the border.
pub const BACKGROUND_FRAGMENT_SRC: &str = r"#version 300 es
precision highp float;
in vec2 v_texcoord;
out vec4 frag_color;

uniform vec2 iResolution;
uniform float cornerRadius;
uniform vec4 backgroundColor;
uniform float time;

float sdRoundedBox(vec2 p, vec2 b, float r) {
    vec2 q = abs(p) - b + r;
    return min(max(q.x, q.y), 0.0) + length(max(q, 0.0)) - r;
}

vec3 hsv2rgb(vec3 c) {
    vec4 K = vec4(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    vec3 p = abs(fract(c.xxx + K.xyz) * 6.0 - K.www);
    return c.z * mix(K.xxx, clamp(p - K.xxx, 0.0, 1.0), c.y);
}

void main() {
    vec2 p = (v_texcoord - 0.5) * iResolution;
    float d = sdRoundedBox(p, iResolution * 0.5, cornerRadius);

    float aa = 1.5;
    float shape_alpha = 1.0 - smoothstep(-aa, aa, d);
    float border = smoothstep(-3.0, 0.0, d) - smoothstep(0.0, aa, d);

    float hue = fract((v_texcoord.x + v_texcoord.y) * 0.5 - time * 0.1);
    vec3 border_color = hsv2rgb(vec3(hue, 0.8, 1.0));

    vec3 final_color = mix(backgroundColor.rgb, border_color, border * 0.8);
    frag_color = vec4(final_color, backgroundColor.a * shape_alpha);
}
";
