//! The point-sprite program.
//!
//! One instanced draw renders the whole field: six quad vertices expanded in
//! the vertex stage around each particle's projected position, with the quad
//! half-extent equal to the particle's radius hint in pixels. The fragment
//! stage cuts the quad down to a disc and fades alpha quadratically toward
//! the rim for a soft glow.

/// WGSL source for the render pipeline.
///
/// `uv` spans the quad in [-1, 1]; the disc radius maps to 0.5 in
/// point-coordinate space, so `r` stays in [0, 0.5] inside the disc and the
/// rim term `1 - 4r^2` reaches exactly zero at the edge.
pub const SHADER_SOURCE: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) position: vec3<f32>,
    @location(1) size: f32,
    @location(2) color: vec4<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    var world = uniforms.model * vec4<f32>(position, 1.0);
    world.x += corner.x * size;
    world.y += corner.y * size;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world;
    out.color = color;
    out.uv = corner;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let r = length(in.uv) * 0.5;
    if r > 0.5 {
        discard;
    }
    let alpha = in.color.a * (1.0 - r * r * 4.0) * 0.8;
    return vec4<f32>(in.color.rgb, alpha);
}
"#;
