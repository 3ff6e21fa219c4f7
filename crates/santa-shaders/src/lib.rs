//! santa-shaders: WGSL shader sources.

/// Presents a CPU frame texel-for-texel.
///
/// The vertex stage emits one triangle that covers the target. The fragment
/// stage loads the texel under each framebuffer pixel, so row 0 of the frame
/// is the top row of the target and no sampler is involved. Frames are
/// uploaded at surface size; coordinates outside the frame clamp to its edge.
pub const PRESENT_WGSL: &str = r#"
@group(0) @binding(0) var frame: texture_2d<f32>;

@vertex
fn vs_main(@builtin(vertex_index) vi: u32) -> @builtin(position) vec4<f32> {
    // (-1, -1), (3, -1), (-1, 3)
    let x = f32((vi & 1u) << 2u) - 1.0;
    let y = f32((vi & 2u) << 1u) - 1.0;
    return vec4<f32>(x, y, 0.0, 1.0);
}

@fragment
fn fs_main(@builtin(position) pos: vec4<f32>) -> @location(0) vec4<f32> {
    let last = vec2<i32>(textureDimensions(frame)) - vec2<i32>(1, 1);
    let texel = clamp(vec2<i32>(pos.xy), vec2<i32>(0, 0), last);
    return textureLoad(frame, texel, 0);
}
"#;
