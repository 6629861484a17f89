pub(crate) const SHADER_SOURCE: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    view_scale: f32,
    _pad: f32,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> @builtin(position) vec4<f32> {
    // World units to NDC under an orthographic view `view_scale` units tall
    // and `aspect * view_scale` units wide.
    let aspect = uniforms.resolution.x / uniforms.resolution.y;
    let half_height = uniforms.view_scale * 0.5;
    let ndc = vec2<f32>(
        vertex.position.x / (half_height * aspect),
        vertex.position.y / half_height,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return uniforms.color;
}
"#;
