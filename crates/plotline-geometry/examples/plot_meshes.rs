//! Plot Meshes Example - Build every mesh a simple line chart needs
//!
//! This example demonstrates:
//! - Normalizing sampled data into clip space
//! - Tessellating it as a mitered and as a naive ribbon
//! - Adding axis bars and point markers
//!
//! The meshes are printed instead of drawn; pass `--dump` to list every
//! vertex and index of the mitered ribbon.

use plotline_core::config::{Config, ProfilingMode};
use plotline_core::profiling::new_frame;
use plotline_geometry::{
    GeometryResult, RibbonStroke, Tessellator, markers, normalize_to_clip, sample, x_axis, y_axis,
};

fn main() -> GeometryResult<()> {
    Config::default().with_profiling(ProfilingMode::On).apply();
    new_frame();

    let width = 0.01;
    let points = normalize_to_clip(&sample::parabola(100));

    let mitered = Tessellator::with_stroke(RibbonStroke::new(width)).tessellate(&points)?;
    let naive = Tessellator::with_stroke(RibbonStroke::naive(width)).tessellate(&points)?;
    let x = x_axis(0.005)?;
    let y = y_axis(0.005)?;
    let dots = markers(&points, 0.02)?;

    for (name, mesh) in [
        ("mitered ribbon", &mitered),
        ("naive ribbon", &naive),
        ("x axis", &x),
        ("y axis", &y),
        ("markers", &dots),
    ] {
        tracing::info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            bytes = mesh.vertex_bytes().len() + mesh.index_bytes().len(),
            "{}",
            name
        );
    }

    if std::env::args().any(|arg| arg == "--dump") {
        for (i, vertex) in mitered.vertices().iter().enumerate() {
            println!("v{}: {}", i, vertex);
        }
        for triangle in mitered.indices().chunks_exact(3) {
            println!("f: {} {} {}", triangle[0], triangle[1], triangle[2]);
        }
    }

    Ok(())
}
