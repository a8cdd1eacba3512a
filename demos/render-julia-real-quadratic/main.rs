#[path = "../common/mod.rs"]
mod common;

/// Render the z^2 + t series, sweeping t along the real axis with a gradient color table.
/// ```sh
/// cargo run --release --example render-julia-real-quadratic
/// ```
fn main() {
    common::render_example_from_string("render-julia-real-quadratic")
}
