#[path = "../common/mod.rs"]
mod common;

/// Render a single frame of the oscillating cubic, colored with the red ramp.
/// ```sh
/// cargo run --release --example render-julia-cubic-oscillator
/// ```
fn main() {
    common::render_example_from_string("render-julia-cubic-oscillator")
}
