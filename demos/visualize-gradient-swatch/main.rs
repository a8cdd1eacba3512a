#[path = "../common/mod.rs"]
mod common;

/// ```sh
/// cargo run --example visualize-gradient-swatch
/// ```
fn main() {
    common::gradient_swatch_example_from_string("visualize-gradient-swatch")
}
