//! sketch-cli
//!
//! Probes the sketch geometry kernel with scenes of shapes. The cli interface is not stable and
//! could change at any time.

// Modules
pub(crate) mod cli;
pub(crate) mod probe;
pub(crate) mod scene;

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;

fn main() -> anyhow::Result<()> {
    cli::run()
}
