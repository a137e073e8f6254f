//! Renders a plain sky gradient as a `P3` PPM image on stdout.
//!
//! Logs go to stderr, so the output can be piped straight into a file:
//! `RAYLET_WIDTH=400 RAYLET_HEIGHT=225 raylet_bin > sky.ppm`

use crate::render_opts::RenderOpts;
use crate::targets::*;
use crate::viewport::Viewport;
use anyhow::{Context, Result};
use raylet_engine::core::types::{Colour, Number, Point3};
use raylet_engine::shared::ray::Ray;
use raylet_engine::shared::{math, output, validate};
use std::io::{BufWriter, Write};
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

mod render_opts;
mod targets;
mod viewport;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let render_opts = RenderOpts::from_env().context("invalid render options")?;
    info!(target: MAIN, ?render_opts, "starting render");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, render_opts)?;
    out.flush().context("failed to flush image to stdout")?;

    info!(target: MAIN, "done");
    Ok(())
}

/// Writes the header and every pixel of the image, rows top to bottom
fn render(out: &mut impl Write, render_opts: RenderOpts) -> Result<()> {
    let [width, height] = render_opts.dims();
    let viewport = Viewport::new(Point3::ZERO, render_opts);
    debug!(target: RENDERER, ?viewport, "calculated viewport");

    write!(out, "P3\n{width} {height}\n255\n").context("failed to write image header")?;

    for y in 0..height {
        trace!(target: RENDERER, remaining = height - y, "scanline");
        for x in 0..width {
            let ray = viewport.calc_ray(x as Number, y as Number);
            validate::ray(ray);
            let colour = ray_colour(&ray);
            output::write_colour(out, colour).with_context(|| format!("failed to write pixel ({x}, {y})"))?;
        }
    }

    Ok(())
}

/// White at the bottom, blue at the top, blended by the height of the ray direction
fn ray_colour(ray: &Ray) -> Colour {
    let unit_dir = ray.direction().normalize();
    let a = 0.5 * (unit_dir.y() + 1.0);
    validate::number(a);
    math::lerp(Colour::WHITE, Colour::new([0.5, 0.7, 1.0]), a)
}
