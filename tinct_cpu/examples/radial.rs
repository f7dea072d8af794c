// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws a radial gradient over a white background and writes it to a PNG file.
//!
//! ```sh
//! cargo run --example radial -- [OUTPUT] [FROM] [TO] [WIDTH] [HEIGHT]
//! ```
//!
//! Colors are given as `#rgb` or `#rrggbb`. Set `RUST_LOG=debug` to see what the renderer
//! is doing.

use std::error::Error;
use tinct_cpu::kurbo::Point;
use tinct_cpu::{parse_hex_color, Pixmap, RenderContext};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "radial.png".to_string());
    let from = parse_hex_color(&args.next().unwrap_or_else(|| "#ff0000".to_string()))?;
    // The end color is made fully transparent so that the background shows through.
    let mut to = parse_hex_color(&args.next().unwrap_or_else(|| "#0000ff".to_string()))?;
    to.a = 0;
    let width: u16 = args.next().map_or(Ok(640), |arg| arg.parse())?;
    let height: u16 = args.next().map_or(Ok(480), |arg| arg.parse())?;

    // Uses twice as many worker threads as there are cores.
    let ctx = RenderContext::new()?;
    let mut pixmap = Pixmap::new(width, height);

    ctx.fill(&mut pixmap, parse_hex_color("#fff")?);
    ctx.draw_radial_gradient(
        &mut pixmap,
        Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
        from,
        to,
    )?;

    std::fs::write(&output, pixmap.into_png()?)?;
    log::info!("wrote {width}x{height} gradient to {output}");

    Ok(())
}
