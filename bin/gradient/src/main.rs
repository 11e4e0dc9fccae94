//! Render color ranges and picked colors into `out.png`, one row each.
//!
//! Set `RUST_LOG=colorant=trace` to follow the conversions.

use anyhow::{Context, Result};
use colorant::{Color, ColorFactory, DigestRgbPicker};
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 1024;
const HEIGHT_PER_ROW: u32 = 64;
const STEPS: usize = 16;

fn pixel(color: &Color) -> Rgb<u8> {
    let rgb = color.rgb();
    Rgb([rgb.red, rgb.green, rgb.blue].map(colorant::web::quantize))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rows: Vec<Vec<Color>> = Vec::new();

    for (start, end) in [
        ("red", "blue"),
        ("black", "white"),
        ("tomato", "teal"),
        ("#fa3b2c", "rebeccapurple"),
    ] {
        let start = Color::parse(start)?;
        let end = Color::parse(end)?;
        rows.push(start.range_to(&end, STEPS)?.collect());
    }

    let start = Color::from_xkcd("cloudy_blue")?;
    let end = Color::from_xkcd("toxic_green")?;
    rows.push(start.range_to(&end, STEPS)?.collect());

    rows.push(
        (0..STEPS)
            .map(|i| Color::pick_for(&i))
            .collect::<colorant::Result<_>>()?,
    );

    let digest = ColorFactory::new().picker(DigestRgbPicker);
    rows.push(
        (0..STEPS)
            .map(|i| digest.pick_for(&format!("swatch {i}")))
            .collect::<colorant::Result<_>>()?,
    );

    for row in &rows {
        let webs = row.iter().map(Color::web).collect::<Vec<_>>();
        tracing::info!(colors = ?webs, "row");
    }

    let height = rows.len() as u32 * HEIGHT_PER_ROW;
    let mut img = RgbImage::new(WIDTH, height);

    for (x, y, p) in img.enumerate_pixels_mut() {
        let row = &rows[(y / HEIGHT_PER_ROW) as usize];
        let index = (x as usize * row.len()) / WIDTH as usize;
        *p = pixel(&row[index]);
    }

    img.save("out.png").context("could not write image to out.png")?;

    Ok(())
}
