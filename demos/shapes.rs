//! The classic shapes walkthrough: unrelated payload types, one container.
//!
//! Run with copy/clone tracing enabled:
//!
//! ```sh
//! RUST_LOG=drawbox=trace cargo run --example shapes
//! ```

use drawbox::{draw, Draw, DrawBox, DrawError, DrawList};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Circle {
    radius: f64,
}

impl Circle {
    fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Draw for Circle {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        writeln!(out, "Circle: {}", self.radius)?;
        Ok(())
    }
}

#[derive(Clone)]
struct Square {
    side: f64,
}

impl Square {
    fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Draw for Square {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        writeln!(out, "Square: {}", self.side)?;
        Ok(())
    }
}

#[derive(Clone)]
struct Triangle;

impl Draw for Triangle {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        writeln!(out, "Δ")?;
        Ok(())
    }
}

fn main() -> Result<(), DrawError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let square = DrawBox::new(Square::new(230.0));
    let mut circle = DrawBox::new(Circle::new(230.0));
    draw(&circle, &mut out)?;

    // Copy: `another_circle` owns its own payload from here on.
    let another_circle = circle.clone();

    // Copy-assign: `circle` now draws as a square.
    circle = square.clone();

    draw(&circle, &mut out)?;
    draw(&square, &mut out)?;
    draw(&another_circle, &mut out)?;

    let mut shapes = DrawList::new();
    shapes.push_value(Circle::new(2.0));
    shapes.push_value(Square::new(2.0));
    shapes.push_value(Triangle);

    shapes.draw_all(&mut out)?;
    Ok(())
}
