//! Open extension: a payload type the crate has never heard of.
//!
//! Nothing in `drawbox` is edited to support `Sparkline`; one `Draw` impl is
//! the whole integration surface.

use drawbox::{Draw, DrawBox, DrawError, DrawList};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Sparkline {
    samples: Vec<u8>,
}

impl Draw for Sparkline {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
        for &sample in &self.samples {
            let idx = (sample as usize * (BARS.len() - 1)) / u8::MAX as usize;
            write!(out, "{}", BARS[idx])?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Clone)]
struct Badge {
    text: String,
}

impl Draw for Badge {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        writeln!(out, "[{}]", self.text)?;
        Ok(())
    }
}

fn main() -> Result<(), DrawError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut widgets = DrawList::new();
    widgets.push_value(Sparkline {
        samples: vec![10, 80, 160, 255, 160, 80, 10],
    });
    widgets.push_value(Badge {
        text: "build passing".to_string(),
    });
    widgets.push(DrawBox::new(Sparkline {
        samples: vec![255, 0, 255, 0],
    }));

    widgets.draw_all(&mut out)?;

    for widget in widgets.iter() {
        writeln!(out, "payload: {}", widget.payload_type_name())?;
    }
    Ok(())
}
