use drawbox::{draw_all, Draw, DrawBox, DrawError, DrawList};
use std::io::{self, Write};

#[derive(Clone)]
struct Circle {
    radius: f64,
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

#[test]
fn heterogeneous_round_trip_in_insertion_order() {
    let mut shapes = DrawList::new();
    shapes.push_value(Circle { radius: 2.0 });
    shapes.push_value(Square { side: 2.0 });
    shapes.push_value(Triangle);

    assert_eq!(shapes.len(), 3);

    let mut out = Vec::new();
    shapes.draw_all(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Circle: 2\nSquare: 2\nΔ\n"
    );
}

#[test]
fn plain_vec_of_boxes_works_with_draw_all() {
    let shapes = vec![
        DrawBox::new(Circle { radius: 2.0 }),
        DrawBox::new(Square { side: 2.0 }),
        DrawBox::new(Triangle),
    ];

    let mut out = Vec::new();
    draw_all(&shapes, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Circle: 2\nSquare: 2\nΔ\n"
    );
}

#[test]
fn list_clone_draws_independently_of_the_source() {
    let mut shapes = DrawList::new();
    shapes.push_value(Circle { radius: 1.0 });

    let copy = shapes.clone();
    shapes.push_value(Triangle);

    let mut out = Vec::new();
    copy.draw_all(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Circle: 1\n");
}

#[test]
fn iteration_visits_each_box_once() {
    let mut shapes = DrawList::new();
    shapes.push_value(Circle { radius: 1.0 });
    shapes.push_value(Square { side: 1.0 });

    let names: Vec<&str> = shapes.iter().map(|s| s.payload_type_name()).collect();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("Circle"));
    assert!(names[1].ends_with("Square"));
}

/// A sink that accepts one full line, then fails every later write.
struct FlakySink {
    accepted: Vec<u8>,
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted.contains(&b'\n') {
            return Err(io::Error::other("sink closed"));
        }
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn draw_all_stops_at_the_first_failing_element() {
    let mut shapes = DrawList::new();
    shapes.push_value(Circle { radius: 1.0 });
    shapes.push_value(Square { side: 1.0 });
    shapes.push_value(Triangle);

    let mut sink = FlakySink {
        accepted: Vec::new(),
    };

    let result = shapes.draw_all(&mut sink);
    assert!(matches!(result, Err(DrawError::Io(_))));

    // Only the first element got through before the sink died.
    assert_eq!(String::from_utf8(sink.accepted).unwrap(), "Circle: 1\n");
}
