use crate::{draw_all, Draw, DrawBox, DrawError};
use std::io::Write;
use std::slice;

/// An ordered, heterogeneous collection of [`DrawBox`] values.
///
/// Boxes keep their insertion order, and cloning the list deep-clones every
/// element — the same value semantics as the boxes themselves.
///
/// # Examples
///
/// ```
/// use drawbox::{Draw, DrawError, DrawList};
/// use std::io::Write;
///
/// #[derive(Clone)]
/// struct Circle { radius: f64 }
/// #[derive(Clone)]
/// struct Square { side: f64 }
///
/// impl Draw for Circle {
///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
///         writeln!(out, "Circle: {}", self.radius)?;
///         Ok(())
///     }
/// }
///
/// impl Draw for Square {
///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
///         writeln!(out, "Square: {}", self.side)?;
///         Ok(())
///     }
/// }
///
/// let mut shapes = DrawList::new();
/// shapes.push_value(Circle { radius: 2.0 });
/// shapes.push_value(Square { side: 2.0 });
///
/// let mut out = Vec::new();
/// shapes.draw_all(&mut out)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "Circle: 2\nSquare: 2\n");
/// # Ok::<(), DrawError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    items: Vec<DrawBox>,
}

impl DrawList {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an already-built box.
    pub fn push(&mut self, shape: DrawBox) {
        self.items.push(shape);
    }

    /// Wraps `value` in a [`DrawBox`] and appends it.
    pub fn push_value<T>(&mut self, value: T)
    where
        T: Draw + Clone + 'static,
    {
        self.items.push(DrawBox::new(value));
    }

    /// Returns the number of boxes in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no boxes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the boxes in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, DrawBox> {
        self.items.iter()
    }

    /// Draws every box to `out`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Io` at the first element whose output cannot be
    /// written; later elements are not drawn.
    pub fn draw_all(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        draw_all(&self.items, out)
    }
}

impl FromIterator<DrawBox> for DrawList {
    fn from_iter<I: IntoIterator<Item = DrawBox>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<DrawBox> for DrawList {
    fn extend<I: IntoIterator<Item = DrawBox>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for DrawList {
    type Item = DrawBox;
    type IntoIter = std::vec::IntoIter<DrawBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawBox;
    type IntoIter = slice::Iter<'a, DrawBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
