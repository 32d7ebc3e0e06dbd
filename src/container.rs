use crate::model::{DrawConcept, DrawModel};
use crate::{Draw, DrawError};
use std::fmt;
use std::io::Write;
use tracing::trace;

/// A polymorphic container with value semantics.
///
/// A `DrawBox` owns exactly one payload value of some type implementing
/// [`Draw`], held behind an erased interface. Clients never name the payload
/// type after construction; they copy, move, and draw the box itself.
///
/// - **Copy** ([`Clone`]) deep-clones the payload: the result is an
///   independently owned, equal-valued box, never a shared one.
/// - **Move** is an ordinary Rust move. The moved-from binding cannot be
///   drawn or copied afterwards; the compiler rejects it, so no empty or
///   half-owned runtime state exists.
/// - There is no default or empty construction: a `DrawBox` wraps exactly
///   one value from the moment it exists.
///
/// # Examples
///
/// ```
/// use drawbox::{Draw, DrawBox, DrawError};
/// use std::io::Write;
///
/// #[derive(Clone)]
/// struct Square { side: f64 }
///
/// impl Draw for Square {
///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
///         writeln!(out, "Square: {}", self.side)?;
///         Ok(())
///     }
/// }
///
/// let shape = DrawBox::new(Square { side: 230.0 });
/// let mut out = Vec::new();
/// shape.draw(&mut out)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "Square: 230\n");
/// # Ok::<(), DrawError>(())
/// ```
pub struct DrawBox {
    model: Box<dyn DrawConcept>,
}

impl DrawBox {
    /// Wraps `value` in a new `DrawBox`, taking ownership of it.
    ///
    /// The payload type is bound here: the matching [`Draw`] impl is resolved
    /// at this call site, so a type with no impl fails to compile rather than
    /// erroring at draw time.
    ///
    /// The box owns `value` outright. Callers that want to keep using their
    /// value pass a clone.
    ///
    /// ```compile_fail
    /// use drawbox::DrawBox;
    ///
    /// #[derive(Clone)]
    /// struct NotDrawable;
    ///
    /// // No `Draw` impl for `NotDrawable`: rejected at compile time.
    /// let shape = DrawBox::new(NotDrawable);
    /// ```
    pub fn new<T>(value: T) -> Self
    where
        T: Draw + Clone + 'static,
    {
        let model: Box<dyn DrawConcept> = Box::new(DrawModel::new(value));
        trace!(payload = model.type_name(), "constructed DrawBox");
        Self { model }
    }

    /// Draws the payload to `out` by forwarding to the impl resolved for its
    /// concrete type.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Io` if writing to `out` fails.
    pub fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        self.model.draw(out)
    }

    /// Returns true if the payload is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawbox::{Draw, DrawBox, DrawError};
    /// # use std::io::Write;
    /// #[derive(Clone)]
    /// struct Triangle;
    ///
    /// impl Draw for Triangle {
    ///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
    ///         writeln!(out, "Δ")?;
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let shape = DrawBox::new(Triangle);
    /// assert!(shape.is::<Triangle>());
    /// assert!(!shape.is::<u32>());
    /// ```
    pub fn is<T: 'static>(&self) -> bool {
        self.model.as_any().is::<T>()
    }

    /// Returns a reference to the payload if it is of type `T`.
    ///
    /// Inspection is read-only; the only ways a payload changes are cloning
    /// and replacing the whole box.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.model.as_any().downcast_ref::<T>()
    }

    /// Returns the type name of the payload, as reported by
    /// [`std::any::type_name`]. Diagnostic use only; the exact contents are
    /// not stable.
    pub fn payload_type_name(&self) -> &'static str {
        self.model.type_name()
    }
}

impl Clone for DrawBox {
    /// Deep copy: asks the owned payload to duplicate itself. The clone and
    /// the original share no state.
    fn clone(&self) -> Self {
        trace!(payload = self.model.type_name(), "cloned DrawBox");
        Self {
            model: self.model.clone_box(),
        }
    }
}

impl fmt::Debug for DrawBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawBox")
            .field("payload", &self.model.type_name())
            .finish()
    }
}

/// Draws `shape` to `out`.
///
/// Free-function form of [`DrawBox::draw`], for call sites that read better
/// as `draw(&shape, ...)`.
///
/// # Errors
///
/// Returns `DrawError::Io` if writing to `out` fails.
pub fn draw(shape: &DrawBox, out: &mut dyn Write) -> Result<(), DrawError> {
    shape.draw(out)
}

/// Draws every box in `shapes` to `out`, in iteration order.
///
/// Stops at the first failing element.
///
/// # Examples
///
/// ```
/// use drawbox::{draw_all, Draw, DrawBox, DrawError};
/// use std::io::Write;
///
/// #[derive(Clone)]
/// struct Tick;
///
/// impl Draw for Tick {
///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
///         writeln!(out, "tick")?;
///         Ok(())
///     }
/// }
///
/// let shapes = vec![DrawBox::new(Tick), DrawBox::new(Tick)];
/// let mut out = Vec::new();
/// draw_all(&shapes, &mut out)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "tick\ntick\n");
/// # Ok::<(), DrawError>(())
/// ```
///
/// # Errors
///
/// Returns `DrawError::Io` if writing any element to `out` fails.
pub fn draw_all<'a, I>(shapes: I, out: &mut dyn Write) -> Result<(), DrawError>
where
    I: IntoIterator<Item = &'a DrawBox>,
{
    for shape in shapes {
        shape.draw(out)?;
    }
    Ok(())
}
