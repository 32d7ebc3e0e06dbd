use crate::DrawError;
use std::io::Write;

/// The capability a payload type must provide to be stored in a
/// [`DrawBox`](crate::DrawBox).
///
/// This trait is the dispatch convention of the crate: one impl per payload
/// type, resolved statically when a `DrawBox` is constructed from a value of
/// that type. It plays the role a free-function overload set plays in
/// languages with argument-dependent lookup; payload types stay plain data
/// with no shared base type.
///
/// Adding support for a new payload type means writing exactly one impl —
/// neither the container nor its internals are ever edited. A type without an
/// impl fails to compile at the `DrawBox::new` call site, never at draw time.
///
/// # Contract
///
/// `draw` receives the payload read-only and emits a human-readable textual
/// representation to `out`. The mechanism consumes no return value beyond
/// the error channel; implementations should not retain the sink.
///
/// # Examples
///
/// ```
/// use drawbox::{Draw, DrawError};
/// use std::io::Write;
///
/// #[derive(Clone)]
/// struct Triangle;
///
/// impl Draw for Triangle {
///     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
///         writeln!(out, "Δ")?;
///         Ok(())
///     }
/// }
/// ```
pub trait Draw {
    /// Emit a textual representation of `self` to `out`.
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError>;
}
