use std::io;
use thiserror::Error;

/// Errors that can occur while drawing.
///
/// Dispatch itself cannot fail at runtime: a payload type without a
/// [`Draw`](crate::Draw) impl is rejected when [`DrawBox::new`](crate::DrawBox::new)
/// is instantiated for it. What remains fallible is the draw side effect.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Writing the drawn output to the sink failed.
    #[error("failed to write draw output")]
    Io(#[from] io::Error),
}
