use crate::{Draw, DrawError};
use std::any::Any;
use std::io::Write;

/// The abstract capability a [`DrawBox`](crate::DrawBox) owns its payload
/// through: draw, clone, and read-only inspection. Knows nothing about any
/// concrete payload type.
pub(crate) trait DrawConcept {
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError>;

    /// Produce a new, independently owned instance with an equal payload.
    /// Never shares state with `self`.
    fn clone_box(&self) -> Box<dyn DrawConcept>;

    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;
}

/// Binds [`DrawConcept`] to exactly one payload type `T`, chosen when a
/// `DrawBox` is constructed from a `T`-typed value.
///
/// The stored `T` is owned by value; it never aliases the value the caller
/// supplied, so the box stays valid after the caller's copy is gone.
pub(crate) struct DrawModel<T> {
    pub(crate) value: T,
}

impl<T> DrawModel<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> DrawConcept for DrawModel<T>
where
    T: Draw + Clone + 'static,
{
    fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
        // No drawing logic of its own: forward to the impl resolved for T.
        self.value.draw(out)
    }

    fn clone_box(&self) -> Box<dyn DrawConcept> {
        Box::new(DrawModel::new(self.value.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Dot(u32);

    impl Draw for Dot {
        fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
            write!(out, "Dot({})", self.0)?;
            Ok(())
        }
    }

    #[test]
    fn clone_box_duplicates_the_payload() {
        let model = DrawModel::new(Dot(7));
        let cloned = model.clone_box();

        let dot = cloned.as_any().downcast_ref::<Dot>().unwrap();
        assert_eq!(*dot, Dot(7));
        // Distinct allocations, equal values.
        assert!(!std::ptr::eq(dot, &model.value));
    }

    #[test]
    fn draw_forwards_to_the_payload_impl() {
        let model = DrawModel::new(Dot(3));
        let mut out = Vec::new();
        model.draw(&mut out).unwrap();
        assert_eq!(out, b"Dot(3)");
    }

    #[test]
    fn type_name_reports_the_concrete_payload() {
        let model = DrawModel::new(Dot(0));
        assert!(model.type_name().ends_with("Dot"));
    }
}
