//! # drawbox
//!
//! A value-semantic polymorphic container for drawable types.
//!
//! `drawbox` lets unrelated, non-polymorphic data types be stored uniformly
//! and dispatched to type-specific drawing behavior. The payload types share
//! no base type and never see the container; they only implement the [`Draw`]
//! capability trait. Clients hold [`DrawBox`] values and get full value
//! semantics: copying a box deep-clones its payload, and a moved-from box is
//! rejected by the compiler rather than lingering in an empty runtime state.
//!
//! ## Key Features
//!
//! - **No shared hierarchy**: payload types are plain data; `impl Draw` is
//!   the only requirement
//! - **Value semantics**: `Clone` produces an independently owned,
//!   equal-valued payload, never a shared one
//! - **Static dispatch resolution**: a payload type without a `Draw` impl
//!   fails at compile time, not at draw time
//! - **Open extension**: supporting a new payload type means writing one
//!   trait impl; the container itself is never edited
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use drawbox::{Draw, DrawBox, DrawError};
//! use std::io::Write;
//!
//! #[derive(Clone)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl Draw for Circle {
//!     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
//!         writeln!(out, "Circle: {}", self.radius)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), DrawError> {
//!     let shape = DrawBox::new(Circle { radius: 230.0 });
//!
//!     let mut out = Vec::new();
//!     shape.draw(&mut out)?;
//!     assert_eq!(String::from_utf8(out).unwrap(), "Circle: 230\n");
//!     Ok(())
//! }
//! ```
//!
//! ### Copying Is Deep
//!
//! A cloned box owns its own payload. Dropping or replacing the original
//! never affects the copy:
//!
//! ```rust
//! use drawbox::{Draw, DrawBox, DrawError};
//! use std::io::Write;
//!
//! #[derive(Clone)]
//! struct Label(String);
//!
//! impl Draw for Label {
//!     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
//!         writeln!(out, "{}", self.0)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), DrawError> {
//!     let mut a = DrawBox::new(Label("first".to_string()));
//!     let b = a.clone();
//!
//!     // Reassigning `a` replaces what it draws as; `b` is untouched.
//!     a = DrawBox::new(Label("second".to_string()));
//!
//!     let mut out = Vec::new();
//!     a.draw(&mut out)?;
//!     b.draw(&mut out)?;
//!     assert_eq!(String::from_utf8(out).unwrap(), "second\nfirst\n");
//!     Ok(())
//! }
//! ```
//!
//! ### Heterogeneous Collections
//!
//! [`DrawList`] keeps boxes in insertion order and draws them all:
//!
//! ```rust
//! use drawbox::{Draw, DrawBox, DrawError, DrawList};
//! use std::io::Write;
//!
//! #[derive(Clone)]
//! struct Circle { radius: f64 }
//! #[derive(Clone)]
//! struct Square { side: f64 }
//!
//! impl Draw for Circle {
//!     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
//!         writeln!(out, "Circle: {}", self.radius)?;
//!         Ok(())
//!     }
//! }
//!
//! impl Draw for Square {
//!     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
//!         writeln!(out, "Square: {}", self.side)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), DrawError> {
//!     let mut shapes = DrawList::new();
//!     shapes.push_value(Circle { radius: 2.0 });
//!     shapes.push_value(Square { side: 2.0 });
//!
//!     let mut out = Vec::new();
//!     shapes.draw_all(&mut out)?;
//!     assert_eq!(String::from_utf8(out).unwrap(), "Circle: 2\nSquare: 2\n");
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting the Payload
//!
//! The concrete payload stays reachable for read-only inspection:
//!
//! ```rust
//! use drawbox::{Draw, DrawBox, DrawError};
//! use std::io::Write;
//!
//! #[derive(Clone)]
//! struct Square { side: f64 }
//!
//! impl Draw for Square {
//!     fn draw(&self, out: &mut dyn Write) -> Result<(), DrawError> {
//!         writeln!(out, "Square: {}", self.side)?;
//!         Ok(())
//!     }
//! }
//!
//! let shape = DrawBox::new(Square { side: 3.0 });
//! assert!(shape.is::<Square>());
//! assert_eq!(shape.downcast_ref::<Square>().unwrap().side, 3.0);
//! assert!(shape.downcast_ref::<f64>().is_none());
//! ```

mod container;
mod draw;
mod error;
mod list;
mod model;

pub use container::{draw, draw_all, DrawBox};
pub use draw::Draw;
pub use error::DrawError;
pub use list::DrawList;
