//! Data model for ingredient list comparison.
//!
//! Raw label text is normalized into [`IngredientSequence`]s of
//! [`IngredientToken`]s before any comparison happens. Everything in this
//! module is an immutable artifact of a single comparison run.
//!
//! Products are identified by [`ProductSide`] rather than by their display
//! names; a [`ProductLabel`] is only ever used to label output.

mod category;
mod product;
mod token;

pub use category::*;
pub use product::*;
pub use token::*;
