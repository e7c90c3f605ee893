//! Container kinds: [`Tuple`] and [`Optional`].
//!
//! Both hold boxed [`crate::Value`]s and take part in the same equality and ordering
//! protocol as the scalar kinds, recursing into their items. They share storage on
//! clone, which is what separates [`crate::protocol::id`] from [`crate::protocol::eq`]
//! for them.

mod optional;
mod tuple;

pub use optional::Optional;
pub use tuple::Tuple;
