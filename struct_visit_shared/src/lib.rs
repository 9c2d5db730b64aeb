/*!
Values shared between the `struct_visit` and `struct_visit_derive` crates.

This crate is an implementation detail of `struct_visit`,
the only guarantee it makes is that both sides of the macro boundary
agree on the constants defined here.
*/

pub mod limits;

pub use crate::limits::MAX_VISITABLE_MEMBERS;
