//! Reexports for the code generated by the `Visitable` derive macro.
//!
//! Everything here is semver-exempt, generated code is the only
//! intended user.

pub use crate::{
    members::{Cons, Member, MemberAt, Nil},
    registration::Intrusive,
    visitable::{VisitFieldsOnce, Visitable},
    visitor::VisitFieldOnce,
};
