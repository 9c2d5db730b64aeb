/*!

This crate is for enumerating the members of a struct generically,
visiting every `(name, value)` pair with a caller-supplied visitor,
with the member list built at compile-time and no runtime cost beyond
the visitor itself.

Currently this library has these features:

- The `Visitable` derive macro,
    registering a struct's members inline as part of its definition,
    in declaration order.

- The [`visitable_struct`] macro,
    registering the members of an already-defined struct
    without touching its definition.

- The [`visit_fields`]/[`visit_fields_mut`]/[`visit_fields_once`]
    entry points,
    applying a visitor uniformly to any registered struct
    regardless of which mechanism registered it.

- The [`Member`] trait,
    exposing each member's registered name and accessors that alias
    the member's storage, usable on their own.

- The [`RegistrationKind`] markers,
    identifying at compile-time which mechanism registered a struct,
    for calling code that only accepts one of them.

# Visiting a struct

```
use struct_visit::{visit_fields, VisitField, Visitable};

#[derive(Visitable)]
struct Config {
    threads: usize,
    name: String,
}

/// Prints every member like `name = value`.
struct Print;

impl<T: std::fmt::Debug> VisitField<T> for Print {
    fn visit_field(&mut self, name: &'static str, value: &T) {
        println!("{} = {:?}", name, value);
    }
}

let config = Config { threads: 4, name: "worker".to_string() };
visit_fields(&config, &mut Print);
```

# Mutating through a visit

The references passed to a mutable visit alias the struct's own
storage, mutations are immediately visible on the instance:

```
use struct_visit::{visit_fields_mut, VisitFieldMut, Visitable};

#[derive(Visitable)]
struct Counters {
    hits: u64,
    misses: u64,
}

struct Clear;

impl VisitFieldMut<u64> for Clear {
    fn visit_field_mut(&mut self, _name: &'static str, value: &mut u64) {
        *value = 0;
    }
}

let mut counters = Counters { hits: 11, misses: 3 };
visit_fields_mut(&mut counters, &mut Clear);
assert_eq!(counters.hits, 0);
assert_eq!(counters.misses, 0);
```

# Cargo features

- `high_member_limit`:
    raises the per-struct member ceiling from 200 to 1000.

*/

#![warn(rust_2018_idioms)]

// Allows the code generated by the derive macro to name this crate by
// its external name even when it expands within this crate.
#[allow(unused_extern_crates)]
extern crate self as struct_visit;

pub use struct_visit_derive::Visitable;

mod macros;

pub mod members;
pub mod registration;
pub mod type_level;
pub mod visitable;
pub mod visitor;

pub mod docs;

#[doc(hidden)]
pub mod derive_macro_reexports;

#[cfg(test)]
mod visit_tests;

pub use struct_visit_shared::MAX_VISITABLE_MEMBERS;

pub use crate::{
    members::{Cons, Member, MemberAt, MemberList, Nil, VisitMembers, VisitMembersMut},
    registration::{External, Intrusive, Registration, RegistrationKind},
    visitable::{
        field_names, member_count, registration_of, visit_fields, visit_fields_mut,
        visit_fields_once, VisitFieldsOnce, Visitable,
    },
    visitor::{VisitField, VisitFieldMut, VisitFieldOnce},
};
