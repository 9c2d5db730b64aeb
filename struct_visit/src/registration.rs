/*!
Marker types identifying how a struct's members were registered.

The markers are the polymorphism seam between registration mechanisms:
a struct's [`Visitable::Registration`](crate::Visitable::Registration)
associated type names the mechanism that produced its member list,
and calling code that cares about the mechanism constrains that
associated type, with no runtime branching involved.
*/

use core_extensions::type_level_bool::{Boolean, False, True};

/// How a struct's members were registered,
/// the runtime-inspectable counterpart of the marker types.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Registered inline, on the struct definition itself.
    Intrusive,
    /// Registered after the fact, with the
    /// [`visitable_struct`](crate::visitable_struct) macro.
    External,
}

mod sealed {
    pub trait Sealed {}
}
use self::sealed::Sealed;

/// A marker type identifying one registration mechanism.
///
/// This trait is sealed, the only implementors are
/// [`Intrusive`] and [`External`].
pub trait RegistrationKind: Sealed + 'static {
    /// The mechanism this marker identifies.
    const KIND: Registration;

    /// Whether the mechanism declares members inline in the struct body.
    type IsIntrusive: Boolean;
}

/////////////////

/// Marker type for members declared and registered inline,
/// with `#[derive(Visitable)]` on the struct definition.
pub struct Intrusive;

impl Sealed for Intrusive {}

impl RegistrationKind for Intrusive {
    const KIND: Registration = Registration::Intrusive;

    type IsIntrusive = True;
}

/////////////////

/// Marker type for members registered outside the struct definition,
/// with the [`visitable_struct`](crate::visitable_struct) macro.
pub struct External;

impl Sealed for External {}

impl RegistrationKind for External {
    const KIND: Registration = Registration::External;

    type IsIntrusive = False;
}
