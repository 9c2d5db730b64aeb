/*!
The `Visitable` trait and the generic visit entry points.
*/

use crate::{
    members::{MemberList, VisitMembers, VisitMembersMut},
    registration::{Registration, RegistrationKind},
};

/// A struct whose members were registered for visiting,
/// through either registration mechanism.
///
/// Impls of this trait are generated by
/// `#[derive(Visitable)]` and by the
/// [`visitable_struct`](crate::visitable_struct) macro,
/// they are not written by hand.
pub trait Visitable: Sized {
    /// The marker of the registration mechanism that produced
    /// [`Members`](Self::Members).
    type Registration: RegistrationKind;

    /// The sealed, ordered list of this struct's member descriptors.
    type Members: MemberList<Self>;

    /// The registered member names, in registration order.
    const FIELD_NAMES: &'static [&'static str];

    /// The amount of registered members.
    const MEMBER_COUNT: usize = Self::FIELD_NAMES.len();
}

/// Visits a struct's members by value, consuming the struct.
///
/// This is a separate trait rather than an operation on
/// [`Visitable::Members`] because each member can only be moved out of
/// the struct once, which a walk over the member list cannot express.
/// Impls are generated alongside the `Visitable` impl.
pub trait VisitFieldsOnce<V>: Visitable {
    /// Invokes `visitor` once per registered member, in registration
    /// order, moving each member out of `self`.
    fn visit_fields_once(self, visitor: &mut V);
}

/////////////////

/// Invokes `visitor` with `(name, &value)` once per registered member
/// of `structure`, in registration order.
///
/// Visiting a struct with no registered members invokes the visitor
/// zero times.
///
/// # Example
///
/// ```
/// use struct_visit::{visit_fields, VisitField, Visitable};
///
/// #[derive(Visitable)]
/// struct Point {
///     x: u32,
///     y: u32,
/// }
///
/// struct Sum(u32);
///
/// impl VisitField<u32> for Sum {
///     fn visit_field(&mut self, _name: &'static str, value: &u32) {
///         self.0 += *value;
///     }
/// }
///
/// let mut sum = Sum(0);
/// visit_fields(&Point { x: 3, y: 4 }, &mut sum);
/// assert_eq!(sum.0, 7);
/// ```
pub fn visit_fields<S, V>(structure: &S, visitor: &mut V)
where
    S: Visitable,
    S::Members: VisitMembers<S, V>,
{
    <S::Members as VisitMembers<S, V>>::visit_members(structure, visitor);
}

/// Invokes `visitor` with `(name, &mut value)` once per registered member
/// of `structure`, in registration order.
///
/// Mutations through the references are visible on `structure`
/// as soon as each visit returns.
pub fn visit_fields_mut<S, V>(structure: &mut S, visitor: &mut V)
where
    S: Visitable,
    S::Members: VisitMembersMut<S, V>,
{
    <S::Members as VisitMembersMut<S, V>>::visit_members_mut(structure, visitor);
}

/// Invokes `visitor` with `(name, value)` once per registered member,
/// in registration order, consuming `structure`.
pub fn visit_fields_once<S, V>(structure: S, visitor: &mut V)
where
    S: VisitFieldsOnce<V>,
{
    structure.visit_fields_once(visitor);
}

/// The registered member names of `S`, in registration order.
pub fn field_names<S: Visitable>() -> &'static [&'static str] {
    S::FIELD_NAMES
}

/// The amount of registered members of `S`.
pub fn member_count<S: Visitable>() -> usize {
    S::MEMBER_COUNT
}

/// The registration mechanism that `S` was registered through.
pub fn registration_of<S: Visitable>() -> Registration {
    <S::Registration as RegistrationKind>::KIND
}
