/*!
Member descriptors and the type-level member list.

Both registration mechanisms compile down to the same shape:
one [`Member`] impl per registered member,
on an instantiation of [`MemberAt`],
and a [`Cons`]/[`Nil`] list of those descriptors
bound to the struct through
[`Visitable::Members`](crate::Visitable::Members).

None of these types is ever constructed,
they exist purely to carry impls that the visit
entry points dispatch through.
*/

use std::marker::PhantomData;

use crate::visitor::{VisitField, VisitFieldMut};

/////////////////

/// A member descriptor:
/// the association between a member's registered name and
/// accessors to its storage within `S`.
///
/// Impls of this trait are generated by the registration macros,
/// one per registered member.
pub trait Member<S> {
    /// The type of the member.
    type Value;

    /// The name the member was registered under,
    /// the literal field name unless it was renamed at registration.
    const NAME: &'static str;

    /// Returns a reference to the member, aliasing its storage in `structure`.
    fn get(structure: &S) -> &Self::Value;

    /// Returns a mutable reference to the member, aliasing its storage in `structure`.
    fn get_mut(structure: &mut S) -> &mut Self::Value;

    /// Moves the member out of `structure`, dropping the rest of it.
    fn take(structure: S) -> Self::Value;
}

/// The descriptor of the `INDEX`th registered member of `S`.
///
/// Indices follow registration order, starting at 0,
/// skipped fields get no index.
pub struct MemberAt<S, const INDEX: usize> {
    _marker: PhantomData<fn() -> S>,
}

/////////////////

/// The empty member list.
pub struct Nil;

/// A member list node: the descriptor `M` followed by the list `Rest`.
pub struct Cons<M, Rest> {
    _marker: PhantomData<(fn() -> M, fn() -> Rest)>,
}

/// An ordered list of the registered members of `S`.
///
/// The list a struct ends up with is fixed when its registration is
/// sealed, its order is the declaration order of the members.
pub trait MemberList<S> {
    /// The amount of members in the list.
    const LEN: usize;

    /// Appends the name of every member to `names`, in list order.
    fn collect_names(names: &mut Vec<&'static str>);
}

impl<S> MemberList<S> for Nil {
    const LEN: usize = 0;

    fn collect_names(_names: &mut Vec<&'static str>) {}
}

impl<S, M, Rest> MemberList<S> for Cons<M, Rest>
where
    M: Member<S>,
    Rest: MemberList<S>,
{
    const LEN: usize = 1 + Rest::LEN;

    fn collect_names(names: &mut Vec<&'static str>) {
        names.push(M::NAME);
        Rest::collect_names(names);
    }
}

/////////////////

/// Applies a visitor to every member in the list by shared reference.
pub trait VisitMembers<S, V>: MemberList<S> {
    /// Invokes `visitor` once per member, in list order.
    fn visit_members(structure: &S, visitor: &mut V);
}

impl<S, V> VisitMembers<S, V> for Nil {
    #[inline]
    fn visit_members(_structure: &S, _visitor: &mut V) {}
}

impl<S, V, M, Rest> VisitMembers<S, V> for Cons<M, Rest>
where
    M: Member<S>,
    V: VisitField<M::Value>,
    Rest: VisitMembers<S, V>,
{
    #[inline]
    fn visit_members(structure: &S, visitor: &mut V) {
        visitor.visit_field(M::NAME, M::get(structure));
        Rest::visit_members(structure, visitor);
    }
}

/// Applies a visitor to every member in the list by mutable reference.
pub trait VisitMembersMut<S, V>: MemberList<S> {
    /// Invokes `visitor` once per member, in list order.
    fn visit_members_mut(structure: &mut S, visitor: &mut V);
}

impl<S, V> VisitMembersMut<S, V> for Nil {
    #[inline]
    fn visit_members_mut(_structure: &mut S, _visitor: &mut V) {}
}

impl<S, V, M, Rest> VisitMembersMut<S, V> for Cons<M, Rest>
where
    M: Member<S>,
    V: VisitFieldMut<M::Value>,
    Rest: VisitMembersMut<S, V>,
{
    #[inline]
    fn visit_members_mut(structure: &mut S, visitor: &mut V) {
        visitor.visit_field_mut(M::NAME, M::get_mut(structure));
        Rest::visit_members_mut(structure, visitor);
    }
}
