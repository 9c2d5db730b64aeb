use crate::{
    field_names, member_count, registration_of, visit_fields, visit_fields_mut, visit_fields_once,
    visitable_struct, External, Intrusive, Member, MemberAt, Registration, VisitField,
    VisitFieldMut, VisitFieldOnce, Visitable,
};

use crate::type_level::bools::Boolean;

///////////////////////////////////////////////////////////////////////////

// Defined with no visiting support of its own,
// registration happens after the fact.
struct Rectangle {
    width: u32,
    height: u32,
    cached_area: u64,
}

visitable_struct! {
    Rectangle {
        width: u32,
        height: u32,
    }
}

fn rectangle() -> Rectangle {
    Rectangle {
        width: 3,
        height: 4,
        cached_area: 12,
    }
}

///////////////////////////////////////////////////////////////////////////

struct CollectU32 {
    seen: Vec<(&'static str, u32)>,
}

impl VisitField<u32> for CollectU32 {
    fn visit_field(&mut self, name: &'static str, value: &u32) {
        self.seen.push((name, *value));
    }
}

impl VisitFieldMut<u32> for CollectU32 {
    fn visit_field_mut(&mut self, name: &'static str, value: &mut u32) {
        *value *= 10;
        self.seen.push((name, *value));
    }
}

impl VisitFieldOnce<u32> for CollectU32 {
    fn visit_field_once(&mut self, name: &'static str, value: u32) {
        self.seen.push((name, value));
    }
}

///////////////////////////////////////////////////////////////////////////

#[test]
fn externally_registered_members_are_visited_in_listed_order() {
    let mut collector = CollectU32 { seen: Vec::new() };
    visit_fields(&rectangle(), &mut collector);
    assert_eq!(collector.seen, vec![("width", 3), ("height", 4)]);
}

#[test]
fn unlisted_fields_are_not_registered() {
    assert_eq!(field_names::<Rectangle>(), ["width", "height"]);
    assert_eq!(member_count::<Rectangle>(), 2);
}

#[test]
fn mutating_through_an_external_registration_is_observable() {
    let mut structure = rectangle();
    let mut collector = CollectU32 { seen: Vec::new() };
    visit_fields_mut(&mut structure, &mut collector);

    assert_eq!(structure.width, 30);
    assert_eq!(structure.height, 40);
    // The unregistered field is untouched.
    assert_eq!(structure.cached_area, 12);
}

#[test]
fn by_value_visits_work_through_an_external_registration() {
    let mut collector = CollectU32 { seen: Vec::new() };
    visit_fields_once(rectangle(), &mut collector);
    assert_eq!(collector.seen, vec![("width", 3), ("height", 4)]);
}

#[test]
fn external_member_accessors_alias_the_field_storage() {
    let mut structure = rectangle();

    type First = MemberAt<Rectangle, 0>;
    assert_eq!(<First as Member<Rectangle>>::NAME, "width");

    *<First as Member<Rectangle>>::get_mut(&mut structure) = 11;
    assert_eq!(structure.width, 11);
    assert_eq!(*<First as Member<Rectangle>>::get(&structure), 11);
}

///////////////////////////////////////////////////////////////////////////

struct NoRegisteredMembers {
    _only_field: u8,
}

visitable_struct! {
    NoRegisteredMembers {}
}

#[test]
fn registering_zero_members_is_well_formed() {
    assert_eq!(member_count::<NoRegisteredMembers>(), 0);
    assert_eq!(field_names::<NoRegisteredMembers>(), Vec::<&str>::new());

    let mut collector = CollectU32 { seen: Vec::new() };
    visit_fields(&NoRegisteredMembers { _only_field: 0 }, &mut collector);
    assert!(collector.seen.is_empty());
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct Derived {
    value: u32,
}

fn assert_external<S: Visitable<Registration = External>>() {}
fn assert_intrusive<S: Visitable<Registration = Intrusive>>() {}

#[test]
fn each_mechanism_identifies_only_its_own_structs() {
    assert_eq!(registration_of::<Rectangle>(), Registration::External);
    assert_eq!(registration_of::<Derived>(), Registration::Intrusive);
    assert_ne!(
        registration_of::<Rectangle>(),
        registration_of::<Derived>()
    );

    // The same distinction, made at compile-time through the markers.
    assert_external::<Rectangle>();
    assert_external::<NoRegisteredMembers>();
    assert_intrusive::<Derived>();
}

#[test]
fn the_intrusive_marker_is_a_type_level_bool() {
    fn is_intrusive<S: Visitable>() -> bool {
        <<S::Registration as crate::RegistrationKind>::IsIntrusive as Boolean>::VALUE
    }

    assert!(is_intrusive::<Derived>());
    assert!(!is_intrusive::<Rectangle>());
}
