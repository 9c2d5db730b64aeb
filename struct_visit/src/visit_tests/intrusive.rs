use crate::{
    field_names, member_count, registration_of, visit_fields, visit_fields_mut, visit_fields_once,
    Intrusive, Member, MemberAt, MemberList, Registration, VisitField, VisitFieldMut,
    VisitFieldOnce, Visitable,
};

use std::fmt::Debug;

///////////////////////////////////////////////////////////////////////////

/// Collects the debug representation of every visited member.
#[derive(Default)]
struct DebugCollector {
    seen: Vec<(&'static str, String)>,
}

impl<T: Debug> VisitField<T> for DebugCollector {
    fn visit_field(&mut self, name: &'static str, value: &T) {
        self.seen.push((name, format!("{:?}", value)));
    }
}

fn collect<S>(structure: &S) -> Vec<(&'static str, String)>
where
    S: Visitable,
    S::Members: crate::VisitMembers<S, DebugCollector>,
{
    let mut collector = DebugCollector::default();
    visit_fields(structure, &mut collector);
    collector.seen
}

fn names_via_member_list<S: Visitable>() -> Vec<&'static str> {
    let mut names = Vec::new();
    <S::Members as MemberList<S>>::collect_names(&mut names);
    names
}

fn assert_intrusive<S: Visitable<Registration = Intrusive>>() {}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct Example {
    a: i32,
    b: f32,
    c: String,
}

fn example() -> Example {
    Example {
        a: 1,
        b: 2.5,
        c: "three".to_string(),
    }
}

#[test]
fn visits_every_member_in_declaration_order() {
    let seen = collect(&example());
    assert_eq!(
        seen,
        vec![
            ("a", "1".to_string()),
            ("b", "2.5".to_string()),
            ("c", "\"three\"".to_string()),
        ]
    );
}

#[test]
fn names_and_count_match_the_declaration() {
    assert_eq!(field_names::<Example>(), ["a", "b", "c"]);
    assert_eq!(member_count::<Example>(), 3);
    assert_eq!(<Example as Visitable>::MEMBER_COUNT, 3);
    assert_eq!(<<Example as Visitable>::Members as MemberList<Example>>::LEN, 3);
    assert_eq!(names_via_member_list::<Example>(), ["a", "b", "c"]);
}

#[test]
fn derived_structs_are_intrusively_registered() {
    assert_eq!(registration_of::<Example>(), Registration::Intrusive);
    assert_intrusive::<Example>();
}

///////////////////////////////////////////////////////////////////////////

/// Sets the member named "a" to 42, leaving every other member alone.
struct SetA42;

impl VisitFieldMut<i32> for SetA42 {
    fn visit_field_mut(&mut self, name: &'static str, value: &mut i32) {
        if name == "a" {
            *value = 42;
        }
    }
}

impl VisitFieldMut<f32> for SetA42 {
    fn visit_field_mut(&mut self, _name: &'static str, _value: &mut f32) {}
}

impl VisitFieldMut<String> for SetA42 {
    fn visit_field_mut(&mut self, _name: &'static str, _value: &mut String) {}
}

#[test]
fn mutating_through_a_visit_is_observable_immediately() {
    let mut structure = example();
    visit_fields_mut(&mut structure, &mut SetA42);
    assert_eq!(structure.a, 42);
    assert_eq!(structure.b, 2.5);
    assert_eq!(structure.c, "three");
}

#[test]
fn member_accessors_alias_the_field_storage() {
    let mut structure = example();

    type First = MemberAt<Example, 0>;
    assert_eq!(<First as Member<Example>>::NAME, "a");
    assert_eq!(*<First as Member<Example>>::get(&structure), 1);

    *<First as Member<Example>>::get_mut(&mut structure) = 7;
    assert_eq!(structure.a, 7);

    type Third = MemberAt<Example, 2>;
    assert_eq!(<Third as Member<Example>>::NAME, "c");
    assert_eq!(<Third as Member<Example>>::take(structure), "three");
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct EmptyBraced {}

#[derive(Visitable)]
struct EmptyUnit;

#[test]
fn zero_member_structs_are_visited_zero_times() {
    assert_eq!(collect(&EmptyBraced {}), vec![]);
    assert_eq!(collect(&EmptyUnit), vec![]);

    assert_eq!(member_count::<EmptyBraced>(), 0);
    assert_eq!(member_count::<EmptyUnit>(), 0);
    assert_eq!(field_names::<EmptyUnit>(), <&[&str]>::default());
    assert_eq!(names_via_member_list::<EmptyUnit>(), Vec::<&str>::new());
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct WithSkip {
    first: u8,
    #[visit(skip)]
    cached: u64,
    second: u8,
}

#[test]
fn skipped_fields_are_declared_but_not_registered() {
    let structure = WithSkip {
        first: 1,
        cached: 999,
        second: 2,
    };

    assert_eq!(field_names::<WithSkip>(), ["first", "second"]);
    assert_eq!(member_count::<WithSkip>(), 2);

    let seen = collect(&structure);
    assert_eq!(
        seen,
        vec![("first", "1".to_string()), ("second", "2".to_string())]
    );

    // The skipped field is still a normal field of the struct.
    assert_eq!(structure.cached, 999);
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct Renamed {
    #[visit(rename = "alpha")]
    a: u8,
    b: u8,
}

#[test]
fn renamed_members_are_registered_under_the_override() {
    assert_eq!(field_names::<Renamed>(), ["alpha", "b"]);
    let seen = collect(&Renamed { a: 1, b: 2 });
    assert_eq!(seen[0].0, "alpha");
    assert_eq!(seen[1].0, "b");
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct Pair(u8, String);

#[test]
fn tuple_members_are_registered_under_positional_names() {
    assert_eq!(field_names::<Pair>(), ["0", "1"]);
    let seen = collect(&Pair(9, "nine".to_string()));
    assert_eq!(
        seen,
        vec![
            ("0", "9".to_string()),
            ("1", "\"nine\"".to_string()),
        ]
    );
}

///////////////////////////////////////////////////////////////////////////

#[derive(Visitable)]
struct Wrapper<T> {
    inner: T,
    tag: u8,
}

#[test]
fn generic_structs_are_visitable() {
    let seen = collect(&Wrapper {
        inner: 5_i32,
        tag: 1,
    });
    assert_eq!(
        seen,
        vec![("inner", "5".to_string()), ("tag", "1".to_string())]
    );
}

///////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct TakeStrings {
    taken: Vec<(&'static str, String)>,
}

impl VisitFieldOnce<String> for TakeStrings {
    fn visit_field_once(&mut self, name: &'static str, value: String) {
        self.taken.push((name, value));
    }
}

#[derive(Visitable)]
struct TwoStrings {
    first: String,
    second: String,
}

#[test]
fn by_value_visits_move_each_member_out_in_order() {
    let structure = TwoStrings {
        first: "one".to_string(),
        second: "two".to_string(),
    };

    let mut visitor = TakeStrings::default();
    visit_fields_once(structure, &mut visitor);
    assert_eq!(
        visitor.taken,
        vec![
            ("first", "one".to_string()),
            ("second", "two".to_string()),
        ]
    );
}
