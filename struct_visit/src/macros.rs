/**
Registers the members of an already-defined struct,
the non-intrusive counterpart of `#[derive(Visitable)]`.

The struct ends up with the same visiting surface as a derived one,
except that its
[`Visitable::Registration`](crate::Visitable::Registration)
is [`External`](crate::registration::External)
instead of [`Intrusive`](crate::registration::Intrusive).

Members are registered in the order they are listed,
which does not have to cover every field of the struct,
unlisted fields are simply not registered.

# Example

```
use struct_visit::{visit_fields, visitable_struct, VisitField};

// Defined without any visiting support,
// possibly in another crate.
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

struct Collect(Vec<&'static str>);

impl VisitField<u32> for Collect {
    fn visit_field(&mut self, name: &'static str, _value: &u32) {
        self.0.push(name);
    }
}

let rectangle = Rectangle { width: 3, height: 4, cached_area: 12 };
let mut collect = Collect(Vec::new());
visit_fields(&rectangle, &mut collect);
assert_eq!(collect.0, ["width", "height"]);
// The unregistered field is still a normal field.
assert_eq!(rectangle.cached_area, 12);
```
*/
#[macro_export]
macro_rules! visitable_struct {
    ( $struct_:ident {} ) => {
        impl $crate::Visitable for $struct_ {
            type Registration = $crate::registration::External;
            type Members = $crate::members::Nil;
            const FIELD_NAMES: &'static [&'static str] = &[];
        }

        impl<__V> $crate::VisitFieldsOnce<__V> for $struct_ {
            fn visit_fields_once(self, _visitor: &mut __V) {}
        }
    };
    (
        $struct_:ident { $( $field:ident : $fty:ty ),+ $(,)? }
    ) => {
        $crate::__visitable_struct_members!{ $struct_; 0; $( $field : $fty, )+ }

        impl $crate::Visitable for $struct_ {
            type Registration = $crate::registration::External;
            type Members = $crate::__member_list_ty!( $struct_; 0; $( $field, )+ );
            const FIELD_NAMES: &'static [&'static str] = &[ $( stringify!($field) ),+ ];
        }

        const _: () = assert!(
            <$struct_ as $crate::Visitable>::MEMBER_COUNT
                <= $crate::MAX_VISITABLE_MEMBERS,
            "cannot register more members than MAX_VISITABLE_MEMBERS, \
             enable the `high_member_limit` feature of struct_visit to raise the ceiling",
        );

        impl<__V> $crate::VisitFieldsOnce<__V> for $struct_
        where
            __V: $( $crate::visitor::VisitFieldOnce<$fty> + )+ Sized,
        {
            fn visit_fields_once(self, visitor: &mut __V) {
                let $struct_ { $( $field, )+ .. } = self;
                $( visitor.visit_field_once(stringify!($field), $field); )+
            }
        }
    };
}

/// Generates one `Member` impl per listed field,
/// assigning indices in list order.
#[doc(hidden)]
#[macro_export]
macro_rules! __visitable_struct_members {
    ( $struct_:ident; $index:expr; ) => {};
    (
        $struct_:ident; $index:expr;
        $field:ident : $fty:ty, $( $rest_field:ident : $rest_ty:ty, )*
    ) => {
        impl $crate::members::Member<$struct_>
            for $crate::members::MemberAt<$struct_, { $index }>
        {
            type Value = $fty;

            const NAME: &'static str = stringify!($field);

            #[inline(always)]
            fn get(structure: &$struct_) -> &$fty {
                &structure.$field
            }

            #[inline(always)]
            fn get_mut(structure: &mut $struct_) -> &mut $fty {
                &mut structure.$field
            }

            #[inline(always)]
            fn take(structure: $struct_) -> $fty {
                structure.$field
            }
        }

        $crate::__visitable_struct_members!{
            $struct_; $index + 1; $( $rest_field : $rest_ty, )*
        }
    };
}

/// Builds the `Cons`/`Nil` member list type for the listed fields,
/// in list order.
#[doc(hidden)]
#[macro_export]
macro_rules! __member_list_ty {
    ( $struct_:ident; $index:expr; ) => { $crate::members::Nil };
    (
        $struct_:ident; $index:expr;
        $field:ident, $( $rest_field:ident, )*
    ) => {
        $crate::members::Cons<
            $crate::members::MemberAt<$struct_, { $index }>,
            $crate::__member_list_ty!( $struct_; $index + 1; $( $rest_field, )* ),
        >
    };
}
