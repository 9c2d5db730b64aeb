/*!
The documentation for the `#[derive(Visitable)]` macro.

This macro registers the members of the struct it is used on,
making them visitable generically through the
[`visit_fields`](crate::visit_fields)/
[`visit_fields_mut`](crate::visit_fields_mut)/
[`visit_fields_once`](crate::visit_fields_once)
entry points.

Registration happens inline,
as part of the struct definition itself:
every field is appended to the struct's member registry in
declaration order,
and the registry is sealed when the definition ends.
The sealed registry becomes the
[`Visitable::Members`](crate::Visitable::Members)
associated type,
with [`Visitable::Registration`](crate::Visitable::Registration)
set to [`Intrusive`](crate::registration::Intrusive).

# Field attributes

### `#[visit(skip)]`

Declares the field without registering it:
the field exists on the struct as usual,
but no visitor is ever applied to it and
it does not appear in
[`FIELD_NAMES`](crate::Visitable::FIELD_NAMES).

### `#[visit(rename = "name")]`

Registers the member under `name` instead of the literal field name.

# Limits

At most
[`MAX_VISITABLE_MEMBERS`](crate::MAX_VISITABLE_MEMBERS)
members can be registered for a single struct,
exceeding the ceiling is a compile-time error.
The `high_member_limit` feature raises the ceiling from 200 to 1000.

# Container support

Only structs can derive `Visitable`:
braced structs,tuple structs
(whose members are registered under their positional names,`"0"`,`"1"`,...),
and unit structs
(which end up with an empty member registry,
visiting them is allowed and does nothing).
Enums and unions are rejected with a compile-time error.

# Example

```
use struct_visit::{visit_fields_mut, VisitFieldMut, Visitable};

#[derive(Visitable)]
struct Sprite {
    x: f32,
    y: f32,
    #[visit(skip)]
    dirty: bool,
}

/// Moves every coordinate to the origin.
struct Reset;

impl VisitFieldMut<f32> for Reset {
    fn visit_field_mut(&mut self, _name: &'static str, value: &mut f32) {
        *value = 0.0;
    }
}

let mut sprite = Sprite { x: 3.0, y: 4.0, dirty: false };
visit_fields_mut(&mut sprite, &mut Reset);
assert_eq!(sprite.x, 0.0);
assert_eq!(sprite.y, 0.0);
```
*/
