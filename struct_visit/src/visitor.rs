/*!
The visitor traits, one for each way a member can be passed.

A visitor implements the trait once per member type it can be applied to,
or once with a blanket impl when the behavior is uniform:

```
use struct_visit::VisitField;

/// Collects the debug representation of every member.
#[derive(Default)]
struct DebugCollector {
    seen: Vec<(&'static str, String)>,
}

impl<T: std::fmt::Debug> VisitField<T> for DebugCollector {
    fn visit_field(&mut self, name: &'static str, value: &T) {
        self.seen.push((name, format!("{:?}", value)));
    }
}
```
*/

/// A visitor applied to `(name, &value)` pairs.
pub trait VisitField<T> {
    /// Called once per registered member, in registration order.
    ///
    /// `value` aliases the member's storage in the visited structure.
    fn visit_field(&mut self, name: &'static str, value: &T);
}

/// A visitor applied to `(name, &mut value)` pairs.
///
/// Mutations through `value` are visible on the visited structure
/// as soon as this method returns.
pub trait VisitFieldMut<T> {
    /// Called once per registered member, in registration order.
    fn visit_field_mut(&mut self, name: &'static str, value: &mut T);
}

/// A visitor applied to `(name, value)` pairs, taking each member by value.
pub trait VisitFieldOnce<T> {
    /// Called once per registered member, in registration order,
    /// with the member moved out of the visited structure.
    fn visit_field_once(&mut self, name: &'static str, value: T);
}
