//! The dispatcher only reads compile-time data and forwards to the
//! visitor, so visiting independent instances from multiple threads
//! needs no synchronization.

use crate::{visit_fields, VisitField, Visitable};

use crossbeam_utils::thread;

#[derive(Visitable)]
struct Point {
    x: u64,
    y: u64,
}

struct Sum(u64);

impl VisitField<u64> for Sum {
    fn visit_field(&mut self, _name: &'static str, value: &u64) {
        self.0 += *value;
    }
}

#[test]
fn concurrent_visits_of_independent_instances() {
    thread::scope(|scope| {
        for i in 0..8_u64 {
            scope.spawn(move |_| {
                let point = Point { x: i, y: 2 * i };
                let mut sum = Sum(0);
                visit_fields(&point, &mut sum);
                assert_eq!(sum.0, 3 * i);
            });
        }
    })
    .unwrap();
}

#[test]
fn concurrent_visits_of_a_shared_instance() {
    let point = Point { x: 5, y: 7 };
    let point = &point;

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move |_| {
                let mut sum = Sum(0);
                visit_fields(point, &mut sum);
                assert_eq!(sum.0, 12);
            });
        }
    })
    .unwrap();
}
