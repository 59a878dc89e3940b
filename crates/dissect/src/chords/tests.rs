use super::*;
use proptest::prelude::*;

#[test]
fn chord_normalizes_and_displays() {
    let c = Chord::new(4, 1);
    assert_eq!((c.lo(), c.hi()), (1, 4));
    assert_eq!(c.to_string(), "(1, 4)");
    assert_eq!(c.arcs(), [(1, 4), (4, 1)]);
    assert_eq!(c.other(4), Some(1));
    assert_eq!(c.other(2), None);
}

#[test]
fn square_rejects_boundary_edge() {
    let mut set = ChordSet::new(4);
    let err = set.insert(0, 1).unwrap_err();
    assert_eq!(err, ChordError::BoundaryEdge { a: 0, b: 1 });
    assert!(err.to_string().contains("chord must not be polygon edge"));
    // Wrap-around edge (3, 0) is a boundary edge too.
    assert!(matches!(
        set.insert(3, 0),
        Err(ChordError::BoundaryEdge { .. })
    ));
    assert!(set.is_empty());
}

#[test]
fn rejects_degenerate_and_out_of_range() {
    let mut set = ChordSet::new(6);
    assert_eq!(set.insert(2, 2), Err(ChordError::Degenerate(2)));
    assert_eq!(
        set.insert(0, 6),
        Err(ChordError::OutOfRange { index: 6, n: 6 })
    );
}

#[test]
fn rejects_duplicate_in_either_direction() {
    let mut set = ChordSet::new(6);
    set.insert(0, 3).unwrap();
    assert_eq!(set.insert(3, 0), Err(ChordError::Duplicate(Chord::new(0, 3))));
    assert_eq!(set.len(), 1);
}

#[test]
fn hexagon_crossing_names_existing_chord() {
    let mut set = ChordSet::new(6);
    set.insert(0, 2).unwrap();
    set.insert(0, 4).unwrap();
    let err = set.insert(1, 4).unwrap_err();
    assert_eq!(
        err,
        ChordError::Crossing {
            chord: Chord::new(1, 4),
            existing: Chord::new(0, 2),
        }
    );
    assert!(err.to_string().contains("(0, 2)"));
    assert_eq!(set.len(), 2);
}

#[test]
fn shared_endpoint_is_not_a_crossing() {
    let mut set = ChordSet::new(6);
    set.insert(0, 2).unwrap();
    set.insert(2, 4).unwrap();
    set.insert(4, 0).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.crossing(0, 3), Some(Chord::new(2, 4)));
}

#[test]
fn remove_missing_chord_fails() {
    let mut set = ChordSet::new(5);
    let err = set.remove(0, 2).unwrap_err();
    assert_eq!(err, ChordError::NotFound(Chord::new(0, 2)));
    assert!(err.to_string().contains("chord not found"));
}

#[test]
fn remove_keeps_order_of_others() {
    let mut set = ChordSet::new(8);
    set.insert(0, 2).unwrap();
    set.insert(0, 4).unwrap();
    set.insert(4, 6).unwrap();
    set.remove(4, 0).unwrap();
    let left: Vec<_> = set.iter().copied().collect();
    assert_eq!(left, vec![Chord::new(0, 2), Chord::new(4, 6)]);
}

fn chord_strategy(n: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..n, 0..n)
}

proptest! {
    #[test]
    fn crossing_is_symmetric(n in 4usize..40, a in chord_strategy(40), b in chord_strategy(40)) {
        let (a0, a1) = (a.0 % n, a.1 % n);
        let (b0, b1) = (b.0 % n, b.1 % n);
        let mut fwd = ChordSet::new(n);
        let mut rev = ChordSet::new(n);
        if fwd.insert(a0, a1).is_ok() && rev.insert(b0, b1).is_ok() {
            let f = fwd.insert(b0, b1);
            let r = rev.insert(a0, a1);
            let f_cross = matches!(f, Err(ChordError::Crossing { .. }));
            let r_cross = matches!(r, Err(ChordError::Crossing { .. }));
            prop_assert_eq!(f_cross, r_cross);
        }
    }

    #[test]
    fn insert_then_remove_round_trips(
        n in 4usize..30,
        seed in proptest::collection::vec(chord_strategy(30), 0..20),
        extra in chord_strategy(30),
    ) {
        let mut set = ChordSet::new(n);
        for (a, b) in seed {
            let _ = set.insert(a % n, b % n);
        }
        let before = set.clone();
        if set.insert(extra.0 % n, extra.1 % n).is_ok() {
            set.remove(extra.1 % n, extra.0 % n).unwrap();
        }
        prop_assert!(set.same_members(&before));
    }

    #[test]
    fn members_never_cross(n in 4usize..30, ops in proptest::collection::vec(chord_strategy(30), 0..60)) {
        let mut set = ChordSet::new(n);
        for (a, b) in ops {
            let _ = set.insert(a % n, b % n);
        }
        prop_assert!(set.len() <= n - 3);
        for (i, c) in set.iter().enumerate() {
            for d in set.iter().skip(i + 1) {
                prop_assert!(!c.crosses(d));
            }
        }
    }
}
