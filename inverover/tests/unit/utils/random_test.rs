use super::*;

#[test]
fn can_return_int_in_closed_range() {
    let random = DefaultRandom::default();

    let values = (0..1000).map(|_| random.uniform_int(-2, 2)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-2..=2).contains(value)));
    assert!(values.contains(&-2));
    assert!(values.contains(&2));
}

#[test]
fn can_return_min_when_range_is_empty() {
    assert_eq!(DefaultRandom::default().uniform_int(3, 3), 3);
    assert_eq!(SeededRandom::new(0).uniform_real(1., 1.), 1.);
}

#[test]
fn can_repeat_sequence_with_same_seed() {
    let create_sequence = |seed: u64| {
        let random = SeededRandom::new(seed);
        (0..100).map(|_| (random.uniform_int(0, 1000), random.next_seed())).collect::<Vec<_>>()
    };

    assert_eq!(create_sequence(7), create_sequence(7));
    assert_ne!(create_sequence(7), create_sequence(8));
}

#[test]
fn can_hit_with_probability() {
    let random = SeededRandom::new(0);
    let experiments = 10000;

    let hits = (0..experiments).filter(|_| random.is_hit(0.3)).count();

    assert!((hits as f64 / experiments as f64 - 0.3).abs() < 0.05);
    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| random.is_hit(1.)));
}
