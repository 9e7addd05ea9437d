use super::*;

#[test]
fn can_generate_monotonic_ids() {
    let mut sequence = IdSequence::default();

    let ids = (0..3).map(|_| sequence.next_id()).collect::<Vec<_>>();

    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn can_start_sequence_from_given_value() {
    let mut sequence = IdSequence::new(10);

    assert_eq!(sequence.next_id(), 10);
    assert_eq!(sequence.next_id(), 11);
}

#[test]
fn can_use_default_limits() {
    let limits = Limits::default();

    assert_eq!(limits.wave_capacity, 250);
    assert_eq!(limits.batch_capacity, 10_000);
}

#[test]
fn can_display_capacity_exceeded() {
    let signal = CapacityExceeded { capacity: 10, required: 12 };

    assert_eq!(signal.to_string(), "capacity exceeded: 12 > 10");
}
