use super::BitSet;

#[test]
fn can_create_new() {
    let bitset = BitSet::new(70);

    assert_eq!(bitset.len(), 70);
    assert_eq!(bitset.blocks.len(), 2);
    assert!(bitset.blocks.iter().all(|&block| block == 0));
}

#[test]
fn can_use_insert_and_contains() {
    let mut bitset = BitSet::new(130);

    bitset.insert(3);
    bitset.insert(129);

    assert!(bitset.contains(3));
    assert!(bitset.contains(129));
    assert!(!bitset.contains(4));
    assert!(!bitset.contains(500));
}

#[test]
#[should_panic]
fn can_panic_when_insert_out_of_bounds() {
    let mut bitset = BitSet::new(10);
    bitset.insert(10);
}

#[test]
fn can_count_ones_across_blocks() {
    let mut bitset = BitSet::new(200);
    [0, 63, 64, 127, 199].into_iter().for_each(|index| bitset.insert(index));

    assert_eq!(bitset.count_ones(), 5);
    assert!([0, 63, 64, 127, 199].into_iter().all(|index| bitset.contains(index)));
    assert!(!bitset.contains(1) && !bitset.contains(128));
}

#[test]
fn can_count_difference() {
    let mut left = BitSet::new(100);
    let mut right = BitSet::new(100);
    [1, 5, 70, 99].into_iter().for_each(|index| left.insert(index));
    [5, 6, 99].into_iter().for_each(|index| right.insert(index));

    assert_eq!(left.count_difference(&right), 2);
    assert_eq!(right.count_difference(&left), 1);
    assert_eq!(left.count_difference(&left), 0);
}

#[test]
#[should_panic]
fn can_panic_when_count_difference_of_different_width() {
    BitSet::new(10).count_difference(&BitSet::new(11));
}

#[test]
fn can_use_len_and_is_empty() {
    let bitset = BitSet::new(0);

    assert_eq!(bitset.len(), 0);
    assert!(bitset.is_empty());
    assert_eq!(bitset.count_ones(), 0);
}

#[test]
fn can_use_display() {
    let mut bitset = BitSet::new(5);
    bitset.insert(0);
    bitset.insert(2);

    assert_eq!(format!("{bitset}"), "[10100]");
}
