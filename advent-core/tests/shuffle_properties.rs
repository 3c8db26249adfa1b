use advent_core::{Door, DoorOrder};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn every_shuffle_is_a_permutation() {
    for seed in 0..500_u64 {
        let order = DoorOrder::shuffled(&mut ChaCha20Rng::seed_from_u64(seed));
        let mut numbers: Vec<u8> = order.iter().map(Door::number).collect();
        assert_eq!(numbers.len(), 24);
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers, (1..=24).collect::<Vec<u8>>(), "seed {seed}");
    }
}

#[test]
fn doors_spread_evenly_over_cells() {
    const SAMPLES: u32 = 48_000;
    let expected = SAMPLES / 24;
    let mut counts = [[0_u32; 24]; 24];
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED_2412);

    for _ in 0..SAMPLES {
        let order = DoorOrder::shuffled(&mut rng);
        for (cell, door) in order.iter().enumerate() {
            counts[cell][usize::from(door.number() - 1)] += 1;
        }
    }

    for (cell, row) in counts.iter().enumerate() {
        for (idx, &count) in row.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 300,
                "door {} landed in cell {cell} {count} times, expected about {expected}",
                idx + 1
            );
        }
    }
}

#[test]
fn first_cell_is_not_pinned() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let firsts: std::collections::BTreeSet<u8> = (0..1000)
        .map(|_| DoorOrder::shuffled(&mut rng).as_slice()[0].number())
        .collect();
    assert_eq!(firsts.len(), 24);
}
