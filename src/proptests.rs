use super::*;

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

/// A valid level at some depth: a random subset of nodes is non-empty, and
/// their compact slots are a random permutation of `0..k`.
fn arb_level() -> impl Strategy<Value = OctreeLevel> {
    (1u8..=8, 1usize..=48).prop_flat_map(|(depth, num_nodes)| {
        let positions: Vec<usize> = (0..num_nodes).collect();
        prop::sample::subsequence(positions, 0..=num_nodes).prop_flat_map(move |nonempty| {
            let slots: Vec<i32> = (0..nonempty.len() as i32).collect();
            (Just(nonempty), Just(slots).prop_shuffle()).prop_map(move |(nonempty, slots)| {
                let mut children = vec![OctreeLevel::EMPTY; num_nodes];
                for (&node, slot) in nonempty.iter().zip(slots) {
                    children[node] = slot;
                }
                let num_nonempty = nonempty.len() as u32;
                OctreeLevel::new(depth, num_nonempty, children).unwrap()
            })
        })
    })
}

fn arb_features(width: u32) -> impl Strategy<Value = FeatureArray> {
    (1u32..=2, 1u32..=3).prop_flat_map(move |(batch, channels)| {
        let len = (batch * channels * width) as usize;
        prop_vec(-1.0e6f32..1.0e6f32, len)
            .prop_map(move |values| FeatureArray::from_vec(batch, channels, width, values).unwrap())
    })
}

fn arb_level_and_compact() -> impl Strategy<Value = (OctreeLevel, FeatureArray)> {
    arb_level().prop_flat_map(|level| {
        let features = arb_features(level.num_nonempty());
        (Just(level), features)
    })
}

fn arb_level_and_full() -> impl Strategy<Value = (OctreeLevel, FeatureArray)> {
    arb_level().prop_flat_map(|level| {
        let features = arb_features(level.num_nodes());
        (Just(level), features)
    })
}

proptest! {
    #[test]
    fn pad_then_depad_is_identity((level, compact) in arb_level_and_compact()) {
        let full = pad(&level, &compact).unwrap();
        prop_assert_eq!(full.width(), level.num_nodes());

        let back = depad(&level, &full).unwrap();
        prop_assert_eq!(back, compact);
    }

    #[test]
    fn pad_writes_exactly_the_nonempty_nodes((level, compact) in arb_level_and_compact()) {
        let full = pad(&level, &compact).unwrap();
        for batch in 0..compact.batch() {
            for channel in 0..compact.channels() {
                for node in 0..level.num_nodes() {
                    match level.compact_slot(node) {
                        Some(slot) => prop_assert_eq!(
                            full.at(batch, channel, node),
                            compact.at(batch, channel, slot)
                        ),
                        None => prop_assert_eq!(full.at(batch, channel, node), 0.0),
                    }
                }
            }
        }
    }

    #[test]
    fn depad_then_pad_masks_empty_nodes((level, full) in arb_level_and_full()) {
        let masked = pad(&level, &depad(&level, &full).unwrap()).unwrap();
        for batch in 0..full.batch() {
            for channel in 0..full.channels() {
                for node in 0..level.num_nodes() {
                    let expected = if level.compact_slot(node).is_some() {
                        full.at(batch, channel, node)
                    } else {
                        0.0
                    };
                    prop_assert_eq!(masked.at(batch, channel, node), expected);
                }
            }
        }
    }

    #[test]
    fn executors_are_bit_identical((level, compact) in arb_level_and_compact()) {
        let serial = pad_with(&SerialExecutor, &level, &compact).unwrap();
        let threaded = pad_with(&RayonExecutor, &level, &compact).unwrap();
        prop_assert_eq!(&serial, &threaded);

        prop_assert_eq!(
            depad_with(&SerialExecutor, &level, &serial).unwrap(),
            depad_with(&RayonExecutor, &level, &threaded).unwrap()
        );
    }
}
