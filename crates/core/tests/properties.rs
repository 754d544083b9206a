use std::path::Path;

use heurist_core::analysis::entropy::entropy;
use heurist_core::analysis::scoring::threat_score;
use heurist_core::buffer::MIN_BUFFER_SIZE;
use heurist_core::{classify, ByteBuffer, MalwareFamily};
use proptest::prelude::*;

fn any_family() -> impl Strategy<Value = MalwareFamily> {
    proptest::sample::select(MalwareFamily::ALL.to_vec())
}

proptest! {
    #[test]
    fn entropy_stays_within_bounds(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let h = entropy(&data);
        prop_assert!((0.0..=8.0).contains(&h), "entropy {} out of range", h);
    }

    #[test]
    fn repeated_byte_has_zero_entropy(byte in any::<u8>(), len in 1usize..2048) {
        prop_assert_eq!(entropy(&vec![byte; len]), 0.0);
    }

    #[test]
    fn buffer_round_trips(data in proptest::collection::vec(any::<u8>(), MIN_BUFFER_SIZE..8192)) {
        let buffer = ByteBuffer::new(&data).expect("within bounds");
        prop_assert_eq!(buffer.len(), data.len());
        prop_assert_eq!(buffer.as_bytes(), data.as_slice());
    }

    #[test]
    fn undersized_buffers_are_rejected(data in proptest::collection::vec(any::<u8>(), 0..MIN_BUFFER_SIZE)) {
        prop_assert!(ByteBuffer::new(&data).is_err());
    }

    #[test]
    fn score_is_monotonic_in_confidence(
        family in any_family(),
        entropy in 0.0f64..=8.0,
        suspicious in 0usize..30,
        low in 0.0f64..=1.0,
        high in 0.0f64..=1.0,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(
            threat_score(entropy, family, low, suspicious)
                <= threat_score(entropy, family, high, suspicious)
        );
    }

    #[test]
    fn classified_fields_stay_in_range(data in proptest::collection::vec(any::<u8>(), MIN_BUFFER_SIZE..2048)) {
        let buffer = ByteBuffer::new(&data).expect("within bounds");
        let result = classify(Path::new("prop.bin"), &buffer);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!((0.0..=8.0).contains(&result.entropy));
        prop_assert_eq!(result.size_bytes, data.len() as u64);
    }
}
