use proptest::prelude::*;

use crate::{types::WTHashSet, vocab::Vocabulary};

fn token_freqs() -> impl Strategy<Value = Vec<(String, usize)>> {
    proptest::collection::vec(("[a-e]{1,3}", 1usize..5), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn size_counts_distinct_tokens_plus_unk(freqs in token_freqs()) {
        let distinct: WTHashSet<&str> = freqs.iter().map(|(t, _)| t.as_str()).collect();
        let vocab = Vocabulary::new(freqs.clone()).unwrap();
        prop_assert_eq!(vocab.len(), distinct.len() + 1);
    }

    #[test]
    fn index_of_inverts_token_at(freqs in token_freqs()) {
        let vocab = Vocabulary::new(freqs).unwrap();
        for (index, token) in vocab.iter() {
            prop_assert_eq!(vocab.index_of(token), index);
            prop_assert_eq!(vocab.token_at(vocab.index_of(token)).unwrap(), token);
        }
        // Tokens are drawn from [a-e], so digits are never present.
        prop_assert_eq!(vocab.index_of("0"), vocab.index_of("<unk>"));
    }

    #[test]
    fn insert_token_shifts_tail(
        freqs in token_freqs(),
        position in 0usize..64,
    ) {
        let mut vocab = Vocabulary::new(freqs).unwrap();
        let before = vocab.get_itos();
        let index = position % (before.len() + 1);

        vocab.insert_token("NEW", index).unwrap();

        prop_assert_eq!(vocab.token_at(index).unwrap(), "NEW");
        for (old_index, token) in before.iter().enumerate() {
            let expected = if old_index >= index { old_index + 1 } else { old_index };
            prop_assert_eq!(vocab.index_of(token), expected);
        }
        prop_assert_eq!(vocab.get_stoi().len(), vocab.len());
    }

    #[test]
    fn append_token_is_idempotent(freqs in token_freqs()) {
        let mut vocab = Vocabulary::new(freqs).unwrap();
        let size = vocab.len();

        vocab.append_token("NEW");
        prop_assert_eq!(vocab.len(), size + 1);
        vocab.append_token("NEW");
        prop_assert_eq!(vocab.len(), size + 1);
    }

    #[test]
    fn serde_roundtrip_preserves_lookups(freqs in token_freqs()) {
        let vocab = Vocabulary::new(freqs).unwrap();
        let blob = serde_json::to_vec(&vocab).unwrap();
        let restored: Vocabulary = serde_json::from_slice(&blob).unwrap();

        for (index, token) in vocab.iter() {
            prop_assert_eq!(restored.index_of(token), index);
            prop_assert_eq!(restored.token_at(index).unwrap(), token);
        }
        prop_assert_eq!(restored.index_of("0"), vocab.index_of("0"));
    }
}
