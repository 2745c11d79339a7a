#![no_main]
use ingredient_diff::matching::{EmptyTokenPolicy, IngredientNormalizer, NormalizerConfig};
use libfuzzer_sys::fuzz_target;

/// Fuzz the normalizer under every configuration.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for empty_tokens in [EmptyTokenPolicy::Drop, EmptyTokenPolicy::Keep] {
            for strip_parentheticals in [false, true] {
                let normalizer = IngredientNormalizer::new(NormalizerConfig {
                    empty_tokens,
                    strip_parentheticals,
                });
                let sequence = normalizer.normalize(s);
                assert!(sequence.iter().all(|t| !t.as_str().contains(',')));
            }
        }
    }
});
