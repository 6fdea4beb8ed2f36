// tests/integration_tests/decryption_test.rs
use super::common::SPY_CIPHERTEXT;
use smd::{Shift, WordList, brute_force, decode, encode, shift_between};

#[test]
fn test_spy_message_decrypts_with_rot13() {
    let result = brute_force(SPY_CIPHERTEXT, &WordList::default());

    assert_eq!(result.best_shift(), Shift::new(13));
    for word in ["secret", "spy", "warehouse"] {
        assert!(
            result.best_text().contains(word),
            "Plaintext should contain '{word}'"
        );
    }
    assert_eq!(result.best_text(), decode(SPY_CIPHERTEXT, 13));
}

#[test]
fn test_ranking_puts_best_first() {
    let result = brute_force(SPY_CIPHERTEXT, &WordList::default());
    let ranked = result.ranked();

    assert_eq!(ranked.len(), 26);
    assert_eq!(ranked[0].shift, Shift::new(13));
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_empty_ciphertext_falls_back_to_shift_zero() {
    let result = brute_force("", &WordList::default());
    assert_eq!(result.best_shift(), Shift::new(0));
    assert!(result.best.score <= 0.0);
}

#[test]
fn test_shift_between_agrees_with_brute_force() {
    let plaintext = "Bring the documents and make sure you are not followed.";
    let ciphertext = encode(plaintext, 5);

    assert_eq!(shift_between(plaintext, &ciphertext), Some(Shift::new(5)));
    assert_eq!(
        brute_force(&ciphertext, &WordList::default()).best_shift(),
        Shift::new(5)
    );
}

#[test]
fn test_custom_word_list_drives_detection() {
    let french = WordList::new(["le", "la", "et", "est", "de"]);
    let ciphertext = encode("le chat est sur la table et le chien de la maison", 4);

    let result = brute_force(&ciphertext, &french);
    assert_eq!(result.best_shift(), Shift::new(4));
}
