use hunt_domain::ids::{ID_LENGTH, SAFE_ALPHABET, generate_id};
use hunt_domain::safe_nanoid;

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), ID_LENGTH);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn generated_ids_do_not_repeat() {
    let ids: std::collections::HashSet<_> = (0..1_000).map(|_| generate_id()).collect();
    assert_eq!(ids.len(), 1_000);
}
