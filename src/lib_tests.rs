use super::*;

#[test]
fn exit_codes_are_distinct() {
    let codes = [EXIT_SUCCESS, EXIT_ISSUES_FOUND, EXIT_CONFIG_ERROR, EXIT_INTERRUPTED];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn interrupted_follows_shell_convention() {
    // 128 + SIGINT
    assert_eq!(EXIT_INTERRUPTED, 128 + 2);
}
