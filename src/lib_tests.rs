use super::*;

#[test]
fn exit_codes_match_documented_contract() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_FINDINGS, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
