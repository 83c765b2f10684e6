use super::*;

#[test]
fn env_credentials_absent_var_is_none() {
    let creds = EnvCredentials::new("RESCATA_TEST_KEY_THAT_IS_NEVER_SET");
    assert_eq!(creds.var(), "RESCATA_TEST_KEY_THAT_IS_NEVER_SET");
    assert!(creds.api_key().is_none());
}

#[test]
fn env_credentials_reads_at_call_time() {
    let var = "RESCATA_TEST_KEY_CALL_TIME";
    let creds = EnvCredentials::new(var);
    assert!(creds.api_key().is_none());

    // SAFETY: this variable name is used by this test only.
    unsafe { std::env::set_var(var, "secret") };
    assert_eq!(creds.api_key().as_deref(), Some("secret"));

    unsafe { std::env::set_var(var, "   ") };
    assert!(creds.api_key().is_none());

    unsafe { std::env::remove_var(var) };
    assert!(creds.api_key().is_none());
}

#[test]
fn static_credentials_return_fixed_value() {
    assert_eq!(StaticCredentials(Some("k".into())).api_key().as_deref(), Some("k"));
    assert!(StaticCredentials(None).api_key().is_none());
}
