use super::*;

/// # Safety
/// Callers hold `test_env::lock()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("__TEST_CFG_STR__");
        std::env::remove_var("__TEST_CFG_NUM__");
    }
}

#[test]
fn server_port_defaults_to_3000() {
    let _guard = test_env::lock();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn server_port_parses_override() {
    let _guard = test_env::lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);

    unsafe { clear_server_env() };
}

#[test]
fn server_port_rejects_garbage() {
    let _guard = test_env::lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PORT"));
    assert!(err.contains("eighty"));

    unsafe { clear_server_env() };
}

#[test]
fn env_string_treats_blank_as_unset() {
    let _guard = test_env::lock();
    unsafe {
        clear_server_env();
        std::env::set_var("__TEST_CFG_STR__", "   ");
    }
    assert_eq!(env_string("__TEST_CFG_STR__"), None);

    unsafe { std::env::set_var("__TEST_CFG_STR__", " value ") };
    assert_eq!(env_string("__TEST_CFG_STR__").as_deref(), Some("value"));

    unsafe { clear_server_env() };
}

#[test]
fn env_parse_falls_back_on_bad_number() {
    let _guard = test_env::lock();
    unsafe {
        clear_server_env();
        std::env::set_var("__TEST_CFG_NUM__", "soon");
    }
    assert_eq!(env_parse("__TEST_CFG_NUM__", 7_u64), 7);
    assert_eq!(env_parse_opt::<u64>("__TEST_CFG_NUM__"), None);

    unsafe { std::env::set_var("__TEST_CFG_NUM__", "42") };
    assert_eq!(env_parse("__TEST_CFG_NUM__", 7_u64), 42);

    unsafe { clear_server_env() };
}
