use crate::config::Config;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.get_bool("debug"), Ok(false));
    assert_eq!(config.get_str("format").map(String::as_str), Ok("tuple"));
}

#[test]
fn set_and_get() {
    let mut config = Config::default();
    assert!(config.set_bool("debug", true).is_ok());
    assert!(config.set_str("format", "infix").is_ok());
    assert_eq!(config.get_bool("debug"), Ok(true));
    assert_eq!(config.get_str("format").map(String::as_str), Ok("infix"));
}

#[test]
fn unknown_name() {
    let mut config = Config::default();
    assert!(config.get_bool("nope").is_err());
    assert!(config.set_bool("nope", true).is_err());
    assert!(config.get_bool("nope").is_err());
}

#[test]
fn type_mismatch() {
    let mut config = Config::default();
    assert!(config.get_str("debug").is_err());
    assert!(config.get_bool("format").is_err());
    assert!(config.set_str("debug", "yes").is_err());
    assert_eq!(config.get_bool("debug"), Ok(false));
}

#[test]
fn log_filter_follows_debug() {
    let mut config = Config::default();
    assert_eq!(config.log_filter(), Ok("warn"));
    assert!(config.set_bool("debug", true).is_ok());
    assert_eq!(config.log_filter(), Ok("opparse=trace"));
}
