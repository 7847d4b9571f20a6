use std::env;
use vlog::{default_logger, Config, VERBOSE_ENV};

#[test]
fn test_verbose_env_enables_default_logger() {
    env::set_var(VERBOSE_ENV, "true");

    assert_eq!(Config::from_env(), Config { verbose: true });
    assert!(Config::try_from_env().unwrap().verbose);
    assert!(default_logger().is_verbose());
}
