use bandit_ucb::{BanditError, UcbConfig, UcbSelector};

#[test]
fn test_config_builder_methods() {
    let config = UcbConfig::new(10, 0.5).with_initial_value(5.0);

    assert_eq!(config.narms, 10);
    assert_eq!(config.rho, 0.5);
    assert_eq!(config.initial_value, 5.0);
}

#[test]
fn test_config_default_initial_value_is_infinite() {
    // The optimistic default must dominate any finite score in an argmax
    let config = UcbConfig::new(3, 1.0);

    assert!(config.initial_value.is_infinite() && config.initial_value > 0.0);
}

#[test]
fn test_zero_arms_rejected() {
    let result = UcbSelector::new(UcbConfig::new(0, 1.0));

    assert!(
        matches!(result, Err(BanditError::InvalidArgument(_))),
        "a selector with no arms should be rejected"
    );
}

#[test]
fn test_non_positive_rho_rejected() {
    for rho in [0.0, -1.0, f64::NAN] {
        let result = UcbSelector::new(UcbConfig::new(3, rho));
        assert!(
            matches!(result, Err(BanditError::InvalidArgument(_))),
            "rho = {} should be rejected",
            rho
        );
    }
}

#[test]
fn test_valid_config_accepted() {
    let selector = UcbSelector::new(UcbConfig::new(1, 0.001));

    assert!(selector.is_ok(), "a single-arm selector is legal");
}

#[test]
fn test_error_display_names_the_argument() {
    let err = UcbSelector::new(UcbConfig::new(3, -2.0)).unwrap_err();

    let message = format!("{}", err);
    assert!(
        message.contains("rho"),
        "error message should name the offending argument, got: {}",
        message
    );
}
