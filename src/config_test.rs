use super::*;

#[test]
fn defaults_carry_product_copy() {
    let config = WidgetConfig::default();
    assert_eq!(config.title, "Message Bigwise");
    assert_eq!(config.subtitle, "Chat with us directly");
    assert_eq!(config.welcome_text, "Hi there! Welcome to Bigwise. How can we help you today?");
    assert_eq!(config.reply_text, "Thanks for your message! Our team will get back to you shortly.");
    assert_eq!(config.placeholder, "Type message...");
}

#[test]
fn default_reply_delay_is_half_a_second() {
    assert_eq!(WidgetConfig::default().reply_delay(), Duration::from_millis(500));
}

#[test]
fn default_close_keeps_pending_replies() {
    assert!(!WidgetConfig::default().close_cancels_replies);
}

#[test]
fn defaults_are_valid() {
    assert_eq!(WidgetConfig::default().validate(), Ok(()));
}

#[test]
fn blank_welcome_is_rejected() {
    let config = WidgetConfig { welcome_text: "  ".to_owned(), ..WidgetConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::EmptyText { field: "welcome_text" }));
}

#[test]
fn blank_reply_is_rejected() {
    let config = WidgetConfig { reply_text: String::new(), ..WidgetConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::EmptyText { field: "reply_text" }));
}

#[test]
fn oversized_delay_is_rejected() {
    let millis = u64::from(u32::MAX) + 1;
    let config = WidgetConfig { reply_delay_ms: millis, ..WidgetConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::DelayOutOfRange { millis }));
}

#[test]
fn zero_delay_is_allowed() {
    let config = WidgetConfig { reply_delay_ms: 0, ..WidgetConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let config = WidgetConfig { reply_text: " ".to_owned(), title: "Other".to_owned(), ..WidgetConfig::default() };
    assert_eq!(config.or_default_if_invalid(), WidgetConfig::default());
}

#[test]
fn valid_config_is_kept() {
    let config = WidgetConfig { title: "Support".to_owned(), ..WidgetConfig::default() };
    assert_eq!(config.clone().or_default_if_invalid(), config);
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(ConfigError::EmptyText { field: "reply_text" }.to_string(), "reply_text must not be blank");
    assert_eq!(
        ConfigError::DelayOutOfRange { millis: 5_000_000_000 }.to_string(),
        "reply delay 5000000000ms exceeds 4294967295ms"
    );
}
