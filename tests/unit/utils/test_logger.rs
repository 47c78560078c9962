use base44_client::utils::setup_logger;

#[test]
fn setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
    tracing::info!("logger installed");
}
