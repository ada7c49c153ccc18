use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging() {
    // Create a subscriber that logs to stderr so stdout stays clean for
    // command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    // Set the global default subscriber
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set default tracing subscriber");
}
