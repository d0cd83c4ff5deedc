use jobscout::config::Config;
use jobscout::session::ChatSession;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let mut session = ChatSession::new(config);
    session.run().await;
}
