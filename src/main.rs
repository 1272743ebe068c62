use tracing::error;

use hitch::{Error, Server, app};

#[tokio::main]
async fn main() -> Result<(), Error> {
    if let Err(e) = hitch::log::init() {
        eprintln!("log subscriber not installed: {e}");
    }

    let server = Server::bind(app::ADDR)
        .await
        .inspect_err(|e| error!("cannot listen on {}: {e}", app::ADDR))?;

    server.serve(app::app()).await
}
