use std::sync::Arc;

use log::{error, info};
use pawsafety_app::ports::email::EmailPort;

/// Checks the mail transport once. A failure is only logged; the caller keeps
/// serving so health checks stay reachable.
pub async fn verify_transport<E: EmailPort + Send + Sync + 'static>(email_port: Arc<E>) -> bool {
    let result = tokio::task::spawn_blocking(move || email_port.verify_connection()).await;
    match result {
        Ok(Ok(())) => {
            info!("Mail transport is ready to send emails");
            true
        }
        Ok(Err(e)) => {
            error!("Mail transport verification failed: {}", e);
            false
        }
        Err(e) => {
            error!("Mail transport verification task failed: {}", e);
            false
        }
    }
}
