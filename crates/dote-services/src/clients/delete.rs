use std::sync::Arc;

use dote_models::Client;
use dote_store::ClientStore;

use crate::result::ServiceResult;

/// Deletes a client. Jobs referencing it keep their denormalized
/// `client_name` snapshot and their now dangling `client_id`.
pub struct DeleteClientService {
    clients: Arc<dyn ClientStore>,
}

impl DeleteClientService {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    pub async fn call(self, client_id: &str) -> ServiceResult<Client> {
        match self.clients.delete(client_id).await {
            Ok(Some(client)) => {
                tracing::debug!(client_id = %client.id, "client deleted");
                ServiceResult::success(client)
            }
            Ok(None) => {
                ServiceResult::failure_with_base_error(format!("Client {client_id} does not exist"))
            }
            Err(err) => ServiceResult::failure_with_base_error(err.to_string()),
        }
    }
}
