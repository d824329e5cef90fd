use std::sync::Arc;

use dote_core::ids::new_id;
use dote_models::Client;
use dote_store::ClientStore;

use super::{ClientParams, SetClientAttributesService};
use crate::result::ServiceResult;

/// Creates a client with onboarding defaults and an empty brandbook.
pub struct CreateClientService {
    clients: Arc<dyn ClientStore>,
}

impl CreateClientService {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    pub async fn call(self, params: &ClientParams) -> ServiceResult<Client> {
        let model = Client::new(new_id(), "");
        let result = SetClientAttributesService::new(model).call(params);
        if result.is_failure() {
            return result;
        }
        let client = result.unwrap();

        if let Err(err) = self.clients.put(client.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(client_id = %client.id, name = %client.name, "client created");
        ServiceResult::success(client)
    }
}
