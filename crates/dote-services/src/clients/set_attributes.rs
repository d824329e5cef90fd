use dote_contracts::{ClientContract, Contract};
use dote_models::Client;

use super::ClientParams;
use crate::result::ServiceResult;

/// Applies params to a client and validates the result. Used by create and
/// update; does not persist.
pub struct SetClientAttributesService {
    model: Client,
}

impl SetClientAttributesService {
    pub fn new(model: Client) -> Self {
        Self { model }
    }

    pub fn call(mut self, params: &ClientParams) -> ServiceResult<Client> {
        self.set_attributes(params);
        match ClientContract.validate(&self.model) {
            Ok(()) => ServiceResult::success(self.model),
            Err(errors) => ServiceResult::failure(errors),
        }
    }

    fn set_attributes(&mut self, params: &ClientParams) {
        if let Some(ref name) = params.name {
            self.model.name = name.clone();
        }
        if let Some(ref email) = params.email {
            self.model.email = email.clone();
        }
        if let Some(ref phone) = params.phone {
            self.model.phone = phone.clone();
        }
        if let Some(plan) = params.plan {
            self.model.plan = plan;
        }
        if let Some(status) = params.status {
            self.model.status = status;
        }
        if let Some(ref label) = params.last_interaction {
            self.model.last_interaction = label.clone();
        }
    }
}
