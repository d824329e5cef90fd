use std::sync::Arc;

use dote_contracts::{Contract, DateContract};
use dote_core::ids::new_id;
use dote_models::CommemorativeDate;
use dote_store::DateStore;

use super::DateParams;
use crate::result::ServiceResult;

/// Creates a commemorative date, agency-wide unless a client is given.
pub struct CreateDateService {
    dates: Arc<dyn DateStore>,
}

impl CreateDateService {
    pub fn new(dates: Arc<dyn DateStore>) -> Self {
        Self { dates }
    }

    pub async fn call(self, params: &DateParams) -> ServiceResult<CommemorativeDate> {
        let date = CommemorativeDate {
            id: new_id(),
            name: params.name.clone().unwrap_or_default(),
            day: params.day.unwrap_or(1),
            month: params.month.unwrap_or(0),
            client_id: params.client_id.clone(),
        };

        if let Err(errors) = DateContract.validate(&date) {
            return ServiceResult::failure(errors);
        }
        if let Err(err) = self.dates.put(date.clone()).await {
            return ServiceResult::failure_with_base_error(err.to_string());
        }
        tracing::debug!(date_id = %date.id, name = %date.name, "date created");
        ServiceResult::success(date)
    }
}
