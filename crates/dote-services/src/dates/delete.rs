use std::sync::Arc;

use dote_models::CommemorativeDate;
use dote_store::DateStore;

use crate::result::ServiceResult;

pub struct DeleteDateService {
    dates: Arc<dyn DateStore>,
}

impl DeleteDateService {
    pub fn new(dates: Arc<dyn DateStore>) -> Self {
        Self { dates }
    }

    pub async fn call(self, date_id: &str) -> ServiceResult<CommemorativeDate> {
        match self.dates.delete(date_id).await {
            Ok(Some(date)) => {
                tracing::debug!(date_id = %date.id, "date deleted");
                ServiceResult::success(date)
            }
            Ok(None) => {
                ServiceResult::failure_with_base_error(format!("Date {date_id} does not exist"))
            }
            Err(err) => ServiceResult::failure_with_base_error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dote_store::MemoryDateStore;

    #[tokio::test]
    async fn delete_removes_the_date() {
        let dates = Arc::new(MemoryDateStore::new());
        dates
            .put(CommemorativeDate {
                id: "d1".to_string(),
                name: "Christmas".to_string(),
                day: 25,
                month: 11,
                client_id: None,
            })
            .await
            .unwrap();

        let result = DeleteDateService::new(dates.clone()).call("d1").await;

        assert_eq!(result.unwrap().name, "Christmas");
        assert!(dates.get("d1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_date_fails() {
        let dates = Arc::new(MemoryDateStore::new());

        let result = DeleteDateService::new(dates).call("404").await;

        assert!(result.is_failure());
        assert_eq!(
            result.full_messages(),
            vec!["Date 404 does not exist".to_string()]
        );
    }
}
