//! Dashboard stats
//!
//! The numbers behind the performance cards. The on-time rate is a proxy:
//! it counts jobs already at Launch whose deadline has not passed yet, out
//! of everything due this month.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use dote_core::error::DoteResult;
use dote_models::{CommemorativeDate, Job};
use dote_store::{DateStore, JobStore};

/// Performance numbers for the current calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStats {
    pub jobs_this_month: usize,
    pub completed_on_time: usize,
    /// Rounded percentage of this month's jobs launched before deadline
    pub on_time_rate: u32,
}

pub struct DashboardQueries {
    jobs: Arc<dyn JobStore>,
    dates: Arc<dyn DateStore>,
}

impl DashboardQueries {
    pub fn new(jobs: Arc<dyn JobStore>, dates: Arc<dyn DateStore>) -> Self {
        Self { jobs, dates }
    }

    pub async fn monthly_stats(&self, today: NaiveDate) -> DoteResult<MonthlyStats> {
        let jobs = self.jobs.list().await?;
        let month_jobs: Vec<&Job> = jobs
            .iter()
            .filter(|j| j.deadline.year() == today.year() && j.deadline.month() == today.month())
            .collect();

        let completed_on_time = month_jobs
            .iter()
            .filter(|j| j.stage.is_final() && j.deadline >= today)
            .count();
        let on_time_rate = if month_jobs.is_empty() {
            0
        } else {
            ((completed_on_time as f64 / month_jobs.len() as f64) * 100.0).round() as u32
        };

        Ok(MonthlyStats {
            jobs_this_month: month_jobs.len(),
            completed_on_time,
            on_time_rate,
        })
    }

    /// Jobs past deadline and not yet launched, in listing order
    pub async fn overdue_jobs(&self, today: NaiveDate) -> DoteResult<Vec<Job>> {
        let jobs = self.jobs.list().await?;
        Ok(jobs.into_iter().filter(|j| j.is_overdue(today)).collect())
    }

    /// Pieces marked Done or Approved across every job
    pub async fn completed_pieces_count(&self) -> DoteResult<usize> {
        let jobs = self.jobs.list().await?;
        Ok(jobs
            .iter()
            .flat_map(|j| &j.pieces)
            .filter(|p| p.status.is_complete())
            .count())
    }

    /// Commemorative dates whose occurrence this year falls inside
    /// `[today, today + window_days]`. Occurrences are pinned to the current
    /// year, so a late-December window does not reach into January.
    pub async fn upcoming_commemorative_dates(
        &self,
        today: NaiveDate,
        window_days: u64,
    ) -> DoteResult<Vec<CommemorativeDate>> {
        let horizon = today
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming: Vec<CommemorativeDate> = self
            .dates
            .list()
            .await?
            .into_iter()
            .filter(|date| {
                date.occurrence(today.year())
                    .is_some_and(|when| when >= today && when <= horizon)
            })
            .collect();
        upcoming.sort_by_key(|d| (d.month, d.day));
        Ok(upcoming)
    }
}
