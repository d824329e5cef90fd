//! Job board views
//!
//! The four ways the board renders the same job list: personal table,
//! kanban by stage, kanban by assignee, and the month timeline. Grouping
//! never drops a column: every stage and every listed member gets one even
//! when empty.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use dote_core::error::DoteResult;
use dote_models::{Job, JobStage, MemberStatus, TeamMember};
use dote_store::{JobStore, TeamStore};

/// One kanban column of the by-stage view
#[derive(Debug, Clone)]
pub struct StageColumn {
    pub stage: JobStage,
    pub jobs: Vec<Job>,
}

/// One kanban column of the by-assignee view
#[derive(Debug, Clone)]
pub struct AssigneeColumn {
    pub member: TeamMember,
    pub jobs: Vec<Job>,
}

/// One day cell of a member's timeline row
#[derive(Debug, Clone)]
pub struct TimelineCell {
    pub day: u32,
    pub jobs: Vec<Job>,
}

/// One member's row across the month
#[derive(Debug, Clone)]
pub struct TimelineRow {
    pub member: TeamMember,
    pub days: Vec<TimelineCell>,
}

pub struct BoardQueries {
    jobs: Arc<dyn JobStore>,
    team: Arc<dyn TeamStore>,
}

impl BoardQueries {
    pub fn new(jobs: Arc<dyn JobStore>, team: Arc<dyn TeamStore>) -> Self {
        Self { jobs, team }
    }

    /// Jobs assigned to one member, in listing order
    pub async fn my_jobs(&self, member_id: &str) -> DoteResult<Vec<Job>> {
        let jobs = self.jobs.list().await?;
        Ok(jobs
            .into_iter()
            .filter(|j| j.assignee_id == member_id)
            .collect())
    }

    /// All seven stage columns in pipeline order, empty ones included
    pub async fn kanban_by_stage(&self) -> DoteResult<Vec<StageColumn>> {
        let jobs = self.jobs.list().await?;
        Ok(JobStage::ALL
            .into_iter()
            .map(|stage| StageColumn {
                stage,
                jobs: jobs.iter().filter(|j| j.stage == stage).cloned().collect(),
            })
            .collect())
    }

    /// One column per active member, in directory order
    pub async fn kanban_by_assignee(&self) -> DoteResult<Vec<AssigneeColumn>> {
        let jobs = self.jobs.list().await?;
        let members = self.team.list().await?;
        Ok(members
            .into_iter()
            .filter(|m| m.status == MemberStatus::Active)
            .map(|member| {
                let member_jobs = jobs
                    .iter()
                    .filter(|j| j.assignee_id == member.id)
                    .cloned()
                    .collect();
                AssigneeColumn {
                    member,
                    jobs: member_jobs,
                }
            })
            .collect())
    }

    /// Member-by-day grid for one calendar month. A job lands on the cell
    /// matching its exact deadline; `month` is 1-12.
    pub async fn timeline(&self, year: i32, month: u32) -> DoteResult<Vec<TimelineRow>> {
        let jobs = self.jobs.list().await?;
        let members = self.team.list().await?;

        let rows = members
            .into_iter()
            .map(|member| {
                let days = (1..=31)
                    .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                    .map(|date| TimelineCell {
                        day: date.day(),
                        jobs: jobs
                            .iter()
                            .filter(|j| j.assignee_id == member.id && j.deadline == date)
                            .cloned()
                            .collect(),
                    })
                    .collect();
                TimelineRow { member, days }
            })
            .collect();
        Ok(rows)
    }
}
