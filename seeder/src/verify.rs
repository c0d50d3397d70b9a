use db::models::statistics::{self, RankingEntry};
use db::models::user_profile;
use sea_orm::{ConnectionTrait, DbErr};
use std::fmt::{self, Display};

use crate::format;

/// Number of profiles listed in the leaderboard.
pub const TOP_N: u64 = 5;

/// Result of the read-only checks run after seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    pub profile_count: u64,
    pub statistics_count: u64,
    pub top: Vec<RankingEntry>,
}

pub async fn verify<C>(db: &C) -> Result<VerificationReport, DbErr>
where
    C: ConnectionTrait,
{
    let profile_count = user_profile::Model::count(db).await?;
    let statistics_count = statistics::Model::count(db).await?;
    let top = statistics::Model::top_ranked(db, TOP_N).await?;

    Ok(VerificationReport {
        profile_count,
        statistics_count,
        top,
    })
}

impl Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total profiles: {}", self.profile_count)?;
        writeln!(f, "Total statistics: {}", self.statistics_count)?;
        writeln!(f)?;
        writeln!(f, "Top {TOP_N} Ranking:")?;

        for entry in &self.top {
            writeln!(
                f,
                "{} ({}) - {} points - Rank #{}",
                entry.display_name.as_deref().unwrap_or("<unnamed>"),
                entry.location.as_deref().unwrap_or("unknown location"),
                format::thousands(entry.total_points.into()),
                entry.global_rank
            )?;
            writeln!(
                f,
                "    {} | {} trails | {} | {} | {} climbed | {}",
                entry.experience_level,
                entry.total_trails_completed,
                format::distance(entry.total_distance_km),
                format::duration(entry.total_time_minutes),
                format::elevation(entry.total_elevation_gain_m),
                format::average_pace(entry.total_distance_km, entry.total_time_minutes)
            )?;
        }

        Ok(())
    }
}
