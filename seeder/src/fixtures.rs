//! Sample rows inserted by the seeder.
//!
//! The built-in set has fifteen profiles (user ids 101 to 115) and fifteen
//! statistics rows. Statistics rows carry no profile reference: the n-th row
//! goes to the n-th profile when profiles are ordered by `user_id`.

use chrono::NaiveDate;
use db::models::statistics::NewStatistics;
use db::models::user_profile::{
    ExperienceLevel::{self, *},
    ExplorationType::{self, *},
    Gender::{self, *},
    NewUserProfile,
    PrivacyLevel::{self, *},
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::seed::SeedError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    pub profiles: Vec<NewUserProfile>,
    #[serde(default)]
    pub statistics: Vec<NewStatistics>,
}

type ProfileRow = (
    i64,
    &'static str,
    &'static str,
    (i32, u32, u32),
    Gender,
    &'static str,
    &'static str,
    ExperienceLevel,
    ExplorationType,
    PrivacyLevel,
    bool,
    bool,
);

#[rustfmt::skip]
const PROFILES: [ProfileRow; 15] = [
    (101, "Carlos Aventureiro", "Explorador experiente das trilhas cariocas", (1985, 3, 15), Male, "Rio de Janeiro, RJ", "+5521987654321", Expert, Adventure, Public, true, true),
    (102, "Ana Montanhista", "Apaixonada por montanhas e natureza", (1990, 7, 22), Female, "Belo Horizonte, MG", "+5531987654322", Expert, Hiking, Public, true, true),
    (103, "Pedro Trilheiro", "Descobrindo novas trilhas em SP", (1988, 11, 8), Male, "São Paulo, SP", "+5511987654323", Advanced, Hiking, Public, true, false),
    (104, "Maria Natureza", "Observadora da fauna e flora", (1992, 5, 30), Female, "Curitiba, PR", "+5541987654324", Advanced, NatureObservation, Public, true, true),
    (105, "João Explorador", "Aventuras em busca do desconhecido", (1987, 9, 12), Male, "Porto Alegre, RS", "+5551987654325", Expert, Adventure, Public, true, false),
    (106, "Fernanda Caminhante", "Trilhas são minha paixão", (1991, 12, 3), Female, "Salvador, BA", "+5571987654326", Intermediate, Hiking, Public, true, false),
    (107, "Roberto Montanha", "Conquistando picos e montanhas", (1984, 6, 18), Male, "Fortaleza, CE", "+5585987654327", Advanced, Hiking, Public, true, true),
    (108, "Camila Rocha", "Fotógrafa de natureza", (1993, 4, 25), Female, "Brasília, DF", "+5561987654328", Expert, Photography, Public, true, false),
    (109, "Lucas Verde", "Ecoturismo e sustentabilidade", (1989, 8, 7), Male, "Recife, PE", "+5581987654329", Intermediate, Research, Public, true, false),
    (110, "Juliana Trilha", "Sempre em busca de novas aventuras", (1986, 1, 14), Female, "Manaus, AM", "+5592987654330", Advanced, Adventure, Public, true, true),
    (111, "Diego Aventura", "Trilheiro de fim de semana", (1994, 10, 29), Male, "Goiânia, GO", "+5562987654331", Intermediate, Hiking, Public, true, false),
    (112, "Patrícia Natureza", "Conectada com a natureza", (1988, 3, 16), Female, "Florianópolis, SC", "+5548987654332", Advanced, Relaxation, Public, true, true),
    (113, "Rafael Pico", "Escalador e montanhista", (1983, 7, 21), Male, "Vitória, ES", "+5527987654333", Expert, Adventure, Public, true, false),
    (114, "Carla Caminho", "Trilhas urbanas e rurais", (1995, 11, 5), Female, "Campo Grande, MS", "+5567987654334", Beginner, Hiking, Public, true, false),
    (115, "Thiago Mata", "Preservação e aventura", (1990, 2, 28), Male, "Belém, PA", "+5591987654335", Intermediate, Research, Public, true, true),
];

/// Trails completed, distance km, time min, elevation gain m, longest trail km,
/// highest elevation m, photos, reviews, likes, comments, badges, points,
/// current streak, longest streak, followers, following, guides booked,
/// global rank, local rank.
type StatisticsRow = (
    i32, f64, i32, f64, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32,
);

#[rustfmt::skip]
const STATISTICS: [StatisticsRow; 15] = [
    (180, 3500.50, 21600, 85000.0, 45, 2800, 320, 85, 1250, 340, 45, 25000, 15, 28, 450, 280, 12, 1, 1),
    (165, 3200.80, 19800, 78000.0, 42, 2650, 290, 78, 1180, 315, 42, 23500, 12, 25, 420, 260, 11, 2, 1),
    (150, 2900.30, 18000, 72000.0, 38, 2500, 260, 72, 1100, 290, 38, 22000, 10, 22, 380, 240, 10, 3, 2),
    (140, 2650.70, 16800, 65000.0, 35, 2350, 240, 65, 980, 265, 35, 20500, 8, 20, 350, 220, 9, 4, 2),
    (130, 2400.20, 15600, 58000.0, 32, 2200, 220, 58, 920, 240, 32, 19000, 7, 18, 320, 200, 8, 5, 3),
    (120, 2150.90, 14400, 52000.0, 30, 2050, 200, 52, 850, 220, 28, 17500, 6, 16, 290, 180, 7, 6, 3),
    (110, 1900.50, 13200, 45000.0, 28, 1900, 180, 45, 780, 195, 25, 16000, 5, 14, 260, 160, 6, 7, 4),
    (100, 1650.80, 12000, 38000.0, 25, 1750, 160, 38, 720, 170, 22, 14500, 4, 12, 230, 140, 5, 8, 4),
    (90, 1400.30, 10800, 32000.0, 22, 1600, 140, 32, 650, 145, 18, 13000, 3, 10, 200, 120, 4, 9, 5),
    (80, 1150.70, 9600, 25000.0, 20, 1450, 120, 25, 580, 120, 15, 11500, 2, 8, 170, 100, 3, 10, 5),
    (70, 900.20, 8400, 20000.0, 18, 1300, 100, 20, 520, 95, 12, 10000, 1, 6, 140, 80, 2, 11, 6),
    (60, 750.50, 7200, 15000.0, 15, 1150, 80, 15, 450, 70, 10, 8500, 0, 4, 110, 60, 1, 12, 6),
    (50, 600.80, 6000, 12000.0, 12, 1000, 60, 12, 380, 45, 8, 7000, 0, 2, 80, 40, 0, 13, 7),
    (40, 450.30, 4800, 8000.0, 10, 850, 40, 8, 320, 20, 6, 5500, 0, 1, 50, 20, 0, 14, 7),
    (30, 300.70, 3600, 5000.0, 8, 700, 20, 5, 250, 10, 4, 4000, 0, 0, 20, 10, 0, 15, 8),
];

fn profile_from_row(row: &ProfileRow) -> NewUserProfile {
    let &(
        user_id,
        name,
        bio,
        (year, month, day),
        gender,
        location,
        phone,
        experience_level,
        exploration_type,
        privacy_level,
        is_active,
        is_verified,
    ) = row;

    NewUserProfile {
        user_id,
        display_name: Some(name.to_string()),
        bio: Some(bio.to_string()),
        profile_picture_url: Some(format!("https://example.com/avatar{user_id}.jpg")),
        date_of_birth: NaiveDate::from_ymd_opt(year, month, day),
        gender: Some(gender),
        location: Some(location.to_string()),
        phone_number: Some(phone.to_string()),
        experience_level,
        exploration_type: Some(exploration_type),
        privacy_level,
        is_active,
        is_verified,
    }
}

fn statistics_from_row(row: &StatisticsRow) -> NewStatistics {
    let &(
        total_trails_completed,
        total_distance_km,
        total_time_minutes,
        total_elevation_gain_m,
        longest_trail_km,
        highest_elevation_m,
        total_photos_shared,
        total_reviews_posted,
        total_likes_received,
        total_comments_received,
        total_badges_earned,
        total_points,
        current_streak,
        longest_streak,
        total_followers,
        total_following,
        total_guides_booked,
        global_rank,
        local_rank,
    ) = row;

    NewStatistics {
        total_trails_completed,
        total_distance_km,
        total_time_minutes,
        total_elevation_gain_m,
        longest_trail_km,
        highest_elevation_m,
        total_photos_shared,
        total_reviews_posted,
        total_likes_received,
        total_comments_received,
        total_badges_earned,
        total_points,
        current_streak,
        longest_streak,
        total_followers,
        total_following,
        total_guides_booked,
        global_rank,
        local_rank,
    }
}

impl Fixtures {
    pub fn builtin() -> Self {
        Self {
            profiles: PROFILES.iter().map(profile_from_row).collect(),
            statistics: STATISTICS.iter().map(statistics_from_row).collect(),
        }
    }

    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|source| SeedError::FixtureParse {
            path: origin.to_string(),
            source,
        })
    }

    /// Loads fixtures from a JSON file shaped like `{"profiles": [...], "statistics": [...]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SeedError::FixtureIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn builtin_has_fifteen_profiles_and_statistics() {
        let fixtures = Fixtures::builtin();
        assert_eq!(fixtures.profiles.len(), 15);
        assert_eq!(fixtures.statistics.len(), 15);
    }

    #[test]
    fn builtin_user_ids_are_unique_and_ascending() {
        let fixtures = Fixtures::builtin();
        let ids: Vec<i64> = fixtures.profiles.iter().map(|p| p.user_id).collect();

        let unique: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids, (101..=115).collect::<Vec<_>>());
    }

    #[test]
    fn builtin_rows_keep_their_values() {
        let fixtures = Fixtures::builtin();

        let maria = &fixtures.profiles[3];
        assert_eq!(maria.user_id, 104);
        assert_eq!(maria.display_name.as_deref(), Some("Maria Natureza"));
        assert_eq!(maria.exploration_type, Some(NatureObservation));
        assert_eq!(maria.date_of_birth, NaiveDate::from_ymd_opt(1992, 5, 30));
        assert_eq!(
            maria.profile_picture_url.as_deref(),
            Some("https://example.com/avatar104.jpg")
        );

        let first = &fixtures.statistics[0];
        assert_eq!(first.total_trails_completed, 180);
        assert_eq!(first.total_distance_km, 3500.50);
        assert_eq!(first.total_points, 25000);
        assert_eq!(first.local_rank, 1);

        let last = &fixtures.statistics[14];
        assert_eq!(last.total_points, 4000);
        assert_eq!(last.global_rank, 15);
        assert_eq!(last.local_rank, 8);
    }

    #[test]
    fn builtin_points_descend_with_position() {
        let points: Vec<i32> = Fixtures::builtin()
            .statistics
            .iter()
            .map(|s| s.total_points)
            .collect();
        assert!(points.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn parses_json_with_defaults() {
        let json = r#"{
            "profiles": [
                { "user_id": 7, "display_name": "Solo", "gender": "OTHER", "date_of_birth": "1990-01-02" }
            ],
            "statistics": [
                { "total_points": 10, "total_distance_km": 1.5 }
            ]
        }"#;

        let fixtures = Fixtures::from_json_str(json, "inline").expect("Failed to parse fixtures");

        assert_eq!(fixtures.profiles[0].user_id, 7);
        assert_eq!(fixtures.profiles[0].gender, Some(Gender::Other));
        assert_eq!(fixtures.profiles[0].experience_level, Beginner);
        assert_eq!(fixtures.statistics[0].total_points, 10);
        assert_eq!(fixtures.statistics[0].total_trails_completed, 0);
    }

    #[test]
    fn statistics_section_is_optional() {
        let fixtures = Fixtures::from_json_str(r#"{ "profiles": [] }"#, "inline").unwrap();
        assert!(fixtures.statistics.is_empty());
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let json = r#"{ "profiles": [ { "user_id": 1, "experience_level": "GURU" } ] }"#;
        let err = Fixtures::from_json_str(json, "inline").unwrap_err();
        assert!(matches!(err, SeedError::FixtureParse { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let json = serde_json::to_string(&Fixtures::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let fixtures = Fixtures::from_json_file(file.path()).expect("Failed to load fixtures");
        assert_eq!(fixtures, Fixtures::builtin());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Fixtures::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SeedError::FixtureIo { .. }));
    }
}
