//! Installer records and the closed skill-level category set

use crate::core::assign::ImagePool;
use crate::core::error::{AssignmentError, CatalogError, QueryError};
use crate::core::gallery::GalleryCursor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Skill tier of an installer
///
/// Declaration order is the categorical sort order: the highest tier ranks 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Master,
    Intermediate,
    Novice,
}

impl SkillLevel {
    /// All skill levels, highest tier first
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Master,
        SkillLevel::Intermediate,
        SkillLevel::Novice,
    ];

    /// Position in the fixed rank table (Master → 0)
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Master => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Novice => 2,
        }
    }

    /// Wire label, matched case-sensitively
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Master => "Master",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Novice => "Novice",
        }
    }

    pub(crate) fn expected_labels() -> String {
        Self::ALL
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSkillLevel {
                value: s.to_string(),
                expected: Self::expected_labels(),
            })
    }
}

/// A listed installer profile
///
/// Records are loaded once from a [`crate::core::InstallerSource`] and
/// never mutated afterwards. Only `name`, `city`, `about`, `skill_level` and
/// `years_experience` take part in querying; the rest is descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Installer {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,

    pub skill_level: SkillLevel,

    pub years_experience: u32,

    #[serde(default)]
    pub about: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Explicit image, overrides the card pool assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_completed: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,

    /// Service radius in miles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_radius: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub portfolio_images: Vec<String>,
}

impl Installer {
    /// Create a record with the fields used by querying; descriptive fields start empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        skill_level: SkillLevel,
        years_experience: u32,
        about: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            skill_level,
            years_experience,
            about: about.into(),
            phone: None,
            email: None,
            website: None,
            image_url: None,
            projects_completed: None,
            rating: None,
            specialties: Vec::new(),
            certifications: Vec::new(),
            service_radius: None,
            portfolio_images: Vec::new(),
        }
    }

    /// Check the record against the ingestion contract
    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(|errors| CatalogError::InvalidRecord {
            id: self.id.clone(),
            message: errors.to_string(),
        })
    }

    /// Resolve the card image: the explicit `image_url`, else the pool entry for this id
    pub fn card_image(&self, pool: &ImagePool) -> Result<String, AssignmentError> {
        match &self.image_url {
            Some(url) => Ok(url.clone()),
            None => pool.path_for(&self.id),
        }
    }

    /// Cursor over the portfolio images
    pub fn gallery(&self) -> GalleryCursor {
        GalleryCursor::new(self.portfolio_images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Installer {
        Installer::new(
            "installer-1",
            "Alpha Greens",
            "Austin",
            SkillLevel::Master,
            12,
            "Tour-quality putting greens",
        )
    }

    #[test]
    fn test_skill_level_rank_table() {
        assert_eq!(SkillLevel::Master.rank(), 0);
        assert_eq!(SkillLevel::Intermediate.rank(), 1);
        assert_eq!(SkillLevel::Novice.rank(), 2);
    }

    #[test]
    fn test_skill_level_parse_is_case_sensitive() {
        assert_eq!("Master".parse::<SkillLevel>(), Ok(SkillLevel::Master));
        let err = "master".parse::<SkillLevel>().unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownSkillLevel {
                value: "master".to_string(),
                expected: "Master, Intermediate, Novice".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = serde_json::json!({
            "id": "installer-3",
            "name": "Beta Turf",
            "city": "Boston",
            "skillLevel": "Novice",
            "yearsExperience": 2,
            "about": "Backyard greens",
            "rating": 4.5,
            "portfolioImages": ["/images/portfolio/a.jpg"]
        });

        let installer: Installer = serde_json::from_value(json).unwrap();
        assert_eq!(installer.skill_level, SkillLevel::Novice);
        assert_eq!(installer.years_experience, 2);
        assert_eq!(installer.rating, Some(4.5));
        assert_eq!(installer.portfolio_images.len(), 1);
        assert!(installer.specialties.is_empty());
    }

    #[test]
    fn test_check_accepts_well_formed_record() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn test_check_rejects_empty_name_and_bad_rating() {
        let mut installer = sample();
        installer.name = String::new();
        installer.rating = Some(7.0);

        let err = installer.check().unwrap_err();
        match err {
            CatalogError::InvalidRecord { id, message } => {
                assert_eq!(id, "installer-1");
                assert!(message.contains("name must not be empty"));
                assert!(message.contains("rating must be between 0 and 5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_rejects_invalid_email() {
        let mut installer = sample();
        installer.email = Some("not-an-email".to_string());
        assert!(installer.check().is_err());
    }

    #[test]
    fn test_card_image_prefers_explicit_url() {
        let pool = ImagePool::cards();
        let mut installer = sample();
        assert_eq!(
            installer.card_image(&pool).unwrap(),
            pool.path_for("installer-1").unwrap()
        );

        installer.image_url = Some("/uploads/alpha.jpg".to_string());
        assert_eq!(installer.card_image(&pool).unwrap(), "/uploads/alpha.jpg");
    }

    #[test]
    fn test_gallery_over_portfolio() {
        let mut installer = sample();
        assert!(installer.gallery().is_empty());

        installer.portfolio_images = vec!["/p/1.jpg".to_string(), "/p/2.jpg".to_string()];
        let mut gallery = installer.gallery();
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.prev(), Some(1));
    }
}
