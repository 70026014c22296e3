use crate::booking::ServiceType;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialSource {
    Website,
    Google,
    Facebook,
    Yelp,
    Manual,
}

impl TestimonialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Yelp => "yelp",
            Self::Manual => "manual",
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTestimonialError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),
    #[error("Testimonial text cannot be longer than 1000 characters")]
    TextTooLong,
}

/// A customer review shown on the public website.
///
/// Public submissions start out unapproved and inactive and only become
/// visible after staff moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: ID,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: String,
    pub service_type: ServiceType,
    pub source: TestimonialSource,
    pub is_active: bool,
    pub is_approved: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created: i64,
    pub updated: i64,
}

impl Testimonial {
    pub const MAX_TEXT_LEN: usize = 1000;

    pub fn validate(&self) -> Result<(), InvalidTestimonialError> {
        if !(1..=5).contains(&self.rating) {
            return Err(InvalidTestimonialError::RatingOutOfRange(self.rating));
        }
        if self.text.chars().count() > Self::MAX_TEXT_LEN {
            return Err(InvalidTestimonialError::TextTooLong);
        }
        Ok(())
    }

    /// Whether this testimonial may be shown to the public
    pub fn is_published(&self) -> bool {
        self.is_active && self.is_approved
    }
}

impl Entity<ID> for Testimonial {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn testimonial(rating: i32) -> Testimonial {
        Testimonial {
            id: Default::default(),
            name: "Sam".into(),
            rating,
            text: "Spotless result, friendly crew.".into(),
            location: "Riverside".into(),
            service_type: ServiceType::Residential,
            source: TestimonialSource::Website,
            is_active: false,
            is_approved: false,
            is_featured: false,
            sort_order: 0,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(testimonial(1).validate().is_ok());
        assert!(testimonial(5).validate().is_ok());
        assert_eq!(
            testimonial(0).validate(),
            Err(InvalidTestimonialError::RatingOutOfRange(0))
        );
        assert_eq!(
            testimonial(6).validate(),
            Err(InvalidTestimonialError::RatingOutOfRange(6))
        );
    }

    #[test]
    fn unapproved_testimonial_is_not_published() {
        let mut t = testimonial(5);
        assert!(!t.is_published());
        t.is_approved = true;
        assert!(!t.is_published());
        t.is_active = true;
        assert!(t.is_published());
    }
}
