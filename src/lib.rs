//! Course recommendation and performance scoring for the Maverick Forge
//! training platform.
//!
//! The scoring modules are pure: records come in fully materialised and every
//! input shape yields a value. File and database access lives in [`source`].

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod matcher;
pub mod models;
pub mod parse;
pub mod performance;
pub mod report;
pub mod source;
pub mod telemetry;

pub use catalog::{default_catalog, CourseDefinition, VideoResource};
pub use feedback::{generate_ai_feedback, AiFeedback};
pub use matcher::{recommend, CourseRecommendation, NO_COURSE_AVAILABLE};
pub use models::{DepartmentAggregate, FresherRecord};
pub use parse::parse_fresher_record;
pub use performance::{
    aggregate_by_department, classify_assessment_tier, classify_individual_tier, generate_insight,
    generate_recommendations, Tier,
};
