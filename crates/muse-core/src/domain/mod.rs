//! Domain entities and value types.

mod access;
mod calendar;
mod history;
mod keyword;
mod platform;
mod results;

pub use access::{ManagedUser, is_valid_device_id};
pub use calendar::{NewScheduledPost, ScheduledPost, ScheduledPostPatch};
pub use history::{HistoryItem, NewHistoryItem};
pub use keyword::{KeywordWithMetadata, SearchVolume};
pub use platform::{Platform, SUPPORTED_LANGUAGES};
pub use results::{
    ContentBrief, FacebookContent, HashtagSet, InstagramContent, LocalKeywordSet,
    MetaDescriptionSet, OutlineHeading, OutlineSection, SchemaMarkup, SeoKeywordSet,
    YouTubeContent,
};
