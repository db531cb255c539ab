//! Domain types and models

pub mod filter;
pub mod inputs;
pub mod profile;
pub mod social_links;

pub use filter::ProfileFilter;
pub use inputs::{
    ImageInput, ImagePayload, ImageSlot, ProfileInput, ProfileJsonBody, SocialLinksInput,
};
pub use profile::{Profile, ProfileData, ProfileReplacement};
pub use social_links::SocialLinks;
