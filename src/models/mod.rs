mod image;
mod listing;
mod message;
mod user;

pub use image::{Image, NewImage};
pub use listing::{Listing, NewListing, UpdateListing};
pub use message::{Message, NewMessage};
pub use user::{DEFAULT_PROFILE_IMAGE_URL, NewUser, UpdateUser, User};
