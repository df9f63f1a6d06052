pub mod movie;
pub mod video;

pub use movie::{CastMember, Genre, MovieDetails, MovieSummary};
pub use video::{main_trailer, playable_trailers, Video};
