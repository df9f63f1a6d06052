use super::models::{
    TmdbCastMember, TmdbGenre, TmdbMovie, TmdbMovieDetails, TmdbPagedResponse, TmdbVideo,
};
use crate::log_warn;
use crate::modules::catalog::domain::entities::movie::RELEASE_DATE_FORMAT;
use crate::modules::catalog::domain::entities::{
    CastMember, Genre, MovieDetails, MovieSummary, Video,
};
use crate::shared::{
    application::Page,
    errors::{AppError, AppResult},
};
use chrono::NaiveDate;

/// Converts TMDB wire records into normalized domain records
///
/// Rules applied at the boundary:
/// - blank strings become `None`
/// - release dates that are not `YYYY-MM-DD` become `None`
/// - vote averages are clamped into `[0, 10]`
/// - list entries without an id or a title are skipped
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_page(&self, response: TmdbPagedResponse) -> Page<MovieSummary> {
        let received = response.results.len();
        let items: Vec<MovieSummary> = response
            .results
            .into_iter()
            .filter_map(|movie| self.map_movie(movie))
            .collect();

        if items.len() < received {
            log_warn!(
                "TMDB: Skipped {} malformed entries on page {}",
                received - items.len(),
                response.page
            );
        }

        Page::new(
            items,
            response.page.max(1),
            response.total_pages,
            response.total_results,
        )
    }

    /// None when the record lacks the identity fields the client relies on
    pub fn map_movie(&self, movie: TmdbMovie) -> Option<MovieSummary> {
        let id = movie.id?;
        let title = non_blank(movie.title).or_else(|| non_blank(movie.original_title))?;

        Some(MovieSummary {
            id,
            title,
            poster_path: non_blank(movie.poster_path),
            release_date: normalize_date(movie.release_date),
            vote_average: clamp_vote(movie.vote_average),
            overview: non_blank(movie.overview),
            backdrop_path: non_blank(movie.backdrop_path),
            genre_ids: movie.genre_ids.unwrap_or_default(),
        })
    }

    pub fn map_details(&self, details: TmdbMovieDetails) -> AppResult<MovieDetails> {
        let title = non_blank(details.title)
            .or_else(|| non_blank(details.original_title))
            .ok_or_else(|| {
                AppError::NetworkError(format!(
                    "Catalog returned movie {} without a title",
                    details.id
                ))
            })?;

        let mut cast: Vec<TmdbCastMember> = details
            .credits
            .map(|credits| credits.cast)
            .unwrap_or_default();
        cast.sort_by_key(|member| member.order.unwrap_or(u32::MAX));

        Ok(MovieDetails {
            id: details.id,
            title,
            overview: non_blank(details.overview),
            tagline: non_blank(details.tagline),
            poster_path: non_blank(details.poster_path),
            backdrop_path: non_blank(details.backdrop_path),
            release_date: normalize_date(details.release_date),
            vote_average: clamp_vote(details.vote_average),
            vote_count: details.vote_count.unwrap_or(0),
            runtime: details.runtime.filter(|minutes| *minutes > 0),
            genres: details
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| self.map_genre(g))
                .collect(),
            cast: cast
                .into_iter()
                .filter_map(|member| {
                    Some(CastMember {
                        id: member.id,
                        name: non_blank(member.name)?,
                        character: non_blank(member.character),
                        profile_path: non_blank(member.profile_path),
                    })
                })
                .collect(),
        })
    }

    /// None for entries without a key: nothing could be played
    pub fn map_video(&self, video: TmdbVideo) -> Option<Video> {
        let key = non_blank(video.key)?;
        Some(Video {
            id: video.id,
            name: non_blank(video.name).unwrap_or_else(|| key.clone()),
            key,
            site: non_blank(video.site).unwrap_or_default(),
            kind: non_blank(video.r#type).unwrap_or_default(),
        })
    }

    pub fn map_genre(&self, genre: TmdbGenre) -> Genre {
        Genre {
            id: genre.id,
            name: genre.name,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn normalize_date(value: Option<String>) -> Option<String> {
    non_blank(value).filter(|d| NaiveDate::parse_from_str(d, RELEASE_DATE_FORMAT).is_ok())
}

fn clamp_vote(value: Option<f64>) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 10.0) as f32,
        _ => 0.0,
    }
}
