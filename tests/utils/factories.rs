/// Test data factories using builder pattern
use popcorn_lib::modules::catalog::MovieSummary;
use popcorn_lib::shared::application::Page;

pub struct MovieFactory {
    id: u64,
    title: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    vote_average: f32,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Test Movie".to_string(),
            poster_path: None,
            release_date: None,
            vote_average: 0.0,
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn with_release_date(mut self, date: &str) -> Self {
        self.release_date = Some(date.to_string());
        self
    }

    pub fn with_vote_average(mut self, vote: f32) -> Self {
        self.vote_average = vote;
        self
    }

    pub fn build(self) -> MovieSummary {
        let mut movie = MovieSummary::new(self.id, self.title).with_vote_average(self.vote_average);
        if let Some(path) = self.poster_path {
            movie = movie.with_poster(path);
        }
        if let Some(date) = self.release_date {
            movie = movie.with_release_date(date);
        }
        movie
    }
}

/// Three movies per page, ids `page * 100 + n`
pub fn popular_page(page: u32, total_pages: u32) -> Page<MovieSummary> {
    let items = (0..3)
        .map(|n| {
            MovieFactory::new()
                .with_id(page as u64 * 100 + n)
                .with_title(&format!("Popular {}-{}", page, n))
                .build()
        })
        .collect();
    Page::new(items, page, total_pages, total_pages * 3)
}

/// Two movies per page titled after the query
pub fn search_page(query: &str, page: u32, total_pages: u32) -> Page<MovieSummary> {
    let items = (0..2)
        .map(|n| {
            MovieFactory::new()
                .with_id(10_000 + page as u64 * 10 + n)
                .with_title(&format!("{} #{}", query, n))
                .build()
        })
        .collect();
    Page::new(items, page, total_pages, total_pages * 2)
}
