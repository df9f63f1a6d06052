pub mod movie_store;

pub use movie_store::{
    MovieStore, FETCH_ERROR, LOAD_MORE_ERROR, SEARCH_ERROR, TRENDING_ERROR,
};
