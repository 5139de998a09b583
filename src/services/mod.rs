pub mod catalog;
pub mod matcher;
pub mod recommender;
pub mod tfidf;
