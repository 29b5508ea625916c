pub mod article;
pub mod listing;

pub use article::extract_restaurant_name;
pub use listing::extract_article_references;
