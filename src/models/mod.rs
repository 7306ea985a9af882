mod article;
mod filter;
mod response;

pub use article::ArticleRecord;
pub use filter::{FilterParameters, CATEGORIES, COUNTRIES, DEFAULT_LANGUAGE, LANGUAGES};
pub use response::FetchResult;
