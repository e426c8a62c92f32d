//! Article summary card
//!
//! Pure presentation over one article plus its navigation target. Cards do
//! no fetching of their own; the containing list supplies the record.

use crate::article::Article;
use crate::routes::Route;

/// Summary card for one article
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    article: Article,
}

impl ArticleCard {
    /// Wrap an article for summary presentation
    pub fn new(article: Article) -> Self {
        Self { article }
    }

    /// The underlying article record
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Card heading
    pub fn title(&self) -> &str {
        &self.article.title
    }

    /// Card summary line
    pub fn description(&self) -> &str {
        &self.article.description
    }

    /// Publication date as listed in the manifest
    pub fn date(&self) -> &str {
        &self.article.date
    }

    /// Tags for the card footer
    pub fn tags(&self) -> &[String] {
        &self.article.tags
    }

    /// Where user interaction with this card navigates to
    pub fn navigation_target(&self) -> Route {
        Route::detail(self.article.filename.clone())
    }
}
