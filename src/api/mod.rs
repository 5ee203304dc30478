pub mod market;
pub mod news;

pub use market::{MarketClient, MarketError, PriceBar, PriceSeries};
pub use news::{Headline, NewsClient, NewsError};
