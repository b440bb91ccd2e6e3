pub mod crawlers;
pub mod errors;
pub mod models;
pub mod platforms;
pub mod strategies;

pub use crawlers::{CRAWLERS, Crawler, CrawlerCategory, crawlers_in};
pub use errors::ParseError;
pub use models::{GenerationInput, PlatformInfo, RobotsTxtResponse, StrategyInfo};
pub use platforms::Platform;
pub use strategies::Strategy;
