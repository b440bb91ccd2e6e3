use axum::{Json, extract::Query};
use data_model_rtx::{CRAWLERS, Crawler, CrawlerCategory, Platform, PlatformInfo, Strategy, StrategyInfo};
use serde::Deserialize;

/// GET /api/strategies - Visibility strategies with their labels and descriptions.
pub async fn get_strategies() -> Json<Vec<StrategyInfo>> {
    Json(Strategy::ALL.into_iter().map(StrategyInfo::from).collect())
}

/// GET /api/platforms - Platform templates in display order, each with its disallowed paths.
pub async fn get_platforms() -> Json<Vec<PlatformInfo>> {
    Json(Platform::ALL.into_iter().map(PlatformInfo::from).collect())
}

#[derive(Debug, Default, Deserialize)]
pub struct CrawlerQuery {
    pub category: Option<CrawlerCategory>,
}

/// GET /api/crawlers - The crawler catalog in emission order, optionally filtered by category.
pub async fn get_crawlers(Query(query): Query<CrawlerQuery>) -> Json<Vec<Crawler>> {
    Json(
        CRAWLERS
            .iter()
            .filter(|c| query.category.is_none_or(|wanted| c.category == wanted))
            .copied()
            .collect(),
    )
}
