use axum::{
    Json,
    extract::Query,
    http::{StatusCode, header},
    response::IntoResponse,
};
use core_rtx::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, compose};
use data_model_rtx::{GenerationInput, RobotsTxtResponse};

/// GET /api/robots_txt - Render robots.txt as plain text from query parameters.
///
/// Omitted parameters take the same defaults as the web form.
pub async fn get_robots_txt(Query(input): Query<GenerationInput>) -> String {
    tracing::debug!("rendering {:?}", input);
    compose(&input)
}

/// POST /api/robots_txt - Render robots.txt from a JSON body, answering with JSON.
pub async fn post_robots_txt(Json(input): Json<GenerationInput>) -> impl IntoResponse {
    tracing::debug!("rendering {:?}", input);
    (
        StatusCode::OK,
        Json(RobotsTxtResponse {
            content: compose(&input),
        }),
    )
}

/// GET /api/download - Same as GET /api/robots_txt, but asks the browser to save it as a file.
pub async fn get_download(Query(input): Query<GenerationInput>) -> impl IntoResponse {
    let content = compose(&input);
    tracing::info!(strategy = %input.strategy, platform = %input.platform, "robots.txt download");
    (
        [
            (header::CONTENT_TYPE, format!("{DOWNLOAD_MIME_TYPE}; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        content,
    )
}
