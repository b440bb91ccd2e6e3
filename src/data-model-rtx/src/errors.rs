use thiserror::Error;

/// Failure to interpret a wire name as one of the data model's enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown strategy '{0}'. Expected one of: maxVisibility, aiOnly, traditional")]
    UnknownStrategy(String),

    #[error("Unknown platform '{0}'. Expected one of: custom, wordpress, shopify, ecommerce")]
    UnknownPlatform(String),

    #[error("Unknown crawler category '{0}'. Expected one of: search, ai")]
    UnknownCategory(String),
}
