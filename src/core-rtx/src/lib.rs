//! # robots.txt Generation Core
//!
//! Renders a `robots.txt` that admits or turns away traditional search engines and AI crawlers
//! according to a visibility [`Strategy`], plus the well-known private paths of a [`Platform`].
//!
//! ```
//! use core_rtx::compose;
//! use data_model_rtx::{GenerationInput, Platform, Strategy};
//!
//! let input = GenerationInput::new(Strategy::Traditional, Platform::Wordpress, "https://example.com/sitemap.xml");
//! let robots_txt = compose(&input);
//! assert!(robots_txt.contains("Disallow: /wp-admin/"));
//! ```

mod common;
mod composer;
mod download;
mod errors;
pub mod text_utils;

pub use common::bind_address::{HostPortError, bind_address, get_api_base_url};
#[cfg(feature = "service")]
pub use common::health::health_check;
#[cfg(feature = "service")]
pub use common::logging::setup_logging;
pub use composer::{ATTRIBUTION, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, UPLOAD_INSTRUCTIONS, compose};
pub use download::save_robots_txt;
pub use errors::Error;

pub use data_model_rtx::{GenerationInput, Platform, Strategy};
