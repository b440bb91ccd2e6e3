pub mod bind_address;
#[cfg(feature = "service")]
pub mod health;
#[cfg(feature = "service")]
pub mod logging;
