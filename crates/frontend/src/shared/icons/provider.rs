//! Capabilities the bootstrap is built over. The page wires in the Feather
//! script and the live DOM (`feather.rs`); tests wire in stubs.

use super::BootstrapError;
use futures::future::LocalBoxFuture;

/// The external icon library
pub trait RenderProvider {
    /// Library present and initialized
    fn is_ready(&self) -> bool;

    /// Fetch the library once. Resolves when the script has loaded; the
    /// library may still need a few ticks to initialize afterwards.
    fn acquire(&self) -> LocalBoxFuture<'static, Result<(), BootstrapError>>;

    /// Render every placeholder currently in the markup
    fn render(&self) -> Result<(), BootstrapError>;
}

/// Time source of the bootstrap
pub trait Ticker {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}
