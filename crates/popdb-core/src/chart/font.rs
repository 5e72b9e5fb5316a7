// crates/popdb-core/src/chart/font.rs
use crate::error::{PopError, Result};
use once_cell::sync::OnceCell;
use plotters::style::{register_font, FontStyle};

/// Family name every chart asks for.
pub const FAMILY: &str = "sans-serif";

// Bundled so rendering never depends on fonts installed on the host.
static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static REGISTERED: OnceCell<()> = OnceCell::new();

/// Registers the bundled font once per process.
pub fn ensure_registered() -> Result<()> {
    REGISTERED
        .get_or_try_init(|| {
            register_font(FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| PopError::chart("bundled font could not be parsed"))
        })
        .map(|_| ())
}
