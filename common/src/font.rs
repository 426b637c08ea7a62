use std::{
    fs,
    path::{Path, PathBuf},
};

use ab_glyph::FontRef;
use eyre::{Result, eyre};
use plotters::style::{FontStyle, register_font};
use tracing::{debug, trace, warn};

/// Family every chart asks for
pub const CHART_FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, shipped so charts always carry text. License in `assets/`.
static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Registers the first valid font among `preferred` as [`CHART_FONT_FAMILY`], falling
/// back to the bundled DejaVu Sans.
pub fn install_chart_font(preferred: &[PathBuf]) -> Result<()> {
    for path in preferred {
        if let Some(bytes) = read_font(path) {
            // plotters keeps registered fonts for the rest of the process
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            register(bytes)?;
            debug!("Chart font: {}", path.display());
            return Ok(());
        }
    }
    register(BUNDLED_FONT)?;
    debug!("Chart font: bundled DejaVu Sans");
    Ok(())
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("Skip font {}: {err}", path.display());
            return None;
        }
    };
    match FontRef::try_from_slice(&bytes) {
        Ok(_) => Some(bytes),
        Err(err) => {
            warn!("Invalid font {}: {err}", path.display());
            None
        }
    }
}

fn register(bytes: &'static [u8]) -> Result<()> {
    trace!("Registering {} byte font", bytes.len());
    register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| eyre!("Chart font could not be registered"))
}
