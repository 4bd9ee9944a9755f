// src/utils/qr.rs

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::AppError;

/// Pixel size of one QR module.
const MODULE_PIXELS: u32 = 10;

/// Renders `url` as a PNG QR code: low error correction, 10px modules and
/// the standard 4-module quiet zone.
pub fn qr_png(url: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
