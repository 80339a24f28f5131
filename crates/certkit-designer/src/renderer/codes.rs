//! QR and barcode encoding for drawables.
//!
//! Uses the qrcode crate for QR matrices and barcoders for 1D symbologies.

use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::code93::Code93;
use barcoders::sym::ean13::EAN13;
use qrcode::{EcLevel, QrCode};
use serde::Serialize;

use crate::model::Symbology;

/// Error correction level used for every QR code.
pub const QR_EC_LEVEL: EcLevel = EcLevel::M;

/// Square module grid of a QR code, row-major, `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrMatrix {
    pub size: usize,
    pub modules: Vec<bool>,
}

impl QrMatrix {
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.modules[y * self.size + x]
    }
}

/// Encodes `data` as a QR matrix at [`QR_EC_LEVEL`].
pub fn encode_qr(data: &str) -> Result<QrMatrix, String> {
    let code = QrCode::with_error_correction_level(data, QR_EC_LEVEL)
        .map_err(|e| format!("QR code generation failed: {e}"))?;
    let size = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == qrcode::Color::Dark)
        .collect();
    Ok(QrMatrix { size, modules })
}

/// Encodes `data` as barcode modules, `true` = bar.
pub fn encode_barcode(symbology: Symbology, data: &str) -> Result<Vec<bool>, String> {
    let encoded = match symbology {
        // Character set B covers the widest printable range
        Symbology::Code128 => Code128::new(format!("\u{0181}{data}")).map(|b| b.encode()),
        Symbology::Code39 => Code39::new(data.to_uppercase()).map(|b| b.encode()),
        Symbology::Code93 => Code93::new(data.to_uppercase()).map(|b| b.encode()),
        Symbology::Ean13 => EAN13::new(data).map(|b| b.encode()),
    }
    .map_err(|e| format!("{} cannot encode '{data}': {e}", symbology.label()))?;

    Ok(encoded.into_iter().map(|module| module == 1).collect())
}
