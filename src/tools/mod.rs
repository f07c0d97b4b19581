//! Browser-side utilities hosted server-side: codecs, color, secrets,
//! structured text and matrix barcodes.

pub mod codec;
pub mod formatter;
pub mod palette;
pub mod payload;
pub mod qr;
pub mod secret;

pub use codec::DecodedDownload;
pub use formatter::Indent;
pub use palette::{Palette, PaletteMode, Rgb, Swatch, SwatchView};
pub use payload::{BarcodePayload, WifiEncryption};
pub use qr::{RenderOptions, Rendered};
pub use secret::{SecretPolicy, Strength, StrengthBand};
