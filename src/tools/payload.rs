//! Barcode payload construction.
//!
//! Each kind carries only its own fields. `build` returns `None` while the
//! required fields of the active kind are blank: generation is suppressed
//! rather than producing a malformed payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }
}

/// Structured input for the matrix barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BarcodePayload {
    Text {
        text: String,
    },
    Url {
        url: String,
    },
    Email {
        address: String,
    },
    Phone {
        number: String,
    },
    Wifi {
        ssid: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        encryption: WifiEncryption,
    },
    #[serde(alias = "vcard")]
    Contact {
        name: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        org: String,
    },
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl BarcodePayload {
    /// Renders the text consumed by the barcode encoder.
    pub fn build(&self) -> Option<String> {
        match self {
            Self::Text { text } => (!is_blank(text)).then(|| text.clone()),
            Self::Url { url } => {
                let url = url.trim();
                if url.is_empty() {
                    None
                } else if url.starts_with("http") {
                    Some(url.to_string())
                } else {
                    Some(format!("https://{url}"))
                }
            }
            Self::Email { address } => {
                (!is_blank(address)).then(|| format!("mailto:{}", address.trim()))
            }
            Self::Phone { number } => {
                let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
                (!digits.is_empty()).then(|| format!("tel:{digits}"))
            }
            Self::Wifi { ssid, password, encryption } => (!is_blank(ssid)).then(|| {
                format!("WIFI:T:{};S:{ssid};P:{password};;", encryption.as_str())
            }),
            Self::Contact { name, phone, email, org } => (!is_blank(name)).then(|| {
                [
                    "BEGIN:VCARD".to_string(),
                    "VERSION:3.0".to_string(),
                    format!("N:{name}"),
                    format!("FN:{name}"),
                    format!("TEL:{phone}"),
                    format!("EMAIL:{email}"),
                    format!("ORG:{org}"),
                    "END:VCARD".to_string(),
                ]
                .join("\n")
            }),
        }
    }
}
