//! Utility endpoints under `/api/tools`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tools::{codec, formatter, qr, secret};
use crate::tools::{
    BarcodePayload, DecodedDownload, Indent, Palette, PaletteMode, RenderOptions, Rgb,
    SecretPolicy, Swatch, SwatchView,
};
use super::ApiResult;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub result: String,
}

pub async fn base64_encode(payload: Result<Json<TextRequest>, JsonRejection>) -> ApiResult<Json<TextResponse>> {
    let Json(req) = payload?;
    Ok(Json(TextResponse { result: codec::encode_text(&req.text) }))
}

pub async fn base64_decode(payload: Result<Json<TextRequest>, JsonRejection>) -> ApiResult<Json<TextResponse>> {
    let Json(req) = payload?;
    Ok(Json(TextResponse { result: codec::decode_text(&req.text)? }))
}

#[derive(Debug, Serialize)]
pub struct FileEncodeResponse {
    pub result: String,
    pub size: usize,
}

/// Encodes the raw request body.
pub async fn base64_file_encode(body: Bytes) -> Json<FileEncodeResponse> {
    debug!("Encoding {} byte upload", body.len());
    Json(FileEncodeResponse {
        result: codec::encode_bytes(&body),
        size: body.len(),
    })
}

#[derive(Debug, Deserialize)]
pub struct FileDecodeRequest {
    #[serde(default)]
    pub data: String,
}

/// Decodes to a downloadable file: text when the bytes are UTF-8, binary otherwise.
pub async fn base64_file_decode(payload: Result<Json<FileDecodeRequest>, JsonRejection>) -> ApiResult<Response> {
    let Json(req) = payload?;
    let download = DecodedDownload::from_bytes(codec::decode_bytes(&req.data)?);
    let disposition = format!("attachment; filename=\"{}\"", download.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, download.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.into_bytes(),
    )
        .into_response())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteRequest {
    pub mode: PaletteMode,
    /// Base color for harmonious generation; random when absent
    pub seed: Option<Rgb>,
    /// Current palette; locked entries survive regeneration
    pub swatches: Option<Vec<Swatch>>,
    /// Index whose lock is flipped before regenerating
    pub toggle_lock: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub swatches: Vec<SwatchView>,
}

fn regenerate_palette(req: PaletteRequest) -> ApiResult<Palette> {
    let mut rng = rand::thread_rng();
    let mut palette = match req.swatches {
        Some(swatches) => Palette::from_swatches(swatches)?,
        None => return Ok(match req.seed {
            Some(seed) if req.mode == PaletteMode::Harmonious => Palette::from_seed(seed),
            _ => Palette::random(req.mode, &mut rng),
        }),
    };
    if let Some(index) = req.toggle_lock {
        palette.toggle_lock(index)?;
    }
    palette.regenerate(req.mode, req.seed, &mut rng);
    Ok(palette)
}

pub async fn palette(payload: Result<Json<PaletteRequest>, JsonRejection>) -> ApiResult<Json<PaletteResponse>> {
    let Json(req) = payload?;
    let palette = regenerate_palette(req)?;
    Ok(Json(PaletteResponse { swatches: palette.views() }))
}

#[derive(Debug, Serialize)]
pub struct StrengthView {
    pub score: u8,
    pub band: secret::StrengthBand,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PasswordResponse {
    pub password: String,
    pub strength: StrengthView,
}

pub async fn password(payload: Result<Json<SecretPolicy>, JsonRejection>) -> ApiResult<Json<PasswordResponse>> {
    let Json(policy) = payload?;
    let password = secret::generate(&policy)?;
    let strength = secret::strength(&password, &policy);
    Ok(Json(PasswordResponse {
        password,
        strength: StrengthView {
            score: strength.score,
            band: strength.band,
            label: strength.band.label(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct JsonToolRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub indent: Indent,
}

pub async fn json_format(payload: Result<Json<JsonToolRequest>, JsonRejection>) -> ApiResult<Json<TextResponse>> {
    let Json(req) = payload?;
    Ok(Json(TextResponse { result: formatter::format(&req.input, req.indent)? }))
}

pub async fn json_minify(payload: Result<Json<JsonToolRequest>, JsonRejection>) -> ApiResult<Json<TextResponse>> {
    let Json(req) = payload?;
    Ok(Json(TextResponse { result: formatter::minify(&req.input)? }))
}

#[derive(Debug, Deserialize)]
pub struct QrRequest {
    pub payload: BarcodePayload,
    #[serde(default)]
    pub options: RenderOptions,
}

/// Renders the payload as PNG or SVG; 204 while required fields are blank.
pub async fn qr_code(payload: Result<Json<QrRequest>, JsonRejection>) -> ApiResult<Response> {
    let Json(req) = payload?;
    let Some(text) = req.payload.build() else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    let rendered = qr::render(&text, &req.options)?;
    let content_type = rendered.content_type();
    Ok(([(header::CONTENT_TYPE, content_type)], rendered.into_bytes()).into_response())
}
