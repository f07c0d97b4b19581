//! Password generation and strength scoring.

use rand::Rng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use crate::utils::{ToolError, ToolResult};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
/// Characters easily confused with one another in most fonts.
pub const AMBIGUOUS: &str = "il1LoO0";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const MAX_SCORE: u8 = 8;

/// Constraints on a generated secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretPolicy {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    #[serde(alias = "numbers")]
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for SecretPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl SecretPolicy {
    /// Union of the enabled alphabets, minus ambiguous characters when requested.
    pub fn pool(&self) -> Vec<char> {
        let classes = [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ];
        classes
            .iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, alphabet)| alphabet.chars())
            .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
            .collect()
    }
}

/// Qualitative band for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Good,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::VeryWeak,
            3..=4 => Self::Weak,
            5..=6 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub score: u8,
    pub band: StrengthBand,
}

/// Generates a password satisfying `policy` using the OS CSPRNG.
///
/// Each character is sampled uniformly from the pool (`gen_range` rejects
/// out-of-range draws, so there is no modulo bias).
pub fn generate(policy: &SecretPolicy) -> ToolResult<String> {
    generate_with(policy, &mut OsRng)
}

pub fn generate_with<R: Rng + ?Sized>(policy: &SecretPolicy, rng: &mut R) -> ToolResult<String> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&policy.length) {
        return Err(ToolError::validation(format!(
            "Length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {}",
            policy.length
        )));
    }

    let pool = policy.pool();
    if pool.is_empty() {
        return Err(ToolError::EmptyCharset);
    }

    Ok((0..policy.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}

/// Heuristic strength score in `[0, 8]`.
///
/// Length earns a point at 8, 12, 16 and 24 characters. Class diversity earns
/// one point for mixed case, one for digits, two for symbols and one more when
/// all four classes are present. This is a product heuristic, not an entropy
/// estimate.
pub fn strength(password: &str, policy: &SecretPolicy) -> Strength {
    if password.is_empty() {
        return Strength { score: 0, band: StrengthBand::VeryWeak };
    }

    let length = password.chars().count();
    let mut score: u8 = [8, 12, 16, 24].iter().filter(|&&t| length >= t).count() as u8;

    let mixed_case = policy.uppercase && policy.lowercase;
    if mixed_case {
        score += 1;
    }
    if policy.digits {
        score += 1;
    }
    if policy.symbols {
        score += 2;
    }
    if mixed_case && policy.digits && policy.symbols {
        score += 1;
    }

    let score = score.min(MAX_SCORE);
    Strength { score, band: StrengthBand::from_score(score) }
}
