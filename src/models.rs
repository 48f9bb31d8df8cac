//! Game and review records exchanged with the remote API, plus the new-game draft.

use serde::{Deserialize, Serialize};

/// A game as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub hours_played: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Game {
    /// Hours played formatted for display, `?` when the server has no number
    pub fn hours_label(&self) -> String {
        match self.hours_played {
            Some(hours) if hours.fract() == 0.0 => format!("{} h", hours as i64),
            Some(hours) => format!("{:.1} h", hours),
            None => "? h".to_string(),
        }
    }
}

/// A review pointing at a game by identifier.
///
/// The reference is not checked against the games list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "juegoId", alias = "juego")]
    pub game_id: String,
    #[serde(alias = "contenido", alias = "texto")]
    pub content: String,
}

impl Review {
    pub fn new(game_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            game_id: game_id.into(),
            content: content.into(),
        }
    }
}

/// Body of the create-game request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameArgs {
    pub name: String,
    pub platform: String,
    /// NaN is written as `null`
    pub hours_played: f64,
    pub image_url: String,
}

/// Field of the new-game form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Platform,
    HoursPlayed,
    ImageUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Platform,
        DraftField::HoursPlayed,
        DraftField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Game name",
            DraftField::Platform => "Platform",
            DraftField::HoursPlayed => "Hours played",
            DraftField::ImageUrl => "Image URL",
        }
    }

    /// Whether the form refuses to submit while this field is empty
    pub fn is_required(self) -> bool {
        !matches!(self, DraftField::ImageUrl)
    }

    pub fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Platform,
            DraftField::Platform => DraftField::HoursPlayed,
            DraftField::HoursPlayed => DraftField::ImageUrl,
            DraftField::ImageUrl => DraftField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DraftField::Name => DraftField::ImageUrl,
            DraftField::Platform => DraftField::Name,
            DraftField::HoursPlayed => DraftField::Platform,
            DraftField::ImageUrl => DraftField::HoursPlayed,
        }
    }
}

/// Uncommitted new-game form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub platform: String,
    pub hours_played: String,
    pub image_url: String,
}

impl GameDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Platform => &self.platform,
            DraftField::HoursPlayed => &self.hours_played,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Platform => &mut self.platform,
            DraftField::HoursPlayed => &mut self.hours_played,
            DraftField::ImageUrl => &mut self.image_url,
        }
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.field(*field).is_empty())
    }

    /// First required field that is still empty
    pub fn missing_required(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.field(*field).is_empty())
    }

    /// Translate the form fields into the request body the backend expects.
    ///
    /// Hours played is coerced without validation: non-numeric text becomes NaN.
    pub fn to_create_args(&self) -> CreateGameArgs {
        CreateGameArgs {
            name: self.name.clone(),
            platform: self.platform.clone(),
            hours_played: coerce_number(&self.hours_played),
            image_url: self.image_url.clone(),
        }
    }
}

/// Loose numeric coercion: blank text is 0, anything unparsable is NaN.
///
/// Accepts decimal and exponent notation, `Infinity`, and unsigned integers
/// with a `0x`, `0o` or `0b` prefix. Signed prefixed integers are NaN.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// `0x1F`, `0o17` and `0b101` style integers; NaN when the digits are invalid
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}
