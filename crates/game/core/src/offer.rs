//! Ads (offers) and the outcome of solving one.
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Risk label attached to an ad.
///
/// The server vocabulary is open-ended, so this is not a closed enum: the
/// well-known labels get named variants and anything else is preserved
/// verbatim in [`Probability::Other`]. Display and serialization round-trip
/// the server's label string either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Probability {
    PieceOfCake,
    SureThing,
    WalkInThePark,
    QuiteLikely,
    Gamble,
    Risky,
    Hmmm,
    RatherDetrimental,
    SuicideMission,
    PlayingWithFire,
    Impossible,
    Other(String),
}

impl Probability {
    pub fn as_str(&self) -> &str {
        match self {
            Probability::PieceOfCake => "Piece of cake",
            Probability::SureThing => "Sure thing",
            Probability::WalkInThePark => "Walk in the park",
            Probability::QuiteLikely => "Quite likely",
            Probability::Gamble => "Gamble",
            Probability::Risky => "Risky",
            Probability::Hmmm => "Hmmm....",
            Probability::RatherDetrimental => "Rather detrimental",
            Probability::SuicideMission => "Suicide mission",
            Probability::PlayingWithFire => "Playing with fire",
            Probability::Impossible => "Impossible",
            Probability::Other(label) => label,
        }
    }
}

impl From<String> for Probability {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Piece of cake" => Probability::PieceOfCake,
            "Sure thing" => Probability::SureThing,
            "Walk in the park" => Probability::WalkInThePark,
            "Quite likely" => Probability::QuiteLikely,
            "Gamble" => Probability::Gamble,
            "Risky" => Probability::Risky,
            "Hmmm...." => Probability::Hmmm,
            "Rather detrimental" => Probability::RatherDetrimental,
            "Suicide mission" => Probability::SuicideMission,
            "Playing with fire" => Probability::PlayingWithFire,
            "Impossible" => Probability::Impossible,
            _ => Probability::Other(label),
        }
    }
}

impl From<Probability> for String {
    fn from(probability: Probability) -> Self {
        probability.as_str().to_owned()
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One server-presented offer the player may accept.
///
/// The collection is replaced wholesale on every fetch. `expires_in` counts
/// down on the server between turns and is never simulated locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub ad_id: String,
    pub message: String,
    pub probability: Probability,
    /// The API intermittently sends this as a JSON string instead of a
    /// number, so decoding accepts both.
    #[serde(deserialize_with = "reward_from_number_or_string")]
    pub reward: u32,
    pub expires_in: u32,
    /// `null` on plain ads, `true` on obfuscated ones.
    #[serde(default)]
    pub encrypted: Option<bool>,
}

/// Authoritative result of accepting one ad.
///
/// This is the only channel through which the session's core counters change
/// after a turn action. `lives` defaults to zero when the server omits it,
/// which deliberately reads as a fatal outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdOutcome {
    pub success: bool,
    #[serde(default)]
    pub lives: i32,
    pub gold: u32,
    pub score: u32,
    pub high_score: u32,
    pub turn: u32,
    #[serde(default)]
    pub message: String,
}

impl AdOutcome {
    /// Whether the session continues after this outcome.
    pub fn survived(&self) -> bool {
        self.lives > 0
    }
}

fn reward_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_probability_labels_round_trip() {
        let probability: Probability = serde_json::from_str(r#""Piece of cake""#).unwrap();
        assert_eq!(probability, Probability::PieceOfCake);
        assert_eq!(
            serde_json::to_string(&probability).unwrap(),
            r#""Piece of cake""#
        );
    }

    #[test]
    fn unknown_probability_labels_are_preserved() {
        let probability: Probability = serde_json::from_str(r#""Cakewalk deluxe""#).unwrap();
        assert_eq!(
            probability,
            Probability::Other("Cakewalk deluxe".to_string())
        );
        assert_eq!(
            serde_json::to_string(&probability).unwrap(),
            r#""Cakewalk deluxe""#
        );
    }

    #[test]
    fn ad_decodes_string_reward_and_null_encrypted() {
        let ad: Ad = serde_json::from_str(
            r#"{"adId":"x","message":"Steal a chicken","probability":"Gamble",
                "reward":"35","expiresIn":7,"encrypted":null}"#,
        )
        .unwrap();

        assert_eq!(ad.reward, 35);
        assert_eq!(ad.encrypted, None);
    }

    #[test]
    fn outcome_without_lives_reads_as_fatal() {
        let outcome: AdOutcome = serde_json::from_str(
            r#"{"success":false,"gold":0,"score":0,"highScore":10,"turn":3}"#,
        )
        .unwrap();

        assert!(!outcome.survived());
    }

    #[test]
    fn survival_boundary_is_strictly_positive() {
        let mut outcome = AdOutcome {
            success: true,
            lives: 1,
            gold: 0,
            score: 0,
            high_score: 0,
            turn: 1,
            message: String::new(),
        };
        assert!(outcome.survived());

        outcome.lives = 0;
        assert!(!outcome.survived());

        outcome.lives = -1;
        assert!(!outcome.survived());
    }
}
