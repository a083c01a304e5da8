//! Audio channel mapping for audio references.
//!
//! A mapping is written as `auto`, `all`, or a comma-separated list of
//! channel names such as `FL,FR`.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Single speaker position, named after the usual container layout labels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum AudioChannel {
    FrontLeft,
    FrontRight,
    FrontCenter,
    LowFrequency,
    BackLeft,
    BackRight,
    FrontLeftOfCenter,
    FrontRightOfCenter,
    BackCenter,
    SideLeft,
    SideRight,
    TopCenter,
    TopFrontLeft,
    TopFrontCenter,
    TopFrontRight,
    TopBackLeft,
    TopBackCenter,
    TopBackRight,
    DownmixLeft,
    DownmixRight,
    WideLeft,
    WideRight,
    SurroundDirectLeft,
    SurroundDirectRight,
    LowFrequency2,
}

const CHANNEL_NAMES: &[(AudioChannel, &str)] = &[
    (AudioChannel::FrontLeft, "FL"),
    (AudioChannel::FrontRight, "FR"),
    (AudioChannel::FrontCenter, "FC"),
    (AudioChannel::LowFrequency, "LFE"),
    (AudioChannel::BackLeft, "BL"),
    (AudioChannel::BackRight, "BR"),
    (AudioChannel::FrontLeftOfCenter, "FLC"),
    (AudioChannel::FrontRightOfCenter, "FRC"),
    (AudioChannel::BackCenter, "BC"),
    (AudioChannel::SideLeft, "SL"),
    (AudioChannel::SideRight, "SR"),
    (AudioChannel::TopCenter, "TC"),
    (AudioChannel::TopFrontLeft, "TFL"),
    (AudioChannel::TopFrontCenter, "TFC"),
    (AudioChannel::TopFrontRight, "TFR"),
    (AudioChannel::TopBackLeft, "TBL"),
    (AudioChannel::TopBackCenter, "TBC"),
    (AudioChannel::TopBackRight, "TBR"),
    (AudioChannel::DownmixLeft, "DL"),
    (AudioChannel::DownmixRight, "DR"),
    (AudioChannel::WideLeft, "WL"),
    (AudioChannel::WideRight, "WR"),
    (AudioChannel::SurroundDirectLeft, "SDL"),
    (AudioChannel::SurroundDirectRight, "SDR"),
    (AudioChannel::LowFrequency2, "LFE2"),
];

impl AudioChannel {
    pub fn name(&self) -> &'static str {
        CHANNEL_NAMES
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, n)| *n)
            .unwrap_or("?")
    }

    pub fn from_name(name: &str) -> Option<Self> {
        CHANNEL_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(c, _)| *c)
    }
}

impl fmt::Display for AudioChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which audio channels of a reference are fed to speech recognition.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum ChannelsMap {
    /// Let the engine pick the channels (usually the center one).
    #[default]
    Auto,
    /// Mix every channel.
    All,
    /// Mix only the listed channels, in the given order.
    Custom(Vec<AudioChannel>),
}

impl ChannelsMap {
    /// Parses the textual form produced by [`ChannelsMap::serialize`].
    pub fn deserialize(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(ChannelsMap::Auto);
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(ChannelsMap::All);
        }

        let mut channels = Vec::new();
        for name in trimmed.split(',').map(str::trim) {
            if name.is_empty() {
                return Err(Error::invalid_channels(text, "empty channel name"));
            }
            let channel = AudioChannel::from_name(name).ok_or_else(|| {
                Error::invalid_channels(text, format!("unknown channel {}", name))
            })?;
            channels.push(channel);
        }
        Ok(ChannelsMap::Custom(channels))
    }

    pub fn serialize(&self) -> String {
        match self {
            ChannelsMap::Auto => "auto".to_string(),
            ChannelsMap::All => "all".to_string(),
            ChannelsMap::Custom(channels) => channels
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl fmt::Display for ChannelsMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize())
    }
}

impl FromStr for ChannelsMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChannelsMap::deserialize(s)
    }
}

impl Serialize for ChannelsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&ChannelsMap::serialize(self))
    }
}

impl<'de> Deserialize<'de> for ChannelsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ChannelsMap::deserialize(&text).map_err(serde::de::Error::custom)
    }
}
