//! Effect identifiers and the effect profile table.
//!
//! The repertoire of effects is fixed, so the signal chain is described by a
//! tagged variant with per-variant parameters rather than a general node
//! graph. [`resolve`] is a total function over [`EffectId`]; unknown string
//! identifiers are rejected earlier, when parsing the identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// The closed set of renderable voice effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectId {
    Normal,
    Helium,
    Child,
    Women,
    Giant,
    Gorilla,
    Robot,
    Cave,
    Musician,
    Echo,
}

impl EffectId {
    /// Every effect, in presentation order.
    pub const ALL: [EffectId; 10] = [
        EffectId::Normal,
        EffectId::Helium,
        EffectId::Child,
        EffectId::Women,
        EffectId::Giant,
        EffectId::Gorilla,
        EffectId::Robot,
        EffectId::Cave,
        EffectId::Musician,
        EffectId::Echo,
    ];

    /// The effect's string identifier as used at the selection surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectId::Normal => "normal",
            EffectId::Helium => "helium",
            EffectId::Child => "child",
            EffectId::Women => "women",
            EffectId::Giant => "giant",
            EffectId::Gorilla => "gorilla",
            EffectId::Robot => "robot",
            EffectId::Cave => "cave",
            EffectId::Musician => "musician",
            EffectId::Echo => "echo",
        }
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectId {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(EffectId::Normal),
            "helium" => Ok(EffectId::Helium),
            "child" => Ok(EffectId::Child),
            "women" => Ok(EffectId::Women),
            "giant" => Ok(EffectId::Giant),
            "gorilla" => Ok(EffectId::Gorilla),
            "robot" => Ok(EffectId::Robot),
            "cave" => Ok(EffectId::Cave),
            "musician" => Ok(EffectId::Musician),
            "echo" => Ok(EffectId::Echo),
            other => Err(RenderError::invalid_effect(other)),
        }
    }
}

/// The shape of an effect's signal chain, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainKind {
    /// Resampled signal copied straight to the output.
    PassThrough,
    /// Bipolar sine ring modulation followed by a lowpass filter.
    RingModulated {
        /// Carrier oscillator frequency in Hz.
        ring_freq_hz: f32,
        /// Post-modulation lowpass cutoff in Hz.
        lowpass_hz: f32,
    },
    /// Convolution with a synthetic impulse response, dry/wet mixed.
    ConvolutionReverb {
        /// Decay exponent of the impulse envelope.
        decay: f32,
        /// Gain applied to the unprocessed path.
        dry_gain: f32,
        /// Gain applied to the convolved path.
        wet_gain: f32,
    },
    /// Feedback comb echo; the dry path stays in the output.
    DelayFeedback {
        /// Delay-line length in seconds.
        delay_seconds: f32,
        /// Per-trip feedback gain, strictly below 1.
        feedback_gain: f32,
    },
}

/// Resolved rendering parameters for one effect.
///
/// Constructed fresh per render from the static table; never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectProfile {
    /// Read-cursor speed multiplier. > 1 raises pitch and shortens duration.
    pub playback_rate: f32,
    /// Extra output duration reserved for reverb/echo tails, in seconds.
    pub tail_seconds: f32,
    /// The signal chain to run after resampling.
    pub chain: ChainKind,
}

/// Looks up the rendering profile for an effect.
pub fn resolve(effect: EffectId) -> EffectProfile {
    match effect {
        EffectId::Normal => EffectProfile {
            playback_rate: 1.0,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Helium => EffectProfile {
            playback_rate: 1.4,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Child => EffectProfile {
            playback_rate: 1.6,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Women => EffectProfile {
            playback_rate: 1.25,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Giant => EffectProfile {
            playback_rate: 0.7,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Gorilla => EffectProfile {
            playback_rate: 0.65,
            tail_seconds: 0.5,
            chain: ChainKind::PassThrough,
        },
        EffectId::Robot => EffectProfile {
            playback_rate: 1.0,
            tail_seconds: 0.5,
            chain: ChainKind::RingModulated {
                ring_freq_hz: 50.0,
                lowpass_hz: 2000.0,
            },
        },
        EffectId::Cave => EffectProfile {
            playback_rate: 1.0,
            tail_seconds: 2.0,
            chain: ChainKind::ConvolutionReverb {
                decay: 2.5,
                dry_gain: 0.3,
                wet_gain: 0.9,
            },
        },
        EffectId::Musician => EffectProfile {
            playback_rate: 1.0,
            tail_seconds: 1.5,
            chain: ChainKind::ConvolutionReverb {
                decay: 1.0,
                dry_gain: 0.8,
                wet_gain: 0.4,
            },
        },
        EffectId::Echo => EffectProfile {
            playback_rate: 1.0,
            tail_seconds: 2.0,
            chain: ChainKind::DelayFeedback {
                delay_seconds: 0.3,
                feedback_gain: 0.4,
            },
        },
    }
}
