//! # trendsage
//!
//! Keyword-triggered crypto recommendations over a small static dataset.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────────┐
//! │  free text   │──▶ │  Classifier  │──▶ │  Recommender (rules) │──▶ reply
//! └──────────────┘    └──────────────┘    └──────────────────────┘
//!                            │                       │
//!                            └──── Responder ────────┴──▶ history
//! ```
//!
//! A query is lowercased and matched against six keyword sets. The first
//! raised intent in priority order picks the canned reply, which is rendered
//! from the [`Dataset`]. Every answered query is appended to the responder's
//! history.
//!
//! ```rust
//! use trendsage::Responder;
//!
//! let responder = Responder::default();
//! let reply = responder.respond("is cardano sustainable?");
//! assert!(reply.analysis.sustainability);
//! assert_eq!(
//!     reply.response,
//!     "Invest in Cardano! It's eco-friendly and has long-term potential!"
//! );
//! ```

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod history;
pub mod model;
pub mod recommender;
pub mod responder;
pub mod session;

pub use classifier::{Intent, QueryAnalysis};
pub use dataset::Dataset;
pub use error::{AdvisorError, Result};
pub use history::{ConversationTurn, History};
pub use model::{AssetRecord, Level, PriceTrend, Sentiment};
pub use responder::{Reply, Responder};
pub use session::{MemorySessionStore, SessionId};

/// Display name of the assistant
pub const BOT_NAME: &str = "TrendSage AI";

/// Greeting shown when a client connects
pub const BOT_INTRO: &str = "Hey there! I'm TrendSage AI, your AI-powered crypto sidekick! \
Let's find you a green and growing coin!";

/// Shown alongside every recommendation surface
pub const DISCLAIMER: &str = "Crypto is risky. Always do your own research!";
