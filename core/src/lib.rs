//! Kuliner Monitor core: seeded synthetic marketing data for a culinary
//! market of small food vendors, plus the scoring and attribution maths the
//! dashboard pages are built from.
//!
//! Nothing here touches the network or the filesystem except
//! `DashboardConfig::load`. Every generator takes its seed explicitly.

pub mod analytics;
pub mod attribution;
pub mod calendar;
pub mod command;
pub mod config;
pub mod engine;
pub mod entity_generator;
pub mod error;
pub mod generator;
pub mod name_generator;
pub mod rng;
pub mod scoring_model;
pub mod snapshot;
pub mod timeseries_generator;
pub mod types;

pub use attribution::{compute_attribution, Channel, ChannelContribution};
pub use entity_generator::{generate_entities, Entity, EntityStatus, Tier};
pub use error::{CoreError, CoreResult};
pub use scoring_model::predict_conversion_rate;
pub use timeseries_generator::{generate_series, TimeSeriesPoint};
