//! # JAR Inventory
//!
//! Inventories third-party JAR archives bundled inside an application's
//! installation tree, identifies each archive's provenance (title, vendor,
//! version), and cross-references it against Maven Central to surface
//! available updates. The output is a CSV report for compatibility auditing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────────────────┐   ┌───────────┐
//! │  Walker  │──▶│ Fingerprint + Manifest  │──▶│  Resolver │──▶ CSV report
//! │ (walkdir)│   │  (sha1)      (zip)      │   │           │
//! └──────────┘   └─────────────────────────┘   └─────┬─────┘
//!                                                    │
//!                            ┌───────────────────────┤
//!                            ▼                       ▼
//!                     ┌─────────────┐        ┌──────────────┐
//!                     │ known table │        │ Maven Central│
//!                     │  (curated)  │        │   (reqwest)  │
//!                     └─────────────┘        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`walker`] | Recursive archive discovery |
//! | [`fingerprint`] | SHA-1 content hashing |
//! | [`manifest`] | JAR manifest attribute extraction |
//! | [`known`] | Curated fingerprint overrides |
//! | [`registry`] | Maven Central search client |
//! | [`resolve`] | Identity reconciliation |
//! | [`report`] | CSV report sink |
//! | [`scan`] | Pipeline orchestration |

pub mod config;
pub mod fingerprint;
pub mod known;
pub mod manifest;
pub mod models;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod walker;
