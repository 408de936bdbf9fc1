//! # railbird-engine: No-Limit Hold'em Trainer Table Engine
//!
//! A pure state-transition engine for a multi-way table: one hero against
//! scripted bots. It runs the dealer draw, blinds, dealing, betting rounds,
//! street advancement and showdown, and keeps a denominated chip ledger next
//! to every integer balance.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the high-card order
//! - [`deck`] - Standard deck, Fisher–Yates shuffling and seeded ChaCha20 RNG
//! - [`hand`] - Preflop categories and full five-card evaluation
//! - [`chips`] - Denominated chip stacks with greedy withdrawal
//! - [`player`] - Seats, betting actions and their settled outcomes
//! - [`table`] - The table state machine
//! - [`rules`] - Betting limits and raise validation
//! - [`policy`] - The seam bots plug into
//! - [`snapshot`] - JSON save and restore of a table
//! - [`logger`] - Action log entries and JSONL hand history
//! - [`errors`] - Error types for explicit-result calls
//!
//! ## Quick Start
//!
//! ```rust
//! use railbird_engine::deck::seeded_rng;
//! use railbird_engine::table::{
//!     create_initial_table, perform_dealer_draw, reveal_dealer_draw, start_new_hand,
//!     TableConfig, TableStage,
//! };
//!
//! let mut rng = seeded_rng(42);
//! let config = TableConfig { num_bots: 2, ..TableConfig::default() };
//!
//! let table = create_initial_table(&config, &mut rng).unwrap();
//! let table = reveal_dealer_draw(perform_dealer_draw(table, &mut rng));
//! let table = start_new_hand(table, &mut rng);
//!
//! assert_eq!(table.stage, TableStage::PreFlop);
//! assert_eq!(table.pot, 75);
//! ```
//!
//! ## Deterministic Play
//!
//! Every transition that needs randomness takes the RNG as a parameter, so a
//! seeded source replays a session exactly:
//!
//! ```rust
//! use railbird_engine::deck::{seeded_rng, shuffled_deck};
//!
//! let a = shuffled_deck(&mut seeded_rng(7));
//! let b = shuffled_deck(&mut seeded_rng(7));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod chips;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
pub mod snapshot;
pub mod table;
