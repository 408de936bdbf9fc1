//! Terminal rendering of cards, stacks and the table.
//!
//! Suits print as ♠ ♥ ♦ ♣ where the terminal is known to handle them and as
//! `s h d c` otherwise.
//!
//! ```rust
//! use railbird_engine::cards::{Card, Rank, Suit};
//! use railbird_cli::formatters::format_board;
//!
//! let flop = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//! ];
//! assert!(format_board(&flop).starts_with("[A"));
//! assert_eq!(format_board(&[]), "[]");
//! ```

use railbird_engine::cards::{Card, Rank, Suit};
use railbird_engine::chips::ChipStack;
use railbird_engine::player::Player;
use railbird_engine::rules::legal_actions;
use railbird_engine::table::{TableState, max_bet};

/// Windows consoles outside Windows Terminal or VS Code get ASCII suits.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    match (suit, supports_unicode()) {
        (Suit::Spades, true) => "♠",
        (Suit::Hearts, true) => "♥",
        (Suit::Diamonds, true) => "♦",
        (Suit::Clubs, true) => "♣",
        (Suit::Spades, false) => "s",
        (Suit::Hearts, false) => "h",
        (Suit::Diamonds, false) => "d",
        (Suit::Clubs, false) => "c",
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Cards in bracket notation, e.g. `[A♠ K♥ Q♦]`.
pub fn format_board(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// Denominations from largest to smallest, e.g. `1000x4 500x1 25x2`.
pub fn format_chip_stack(stack: &ChipStack) -> String {
    let mut parts: Vec<String> = stack
        .iter()
        .map(|(denom, count)| format!("{}x{}", denom, count))
        .collect();
    parts.reverse();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

/// One line per seat: marker, name, chips, street bet and status.
pub fn format_seat(state: &TableState, seat: usize, player: &Player) -> String {
    let mut marker = String::new();
    if state.dealer_index == Some(seat) {
        marker.push('D');
    }
    if state.current_player_index == Some(seat) && state.stage.is_betting() {
        marker.push('*');
    }
    let status = if player.chips == 0 && player.bet == 0 && player.has_folded {
        " (out)"
    } else if player.has_folded {
        " (folded)"
    } else if player.is_all_in {
        " (all-in)"
    } else {
        ""
    };
    format!(
        "{:>2} {:<8} {:>7} bet {:>5}{}",
        marker, player.name, player.chips, player.bet, status
    )
}

/// The hero's view before a decision: street, board, pot, seats, own cards
/// and betting limits.
pub fn format_hero_prompt(state: &TableState, hero: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} pot {}",
        state.stage,
        format_board(&state.board),
        state.pot
    )];
    for (seat, p) in state.players.iter().enumerate() {
        lines.push(format_seat(state, seat, p));
    }
    let me = &state.players[hero];
    lines.push(format!("Your cards: {}", format_board(&me.hole_cards)));
    if let Some(limits) = legal_actions(state, hero) {
        let call = if limits.can_check() {
            "check".to_string()
        } else {
            format!("call {}", limits.to_call.min(me.chips))
        };
        let raise = if limits.can_raise() {
            format!("raise <{}..{}>", limits.min_raise_to, limits.max_raise_to)
        } else {
            "allin".to_string()
        };
        lines.push(format!(
            "To act (highest bet {}): fold | {} | {} | allin | q",
            max_bet(state),
            call,
            raise
        ));
    }
    lines
}
