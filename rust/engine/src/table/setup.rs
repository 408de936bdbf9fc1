use std::collections::BTreeMap;

use rand::RngCore;

use super::state::{DealingState, TableConfig, TableStage, TableState};
use crate::cards::{compare_high_card, Card};
use crate::chips::ChipStack;
use crate::deck::shuffled_deck;
use crate::errors::GameError;
use crate::logger::LogKind;
use crate::player::{Player, SeatKind};

const BOT_NAMES: [&str; 10] = [
    "Ada", "Boris", "Chen", "Dana", "Emeka", "Freya", "Gus", "Hana", "Ivo", "Juno",
];

fn player_id(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

/// Seats the hero at seat 0 and `num_bots` bots after it, each with the
/// configured stack, and shuffles a fresh deck. The table starts in
/// [`TableStage::DealerDraw`].
///
/// # Errors
///
/// [`GameError::InvalidConfig`] when the config fails validation.
pub fn create_initial_table(
    config: &TableConfig,
    rng: &mut dyn RngCore,
) -> Result<TableState, GameError> {
    config.validate()?;
    let stack = config.chip_stack();

    let mut players = Vec::with_capacity(config.num_bots + 1);
    players.push(Player::new(
        player_id(rng),
        config.hero_name.clone(),
        SeatKind::Hero,
        0,
        stack.clone(),
    ));
    for seat in 1..=config.num_bots {
        let name = BOT_NAMES[(seat - 1) % BOT_NAMES.len()];
        players.push(Player::new(
            player_id(rng),
            name,
            SeatKind::Bot,
            seat,
            stack.clone(),
        ));
    }

    let mut state = TableState {
        stage: TableStage::DealerDraw,
        deck: shuffled_deck(rng),
        burned: Vec::new(),
        board: Vec::new(),
        players,
        dealer_index: None,
        small_blind_index: None,
        big_blind_index: None,
        current_player_index: None,
        pot: 0,
        pot_stack: ChipStack::new(),
        small_blind: config.small_blind,
        big_blind: config.big_blind,
        difficulty: config.difficulty,
        showdown_rule: config.showdown_rule,
        hand_number: 0,
        current_bet: 0,
        dealer_draw_cards: BTreeMap::new(),
        dealer_draw_revealed: false,
        dealer_draw_in_progress: false,
        action_log: Vec::new(),
        dealing_state: DealingState::default(),
        bot_pending_index: None,
        last_result: None,
    };
    state.log(
        LogKind::Info,
        format!(
            "Table created: {} players, blinds {}/{}",
            state.players.len(),
            state.small_blind,
            state.big_blind
        ),
    );
    tracing::info!(
        players = state.players.len(),
        small_blind = state.small_blind,
        big_blind = state.big_blind,
        "table created"
    );
    Ok(state)
}

/// Deals one face-up card to every seat from a freshly shuffled deck.
///
/// Seats without chips do not draw. Nothing is decided until
/// [`reveal_dealer_draw`] runs.
pub fn perform_dealer_draw(mut state: TableState, rng: &mut dyn RngCore) -> TableState {
    if state.stage.is_betting() {
        tracing::warn!(hand = state.hand_number, "dealer draw refused mid-hand");
        state.log(LogKind::Info, "Dealer draw is not possible during a hand");
        return state;
    }
    state.deck = shuffled_deck(rng);
    state.burned.clear();
    state.board.clear();
    state.dealer_draw_cards.clear();
    state.dealing_state = DealingState::default();

    for i in 0..state.players.len() {
        let card = if state.players[i].chips > 0 {
            state.deck.pop()
        } else {
            None
        };
        let id = state.players[i].id.clone();
        state.dealer_draw_cards.insert(id, card);
    }
    state.dealer_draw_in_progress = true;
    state.dealer_draw_revealed = false;
    state.log(LogKind::Deal, "Drawing for the button");
    state
}

/// Gives the button to the highest drawn card and assigns the blinds.
///
/// The stage stays [`TableStage::DealerDraw`]; [`start_new_hand`] deals the
/// first hand with this button.
///
/// [`start_new_hand`]: crate::table::start_new_hand
pub fn reveal_dealer_draw(mut state: TableState) -> TableState {
    if !state.dealer_draw_in_progress {
        tracing::warn!("reveal_dealer_draw called without a draw in progress");
        return state;
    }

    let mut best: Option<(usize, Card)> = None;
    for (i, p) in state.players.iter().enumerate() {
        let Some(Some(card)) = state.dealer_draw_cards.get(&p.id) else {
            continue;
        };
        let beats = match &best {
            Some((_, top)) => compare_high_card(card, top).is_gt(),
            None => true,
        };
        if beats {
            best = Some((i, *card));
        }
    }
    let Some((dealer, card)) = best else {
        tracing::warn!("dealer draw produced no cards");
        state.dealer_draw_in_progress = false;
        return state;
    };

    for i in 0..state.players.len() {
        let drawn = state.dealer_draw_cards.get(&state.players[i].id).copied().flatten();
        if let Some(c) = drawn {
            let name = state.players[i].name.clone();
            state.push_log(LogKind::Deal, Some(i), None, format!("{} draws {}", name, c));
        }
    }

    state.dealer_index = Some(dealer);
    let (sb, bb) = blind_seats(&state, dealer);
    state.small_blind_index = sb;
    state.big_blind_index = bb;
    state.dealing_state = DealingState {
        high_card_seat: Some(dealer),
        high_card: Some(card),
    };
    state.dealer_draw_revealed = true;
    state.dealer_draw_in_progress = false;

    let name = state.players[dealer].name.clone();
    state.log(
        LogKind::Info,
        format!("{} wins the draw with {} and takes the button", name, card),
    );
    tracing::debug!(dealer, card = %card, "dealer draw revealed");
    state
}

/// Small and big blind seats for a button at `dealer`, skipping seats without
/// chips. Heads-up the button posts the small blind.
pub(crate) fn blind_seats(state: &TableState, dealer: usize) -> (Option<usize>, Option<usize>) {
    let funded = state.players.iter().filter(|p| p.chips > 0).count();
    if funded < 2 {
        return (None, None);
    }
    let next_funded = |from: usize| state.next_seat_where(from, |p| p.chips > 0);
    let sb = if funded == 2 && state.players[dealer].chips > 0 {
        Some(dealer)
    } else {
        next_funded(dealer)
    };
    let bb = sb.and_then(next_funded);
    (sb, bb)
}

/// Empties the action log. Nothing else is touched.
pub fn clear_action_log(mut state: TableState) -> TableState {
    state.action_log.clear();
    state
}
