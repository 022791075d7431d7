//! `Patience`: a small FreeCell-style solitaire world.
//!
//! A layout has one home pile per suit in play, a fixed number of free cells
//! and a row of stacks. Cards move one at a time:
//!
//! - stack top or free cell → home, when it is the next value of its suit
//! - free cell → stack, stack → stack, when the destination is empty or its
//!   top is one higher and of the opposite colour
//! - stack top → free cell, when a cell is empty
//!
//! The goal is every card home. Free cells are stored sorted so that two
//! layouts differing only in which cell holds which card are the same state.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use statespace_search::contract::SearchWorld;
use statespace_search::heuristic::Heuristic;

use crate::contract::HarnessWorld;

/// Card suit. Hearts and diamonds are red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// A card. Values run from 1 to the layout's king value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub value: u8,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Whether `self` may be placed on a stack whose top is `top`.
    #[must_use]
    pub fn fits_on(self, top: Option<Card>) -> bool {
        match top {
            None => true,
            Some(top) => top.value == self.value + 1 && top.suit.is_red() != self.suit.is_red(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit.letter())
    }
}

/// Full layout. Field order defines the state's total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatienceState {
    /// Top value of each home pile, indexed by [`Suit::index`]; 0 is empty.
    homes: [u8; 4],
    /// Cards in free cells, kept sorted.
    free_cells: Vec<Card>,
    /// Stacks, bottom card first.
    stacks: Vec<Vec<Card>>,
}

impl PatienceState {
    /// Build a layout. Free cells are sorted into canonical order.
    #[must_use]
    pub fn new(homes: [u8; 4], mut free_cells: Vec<Card>, stacks: Vec<Vec<Card>>) -> Self {
        free_cells.sort_unstable();
        Self {
            homes,
            free_cells,
            stacks,
        }
    }

    /// Top value of the home pile for `suit`.
    #[must_use]
    pub fn home_top(&self, suit: Suit) -> u8 {
        self.homes[suit.index()]
    }

    #[must_use]
    pub fn free_cells(&self) -> &[Card] {
        &self.free_cells
    }

    #[must_use]
    pub fn stacks(&self) -> &[Vec<Card>] {
        &self.stacks
    }

    fn stack_top(&self, stack: usize) -> Option<Card> {
        self.stacks.get(stack).and_then(|s| s.last().copied())
    }

    fn goes_home(&self, card: Card) -> bool {
        self.homes[card.suit.index()] + 1 == card.value
    }

    fn put_in_free_cell(&mut self, card: Card) {
        let pos = self.free_cells.binary_search(&card).unwrap_or_else(|p| p);
        self.free_cells.insert(pos, card);
    }

    fn take_from_free_cell(&mut self, card: Card) -> bool {
        match self.free_cells.binary_search(&card) {
            Ok(pos) => {
                self.free_cells.remove(pos);
                true
            }
            Err(_) => false,
        }
    }
}

/// One card movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatienceMove {
    StackToHome { stack: usize },
    FreeCellToHome { card: Card },
    FreeCellToStack { card: Card, stack: usize },
    StackToStack { from: usize, to: usize },
    StackToFreeCell { stack: usize },
}

impl fmt::Display for PatienceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackToHome { stack } => write!(f, "stack {stack} -> home"),
            Self::FreeCellToHome { card } => write!(f, "free {card} -> home"),
            Self::FreeCellToStack { card, stack } => write!(f, "free {card} -> stack {stack}"),
            Self::StackToStack { from, to } => write!(f, "stack {from} -> stack {to}"),
            Self::StackToFreeCell { stack } => write!(f, "stack {stack} -> free"),
        }
    }
}

/// Layout dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealConfig {
    /// Number of suits in play, taken from [`Suit::ALL`] in order (1..=4).
    pub suit_count: usize,
    /// Highest card value (1..=13).
    pub king_value: u8,
    pub free_cell_count: usize,
    pub stack_count: usize,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            suit_count: 2,
            king_value: 4,
            free_cell_count: 2,
            stack_count: 3,
        }
    }
}

/// Typed failure for building a patience world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// A dimension is out of range.
    InvalidConfig { detail: String },
    /// The layout does not hold exactly one copy of every card in play.
    InvalidLayout { detail: String },
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { detail } => write!(f, "invalid deal config: {detail}"),
            Self::InvalidLayout { detail } => write!(f, "invalid layout: {detail}"),
        }
    }
}

impl std::error::Error for DealError {}

/// The patience world: dimensions plus the starting layout.
#[derive(Debug, Clone)]
pub struct Patience {
    config: DealConfig,
    initial: PatienceState,
}

impl Patience {
    /// World starting from an explicit layout.
    ///
    /// # Errors
    ///
    /// Returns [`DealError`] if the dimensions are out of range, the layout
    /// does not fit them, or any card in play is missing or duplicated.
    pub fn new(config: DealConfig, initial: PatienceState) -> Result<Self, DealError> {
        validate_config(&config)?;
        validate_layout(&config, &initial)?;
        Ok(Self { config, initial })
    }

    /// World starting from a shuffled deal, reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidConfig`] if the dimensions are out of range.
    pub fn deal(config: DealConfig, seed: u64) -> Result<Self, DealError> {
        validate_config(&config)?;
        let mut deck = full_deck(&config);
        let mut rng = StdRng::seed_from_u64(seed);
        deck.shuffle(&mut rng);

        let mut stacks = vec![Vec::new(); config.stack_count];
        for (i, card) in deck.into_iter().enumerate() {
            stacks[i % config.stack_count].push(card);
        }
        let initial = PatienceState::new([0; 4], Vec::new(), stacks);
        Ok(Self { config, initial })
    }

    /// The cards-out-of-home heuristic for this world's dimensions.
    #[must_use]
    pub fn cards_out_of_home(&self) -> CardsOutOfHome {
        CardsOutOfHome {
            king_value: self.config.king_value,
            suit_count: self.config.suit_count,
        }
    }

    fn suits(&self) -> &[Suit] {
        &Suit::ALL[..self.config.suit_count]
    }
}

fn full_deck(config: &DealConfig) -> Vec<Card> {
    Suit::ALL[..config.suit_count]
        .iter()
        .flat_map(|&suit| (1..=config.king_value).map(move |value| Card::new(value, suit)))
        .collect()
}

fn validate_config(config: &DealConfig) -> Result<(), DealError> {
    if !(1..=4).contains(&config.suit_count) {
        return Err(DealError::InvalidConfig {
            detail: format!("suit_count must be 1..=4, got {}", config.suit_count),
        });
    }
    if !(1..=13).contains(&config.king_value) {
        return Err(DealError::InvalidConfig {
            detail: format!("king_value must be 1..=13, got {}", config.king_value),
        });
    }
    if config.stack_count == 0 {
        return Err(DealError::InvalidConfig {
            detail: "stack_count must be >= 1".into(),
        });
    }
    Ok(())
}

fn validate_layout(config: &DealConfig, state: &PatienceState) -> Result<(), DealError> {
    if state.stacks.len() != config.stack_count {
        return Err(DealError::InvalidLayout {
            detail: format!(
                "expected {} stacks, got {}",
                config.stack_count,
                state.stacks.len()
            ),
        });
    }
    if state.free_cells.len() > config.free_cell_count {
        return Err(DealError::InvalidLayout {
            detail: format!(
                "{} cards in {} free cells",
                state.free_cells.len(),
                config.free_cell_count
            ),
        });
    }

    for suit in &Suit::ALL[..config.suit_count] {
        if state.home_top(*suit) > config.king_value {
            return Err(DealError::InvalidLayout {
                detail: format!(
                    "home for suit {suit:?} holds {}, above king {}",
                    state.home_top(*suit),
                    config.king_value
                ),
            });
        }
    }

    let mut seen: Vec<Card> = state
        .free_cells
        .iter()
        .chain(state.stacks.iter().flatten())
        .copied()
        .collect();
    seen.sort_unstable();

    let mut expected: Vec<Card> = full_deck(config)
        .into_iter()
        .filter(|card| card.value > state.home_top(card.suit))
        .collect();
    expected.sort_unstable();

    if seen != expected {
        return Err(DealError::InvalidLayout {
            detail: "layout must hold each card not yet home exactly once".into(),
        });
    }
    for suit in &Suit::ALL[config.suit_count..] {
        if state.home_top(*suit) != 0 {
            return Err(DealError::InvalidLayout {
                detail: format!("home for suit {suit:?} is not in play"),
            });
        }
    }
    Ok(())
}

impl SearchWorld for Patience {
    type State = PatienceState;
    type Action = PatienceMove;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "patience"
    }

    fn is_final(&self, state: &PatienceState) -> bool {
        self.suits()
            .iter()
            .all(|&suit| state.home_top(suit) == self.config.king_value)
    }

    fn actions(&self, state: &PatienceState) -> Vec<PatienceMove> {
        let mut moves = Vec::new();
        let stack_count = state.stacks.len();

        for stack in 0..stack_count {
            if state.stack_top(stack).is_some_and(|card| state.goes_home(card)) {
                moves.push(PatienceMove::StackToHome { stack });
            }
        }
        for &card in &state.free_cells {
            if state.goes_home(card) {
                moves.push(PatienceMove::FreeCellToHome { card });
            }
        }
        for &card in &state.free_cells {
            for stack in 0..stack_count {
                if card.fits_on(state.stack_top(stack)) {
                    moves.push(PatienceMove::FreeCellToStack { card, stack });
                }
            }
        }
        for from in 0..stack_count {
            let Some(card) = state.stack_top(from) else {
                continue;
            };
            let lone = state.stacks[from].len() == 1;
            for to in (0..stack_count).filter(|&to| to != from) {
                let dest = state.stack_top(to);
                // A lone card moving to an empty stack only relabels stacks.
                if lone && dest.is_none() {
                    continue;
                }
                if card.fits_on(dest) {
                    moves.push(PatienceMove::StackToStack { from, to });
                }
            }
        }
        if state.free_cells.len() < self.config.free_cell_count {
            for stack in 0..stack_count {
                if state.stack_top(stack).is_some() {
                    moves.push(PatienceMove::StackToFreeCell { stack });
                }
            }
        }
        moves
    }

    fn execute(&self, state: &PatienceState, action: &PatienceMove) -> PatienceState {
        let mut next = state.clone();
        match *action {
            PatienceMove::StackToHome { stack } => {
                if let Some(card) = next.stacks.get_mut(stack).and_then(Vec::pop) {
                    next.homes[card.suit.index()] = card.value;
                }
            }
            PatienceMove::FreeCellToHome { card } => {
                if next.take_from_free_cell(card) {
                    next.homes[card.suit.index()] = card.value;
                }
            }
            PatienceMove::FreeCellToStack { card, stack } => {
                if stack < next.stacks.len() && next.take_from_free_cell(card) {
                    next.stacks[stack].push(card);
                }
            }
            PatienceMove::StackToStack { from, to } => {
                if to < next.stacks.len() {
                    if let Some(card) = next.stacks.get_mut(from).and_then(Vec::pop) {
                        next.stacks[to].push(card);
                    }
                }
            }
            PatienceMove::StackToFreeCell { stack } => {
                if let Some(card) = next.stacks.get_mut(stack).and_then(Vec::pop) {
                    next.put_in_free_cell(card);
                }
            }
        }
        next
    }
}

impl HarnessWorld for Patience {
    fn initial_state(&self) -> PatienceState {
        self.initial.clone()
    }

    fn heuristic(&self, state: &PatienceState) -> f64 {
        self.cards_out_of_home().estimate(state)
    }

    /// Key and parent copies each own every card in play plus the stack
    /// vectors.
    fn state_bytes_hint(&self) -> Option<u64> {
        let cards = usize::from(self.config.king_value) * self.config.suit_count;
        let state = std::mem::size_of::<PatienceState>()
            + cards * std::mem::size_of::<Card>()
            + self.config.stack_count * std::mem::size_of::<Vec<Card>>();
        Some((2 * state + std::mem::size_of::<PatienceMove>()) as u64)
    }
}

/// Number of cards not yet home: `king_value * suits - Σ home tops`.
///
/// Admissible: every card still out needs at least one move.
#[derive(Debug, Clone, Copy)]
pub struct CardsOutOfHome {
    pub king_value: u8,
    pub suit_count: usize,
}

impl Heuristic<PatienceState> for CardsOutOfHome {
    #[allow(clippy::cast_possible_truncation)]
    fn estimate(&self, state: &PatienceState) -> f64 {
        let total: u32 = u32::from(self.king_value) * self.suit_count.min(4) as u32;
        let home: u32 = Suit::ALL[..self.suit_count.min(4)]
            .iter()
            .map(|&suit| u32::from(state.home_top(suit)))
            .sum();
        f64::from(total.saturating_sub(home))
    }
}
