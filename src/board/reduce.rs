//! Board transitions
//!
//! Pure functions from one board to the next. A rejected action returns the
//! reason and leaves the caller's board exactly as it was.

use rand::Rng;

use super::catalog::RewardCatalog;
use super::error::BoardError;
use super::state::RewardBoard;
use super::wallet::Credit;

/// Resample every unclaimed card from the catalog pool
///
/// Each unclaimed card draws independently and uniformly, with replacement.
/// Claimed cards keep their reward.
pub fn apply_reroll<R: Rng>(
    board: &RewardBoard,
    catalog: &RewardCatalog,
    rng: &mut R,
) -> Result<RewardBoard, BoardError> {
    if !board.can_reroll() {
        return Err(BoardError::RerollExhausted {
            max: board.max_rerolls(),
        });
    }

    let pool = catalog.possible_rewards();
    let mut next = board.clone();
    // Catalog construction guarantees a non-empty pool
    if !pool.is_empty() {
        for card in next.cards_mut().iter_mut().filter(|c| !c.claimed) {
            let offer = pool[rng.random_range(0..pool.len())];
            card.reward_kind = offer.kind;
            card.reward_amount = offer.amount;
        }
    }
    next.bump_reroll_count();

    log::debug!(
        "Reroll {}/{} applied",
        next.reroll_count(),
        next.max_rerolls()
    );
    Ok(next)
}

/// Mark one card as claimed and return its payout
pub fn apply_claim(board: &RewardBoard, day: u32) -> Result<(RewardBoard, Credit), BoardError> {
    let index = board
        .index_of(day)
        .ok_or(BoardError::ClaimUnknownDay { day })?;

    let card = &board.cards()[index];
    if !card.card_type.is_claimable() {
        return Err(BoardError::ClaimOnLockedCard { day });
    }
    if card.claimed {
        return Err(BoardError::ClaimAlreadyClaimed { day });
    }

    let credit = Credit {
        day,
        kind: card.reward_kind,
        amount: card.reward_amount,
    };
    let mut next = board.clone();
    next.cards_mut()[index].claimed = true;

    log::debug!("Day {} claimed: {} {}", day, credit.amount, credit.kind.label());
    Ok((next, credit))
}
