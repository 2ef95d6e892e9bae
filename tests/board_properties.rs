//! Property tests over random action sequences

use daily_rewards::anim::{BoardAnimator, CardAnimationController, ClaimState, RerollState};
use daily_rewards::board::{apply_claim, apply_reroll};
use daily_rewards::consts::ANIM_DT;
use daily_rewards::{
    BoardError, CardType, CurrencyWallet, RewardBoard, RewardBoardViewModel, RewardCard,
    RewardCatalog, RewardKind, RewardOffer, Settings,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
enum Action {
    Reroll,
    Claim(u32),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Reroll), (0u32..7).prop_map(Action::Claim)]
}

fn two_card_board() -> RewardBoard {
    let catalog = RewardCatalog::new(
        RewardCatalog::standard().possible_rewards().to_vec(),
        vec![
            RewardCard::new(1, CardType::Free, RewardOffer::new(RewardKind::Coins, 100)),
            RewardCard::new(2, CardType::Free, RewardOffer::new(RewardKind::Gems, 150)),
        ],
    )
    .unwrap();
    RewardBoard::from_catalog(&catalog, 3)
}

proptest! {
    #[test]
    fn board_invariants_hold(seed in any::<u64>(), actions in prop::collection::vec(action(), 0..40)) {
        let settings = Settings::default().with_seed(seed);
        let mut vm = RewardBoardViewModel::from_settings(&settings);
        let mut last_count = 0;
        let mut credits = 0u32;

        for action in actions {
            let before = vm.board().clone();
            let wallet_before = *vm.wallet();
            match action {
                Action::Reroll => {
                    let result = vm.reroll();
                    if result.is_err() {
                        prop_assert_eq!(vm.board(), &before);
                    }
                    // Claimed cards never change
                    for card in before.cards().iter().filter(|c| c.claimed) {
                        prop_assert_eq!(vm.board().card(card.day), Some(card));
                    }
                }
                Action::Claim(day) => {
                    match vm.claim(day) {
                        Ok(credit) => {
                            credits += 1;
                            prop_assert_eq!(credit.day, day);
                            let after = vm.wallet().coins() + vm.wallet().gems();
                            let prior = wallet_before.coins() + wallet_before.gems();
                            prop_assert_eq!(after, prior + u64::from(credit.amount));
                        }
                        Err(_) => {
                            prop_assert_eq!(vm.board(), &before);
                            prop_assert_eq!(vm.wallet(), &wallet_before);
                        }
                    }
                }
            }

            let count = vm.board().reroll_count();
            prop_assert!(count >= last_count);
            prop_assert!(count <= vm.board().max_rerolls());
            last_count = count;

            for card in vm.cards() {
                prop_assert!(!(card.card_type == CardType::Locked && card.claimed));
            }
        }

        // One credit per claimed card, never more
        let claimed = vm.cards().iter().filter(|c| c.claimed).count() as u32;
        prop_assert_eq!(claimed, credits);
    }

    #[test]
    fn reroll_draws_only_pool_offers(seed in any::<u64>()) {
        let catalog = RewardCatalog::standard();
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = apply_reroll(&two_card_board(), &catalog, &mut rng).unwrap();
        for card in board.cards() {
            prop_assert!(catalog.possible_rewards().contains(&card.offer()));
        }
    }

    #[test]
    fn claim_unknown_day_is_noop(day in 3u32..1000) {
        let board = two_card_board();
        prop_assert_eq!(apply_claim(&board, day), Err(BoardError::ClaimUnknownDay { day }));
    }
}

#[test]
fn scenario_reroll_three_times_then_noop() {
    let catalog = RewardCatalog::standard();
    let mut rng = Pcg32::seed_from_u64(3);
    let mut board = two_card_board();
    for _ in 0..3 {
        board = apply_reroll(&board, &catalog, &mut rng).unwrap();
    }
    assert_eq!(board.reroll_count(), 3);
    assert!(!board.can_reroll());

    let snapshot = board.clone();
    assert!(apply_reroll(&board, &catalog, &mut rng).is_err());
    assert_eq!(board, snapshot);
}

#[test]
fn scenario_claim_twice_credits_once() {
    let mut wallet = CurrencyWallet::default();
    let (board, credit) = apply_claim(&two_card_board(), 1).unwrap();
    wallet.apply(&credit);
    assert!(board.card(1).is_some_and(|c| c.claimed));
    assert_eq!(wallet.coins(), 100);

    assert_eq!(
        apply_claim(&board, 1),
        Err(BoardError::ClaimAlreadyClaimed { day: 1 })
    );
    assert_eq!(wallet.coins(), 100);
}

#[test]
fn scenario_locked_card_claim() {
    let mut vm = RewardBoardViewModel::from_settings(&Settings::default().with_seed(1));
    let wallet = *vm.wallet();
    assert_eq!(vm.claim(4), Err(BoardError::ClaimOnLockedCard { day: 4 }));
    assert!(vm.board().card(4).is_some_and(|c| !c.claimed));
    assert_eq!(vm.wallet(), &wallet);
}

#[test]
fn scenario_reroll_after_claim_keeps_claimed_card() {
    let catalog = RewardCatalog::standard();
    let mut rng = Pcg32::seed_from_u64(11);
    let (board, _) = apply_claim(&two_card_board(), 1).unwrap();
    let rerolled = apply_reroll(&board, &catalog, &mut rng).unwrap();
    assert_eq!(rerolled.card(1), board.card(1));
    assert_eq!(
        rerolled.card(1).map(|c| c.offer()),
        Some(RewardOffer::new(RewardKind::Coins, 100))
    );
}

#[test]
fn animator_follows_a_session() {
    let mut vm = RewardBoardViewModel::from_settings(&Settings::default().with_seed(5));
    let mut animator = BoardAnimator::new(false);
    animator.sync(vm.cards(), vm.wallet());
    run_until_idle(&mut animator);

    vm.claim(1).unwrap();
    vm.reroll().unwrap();
    animator.sync(vm.cards(), vm.wallet());

    let day1 = animator.controller(1).unwrap();
    assert_eq!(day1.claim_state(), ClaimState::Rising);
    assert_eq!(day1.reroll_state(), RerollState::Idle);

    run_until_idle(&mut animator);
    for card in vm.cards() {
        let controller = animator.controller(card.day).unwrap();
        assert_eq!(controller.displayed_offer(), card.offer());
    }
    let display = animator.wallet_display().unwrap();
    assert_eq!(display.coins.displayed(), vm.wallet().coins());
}

#[test]
fn controller_ignores_repeat_observations() {
    let mut card = RewardCard::new(1, CardType::Free, RewardOffer::new(RewardKind::Coins, 100));
    let mut controller = CardAnimationController::mount(&card, false);
    card.claimed = true;
    assert!(controller.observe(&card));
    for _ in 0..10 {
        controller.tick(ANIM_DT);
        assert!(!controller.observe(&card));
    }
}

fn run_until_idle(animator: &mut BoardAnimator) {
    let mut frames = 0;
    while animator.is_animating() {
        animator.frame(1.0 / 60.0);
        frames += 1;
        assert!(frames < 60 * 10, "animations never settled");
    }
}
