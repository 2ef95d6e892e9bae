//! Daily Rewards entry point
//!
//! Native: runs a scripted session and logs every snapshot.
//! WASM: the page drives `platform::web::DailyRewardsHandle` directly.

#[cfg(not(target_arch = "wasm32"))]
use daily_rewards::{
    RewardBoardViewModel, Settings, anim::BoardAnimator, consts::ANIM_DT, platform,
};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    platform::init_logging();
    log::info!("Daily Rewards (native) starting...");

    // Optional settings file as the first argument
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut vm = RewardBoardViewModel::from_settings(&settings);
    let mut animator = BoardAnimator::new(settings.reduced_motion);
    animator.sync(vm.cards(), vm.wallet());
    settle(&mut animator);
    print_frame(&vm);

    println!("\n> claim day 1");
    report(vm.claim(1).map(|c| format!("+{} {}", c.amount, c.kind.label())));
    animator.sync(vm.cards(), vm.wallet());
    settle(&mut animator);

    println!("\n> claim day 1 again");
    report(vm.claim(1).map(|c| format!("+{} {}", c.amount, c.kind.label())));

    println!("\n> claim day 4 (locked)");
    report(vm.claim(4).map(|c| format!("+{} {}", c.amount, c.kind.label())));

    while vm.can_reroll() {
        println!("\n> reroll");
        report(vm.reroll().map(|_| vm.reroll_info()));
        animator.sync(vm.cards(), vm.wallet());
        settle(&mut animator);
        print_frame(&vm);
    }

    println!("\n> reroll (exhausted)");
    report(vm.reroll().map(|_| vm.reroll_info()));

    println!("\n{}", serde_json::to_string_pretty(&vm.frame())?);
    Ok(())
}

/// Run 60 Hz frames until every animation is at rest
#[cfg(not(target_arch = "wasm32"))]
fn settle(animator: &mut BoardAnimator) {
    let mut frames = 0u32;
    while animator.is_animating() {
        animator.frame(2.0 * ANIM_DT);
        frames += 1;
    }
    log::debug!("Animations settled after {} frames", frames);
}

#[cfg(not(target_arch = "wasm32"))]
fn report<E: std::fmt::Display>(result: Result<String, E>) {
    match result {
        Ok(msg) => println!("  ok: {}", msg),
        Err(err) => println!("  ignored: {}", err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_frame(vm: &RewardBoardViewModel) {
    let frame = vm.frame();
    println!("COINS: {}  GEMS: {}", frame.coins, frame.gems);
    for card in &frame.cards {
        let marker = if card.is_current_day { "*" } else { " " };
        println!("{} {:<6} {}", marker, card.title, card.aria_label);
    }
    println!("{}", frame.reroll_info);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the exported handle, this is just to satisfy the compiler
}
