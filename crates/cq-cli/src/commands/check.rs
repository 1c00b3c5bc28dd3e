use std::path::Path;

use cq_engine::EngineConfig;

pub fn run(data: &Path) -> Result<(), String> {
    let world = super::load_world(data)?;
    let config = EngineConfig::from_settings(world.settings());

    let targeted = world
        .items()
        .filter(|item| item.target_position.is_some())
        .count();
    let puzzles = world
        .locations()
        .filter(|location| location.special.is_handler())
        .count();

    println!("  All checks passed for '{}'.", data.display());
    println!(
        "  {} locations, {} items ({targeted} with a target), {puzzles} puzzles",
        world.location_count(),
        world.item_count()
    );
    println!(
        "  Start at {}, {} moves, deliver {} items to {}",
        config.start_location, config.max_moves, config.required_items, config.goal_location
    );

    Ok(())
}
