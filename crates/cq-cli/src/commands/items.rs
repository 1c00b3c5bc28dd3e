use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data: &Path) -> Result<(), String> {
    let world = super::load_world(data)?;

    if world.item_count() == 0 {
        println!("  No items found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Starts in", "Target", "Description"]);

    for item in world.items() {
        let start = match world.location(item.start_position) {
            Ok(location) => format!("{} ({})", location.name, location.id),
            Err(_) => item.start_position.to_string(),
        };
        let target = match item.target_position {
            Some(id) => world
                .location(id)
                .map(|location| format!("{} ({id})", location.name))
                .unwrap_or_else(|_| id.to_string()),
            None => "-".to_string(),
        };
        let desc = if item.description.chars().count() > 60 {
            let short: String = item.description.chars().take(57).collect();
            format!("{short}...")
        } else if item.description.is_empty() {
            "-".to_string()
        } else {
            item.description.clone()
        };

        table.add_row(vec![item.id.to_string(), item.name.clone(), start, target, desc]);
    }

    println!("{table}");
    println!();
    println!("  {} items", world.item_count());

    Ok(())
}
