use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::data::{GameData, Settings};
use crate::error::{CoreError, CoreResult};
use crate::id::{ItemId, LocationId};
use crate::item::Item;
use crate::location::{Location, SpecialAction};

/// The validated entity store.
///
/// Location and item definitions are fixed once the world is built. The
/// only runtime mutation is each location's `visited` flag and item set,
/// reached through [`World::location_mut`], [`World::take_item`] and
/// [`World::place_item`].
#[derive(Debug, Clone)]
pub struct World {
    settings: Settings,
    locations: BTreeMap<LocationId, Location>,
    items: BTreeMap<ItemId, Item>,

    // Index
    by_name_lower: HashMap<String, ItemId>,
}

impl World {
    /// Build and validate a world from decoded game data.
    pub fn from_data(data: GameData) -> CoreResult<Self> {
        let GameData {
            settings,
            locations: location_list,
            items: item_list,
        } = data;

        if location_list.is_empty() {
            return Err(CoreError::NoLocations);
        }

        let mut locations = BTreeMap::new();
        for location in location_list {
            let id = location.id;
            if locations.insert(id, location).is_some() {
                return Err(CoreError::DuplicateLocation(id));
            }
        }

        let mut items = BTreeMap::new();
        let mut by_name_lower = HashMap::new();
        for item in item_list {
            let id = item.id;
            if by_name_lower.insert(item.name.to_lowercase(), id).is_some() {
                return Err(CoreError::DuplicateItemName(item.name));
            }
            if items.insert(id, item).is_some() {
                return Err(CoreError::DuplicateItem(id));
            }
        }

        let world = Self {
            settings,
            locations,
            items,
            by_name_lower,
        };
        world.validate()?;
        Ok(world)
    }

    /// Decode and validate a JSON document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Self::from_data(GameData::from_json(json)?)
    }

    /// Read, decode and validate a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        Self::from_data(GameData::from_path(path)?)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    fn validate(&self) -> CoreResult<()> {
        let mut placed: HashMap<ItemId, LocationId> = HashMap::new();

        for location in self.locations.values() {
            for (command, destination) in &location.available_commands {
                if let Some(target) = destination {
                    if !self.locations.contains_key(target) {
                        return Err(CoreError::DanglingDestination {
                            location: location.id,
                            command: command.clone(),
                            target: *target,
                        });
                    }
                }
            }

            for target in &location.sub_locations {
                if !self.locations.contains_key(target) {
                    return Err(CoreError::UnknownSubLocation {
                        location: location.id,
                        target: *target,
                    });
                }
            }

            for (command, item) in &location.requirements {
                match location.command(command) {
                    Some((_, Some(_))) => {}
                    _ => {
                        return Err(CoreError::RequirementNotMovement {
                            location: location.id,
                            command: command.clone(),
                        });
                    }
                }
                if !self.items.contains_key(item) {
                    return Err(CoreError::UnknownRequiredItem {
                        location: location.id,
                        command: command.clone(),
                        item: *item,
                    });
                }
            }

            for &item in &location.items {
                if !self.items.contains_key(&item) {
                    return Err(CoreError::MissingItem {
                        location: location.id,
                        item,
                    });
                }
                if let Some(first) = placed.insert(item, location.id) {
                    return Err(CoreError::ItemPlacedTwice {
                        item,
                        first,
                        second: location.id,
                    });
                }
            }

            if let SpecialAction::Puzzle {
                reward: Some(reward),
                ..
            } = &location.special
            {
                if !self.items.contains_key(reward) {
                    return Err(CoreError::UnknownItem(*reward));
                }
                if !location.has_item(*reward) {
                    return Err(CoreError::RewardNotHere {
                        location: location.id,
                        item: *reward,
                    });
                }
            }
        }

        for item in self.items.values() {
            if !placed.contains_key(&item.id) {
                return Err(CoreError::ItemNotPlaced(item.id));
            }
            self.check_item_position(item.id, "start_position", Some(item.start_position))?;
            self.check_item_position(item.id, "target_position", item.target_position)?;
        }

        self.check_settings_location("start_location", self.settings.start_location)?;
        self.check_settings_location("goal_location", self.settings.goal_location)?;
        Ok(())
    }

    fn check_item_position(
        &self,
        item: ItemId,
        field: &'static str,
        position: Option<LocationId>,
    ) -> CoreResult<()> {
        match position {
            Some(target) if !self.locations.contains_key(&target) => {
                Err(CoreError::UnknownItemPosition {
                    item,
                    field,
                    target,
                })
            }
            _ => Ok(()),
        }
    }

    fn check_settings_location(
        &self,
        field: &'static str,
        position: Option<LocationId>,
    ) -> CoreResult<()> {
        match position {
            Some(target) if !self.locations.contains_key(&target) => {
                Err(CoreError::UnknownSettingsLocation { field, target })
            }
            _ => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Settings carried by the game data.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a location by id.
    pub fn location(&self, id: LocationId) -> CoreResult<&Location> {
        self.locations
            .get(&id)
            .ok_or(CoreError::UnknownLocation(id))
    }

    /// Get a mutable location by id.
    pub fn location_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or(CoreError::UnknownLocation(id))
    }

    /// Get an item by id.
    pub fn item(&self, id: ItemId) -> CoreResult<&Item> {
        self.items.get(&id).ok_or(CoreError::UnknownItem(id))
    }

    /// Find an item by name (case-insensitive, surrounding whitespace ignored).
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.by_name_lower
            .get(&name.trim().to_lowercase())
            .and_then(|id| self.items.get(id))
    }

    /// All locations, ordered by id.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All items, ordered by id.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The location whose item set currently holds the item, if any.
    pub fn holder_of(&self, item: ItemId) -> Option<LocationId> {
        self.locations
            .values()
            .find(|location| location.has_item(item))
            .map(|location| location.id)
    }

    // -----------------------------------------------------------------------
    // Item placement
    // -----------------------------------------------------------------------

    /// Remove an item from a location's item set.
    ///
    /// Returns `Ok(false)` when the item was not there.
    pub fn take_item(&mut self, location: LocationId, item: ItemId) -> CoreResult<bool> {
        self.item(item)?;
        Ok(self.location_mut(location)?.remove_item(item))
    }

    /// Put an item into a location's item set.
    pub fn place_item(&mut self, location: LocationId, item: ItemId) -> CoreResult<()> {
        self.item(item)?;
        self.location_mut(location)?.add_item(item);
        Ok(())
    }
}
