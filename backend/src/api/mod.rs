//! Wiki API route handlers and module exports.

mod pets;
pub use pets::{find_all_pets, pet_page_data};

mod eggs;
pub use eggs::{egg_page_data, find_all_eggs};

mod rarities;
pub use rarities::{list_passive_state_keys, list_rarities};
