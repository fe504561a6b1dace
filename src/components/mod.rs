pub mod clickable_word;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod parallax_background;
pub mod project_card;
pub mod projects_section;
pub mod skills;
pub mod terrain_overlay;
