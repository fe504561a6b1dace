pub mod about;
pub mod all_projects;
pub mod home;
pub mod not_found;
pub mod project_detail;
