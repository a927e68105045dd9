pub mod delete;
pub mod show;

pub const USER_NOT_FOUND: &str = "Utilisateur introuvable";
