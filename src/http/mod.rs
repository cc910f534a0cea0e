//! Coquille HTTP (axum) autour du calcul de rotation.
//!
//! Pages HTML pour le navigateur, plus une petite API JSON. Aucun état
//! global : l'horloge et l'ancre par défaut sont injectées via [`AppState`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
