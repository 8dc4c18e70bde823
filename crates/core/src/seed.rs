//! Seed documents used when nothing has been persisted yet.

use crate::goal::{Goal, User};
use crate::state::TrackerState;

/// Source of the initial document.
pub trait SeedProvider: Send + Sync {
    /// Build a fresh seed document. Every goal starts at zero and the
    /// history is empty.
    fn seed(&self) -> TrackerState;
}

/// A fixed state can act as its own seed.
impl SeedProvider for TrackerState {
    fn seed(&self) -> TrackerState {
        self.clone()
    }
}

/// The five-person first-quarter deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSeed;

impl SeedProvider for DefaultSeed {
    fn seed(&self) -> TrackerState {
        TrackerState::new()
            .with_user(
                "Robert",
                User::new()
                    .with_goal("Facturación", goal(2000.0, "USD"))
                    .with_goal("Contenido", goal(36.0, "Piezas"))
                    .with_goal("Libros", goal(12.0, "Libros")),
            )
            .with_user(
                "Javier",
                User::new()
                    .with_goal("Peso a Perder", goal(12.0, "Kg"))
                    .with_goal("Capital Neto", goal(2500.0, "USD"))
                    .with_goal("Cursos Platzi", goal(7.0, "Cursos")),
            )
            .with_user(
                "Jesus",
                User::new()
                    .with_goal("Vocabulario Inglés", goal(900.0, "Palabras"))
                    .with_goal("Python Scripts", goal(3.0, "Scripts"))
                    .with_goal("Protocolo Salud Mental", goal(90.0, "Días")),
            )
            .with_user(
                "Ricardo",
                User::new()
                    .with_goal("Capital", goal(250.0, "USD"))
                    .with_goal("Educación", goal(425.0, "Clases"))
                    .with_goal("Escritura", goal(172.0, "Escritos")),
            )
            .with_user(
                "Angel",
                User::new().with_goal("Soundbank Presets", goal(50.0, "Presets")),
            )
    }
}

fn goal(target: f64, unit: &str) -> Goal {
    Goal {
        target,
        current: 0.0,
        unit: unit.to_string(),
    }
}
