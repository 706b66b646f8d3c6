use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("fighter {id} not found in division {division}")]
    FighterNotFound { division: String, id: u32 },

    #[error("division not found: {0}")]
    DivisionNotFound(String),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
