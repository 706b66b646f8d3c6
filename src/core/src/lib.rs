pub mod simulator;
pub use simulator::*;

pub mod calendar;
pub mod division;
pub mod error;
pub mod event;
pub mod fighter;
pub mod matchmaking;
pub mod planner;
pub mod ranking;
pub mod rating;
pub mod simulation;
pub mod world;

pub mod utils;

pub use calendar::{PlanConfig, event_dates_in_horizon, is_event_day, next_saturday};
pub use division::Division;
pub use error::{SimulationError, SimulationResult};

pub use event::{
    CardSlot, Event, EventKind, EventNote, Fight, FightResult, FightStatus, NewsService, NoteCategory,
    headline_notes,
};

pub use fighter::{
    BoundedHistory, DEFAULT_RATING, Fighter, FighterBuilder, FighterRank, RANKED_SLOTS, RankPoint, RatingPoint,
};

pub use matchmaking::{PairHistory, PairKey, pick_best_opponent, score_pair};

pub use planner::{
    EventPlanner, EventRunResult, EventRunner, PlanningContext, PlanningResult, WithdrawalResult,
};

pub use ranking::RankingManager;
pub use simulation::{FightOutcome, FightSimulator, FinishDetails, FinishKind, SimConfig};
pub use world::{MemoryStateStore, SaveConfig, SimRng, StateStore, WorldState};

pub use utils::*;
