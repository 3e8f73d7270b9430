//! Savings goals and the progress made towards them.

mod core;
mod handlers;
mod payload;

pub use core::{Goal, GoalPatch, NewGoal};
pub use handlers::{
    create_goal_endpoint, delete_goal_endpoint, get_goal_endpoint, list_goals_endpoint,
    update_goal_endpoint,
};
pub use payload::GoalPayload;
