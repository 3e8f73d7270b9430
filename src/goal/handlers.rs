//! HTTP handlers for savings goals.

use axum::{
    Json,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    database_id::GoalId,
    endpoints::{self, format_endpoint},
    goal::{Goal, GoalPayload},
    stores::{GoalStore, sqlite::SQLiteGoalStore},
    transaction::DeleteResponse,
};

/// The state needed by the goal endpoints.
#[derive(Debug, Clone)]
pub struct GoalState {
    /// The store for managing savings goals.
    pub goal_store: SQLiteGoalStore,
}

impl FromRef<AppState> for GoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            goal_store: state.goal_store.clone(),
        }
    }
}

/// A route handler for creating a new savings goal.
pub async fn create_goal_endpoint(
    State(state): State<GoalState>,
    payload: Result<Json<GoalPayload>, JsonRejection>,
) -> Result<Response, Error> {
    let Json(payload) = payload?;
    let new_goal = payload
        .into_new_goal()
        .inspect_err(|error| tracing::debug!("rejected new goal: {error}"))?;

    let goal = state.goal_store.create(new_goal)?;
    tracing::info!("created goal {}", goal.id);

    let location = format_endpoint(endpoints::GOAL_API, goal.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(goal)).into_response())
}

/// A route handler for listing goals, earliest deadline first.
pub async fn list_goals_endpoint(State(state): State<GoalState>) -> Result<Json<Vec<Goal>>, Error> {
    state.goal_store.list_all().map(Json)
}

/// A route handler for getting a single savings goal.
pub async fn get_goal_endpoint(
    State(state): State<GoalState>,
    path: Result<Path<GoalId>, PathRejection>,
) -> Result<Json<Goal>, Error> {
    let Path(goal_id) = path?;
    state
        .goal_store
        .get(goal_id)?
        .map(Json)
        .ok_or(Error::NotFound)
}

/// A route handler for changing some or all fields of a goal.
///
/// Sending `"deadline": null` removes the deadline.
pub async fn update_goal_endpoint(
    State(state): State<GoalState>,
    path: Result<Path<GoalId>, PathRejection>,
    payload: Result<Json<GoalPayload>, JsonRejection>,
) -> Result<Json<Goal>, Error> {
    let Path(goal_id) = path?;
    let Json(payload) = payload?;
    let patch = payload
        .into_patch()
        .inspect_err(|error| tracing::debug!("rejected update to goal {goal_id}: {error}"))?;

    let goal = state
        .goal_store
        .update(goal_id, patch)?
        .ok_or(Error::NotFound)?;
    tracing::info!("updated goal {goal_id}");

    Ok(Json(goal))
}

/// A route handler for deleting a savings goal.
pub async fn delete_goal_endpoint(
    State(state): State<GoalState>,
    path: Result<Path<GoalId>, PathRejection>,
) -> Result<Json<DeleteResponse>, Error> {
    let Path(goal_id) = path?;
    if !state.goal_store.delete(goal_id)? {
        return Err(Error::NotFound);
    }

    tracing::info!("deleted goal {goal_id}");

    Ok(Json(DeleteResponse {
        message: "Goal deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
mod goal_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        error::ErrorResponse,
        goal::Goal,
        transaction::DeleteResponse,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_goal(server: &TestServer, body: serde_json::Value) -> Goal {
        let response = server.post(endpoints::GOALS_API).json(&body).await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Goal>()
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let server = get_test_server();

        let goal = create_goal(&server, json!({"name": "Holiday", "target_amount": 2000})).await;

        assert_eq!(
            goal,
            Goal {
                id: goal.id,
                name: "Holiday".to_owned(),
                target_amount: 2000.0,
                current_amount: 0.0,
                deadline: None,
            }
        );
    }

    #[tokio::test]
    async fn create_allows_saving_past_target() {
        let server = get_test_server();

        let goal = create_goal(
            &server,
            json!({"name": "Car", "target_amount": 5000, "current_amount": 7500}),
        )
        .await;

        assert_eq!(goal.current_amount, 7500.0);
    }

    #[tokio::test]
    async fn create_rejects_invalid_goal() {
        let server = get_test_server();

        for body in [
            json!({"name": "Bike", "target_amount": 0}),
            json!({"name": "Bike", "target_amount": 10, "current_amount": -1}),
            json!({"name": "  ", "target_amount": 10}),
            json!({"target_amount": 10}),
        ] {
            let response = server.post(endpoints::GOALS_API).json(&body).await;

            response.assert_status_bad_request();
            assert!(!response.json::<ErrorResponse>().error.is_empty());
        }

        assert_eq!(
            server.get(endpoints::GOALS_API).await.json::<Vec<Goal>>(),
            vec![]
        );
    }

    #[tokio::test]
    async fn list_puts_goals_without_deadline_last() {
        let server = get_test_server();
        create_goal(&server, json!({"name": "Someday", "target_amount": 1})).await;
        create_goal(
            &server,
            json!({"name": "Summer", "target_amount": 1, "deadline": "2024-12-01"}),
        )
        .await;
        create_goal(
            &server,
            json!({"name": "Winter", "target_amount": 1, "deadline": "2024-06-01"}),
        )
        .await;

        let names: Vec<_> = server
            .get(endpoints::GOALS_API)
            .await
            .json::<Vec<Goal>>()
            .into_iter()
            .map(|goal| goal.name)
            .collect();

        assert_eq!(names, vec!["Winter", "Summer", "Someday"]);
    }

    #[tokio::test]
    async fn get_missing_goal_is_not_found() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::GOAL_API, 1))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let server = get_test_server();
        let goal = create_goal(
            &server,
            json!({"name": "Bike", "target_amount": 800, "deadline": "2024-09-01"}),
        )
        .await;

        let response = server
            .put(&format_endpoint(endpoints::GOAL_API, goal.id))
            .json(&json!({"current_amount": "250"}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Goal>(),
            Goal {
                current_amount: 250.0,
                ..goal
            }
        );
    }

    #[tokio::test]
    async fn update_with_null_deadline_clears_it() {
        let server = get_test_server();
        let goal = create_goal(
            &server,
            json!({"name": "Bike", "target_amount": 800, "deadline": "2024-09-01"}),
        )
        .await;
        let path = format_endpoint(endpoints::GOAL_API, goal.id);

        server
            .put(&path)
            .json(&json!({"deadline": null}))
            .await
            .assert_status_ok();

        assert_eq!(server.get(&path).await.json::<Goal>().deadline, None);
    }

    #[tokio::test]
    async fn rejected_update_leaves_goal_unchanged() {
        let server = get_test_server();
        let goal = create_goal(&server, json!({"name": "Bike", "target_amount": 800})).await;
        let path = format_endpoint(endpoints::GOAL_API, goal.id);

        server
            .put(&path)
            .json(&json!({"name": "Car", "target_amount": -5}))
            .await
            .assert_status_bad_request();

        assert_eq!(server.get(&path).await.json::<Goal>(), goal);
    }

    #[tokio::test]
    async fn delete_removes_goal() {
        let server = get_test_server();
        let goal = create_goal(&server, json!({"name": "Bike", "target_amount": 800})).await;
        let path = format_endpoint(endpoints::GOAL_API, goal.id);

        let response = server.delete(&path).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<DeleteResponse>().message,
            "Goal deleted successfully"
        );
        server.delete(&path).await.assert_status_not_found();
    }
}
