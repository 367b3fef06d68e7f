use crate::shared::api_utils::{api_url, api_url_with_id};
use crate::shared::errors::ActionError;
use crate::shared::query_params::{build_search, QueryParams};
use contracts::domain::a001_task::request::{
    CreateTaskRequest, DeleteTasksRequest, UpdateTaskRequest,
};
use contracts::domain::a001_task::response::{TaskFacetsResponse, TaskListResponse};
use contracts::shared::table_query::{
    TableQuery, TableQueryDefaults, PARAM_PAGE, PARAM_PER_PAGE, PARAM_SORT,
};
use contracts::shared::ActionResponse;
use gloo_net::http::{Request, Response};

const TASKS_PATH: &str = "/api/tasks";

/// Query parameters of a list request. Page, page size and sort are always
/// sent; advanced filters only while a filter mode is enabled.
pub fn list_params(query: &TableQuery, advanced_filtering: bool) -> QueryParams {
    let request = query.for_request(advanced_filtering);
    let mut params = request.to_params(&TableQueryDefaults::default());
    params.insert(PARAM_PAGE.to_string(), request.page.to_string());
    params.insert(PARAM_PER_PAGE.to_string(), request.per_page.to_string());
    match serde_json::to_string(&request.sort) {
        Ok(sort) => {
            params.insert(PARAM_SORT.to_string(), sort);
        }
        Err(e) => log::warn!("Failed to encode sort: {}", e),
    }
    params
}

/// Interpret the body of a mutation. A non-2xx response still counts as an
/// answer when its body carries an `error`.
pub fn parse_action_body(
    status: u16,
    status_text: &str,
    ok: bool,
    body: &str,
) -> Result<ActionResponse, ActionError> {
    if body.trim().is_empty() {
        return if ok {
            Ok(ActionResponse::ok())
        } else {
            Err(ActionError::status(status, status_text))
        };
    }
    match serde_json::from_str::<ActionResponse>(body) {
        Ok(parsed) if ok || parsed.is_error() => Ok(parsed),
        Ok(_) => Err(ActionError::status(status, status_text)),
        Err(e) if ok => Err(ActionError::Decode(e.to_string())),
        Err(_) => Err(ActionError::status(status, status_text)),
    }
}

async fn read_action_response(response: Response) -> Result<ActionResponse, ActionError> {
    let status = response.status();
    let status_text = response.status_text();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ActionError::Decode(e.to_string()))?;
    let result = parse_action_body(status, &status_text, ok, &body);
    match &result {
        Ok(r) if r.is_error() => log::warn!("task store rejected the request: {:?}", r.error_text()),
        Err(e) => log::error!("task store request failed: {}", e),
        _ => {}
    }
    result
}

/// Fetch one page of tasks
pub async fn fetch_tasks(
    query: &TableQuery,
    advanced_filtering: bool,
) -> Result<TaskListResponse, ActionError> {
    let url = format!(
        "{}{}",
        api_url(TASKS_PATH),
        build_search(&list_params(query, advanced_filtering))
    );
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ActionError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ActionError::status(response.status(), response.status_text()));
    }

    response
        .json()
        .await
        .map_err(|e| ActionError::Decode(e.to_string()))
}

/// Fetch status/priority counts and the estimated hours range
pub async fn fetch_facets() -> Result<TaskFacetsResponse, ActionError> {
    let response = Request::get(&api_url(&format!("{}/facets", TASKS_PATH)))
        .send()
        .await
        .map_err(|e| ActionError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ActionError::status(response.status(), response.status_text()));
    }

    response
        .json()
        .await
        .map_err(|e| ActionError::Decode(e.to_string()))
}

pub async fn create_task(request: CreateTaskRequest) -> Result<ActionResponse, ActionError> {
    let response = Request::post(&api_url(TASKS_PATH))
        .json(&request)
        .map_err(|e| ActionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ActionError::Network(e.to_string()))?;

    read_action_response(response).await
}

pub async fn update_task(request: UpdateTaskRequest) -> Result<ActionResponse, ActionError> {
    let response = Request::put(&api_url_with_id(TASKS_PATH, &request.id))
        .json(&request)
        .map_err(|e| ActionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ActionError::Network(e.to_string()))?;

    read_action_response(response).await
}

pub async fn delete_tasks(ids: Vec<String>) -> Result<ActionResponse, ActionError> {
    let response = Request::post(&api_url(&format!("{}/delete", TASKS_PATH)))
        .json(&DeleteTasksRequest { ids })
        .map_err(|e| ActionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ActionError::Network(e.to_string()))?;

    read_action_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::TaskStatus;
    use contracts::shared::table_query::{FilterCondition, FilterOperator, PARAM_FILTERS, PARAM_STATUS};

    fn query_with_filter() -> TableQuery {
        let mut query = TableQuery::new(&TableQueryDefaults::default());
        query.status = vec![TaskStatus::Todo];
        query.filters = vec![FilterCondition {
            filter_id: "f1".into(),
            id: "title".into(),
            operator: FilterOperator::ILike,
            value: "login".into(),
        }];
        query
    }

    #[test]
    fn test_list_params_always_carry_paging_and_sort() {
        let params = list_params(&query_with_filter(), false);
        assert_eq!(params.get(PARAM_PAGE).map(String::as_str), Some("1"));
        assert_eq!(params.get(PARAM_PER_PAGE).map(String::as_str), Some("10"));
        assert!(params.get(PARAM_SORT).is_some_and(|s| s.contains("createdAt")));
        assert_eq!(params.get(PARAM_STATUS).map(String::as_str), Some("todo"));
        assert!(!params.contains_key(PARAM_FILTERS));
    }

    #[test]
    fn test_list_params_send_filters_in_advanced_mode() {
        let params = list_params(&query_with_filter(), true);
        assert!(params.get(PARAM_FILTERS).is_some_and(|f| f.contains("login")));
    }

    #[test]
    fn test_error_body_on_failure_status_is_an_answer() {
        let parsed = parse_action_body(422, "Unprocessable Entity", false, r#"{"error":"Title taken"}"#);
        assert_eq!(parsed, Ok(ActionResponse::failure("Title taken")));
    }

    #[test]
    fn test_failure_without_error_body_is_an_exception() {
        assert_eq!(
            parse_action_body(500, "Internal Server Error", false, "<html>oops</html>"),
            Err(ActionError::status(500, "Internal Server Error"))
        );
        assert_eq!(
            parse_action_body(502, "", false, ""),
            Err(ActionError::status(502, ""))
        );
    }

    #[test]
    fn test_success_bodies() {
        assert_eq!(parse_action_body(204, "No Content", true, ""), Ok(ActionResponse::ok()));
        assert_eq!(
            parse_action_body(200, "OK", true, r#"{"message":"Saved"}"#),
            Ok(ActionResponse::with_message("Saved"))
        );
        assert!(matches!(
            parse_action_body(200, "OK", true, "not json"),
            Err(ActionError::Decode(_))
        ));
    }
}
