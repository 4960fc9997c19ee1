use std::cell::RefCell;

use common::dispatch::{dispatch, Action, PromotionPage, Transport};
use common::model::form::{Field, FormState};
use common::model::results::RESULT_COLUMNS;
use common::requests::{ApiError, ApiRequest, HttpMethod, RawResponse};
use futures::executor::block_on;
use serde_json::{json, Value};

/// Answers every request with the same scripted result and remembers what it saw.
struct ScriptedTransport {
    reply: Result<RawResponse, ApiError>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    fn json(status: u16, body: Value) -> Self {
        Self::raw(status, body.to_string())
    }

    fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Ok(RawResponse {
                status,
                body: body.into(),
            }),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn offline() -> Self {
        Self {
            reply: Err(ApiError::Transport("connection refused".to_string())),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn only_request(&self) -> ApiRequest {
        let sent = self.sent.borrow();
        assert_eq!(sent.len(), 1, "expected exactly one request");
        assert_eq!(sent[0].content_type, "application/json");
        sent[0].clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn page_with(form: FormState) -> PromotionPage {
    PromotionPage {
        form,
        ..PromotionPage::default()
    }
}

fn filled_form() -> FormState {
    FormState {
        id: String::new(),
        productid: "SKU1".to_string(),
        category: "electronics".to_string(),
        available: "true".to_string(),
        discount: "10".to_string(),
    }
}

#[test]
fn create_decodes_server_record_into_form() {
    init_logging();
    let transport = ScriptedTransport::json(
        201,
        json!({ "id": 7, "productid": "SKU1", "category": "electronics", "available": true, "discount": 10 }),
    );
    let mut page = page_with(filled_form());

    block_on(dispatch(&mut page, &transport, Action::Create));

    let request = transport.only_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/promotions");
    assert_eq!(
        request.body_json().unwrap().map(|b| serde_json::from_str::<Value>(&b).unwrap()),
        Some(json!({ "productid": "SKU1", "category": "electronics", "available": true, "discount": "10" }))
    );
    assert_eq!(page.form.id, "7");
    assert_eq!(page.form.available, "true");
    assert_eq!(page.status, "Success");
}

#[test]
fn update_and_cancel_address_the_form_id() {
    init_logging();
    let record = json!({ "id": 5, "productid": "P", "category": "c", "available": false, "discount": "1" });

    let transport = ScriptedTransport::json(200, record.clone());
    let mut page = page_with(FormState {
        id: "5".to_string(),
        ..filled_form()
    });
    block_on(dispatch(&mut page, &transport, Action::Update));
    let request = transport.only_request();
    assert_eq!((request.method, request.path.as_str()), (HttpMethod::Put, "/promotions/5"));
    assert!(request.body.is_some());

    let transport = ScriptedTransport::json(200, record);
    block_on(dispatch(&mut page, &transport, Action::Cancel));
    let request = transport.only_request();
    assert_eq!(request.path, "/promotions/5/cancel");
    assert!(request.body.is_none());
    assert_eq!(page.form.available, "false");
    assert_eq!(page.status, "Success");
}

#[test]
fn retrieve_failure_clears_fields_and_shows_message() {
    init_logging();
    let transport = ScriptedTransport::json(404, json!({ "message": "not found" }));
    let mut page = page_with(FormState {
        id: "99".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Retrieve));

    assert_eq!(transport.only_request().path, "/promotions/99");
    for field in Field::EDITABLE {
        assert_eq!(page.form.get(field), "", "{field:?} should be empty");
    }
    assert_eq!(page.status, "not found");
}

#[test]
fn update_failure_keeps_form_and_shows_message() {
    init_logging();
    let transport = ScriptedTransport::json(415, json!({ "message": "Content-Type must be application/json" }));
    let mut page = page_with(FormState {
        id: "5".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Update));

    assert_eq!(page.form.productid, "SKU1");
    assert_eq!(page.status, "Content-Type must be application/json");
}

#[test]
fn delete_success_clears_fields() {
    init_logging();
    let transport = ScriptedTransport::raw(204, "");
    let mut page = page_with(FormState {
        id: "3".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Delete));

    let request = transport.only_request();
    assert_eq!((request.method, request.path.as_str()), (HttpMethod::Delete, "/promotions/3"));
    assert_eq!(page.form.productid, "");
    assert_eq!(page.form.discount, "");
    assert_eq!(page.status, "Promotion Deleted!");
}

#[test]
fn delete_failure_ignores_error_body() {
    init_logging();
    let transport = ScriptedTransport::json(404, json!({ "message": "not found" }));
    let mut page = page_with(FormState {
        id: "3".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Delete));

    assert_eq!(page.status, "Server error!");
    assert_eq!(page.form.productid, "SKU1");
}

#[test]
fn search_without_filters_lists_collection_in_order() {
    init_logging();
    let transport = ScriptedTransport::json(
        200,
        json!([
            { "id": 2, "productid": "B", "category": "tools", "available": true, "discount": 5 },
            { "id": 1, "productid": "A", "category": "garden", "available": false, "discount": "7.5" }
        ]),
    );
    let mut page = PromotionPage::new();

    block_on(dispatch(&mut page, &transport, Action::Search));

    assert_eq!(transport.only_request().path, "/promotions");
    let results = page.results.expect("search results");
    assert_eq!(RESULT_COLUMNS, ["ID", "ProductID", "Category", "Available", "Discount"]);
    assert_eq!(results.rows.len(), 2);
    assert_eq!(results.rows[0][0], "2");
    assert_eq!(results.rows[1], ["1", "A", "garden", "false", "7.5"].map(String::from));
    assert_eq!(page.status, "Success");
}

#[test]
fn search_with_category_only() {
    init_logging();
    let transport = ScriptedTransport::json(200, json!([]));
    let mut page = page_with(FormState {
        category: "tools".to_string(),
        ..FormState::default()
    });

    block_on(dispatch(&mut page, &transport, Action::Search));

    assert_eq!(transport.only_request().path, "/promotions?category=tools");
    assert_eq!(page.results.map(|r| r.rows.len()), Some(0));
}

#[test]
fn search_replaces_previous_results() {
    init_logging();
    let mut page = PromotionPage::new();

    let first = ScriptedTransport::json(200, json!([{ "id": 1 }, { "id": 2 }]));
    block_on(dispatch(&mut page, &first, Action::Search));
    let second = ScriptedTransport::json(200, json!([{ "id": 3 }]));
    block_on(dispatch(&mut page, &second, Action::Search));

    let rows = page.results.map(|r| r.rows).unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "3");
}

#[test]
fn search_failure_shows_message_and_keeps_results() {
    init_logging();
    let mut page = PromotionPage::new();
    let listed = ScriptedTransport::json(200, json!([{ "id": 1, "productid": "A" }]));
    block_on(dispatch(&mut page, &listed, Action::Search));

    let failing = ScriptedTransport::json(400, json!({ "message": "bad query" }));
    block_on(dispatch(&mut page, &failing, Action::Search));

    assert_eq!(failing.only_request().path, "/promotions");
    assert_eq!(page.status, "bad query");
    let rows = page.results.map(|r| r.rows).unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "A");
}

#[test]
fn cancel_failure_shows_message() {
    init_logging();
    let transport = ScriptedTransport::json(404, json!({ "message": "Promotion with id '5' was not found." }));
    let mut page = page_with(FormState {
        id: "5".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Cancel));

    let request = transport.only_request();
    assert_eq!((request.method, request.path.as_str()), (HttpMethod::Put, "/promotions/5/cancel"));
    assert_eq!(page.status, "Promotion with id '5' was not found.");
    assert_eq!(page.form.productid, "SKU1");
    assert_eq!(page.form.available, "true");
}

#[test]
fn retrieve_after_clear_restores_availability_choice() {
    init_logging();
    let mut page = page_with(FormState {
        id: "6".to_string(),
        ..filled_form()
    });
    block_on(dispatch(&mut page, &ScriptedTransport::offline(), Action::Clear));
    assert_eq!(page.form.get(Field::Available), "");

    page.form.set(Field::Id, "6".to_string());
    let transport = ScriptedTransport::json(200, json!({ "id": 6, "productid": "P", "available": true }));
    block_on(dispatch(&mut page, &transport, Action::Retrieve));

    assert_eq!(page.form.get(Field::Available), "true");
}

#[test]
fn missing_message_falls_back_to_generic_text() {
    init_logging();
    let transport = ScriptedTransport::raw(500, "Internal Server Error");
    let mut page = page_with(filled_form());

    block_on(dispatch(&mut page, &transport, Action::Create));

    assert_eq!(page.status, "Server error!");
    assert_eq!(page.form.productid, "SKU1");
}

#[test]
fn network_failure_ends_in_status_message() {
    init_logging();
    let transport = ScriptedTransport::offline();
    let mut page = page_with(FormState {
        id: "8".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Retrieve));

    assert_eq!(page.status, "Server error!");
    assert_eq!(page.form.category, "");
    assert_eq!(page.form.id, "8");
}

#[test]
fn clear_is_local_and_idempotent() {
    init_logging();
    let transport = ScriptedTransport::offline();
    let mut page = page_with(FormState {
        id: "4".to_string(),
        ..filled_form()
    });

    block_on(dispatch(&mut page, &transport, Action::Clear));
    let once = page.clone();
    block_on(dispatch(&mut page, &transport, Action::Clear));

    assert!(transport.sent.borrow().is_empty());
    assert_eq!(page, once);
    assert_eq!(page.form, FormState::default());
}

#[test]
fn last_completion_wins_for_overlapping_requests() {
    init_logging();
    let mut page = page_with(FormState {
        id: "1".to_string(),
        ..FormState::default()
    });

    let first = page.begin(Action::Retrieve).expect("retrieve request");
    let second = page.begin(Action::Retrieve).expect("retrieve request");

    let slow = ScriptedTransport::json(200, json!({ "id": 1, "productid": "slow" }));
    let fast = ScriptedTransport::json(200, json!({ "id": 1, "productid": "fast" }));
    let fast_done = block_on(common::dispatch::perform(&fast, second));
    let slow_done = block_on(common::dispatch::perform(&slow, first));

    page.complete(fast_done);
    page.complete(slow_done);

    assert_eq!(page.form.productid, "slow");
}
