use crate::controller::Controller;
use crate::error::{BookAction, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    BookRequest, BookTransformer, DeleteBookRequest, GetAllBookRequest, GetBookRequest, Payload,
    QueryPairs,
};
use crate::response::{BookPresenter, MessagePresenter, BOOK_DELETED, BOOK_UPDATED};
use crate::route::method_not_allowed;
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use error_stack::Report;
use kernel::KernelError;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>, QueryPairs(req): QueryPairs<GetAllBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::List))
                },
            )
            .post(
                |State(module): State<AppModule>, Payload(req): Payload<BookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Create))
                },
            )
            .fallback(method_not_allowed),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.database().get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Get))
                        .and_then(|res| {
                            res.ok_or_else(|| {
                                ErrorStatus::new(BookAction::Get, Report::new(KernelError::NotFound))
                            })
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 Payload(req): Payload<BookRequest>| async move {
                    Controller::new(BookTransformer, MessagePresenter(BOOK_UPDATED))
                        .intake((id, req))
                        .handle(|dto| async move { module.database().update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Update))
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, MessagePresenter(BOOK_DELETED))
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::on(BookAction::Delete))
                },
            )
            .fallback(method_not_allowed),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::handler::AppModule;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn router() -> Router {
        crate::router(AppModule::new())
    }

    fn payload(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
        json!({
            "name": name,
            "year": 2010,
            "author": "John Doe",
            "summary": "Lorem ipsum dolor sit amet",
            "publisher": "Dicoding Indonesia",
            "pageCount": page_count,
            "readPage": read_page,
            "reading": reading,
        })
    }

    async fn create(router: &Router, body: Value) -> String {
        let (status, value) = send(router, Method::POST, "/books", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        value["data"]["bookId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn create_returns_book_id() {
        let router = router();
        let (status, value) = send(
            &router,
            Method::POST,
            "/books",
            Some(payload("Buku A", 100, 25, false)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "book added");
        assert_eq!(value["data"]["bookId"].as_str().map(str::len), Some(16));
    }

    #[tokio::test]
    async fn create_derives_finished() {
        let router = router();
        let done = create(&router, payload("Done", 100, 100, false)).await;
        let ongoing = create(&router, payload("Ongoing", 100, 99, false)).await;

        let (_, value) = send(&router, Method::GET, &format!("/books/{done}"), None).await;
        assert_eq!(value["data"]["book"]["finished"], true);
        let (_, value) = send(&router, Method::GET, &format!("/books/{ongoing}"), None).await;
        assert_eq!(value["data"]["book"]["finished"], false);
    }

    #[tokio::test]
    async fn create_rejects_missing_name() {
        let router = router();
        let mut body = payload("ignored", 100, 200, false);
        body.as_object_mut().unwrap().remove("name");

        let (status, value) = send(&router, Method::POST, "/books", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({ "status": "fail", "message": "name required" }));
    }

    #[tokio::test]
    async fn create_rejects_null_name() {
        let router = router();
        let mut body = payload("ignored", 100, 10, false);
        body["name"] = Value::Null;

        let (status, value) = send(&router, Method::POST, "/books", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({ "status": "fail", "message": "name required" }));

        let (_, value) = send(&router, Method::GET, "/books", None).await;
        assert_eq!(value["data"]["books"], json!([]));
    }

    #[tokio::test]
    async fn create_rejects_read_page_over_page_count() {
        let router = router();
        let (status, value) = send(
            &router,
            Method::POST,
            "/books",
            Some(payload("Overflow", 100, 101, true)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value,
            json!({ "status": "fail", "message": "readPage must not exceed pageCount" })
        );

        let (_, value) = send(&router, Method::GET, "/books", None).await;
        assert_eq!(value["data"]["books"], json!([]));
    }

    #[tokio::test]
    async fn create_rejects_malformed_payload() {
        let router = router();
        let (status, value) = send(
            &router,
            Method::POST,
            "/books",
            Some(json!({ "name": "Negative", "pageCount": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            value,
            json!({ "status": "fail", "message": "invalid request payload" })
        );
    }

    #[tokio::test]
    async fn get_returns_full_record() {
        let router = router();
        let id = create(&router, payload("Record", 300, 12, true)).await;

        let (status, value) = send(&router, Method::GET, &format!("/books/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["status"], "success");
        let book = &value["data"]["book"];
        assert_eq!(book["id"], id.as_str());
        assert_eq!(book["name"], "Record");
        assert_eq!(book["year"], 2010);
        assert_eq!(book["author"], "John Doe");
        assert_eq!(book["summary"], "Lorem ipsum dolor sit amet");
        assert_eq!(book["publisher"], "Dicoding Indonesia");
        assert_eq!(book["pageCount"], 300);
        assert_eq!(book["readPage"], 12);
        assert_eq!(book["finished"], false);
        assert_eq!(book["reading"], true);
        assert!(book["insertedAt"].is_string());
        assert_eq!(book["insertedAt"], book["updatedAt"]);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let router = router();
        let (status, value) = send(&router, Method::GET, "/books/xxxxxxxxxxxxxxxx", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "status": "fail", "message": "book not found" }));
    }

    #[tokio::test]
    async fn list_projects_and_filters() {
        let router = router();
        let reading = create(&router, payload("Reading", 100, 10, true)).await;
        let idle = create(&router, payload("Idle", 100, 100, false)).await;

        let (status, value) = send(&router, Method::GET, "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({
                "status": "success",
                "data": { "books": [
                    { "id": reading, "name": "Reading", "publisher": "Dicoding Indonesia" },
                    { "id": idle, "name": "Idle", "publisher": "Dicoding Indonesia" },
                ] }
            })
        );

        let (_, value) = send(&router, Method::GET, "/books?reading=1", None).await;
        assert_eq!(
            value["data"]["books"],
            json!([{ "id": reading, "name": "Reading", "publisher": "Dicoding Indonesia" }])
        );

        let (_, value) = send(&router, Method::GET, "/books?reading=0", None).await;
        assert_eq!(value["data"]["books"][0]["id"], idle.as_str());

        let (_, value) = send(&router, Method::GET, "/books?finished=0", None).await;
        assert_eq!(value["data"]["books"][0]["id"], reading.as_str());

        let (_, value) = send(&router, Method::GET, "/books?name=Idle&reading=1", None).await;
        assert_eq!(
            value["data"]["books"],
            json!([{ "id": idle, "name": "Idle", "publisher": "Dicoding Indonesia" }])
        );

        let (_, value) = send(&router, Method::GET, "/books?reading=yes&finished=1", None).await;
        assert_eq!(
            value["data"]["books"],
            json!([{ "id": idle, "name": "Idle", "publisher": "Dicoding Indonesia" }])
        );
    }

    #[tokio::test]
    async fn list_tolerates_repeated_keys() {
        let router = router();
        let reading = create(&router, payload("Reading", 100, 10, true)).await;
        let idle = create(&router, payload("Idle", 100, 100, false)).await;

        let (status, value) = send(&router, Method::GET, "/books?name=Idle&name=Reading", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({
                "status": "success",
                "data": { "books": [
                    { "id": idle, "name": "Idle", "publisher": "Dicoding Indonesia" },
                ] }
            })
        );

        let (status, value) = send(&router, Method::GET, "/books?reading=1&reading=0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["status"], "success");
        assert_eq!(
            value["data"]["books"],
            json!([{ "id": reading, "name": "Reading", "publisher": "Dicoding Indonesia" }])
        );
    }

    #[tokio::test]
    async fn update_validates_then_looks_up() {
        let router = router();
        let id = create(&router, payload("Existing", 100, 10, false)).await;

        let mut nameless = payload("ignored", 100, 10, false);
        nameless.as_object_mut().unwrap().remove("name");
        let (status, value) = send(&router, Method::PUT, &format!("/books/{id}"), Some(nameless)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["message"], "name required to update");

        let (status, value) = send(
            &router,
            Method::PUT,
            &format!("/books/{id}"),
            Some(payload("Existing", 10, 11, false)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["message"], "readPage must not exceed pageCount");

        let (status, value) = send(
            &router,
            Method::PUT,
            "/books/unknown",
            Some(payload("Existing", 10, 1, false)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            value,
            json!({ "status": "fail", "message": "update failed: id not found" })
        );
    }

    #[tokio::test]
    async fn delete_removes_book() {
        let router = router();
        let id = create(&router, payload("Gone", 10, 0, false)).await;
        let uri = format!("/books/{id}");

        let (status, value) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "status": "success", "message": "book deleted" }));

        let (status, _) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, value) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            value,
            json!({ "status": "fail", "message": "delete failed: id not found" })
        );
    }

    #[tokio::test]
    async fn finished_survives_update() {
        let router = router();
        let id = create(&router, payload("A", 100, 100, false)).await;

        let (_, value) = send(&router, Method::GET, "/books?finished=1", None).await;
        assert_eq!(
            value["data"]["books"],
            json!([{ "id": id, "name": "A", "publisher": "Dicoding Indonesia" }])
        );

        let (status, value) = send(
            &router,
            Method::PUT,
            &format!("/books/{id}"),
            Some(payload("A2", 50, 10, false)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "status": "success", "message": "book updated" }));

        let (_, value) = send(&router, Method::GET, &format!("/books/{id}"), None).await;
        let book = &value["data"]["book"];
        assert_eq!(book["name"], "A2");
        assert_eq!(book["pageCount"], 50);
        assert_eq!(book["readPage"], 10);
        assert_eq!(book["finished"], true);
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped() {
        let router = router();
        let (status, value) = send(&router, Method::GET, "/shelves", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "status": "fail", "message": "route not found" }));
    }

    #[tokio::test]
    async fn unsupported_method_is_enveloped() {
        let router = router();
        let (status, value) = send(&router, Method::PATCH, "/books", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(value, json!({ "status": "fail", "message": "method not allowed" }));

        let (status, value) = send(&router, Method::POST, "/books/anything", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(value["message"], "method not allowed");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let router = router();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/books")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }
}
