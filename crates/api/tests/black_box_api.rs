use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, redirect, StatusCode};
use serde_json::Value;

use stocklist_api::app::{
    build_app,
    consts::{attrs, urls, views},
    flash::FlashStore,
    services::AppServices,
};
use stocklist_infra::InMemoryServices;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, demo data, ephemeral port.
        let services = InMemoryServices::with_demo_data().expect("demo data is valid");
        let app = build_app(
            AppServices::from(services),
            Arc::new(FlashStore::new(Duration::from_secs(60))),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Redirects are asserted on, never followed.
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            base_url,
            client,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn submit(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .unwrap()
    }

    /// GET a view, presenting the flash cookie from a previous redirect.
    async fn view(&self, path: &str, flash_cookie: Option<&str>) -> Value {
        let mut req = self.client.get(self.url(path));
        if let Some(cookie) = flash_cookie {
            req = req.header(header::COOKIE, cookie);
        }
        let res = req.send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// `(Location, flash cookie pair)` of a redirect.
fn redirect_target(res: &reqwest::Response) -> (String, String) {
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let location = res.headers()[header::LOCATION].to_str().unwrap().to_string();
    let cookie = res.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    (location, cookie)
}

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn index_lists_demo_stock_with_categories() {
    let srv = TestServer::spawn().await;

    let body = srv.view(urls::STOCK_LIST, None).await;
    assert_eq!(body["view"], views::STOCK_LIST_INDEX);
    assert_eq!(body["model"][attrs::STOCK_ITEM_LIST].as_array().unwrap().len(), 6);
    assert_eq!(body["model"][attrs::CATEGORIES].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn register_then_list_shows_item_and_success_banner() {
    let srv = TestServer::spawn().await;

    let res = srv
        .submit(
            urls::STOCK_LIST_REGISTER,
            &[("partName", "Gimbal 3-axis"), ("categoryId", "5"), ("centerId", "2"), ("quantity", "7")],
        )
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);

    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"][attrs::SUCCESS_MSG].is_string());
    assert!(names(&body["model"][attrs::STOCK_ITEM_LIST]).contains(&"Gimbal 3-axis".to_string()));

    // Shown once only.
    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"].get(attrs::SUCCESS_MSG).is_none());
}

#[tokio::test]
async fn duplicate_and_invalid_registrations_bounce_back_with_error() {
    let srv = TestServer::spawn().await;

    let res = srv
        .submit(
            urls::STOCK_LIST_REGISTER,
            &[("partName", "prop 5045"), ("categoryId", "3"), ("quantity", "1")],
        )
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST_REGISTER);
    let body = srv.view(&location, Some(&cookie)).await;
    assert_eq!(body["view"], views::STOCK_LIST_REGISTER);
    assert!(body["model"][attrs::ERROR_MSG].as_str().unwrap().contains("already exists"));

    let res = srv
        .submit(urls::STOCK_LIST_REGISTER, &[("partName", ""), ("quantity", "abc")])
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST_REGISTER);
    let body = srv.view(&location, Some(&cookie)).await;
    let msg = body["model"][attrs::ERROR_MSG].as_str().unwrap();
    assert!(msg.contains("part name is required"));
    assert!(msg.contains("quantity is required"));

    let list = srv.view(urls::STOCK_LIST, None).await;
    assert_eq!(list["model"][attrs::STOCK_ITEM_LIST].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn update_through_html_form_override() {
    let srv = TestServer::spawn().await;

    let form = srv.view(&urls::stock_list_update(2), None).await;
    assert_eq!(form["view"], views::STOCK_LIST_UPDATE);
    assert_eq!(form["model"][attrs::STOCK_ITEM_UPDATE_FORM]["partName"], "Brushless 2205");
    assert_eq!(form["model"][attrs::CENTERS].as_array().unwrap().len(), 3);

    let res = srv
        .submit(
            urls::STOCK_LIST_UPDATE,
            &[("_method", "patch"), ("stockId", "2"), ("partName", "Brushless 2205 KV"), ("quantity", "60")],
        )
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);
    assert!(srv.view(&location, Some(&cookie)).await["model"][attrs::SUCCESS_MSG].is_string());

    let form = srv.view(&urls::stock_list_update(2), None).await;
    let updated = &form["model"][attrs::STOCK_ITEM_UPDATE_FORM];
    assert_eq!(updated["partName"], "Brushless 2205 KV");
    assert_eq!(updated["quantity"], 60);
    assert_eq!(updated["categoryId"], 2);
}

#[tokio::test]
async fn update_with_blank_name_returns_to_the_edit_page() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .patch(srv.url(urls::STOCK_LIST_UPDATE))
        .form(&[("stockId", "3"), ("partName", " ")])
        .send()
        .await
        .unwrap();
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::stock_list_update(3));

    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"][attrs::ERROR_MSG].is_string());
    assert_eq!(body["model"][attrs::STOCK_ITEM_UPDATE_FORM]["partName"], "Brushless 2306");
}

#[tokio::test]
async fn search_filters_by_category_and_quantity() {
    let srv = TestServer::spawn().await;

    let body = srv
        .view(
            &format!("{}?categoryId=2&quantity=30&quantityOp=%3C", urls::STOCK_LIST_SEARCH),
            None,
        )
        .await;
    assert_eq!(names(&body["model"][attrs::STOCK_ITEM_LIST]), vec!["Brushless 2306"]);

    let body = srv
        .view(&format!("{}?partName=brushless&categoryId=x", urls::STOCK_LIST_SEARCH), None)
        .await;
    assert_eq!(
        names(&body["model"][attrs::STOCK_ITEM_LIST]),
        vec!["Brushless 2205", "Brushless 2306"]
    );

    let body = srv.view(urls::STOCK_LIST_SEARCH, None).await;
    assert!(body["model"][attrs::ERROR_MSG].is_string());
}

#[tokio::test]
async fn delete_and_unknown_ids_redirect_to_list() {
    let srv = TestServer::spawn().await;

    let res = srv.submit(&format!("{}/6", urls::STOCK_LIST_DELETE), &[]).await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);
    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"][attrs::SUCCESS_MSG].is_string());
    assert!(!names(&body["model"][attrs::STOCK_ITEM_LIST]).contains(&"Optical Flow".to_string()));

    let res = srv.client.get(srv.url(&urls::stock_list_update(6))).send().await.unwrap();
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);
    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"][attrs::ERROR_MSG].is_string());
}

#[tokio::test]
async fn html_delete_form_and_stale_update_land_on_the_list() {
    let srv = TestServer::spawn().await;

    let res = srv
        .submit(&format!("{}/5", urls::STOCK_LIST_DELETE), &[("_method", "delete")])
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);
    let body = srv.view(&location, Some(&cookie)).await;
    assert!(body["model"][attrs::SUCCESS_MSG].is_string());
    assert!(!names(&body["model"][attrs::STOCK_ITEM_LIST]).contains(&"LiPo 4S 1500".to_string()));

    // Unknown id wins over the clash with an existing name.
    let res = srv
        .submit(
            urls::STOCK_LIST_UPDATE,
            &[("_method", "patch"), ("stockId", "99"), ("partName", "Prop 5045"), ("quantity", "1")],
        )
        .await;
    let (location, cookie) = redirect_target(&res);
    assert_eq!(location, urls::STOCK_LIST);
    let body = srv.view(&location, Some(&cookie)).await;
    assert_eq!(body["model"][attrs::ERROR_MSG], "stock item not found");
}
