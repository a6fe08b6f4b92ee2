use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Statement};
use serde_json::{Value, json};
use shop_db_api::{
    config::AuthConfig,
    db::{create_orm_conn, run_migrations},
    routes::create_router,
    state::AppState,
};
use tower::ServiceExt;

struct Client {
    app: Router,
    token: Option<String>,
}

impl Client {
    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }
}

fn id_of(body: &Value) -> i64 {
    body["data"]["id"].as_i64().expect("record id")
}

// Scenarios share one database, so they run in sequence inside a single test.
#[tokio::test]
async fn shop_back_office_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run shop flow tests.");
            return Ok(());
        }
    };

    let mut client = setup_client(&database_url).await?;

    login_round_trip(&mut client).await;
    order_with_payment_through_the_hierarchy(&client).await;
    partial_update_keeps_other_fields(&client).await;
    deleted_record_is_not_found(&client).await;
    order_for_missing_customer_is_rejected(&client).await;
    mismatched_ancestor_never_writes(&client).await;
    foreign_payment_never_reaches_gift(&client).await;
    foreign_order_never_reaches_courier(&client).await;
    foreign_line_never_reaches_product_or_supplier(&client).await;
    racing_duplicates_are_rejected_not_crashed(&client).await;
    one_courier_per_order(&client).await;
    create_and_attach_product_and_supplier(&client).await;
    analytics_summary_and_random_order(&client).await;
    customer_delete_cascades(&client).await;

    Ok(())
}

async fn setup_client(database_url: &str) -> anyhow::Result<Client> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE gifts, payments, couriers, order_details, orders, products, suppliers, customers, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let app = create_router(AppState {
        orm,
        auth: AuthConfig {
            jwt_secret: "flow-secret".into(),
            token_ttl_minutes: 10,
        },
    });
    Ok(Client { app, token: None })
}

async fn login_round_trip(client: &mut Client) {
    let (status, body) = client
        .post(
            "/register",
            json!({"username": "clerk", "email": "clerk@example.com", "password": "secret123"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["username"], "clerk");
    assert!(body["data"].get("password_hash").is_none());

    let (status, _) = client
        .post(
            "/register",
            json!({"username": "clerk", "email": "other@example.com", "password": "secret123"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = client
        .post("/login", json!({"username": "clerk", "password": "wrong-one"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = client
        .post("/login", json!({"username": "clerk", "password": "secret123"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token_type"], "bearer");
    client.token = Some(body["data"]["access_token"].as_str().unwrap().to_string());

    let (status, _) = client.get("/customer").await;
    assert_eq!(status, StatusCode::OK);
}

async fn order_with_payment_through_the_hierarchy(client: &Client) {
    let (status, customer) = client
        .post("/customer", json!({"name": "Anna", "email": "a@x.com"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let cid = id_of(&customer);

    let (status, order) = client
        .post("/order", json!({"customer_id": cid, "shipping_address": "Main Street 1"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["data"]["status"], "Pending");
    let oid = id_of(&order);

    let (status, payment) = client
        .post("/payment", json!({"order_id": oid, "amount": "100.00"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let pid = id_of(&payment);

    let (status, fetched) = client
        .get(&format!("/customer/{cid}/orders/{oid}/payment/{pid}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["amount"], "100.00");

    let (status, _) = client
        .post("/payment", json!({"order_id": oid, "amount": "5.00"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, gift) = client
        .post(
            &format!("/customer/{cid}/orders/{oid}/payment/{pid}/gifts"),
            json!({"amount": "10", "type": "Certificate", "unit": "%"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(gift["data"]["payment_id"], pid);
    assert_eq!(gift["data"]["unit"], "%");

    let (status, gifts) = client
        .get(&format!("/customer/{cid}/orders/{oid}/payment/{pid}/gifts"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gifts["data"].as_array().unwrap().len(), 1);
}

async fn partial_update_keeps_other_fields(client: &Client) {
    let (_, customer) = client
        .post(
            "/customer",
            json!({"name": "Bert", "email": "bert@x.com", "phone": "+3712000000", "country": "LV"}),
        )
        .await;
    let cid = id_of(&customer);

    let (status, updated) = client
        .put(&format!("/customer/{cid}"), json!({"country": "EE"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["country"], "EE");
    assert_eq!(updated["data"]["name"], "Bert");
    assert_eq!(updated["data"]["phone"], "+3712000000");

    let (status, unchanged) = client.put(&format!("/customer/{cid}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["data"], updated["data"]);

    let (status, _) = client
        .put(&format!("/customer/{cid}"), json!({"email": "a@x.com"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

async fn deleted_record_is_not_found(client: &Client) {
    let (_, supplier) = client
        .post("/supplier", json!({"name": "Short Lived Ltd"}))
        .await;
    let sid = id_of(&supplier);

    let (status, deleted) = client.delete(&format!("/supplier/{sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"]["name"], "Short Lived Ltd");

    let (status, _) = client.get(&format!("/supplier/{sid}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = client.delete(&format!("/supplier/{sid}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn order_for_missing_customer_is_rejected(client: &Client) {
    let (status, body) = client
        .post("/order", json!({"customer_id": 999999, "shipping_address": "Nowhere 1"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Customer 999999 not found");

    let (status, _) = client
        .post("/customer/999999/orders", json!({"shipping_address": "Nowhere 1"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn mismatched_ancestor_never_writes(client: &Client) {
    let (_, owner) = client
        .post("/customer", json!({"name": "Owner", "email": "owner@x.com"}))
        .await;
    let (_, stranger) = client
        .post("/customer", json!({"name": "Stranger", "email": "stranger@x.com"}))
        .await;
    let (owner, stranger) = (id_of(&owner), id_of(&stranger));

    let (_, order) = client
        .post(
            &format!("/customer/{owner}/orders"),
            json!({"shipping_address": "Owner Lane 2"}),
        )
        .await;
    let oid = id_of(&order);

    let (status, _) = client
        .get(&format!("/customer/{stranger}/orders/{oid}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client
        .put(
            &format!("/customer/{stranger}/orders/{oid}"),
            json!({"shipping_address": "Hijacked Road 9"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = client
        .post(
            &format!("/customer/{stranger}/orders/{oid}/payment"),
            json!({"amount": "1.00"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, order) = client.get(&format!("/order/{oid}")).await;
    assert_eq!(order["data"]["shipping_address"], "Owner Lane 2");
    let (status, _) = client
        .get(&format!("/customer/{owner}/orders/{oid}/payment"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Two orders of the same customer, each with a payment.
async fn two_paid_orders(client: &Client, email: &str) -> (i64, (i64, i64), (i64, i64)) {
    let (status, customer) = client
        .post("/customer", json!({"name": "Twice", "email": email}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let cid = id_of(&customer);

    let mut paid = Vec::new();
    for street in ["First Row 1", "Second Row 2"] {
        let (_, order) = client
            .post(&format!("/customer/{cid}/orders"), json!({"shipping_address": street}))
            .await;
        let oid = id_of(&order);
        let (status, payment) = client
            .post(
                &format!("/customer/{cid}/orders/{oid}/payment"),
                json!({"amount": "15.00"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        paid.push((oid, id_of(&payment)));
    }
    (cid, paid[0], paid[1])
}

async fn foreign_payment_never_reaches_gift(client: &Client) {
    let (cid, (first_order, first_payment), (second_order, second_payment)) =
        two_paid_orders(client, "gina@x.com").await;

    let (status, gift) = client
        .post(
            &format!("/customer/{cid}/orders/{first_order}/payment/{first_payment}/gifts"),
            json!({"amount": "5.00", "type": "Gift", "unit": "USD"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let gid = id_of(&gift);
    let (_, before) = client.get(&format!("/gift/{gid}")).await;

    let foreign = [
        format!("/customer/{cid}/orders/{second_order}/payment/{second_payment}/gifts/{gid}"),
        format!("/customer/{cid}/orders/{first_order}/payment/{second_payment}/gifts/{gid}"),
        format!("/customer/{cid}/orders/{second_order}/payment/{first_payment}/gifts/{gid}"),
    ];
    for uri in &foreign {
        let (status, _) = client.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        let (status, _) = client.put(uri, json!({"amount": "99.00"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        let (status, _) = client.delete(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
    }

    let (status, after) = client.get(&format!("/gift/{gid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["data"], before["data"]);
    assert_eq!(after["data"]["payment_id"], first_payment);

    let (_, gifts) = client
        .get(&format!("/customer/{cid}/orders/{second_order}/payment/{second_payment}/gifts"))
        .await;
    assert_eq!(gifts["data"].as_array().unwrap().len(), 0);
}

async fn foreign_order_never_reaches_courier(client: &Client) {
    let (owner, (first_order, _), (second_order, _)) =
        two_paid_orders(client, "hal@x.com").await;
    let (_, stranger) = client
        .post("/customer", json!({"name": "Ivo", "email": "ivo@x.com"}))
        .await;
    let stranger = id_of(&stranger);

    let (status, courier) = client
        .post(
            &format!("/customer/{owner}/orders/{first_order}/courier"),
            json!({"name": "Steady Post", "price": "3.50"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let courier_id = id_of(&courier);
    let (_, before) = client.get(&format!("/courier/{courier_id}")).await;

    let (status, _) = client
        .post(
            &format!("/customer/{stranger}/orders/{second_order}/courier"),
            json!({"name": "Sneaky Post"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = client
        .get(&format!("/customer/{owner}/orders/{second_order}/courier"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let foreign = [
        format!("/customer/{stranger}/orders/{first_order}/courier/{courier_id}"),
        format!("/customer/{owner}/orders/{second_order}/courier/{courier_id}"),
    ];
    for uri in &foreign {
        let (status, _) = client.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        let (status, _) = client
            .put(uri, json!({"name": "Renamed Post", "price": "0.50"}))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
    }

    let (status, after) = client.get(&format!("/courier/{courier_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after["data"], before["data"]);
}

async fn foreign_line_never_reaches_product_or_supplier(client: &Client) {
    let (cid, (first_order, _), (second_order, _)) = two_paid_orders(client, "jana@x.com").await;

    let (_, attached_supplier) = client
        .post("/supplier", json!({"name": "Linen House"}))
        .await;
    let (_, other_supplier) = client
        .post("/supplier", json!({"name": "Paper Mill"}))
        .await;
    let (attached_supplier, other_supplier) = (id_of(&attached_supplier), id_of(&other_supplier));
    let (_, attached_product) = client
        .post(
            "/product",
            json!({"name": "Napkin", "price": "2.00", "supplier_id": attached_supplier}),
        )
        .await;
    let (_, other_product) = client
        .post(
            "/product",
            json!({"name": "Notebook", "price": "6.00", "supplier_id": other_supplier}),
        )
        .await;
    let (attached_product, other_product) = (id_of(&attached_product), id_of(&other_product));

    let (status, line) = client
        .post(
            &format!("/customer/{cid}/orders/{first_order}/orderdetail"),
            json!({"product_id": attached_product, "quantity": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let did = id_of(&line);

    let snapshot = [
        format!("/orderdetail/{did}"),
        format!("/product/{attached_product}"),
        format!("/product/{other_product}"),
        format!("/supplier/{attached_supplier}"),
        format!("/supplier/{other_supplier}"),
    ];
    let mut before = Vec::new();
    for uri in &snapshot {
        before.push(client.get(uri).await.1["data"].clone());
    }

    let line = format!("/customer/{cid}/orders/{first_order}/orderdetail/{did}");
    let (status, _) = client
        .get(&format!("{line}/product/{attached_product}/supplier/{attached_supplier}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let foreign_line = format!("/customer/{cid}/orders/{second_order}/orderdetail/{did}");
    for (uri, body) in [
        (foreign_line.clone(), json!({"quantity": 9})),
        (
            format!("{foreign_line}/product/{attached_product}"),
            json!({"name": "Swapped"}),
        ),
        (
            format!("{line}/product/{other_product}"),
            json!({"name": "Swapped", "price": "1.00"}),
        ),
        (
            format!("{line}/product/{other_product}/supplier/{other_supplier}"),
            json!({"name": "Swapped"}),
        ),
        (
            format!("{line}/product/{attached_product}/supplier/{other_supplier}"),
            json!({"name": "Swapped"}),
        ),
        (
            format!("{foreign_line}/product/{attached_product}/supplier/{attached_supplier}"),
            json!({"name": "Swapped"}),
        ),
    ] {
        let (status, _) = client.get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        let (status, _) = client.put(&uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
    }

    let (status, _) = client
        .post(
            &format!("{foreign_line}/product"),
            json!({"name": "Intruder", "price": "1.00"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = client
        .post(
            &format!("{line}/product/{other_product}/supplier"),
            json!({"name": "Intruder Ltd"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for (uri, expected) in snapshot.iter().zip(&before) {
        let (status, after) = client.get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert_eq!(&after["data"], expected, "{uri} changed");
    }
}

async fn racing_duplicates_are_rejected_not_crashed(client: &Client) {
    let body = json!({"name": "Kai", "email": "kai@x.com"});
    let (first, second) = tokio::join!(
        client.post("/customer", body.clone()),
        client.post("/customer", body),
    );
    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    let rejected = if first.0 == StatusCode::BAD_REQUEST { first.1 } else { second.1 };
    assert_eq!(rejected["message"], "Bad Request: Email is already taken");

    let (_, customer) = client
        .post("/customer", json!({"name": "Lea", "email": "lea@x.com"}))
        .await;
    let cid = id_of(&customer);
    let (_, order) = client
        .post(&format!("/customer/{cid}/orders"), json!({"shipping_address": "Race Track 1"}))
        .await;
    let oid = id_of(&order);
    let uri = format!("/customer/{cid}/orders/{oid}/payment");
    let (first, second) = tokio::join!(
        client.post(&uri, json!({"amount": "7.00"})),
        client.post(&uri, json!({"amount": "8.00"})),
    );
    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let register = json!({"username": "twin", "email": "twin@example.com", "password": "secret123"});
    let (first, second) = tokio::join!(
        client.post("/register", register.clone()),
        client.post("/register", register),
    );
    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
}

async fn one_courier_per_order(client: &Client) {
    let (_, customer) = client
        .post("/customer", json!({"name": "Carl", "email": "carl@x.com"}))
        .await;
    let cid = id_of(&customer);
    let (_, order) = client
        .post(&format!("/customer/{cid}/orders"), json!({"shipping_address": "Depot 7"}))
        .await;
    let oid = id_of(&order);

    let uri = format!("/customer/{cid}/orders/{oid}/courier");
    let (status, courier) = client
        .post(&uri, json!({"name": "FastShip", "price": "4.99"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(courier["data"]["order_id"], oid);

    let (status, _) = client.post(&uri, json!({"name": "SlowShip"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, current) = client.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["data"]["name"], "FastShip");
}

async fn create_and_attach_product_and_supplier(client: &Client) {
    let (_, customer) = client
        .post("/customer", json!({"name": "Dora", "email": "dora@x.com"}))
        .await;
    let cid = id_of(&customer);
    let (_, order) = client
        .post(&format!("/customer/{cid}/orders"), json!({"shipping_address": "Dock 3"}))
        .await;
    let oid = id_of(&order);
    let (_, product) = client
        .post("/product", json!({"name": "Mug", "price": "12.50"}))
        .await;
    let first_product = id_of(&product);

    let lines = format!("/customer/{cid}/orders/{oid}/orderdetail");
    let (status, line) = client
        .post(&lines, json!({"product_id": first_product, "quantity": 2}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let did = id_of(&line);

    let (status, attached) = client
        .post(
            &format!("{lines}/{did}/product"),
            json!({"name": "Teapot", "price": "30.00"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let prid = id_of(&attached);

    let (_, line) = client.get(&format!("{lines}/{did}")).await;
    assert_eq!(line["data"]["product_id"], prid);

    let (status, _) = client
        .get(&format!("{lines}/{did}/product/{first_product}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, supplier) = client
        .post(
            &format!("{lines}/{did}/product/{prid}/supplier"),
            json!({"name": "Clayworks"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let sid = id_of(&supplier);

    let (status, current) = client
        .get(&format!("{lines}/{did}/product/{prid}/supplier"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(id_of(&current), sid);
}

async fn analytics_summary_and_random_order(client: &Client) {
    let (_, customer) = client
        .post("/customer", json!({"name": "Eve", "email": "eve@x.com"}))
        .await;
    let cid = id_of(&customer);

    let (status, random) = client
        .post(&format!("/analytics/create-random-order/{cid}"), json!({}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let oid = random["data"]["order"]["id"].as_i64().unwrap();
    assert_eq!(random["data"]["order"]["customer_id"], cid);
    let quantity = random["data"]["detail"]["quantity"].as_i64().unwrap();
    assert!((1..=5).contains(&quantity));

    let (status, _) = client
        .post("/analytics/create-random-order/999999", json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, summary) = client.get("/analytics/orders-summary").await;
    assert_eq!(status, StatusCode::OK);
    let row = summary["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["order_id"] == oid)
        .expect("summary row for random order")
        .clone();
    assert_eq!(row["customer_name"], "Eve");
    assert_eq!(row["line_count"], 1);
    assert_eq!(row["total_quantity"], quantity);
}

async fn customer_delete_cascades(client: &Client) {
    let (_, customer) = client
        .post("/customer", json!({"name": "Finn", "email": "finn@x.com"}))
        .await;
    let cid = id_of(&customer);
    let (_, order) = client
        .post(&format!("/customer/{cid}/orders"), json!({"shipping_address": "Pier 11"}))
        .await;
    let oid = id_of(&order);
    let (_, payment) = client
        .post(
            &format!("/customer/{cid}/orders/{oid}/payment"),
            json!({"amount": "20.00", "status": "Paid"}),
        )
        .await;
    let pid = id_of(&payment);

    let (status, _) = client.delete(&format!("/customer/{cid}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = client.get(&format!("/order/{oid}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = client.get(&format!("/payment/{pid}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
