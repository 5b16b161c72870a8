use agriconnect_admin::{
    dto::{
        farmers::FarmerForm,
        orders::{OrderForm, OrderItemForm, UpdateOrderStatusRequest},
        products::ProductForm,
        session::LoginRequest,
        settings::Settings,
        users::UserForm,
    },
    error::AppError,
    models::{FarmerStatus, OrderStatus, StockStatus, UserRole, UserStatus},
    reports::ReportCatalog,
    routes::params::{DeleteQuery, OrderListQuery, ProductQuery, SearchQuery, StockFilter},
    services::{farmer_service, order_service, product_service, session_service, user_service},
    session::ActiveSession,
    state::AppState,
    store::Workspace,
};
use serde_json::json;

async fn logged_in() -> anyhow::Result<(AppState, ActiveSession)> {
    let state = AppState::new(
        Workspace::seeded(),
        ReportCatalog::default(),
        Settings::with_company("AgriConnect"),
    );
    session_service::login(
        &state,
        LoginRequest {
            email: "staff@agriconnect.com".into(),
            password: "anything".into(),
            remember_me: true,
        },
    )
    .await?;
    let session = state.session.read().await.active()?.clone();
    Ok((state, session))
}

fn search(q: &str) -> SearchQuery {
    SearchQuery {
        q: Some(q.to_string()),
    }
}

fn confirmed(confirm: bool) -> DeleteQuery {
    DeleteQuery { confirm }
}

// Adding a product with quantity "0" to the seeded list yields P008, out of stock.
#[tokio::test]
async fn added_product_gets_next_id_and_derived_status() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let form: ProductForm = serde_json::from_value(json!({
        "name": "Mangoes 2",
        "category": "Fruits",
        "price": "3.0",
        "quantity": "0",
        "farmer": "X",
    }))?;

    let created = product_service::create_product(&state, &session, form)
        .await?
        .data
        .unwrap();
    assert_eq!(created.id, "P008");
    assert_eq!(created.status, StockStatus::OutOfStock);
    assert_eq!(created.quantity, Some(0));
    assert_eq!(created.price, Some(3.0));

    let all = product_service::list_products(&state, ProductQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(all.len(), 8);
    assert_eq!(all.last(), Some(&created));
    let earlier: Vec<_> = all[..7].iter().map(|p| p.id.as_str()).collect();
    assert!(!earlier.contains(&"P008"));
    Ok(())
}

#[tokio::test]
async fn product_edit_recomputes_status_and_keeps_blank_numbers_absent() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let form: ProductForm = serde_json::from_value(json!({
        "name": "Green Beans",
        "category": "Vegetables",
        "price": "",
        "quantity": "40",
        "farmer": "Vanna Srey",
    }))?;
    let edited = product_service::update_product(&state, &session, "P003", form)
        .await?
        .data
        .unwrap();
    assert_eq!(edited.status, StockStatus::InStock);
    assert_eq!(edited.price, None);

    let form: ProductForm = serde_json::from_value(json!({
        "name": "Green Beans",
        "category": "Vegetables",
        "price": 1.8,
        "quantity": "",
        "farmer": "Vanna Srey",
    }))?;
    let edited = product_service::update_product(&state, &session, "P003", form)
        .await?
        .data
        .unwrap();
    assert_eq!(edited.quantity, None);
    assert_eq!(edited.status, StockStatus::OutOfStock);
    Ok(())
}

#[tokio::test]
async fn product_list_combines_search_and_stock_filter() -> anyhow::Result<()> {
    let (state, _session) = logged_in().await?;
    let out_of_stock = product_service::list_products(
        &state,
        ProductQuery {
            q: None,
            status: Some(StockFilter::OutOfStock),
        },
    )
    .await?;
    assert_eq!(out_of_stock.meta.unwrap().total, Some(2));
    let ids: Vec<_> = out_of_stock.data.unwrap().items.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["P003", "P007"]);

    let in_stock_fruit = product_service::list_products(
        &state,
        ProductQuery {
            q: Some("fruits".into()),
            status: Some(StockFilter::InStock),
        },
    )
    .await?
    .data
    .unwrap()
    .items;
    assert_eq!(in_stock_fruit.len(), 1);
    assert_eq!(in_stock_fruit[0].name, "Mangoes");
    Ok(())
}

// Every match contains the query in a searchable field; every miss contains it in none.
#[tokio::test]
async fn farmer_search_partitions_the_list() -> anyhow::Result<()> {
    let (state, _session) = logged_in().await?;
    let all = farmer_service::list_farmers(&state, SearchQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(all.len(), 6);

    for q in ["", "k", "KAMP", "reap", "ly", "012", "nobody"] {
        let hits = farmer_service::list_farmers(&state, search(q))
            .await?
            .data
            .unwrap()
            .items;
        let needle = q.to_lowercase();
        let searchable = |name: &str, location: &str| {
            name.to_lowercase().contains(&needle) || location.to_lowercase().contains(&needle)
        };
        for farmer in &all {
            let expected = searchable(&farmer.name, &farmer.location);
            assert_eq!(hits.contains(farmer), expected, "query {q:?} farmer {}", farmer.id);
        }
        let order: Vec<_> = all.iter().filter(|f| hits.contains(f)).collect();
        assert_eq!(order, hits.iter().collect::<Vec<_>>(), "hits keep list order");
    }
    Ok(())
}

#[tokio::test]
async fn farmer_edit_keeps_id_and_product_count() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let edited = farmer_service::update_farmer(
        &state,
        &session,
        "F003",
        FarmerForm {
            name: "Vanna Srey".into(),
            location: "Pursat".into(),
            contact: "017-000-111".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(edited.id, "F003");
    assert_eq!(edited.products, 15);
    assert_eq!(edited.status, FarmerStatus::Active);
    assert_eq!(edited.location, "Pursat");

    let fetched = farmer_service::get_farmer(&state, "F003").await?.data.unwrap();
    assert_eq!(fetched, edited);
    Ok(())
}

#[tokio::test]
async fn new_farmer_starts_active_with_no_products() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let created = farmer_service::create_farmer(
        &state,
        &session,
        FarmerForm {
            name: "Dara Ouk".into(),
            ..FarmerForm::default()
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(created.id, "F007");
    assert_eq!(created.products, 0);
    assert_eq!(created.status, FarmerStatus::Active);
    assert_eq!(created.location, "");
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_reported_not_found() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let edit = farmer_service::update_farmer(&state, &session, "F999", FarmerForm::default()).await;
    assert!(matches!(edit, Err(AppError::NotFound)));

    let status = order_service::update_order_status(
        &state,
        &session,
        "ORD-999",
        UpdateOrderStatusRequest {
            status: OrderStatus::Cancelled,
        },
    )
    .await;
    assert!(matches!(status, Err(AppError::NotFound)));

    let delete = user_service::delete_user(&state, &session, "U999", confirmed(true)).await;
    assert!(matches!(delete, Err(AppError::NotFound)));
    Ok(())
}

// ORD-002 goes from Pending to Completed; items and stored total stay as they were.
#[tokio::test]
async fn order_status_update_touches_only_status() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let before = order_service::get_order(&state, "ORD-002").await?.data.unwrap().order;
    assert_eq!(before.status, OrderStatus::Pending);

    let updated = order_service::update_order_status(
        &state,
        &session,
        "ORD-002",
        UpdateOrderStatusRequest {
            status: OrderStatus::Completed,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(updated.items, before.items);
    assert_eq!(updated.total, before.total);
    assert_eq!(updated.customer, before.customer);
    assert_eq!(updated.date, before.date);
    Ok(())
}

#[tokio::test]
async fn order_details_show_item_total_next_to_stored_total() -> anyhow::Result<()> {
    let (state, _session) = logged_in().await?;
    let details = order_service::get_order(&state, "ORD-001").await?.data.unwrap();
    assert_eq!(details.order.total, Some(450.0));
    assert_eq!(details.lines.len(), 2);
    let items_total = details.items_total.unwrap();
    assert!((items_total - 370.0).abs() < 1e-9);
    assert!((details.lines[0].subtotal.unwrap() - 250.0).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn order_list_filters_by_search_and_date() -> anyhow::Result<()> {
    let (state, _session) = logged_in().await?;
    let list = |q: Option<&str>, date: Option<&str>| OrderListQuery {
        q: q.map(String::from),
        date: date.map(String::from),
    };

    let on_26th = order_service::list_orders(&state, list(None, Some("2025-10-26")))
        .await?
        .data
        .unwrap()
        .items;
    let ids: Vec<_> = on_26th.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["ORD-003", "ORD-004"]);

    let by_id = order_service::list_orders(&state, list(Some("ord-005"), None))
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].customer, "Green Valley Store");

    let blank = order_service::list_orders(&state, list(Some("market"), Some("")))
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(blank.len(), 2);

    let unreadable = order_service::list_orders(&state, list(None, Some("yesterday")))
        .await?
        .data
        .unwrap()
        .items;
    assert!(unreadable.is_empty());
    Ok(())
}

#[tokio::test]
async fn order_edit_overwrites_form_fields_but_not_status() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let form = OrderForm {
        customer: "Vanna Market".into(),
        farmer: "Sok Pisey".into(),
        total: Some(500.0),
        date: None,
        items: vec![OrderItemForm {
            product_name: "Organic Rice".into(),
            quantity: Some(200),
            price: Some(2.5),
        }],
    };
    let edited = order_service::update_order(&state, &session, "ORD-001", form)
        .await?
        .data
        .unwrap();
    assert_eq!(edited.status, OrderStatus::Completed);
    assert_eq!(edited.total, Some(500.0));
    assert_eq!(edited.items.len(), 1);
    assert_eq!(edited.date, None);

    let created = order_service::create_order(&state, &session, OrderForm::default())
        .await?
        .data
        .unwrap();
    assert_eq!(created.id, "ORD-006");
    assert_eq!(created.status, OrderStatus::Pending);
    Ok(())
}

#[tokio::test]
async fn declined_delete_leaves_users_untouched() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let before = user_service::list_users(&state, SearchQuery::default())
        .await?
        .data
        .unwrap()
        .items;

    let declined = user_service::delete_user(&state, &session, "U002", confirmed(false))
        .await?
        .data
        .unwrap();
    assert!(!declined.deleted);
    let after = user_service::list_users(&state, SearchQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(after, before);

    let removed = user_service::delete_user(&state, &session, "U002", confirmed(true))
        .await?
        .data
        .unwrap();
    assert!(removed.deleted);
    let after = user_service::list_users(&state, SearchQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|u| u.id != "U002"));
    Ok(())
}

// With a length-based scheme this add would collide with U004.
#[tokio::test]
async fn ids_stay_unique_after_deletes() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    user_service::delete_user(&state, &session, "U001", confirmed(true)).await?;

    let created = user_service::create_user(
        &state,
        &session,
        UserForm {
            name: "Rithy Mao".into(),
            email: "rithy@agriconnect.com".into(),
            role: UserRole::Admin,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(created.id, "U005");
    assert_eq!(created.status, UserStatus::Active);

    let users = user_service::list_users(&state, SearchQuery::default())
        .await?
        .data
        .unwrap()
        .items;
    let mut ids: Vec<_> = users.iter().map(|u| u.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), users.len());
    Ok(())
}

#[tokio::test]
async fn user_status_toggles_and_edit_keeps_it() -> anyhow::Result<()> {
    let (state, session) = logged_in().await?;
    let toggled = user_service::toggle_user_status(&state, &session, "U004")
        .await?
        .data
        .unwrap();
    assert_eq!(toggled.status, UserStatus::Active);

    let edited = user_service::update_user(
        &state,
        &session,
        "U004",
        UserForm {
            name: "Vibol Chea".into(),
            email: "vibol.chea@agriconnect.com".into(),
            role: UserRole::Admin,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(edited.status, UserStatus::Active);
    assert_eq!(edited.role, UserRole::Admin);

    let hits = user_service::list_users(&state, search("VIBOL.CHEA"))
        .await?
        .data
        .unwrap()
        .items;
    assert_eq!(hits.len(), 1);
    Ok(())
}
