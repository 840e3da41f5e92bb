use bakery_seed::clients::actor_client::ActorClient;
use bakery_seed::config::GeneratorConfig;
use bakery_seed::demo_data::{DataGenerator, GenerationOutcome, GenerationSummary};
use bakery_seed::lifecycle::StoreSystem;
use bakery_seed::model::{Order, OrderState, PickupLocation, Product, Role, User};
use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use std::collections::HashSet;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        today: Some(today()),
        ..GeneratorConfig::default()
    }
}

struct Snapshot {
    summary: GenerationSummary,
    users: Vec<User>,
    products: Vec<Product>,
    pickup_locations: Vec<PickupLocation>,
    orders: Vec<Order>,
}

async fn generate(seed: u64) -> Snapshot {
    let system = StoreSystem::new();
    let outcome = DataGenerator::for_system(&system)
        .with_config(config(seed))
        .load_data()
        .await
        .expect("generation failed");
    let GenerationOutcome::Generated(summary) = outcome else {
        panic!("expected a fresh run, got {:?}", outcome);
    };
    let snapshot = Snapshot {
        summary,
        users: system.user_client.list().await.unwrap(),
        products: system.product_client.list().await.unwrap(),
        pickup_locations: system.pickup_location_client.list().await.unwrap(),
        orders: system.order_client.list().await.unwrap(),
    };
    system.shutdown().await.unwrap();
    snapshot
}

/// Full run against real stores: reference entities first, then the order timeline.
#[tokio::test]
async fn test_generates_reference_entities() {
    let data = generate(1).await;

    let emails: Vec<&str> = data.users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "baker@vaadin.com",
            "barista@vaadin.com",
            "admin@vaadin.com",
            "peter@vaadin.com",
            "mary@vaadin.com"
        ]
    );
    assert_eq!(data.users[0].role, Role::Baker);
    assert!(!data.users[0].locked);
    assert_eq!(data.users[1].role, Role::Barista);
    assert!(data.users[1].locked);
    assert_eq!(data.users[2].first_name, "Göran");
    assert!(data.users.iter().all(|u| u.password_hash.starts_with("{sha256}")));

    assert_eq!(data.products.len(), 12);
    assert!(data.products.iter().all(|p| (200..10_200).contains(&p.price)));

    let locations: Vec<&str> = data.pickup_locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(locations, vec!["Store", "Bakery"]);

    assert_eq!(data.summary.users, 5);
    assert_eq!(data.summary.products, 12);
    assert_eq!(data.summary.pickup_locations, 2);
    assert_eq!(data.summary.orders, data.orders.len());
    assert_eq!(data.summary.today, today());
}

#[tokio::test]
async fn test_same_seed_same_dataset() {
    let first = generate(1).await;
    let second = generate(1).await;

    assert_eq!(first.users, second.users);
    assert_eq!(first.products, second.products);
    assert_eq!(first.pickup_locations, second.pickup_locations);
    assert_eq!(first.orders, second.orders);

    let other = generate(2).await;
    assert_ne!(first.products, other.products);
}

#[tokio::test]
async fn test_fixture_order_comes_first() {
    let data = generate(1).await;
    let fixture = &data.orders[0];

    assert_eq!(fixture.id, data.summary.fixture_order);
    assert_eq!(fixture.due_date, today());
    assert_eq!(fixture.due_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(fixture.state, OrderState::New);
    assert_eq!(fixture.items.len(), 1);
    assert_eq!(fixture.history.len(), 1);
}

#[tokio::test]
async fn test_orders_satisfy_invariants() {
    let data = generate(1).await;
    let baker = data.users[0].id;
    let barista = data.users[1].id;
    let orderable: HashSet<_> = data.products[..8].iter().map(|p| p.id).collect();
    let window_start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let window_end = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();

    assert!(data.orders.len() > 2_000, "{} orders", data.orders.len());

    for order in &data.orders {
        assert_eq!(order.validate(), Ok(()), "{:?}", order);
        assert_eq!(order.created_by, barista);
        assert!(order.due_date >= window_start && order.due_date < window_end);
        assert!([8, 12, 16].contains(&chrono::Timelike::hour(&order.due_time)));
        assert!(order.items.iter().all(|i| orderable.contains(&i.product)));

        for event in &order.history {
            let expected = match event.new_state {
                OrderState::New | OrderState::Cancelled => barista,
                _ => baker,
            };
            assert_eq!(event.created_by, expected);
        }

        let days_out = order.due_date.signed_duration_since(today()).num_days();
        match days_out {
            d if d < 0 => assert!(matches!(
                order.state,
                OrderState::Delivered | OrderState::Cancelled
            )),
            2 => assert!(matches!(
                order.state,
                OrderState::New | OrderState::Problem | OrderState::Cancelled
            )),
            d if d > 2 => assert_eq!(order.state, OrderState::New),
            // The fixture is the only order due today that may still be New.
            _ if order.id == data.summary.fixture_order => {
                assert_eq!(order.state, OrderState::New)
            }
            _ => assert!(matches!(
                order.state,
                OrderState::Ready
                    | OrderState::Delivered
                    | OrderState::Problem
                    | OrderState::Cancelled
            )),
        }
        assert_ne!(order.state, OrderState::Confirmed);

        if order.state == OrderState::Cancelled {
            let placed = order.history[0].timestamp;
            let cancelled = order.history[1].timestamp;
            assert!(placed < cancelled && cancelled < order.due_at());
        }
    }
}

#[tokio::test]
async fn test_every_day_in_window_has_orders() {
    let data = generate(1).await;
    let days: HashSet<NaiveDate> = data.orders.iter().map(|o| o.due_date).collect();

    let mut day = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let end = today() + Days::new(30);
    while day < end {
        assert!(days.contains(&day), "no orders on {}", day);
        day = day + Days::new(1);
    }
    assert!(days.iter().all(|d| d.year() >= 2022));
}

#[tokio::test]
async fn test_second_run_is_skipped() {
    let system = StoreSystem::new();
    let first = DataGenerator::for_system(&system)
        .with_config(config(1))
        .load_data()
        .await
        .unwrap();
    assert!(matches!(first, GenerationOutcome::Generated(_)));
    let orders = system.order_client.count().await.unwrap();

    let second = DataGenerator::for_system(&system)
        .with_config(config(1))
        .load_data()
        .await
        .unwrap();
    assert_eq!(second, GenerationOutcome::Skipped);
    assert_eq!(system.user_client.count().await.unwrap(), 5);
    assert_eq!(system.order_client.count().await.unwrap(), orders);

    system.shutdown().await.unwrap();
}
