use std::sync::Arc;

use wavelink_orders::models::{Order, OrderStatus, Priority, Severity, ZoneStat};
use wavelink_orders::repositories::InMemoryOrderRepository;
use wavelink_orders::services::order_query::query;
use wavelink_orders::services::zone_stats::zone_statistics;
use wavelink_orders::services::{AssignmentOutcome, OrderStore};

fn order(id: i64, zone: &str, priority: Priority, status: OrderStatus) -> Order {
    Order {
        id,
        client: format!("Cliente {}", id),
        zone: zone.to_string(),
        kind: "Caída Total".to_string(),
        priority,
        technician: if status == OrderStatus::Pending {
            String::new()
        } else {
            "Juan B.".to_string()
        },
        status,
        created_at: None,
    }
}

fn four_orders() -> Vec<Order> {
    vec![
        order(1, "A", Priority::Low, OrderStatus::Pending),
        order(2, "A", Priority::High, OrderStatus::Closed),
        order(3, "B", Priority::Medium, OrderStatus::Assigned),
        order(4, "B", Priority::High, OrderStatus::Assigned),
    ]
}

async fn store_with(orders: Vec<Order>) -> (OrderStore, Arc<InMemoryOrderRepository>) {
    let repo = Arc::new(InMemoryOrderRepository::with_orders(orders));
    let store = OrderStore::new(repo.clone());
    store.load_all().await.unwrap();
    (store, repo)
}

fn ids(orders: &[Order]) -> Vec<i64> {
    orders.iter().map(|o| o.id).collect()
}

#[tokio::test]
async fn assigning_sets_technician_and_status() {
    let (store, repo) = store_with(four_orders()).await;

    for id in [1, 3, 4] {
        let pending = store.assign_technician(id, "María S.").await.unwrap();
        let local = store.get(id).await.unwrap();
        assert_eq!(local.status, OrderStatus::Assigned);
        assert_eq!(local.technician, "María S.");
        assert_eq!(pending.outcome().await, AssignmentOutcome::Persisted);
    }

    let stored = repo.stored(4).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Assigned);
    assert_eq!(stored.technician, "María S.");
}

#[tokio::test]
async fn empty_technician_unassigns() {
    let (store, repo) = store_with(four_orders()).await;

    let pending = store.assign_technician(3, "").await.unwrap();
    let local = store.get(3).await.unwrap();
    assert_eq!(local.status, OrderStatus::Pending);
    assert_eq!(local.technician, "");

    pending.outcome().await;
    assert_eq!(repo.stored(3).await.unwrap().status, OrderStatus::Pending);
}

#[tokio::test]
async fn reassign_overwrites_previous_technician() {
    let (store, _repo) = store_with(four_orders()).await;

    store.assign_technician(4, "Luis R.").await.unwrap().outcome().await;
    let local = store.get(4).await.unwrap();
    assert_eq!(local.technician, "Luis R.");
    assert_eq!(local.status, OrderStatus::Assigned);
}

#[tokio::test]
async fn queries_never_disturb_snapshot() {
    let (store, _repo) = store_with(four_orders()).await;

    for (sort_by, zone) in [("priority", ""), ("priority", "B"), ("id", "A"), ("zone", "")] {
        let _ = store.query(sort_by, zone).await;
    }

    assert_eq!(ids(&store.query("id", "").await), vec![1, 2, 3, 4]);
    assert_eq!(ids(&store.snapshot().await), vec![1, 2, 3, 4]);
}

#[test]
fn zone_aggregation_matches_example() {
    let stats = zone_statistics(&four_orders());
    assert_eq!(
        stats,
        vec![
            ZoneStat { zone: "B".to_string(), count: 2, severity: Severity::Critical },
            ZoneStat { zone: "A".to_string(), count: 1, severity: Severity::Normal },
        ]
    );
}

#[test]
fn priority_sort_example() {
    let orders = vec![
        order(1, "A", Priority::Low, OrderStatus::Pending),
        order(2, "A", Priority::High, OrderStatus::Pending),
        order(3, "A", Priority::Medium, OrderStatus::Pending),
    ];
    assert_eq!(ids(&query(&orders, "priority", "")), vec![2, 3, 1]);
}

#[test]
fn zone_filter_example() {
    let filtered = query(&four_orders(), "id", "A");
    assert_eq!(ids(&filtered), vec![1, 2]);
    assert!(filtered.iter().all(|o| o.zone == "A"));
}

#[tokio::test]
async fn reload_is_idempotent() {
    let (store, repo) = store_with(four_orders()).await;

    let first = store.load_all().await.unwrap();
    let second = store.load_all().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(store.snapshot().await, second);
    assert_eq!(repo.fetch_calls(), 3);
}

#[test]
fn closed_orders_never_counted() {
    let orders = vec![
        order(1, "Arismendi", Priority::Low, OrderStatus::Closed),
        order(2, "Arismendi", Priority::High, OrderStatus::Closed),
        order(3, "Gómez", Priority::High, OrderStatus::Pending),
    ];
    let stats = zone_statistics(&orders);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].zone, "Gómez");
    assert_eq!(stats[0].count, 1);
}

#[tokio::test]
async fn stats_follow_assignment_changes() {
    let (store, _repo) = store_with(four_orders()).await;

    store.assign_technician(1, "Ana V.").await.unwrap().outcome().await;
    let stats = store.zone_statistics().await;
    // Asignar no resuelve la orden: sigue contando
    let zone_a = stats.iter().find(|s| s.zone == "A").unwrap();
    assert_eq!(zone_a.count, 1);
}

#[tokio::test]
async fn failed_persist_restores_ground_truth() {
    let (store, repo) = store_with(four_orders()).await;
    repo.set_fail_writes(true);

    let pending = store.assign_technician(1, "Juan B.").await.unwrap();
    assert_eq!(store.get(1).await.unwrap().status, OrderStatus::Assigned);

    let outcome = pending.outcome().await;
    assert!(matches!(outcome, AssignmentOutcome::Reconciled { missing_order: false, .. }));
    let restored = store.get(1).await.unwrap();
    assert_eq!(restored.status, OrderStatus::Pending);
    assert_eq!(restored.technician, "");
}
