use hunt_kernel::domain::constants::UPVOTES;
use hunt_kernel::domain::entities::UpvotePatch;
use hunt_kernel::domain::entity::Entity;
use hunt_kernel::domain::registry::SlotRegistry;
use hunt_kernel::domain::slots::{DashboardWidgets, UserProfileCards};
use hunt_upvotes::{Upvotes, init, mock};

fn vote(user: &str, product: &str) -> UpvotePatch {
    UpvotePatch {
        user_id: Some(user.to_owned()),
        product_id: Some(product.to_owned()),
        ..UpvotePatch::default()
    }
}

#[test]
fn init_registers_card_and_trending_widget() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).expect("upvotes init");

    assert_eq!(initialized.name, UPVOTES);
    assert_eq!(slots.contributions::<UserProfileCards>()[0].title, None);
    assert_eq!(slots.contributions::<DashboardWidgets>()[0].weight, Some(-5));
}

#[test]
fn trending_ranks_by_votes_then_product() {
    let mut slots = SlotRegistry::new();
    let initialized = init(&mut slots).unwrap();
    let aspect = initialized.state.as_any().downcast_ref::<Upvotes>().unwrap();

    let votes = mock::upvotes([
        vote("u1", "p2"),
        vote("u2", "p2"),
        vote("u1", "p3"),
        vote("u3", "p1"),
        vote("u3", "p3"),
        vote("u4", "p3"),
    ]);

    assert_eq!(
        aspect.trending(&votes),
        vec![("p3".to_owned(), 3), ("p2".to_owned(), 2), ("p1".to_owned(), 1)]
    );
    assert!(aspect.has_voted(&votes, "u3", "p1"));
    assert!(!aspect.has_voted(&votes, "u2", "p1"));
}

#[test]
fn every_mock_upvote_gets_its_own_id() {
    let votes = mock::upvotes((0..20).map(|i| vote(&format!("u{i}"), "p1")));
    let mut ids: Vec<_> = votes.iter().map(|v| v.id().to_owned()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
