//! Tests for SqliteCardRepository, focused on the card + owner transaction.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::db::{
    BoardRepository, CardRepository, CardUser, CardUserRepository, Database, DbError,
    ListRepository, NewBoard, NewCard, NewList, NewUser, SqliteDatabase, User, UserRepository,
};

struct Fixture {
    db: SqliteDatabase,
    owner: User,
    list_id: Uuid,
}

async fn setup() -> Fixture {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let owner = db
        .users()
        .create(&NewUser {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        })
        .await
        .unwrap();
    let board = db
        .boards()
        .create(&NewBoard {
            name: "Roadmap".to_string(),
            admin_user_id: owner.id,
        })
        .await
        .unwrap();
    let list = db
        .lists()
        .create(&NewList {
            name: "Todo".to_string(),
            board_id: board.id,
        })
        .await
        .unwrap();

    Fixture {
        db,
        owner,
        list_id: list.id,
    }
}

fn new_card(list_id: Uuid, user_id: Uuid) -> NewCard {
    NewCard {
        title: "Write release notes".to_string(),
        description: Some("Cover the API changes".to_string()),
        due_date: Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
        list_id,
        user_id,
    }
}

async fn count(db: &SqliteDatabase, sql: &str) -> i64 {
    sqlx::query_scalar(sql)
        .fetch_one(db.pool())
        .await
        .expect("Count query should succeed")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_card_records_owner() {
    let f = setup().await;

    let card = f
        .db
        .cards()
        .create(&new_card(f.list_id, f.owner.id))
        .await
        .expect("Create card should succeed");

    assert_eq!(card.title, "Write release notes");
    assert_eq!(card.list_id, f.list_id);
    assert_eq!(
        card.due_date,
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );

    let owners = count(
        &f.db,
        "SELECT COUNT(*) FROM card_users WHERE is_owner = 1",
    )
    .await;
    assert_eq!(owners, 1);

    let with_creator = f.db.cards().get_with_creator(card.id).await.unwrap();
    assert_eq!(with_creator.card, card);
    assert_eq!(with_creator.creator, f.owner);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_card_with_unknown_user_rolls_back() {
    let f = setup().await;

    let err = f
        .db
        .cards()
        .create(&new_card(f.list_id, Uuid::new_v4()))
        .await
        .expect_err("Create card should fail");

    assert!(matches!(err, DbError::Constraint { .. }), "got {:?}", err);
    assert_eq!(count(&f.db, "SELECT COUNT(*) FROM cards").await, 0);
    assert_eq!(count(&f.db, "SELECT COUNT(*) FROM card_users").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_card_with_unknown_list_fails() {
    let f = setup().await;

    let err = f
        .db
        .cards()
        .create(&new_card(Uuid::new_v4(), f.owner.id))
        .await
        .expect_err("Create card should fail");

    assert!(matches!(err, DbError::Constraint { .. }), "got {:?}", err);
    assert_eq!(count(&f.db, "SELECT COUNT(*) FROM cards").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn creator_missing_is_not_found() {
    let f = setup().await;

    // A card inserted without its owner link
    let orphan_id = Uuid::new_v4();
    sqlx::query("INSERT INTO cards (id, title, list_id) VALUES (?, ?, ?)")
        .bind(orphan_id.to_string())
        .bind("Orphan")
        .bind(f.list_id.to_string())
        .execute(f.db.pool())
        .await
        .unwrap();

    let err = f
        .db
        .cards()
        .get_with_creator(orphan_id)
        .await
        .expect_err("Lookup should fail");
    assert!(matches!(err, DbError::NotFound { .. }));

    let err = f
        .db
        .cards()
        .get_with_creator(Uuid::new_v4())
        .await
        .expect_err("Lookup should fail");
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn members_lists_owner_first() {
    let f = setup().await;
    let card = f
        .db
        .cards()
        .create(&new_card(f.list_id, f.owner.id))
        .await
        .unwrap();

    let helper = f
        .db
        .users()
        .create(&NewUser {
            name: "Bob".to_string(),
            email: None,
        })
        .await
        .unwrap();

    let link = f
        .db
        .card_users()
        .create(&CardUser {
            card_id: card.id,
            user_id: helper.id,
            is_owner: false,
        })
        .await
        .expect("Link should succeed");
    assert_eq!(link.user_id, helper.id);
    assert!(!link.is_owner);

    let members = f.db.cards().members(card.id).await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user, f.owner);
    assert!(members[0].is_owner);
    assert_eq!(members[1].user, helper);
    assert!(!members[1].is_owner);
}

#[tokio::test(flavor = "multi_thread")]
async fn creator_is_the_first_owner_linked() {
    let f = setup().await;
    let card = f
        .db
        .cards()
        .create(&new_card(f.list_id, f.owner.id))
        .await
        .unwrap();

    for name in ["Aaron", "Abby", "Zoe"] {
        let extra = f
            .db
            .users()
            .create(&NewUser {
                name: name.to_string(),
                email: None,
            })
            .await
            .unwrap();
        f.db.card_users()
            .create(&CardUser {
                card_id: card.id,
                user_id: extra.id,
                is_owner: true,
            })
            .await
            .expect("Extra owner link should succeed");
    }

    let with_creator = f.db.cards().get_with_creator(card.id).await.unwrap();
    assert_eq!(with_creator.creator, f.owner);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_card_user_link_is_constraint_error() {
    let f = setup().await;
    let card = f
        .db
        .cards()
        .create(&new_card(f.list_id, f.owner.id))
        .await
        .unwrap();

    let err = f
        .db
        .card_users()
        .create(&CardUser {
            card_id: card.id,
            user_id: f.owner.id,
            is_owner: false,
        })
        .await
        .expect_err("Duplicate link should fail");

    assert!(matches!(err, DbError::Constraint { .. }), "got {:?}", err);
}
