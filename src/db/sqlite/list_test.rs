//! Tests for SqliteListRepository.

use uuid::Uuid;

use crate::db::{
    Board, BoardRepository, Database, DbError, ListRepository, NewBoard, NewList, NewUser,
    SqliteDatabase, UserRepository,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

async fn create_test_board(db: &SqliteDatabase, name: &str) -> Board {
    let admin = db
        .users()
        .create(&NewUser {
            name: format!("{} admin", name),
            email: None,
        })
        .await
        .unwrap();

    db.boards()
        .create(&NewBoard {
            name: name.to_string(),
            admin_user_id: admin.id,
        })
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn list_scoped_to_board() {
    let db = setup_db().await;
    let roadmap = create_test_board(&db, "Roadmap").await;
    let ops = create_test_board(&db, "Ops").await;

    let todo = db
        .lists()
        .create(&NewList {
            name: "Todo".to_string(),
            board_id: roadmap.id,
        })
        .await
        .expect("Create list should succeed");
    db.lists()
        .create(&NewList {
            name: "Incidents".to_string(),
            board_id: ops.id,
        })
        .await
        .expect("Create list should succeed");

    let scoped = db.lists().list(Some(roadmap.id)).await.unwrap();
    assert_eq!(scoped, vec![todo]);

    let all = db.lists().list(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_requires_existing_board() {
    let db = setup_db().await;

    let err = db
        .lists()
        .create(&NewList {
            name: "Todo".to_string(),
            board_id: Uuid::new_v4(),
        })
        .await
        .expect_err("Create list should fail");

    assert!(matches!(err, DbError::Constraint { .. }), "got {:?}", err);
    assert!(db.lists().list(None).await.unwrap().is_empty());
}
