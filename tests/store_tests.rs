//! Integration tests for the data store.
//!
//! Covers the load/seed pipeline, CRUD with cascade delete, derived contest
//! challenges, import/export, reset and best-effort saving, against both the
//! in-memory and the SQLite backend.

use serde_json::Map;
use vaic_store::{
    store::seed, Challenge, ChallengeType, Collection, Contest, ContestAttempt, Difficulty,
    KeyValueStore, MemoryStore, Patch, SqliteStore, Store, UserProgress,
};

fn fresh_store() -> Store<MemoryStore> {
    Store::open(MemoryStore::new())
}

fn contest(id: &str, max_attempts: f64) -> Contest {
    Contest {
        id: id.to_string(),
        title: format!("Contest {}", id),
        description: "Integration test contest".to_string(),
        challenges: Vec::new(),
        time_limit: 15.0,
        start_date: "2024-03-01".to_string(),
        end_date: "2024-03-31".to_string(),
        is_active: true,
        max_attempts,
        created_by: "admin".to_string(),
        is_public: false,
        extra: Map::new(),
    }
}

fn challenge(id: &str, contest_id: &str) -> Challenge {
    Challenge {
        id: id.to_string(),
        question: format!("Question {}?", id),
        kind: ChallengeType::Text,
        options: None,
        correct_answer: "answer".to_string(),
        points: 5.0,
        difficulty: Difficulty::Medium,
        contest_id: contest_id.to_string(),
        extra: Map::new(),
    }
}

fn attempt(id: &str, user_id: &str, contest_id: &str) -> ContestAttempt {
    ContestAttempt {
        id: id.to_string(),
        user_id: user_id.to_string(),
        contest_id: contest_id.to_string(),
        start_time: "2024-03-02T08:00:00Z".to_string(),
        end_time: None,
        score: 0.0,
        max_score: Some(65.0),
        answers: Default::default(),
        is_completed: false,
        extra: Map::new(),
    }
}

// ===========================================================================
// Load / seed
// ===========================================================================

mod load {
    use super::*;

    #[test]
    fn test_first_open_uses_seed_without_writing() {
        let store = fresh_store();

        assert_eq!(store.get_users(), seed::users().as_slice());
        assert_eq!(store.get_challenges(), seed::challenges().as_slice());
        assert!(store.get_contest_attempts().is_empty());
        assert!(store.get_user_progress().is_empty());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_reopen_adopts_saved_collections() {
        let mut store = fresh_store();
        store.add_contest(contest("x", 1.0));
        let backend = store.into_backend();

        let reopened = Store::open(backend);
        assert!(reopened.find_contest("x").is_some());
        assert_eq!(reopened.get_contests().len(), 3);
    }

    #[test]
    fn test_unparseable_collection_is_reseeded() {
        let mut backend = MemoryStore::new();
        backend.set("vaic_users", "definitely not json").unwrap();
        backend.set("vaic_events", "[]").unwrap();

        let store = Store::open(backend);
        assert_eq!(store.get_users(), seed::users().as_slice());
        assert!(store.get_events().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_reseeded() {
        let mut backend = MemoryStore::new();
        backend.set("vaic_challenges", r#"[{"id": 1}]"#).unwrap();

        let store = Store::open(backend);
        assert_eq!(store.get_challenges(), seed::challenges().as_slice());
    }

    #[test]
    fn test_fractional_numbers_from_web_front_end_are_adopted() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                "vaic_users",
                r#"[{"id":"7","username":"Half","email":"half@vaic.com","password":"p",
                    "score":12.5,"role":"user","joinDate":"2024-02-02"}]"#,
            )
            .unwrap();
        backend
            .set(
                "vaic_challenges",
                r#"[{"id":"c1","question":"q","type":"text","correctAnswer":"a",
                    "points":2.5,"difficulty":"easy","contestId":"contest1"}]"#,
            )
            .unwrap();

        let mut store = Store::open(backend);
        let ids: Vec<_> = store.get_users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["7"]);
        assert_eq!(store.get_users()[0].score, 12.5);
        assert_eq!(store.get_challenges()[0].points, 2.5);

        // A later save keeps the value as written
        store.delete_event("1");
        let stored = store.backend().get("vaic_users").unwrap().unwrap();
        assert!(stored.contains("\"score\":12.5"));
    }

    #[test]
    fn test_namespace_isolates_keys() {
        let mut store = Store::open_namespaced(MemoryStore::new(), "staging");
        store.delete_event("1");

        assert!(store.backend().contains("staging_events"));
        assert!(store.backend().contains("staging_data_store"));
        assert!(!store.backend().contains("vaic_events"));
    }
}

// ===========================================================================
// CRUD
// ===========================================================================

mod crud {
    use super::*;

    #[test]
    fn test_add_appends_and_persists_every_key() {
        let mut store = fresh_store();
        store.add_challenge(challenge("c9", "contest1"));

        assert_eq!(store.get_challenges().last().map(|c| c.id.as_str()), Some("c9"));
        for key in store.keys().all() {
            assert!(store.backend().contains(&key), "missing {}", key);
        }
    }

    #[test]
    fn test_add_does_not_check_duplicates() {
        let mut store = fresh_store();
        let mut copy = seed::users()[0].clone();
        copy.username = "Twin".to_string();
        store.add_user(copy);

        assert_eq!(store.get_users().iter().filter(|u| u.id == "1").count(), 2);
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut store = fresh_store();
        store.update_user("1", &Patch::new().set("score", 5));

        let user = store.find_user("1").unwrap();
        assert_eq!(user.score, 5.0);
        assert_eq!(user.username, "AIExplorer");
        assert_eq!(user.student_id.as_deref(), Some("SV001"));

        let stored = store.backend().get("vaic_users").unwrap().unwrap();
        assert!(stored.contains("\"score\":5"));
    }

    #[test]
    fn test_update_missing_id_is_silent_noop() {
        let mut store = fresh_store();
        let before = store.get_users().to_vec();

        store.update_user("admin-missing", &Patch::new().set("score", 5));

        assert_eq!(store.get_users(), before.as_slice());
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_delete_missing_id_is_silent_noop() {
        let mut store = fresh_store();
        let before = store.data().clone();

        store.delete_user("ghost");
        store.delete_event("ghost");
        store.delete_contest("ghost");

        assert_eq!(store.data(), &before);
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_update_with_bad_type_is_rejected() {
        let mut store = fresh_store();
        store.update_challenge("1", &Patch::new().set("points", "many"));

        assert_eq!(store.get_challenges()[0].points, 10.0);
        assert!(store.backend().is_empty());
    }

    #[test]
    fn test_attempts_and_progress_are_append_and_update_only() {
        let mut store = fresh_store();
        store.add_contest_attempt(attempt("a1", "1", "contest1"));
        store.add_contest_attempt(attempt("a2", "2", "contest1"));
        store.update_contest_attempt(
            "a1",
            &Patch::new()
                .set("score", 40)
                .set("isCompleted", true)
                .set("endTime", "2024-03-02T08:20:00Z"),
        );

        let mine: Vec<_> = store.attempts_for_user("1").collect();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].score, 40.0);
        assert!(mine[0].is_completed);
        assert_eq!(mine[0].end_time.as_deref(), Some("2024-03-02T08:20:00Z"));

        store.add_user_progress(UserProgress {
            id: "p1".to_string(),
            user_id: "1".to_string(),
            total_contests: 1.0,
            completed_contests: 1.0,
            total_score: 40.0,
            average_score: 40.0,
            last_activity: None,
            extra: Map::new(),
        });
        store.update_user_progress("p1", &Patch::new().set("totalScore", 90));
        assert_eq!(store.get_user_progress()[0].total_score, 90.0);

        assert!(!Collection::ContestAttempts.supports_delete());
        assert!(!Collection::UserProgress.supports_delete());
    }

    #[test]
    fn test_update_reports_whether_it_applied() {
        let mut store = fresh_store();
        store.add_user_progress(UserProgress {
            id: "p1".to_string(),
            user_id: "1".to_string(),
            total_contests: 1.0,
            completed_contests: 0.0,
            total_score: 0.0,
            average_score: f64::NAN,
            last_activity: None,
            extra: Map::new(),
        });

        assert!(!store.update_user_progress("p1", &Patch::new().set("totalScore", "lots")));
        assert!(!store.update_user_progress("p9", &Patch::new().set("totalScore", 3)));
        assert_eq!(store.get_user_progress()[0].total_score, 0.0);

        // Patching a record holding NaN works
        assert!(store.update_user_progress("p1", &Patch::new().set("totalScore", 3)));
        assert_eq!(store.get_user_progress()[0].total_score, 3.0);
        assert!(store.get_user_progress()[0].average_score.is_nan());

        assert!(store.update_user("1", &Patch::new().set("score", 151)));
        assert!(!store.update_user("1", &Patch::new().set("role", "owner")));
    }

    #[test]
    fn test_forum_replies_are_replaced_whole() {
        let mut store = fresh_store();
        store.update_forum_topic("1", &Patch::new().set("replies", serde_json::json!([])));

        let topic = &store.get_forum_topics()[0];
        assert!(topic.replies.is_empty());
        assert!(topic.is_pinned);
    }
}

// ===========================================================================
// Contests and challenges
// ===========================================================================

mod contests {
    use super::*;

    #[test]
    fn test_delete_contest_cascades_to_challenges() {
        let mut store = fresh_store();
        store.add_contest(contest("x", 1.0));
        store.add_challenge(challenge("y", "x"));

        let users_before = store.get_users().to_vec();
        let events_before = store.get_events().to_vec();

        store.delete_contest("x");

        assert!(store.get_contests().iter().all(|c| c.id != "x"));
        assert!(store.get_challenges().iter().all(|c| c.id != "y"));
        assert_eq!(store.get_challenges(), seed::challenges().as_slice());
        assert_eq!(store.get_users(), users_before.as_slice());
        assert_eq!(store.get_events(), events_before.as_slice());

        let stored = store.backend().get("vaic_challenges").unwrap().unwrap();
        assert!(!stored.contains("\"contestId\":\"x\""));
    }

    #[test]
    fn test_contest_view_tracks_live_challenges() {
        let mut store = fresh_store();
        let first = store.find_contest("contest2").unwrap();
        assert_eq!(first.challenges.len(), 2);

        store.add_challenge(challenge("extra", "contest2"));
        store.delete_challenge("4");

        for contest in store.get_contests() {
            let expected: Vec<Challenge> = store
                .get_challenges()
                .iter()
                .filter(|c| c.contest_id == contest.id)
                .cloned()
                .collect();
            assert_eq!(contest.challenges, expected);
        }

        let ids: Vec<_> = store
            .find_contest("contest2")
            .unwrap()
            .challenges
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["5".to_string(), "extra".to_string()]);
    }

    #[test]
    fn test_contest_challenges_are_never_stored() {
        let mut store = fresh_store();
        let mut with_view = contest("x", 2.0);
        with_view.challenges = vec![challenge("ghost", "x")];
        store.add_contest(with_view);

        // The carried challenge did not become a real one
        assert!(store.get_challenges().iter().all(|c| c.id != "ghost"));
        assert!(store.find_contest("x").unwrap().challenges.is_empty());

        store.update_contest(
            "x",
            &Patch::new()
                .set("challenges", serde_json::json!([{"id": "ghost"}]))
                .set("title", "Renamed"),
        );
        assert_eq!(store.find_contest("x").unwrap().title, "Renamed");

        let stored = store.backend().get("vaic_contests").unwrap().unwrap();
        assert!(!stored.contains("challenges"));
    }

    #[test]
    fn test_delete_unknown_contest_keeps_orphan_challenges() {
        let mut store = fresh_store();
        store.add_challenge(challenge("orphan", "ghost"));
        let before = store.data().clone();
        let stored = store.backend().get("vaic_challenges").unwrap();

        store.delete_contest("ghost");

        assert_eq!(store.data(), &before);
        assert!(store.get_challenges().iter().any(|c| c.id == "orphan"));
        assert_eq!(store.backend().get("vaic_challenges").unwrap(), stored);
    }
}

// ===========================================================================
// Import / export
// ===========================================================================

mod transfer {
    use super::*;

    #[test]
    fn test_round_trip_each_scope() {
        let mut store = fresh_store();
        store.add_contest_attempt(attempt("a1", "1", "contest1"));

        let users = store.export_users().unwrap();
        let contests = store.export_contests().unwrap();
        let events = store.export_events().unwrap();
        let forum = store.export_forum().unwrap();
        let before = store.data().clone();

        let mut other = Store::open(MemoryStore::new());
        other.reset();
        assert!(other.import_users(&users));
        assert!(other.import_contests(&contests));
        assert!(other.import_events(&events));
        assert!(other.import_forum(&forum));

        assert_eq!(other.get_users(), before.users.as_slice());
        assert_eq!(other.data().contests, before.contests);
        assert_eq!(other.get_challenges(), before.challenges.as_slice());
        assert_eq!(other.get_contest_attempts(), before.contest_attempts.as_slice());
        assert_eq!(other.get_events(), before.events.as_slice());
        assert_eq!(other.get_forum_topics(), before.forum_topics.as_slice());
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let store = fresh_store();
        let text = store.export_events().unwrap();
        assert!(text.starts_with("[\n  {"));
    }

    #[test]
    fn test_import_replaces_instead_of_merging() {
        let mut store = fresh_store();
        assert!(store.import_events("[]"));
        assert!(store.get_events().is_empty());
        assert_eq!(store.backend().get("vaic_events").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_malformed_imports_change_nothing() {
        let mut store = fresh_store();
        store.add_user(seed::users()[1].clone());
        let before = store.export_data().unwrap();

        assert!(!store.import_data("{"));
        assert!(!store.import_data(r#"{"users": []}"#));
        assert!(!store.import_users(r#"{"not": "a list"}"#));
        assert!(!store.import_contests("[]"));
        assert!(!store.import_events("nope"));
        assert!(!store.import_forum(r#"[{"id": "1"}]"#));

        assert_eq!(store.export_data().unwrap(), before);
    }

    #[test]
    fn test_full_import_keeps_unknown_fields() {
        let mut source = fresh_store();
        source.delete_user("2");
        let mut bundle: serde_json::Value =
            serde_json::from_str(&source.export_data().unwrap()).unwrap();
        bundle["theme"] = serde_json::json!("dark");

        let mut store = fresh_store();
        assert!(store.import_data(&bundle.to_string()));

        assert_eq!(store.get_users().len(), 3);
        assert_eq!(store.data().extra.get("theme"), Some(&serde_json::json!("dark")));

        let backup = store.backend().get("vaic_data_store").unwrap().unwrap();
        assert!(backup.contains("\"theme\":\"dark\""));
    }
}

// ===========================================================================
// Reset, timestamps and summary
// ===========================================================================

mod maintenance {
    use super::*;

    #[test]
    fn test_reset_restores_seed_and_persists_it() {
        let mut store = fresh_store();
        store.add_contest_attempt(attempt("a1", "1", "contest1"));
        store.delete_contest("contest1");
        store.backend_mut().set("vaic_events", "garbage").unwrap();
        let before_reset = store.last_updated();

        store.reset();

        assert_eq!(store.get_users(), seed::users().as_slice());
        assert_eq!(store.data().contests, seed::contests());
        assert_eq!(store.get_challenges(), seed::challenges().as_slice());
        assert!(store.get_contest_attempts().is_empty());
        assert!(store.get_user_progress().is_empty());
        assert_eq!(store.get_events(), seed::events().as_slice());
        assert!(store.last_updated() >= before_reset);

        let reopened = Store::open(store.into_backend());
        assert_eq!(reopened.get_events(), seed::events().as_slice());
        assert_eq!(reopened.get_challenges(), seed::challenges().as_slice());
    }

    #[test]
    fn test_last_updated_never_moves_backwards() {
        let mut store = fresh_store();
        let mut previous = store.last_updated();
        for i in 0..5 {
            store.update_user("1", &Patch::new().set("score", i));
            assert!(store.last_updated() >= previous);
            previous = store.last_updated();
        }
    }

    #[test]
    fn test_failed_write_does_not_stop_siblings() {
        let mut store = fresh_store();
        store.backend_mut().fail_writes_to("vaic_users");

        store.update_user("1", &Patch::new().set("score", 7));
        store.add_event(seed::events()[0].clone());

        // Memory stays authoritative
        assert_eq!(store.find_user("1").unwrap().score, 7.0);
        assert_eq!(store.get_events().len(), 2);

        let backend = store.backend();
        assert!(!backend.contains("vaic_users"));
        assert!(backend.contains("vaic_events"));
        assert!(backend.contains("vaic_forum_topics"));
        assert!(backend.contains("vaic_data_store"));
    }

    #[test]
    fn test_quota_failure_on_backup_keeps_collections() {
        // Large enough for each collection, too small for the whole bundle
        let probe = fresh_store().summary();
        let largest = Collection::ALL
            .iter()
            .map(|&c| probe.bytes(c))
            .max()
            .unwrap();
        let mut store = Store::open(MemoryStore::with_quota(largest));
        store.delete_user("3");

        assert!(store.backend().contains("vaic_users"));
        assert!(!store.backend().contains("vaic_data_store"));
        assert_eq!(store.get_users().len(), 3);
    }

    #[test]
    fn test_summary_reports_counts_and_sizes() {
        let mut store = fresh_store();
        store.add_contest_attempt(attempt("a1", "1", "contest1"));

        let summary = store.summary();
        assert_eq!(summary.count(Collection::Users), 4);
        assert_eq!(summary.count(Collection::Contests), 2);
        assert_eq!(summary.count(Collection::Challenges), 5);
        assert_eq!(summary.count(Collection::ContestAttempts), 1);
        assert_eq!(summary.count(Collection::UserProgress), 0);
        assert_eq!(summary.bytes(Collection::UserProgress), 2);
        assert_eq!(summary.last_updated, store.last_updated());

        let stored = store.backend().get("vaic_users").unwrap().unwrap();
        assert_eq!(summary.bytes(Collection::Users), stored.len());
        assert_eq!(summary.total_records(), 4 + 2 + 5 + 1 + 1 + 1);
    }
}

// ===========================================================================
// Save and reopen
// ===========================================================================

mod reopen {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;
    use vaic_store::{Event, ForumReply, ForumTopic, User, UserRole};

    fn extra(field: &str, value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(field.to_string(), value);
        map
    }

    fn progress(id: &str, completed: f64, total_score: f64) -> UserProgress {
        UserProgress {
            id: id.to_string(),
            user_id: "1".to_string(),
            total_contests: 2.0,
            completed_contests: completed,
            total_score,
            average_score: total_score / completed,
            last_activity: Some("2024-03-02T08:20:00Z".to_string()),
            extra: Map::new(),
        }
    }

    /// Add one record with awkward values to every collection.
    fn fill<K: KeyValueStore>(store: &mut Store<K>) {
        store.add_user(User {
            id: "u1".to_string(),
            username: "Nguyễn Văn \"A\"".to_string(),
            email: "a@vaic.com".to_string(),
            password: "p\nq".to_string(),
            score: 12.5,
            role: UserRole::Admin,
            join_date: "2024-02-29".to_string(),
            student_id: None,
            extra: extra("avatar", json!({"url": "cat.png", "size": [64, 64]})),
        });

        let mut odd = contest("odd", 0.0);
        odd.time_limit = 7.5;
        odd.extra = extra("banner", json!(null));
        store.add_contest(odd);

        let mut pick = challenge("pick", "odd");
        pick.kind = ChallengeType::MultipleChoice;
        pick.options = Some(Vec::new());
        pick.points = 0.25;
        pick.difficulty = Difficulty::Hard;
        store.add_challenge(pick);

        let mut run = attempt("run", "u1", "odd");
        run.score = -1.5;
        run.max_score = None;
        run.end_time = Some("2024-03-02T08:20:00Z".to_string());
        run.answers = BTreeMap::from([
            ("pick".to_string(), String::new()),
            ("1".to_string(), "Artificial Intelligence".to_string()),
        ]);
        run.is_completed = true;
        store.add_contest_attempt(run);

        // 0 / 0 before any contest is completed
        store.add_user_progress(progress("p-none", 0.0, 0.0));
        store.add_user_progress(progress("p-big", 2.0, 1e21));
        store.add_user_progress(progress("p-frac", 3.0, 0.1));

        store.add_event(Event {
            id: "e1".to_string(),
            title: "Draft".to_string(),
            content: "Line one\nLine \"two\"".to_string(),
            author: "admin".to_string(),
            author_name: "Admin".to_string(),
            created_at: "2024-03-01T00:00:00Z".to_string(),
            updated_at: "2024-03-01T00:00:00Z".to_string(),
            is_published: false,
            tags: Vec::new(),
            extra: Map::new(),
        });

        store.add_forum_topic(ForumTopic {
            id: "t1".to_string(),
            title: "Empty topic".to_string(),
            content: "…".to_string(),
            author: "u1".to_string(),
            author_name: "A".to_string(),
            created_at: "2024-03-01T00:00:00Z".to_string(),
            updated_at: "2024-03-01T00:00:00Z".to_string(),
            replies: vec![ForumReply {
                id: "r1".to_string(),
                content: String::new(),
                author: "2".to_string(),
                author_name: "TechWizard".to_string(),
                created_at: "2024-03-01T01:00:00Z".to_string(),
                topic_id: "t1".to_string(),
                extra: extra("likes", json!(2.5)),
            }],
            tags: vec!["ai".to_string()],
            is_pinned: false,
            extra: Map::new(),
        });
    }

    /// Everything the store holds, minus the timestamp that a load resets.
    fn snapshot<K: KeyValueStore>(store: &Store<K>) -> Value {
        let mut value = serde_json::to_value(store.data()).unwrap();
        if let Value::Object(fields) = &mut value {
            fields.remove("lastUpdated");
        }
        value
    }

    fn assert_survives_reopen<K: KeyValueStore>(backend: K) {
        let mut store = Store::open(backend);
        fill(&mut store);
        let saved = snapshot(&store);
        let counts = store.summary();

        let reopened = Store::open(store.into_backend());

        assert_eq!(snapshot(&reopened), saved);
        for collection in Collection::ALL {
            assert_eq!(
                reopened.summary().count(collection),
                counts.count(collection),
                "{} count changed",
                collection
            );
        }

        let progress = reopened.get_user_progress();
        assert!(progress[0].average_score.is_nan());
        assert_eq!(progress[1].total_score, 1e21);
        assert_eq!(progress[2].total_score, 0.1);
        assert_eq!(reopened.find_user("u1").unwrap().score, 12.5);
        assert_eq!(reopened.find_contest("odd").unwrap().challenges.len(), 1);
    }

    #[test]
    fn test_every_collection_survives_reopen_in_memory() {
        assert_survives_reopen(MemoryStore::new());
    }

    #[test]
    fn test_every_collection_survives_reopen_on_sqlite() -> anyhow::Result<()> {
        assert_survives_reopen(SqliteStore::open_in_memory()?);
        Ok(())
    }

    #[test]
    fn test_nan_progress_keeps_whole_history() {
        let mut store = fresh_store();
        store.add_user_progress(progress("p1", 0.0, 0.0));
        store.add_user_progress(progress("p2", 2.0, 90.0));

        let stored = store.backend().get("vaic_user_progress").unwrap().unwrap();
        assert!(stored.contains("\"averageScore\":null"));

        let mut reopened = Store::open(store.into_backend());
        assert_eq!(reopened.get_user_progress().len(), 2);

        // The next save writes the history back, not an empty seed
        reopened.delete_event("1");
        let reopened = Store::open(reopened.into_backend());
        assert_eq!(reopened.get_user_progress().len(), 2);
        assert_eq!(reopened.get_user_progress()[1].average_score, 45.0);
    }
}

// ===========================================================================
// SQLite backend
// ===========================================================================

mod sqlite {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_survives_restart_on_disk() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("store.db");

        {
            let mut store = Store::open(SqliteStore::open(&path)?);
            store.add_contest(contest("x", 1.0));
            store.add_challenge(challenge("y", "x"));
        }

        let mut store = Store::open(SqliteStore::open(&path)?);
        assert_eq!(store.find_contest("x").unwrap().challenges.len(), 1);

        store.delete_contest("x");
        let store = Store::open(SqliteStore::open(&path)?);
        assert!(store.find_contest("x").is_none());
        assert!(store.get_challenges().iter().all(|c| c.id != "y"));
        Ok(())
    }

    #[test]
    fn test_reset_clears_all_owned_keys() -> anyhow::Result<()> {
        let mut store = Store::open(SqliteStore::open_in_memory()?);
        store.add_user(seed::users()[0].clone());
        store.reset();

        let keys = store.backend().keys_with_prefix("vaic_")?;
        assert_eq!(keys.len(), 8);
        assert_eq!(store.get_users(), seed::users().as_slice());
        Ok(())
    }
}
