//! Integration tests for the chat session core
//!
//! Timers run on tokio's paused clock, so the one-second reply delay
//! resolves instantly and deterministically.

use std::time::Duration;
use varuna::session::{
    ChatSession, DEFAULT_REPLY_DELAY, Hydration, JUST_NOW, ScheduledReply, ScrollCoordinator,
    format_timestamp,
};
use varuna::types::{BOOTSTRAP_CREATED_AT, MessageOrigin, Role};

async fn settle(session: &mut ChatSession, scheduled: ScheduledReply) {
    if let Some(reply) = scheduled.wait().await {
        session.deliver(reply);
    }
}

mod timeline_tests {
    use super::*;

    #[test]
    fn test_session_starts_with_bootstrap() {
        let session = ChatSession::default();
        assert_eq!(session.len(), 1);
        let first = &session.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.created_at, BOOTSTRAP_CREATED_AT);
        assert!(first.is_bootstrap());
    }

    #[test]
    fn test_blank_input_changes_nothing() {
        let mut session = ChatSession::default();
        for input in ["", "   ", "\n\t "] {
            assert!(session.submit(input).is_none());
        }
        assert_eq!(session.len(), 1);
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_reply() {
        let mut session = ChatSession::default();
        let scheduled = session.submit("  Salinity Levels ").expect("admitted");
        assert_eq!(session.len(), 2);

        let user = &session.messages()[1];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.origin, MessageOrigin::Typed);
        assert_eq!(user.content, "Salinity Levels");
        assert_eq!(session.pending_replies(), 1);

        settle(&mut session, scheduled).await;
        assert_eq!(session.len(), 3);
        let reply = &session.messages()[2];
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.origin, MessageOrigin::Reply);
        assert!(reply.content.contains("salinity levels"));
        assert_eq!(session.pending_replies(), 0);
    }

    #[test]
    fn test_admission_needs_no_async_runtime() {
        // Plain test thread: no tokio reactor exists until the timer is polled.
        let mut session = ChatSession::new(Duration::from_millis(250));
        let typed = session.submit("salinity").expect("admitted");
        let seeded = session.admit_initial(Some("floats")).expect("admitted");
        assert_eq!(session.len(), 3);
        assert_eq!(session.pending_replies(), 2);
        assert_eq!(typed.pending().delay, Duration::from_millis(250));
        assert_eq!(seeded.pending().reply_to, session.messages()[2].id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let mut session = ChatSession::new(Duration::from_millis(1000));
        let scheduled = session.submit("floats").unwrap();
        let started = tokio::time::Instant::now();
        settle(&mut session, scheduled).await;
        assert!(started.elapsed() >= DEFAULT_REPLY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique() {
        let mut session = ChatSession::default();
        let a = session.submit("one").unwrap();
        let b = session.submit("two").unwrap();
        let (a, b) = tokio::join!(a.wait(), b.wait());
        session.deliver(a.unwrap());
        session.deliver(b.unwrap());

        let mut ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_replies_each_arrive_once() {
        let mut session = ChatSession::default();
        let first = session.submit("Temperature").unwrap();
        let second = session.submit("Currents").unwrap();
        let (a, b) = tokio::join!(first.wait(), second.wait());
        // Deliver in reverse to mirror timers firing out of send order.
        session.deliver(b.unwrap());
        session.deliver(a.unwrap());

        assert_eq!(session.len(), 5);
        let replies: Vec<_> = session
            .messages()
            .iter()
            .filter(|m| m.origin == MessageOrigin::Reply)
            .collect();
        assert_eq!(replies.len(), 2);
        assert!(replies.iter().any(|m| m.content.contains("temperature")));
        assert!(replies.iter().any(|m| m.content.contains("currents")));
    }
}

mod initial_message_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_initial_message_end_to_end() {
        let mut session = ChatSession::default();
        let scheduled = session
            .admit_initial(Some("Show temperature data"))
            .expect("admitted");
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[1].content, "Show temperature data");
        assert_eq!(session.messages()[1].origin, MessageOrigin::Initial);

        settle(&mut session, scheduled).await;
        assert_eq!(session.len(), 3);
        assert!(session.messages()[2].content.contains("show temperature data"));

        // Page re-renders and supplies the same value again.
        assert!(session.admit_initial(Some("Show temperature data")).is_none());
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_absent_initial_message_is_skipped() {
        let mut session = ChatSession::default();
        assert!(session.admit_initial(None).is_none());
        assert!(session.admit_initial(Some("  ")).is_none());
        assert_eq!(session.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_after_typed_message_is_skipped() {
        let mut session = ChatSession::default();
        let seed = session.admit_initial(Some("floats")).unwrap();
        settle(&mut session, seed).await;
        let typed = session.submit("something else").unwrap();
        settle(&mut session, typed).await;
        assert_eq!(session.len(), 5);

        assert!(session.admit_initial(Some("floats")).is_none());
        assert_eq!(session.len(), 5);
    }

    #[test]
    fn test_new_seed_value_is_admitted() {
        let mut session = ChatSession::default();
        assert!(session.admit_initial(Some("salinity")).is_some());
        assert!(session.admit_initial(Some("trends")).is_some());
        assert_eq!(session.len(), 3);
    }
}

mod teardown_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_reply() {
        let mut session = ChatSession::default();
        let scheduled = session.submit("trends").unwrap();
        session.teardown();
        session.teardown();
        assert_eq!(session.pending_replies(), 0);
        assert!(scheduled.wait().await.is_none());
        assert_eq!(session.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_session_cancels_timer() {
        let mut session = ChatSession::default();
        let scheduled = session.submit("trends").unwrap();
        drop(session);
        assert!(scheduled.wait().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reply_is_not_delivered() {
        let mut session = ChatSession::default();
        let scheduled = session.submit("floats").unwrap();
        let reply = scheduled.pending().clone();
        session.teardown();
        assert!(session.deliver(reply).is_none());
        assert_eq!(session.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_delivered_once() {
        let mut session = ChatSession::default();
        let scheduled = session.submit("floats").unwrap();
        let reply = scheduled.wait().await.unwrap();
        assert!(session.deliver(reply.clone()).is_some());
        assert!(session.deliver(reply).is_none());
        assert_eq!(session.len(), 3);
    }
}

mod presentation_tests {
    use super::*;

    #[test]
    fn test_hydration_gates_timestamps() {
        let mut session = ChatSession::default();
        session.submit("salinity");
        assert_eq!(session.hydration(), Hydration::Hydrating);
        for msg in session.messages() {
            assert_eq!(session.display_time(msg), "");
        }

        session.mark_hydrated();
        assert!(session.is_hydrated());
        assert_eq!(session.display_time(&session.messages()[0]), JUST_NOW);
        assert_ne!(session.display_time(&session.messages()[1]), JUST_NOW);
        assert_ne!(session.display_time(&session.messages()[1]), "");
    }

    #[test]
    fn test_bootstrap_is_just_now_even_when_old() {
        let session = ChatSession::default();
        assert_eq!(format_timestamp(&session.messages()[0], true), "Just now");
    }

    #[test]
    fn test_scroll_follows_growth() {
        let mut session = ChatSession::default();
        let mut scroll = ScrollCoordinator::new();
        assert!(scroll.observe(session.timeline()).is_some());
        assert!(scroll.observe(session.timeline()).is_none());

        session.submit("Recent float trajectories");
        let request = scroll.observe(session.timeline()).unwrap();
        assert_eq!(request.target, session.messages()[1].id);
    }

    #[test]
    fn test_message_shape() {
        let session = ChatSession::default();
        let value = serde_json::to_value(&session.messages()[0]).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["origin"], "bootstrap");
        assert_eq!(value["createdAt"], BOOTSTRAP_CREATED_AT.unix_timestamp());
        assert!(value["content"].as_str().unwrap().starts_with("Hello!"));
        assert_eq!(value["suggestions"].as_array().unwrap().len(), 4);
    }
}
