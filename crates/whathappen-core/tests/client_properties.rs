//! Property-based tests for the counter engine.
//!
//! Properties hold for any number of calls and any ring capacity, not just
//! the reference configuration.

use proptest::prelude::*;
use whathappen_core::{Client, ClientAction, ClientConfig, ClientState};

fn client_with_capacity(capacity: usize) -> Client {
    Client::with_config(ClientConfig { capacity, ..ClientConfig::default() })
}

#[test]
fn five_start_calls_end_to_end() {
    let mut client = Client::new();
    let mut transcript = Vec::new();
    let mut handles = Vec::new();

    for _ in 0..5 {
        let (handle, actions) = client.start(10, 10).into_parts();
        handles.push(handle);
        transcript.extend(actions.iter().map(ToString::to_string));
    }

    assert_eq!(handles, vec![40; 5]);
    assert_eq!(transcript, vec!["false"; 5]);

    let state = client.state();
    let summary = format!(
        "in={} out={} index={} buffer={:?}",
        state.in_count(),
        state.out_count(),
        state.index(),
        state.buffer()
    );
    insta::assert_snapshot!(summary, @"in=5 out=-5 index=0 buffer=[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]");
}

#[test]
fn initialize_matches_default_client_state() {
    assert_eq!(Client::new().state(), &ClientState::initialize());
}

proptest! {
    #[test]
    fn prop_each_start_moves_counters_by_one(calls in 0usize..200) {
        let mut client = Client::new();

        for call in 1..=calls {
            let outcome = client.start(10, 10);
            prop_assert_eq!(outcome.value, 40);
            prop_assert_eq!(outcome.actions, vec![ClientAction::Diagnostic { observation: false }]);
            prop_assert_eq!(client.state().in_count(), call as i32);
            prop_assert_eq!(client.state().out_count(), -(call as i32));
        }
    }

    #[test]
    fn prop_record_message_index_cycles(capacity in 0usize..32, calls in 0usize..200) {
        let mut client = client_with_capacity(capacity);

        for _ in 0..calls {
            client.record_message();
        }

        // Every cycle is `capacity` writes followed by one reset.
        prop_assert_eq!(client.state().index(), calls % (capacity + 1));
        prop_assert_eq!(client.state().buffer().len(), capacity);

        let written = calls.min(capacity);
        let expected = if capacity == 0 { -1 } else { capacity as i32 * 2 };
        for (slot, value) in client.state().buffer().iter().enumerate() {
            if slot < written {
                prop_assert_eq!(*value, expected);
            } else {
                prop_assert_eq!(*value, 0);
            }
        }
    }

    #[test]
    fn prop_handle_scales_with_capacity(capacity in 0usize..1000) {
        let mut client = client_with_capacity(capacity);
        let outcome = client.start(0, 0);
        prop_assert_eq!(outcome.value, 4 * capacity as i32);
        prop_assert_eq!(outcome.diagnostics(), 1);
    }

    #[test]
    fn prop_record_message_leaves_counters_alone(calls in 0usize..50) {
        let mut client = Client::new();
        for _ in 0..calls {
            client.record_message();
        }
        prop_assert_eq!(client.state().in_count(), 0);
        prop_assert_eq!(client.state().out_count(), 0);
        prop_assert!(!client.is_empty());
    }
}
