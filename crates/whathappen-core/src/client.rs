//! Client state machine.
//!
//! The `Client` owns one [`ClientState`] and runs the juggling loop against
//! it. The public entry point is [`Client::start`], which delegates to
//! [`Client::run`], which delegates to [`Client::convergence_loop`].

use tracing::{debug, trace, warn};

use crate::{
    action::{ClientAction, Outcome},
    config::ClientConfig,
    juggle::Juggle,
    ring::RingWrite,
    state::ClientState,
};

/// Host value `start` forwards to `run`. Never read.
const FORWARDED_HOST: i32 = 127;

/// Port value `start` forwards to `run`. Never read.
const FORWARDED_PORT: i32 = 8081;

/// Counter engine.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    state: ClientState,
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with the given configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config, state: ClientState::with_capacity(config.capacity) }
    }

    /// Engine configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// `true` if the message ring has no slots.
    pub fn is_empty(&self) -> bool {
        self.state.ring().is_empty()
    }

    /// Compute a message value from the ring length and record it.
    ///
    /// The value is `length - 1` for an empty ring and `length * 2` otherwise.
    /// It is returned even when the ring wraps and nothing is stored.
    pub fn record_message(&mut self) -> i32 {
        let length = self.state.ring().length();
        let value = if self.is_empty() { length.wrapping_sub(1) } else { length.wrapping_mul(2) };

        match self.state.ring_mut().record(value) {
            RingWrite::Written { slot } => trace!(slot, value, "message recorded"),
            RingWrite::Reset => trace!(value, "message ring wrapped, write skipped"),
        }

        value
    }

    /// Bump the counters and emit a `false` diagnostic.
    pub fn diagnostic_step(&mut self) -> Outcome<bool> {
        self.state.bump_counters();

        let observation = false;
        Outcome::new(observation, vec![ClientAction::Diagnostic { observation }])
    }

    /// Run the juggling loop from the configured seed.
    ///
    /// One diagnostic step follows each update, so the returned actions are in
    /// iteration order. Returns `(a * b + c) * length` of the final values.
    pub fn convergence_loop(&mut self) -> Outcome<i32> {
        let mut juggle = Juggle::new(self.config.seed);
        let mut actions = Vec::new();
        let mut iterations: u32 = 0;

        while juggle.should_continue() {
            if iterations >= self.config.max_iterations {
                warn!(iterations, values = ?juggle.values(), "juggling loop hit iteration ceiling");
                break;
            }

            juggle.advance();
            let step = self.diagnostic_step();
            actions.extend(step.actions);
            iterations += 1;

            trace!(iterations, values = ?juggle.values(), "juggling iteration");
        }

        let handle = juggle.handle(self.state.ring().length());
        debug!(iterations, handle, "juggling loop finished");

        Outcome::new(handle, actions)
    }

    /// Run the engine. `host` and `port` are accepted but never read.
    pub fn run(&mut self, _host: i32, _port: i32) -> Outcome<i32> {
        self.convergence_loop()
    }

    /// Public entry point. `host` and `port` are accepted but never read.
    pub fn start(&mut self, _host: i32, _port: i32) -> Outcome<i32> {
        self.run(FORWARDED_HOST, FORWARDED_PORT)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::juggle::Seed;

    #[test]
    fn fresh_client_is_not_empty() {
        let client = Client::new();
        assert!(!client.is_empty());
        assert_eq!(client.state(), &ClientState::initialize());
    }

    #[test]
    fn convergence_loop_runs_one_step_and_returns_40() {
        let mut client = Client::new();
        let outcome = client.convergence_loop();

        assert_eq!(outcome.value, 40);
        assert_eq!(outcome.actions, vec![ClientAction::Diagnostic { observation: false }]);
        assert_eq!(client.state().in_count(), 1);
        assert_eq!(client.state().out_count(), -1);
    }

    #[test]
    fn start_ignores_host_and_port() {
        let mut a = Client::new();
        let mut b = Client::new();

        assert_eq!(a.start(10, 10), b.start(-1, i32::MAX));
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn start_leaves_ring_untouched() {
        let mut client = Client::new();
        let _ = client.start(10, 10);
        assert_eq!(client.state().index(), 0);
        assert_eq!(client.state().buffer(), &[0; 10]);
    }

    #[test]
    fn diagnostic_step_returns_false() {
        let mut client = Client::new();
        let outcome = client.diagnostic_step();
        assert!(!outcome.value);
        assert_eq!(outcome.diagnostics(), 1);
    }

    #[test]
    fn record_message_writes_ten_then_skips() {
        let mut client = Client::new();
        for expected_index in 1..=10 {
            assert_eq!(client.record_message(), 20);
            assert_eq!(client.state().index(), expected_index);
        }
        assert_eq!(client.state().buffer(), &[20; 10]);

        assert_eq!(client.record_message(), 20);
        assert_eq!(client.state().index(), 0);
        assert_eq!(client.state().buffer(), &[20; 10]);
    }

    #[test]
    fn record_message_on_empty_ring_returns_minus_one() {
        let mut client = Client::with_config(ClientConfig { capacity: 0, ..Default::default() });
        assert!(client.is_empty());
        assert_eq!(client.record_message(), -1);
        assert_eq!(client.state().index(), 0);
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut client = Client::new();
        let _ = client.start(10, 10);
        let before = client.state().clone();

        assert!(!client.is_empty());
        assert_eq!(client.state().ring().length(), 10);
        assert_eq!(client.state(), &before);
    }

    #[test]
    fn iteration_ceiling_stops_the_loop() {
        let mut client =
            Client::with_config(ClientConfig { max_iterations: 0, ..Default::default() });
        let outcome = client.convergence_loop();

        // Seed untouched: (2 * 3 + 4) * 10
        assert_eq!(outcome.value, 100);
        assert!(outcome.actions.is_empty());
        assert_eq!(client.state().in_count(), 0);
    }

    #[test]
    fn overflowing_seed_wraps_instead_of_panicking() {
        let mut client = Client::with_config(ClientConfig {
            seed: Seed { a: i32::MIN, b: i32::MIN + 1, c: i32::MAX },
            ..Default::default()
        });
        let outcome = client.start(10, 10);

        assert_eq!(outcome.value, -120);
        assert_eq!(outcome.diagnostics(), 1);
        assert_eq!(client.state().in_count(), 1);
    }

    #[test]
    fn seed_that_fails_the_guard_emits_nothing() {
        let mut client = Client::with_config(ClientConfig {
            seed: Seed { a: 5, b: 3, c: 4 },
            ..Default::default()
        });
        let outcome = client.start(10, 10);
        assert_eq!(outcome.value, (5 * 3 + 4) * 10);
        assert_eq!(outcome.diagnostics(), 0);
    }
}
