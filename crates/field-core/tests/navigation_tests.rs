// Host-side tests for debounced section navigation.
// All timing goes through the `*_at` variants so no test sleeps.

use field_core::{
    Direction, NavRejection, NavigationConfig, NavigationController, SectionError, Transition,
};
use rand::prelude::*;
use std::time::{Duration, Instant};

fn controller(count: usize) -> NavigationController {
    NavigationController::new(count, NavigationConfig::default()).expect("non-empty")
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn starts_at_first_section_unlocked() {
    let nav = controller(7);
    assert_eq!(nav.current(), 0);
    assert_eq!(nav.section_count(), 7);
    assert!(!nav.is_locked_at(Instant::now()));
}

#[test]
fn empty_sequence_is_rejected() {
    let result = NavigationController::new(0, NavigationConfig::default());
    assert!(matches!(result, Err(SectionError::Empty)));
}

#[test]
fn default_config_uses_one_second_cooldown() {
    let config = NavigationConfig::default();
    assert_eq!(config.cooldown, ms(1000));
    assert_eq!(config.transition, ms(500));
}

#[test]
fn next_commits_immediately_and_locks() {
    let mut nav = controller(7);
    let view = nav.view();
    let t0 = Instant::now();

    let outcome = nav.request_step_at(Direction::Next, t0);
    assert_eq!(outcome, Ok(Transition { from: 0, to: 1 }));
    // Readers see the new index without waiting for the cool-down
    assert_eq!(view.current(), 1);
    assert!(nav.is_locked_at(t0 + ms(999)));
    assert!(!nav.is_locked_at(t0 + ms(1000)));
}

#[test]
fn previous_at_first_section_is_rejected() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert_eq!(
        nav.request_step_at(Direction::Previous, t0),
        Err(NavRejection::BeforeFirst)
    );
    assert_eq!(nav.current(), 0);
    // A rejected request does not start a cool-down
    assert!(!nav.is_locked_at(t0));
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
}

#[test]
fn next_at_last_section_does_not_wrap() {
    let mut nav = controller(7);
    let mut now = Instant::now();
    for expected in 1..7 {
        assert!(nav.request_step_at(Direction::Next, now).is_ok());
        assert_eq!(nav.current(), expected);
        now += ms(1000);
    }
    assert_eq!(
        nav.request_step_at(Direction::Next, now),
        Err(NavRejection::OutOfRange {
            target: 7,
            count: 7
        })
    );
    assert_eq!(nav.current(), 6);
}

#[test]
fn rapid_double_request_moves_one_section() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    assert_eq!(
        nav.request_step_at(Direction::Next, t0 + ms(10)),
        Err(NavRejection::Locked {
            remaining: ms(990)
        })
    );
    assert_eq!(nav.current(), 1);
}

#[test]
fn request_after_cooldown_is_accepted() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    assert_eq!(
        nav.request_step_at(Direction::Next, t0 + ms(1000)),
        Ok(Transition { from: 1, to: 2 })
    );
}

#[test]
fn rejected_requests_do_not_extend_the_lock() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    assert!(nav.request_step_at(Direction::Next, t0 + ms(900)).is_err());
    // Deadline is still measured from the accepted request
    assert!(nav.request_step_at(Direction::Next, t0 + ms(1000)).is_ok());
    assert_eq!(nav.current(), 2);
}

#[test]
fn accepted_request_resets_the_deadline() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    let t1 = t0 + ms(1500);
    assert!(nav.request_step_at(Direction::Next, t1).is_ok());
    assert!(nav.is_locked_at(t1 + ms(500)));
    assert!(!nav.is_locked_at(t1 + ms(1000)));
}

#[test]
fn request_index_jumps_directly() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert_eq!(
        nav.request_index_at(4, t0),
        Ok(Transition { from: 0, to: 4 })
    );
    assert_eq!(nav.current(), 4);
}

#[test]
fn request_index_rejects_current_and_out_of_range() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert_eq!(nav.request_index_at(0, t0), Err(NavRejection::Unchanged(0)));
    assert_eq!(
        nav.request_index_at(9, t0),
        Err(NavRejection::OutOfRange {
            target: 9,
            count: 7
        })
    );
    assert!(!nav.is_locked_at(t0));
}

#[test]
fn huge_index_reports_the_real_target() {
    let mut nav = controller(7);
    assert_eq!(
        nav.request_index_at(usize::MAX, Instant::now()),
        Err(NavRejection::OutOfRange {
            target: usize::MAX,
            count: 7
        })
    );
    assert_eq!(nav.current(), 0);
}

#[test]
fn random_request_sequences_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for count in 1..10 {
        let mut nav = controller(count);
        let view = nav.view();
        let mut now = Instant::now();
        let mut accepted = 0;
        for _ in 0..2000 {
            // Mix bursts inside the cool-down with gaps longer than it
            now += ms(rng.gen_range(0..1500));
            let outcome = match rng.gen_range(0..3) {
                0 => nav.request_step_at(Direction::Next, now),
                1 => nav.request_step_at(Direction::Previous, now),
                _ => nav.request_index_at(rng.gen_range(0..count + 3), now),
            };
            if let Ok(t) = outcome {
                accepted += 1;
                assert_eq!(t.to, view.current());
                assert_ne!(t.from, t.to);
            }
            assert!(
                view.current() < count,
                "index {} escaped 0..{}",
                view.current(),
                count
            );
        }
        if count > 1 {
            assert!(accepted > 0, "no request accepted for count {}", count);
        }
    }
}

#[test]
fn lock_is_checked_before_the_target() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_index_at(3, t0).is_ok());
    assert!(matches!(
        nav.request_index_at(3, t0 + ms(100)),
        Err(NavRejection::Locked { .. })
    ));
    assert!(matches!(
        nav.request_index_at(99, t0 + ms(100)),
        Err(NavRejection::Locked { .. })
    ));
}

#[test]
fn tick_reports_the_unlock_once() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(!nav.tick(t0));
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    assert!(!nav.tick(t0 + ms(500)));
    assert!(nav.tick(t0 + ms(1000)));
    assert!(!nav.tick(t0 + ms(1016)));
}

#[test]
fn single_section_never_moves() {
    let mut nav = controller(1);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_err());
    assert!(nav.request_step_at(Direction::Previous, t0).is_err());
    assert_eq!(nav.current(), 0);
    assert_eq!(nav.view().progress(), 0.0);
}

#[test]
fn shutdown_rejects_later_requests() {
    let mut nav = controller(7);
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    nav.shutdown();
    assert!(!nav.is_locked_at(t0));
    assert_eq!(
        nav.request_step_at(Direction::Next, t0 + ms(5000)),
        Err(NavRejection::Closed)
    );
    assert_eq!(nav.request_index_at(5, t0 + ms(5000)), Err(NavRejection::Closed));
    assert_eq!(nav.current(), 1);
}

#[test]
fn custom_cooldown_is_honoured() {
    let config = NavigationConfig {
        cooldown: ms(200),
        transition: ms(100),
    };
    let mut nav = NavigationController::new(3, config).expect("non-empty");
    let t0 = Instant::now();
    assert!(nav.request_step_at(Direction::Next, t0).is_ok());
    assert!(nav.request_step_at(Direction::Next, t0 + ms(199)).is_err());
    assert!(nav.request_step_at(Direction::Next, t0 + ms(200)).is_ok());
}

#[test]
fn keys_map_to_directions() {
    assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Next));
    assert_eq!(Direction::from_key("PageDown"), Some(Direction::Next));
    assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Previous));
    assert_eq!(Direction::from_key("PageUp"), Some(Direction::Previous));
    assert_eq!(Direction::from_key("ArrowLeft"), None);
    assert_eq!(Direction::from_key(" "), None);
    assert_eq!(Direction::from_key(""), None);
}

#[test]
fn wheel_sign_selects_direction() {
    assert_eq!(Direction::from_wheel_delta(120.0), Some(Direction::Next));
    assert_eq!(Direction::from_wheel_delta(0.5), Some(Direction::Next));
    assert_eq!(Direction::from_wheel_delta(-3.0), Some(Direction::Previous));
    // Horizontal-only scrolls report zero vertical delta
    assert_eq!(Direction::from_wheel_delta(0.0), None);
}

#[test]
fn rejection_messages_are_readable() {
    let msg = NavRejection::OutOfRange {
        target: 9,
        count: 7,
    }
    .to_string();
    assert_eq!(msg, "section 9 is outside 0..7");
    assert_eq!(
        NavRejection::Closed.to_string(),
        "navigation has been shut down"
    );
}
