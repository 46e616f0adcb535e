//! Timer behaviour of the text effects and the preloader
//!
//! All tests run on a paused tokio clock, so sleeps resolve instantly
//! and elapsed times are exact.

use std::sync::Arc;
use std::time::Duration;

use codex_core::effects::{drive, Decrypt, Typewriter, DECRYPT_FRAMES, DECRYPT_TICK, TYPEWRITER_TICK};
use codex_core::splash::{run_splash, SplashGate, SPLASH_DURATION};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;

// ============================================================================
// Typewriter
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_typewriter_plays_every_prefix() {
    let text = "KILL ULTRON";
    let mut frames = Vec::new();

    let start = Instant::now();
    let emitted = drive(Typewriter::new(text), TYPEWRITER_TICK, |f| frames.push(f)).await;

    assert_eq!(emitted, text.len());
    assert_eq!(frames.first().map(String::as_str), Some("K"));
    assert_eq!(frames.last().map(String::as_str), Some(text));
    // one tick per character plus the tick that notices it is done
    assert_eq!(start.elapsed(), TYPEWRITER_TICK * (text.len() as u32 + 1));
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_cancelled_mid_line_stops_emitting() {
    let mut frames = Vec::new();

    let result = tokio::time::timeout(
        Duration::from_millis(100),
        drive(Typewriter::new("a rather long transmission"), TYPEWRITER_TICK, |f| {
            frames.push(f)
        }),
    )
    .await;

    assert!(result.is_err(), "drive should still be running at 100ms");
    assert_eq!(frames, vec!["a".to_string(), "a ".to_string()]);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(frames.len(), 2);
}

// ============================================================================
// Decrypt
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_decrypt_resolves_after_bounded_frames() {
    let text = "Adversarial Attacks (Ultron on Steroids)";
    let mut frames = Vec::new();

    let start = Instant::now();
    let emitted = drive(
        Decrypt::with_rng(text, StdRng::seed_from_u64(42)),
        DECRYPT_TICK,
        |f| frames.push(f),
    )
    .await;

    assert_eq!(emitted, DECRYPT_FRAMES + 1);
    assert_eq!(frames.last().map(String::as_str), Some(text));
    assert_eq!(start.elapsed(), DECRYPT_TICK * (DECRYPT_FRAMES as u32 + 1));
}

#[tokio::test(start_paused = true)]
async fn test_aborted_task_fires_no_more_frames() {
    let sink: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let task_sink = sink.clone();

    let handle = tokio::spawn(async move {
        drive(
            Decrypt::with_rng("Prompt Injection (Main Strength)", StdRng::seed_from_u64(3)),
            DECRYPT_TICK,
            move |f| task_sink.lock().push(f),
        )
        .await
    });

    tokio::time::sleep(DECRYPT_TICK * 3 + Duration::from_millis(5)).await;
    handle.abort();
    let err = handle.await.unwrap_err();
    assert!(err.is_cancelled());

    let seen = sink.lock().len();
    assert!(seen > 0 && seen < DECRYPT_FRAMES);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(sink.lock().len(), seen, "no frame may land after teardown");
}

// ============================================================================
// Splash
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_splash_hides_once_after_duration() {
    let mut hidden = 0;
    let start = Instant::now();

    let gate = run_splash(SPLASH_DURATION, SplashGate::new(), || hidden += 1).await;

    assert_eq!(hidden, 1);
    assert!(!gate.is_showing());
    assert_eq!(start.elapsed(), SPLASH_DURATION);

    // Running again on a hidden gate is a no-op
    let gate = run_splash(SPLASH_DURATION, gate, || hidden += 1).await;
    assert_eq!(hidden, 1);
    assert!(!gate.is_showing());
}

#[tokio::test(start_paused = true)]
async fn test_splash_torn_down_early_never_fires() {
    let mut hidden = false;

    let result = tokio::time::timeout(
        Duration::from_millis(1000),
        run_splash(SPLASH_DURATION, SplashGate::new(), || hidden = true),
    )
    .await;

    assert!(result.is_err());
    tokio::time::sleep(SPLASH_DURATION).await;
    assert!(!hidden);
}

#[tokio::test(start_paused = true)]
async fn test_skipped_splash_returns_immediately() {
    let start = Instant::now();
    let gate = run_splash(SPLASH_DURATION, SplashGate::skipped(), || {
        panic!("skipped splash must not notify")
    })
    .await;
    assert!(!gate.is_showing());
    assert_eq!(start.elapsed(), Duration::ZERO);
}
