use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use postman_client::{retry_any, retry_with_backoff, Error, RetryPolicy};

fn api_err(status: u16) -> Error {
    Error::Api {
        status,
        message: "boom".to_string(),
        retry_after: None,
    }
}

type OpFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Result<u32, Error>> + Send>>;

fn counting_op(calls: &Arc<AtomicU32>, failures_before_success: u32) -> impl FnMut() -> OpFuture {
    let calls = calls.clone();
    move || -> OpFuture {
        let calls = calls.clone();
        Box::pin(async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= failures_before_success {
                Err(api_err(500))
            } else {
                Ok(n)
            }
        })
    }
}

#[tokio::test(start_paused = true)]
async fn success_returns_immediately_without_retry() {
    let calls = Arc::new(AtomicU32::new(0));
    let started = tokio::time::Instant::now();
    let out = retry_with_backoff(
        counting_op(&calls, 0),
        &RetryPolicy::default(),
        retry_any,
        |_, _, _| {},
    )
    .await
    .unwrap();
    assert_eq!(out, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn retries_until_success() {
    let calls = Arc::new(AtomicU32::new(0));
    let out = retry_with_backoff(
        counting_op(&calls, 2),
        &RetryPolicy::default(),
        retry_any,
        |_, _, _| {},
    )
    .await
    .unwrap();
    assert_eq!(out, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn should_retry_veto_raises_original_error_after_one_call() {
    let calls = Arc::new(AtomicU32::new(0));
    let err = retry_with_backoff(
        {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<u32, _>(api_err(400))
                }
            }
        },
        &RetryPolicy::default(),
        |err: &Error| err.is_transient(),
        |_, _, _| {},
    )
    .await
    .unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(matches!(err, Error::Api { status: 400, .. }));
}

#[tokio::test(start_paused = true)]
async fn delays_follow_the_backoff_formula() {
    let calls = Arc::new(AtomicU32::new(0));
    let delays = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let delays = delays.clone();
        move |_attempt: u32, _err: &Error, delay: Duration| {
            delays.lock().unwrap().push(delay);
        }
    };
    let started = tokio::time::Instant::now();
    let err = retry_with_backoff(
        counting_op(&calls, u32::MAX),
        &RetryPolicy::default(),
        retry_any,
        observer,
    )
    .await
    .unwrap_err();

    // initial_delay=1000ms, factor=2: delay before attempt 2 is 1000ms,
    // before attempt 3 is 2000ms.
    assert_eq!(
        *delays.lock().unwrap(),
        vec![Duration::from_millis(1000), Duration::from_millis(2000)]
    );
    assert_eq!(started.elapsed(), Duration::from_millis(3000));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(matches!(err, Error::Api { status: 500, .. }));
}

#[tokio::test(start_paused = true)]
async fn delay_is_capped_at_max_delay() {
    let calls = Arc::new(AtomicU32::new(0));
    let delays = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let delays = delays.clone();
        move |_attempt: u32, _err: &Error, delay: Duration| {
            delays.lock().unwrap().push(delay);
        }
    };
    let policy = RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(1000),
        max_delay: Duration::from_secs(10),
        factor: 100.0,
    };
    let _ = retry_with_backoff(counting_op(&calls, u32::MAX), &policy, retry_any, observer).await;
    assert_eq!(
        *delays.lock().unwrap(),
        vec![Duration::from_millis(1000), Duration::from_secs(10)]
    );
}

#[tokio::test(start_paused = true)]
async fn single_attempt_policy_never_retries() {
    let calls = Arc::new(AtomicU32::new(0));
    let policy = RetryPolicy {
        max_attempts: 1,
        ..RetryPolicy::default()
    };
    let started = tokio::time::Instant::now();
    let err = retry_with_backoff(counting_op(&calls, u32::MAX), &policy, retry_any, |_, _, _| {})
        .await
        .unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(matches!(err, Error::Api { status: 500, .. }));
}

#[tokio::test(start_paused = true)]
async fn server_retry_after_wins_over_computed_backoff() {
    let calls = Arc::new(AtomicU32::new(0));
    let delays = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let delays = delays.clone();
        move |_attempt: u32, _err: &Error, delay: Duration| {
            delays.lock().unwrap().push(delay);
        }
    };
    let op = {
        let calls = calls.clone();
        move || {
            let calls = calls.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n == 1 {
                    Err(Error::Api {
                        status: 429,
                        message: "rate limited".to_string(),
                        retry_after: Some(Duration::from_secs(4)),
                    })
                } else {
                    Ok(n)
                }
            }
        }
    };
    let out = retry_with_backoff(op, &RetryPolicy::default(), retry_any, observer)
        .await
        .unwrap();
    assert_eq!(out, 2);
    assert_eq!(*delays.lock().unwrap(), vec![Duration::from_secs(4)]);
}

#[tokio::test(start_paused = true)]
async fn predicate_sees_every_failure_including_the_last() {
    let calls = Arc::new(AtomicU32::new(0));
    let consults = Arc::new(AtomicU32::new(0));
    let predicate = {
        let consults = consults.clone();
        move |_err: &Error| {
            consults.fetch_add(1, Ordering::SeqCst);
            true
        }
    };
    let _ = retry_with_backoff(
        counting_op(&calls, u32::MAX),
        &RetryPolicy::default(),
        predicate,
        |_, _, _| {},
    )
    .await;
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(consults.load(Ordering::SeqCst), 3);
}
