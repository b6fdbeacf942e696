#[cfg(test)]
mod scheduler {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    use tokio::time;

    use crate::scheduler::{Invalidate, Scheduler};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Counter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Invalidate for Counter {
        fn invalidate(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_second() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.count(), 0);

        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(counter.count(), 2);

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn double_start_ticks_once() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        scheduler.start();
        assert!(scheduler.running());

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(counter.count(), 3);

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_after_stop() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        time::sleep(Duration::from_millis(2500)).await;
        scheduler.stop().await;
        assert!(!scheduler.running());

        let seen = counter.count();
        assert_eq!(seen, 2);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.count(), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.stop().await;
        scheduler.start();
        scheduler.stop().await;
        scheduler.stop().await;

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_after_stop() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        time::sleep(Duration::from_millis(1500)).await;
        scheduler.stop().await;

        scheduler.start();
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(counter.count(), 2);

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn custom_period() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::with_period(&counter, Duration::from_millis(250));

        scheduler.start();
        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(counter.count(), 4);

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn ends_when_target_dropped() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        drop(counter);

        time::sleep(Duration::from_millis(1500)).await;
        assert!(!scheduler.running());

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_scheduler_cancels() {
        let counter = Arc::new(Counter::default());
        let mut scheduler = Scheduler::new(&counter);

        scheduler.start();
        drop(scheduler);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.count(), 0);
    }
}

#[cfg(test)]
mod invalidator {
    use std::time::Duration;

    use tokio::time;

    use crate::scheduler::{Invalidate as _, Invalidator};

    #[tokio::test(start_paused = true)]
    async fn requests_coalesce() {
        let invalidator = Invalidator::default();

        invalidator.invalidate();
        invalidator.invalidate();
        invalidator.invalidated().await;

        let waited = time::timeout(Duration::from_secs(5), invalidator.invalidated()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn take_consumes() {
        let invalidator = Invalidator::default();
        assert!(!invalidator.take());

        invalidator.invalidate();
        assert!(invalidator.take());
        assert!(!invalidator.take());
    }
}
