#[cfg(test)]
mod dial {
    use std::time::Duration;

    use tokio::time;

    use crate::{
        dial::Dial,
        style::ClockStyle,
        tests::recorder::{close, Recorder},
        time::{Fixed, TimeSample},
    };

    fn dial() -> Dial {
        Dial::new(
            ClockStyle::default(),
            Box::new(Fixed(TimeSample::new(9, 15, 0))),
        )
    }

    #[test]
    fn nothing_drawn_before_sizing() {
        let dial = dial();
        let mut recorder = Recorder::new(100.0);

        assert!(dial.layout().is_none());
        assert_eq!(dial.draw(&mut recorder), None);
        assert!(recorder.commands.is_empty());
    }

    #[test]
    fn resize_caches_layout() {
        let mut dial = dial();

        assert!(dial.resize(200.0));
        assert!(close(dial.layout().unwrap().radius, 100.0));

        assert!(!dial.resize(200.0));
        assert!(dial.resize(80.0));
        assert!(close(dial.layout().unwrap().radius, 40.0));
    }

    #[test]
    fn draws_the_sampled_time() {
        let mut dial = dial();
        dial.resize(100.0);

        let mut recorder = Recorder::new(100.0);
        assert_eq!(dial.draw(&mut recorder), Some(TimeSample::new(9, 15, 0)));
        assert_eq!(recorder.commands.len(), 64);
    }

    #[tokio::test(start_paused = true)]
    async fn detach_drops_pending_redraws() {
        let mut dial = dial();
        let invalidator = dial.invalidator();

        dial.attach();
        assert!(dial.attached());

        time::sleep(Duration::from_millis(1500)).await;
        dial.detach().await;
        assert!(!dial.attached());
        assert!(!invalidator.take());

        time::sleep(Duration::from_secs(5)).await;
        assert!(!invalidator.take());
    }

    #[tokio::test(start_paused = true)]
    async fn attached_dial_invalidates() {
        let mut dial = dial();
        let invalidator = dial.invalidator();

        dial.attach();
        time::timeout(Duration::from_millis(1500), invalidator.invalidated())
            .await
            .unwrap();

        dial.detach().await;
    }
}
